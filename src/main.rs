use std::process::ExitCode;

use audioscribe::application::services::SessionError;
use audioscribe::infrastructure::observability::{TracingConfig, init_tracing};
use audioscribe::presentation::{Services, Settings, build_session};
use audioscribe::shutdown;

const INTERRUPTED_EXIT_CODE: u8 = 130;

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    dotenvy::dotenv().ok();

    init_tracing(&TracingConfig::default());

    let settings = Settings::from_env()?;
    tracing::debug!(?settings, "Configuration loaded");

    let services = Services::from_settings(&settings)?;
    let (shutdown_handle, shutdown_signal) = shutdown::new_pair();
    let session = build_session(&settings, services, shutdown_signal);

    // First Ctrl-C stops the session; a second one exits outright.
    tokio::spawn(async move {
        shutdown::wait_for_ctrl_c().await;
        shutdown_handle.trigger();
        shutdown::wait_for_ctrl_c().await;
        std::process::exit(i32::from(INTERRUPTED_EXIT_CODE));
    });

    match session.run().await {
        Ok(transcript) => {
            println!("{}", transcript);
            Ok(ExitCode::SUCCESS)
        }
        Err(SessionError::UserCancelled) => {
            eprintln!("Bye!");
            Ok(ExitCode::SUCCESS)
        }
        Err(SessionError::Interrupted) => {
            eprintln!("Interrupted");
            Ok(ExitCode::from(INTERRUPTED_EXIT_CODE))
        }
        Err(e) => Err(e.into()),
    }
}
