pub mod app;
pub mod config;

pub use app::{Services, build_session};
pub use config::{ConfigError, ScaffoldConfig, Settings};
