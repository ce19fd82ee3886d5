use axum::Router;
use axum::response::IntoResponse;
use axum::routing::get;
use tokio::net::TcpListener;
use tokio::sync::oneshot;

use audioscribe::application::ports::{TranscriptFetchError, TranscriptFetcher};
use audioscribe::domain::TranscriptParseError;
use audioscribe::infrastructure::transcription::HttpTranscriptFetcher;

async fn start_mock_result_server(
    response_status: u16,
    response_body: &'static str,
) -> (String, oneshot::Sender<()>) {
    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

    let app = Router::new().route(
        "/transcripts/result.json",
        get(move || async move {
            let status = axum::http::StatusCode::from_u16(response_status).unwrap();
            (status, response_body).into_response()
        }),
    );

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let uri = format!("http://{}/transcripts/result.json", addr);

    tokio::spawn(async move {
        axum::serve(listener, app)
            .with_graceful_shutdown(async {
                shutdown_rx.await.ok();
            })
            .await
            .ok();
    });

    (uri, shutdown_tx)
}

#[tokio::test]
async fn given_result_document_when_fetching_then_returns_first_transcript() {
    let body = r#"{"results":{"transcripts":[{"transcript":"hola mundo"}]}}"#;
    let (uri, shutdown_tx) = start_mock_result_server(200, body).await;

    let result = HttpTranscriptFetcher::new().fetch(&uri).await;

    assert_eq!(result.unwrap().as_str(), "hola mundo");
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_expired_presigned_uri_when_fetching_then_returns_status_error() {
    let body = "<Error><Code>AccessDenied</Code></Error>";
    let (uri, shutdown_tx) = start_mock_result_server(403, body).await;

    let result = HttpTranscriptFetcher::new().fetch(&uri).await;

    match result {
        Err(TranscriptFetchError::Status { status, body }) => {
            assert_eq!(status, 403);
            assert!(body.contains("AccessDenied"));
        }
        other => panic!("expected status error, got {:?}", other),
    }
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_document_without_transcripts_when_fetching_then_returns_parse_error() {
    let body = r#"{"results":{"transcripts":[]}}"#;
    let (uri, shutdown_tx) = start_mock_result_server(200, body).await;

    let result = HttpTranscriptFetcher::new().fetch(&uri).await;

    assert!(matches!(
        result,
        Err(TranscriptFetchError::Parse(TranscriptParseError::Empty))
    ));
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_unreachable_host_when_fetching_then_returns_request_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let result = HttpTranscriptFetcher::new()
        .fetch(&format!("http://{}/transcripts/result.json", addr))
        .await;

    assert!(matches!(result, Err(TranscriptFetchError::RequestFailed(_))));
}
