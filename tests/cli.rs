use std::process::Output;

use tokio::process::Command;
use wiremock::MockServer;

async fn run(server: &MockServer, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_tracksuit-funnel-export"))
        .args(args)
        .env("TRACKSUIT_API_BASE_URL", server.uri())
        .env_remove("TRACKSUIT_API_TOKEN")
        .env_remove("RUST_LOG")
        .output()
        .await
        .unwrap()
}

async fn assert_no_requests(server: &MockServer) {
    let received = server.received_requests().await.unwrap();
    assert!(received.is_empty(), "unexpected requests: {:?}", received);
}

#[tokio::test]
async fn missing_dest_dir_exits_before_any_request() {
    let server = MockServer::start().await;
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing");

    let output = run(
        &server,
        &["--token", "eyJ.a.b", "-o", missing.to_str().unwrap()],
    )
    .await;

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Directory does not exist"), "stderr: {}", stderr);
    assert!(output.stdout.is_empty());
    assert_no_requests(&server).await;
}

#[tokio::test]
async fn missing_token_exits_before_any_request() {
    let server = MockServer::start().await;

    let output = run(&server, &["--quiet"]).await;

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Must provide --token"), "stderr: {}", stderr);
    assert_no_requests(&server).await;
}

#[tokio::test]
async fn malformed_token_exits_before_any_request() {
    let server = MockServer::start().await;

    let output = run(&server, &["--token", "not-a-jwt"]).await;

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Token does not look like a JWT"), "stderr: {}", stderr);
    assert_no_requests(&server).await;
}
