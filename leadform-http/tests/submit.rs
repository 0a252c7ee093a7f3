//! Delivery tests against a local mock endpoint

use std::time::Duration;

use leadform::{Advance, Answers, Step, StepCatalog, WizardController};
use leadform_http::{HttpSubmitter, SubmitError};
use mockito::{Matcher, Server};
use serde_json::json;
use tokio::runtime::Handle;

fn answers() -> Answers {
    let mut answers = Answers::new();
    answers.insert("fname", "Ada");
    answers.insert("goals", vec!["build-a-network", "get-promoted"]);
    answers
}

#[tokio::test]
async fn test_posts_flat_json_object() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/")
        .match_header("content-type", "application/json")
        .match_body(Matcher::Json(json!({
            "fname": "Ada",
            "goals": ["build-a-network", "get-promoted"],
        })))
        .with_status(200)
        .create_async()
        .await;

    let submitter = HttpSubmitter::new(Handle::current()).with_endpoint(server.url());
    submitter.send(&answers()).await.unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn test_error_status_is_reported() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", "/")
        .with_status(500)
        .create_async()
        .await;

    let submitter = HttpSubmitter::new(Handle::current()).with_endpoint(server.url());
    let err = submitter.send(&answers()).await.unwrap_err();

    assert!(matches!(err, SubmitError::Status(status) if status.as_u16() == 500));
}

#[tokio::test]
async fn test_unreachable_endpoint_is_reported() {
    let submitter =
        HttpSubmitter::new(Handle::current()).with_endpoint("http://127.0.0.1:9/unreachable");
    let err = submitter.send(&answers()).await.unwrap_err();

    assert!(matches!(err, SubmitError::Transport(_)));
}

#[tokio::test]
async fn test_background_failure_is_swallowed() {
    let submitter =
        HttpSubmitter::new(Handle::current()).with_endpoint("http://127.0.0.1:9/unreachable");

    submitter.spawn(&answers()).await.unwrap();
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_wizard_completes_although_endpoint_fails() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/")
        .match_body(Matcher::Json(json!({
            "fname": "Ada",
            "email": "ada@example.com",
        })))
        .with_status(503)
        .expect(1)
        .create_async()
        .await;

    let catalog = StepCatalog::new(vec![
        Step::information("Welcome"),
        Step::text("fname", "First name?"),
        Step::email("email", "Email, [fname]?"),
    ])
    .unwrap();
    let submitter = HttpSubmitter::new(Handle::current()).with_endpoint(server.url());
    let mut wizard = WizardController::new(catalog, submitter);

    assert_eq!(wizard.advance(), Advance::Moved);
    wizard.set_text("Ada");
    assert_eq!(wizard.advance(), Advance::Moved);
    wizard.set_text("ada@example.com");
    assert_eq!(wizard.advance(), Advance::Completed);
    assert!(wizard.is_completed());

    for _ in 0..100 {
        if mock.matched_async().await {
            break;
        }
        tokio::time::sleep(Duration::from_millis(20)).await;
    }
    mock.assert_async().await;
}
