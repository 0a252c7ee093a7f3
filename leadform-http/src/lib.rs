//! HTTP submitter for leadform.
//!
//! Posts the completed answers as a flat JSON object to a fixed endpoint.
//! Delivery is fire-and-forget: [`HttpSubmitter::submit`] spawns the request
//! on a tokio runtime and returns immediately. Transport errors and non-2xx
//! responses are logged and otherwise dropped; there is no retry.

use leadform_types::{Answers, Submitter};
use reqwest::StatusCode;
use tokio::{runtime::Handle, task::JoinHandle};
use tracing::{error, info};

/// Where completed applications are sent.
pub const DEFAULT_ENDPOINT: &str = "https://eo3oi83n1j77wgp.m.pipedream.net";

/// Error type for a single delivery attempt.
#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    /// The request could not be sent or the connection failed.
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The endpoint answered with a non-success status.
    #[error("Endpoint answered with status {0}")]
    Status(StatusCode),
}

/// Submits answers with a JSON POST.
#[derive(Debug, Clone)]
pub struct HttpSubmitter {
    client: reqwest::Client,
    endpoint: String,
    runtime: Handle,
}

impl HttpSubmitter {
    /// Create a submitter posting to [`DEFAULT_ENDPOINT`], spawning requests on `runtime`.
    pub fn new(runtime: Handle) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            runtime,
        }
    }

    /// Post to a different endpoint.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// The endpoint answers are posted to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Post `answers` once and report how it went.
    pub async fn send(&self, answers: &Answers) -> Result<(), SubmitError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(answers)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SubmitError::Status(status));
        }
        Ok(())
    }

    /// Post `answers` in the background, logging the outcome.
    ///
    /// The returned handle may be dropped; the request still runs.
    pub fn spawn(&self, answers: &Answers) -> JoinHandle<()> {
        let submitter = self.clone();
        let answers = answers.clone();
        self.runtime.spawn(async move {
            match submitter.send(&answers).await {
                Ok(()) => info!(endpoint = %submitter.endpoint, "answers submitted"),
                Err(err) => error!(
                    endpoint = %submitter.endpoint,
                    error = %err,
                    "cannot send answers to endpoint"
                ),
            }
        })
    }
}

impl Submitter for HttpSubmitter {
    fn submit(&self, answers: &Answers) {
        drop(self.spawn(answers));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_types() {
        let err = SubmitError::Status(StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            err.to_string(),
            "Endpoint answered with status 500 Internal Server Error"
        );
    }

    #[tokio::test]
    async fn endpoint_defaults_and_overrides() {
        let submitter = HttpSubmitter::new(Handle::current());
        assert_eq!(submitter.endpoint(), DEFAULT_ENDPOINT);

        let submitter = submitter.with_endpoint("http://localhost:1234/hook");
        assert_eq!(submitter.endpoint(), "http://localhost:1234/hook");
    }
}
