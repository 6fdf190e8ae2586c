//! Code verification over HTTP.

use reqwest::header::CONTENT_TYPE;
use signin::Credentials;

#[derive(Debug, thiserror::Error)]
pub enum VerifyError {
    /// The endpoint answered with a non-success status.
    #[error("verification rejected with status {status}")]
    Rejected { status: u16 },
    /// The request never got an answer.
    #[error("verification request failed: {0}")]
    Network(#[from] reqwest::Error),
    #[error("could not encode credentials: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Checks a phone number and one-time code with the backend.
#[allow(async_fn_in_trait)]
pub trait Verifier {
    async fn verify(&self, credentials: &Credentials) -> Result<(), VerifyError>;
}

/// [`Verifier`] posting JSON to a fixed URL.
#[derive(Clone, Debug)]
pub struct HttpVerifier {
    client: reqwest::Client,
    url: String,
}

impl HttpVerifier {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: url.into(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl Verifier for HttpVerifier {
    async fn verify(&self, credentials: &Credentials) -> Result<(), VerifyError> {
        let body = serde_json::to_string(credentials)?;

        let response = self
            .client
            .post(&self.url)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            tracing::debug!(%status, "code verified");
            Ok(())
        } else {
            Err(VerifyError::Rejected {
                status: status.as_u16(),
            })
        }
    }
}
