//! Remote feedback API client
//!
//! Endpoints:
//! - `GET /daily?guess=<word>&size=<n>`
//! - `GET /random?guess=<word>&size=<n>&seed=<s>`
//!
//! Both answer with a JSON array of [`FeedbackItem`].

use super::{FeedbackOracle, OracleError, Puzzle};
use crate::core::FeedbackItem;
use reqwest::{Client, Request};
use std::time::Duration;

/// Public Wordle feedback API
pub const DEFAULT_API_URL: &str = "https://wordle.votee.dev:8000";

/// Oracle backed by the remote HTTP API
pub struct HttpOracle {
    client: Client,
    base_url: String,
}

impl HttpOracle {
    /// Create a client for `base_url` with a per-request timeout
    ///
    /// # Errors
    ///
    /// Returns `OracleError::Transport` if the HTTP client cannot be built.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, OracleError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| OracleError::Transport(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn build_request(
        &self,
        word: &str,
        word_length: usize,
        puzzle: Puzzle,
    ) -> Result<Request, OracleError> {
        let size = word_length.to_string();
        let builder = match puzzle {
            Puzzle::Daily => self
                .client
                .get(format!("{}/daily", self.base_url))
                .query(&[("guess", word), ("size", size.as_str())]),
            Puzzle::Random { seed } => {
                let seed = seed.to_string();
                self.client
                    .get(format!("{}/random", self.base_url))
                    .query(&[("guess", word), ("size", size.as_str()), ("seed", seed.as_str())])
            }
        };

        builder
            .build()
            .map_err(|e| OracleError::Transport(e.to_string()))
    }

    async fn send(
        &self,
        word: &str,
        word_length: usize,
        puzzle: Puzzle,
    ) -> Result<Vec<FeedbackItem>, OracleError> {
        let request = self.build_request(word, word_length, puzzle)?;
        tracing::debug!(url = %request.url(), "sending guess");

        let response = self
            .client
            .execute(request)
            .await
            .map_err(|e| OracleError::Transport(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| OracleError::Transport(e.to_string()))?;

        if !status.is_success() {
            return Err(OracleError::Remote {
                status: status.as_u16(),
                message: body,
            });
        }

        decode_feedback(&body)
    }
}

/// Parse a feedback response body
fn decode_feedback(body: &str) -> Result<Vec<FeedbackItem>, OracleError> {
    serde_json::from_str(body).map_err(|e| OracleError::Decode(e.to_string()))
}

impl FeedbackOracle for HttpOracle {
    fn name(&self) -> &str {
        "http"
    }

    async fn guess_daily(
        &self,
        word: &str,
        word_length: usize,
    ) -> Result<Vec<FeedbackItem>, OracleError> {
        self.send(word, word_length, Puzzle::Daily).await
    }

    async fn guess_random(
        &self,
        word: &str,
        word_length: usize,
        seed: u64,
    ) -> Result<Vec<FeedbackItem>, OracleError> {
        self.send(word, word_length, Puzzle::Random { seed }).await
    }
}
