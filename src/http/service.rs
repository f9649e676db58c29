//! # HTTP Service
//!
//! Manages dispatch of the validated input text to the classification
//! endpoint and delivery of outcomes back to the event loop.
//!
//! Requests run on spawned tasks and report through a bounded channel that
//! the event loop polls, so the loop never blocks on the network. There is
//! no cancellation, de-duplication, or timeout: if two submissions overlap,
//! outcomes apply in the order they resolve (last-to-resolve wins), and an
//! unresponsive endpoint is waited on indefinitely.

use anyhow::Result;
use reqwest::header::CONTENT_TYPE;
use serde_json::Value;
use tokio::sync::mpsc;

use crate::form::error::SubmitError;

/// Message type for async submission outcome handling
#[derive(Debug)]
pub enum OutcomeMessage {
    /// The endpoint returned success and a decodable JSON body
    Success { body: Value },
    /// The request failed in transport, returned a non-success status, or
    /// returned a body that was not JSON
    Failed { error: SubmitError },
}

/// Service for dispatching submissions to the classification endpoint
pub struct HttpService {
    /// The underlying HTTP client
    client: reqwest::Client,
    /// Endpoint URL the form posts to
    endpoint: String,
    /// Channel for receiving async submission outcomes
    outcome_receiver: mpsc::Receiver<OutcomeMessage>,
    /// Channel sender for async tasks to report outcomes
    outcome_sender: mpsc::Sender<OutcomeMessage>,
}

impl HttpService {
    /// Create a new HttpService posting to the given endpoint
    pub fn new(endpoint: impl Into<String>) -> Result<Self> {
        let endpoint = endpoint.into();
        tracing::debug!("Creating HttpService for endpoint '{endpoint}'");
        let (outcome_sender, outcome_receiver) = mpsc::channel(10);

        // No request timeout: the form waits for the transport to settle
        // or fail on its own.
        let client = reqwest::Client::builder().build()?;

        Ok(Self {
            client,
            endpoint,
            outcome_receiver,
            outcome_sender,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Execute one submission: POST the raw input text with a JSON
    /// content-type declaration and decode the response body.
    ///
    /// The body is sent verbatim; validation happens before this call.
    pub async fn post(&self, body: String) -> Result<Value, SubmitError> {
        let response = self
            .client
            .post(&self.endpoint)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(|e| SubmitError::request(format!("API request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SubmitError::request(format!(
                "API request failed with status {status}"
            )));
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| SubmitError::request(format!("Invalid response body: {e}")))
    }

    /// Check for a pending submission outcome (non-blocking)
    pub fn poll_outcome(&mut self) -> Option<OutcomeMessage> {
        self.outcome_receiver.try_recv().ok()
    }

    /// Dispatch a submission asynchronously.
    ///
    /// Spawns a tokio task that executes the request and sends the result
    /// back through the internal channel for the event loop to poll.
    pub fn execute_async(&self, body: String) {
        let client = self.client.clone();
        let endpoint = self.endpoint.clone();
        let outcome_sender = self.outcome_sender.clone();

        tokio::spawn(async move {
            tracing::info!("Dispatching submission to '{endpoint}'");

            let sent = client
                .post(&endpoint)
                .header(CONTENT_TYPE, "application/json")
                .body(body)
                .send()
                .await;

            let outcome = match sent {
                Ok(response) if response.status().is_success() => {
                    match response.json::<Value>().await {
                        Ok(body) => {
                            tracing::info!("Submission succeeded");
                            OutcomeMessage::Success { body }
                        }
                        Err(e) => {
                            tracing::error!("Response body was not JSON: {e}");
                            OutcomeMessage::Failed {
                                error: SubmitError::request(format!("Invalid response body: {e}")),
                            }
                        }
                    }
                }
                Ok(response) => {
                    let status = response.status();
                    tracing::error!("Submission rejected with status {status}");
                    OutcomeMessage::Failed {
                        error: SubmitError::request(format!(
                            "API request failed with status {status}"
                        )),
                    }
                }
                Err(e) => {
                    tracing::error!("Submission failed: {e}");
                    OutcomeMessage::Failed {
                        error: SubmitError::request(format!("API request failed: {e}")),
                    }
                }
            };

            // Ignore send errors (receiver might have been dropped)
            let _ = outcome_sender.send(outcome).await;
        });
    }
}
