/**
 * Ingest API Client
 *
 * HTTP client for the data endpoints. The queue and the UI only see the
 * `IngestApi` trait, so tests can substitute a scripted implementation.
 */

use futures_util::future::BoxFuture;
use reqwest::Client;
use thiserror::Error;

use crate::egui_app::config::Config;
use crate::shared::api::{ADD_DATA_PATH, CLEANUP_DATA_PATH, LIST_DATA_PATH};
use crate::shared::{AddDataRequest, ErrorResponse, MessageResponse, Record, Submission};

/// Errors raised while talking to the server
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The server answered with a non-2xx status
    #[error("request failed with status {status}: {message}")]
    Status { status: u16, message: String },
}

/// Operations the client performs against the ingest service
pub trait IngestApi: Send + Sync {
    /// `POST /api/add-data`
    fn add_data<'a>(&'a self, submission: &'a Submission) -> BoxFuture<'a, Result<MessageResponse, ClientError>>;

    /// `GET /api/cleanup-data`
    fn cleanup(&self) -> BoxFuture<'_, Result<MessageResponse, ClientError>>;
}

/// `IngestApi` over HTTP
#[derive(Debug, Clone)]
pub struct HttpApiClient {
    config: Config,
    client: Client,
}

impl HttpApiClient {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            client: Client::new(),
        }
    }

    /// `GET /api/data`
    pub async fn list_data(&self) -> Result<Vec<Record>, ClientError> {
        let url = self.config.api_url(LIST_DATA_PATH);
        let response = self.client.get(&url).send().await?;
        let response = check_status(response).await?;
        Ok(response.json().await?)
    }
}

impl IngestApi for HttpApiClient {
    fn add_data<'a>(&'a self, submission: &'a Submission) -> BoxFuture<'a, Result<MessageResponse, ClientError>> {
        Box::pin(async move {
            let url = self.config.api_url(ADD_DATA_PATH);
            tracing::debug!("[Queue] POST {} {}", url, submission.to_json());

            let response = self
                .client
                .post(&url)
                .json(&AddDataRequest::from(submission))
                .send()
                .await?;

            let response = check_status(response).await?;
            Ok(response.json().await?)
        })
    }

    fn cleanup(&self) -> BoxFuture<'_, Result<MessageResponse, ClientError>> {
        Box::pin(async move {
            let url = self.config.api_url(CLEANUP_DATA_PATH);
            tracing::debug!("[Cleanup] GET {}", url);

            let response = self.client.get(&url).send().await?;
            let response = check_status(response).await?;
            Ok(response.json().await?)
        })
    }
}

/// Turn a non-2xx response into `ClientError::Status`
///
/// The server's `{"error": ...}` body is used as the message when present.
async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, ClientError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<ErrorResponse>(&body)
        .map(|e| e.error)
        .unwrap_or_else(|_| if body.is_empty() { status.to_string() } else { body });

    Err(ClientError::Status {
        status: status.as_u16(),
        message,
    })
}
