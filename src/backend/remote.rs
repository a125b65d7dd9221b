// src/backend/remote.rs

use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use std::time::Instant;

use crate::backend::DataService;
use crate::errors::{PartyError, Result};
use crate::models::{Envelope, SubmissionPayload};

/// HTTP client for the deployed backend script.
pub struct RemoteDataService {
    client: Client,
    base_url: String,
}

impl RemoteDataService {
    /// Creates a new `RemoteDataService`.
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl DataService for RemoteDataService {
    async fn get(&self, action: &str) -> Result<Envelope> {
        log::info!("📡 GET {} action={}", self.base_url, action);
        let start = Instant::now();

        let resp = self
            .client
            .get(&self.base_url)
            .query(&[("action", action)])
            .send()
            .await?;

        log::debug!("📥 action={} answered {} ({}ms)", action, resp.status(), start.elapsed().as_millis());
        read_envelope(resp).await
    }

    async fn post(&self, payload: &SubmissionPayload) -> Result<Envelope> {
        log::info!("📡 POST {} (mission: {})", self.base_url, payload.mission);
        let start = Instant::now();

        let resp = self.client.post(&self.base_url).json(payload).send().await?;

        log::debug!("📥 submission answered {} ({}ms)", resp.status(), start.elapsed().as_millis());
        read_envelope(resp).await
    }
}

async fn read_envelope(resp: Response) -> Result<Envelope> {
    let status = resp.status();
    if !status.is_success() {
        let body = resp
            .text()
            .await
            .unwrap_or_else(|_| "Could not read error body".to_string());
        return envelope_from_reply(status, &body);
    }

    let text = resp.text().await?;
    envelope_from_reply(status, &text)
}

/// Turns a status and body into an envelope. Any non-2xx status is an
/// `ApiError`, whatever the body says.
pub fn envelope_from_reply(status: StatusCode, body: &str) -> Result<Envelope> {
    if !status.is_success() {
        return Err(PartyError::ApiError {
            status: status.as_u16(),
            body: body.to_string(),
        });
    }
    parse_envelope(body)
}

/// Parses a response body into an envelope, failing on anything that is
/// not JSON.
pub fn parse_envelope(body: &str) -> Result<Envelope> {
    let value: serde_json::Value = serde_json::from_str(body)?;
    Ok(Envelope::from_value(value))
}
