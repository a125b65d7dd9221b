// src/backend/mod.rs

use async_trait::async_trait;

use crate::errors::Result;
use crate::models::{Envelope, SubmissionPayload};

pub mod remote;

pub use remote::RemoteDataService;

/// The spreadsheet-backed service that stores submissions and computes
/// the leaderboards. Everything the page shows comes through this trait.
#[async_trait]
pub trait DataService: Send + Sync {
    /// Runs the named read query (`GET ?action=<action>`).
    async fn get(&self, action: &str) -> Result<Envelope>;

    /// Sends one submission (`POST` with a JSON body).
    async fn post(&self, payload: &SubmissionPayload) -> Result<Envelope>;
}
