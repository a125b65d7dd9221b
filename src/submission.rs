// src/submission.rs
use crate::backend::DataService;
use crate::errors::ErrorKind;
use crate::fetch::FetchCache;
use crate::models::{Submission, SubmissionPayload};

pub const SUBMITTING: &str = "Submitting, please wait...";

/// A status line shown to the user after an interaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Info(String),
    Success(String),
    Error(String),
}

/// What happened to a submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Stored by the backend. Every cached read is now stale.
    Accepted,
    /// Refused or lost. The form should be shown again as typed.
    Failed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitReport {
    pub outcome: SubmitOutcome,
    pub notices: Vec<Notice>,
}

impl SubmitReport {
    pub fn accepted(&self) -> bool {
        self.outcome == SubmitOutcome::Accepted
    }

    /// Notices that still hold once the request has finished. The
    /// "submitting" line only matters while the request is in flight.
    pub fn lasting_notices(&self) -> Vec<Notice> {
        self.notices
            .iter()
            .filter(|n| !matches!(n, Notice::Info(_)))
            .cloned()
            .collect()
    }
}

/// Sends `submission` to the backend.
///
/// On success the whole `cache` is cleared so the next render reads fresh
/// data. Failures leave the cache alone and are never retried.
pub async fn submit(
    service: &dyn DataService,
    cache: &mut FetchCache,
    submission: &Submission,
) -> SubmitReport {
    let payload = SubmissionPayload::from(submission);
    let mut notices = vec![Notice::Info(SUBMITTING.to_string())];

    log::info!(
        "🎯 Submission from grade {} class {} no. {} for mission '{}'",
        submission.grade,
        submission.class_value,
        submission.num,
        submission.mission
    );

    let outcome = match service.post(&payload).await {
        Ok(envelope) if envelope.is_success() => {
            let message = envelope.message.unwrap_or_default();
            log::info!("✅ Submission stored: {}", message);
            notices.push(Notice::Success(format!("✅ {}", message)));
            cache.clear();
            SubmitOutcome::Accepted
        }
        Ok(envelope) => {
            let message = envelope.error_message();
            log::error!("❌ Backend refused submission: {}", message);
            notices.push(Notice::Error(format!("❌ Submission failed: {}", message)));
            SubmitOutcome::Failed
        }
        Err(e) => {
            log::error!("❌ Submission request failed: {}", e);
            let text = match e.kind() {
                ErrorKind::MalformedResponse => {
                    "❌ The API response is not valid JSON. Check the backend settings.".to_string()
                }
                _ => format!("❌ API communication error during submission: {}", e),
            };
            notices.push(Notice::Error(text));
            SubmitOutcome::Failed
        }
    };

    SubmitReport { outcome, notices }
}
