// src/models.rs
use base64::{Engine as _, engine::general_purpose::STANDARD};
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const UNKNOWN_BACKEND_ERROR: &str = "unknown error from backend";

/// The `{status, data|message}` wrapper returned by every backend call.
#[derive(Debug, Clone, PartialEq)]
pub struct Envelope {
    pub status: Option<String>,
    pub data: Value,
    pub message: Option<String>,
}

impl Envelope {
    /// Reads an envelope out of any JSON value. Anything that is not an
    /// object, or has no `status`, is treated as a non-success envelope.
    pub fn from_value(value: Value) -> Self {
        let status = value
            .get("status")
            .and_then(|s| s.as_str())
            .map(str::to_string);
        let message = value.get("message").and_then(|m| match m {
            Value::Null => None,
            Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        });
        let data = value.get("data").cloned().unwrap_or(Value::Null);
        Self { status, data, message }
    }

    pub fn is_success(&self) -> bool {
        self.status.as_deref() == Some("success")
    }

    /// The backend's message, or the generic fallback.
    pub fn error_message(&self) -> String {
        self.message
            .clone()
            .unwrap_or_else(|| UNKNOWN_BACKEND_ERROR.to_string())
    }
}

/// Outcome of a read against the backend, as handed to the page.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum FetchResult {
    Success { data: Value },
    Error { message: String },
}

impl FetchResult {
    pub fn is_success(&self) -> bool {
        matches!(self, FetchResult::Success { .. })
    }
}

/// One entry of the `top_students` action. Spreadsheet cells may carry the
/// count as a number or as text, so it is kept as sent.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct TopStudent {
    pub student: String,
    #[serde(default)]
    pub count: Value,
}

impl TopStudent {
    /// The participation count as it should read on the page.
    pub fn count_label(&self) -> String {
        match &self.count {
            Value::Number(n) => match (n.as_i64(), n.as_f64()) {
                (Some(i), _) => i.to_string(),
                (None, Some(f)) if f.fract() == 0.0 && f.abs() < 1e15 => format!("{}", f as i64),
                _ => n.to_string(),
            },
            Value::String(s) => s.trim().to_string(),
            Value::Null => "0".to_string(),
            other => other.to_string(),
        }
    }
}

/// An uploaded proof image.
#[derive(Debug, Clone, PartialEq)]
pub struct Attachment {
    pub file_name: Option<String>,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

impl Attachment {
    /// Encodes the image as `data:<mime>;base64,<bytes>`.
    pub fn to_data_url(&self) -> String {
        format!("data:{};base64,{}", self.mime_type, STANDARD.encode(&self.bytes))
    }
}

/// A validated mission completion record.
#[derive(Debug, Clone, PartialEq)]
pub struct Submission {
    pub grade: u8,
    pub class_value: u8,
    pub num: u8,
    pub name: String,
    pub mission: String,
    pub attachment: Option<Attachment>,
}

/// JSON body POSTed to the backend.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionPayload {
    pub grade: u8,
    pub class_value: u8,
    pub num: u8,
    pub name: String,
    pub mission: String,
    pub file_data_url: Option<String>,
}

impl From<&Submission> for SubmissionPayload {
    fn from(submission: &Submission) -> Self {
        Self {
            grade: submission.grade,
            class_value: submission.class_value,
            num: submission.num,
            name: submission.name.clone(),
            mission: submission.mission.clone(),
            file_data_url: submission.attachment.as_ref().map(Attachment::to_data_url),
        }
    }
}
