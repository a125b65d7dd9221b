// src/api/upload.rs
use actix_multipart::Multipart;
use futures::TryStreamExt;

use crate::errors::{PartyError, Result};
use crate::form::FormState;
use crate::models::Attachment;

pub const ATTACHMENT_FIELD: &str = "attachment";

/// Reads the multipart form into the typed-in values and the optional
/// image. Reading stops once `limit` bytes have been received; the values
/// read up to that point are still returned alongside the error.
pub async fn read_form(payload: Multipart, limit: usize) -> (FormState, Result<Option<Attachment>>) {
    let mut state = FormState::default();
    let attachment = read_fields(payload, limit, &mut state).await;
    (state, attachment)
}

async fn read_fields(
    mut payload: Multipart,
    limit: usize,
    state: &mut FormState,
) -> Result<Option<Attachment>> {
    let mut attachment = None;
    let mut received = 0usize;

    while let Some(mut field) = payload
        .try_next()
        .await
        .map_err(|e| PartyError::Upload(e.to_string()))?
    {
        let disposition = field.content_disposition();
        let name = disposition
            .and_then(|cd| cd.get_name())
            .unwrap_or_default()
            .to_string();
        let file_name = disposition
            .and_then(|cd| cd.get_filename())
            .filter(|f| !f.is_empty())
            .map(str::to_string);
        let declared_type = field
            .content_type()
            .map(|m| m.essence_str().to_string());

        let mut bytes = Vec::new();
        while let Some(chunk) = field
            .try_next()
            .await
            .map_err(|e| PartyError::Upload(e.to_string()))?
        {
            received += chunk.len();
            if received > limit {
                return Err(PartyError::Upload(format!(
                    "The upload is larger than {}.",
                    describe_size(limit)
                )));
            }
            bytes.extend_from_slice(&chunk);
        }

        if name == ATTACHMENT_FIELD {
            if bytes.is_empty() && file_name.is_none() {
                continue;
            }
            let mime_type = resolve_mime(declared_type, file_name.as_deref());
            attachment = Some(Attachment {
                file_name,
                mime_type,
                bytes,
            });
        } else {
            let value = String::from_utf8(bytes)
                .map_err(|_| PartyError::Upload(format!("Field '{}' is not valid UTF-8.", name)))?;
            state.set(&name, value);
        }
    }

    Ok(attachment)
}

fn describe_size(bytes: usize) -> String {
    const KB: usize = 1024;
    const MB: usize = 1024 * KB;
    match bytes {
        b if b >= MB && b % MB == 0 => format!("{} MB", b / MB),
        b if b >= MB => format!("{:.1} MB", b as f64 / MB as f64),
        b if b >= KB => format!("{} KB", b / KB),
        b => format!("{} bytes", b),
    }
}

/// Uses the declared content type, falling back to the file extension when
/// the browser only sent a generic one.
fn resolve_mime(declared: Option<String>, file_name: Option<&str>) -> String {
    match declared {
        Some(mime) if mime != "application/octet-stream" => mime,
        _ => file_name
            .map(|f| mime_guess::from_path(f).first_or_octet_stream().to_string())
            .unwrap_or_else(|| "application/octet-stream".to_string()),
    }
}
