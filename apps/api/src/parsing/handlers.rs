use axum::{
    extract::{multipart::MultipartError, Multipart, State},
    http::StatusCode,
    Json,
};
use bytes::Bytes;
use serde::Deserialize;
use tracing::{info, warn};

use crate::errors::AppError;
use crate::parsing::document::{extract_text, DocumentKind};
use crate::parsing::{parse_profile, ParsedProfile};
use crate::state::AppState;

const UPLOAD_FIELD: &str = "file";

#[derive(Debug, Deserialize)]
pub struct ParseTextRequest {
    pub text: String,
    #[serde(default = "default_text_filename")]
    pub filename: String,
}

fn default_text_filename() -> String {
    "resume.txt".to_string()
}

/// POST /api/v1/resume/parse
/// Multipart upload with the document in the `file` field.
pub async fn handle_parse_upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ParsedProfile>, AppError> {
    let mut upload: Option<(String, Bytes)> = None;
    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        if field.name() != Some(UPLOAD_FIELD) {
            continue;
        }
        let filename = field.file_name().unwrap_or_default().to_string();
        let bytes = field.bytes().await.map_err(multipart_error)?;
        upload = Some((filename, bytes));
        break;
    }

    let (filename, bytes) = upload.ok_or_else(|| {
        AppError::Validation(format!("Missing multipart field '{UPLOAD_FIELD}'"))
    })?;
    check_size(bytes.len(), state.config.max_upload_bytes)?;
    info!("Parsing upload {filename:?} ({} bytes)", bytes.len());

    let reference = state.reference.clone();
    let profile = run_parser(move || {
        let text = extract_text(DocumentKind::from_filename(&filename), &bytes);
        parse_profile(&text, &filename, &reference.aliases)
    })
    .await;
    Ok(Json(profile))
}

/// POST /api/v1/resume/parse-text
/// Same pipeline for callers that already hold the plain text.
pub async fn handle_parse_text(
    State(state): State<AppState>,
    Json(req): Json<ParseTextRequest>,
) -> Result<Json<ParsedProfile>, AppError> {
    check_size(req.text.len(), state.config.max_upload_bytes)?;

    let reference = state.reference.clone();
    let profile =
        run_parser(move || parse_profile(&req.text, &req.filename, &reference.aliases)).await;
    Ok(Json(profile))
}

/// Extraction is CPU-bound and a malformed PDF can panic inside the decoder; both stay off
/// the async workers, and a failed task reports the empty profile.
async fn run_parser<F>(parse: F) -> ParsedProfile
where
    F: FnOnce() -> ParsedProfile + Send + 'static,
{
    tokio::task::spawn_blocking(parse)
        .await
        .unwrap_or_else(|e| {
            warn!("Parser task failed: {e}");
            ParsedProfile::empty()
        })
}

fn check_size(len: usize, max: usize) -> Result<(), AppError> {
    if len > max {
        return Err(AppError::PayloadTooLarge(format!(
            "Document is {len} bytes; the limit is {max} bytes"
        )));
    }
    Ok(())
}

fn multipart_error(err: MultipartError) -> AppError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge(err.body_text())
    } else {
        AppError::Validation(err.body_text())
    }
}
