use axum::{
    extract::{Multipart, State},
    Json,
};
use bytes::Bytes;
use tracing::debug;

use crate::errors::AppError;
use crate::parsing::resume::{parse_document, ParsedResume};
use crate::state::AppState;

/// Multipart field holding the resume document.
pub const FILE_FIELD: &str = "file";

/// An uploaded document plus any extra text fields sent alongside it.
#[derive(Debug, Default)]
pub struct Upload {
    pub bytes: Bytes,
    pub filename: Option<String>,
    pub content_type: Option<String>,
    pub job_description: Option<String>,
}

/// Reads the `file` field and the optional `job_description` field.
pub async fn read_upload(mut multipart: Multipart) -> Result<Upload, AppError> {
    let mut upload = Upload::default();
    let mut has_file = false;

    // Multipart failures keep their own status (413 once the body limit is hit).
    while let Some(field) = multipart.next_field().await? {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some(FILE_FIELD) => {
                upload.filename = field.file_name().map(str::to_string);
                upload.content_type = field.content_type().map(str::to_string);
                upload.bytes = field.bytes().await?;
                has_file = true;
            }
            Some("job_description") => {
                upload.job_description = Some(field.text().await?);
            }
            other => debug!(field = ?other, "Ignoring multipart field"),
        }
    }

    if !has_file {
        return Err(AppError::Validation(format!(
            "Missing '{FILE_FIELD}' field in upload"
        )));
    }
    Ok(upload)
}

/// POST /parse_resume
pub async fn handle_parse_resume(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<ParsedResume>, AppError> {
    let upload = read_upload(multipart).await?;
    let parsed = parse_document(
        upload.bytes,
        upload.filename.as_deref(),
        upload.content_type.as_deref(),
        &state.catalog,
    )
    .await?;
    Ok(Json(parsed))
}
