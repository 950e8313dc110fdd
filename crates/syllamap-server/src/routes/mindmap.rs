//! Mind-map routes: syllabus upload and parse, text-to-mind-map generation,
//! and study-resource lookup.

use std::path::Path;
use std::sync::Arc;

use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use serde::Deserialize;
use tracing::{info, warn};

use syllamap_ingest::{extract, file, link_resources, Topic};

use crate::state::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/parse-syllabus", post(parse_syllabus))
        .route("/generate-mindmap", post(generate_mindmap))
        .route("/find-references", post(find_references))
}

/// POST /api/ai/parse-syllabus — multipart syllabus upload → mind map.
async fn parse_syllabus(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> Response {
    while let Ok(Some(field)) = multipart.next_field().await {
        let filename = match field.file_name() {
            Some(name) => name.to_string(),
            None => continue,
        };
        let safe_filename = sanitize_filename(&filename);

        let bytes = match field.bytes().await {
            Ok(bytes) => bytes,
            Err(e) => {
                return error_response(
                    StatusCode::BAD_REQUEST,
                    "UPLOAD_READ_FAILED",
                    format!("Failed to read upload: {}", e),
                );
            }
        };

        let saved_path = match save_upload(&state, &safe_filename, &bytes) {
            Ok(path) => path,
            Err(e) => {
                return error_response(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "UPLOAD_WRITE_FAILED",
                    format!("Failed to store upload: {}", e),
                );
            }
        };

        let text = match file::extract_text(&saved_path) {
            Ok(Some(text)) => text,
            Ok(None) => {
                warn!("No text extracted from {}", saved_path.display());
                return error_response(
                    StatusCode::UNPROCESSABLE_ENTITY,
                    "NO_TEXT",
                    "No text could be extracted from the uploaded file",
                );
            }
            Err(e) => {
                return error_response(StatusCode::BAD_REQUEST, "EXTRACTION_FAILED", e.to_string());
            }
        };

        let result = extract(&text);
        info!(
            "Parsed {} into {} topics",
            safe_filename,
            result.topics.len()
        );

        return (
            StatusCode::OK,
            Json(serde_json::json!({
                "success": true,
                "filename": safe_filename,
                "mindmap": result,
            })),
        )
            .into_response();
    }

    error_response(
        StatusCode::BAD_REQUEST,
        "NO_FILE",
        "No file field in the upload",
    )
}

#[derive(Deserialize)]
struct GenerateRequest {
    text: String,
}

/// POST /api/ai/generate-mindmap — raw syllabus text → mind map.
async fn generate_mindmap(Json(req): Json<GenerateRequest>) -> Json<serde_json::Value> {
    let result = extract(&req.text);
    Json(serde_json::json!({
        "success": true,
        "mindmap": result,
    }))
}

#[derive(Deserialize)]
struct ReferencesRequest {
    topics: Vec<Topic>,
}

/// POST /api/ai/find-references — topics → fixed study-link triples.
async fn find_references(Json(req): Json<ReferencesRequest>) -> Json<serde_json::Value> {
    let resources = link_resources(&req.topics);
    Json(serde_json::json!({
        "success": true,
        "resources": resources,
    }))
}

/// Store an upload under the data directory, renaming on collision.
fn save_upload(
    state: &AppState,
    filename: &str,
    bytes: &[u8],
) -> std::io::Result<std::path::PathBuf> {
    let uploads = &state.config.data_paths.uploads;
    let mut path = uploads.join(filename);

    if path.exists() {
        let stem = Path::new(filename)
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("file");
        let ext = Path::new(filename)
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("");
        let ts = chrono::Utc::now().format("%Y%m%d%H%M%S");
        let renamed = if ext.is_empty() {
            format!("{}_{}", stem, ts)
        } else {
            format!("{}_{}.{}", stem, ts, ext)
        };
        path = uploads.join(renamed);
    }

    std::fs::write(&path, bytes)?;
    Ok(path)
}

/// Sanitize a filename to prevent path traversal.
fn sanitize_filename(name: &str) -> String {
    let name = name.replace('/', "").replace('\\', "").replace("..", "");

    Path::new(&name)
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("unnamed")
        .to_string()
}

fn error_response(status: StatusCode, code: &str, message: impl Into<String>) -> Response {
    (
        status,
        Json(serde_json::json!({
            "success": false,
            "error": { "code": code, "message": message.into() },
        })),
    )
        .into_response()
}
