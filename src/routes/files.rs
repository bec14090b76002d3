//! Handlers for the `/files/<name>` routes.
//!
//! Both handlers resolve against the base directory handed to the router.
//! The name from the URL is joined verbatim; traversal outside the base
//! directory is not rejected.

use std::path::Path;
use tracing::{debug, warn};

use crate::http::response::{Response, ResponseBuilder, StatusCode};

/// Reads `name` under the base directory.
///
/// Answers 404 when no directory is configured, the file is absent, the
/// path is a directory, or the read fails for any other reason.
pub async fn read(directory: Option<&Path>, name: &str) -> Response {
    let dir = match directory {
        Some(dir) => dir,
        None => return Response::not_found(),
    };

    let path = dir.join(name);

    match tokio::fs::read(&path).await {
        Ok(contents) => ResponseBuilder::new(StatusCode::Ok)
            .header("Content-Type", "application/octet-stream")
            .body(contents)
            .build(),
        Err(e) => {
            debug!("File read failed for {}: {}", path.display(), e);
            Response::not_found()
        }
    }
}

/// Writes the request body to `name` under the base directory, creating
/// the file or truncating an existing one.
///
/// Answers 404 when no directory is configured. A failed write is logged
/// at warn level but still answers 201.
pub async fn write(directory: Option<&Path>, name: &str, body: &[u8]) -> Response {
    let dir = match directory {
        Some(dir) => dir,
        None => return Response::not_found(),
    };

    let path = dir.join(name);

    if let Err(e) = tokio::fs::write(&path, body).await {
        warn!("File write failed for {}: {}", path.display(), e);
    }

    Response::created()
}
