//! Method and path dispatch.

use std::path::PathBuf;
use tracing::warn;

use crate::http::encoding;
use crate::http::request::{Method, Request};
use crate::http::response::{Response, ResponseBuilder, StatusCode};
use crate::routes::files;

/// Maps requests to the built-in handlers.
///
/// Routing is evaluated per method: GET knows `/`, `/echo/<text>`,
/// `/user-agent`, and `/files/<name>`; POST knows `/files/<name>`; any
/// other method answers 405. Unmatched paths answer 404.
#[derive(Clone, Debug)]
pub struct Router {
    directory: Option<PathBuf>,
}

impl Router {
    /// Creates a router serving `/files/...` out of `directory`. With
    /// `None`, every file route answers 404.
    pub fn new(directory: Option<PathBuf>) -> Self {
        Self { directory }
    }

    pub async fn dispatch(&self, req: &Request) -> Response {
        match &req.method {
            Method::GET => self.dispatch_get(req).await,
            Method::POST => self.dispatch_post(req).await,
            Method::Other(_) => Response::method_not_allowed(),
        }
    }

    async fn dispatch_get(&self, req: &Request) -> Response {
        if req.target == "/" {
            return ResponseBuilder::new(StatusCode::Ok).build();
        }

        if let Some(text) = req.target.strip_prefix("/echo/") {
            return echo(req, text);
        }

        if req.target == "/user-agent" {
            return user_agent(req);
        }

        if let Some(name) = req.target.strip_prefix("/files/") {
            return files::read(self.directory.as_deref(), name).await;
        }

        Response::not_found()
    }

    async fn dispatch_post(&self, req: &Request) -> Response {
        if let Some(name) = req.target.strip_prefix("/files/") {
            return files::write(self.directory.as_deref(), name, &req.body).await;
        }

        Response::not_found()
    }
}

/// Echoes the path remainder after `/echo/` verbatim; a `/` inside the
/// text passes through untouched. The body is gzip-compressed when the
/// client accepts that coding, and Content-Length then reflects the
/// compressed size.
fn echo(req: &Request, text: &str) -> Response {
    if req.accepts_encoding(encoding::GZIP) {
        match encoding::gzip(text.as_bytes()) {
            Ok(compressed) => {
                return ResponseBuilder::new(StatusCode::Ok)
                    .header("Content-Encoding", "gzip")
                    .header("Content-Type", "text/plain")
                    .body(compressed)
                    .build();
            }
            Err(e) => {
                warn!("Gzip compression failed, sending plain body: {}", e);
            }
        }
    }

    ResponseBuilder::new(StatusCode::Ok)
        .header("Content-Type", "text/plain")
        .body(text.as_bytes().to_vec())
        .build()
}

/// Reflects the request's User-Agent header, defaulting to an empty body.
fn user_agent(req: &Request) -> Response {
    ResponseBuilder::new(StatusCode::Ok)
        .header("Content-Type", "text/plain")
        .body(req.user_agent().as_bytes().to_vec())
        .build()
}
