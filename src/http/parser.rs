use crate::http::request::{Method, Request};
use std::collections::HashMap;

#[derive(Debug)]
pub enum ParseError {
    /// The buffered bytes do not yet hold a complete request.
    Incomplete,
    /// The request line held fewer than a method token and a target token.
    InvalidRequestLine,
    /// A Content-Length value that is not a non-negative integer.
    InvalidContentLength,
    /// Header bytes that are not valid UTF-8.
    InvalidEncoding,
    /// The stream ended in the middle of a request.
    TruncatedRequest,
}

/// Tries to parse one request from the bytes received so far.
///
/// Returns the request plus the number of bytes it consumed; pipelined
/// leftovers stay in the buffer. `Ok(None)` means the peer sent a bare
/// empty line instead of a request line and the connection is done.
pub fn parse_request(buf: &[u8]) -> Result<Option<(Request, usize)>, ParseError> {
    if buf.starts_with(b"\r\n") {
        return Ok(None);
    }

    // Look for header/body separator
    let headers_end = find_headers_end(buf).ok_or(ParseError::Incomplete)?;
    let header_bytes = &buf[..headers_end];
    let body_bytes = &buf[headers_end + 4..];

    let headers_str =
        std::str::from_utf8(header_bytes).map_err(|_| ParseError::InvalidEncoding)?;

    let mut lines = headers_str.split("\r\n");

    // Request line: split on single spaces. The third token (the HTTP
    // version) is neither required nor validated.
    let request_line = lines.next().ok_or(ParseError::InvalidRequestLine)?;
    let mut parts = request_line.split(' ');

    let method_token = parts.next().ok_or(ParseError::InvalidRequestLine)?;
    let target = parts.next().ok_or(ParseError::InvalidRequestLine)?;

    let method = Method::from_token(method_token);

    // Headers: keys lowercased, values trimmed, first occurrence wins on
    // duplicates. Lines without a colon are consumed and skipped so the
    // stream stays aligned.
    let mut headers = HashMap::new();

    for line in lines {
        if line.is_empty() {
            continue;
        }

        if let Some((key, value)) = line.split_once(':') {
            headers
                .entry(key.trim().to_ascii_lowercase())
                .or_insert_with(|| value.trim().to_string());
        }
    }

    // Body
    let content_length = headers
        .get("content-length")
        .map(|v| {
            v.parse::<usize>()
                .map_err(|_| ParseError::InvalidContentLength)
        })
        .transpose()?
        .unwrap_or(0);

    if body_bytes.len() < content_length {
        return Err(ParseError::Incomplete);
    }

    let body = body_bytes[..content_length].to_vec();

    let request = Request {
        method,
        target: target.to_string(),
        headers,
        body,
    };

    let total_consumed = headers_end + 4 + content_length;
    Ok(Some((request, total_consumed)))
}

fn find_headers_end(buf: &[u8]) -> Option<usize> {
    buf.windows(4)
        .position(|w| w == b"\r\n\r\n")
}
