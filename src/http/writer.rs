use tokio::io::AsyncWriteExt;
use tokio::net::TcpStream;

use crate::http::response::Response;

const HTTP_VERSION: &str = "HTTP/1.1";

fn serialize_response(resp: &Response) -> Vec<u8> {
    let mut buf = Vec::new();

    // Status line
    let status_line = format!(
        "{} {} {}\r\n",
        HTTP_VERSION,
        resp.status.as_u16(),
        resp.status.reason_phrase()
    );
    buf.extend_from_slice(status_line.as_bytes());

    // Headers, in insertion order
    for (k, v) in &resp.headers {
        buf.extend_from_slice(k.as_bytes());
        buf.extend_from_slice(b": ");
        buf.extend_from_slice(v.as_bytes());
        buf.extend_from_slice(b"\r\n");
    }

    // Header/body separator
    buf.extend_from_slice(b"\r\n");

    // Body
    buf.extend_from_slice(&resp.body);

    buf
}

pub struct ResponseWriter {
    buffer: Vec<u8>,
    written: usize,
}

impl ResponseWriter {
    pub fn new(response: &Response) -> Self {
        Self {
            buffer: serialize_response(response),
            written: 0,
        }
    }

    pub async fn write_to_stream(
        &mut self,
        stream: &mut TcpStream,
    ) -> anyhow::Result<()> {
        while self.written < self.buffer.len() {
            let n = stream
                .write(&self.buffer[self.written..])
                .await?;

            if n == 0 {
                return Err(anyhow::anyhow!("connection closed while writing"));
            }

            self.written += n;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::response::{ResponseBuilder, StatusCode};

    #[test]
    fn serialize_status_line_and_framing() {
        let resp = ResponseBuilder::new(StatusCode::Ok)
            .header("Content-Type", "text/plain")
            .body(b"abc".to_vec())
            .build();

        let bytes = serialize_response(&resp);
        let text = String::from_utf8(bytes).unwrap();

        assert_eq!(
            text,
            "HTTP/1.1 200 OK\r\nContent-Type: text/plain\r\nContent-Length: 3\r\n\r\nabc"
        );
    }

    #[test]
    fn serialize_preserves_header_order() {
        let resp = ResponseBuilder::new(StatusCode::Ok)
            .header("Content-Encoding", "gzip")
            .header("Content-Type", "text/plain")
            .body(vec![1, 2, 3, 4])
            .build();

        let bytes = serialize_response(&resp);
        let head = String::from_utf8_lossy(&bytes);

        let encoding_at = head.find("Content-Encoding").unwrap();
        let type_at = head.find("Content-Type").unwrap();
        let length_at = head.find("Content-Length").unwrap();
        assert!(encoding_at < type_at);
        assert!(type_at < length_at);
    }

    #[test]
    fn serialize_empty_body_keeps_zero_length() {
        let resp = ResponseBuilder::new(StatusCode::NotFound).build();
        let bytes = serialize_response(&resp);
        let text = String::from_utf8(bytes).unwrap();

        assert_eq!(text, "HTTP/1.1 404 Not Found\r\nContent-Length: 0\r\n\r\n");
    }
}
