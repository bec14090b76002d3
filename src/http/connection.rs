use bytes::{Buf, BytesMut};
use tokio::io::AsyncReadExt;
use tokio::net::TcpStream;
use tracing::{info, warn};

use crate::http::parser::{ParseError, parse_request};
use crate::http::request::Request;
use crate::http::response::{Response, StatusCode};
use crate::http::writer::ResponseWriter;
use crate::routes::Router;

pub struct Connection {
    stream: TcpStream,
    buffer: BytesMut,
    router: Router,
    state: ConnectionState,
}

pub enum ConnectionState {
    Reading,
    Processing(Request),
    Writing(ResponseWriter, bool), // bool = keep_alive?
    Closed,
}

// What the read half produced for the state machine.
enum ReadOutcome {
    /// A complete request is ready for dispatch.
    Request(Request),
    /// The peer is done: the stream closed cleanly, or it sent a bare
    /// empty line instead of a request line. No response is owed.
    Closed,
    /// The bytes on the wire were not a usable request.
    Malformed(ParseError),
}

impl Connection {
    pub fn new(stream: TcpStream, router: Router) -> Self {
        Self {
            stream,
            buffer: BytesMut::with_capacity(4096),
            router,
            state: ConnectionState::Reading,
        }
    }

    pub async fn run(&mut self) -> anyhow::Result<()> {
        loop {
            match &mut self.state {
                ConnectionState::Reading => {
                    match self.read_request().await? {
                        ReadOutcome::Request(req) => {
                            self.state = ConnectionState::Processing(req);
                        }
                        ReadOutcome::Closed => {
                            self.state = ConnectionState::Closed;
                        }
                        ReadOutcome::Malformed(err) => {
                            // Best-effort client error, then close
                            warn!("Rejecting malformed request: {:?}", err);
                            let response = Response::bad_request();
                            let writer = ResponseWriter::new(&response);
                            self.state = ConnectionState::Writing(writer, false);
                        }
                    }
                }

                ConnectionState::Processing(req) => {
                    let mut response = self.router.dispatch(req).await;

                    // A 405 terminates the connection no matter what the
                    // Connection header said.
                    let keep_alive = req.keep_alive()
                        && response.status != StatusCode::MethodNotAllowed;

                    if !req.keep_alive() {
                        // Echo the requested close back on the response
                        response
                            .headers
                            .push(("Connection".to_string(), "close".to_string()));
                    }

                    info!(
                        method = ?req.method,
                        target = %req.target,
                        status = response.status.as_u16(),
                        "Handled request"
                    );

                    let writer = ResponseWriter::new(&response);
                    self.state = ConnectionState::Writing(writer, keep_alive);
                }

                ConnectionState::Writing(writer, keep_alive) => {
                    writer.write_to_stream(&mut self.stream).await?;

                    if *keep_alive {
                        self.state = ConnectionState::Reading; // go back for next request
                    } else {
                        self.state = ConnectionState::Closed;
                    }
                }

                ConnectionState::Closed => {
                    break;
                }
            }
        }

        Ok(())
    }

    async fn read_request(&mut self) -> anyhow::Result<ReadOutcome> {
        loop {
            // Try parsing whatever we already have
            match parse_request(&self.buffer) {
                Ok(Some((request, consumed))) => {
                    // Drop consumed bytes; pipelined leftovers stay put
                    self.buffer.advance(consumed);
                    return Ok(ReadOutcome::Request(request));
                }

                Ok(None) => {
                    return Ok(ReadOutcome::Closed);
                }

                Err(ParseError::Incomplete) => {
                    // Need more data → fall through to read
                }

                Err(e) => {
                    return Ok(ReadOutcome::Malformed(e));
                }
            }

            // Read more data
            let n = self.stream.read_buf(&mut self.buffer).await?;

            if n == 0 {
                if self.buffer.is_empty() {
                    // Client closed between requests
                    return Ok(ReadOutcome::Closed);
                }

                // Closed mid-request: what is buffered can never complete
                return Ok(ReadOutcome::Malformed(ParseError::TruncatedRequest));
            }
        }
    }
}
