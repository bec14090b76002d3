//! Response body compression.
//!
//! Only gzip is offered; the router applies it when content negotiation
//! selects it, and the Content-Length of the response is computed from the
//! compressed bytes.

use flate2::Compression;
use flate2::write::GzEncoder;
use std::io::Write;

/// The single content coding this server negotiates.
pub const GZIP: &str = "gzip";

/// Compresses `data` with gzip at the default level.
pub fn gzip(data: &[u8]) -> std::io::Result<Vec<u8>> {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(data)?;
    encoder.finish()
}
