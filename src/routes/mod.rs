//! Built-in route handling.
//!
//! This module maps parsed requests onto the server's handlers: the root
//! probe, `/echo/<text>`, `/user-agent`, and the `/files/<name>` pair
//! backed by the configured base directory.

pub mod files;
pub mod router;

pub use router::Router;
