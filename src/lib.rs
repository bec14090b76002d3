//! Skiff - Minimal HTTP/1.1 File Server
//!
//! Core library for the HTTP protocol layer and the built-in routes.

pub mod config;
pub mod http;
pub mod routes;
pub mod server;
