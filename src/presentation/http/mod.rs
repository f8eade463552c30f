//! HTTP Layer
//!
//! Router, handlers and extractors for the JSON API.

pub mod extractors;
pub mod handlers;
pub mod routes;
