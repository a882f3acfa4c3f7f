//! Shared frontend utilities for API access, configuration, errors, and build
//! metadata. Centralizing the HTTP helpers keeps network behavior consistent
//! (timeouts, error shaping) and avoids duplicated request setup in features
//! and routes.

pub(crate) mod api;
pub(crate) mod build_info;
pub(crate) mod config;
pub(crate) mod errors;

#[allow(unused_imports)]
pub(crate) use errors::AppError;
