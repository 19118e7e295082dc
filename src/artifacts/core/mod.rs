//! Shared infrastructure
//!
//! - `error`: typed errors callers need to tell apart
//! - `logger`: status log and non-fatal error channel

pub mod error;
pub mod logger;
