//! Echo domain: reflects posted JSON back to the caller.
//!
//! The payload is an opaque `serde_json::Value`; no schema is applied and
//! the value is returned exactly as decoded.

pub mod data;

pub use data::{echo, status, EchoError, EchoResponse, EchoStatus};
