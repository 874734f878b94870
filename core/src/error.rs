//! Error types for the message model.
//!
//! # Design
//! Two enums, matching the two halves of the crate. `MessageError` covers
//! eager validation failures: a constructor or `with_*` method either returns
//! a fully valid new value or one of these, never a partially patched
//! instance. `StreamError` covers `BodyStream` operations: `Closed` for any
//! call after `close()`, `Unsupported` for a capability the stream does not
//! have (e.g. writing to a read-only stream), and `Io` for failures of an
//! underlying source.

use thiserror::Error;

/// Validation failures raised by message constructors and `with_*` methods.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MessageError {
    /// The protocol version is not numeric or falls outside [1.0, 2.0].
    #[error("protocol version {0:?} is invalid")]
    InvalidProtocolVersion(String),

    /// The method is not in the validator's verb registry.
    #[error("http method {0:?} is invalid")]
    InvalidMethod(String),

    /// The status code falls outside 100..=599.
    #[error("status code {0} is invalid")]
    InvalidStatusCode(u16),

    /// The header name is rejected by the validator's header-name rule.
    #[error("header name {0:?} is invalid")]
    InvalidHeaderName(String),
}

/// Failures raised by `BodyStream` operations.
#[derive(Debug, Error)]
pub enum StreamError {
    /// The stream was closed; no further operations are possible.
    #[error("stream is closed")]
    Closed,

    /// The stream does not support the requested operation.
    #[error("stream does not support {0}")]
    Unsupported(&'static str),

    /// An underlying I/O operation failed.
    #[error("stream i/o failed: {0}")]
    Io(#[from] std::io::Error),
}
