//! Immutable HTTP message model following RFC 7230/7231 semantics.
//!
//! # Overview
//! Models requests and responses as plain immutable values: protocol
//! version, a case-insensitive multi-valued header store that preserves
//! insertion order and original casing, and a body stream. No sockets, no
//! parsing, no I/O; a transport layer consumes the accessor surface to emit
//! wire-format messages.
//!
//! # Design
//! - Every `with_*` method clones current state, patches one field,
//!   re-validates, and returns a new instance; the receiver never changes.
//! - Validation is eager and all-or-nothing, driven by an injectable
//!   `Validator` so integrators can swap the strict default registries for
//!   their own (or for a plain syntax check).
//! - `BodyStream` is the single stateful component (cursor, open flag) and
//!   requires exclusive access for reads and writes.

pub mod body;
pub mod error;
pub mod headers;
pub mod message;
pub mod request;
pub mod response;
pub mod validate;

pub use body::{BodyStream, StreamMode};
pub use error::{MessageError, StreamError};
pub use headers::{HeaderMap, HeaderValues};
pub use message::{Message, MessageParts};
pub use request::Request;
pub use response::Response;
pub use validate::{Validator, ValidatorConfig};
