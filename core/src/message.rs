//! Base contract shared by requests and responses.
//!
//! # Design
//! `MessageParts` bundles what every HTTP message carries: protocol version,
//! header store, body stream, and the validator that vetted them. The
//! `Message` trait supplies the whole accessor and `with_*` surface as
//! provided methods over two hooks (`parts` / `replace_parts`), so `Request`
//! and `Response` only add their own fields.
//!
//! Immutability discipline: every `with_*` method clones the current parts,
//! patches exactly one field, re-validates, and hands the result to
//! `replace_parts` for a fresh instance. The receiver is never touched, so
//! existing references stay valid without locking. The single exception is
//! the body cursor, reachable only through `body_mut` and therefore through
//! an exclusive borrow.

use std::sync::Arc;

use crate::body::BodyStream;
use crate::error::MessageError;
use crate::headers::{HeaderMap, HeaderValues};
use crate::validate::Validator;

/// Protocol version, header store, body, and the rule set that validated
/// them. Shared by `Request` and `Response`.
#[derive(Debug, Clone)]
pub struct MessageParts {
    pub(crate) version: String,
    pub(crate) headers: HeaderMap,
    pub(crate) body: BodyStream,
    pub(crate) validator: Arc<Validator>,
}

impl MessageParts {
    /// Validate the version and every header name, then assemble the parts.
    pub fn new(
        version: impl Into<String>,
        headers: HeaderMap,
        body: BodyStream,
        validator: Arc<Validator>,
    ) -> Result<Self, MessageError> {
        let version = version.into();
        validator.check_protocol_version(&version)?;
        validator.check_header_names(&headers)?;
        Ok(Self {
            version,
            headers,
            body,
            validator,
        })
    }
}

/// Accessor and copy-on-write mutation surface common to `Request` and
/// `Response`.
///
/// Implementors supply the two hooks; everything else is provided. All
/// `with_*` methods return a new instance and leave the receiver unchanged.
pub trait Message: Sized {
    /// The shared parts of this message.
    fn parts(&self) -> &MessageParts;

    /// Exclusive access to the shared parts, for `body_mut` only.
    fn parts_mut(&mut self) -> &mut MessageParts;

    /// A copy of this message with its shared parts swapped out.
    fn replace_parts(&self, parts: MessageParts) -> Self;

    /// HTTP protocol version, e.g. `"1.1"`.
    fn protocol_version(&self) -> &str {
        &self.parts().version
    }

    /// New instance with the given protocol version. Fails if the version is
    /// not numeric or falls outside [1.0, 2.0].
    fn with_protocol_version(&self, version: &str) -> Result<Self, MessageError> {
        let parts = self.parts();
        parts.validator.check_protocol_version(version)?;
        let mut parts = parts.clone();
        parts.version = version.to_string();
        Ok(self.replace_parts(parts))
    }

    /// The full header store, in insertion order under stored casing.
    fn headers(&self) -> &HeaderMap {
        &self.parts().headers
    }

    /// True iff a case-insensitive match for `name` exists.
    fn has_header(&self, name: &str) -> bool {
        self.parts().headers.contains(name)
    }

    /// Values for `name`, matched case-insensitively; empty slice if absent.
    fn header(&self, name: &str) -> &[String] {
        self.parts().headers.get(name)
    }

    /// Values for `name` joined with `,`; empty string if absent.
    fn header_line(&self, name: &str) -> String {
        self.parts().headers.get_line(name)
    }

    /// New instance with the values for `name` replaced. A case-insensitive
    /// match keeps its stored casing. Fails if the validator rejects `name`.
    fn with_header(
        &self,
        name: &str,
        value: impl Into<HeaderValues>,
    ) -> Result<Self, MessageError> {
        let parts = self.parts();
        parts.validator.check_header_name(name)?;
        let mut parts = parts.clone();
        parts.headers.set(name, value);
        Ok(self.replace_parts(parts))
    }

    /// New instance with the value(s) appended to `name`, keeping existing
    /// values. Creates the header if absent. Fails if the validator rejects
    /// `name`.
    fn with_added_header(
        &self,
        name: &str,
        value: impl Into<HeaderValues>,
    ) -> Result<Self, MessageError> {
        let parts = self.parts();
        parts.validator.check_header_name(name)?;
        let mut parts = parts.clone();
        parts.headers.append(name, value);
        Ok(self.replace_parts(parts))
    }

    /// New instance without the case-insensitive match for `name`. Removing
    /// an absent header yields an equivalent instance.
    fn without_header(&self, name: &str) -> Self {
        let mut parts = self.parts().clone();
        parts.headers.remove(name);
        self.replace_parts(parts)
    }

    /// The message body. Use for whole-content reads (`contents`, `size`).
    fn body(&self) -> &BodyStream {
        &self.parts().body
    }

    /// Exclusive handle to the body for cursor-based reads and writes. The
    /// cursor and open flag are the only state a message mutates in place.
    fn body_mut(&mut self) -> &mut BodyStream {
        &mut self.parts_mut().body
    }

    /// New instance carrying the given body stream. The old body is left
    /// with the receiver untouched.
    fn with_body(&self, body: BodyStream) -> Self {
        let mut parts = self.parts().clone();
        parts.body = body;
        self.replace_parts(parts)
    }

    /// The rule set this message validates against; inherited by every
    /// instance its `with_*` methods produce.
    fn validator(&self) -> &Arc<Validator> {
        &self.parts().validator
    }
}
