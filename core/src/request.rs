//! Request message: the base contract plus method and target URI.
//!
//! # Design
//! The method is validated against the verb registry (case-insensitively)
//! but stored exactly as supplied. The URI is deliberately opaque: the
//! original contract applies no structural validation to it, so neither does
//! this one.

use std::sync::Arc;

use crate::body::BodyStream;
use crate::error::MessageError;
use crate::headers::HeaderMap;
use crate::message::{Message, MessageParts};
use crate::validate::Validator;

/// Immutable HTTP request value.
#[derive(Debug, Clone)]
pub struct Request {
    parts: MessageParts,
    method: String,
    uri: String,
}

impl Request {
    /// Construct a request validated against the default strict registries.
    pub fn new(
        version: impl Into<String>,
        method: impl Into<String>,
        uri: impl Into<String>,
        headers: HeaderMap,
        body: BodyStream,
    ) -> Result<Self, MessageError> {
        Self::with_validator(Arc::new(Validator::default()), version, method, uri, headers, body)
    }

    /// Construct a request validated against the given rule set. The rule
    /// set is carried along and applied by every `with_*` method.
    pub fn with_validator(
        validator: Arc<Validator>,
        version: impl Into<String>,
        method: impl Into<String>,
        uri: impl Into<String>,
        headers: HeaderMap,
        body: BodyStream,
    ) -> Result<Self, MessageError> {
        let method = method.into();
        validator.check_method(&method)?;
        let parts = MessageParts::new(version, headers, body, validator)?;
        Ok(Self {
            parts,
            method,
            uri: uri.into(),
        })
    }

    /// HTTP method, exactly as supplied at construction.
    pub fn method(&self) -> &str {
        &self.method
    }

    /// New request with the given method. Fails if the method is outside
    /// the verb registry (comparison is case-insensitive).
    pub fn with_method(&self, method: &str) -> Result<Self, MessageError> {
        self.parts.validator.check_method(method)?;
        Ok(Self {
            parts: self.parts.clone(),
            method: method.to_string(),
            uri: self.uri.clone(),
        })
    }

    /// Target URI. Opaque: no structural validation is applied.
    pub fn uri(&self) -> &str {
        &self.uri
    }

    /// New request with the given target URI, unvalidated.
    pub fn with_uri(&self, uri: impl Into<String>) -> Self {
        Self {
            parts: self.parts.clone(),
            method: self.method.clone(),
            uri: uri.into(),
        }
    }
}

impl Message for Request {
    fn parts(&self) -> &MessageParts {
        &self.parts
    }

    fn parts_mut(&mut self) -> &mut MessageParts {
        &mut self.parts
    }

    fn replace_parts(&self, parts: MessageParts) -> Self {
        Self {
            parts,
            method: self.method.clone(),
            uri: self.uri.clone(),
        }
    }
}
