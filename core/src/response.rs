//! Response message: the base contract plus status code and reason phrase.
//!
//! # Design
//! The status code is validated into 100..=599. The reason phrase is
//! free-form by contract: any string, including the empty string, is
//! accepted unchecked.

use std::sync::Arc;

use crate::body::BodyStream;
use crate::error::MessageError;
use crate::headers::HeaderMap;
use crate::message::{Message, MessageParts};
use crate::validate::Validator;

/// Immutable HTTP response value.
#[derive(Debug, Clone)]
pub struct Response {
    parts: MessageParts,
    status_code: u16,
    reason_phrase: String,
}

impl Response {
    /// Construct a response validated against the default strict registries.
    pub fn new(
        version: impl Into<String>,
        status_code: u16,
        reason_phrase: impl Into<String>,
        headers: HeaderMap,
        body: BodyStream,
    ) -> Result<Self, MessageError> {
        Self::with_validator(
            Arc::new(Validator::default()),
            version,
            status_code,
            reason_phrase,
            headers,
            body,
        )
    }

    /// Construct a response validated against the given rule set. The rule
    /// set is carried along and applied by every `with_*` method.
    pub fn with_validator(
        validator: Arc<Validator>,
        version: impl Into<String>,
        status_code: u16,
        reason_phrase: impl Into<String>,
        headers: HeaderMap,
        body: BodyStream,
    ) -> Result<Self, MessageError> {
        validator.check_status_code(status_code)?;
        let parts = MessageParts::new(version, headers, body, validator)?;
        Ok(Self {
            parts,
            status_code,
            reason_phrase: reason_phrase.into(),
        })
    }

    /// Numeric status code.
    pub fn status_code(&self) -> u16 {
        self.status_code
    }

    /// New response with the given status code. Passing `None` for the
    /// reason keeps the current phrase; `Some` replaces it. Fails if the
    /// code is outside 100..=599.
    pub fn with_status(
        &self,
        status_code: u16,
        reason_phrase: Option<&str>,
    ) -> Result<Self, MessageError> {
        self.parts.validator.check_status_code(status_code)?;
        Ok(Self {
            parts: self.parts.clone(),
            status_code,
            reason_phrase: reason_phrase
                .map(|r| r.to_string())
                .unwrap_or_else(|| self.reason_phrase.clone()),
        })
    }

    /// Reason phrase. Free-form; may be empty.
    pub fn reason_phrase(&self) -> &str {
        &self.reason_phrase
    }
}

impl Message for Response {
    fn parts(&self) -> &MessageParts {
        &self.parts
    }

    fn parts_mut(&mut self) -> &mut MessageParts {
        &mut self.parts
    }

    fn replace_parts(&self, parts: MessageParts) -> Self {
        Self {
            parts,
            status_code: self.status_code,
            reason_phrase: self.reason_phrase.clone(),
        }
    }
}
