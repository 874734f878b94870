//! Shared validation rules for message fields.
//!
//! # Design
//! The rule set is data, not constants baked into the message types: a
//! `Validator` holds the verb registry and the header-name rule, and is
//! injected into every message at construction so tests and integrators can
//! substitute their own. `Validator::default()` reproduces the historical
//! strict registries (the eight RFC 7231 verbs and a closed header-name
//! whitelist, so even a syntactically valid name like `X-Request-Id` is
//! rejected). `Validator::permissive()` keeps the verb registry but relaxes
//! header names to an RFC 7230 token-syntax check. `ValidatorConfig` is the
//! serde-friendly shape for loading replacement registries from
//! configuration.
//!
//! Validation is eager and all-or-nothing: each check either passes or
//! returns a `MessageError`, and callers run every check before exposing any
//! new state.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::MessageError;
use crate::headers::HeaderMap;

/// The closed verb registry: RFC 7231 request methods. `PATCH` is absent,
/// a known limitation of the strict default.
pub const DEFAULT_METHODS: [&str; 8] = [
    "GET", "HEAD", "POST", "PUT", "DELETE", "CONNECT", "OPTIONS", "TRACE",
];

/// The closed header-name registry used by the strict default rule.
pub const DEFAULT_HEADER_NAMES: [&str; 59] = [
    "Accept",
    "Accept-Charset",
    "Accept-Encoding",
    "Accept-Language",
    "Accept-Ranges",
    "Access-Control-Allow-Credentials",
    "Access-Control-Allow-Headers",
    "Access-Control-Allow-Methods",
    "Access-Control-Allow-Origin",
    "Access-Control-Expose-Headers",
    "Access-Control-Max-Age",
    "Access-Control-Request-Headers",
    "Access-Control-Request-Method",
    "Age",
    "Cache-Control",
    "Connection",
    "Content-Disposition",
    "Content-Encoding",
    "Content-Language",
    "Content-Length",
    "Content-Location",
    "Content-Security-Policy",
    "Content-Type",
    "Cookie",
    "Cookie2",
    "DNT",
    "Date",
    "ETag",
    "Expires",
    "From",
    "Host",
    "If-Match",
    "If-Modified-Since",
    "If-None-Match",
    "If-Range",
    "If-Unmodified-Since",
    "Keep-Alive",
    "Last-Modified",
    "Location",
    "Origin",
    "Pragma",
    "Referer",
    "Referrer-Policy",
    "Retry-After",
    "Server",
    "Set-Cookie",
    "Set-Cookie2",
    "Strict-Transport-Security",
    "TE",
    "Tk",
    "Trailer",
    "Transfer-Encoding",
    "User-Agent",
    "Vary",
    "Via",
    "Warning",
    "X-Content-Type-Options",
    "X-DNS-Prefetch-Control",
    "X-Frame-Options",
];

/// How header names are judged.
#[derive(Debug, Clone, PartialEq, Eq)]
enum HeaderNameRule {
    /// Closed whitelist of lowercased names.
    Registry(HashSet<String>),
    /// RFC 7230 token syntax: any non-empty run of tchars.
    Token,
}

/// Serde-friendly registry description for building a `Validator` from
/// configuration. `allowed_headers: None` selects the token-syntax rule.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidatorConfig {
    pub methods: Vec<String>,
    pub allowed_headers: Option<Vec<String>>,
}

/// Injectable rule set checked by message constructors and `with_*` methods.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Validator {
    /// Uppercased allowed methods.
    methods: HashSet<String>,
    header_rule: HeaderNameRule,
}

impl Default for Validator {
    fn default() -> Self {
        Self::from_config(ValidatorConfig {
            methods: DEFAULT_METHODS.iter().map(|m| m.to_string()).collect(),
            allowed_headers: Some(
                DEFAULT_HEADER_NAMES.iter().map(|h| h.to_string()).collect(),
            ),
        })
    }
}

impl Validator {
    /// Default verb registry with header names checked for token syntax
    /// instead of registry membership.
    pub fn permissive() -> Self {
        Self::from_config(ValidatorConfig {
            methods: DEFAULT_METHODS.iter().map(|m| m.to_string()).collect(),
            allowed_headers: None,
        })
    }

    /// Build a validator from configuration data. Method comparison is
    /// case-insensitive; registry header names match case-insensitively.
    pub fn from_config(config: ValidatorConfig) -> Self {
        let methods = config
            .methods
            .iter()
            .map(|m| m.to_ascii_uppercase())
            .collect();
        let header_rule = match config.allowed_headers {
            Some(names) => HeaderNameRule::Registry(
                names.iter().map(|n| n.to_ascii_lowercase()).collect(),
            ),
            None => HeaderNameRule::Token,
        };
        Self {
            methods,
            header_rule,
        }
    }

    /// Version must be numeric and within [1.0, 2.0].
    pub fn check_protocol_version(&self, version: &str) -> Result<(), MessageError> {
        match version.parse::<f64>() {
            Ok(v) if (1.0..=2.0).contains(&v) => Ok(()),
            _ => Err(MessageError::InvalidProtocolVersion(version.to_string())),
        }
    }

    /// Method must be in the verb registry, compared case-insensitively.
    pub fn check_method(&self, method: &str) -> Result<(), MessageError> {
        if self.methods.contains(&method.to_ascii_uppercase()) {
            Ok(())
        } else {
            Err(MessageError::InvalidMethod(method.to_string()))
        }
    }

    /// Status code must be within 100..=599.
    pub fn check_status_code(&self, code: u16) -> Result<(), MessageError> {
        if (100..=599).contains(&code) {
            Ok(())
        } else {
            Err(MessageError::InvalidStatusCode(code))
        }
    }

    /// Header name must satisfy the configured rule.
    pub fn check_header_name(&self, name: &str) -> Result<(), MessageError> {
        let ok = match &self.header_rule {
            HeaderNameRule::Registry(names) => names.contains(&name.to_ascii_lowercase()),
            HeaderNameRule::Token => !name.is_empty() && name.bytes().all(is_tchar),
        };
        if ok {
            Ok(())
        } else {
            Err(MessageError::InvalidHeaderName(name.to_string()))
        }
    }

    /// Validate every name in a header map, as constructors do.
    pub fn check_header_names(&self, headers: &HeaderMap) -> Result<(), MessageError> {
        for name in headers.names() {
            self.check_header_name(name)?;
        }
        Ok(())
    }
}

/// RFC 7230 `tchar`.
fn is_tchar(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b"!#$%&'*+-.^_`|~".contains(&b)
}
