//! Identifier validation for service names and media types.

use std::sync::OnceLock;

use regex::Regex;

use crate::{Result, SmdError};

/// Pattern every service name must match.
pub const SERVICE_NAME_PATTERN: &str = r"^[a-zA-Z_][a-zA-Z0-9_.]*$";

const CONTENT_TYPE_PATTERN: &str = r"(?i)^[a-z]+/[a-z][a-z-]+$";

fn service_name_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(SERVICE_NAME_PATTERN).expect("service name pattern is valid"))
}

fn content_type_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(CONTENT_TYPE_PATTERN).expect("content type pattern is valid"))
}

/// Validate a service name, returning it unchanged on success.
///
/// Names are letters, digits, underscores and dots, and may not start with a
/// digit or a dot. Dots separate namespaces (`math.add`).
pub fn validate_service_name(name: &str) -> Result<&str> {
    if service_name_regex().is_match(name) {
        Ok(name)
    } else {
        Err(SmdError::InvalidServiceName(name.to_string()))
    }
}

/// Validate a `major/minor` media type such as `application/json`.
pub fn validate_content_type(content_type: &str) -> Result<&str> {
    if content_type_regex().is_match(content_type) {
        Ok(content_type)
    } else {
        Err(SmdError::InvalidContentType(content_type.to_string()))
    }
}
