//! Errors raised by SMD mutators.
//!
//! Every variant is produced synchronously by the call that violated the
//! contract, and the receiver of that call is left exactly as it was.

use thiserror::Error;

/// Result alias for SMD operations.
pub type Result<T> = std::result::Result<T, SmdError>;

/// Errors that can occur while building or mutating a service description.
#[derive(Debug, Error)]
pub enum SmdError {
    /// A service was constructed without a usable name.
    #[error("Service object requires a name")]
    ServiceNameRequired,
    /// The service name is not a valid identifier.
    #[error("Invalid name '{0}' provided for service; must match {pattern}", pattern = crate::SERVICE_NAME_PATTERN)]
    InvalidServiceName(String),
    /// The transport is not one of the supported transports.
    #[error("Invalid transport '{0}' specified")]
    InvalidTransport(String),
    /// The envelope is not a supported JSON-RPC version.
    #[error("Invalid envelope type '{0}'")]
    InvalidEnvelope(String),
    /// A parameter or return type is neither a string nor a sequence of strings.
    #[error("Invalid param type provided: {0}")]
    InvalidParamType(String),
    /// The content type is not a `major/minor` media type.
    #[error("Invalid content type '{0}' specified")]
    InvalidContentType(String),
    /// SMD JSON text could not be parsed.
    #[error("Invalid SMD JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl SmdError {
    /// Short machine-friendly name of the error kind.
    pub fn kind(&self) -> &'static str {
        match self {
            SmdError::ServiceNameRequired => "ServiceNameRequired",
            SmdError::InvalidServiceName(_) => "InvalidServiceName",
            SmdError::InvalidTransport(_) => "InvalidTransport",
            SmdError::InvalidEnvelope(_) => "InvalidEnvelope",
            SmdError::InvalidParamType(_) => "InvalidParamType",
            SmdError::InvalidContentType(_) => "InvalidContentType",
            SmdError::Json(_) => "Json",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_identify_offending_value() {
        let err = SmdError::InvalidServiceName("0ab-?".to_string());
        assert!(err.to_string().contains("Invalid name '0ab-?'"));
        assert!(err.to_string().contains(crate::SERVICE_NAME_PATTERN));

        let err = SmdError::InvalidTransport("GET".to_string());
        assert_eq!(err.to_string(), "Invalid transport 'GET' specified");

        let err = SmdError::InvalidEnvelope("JSON-P".to_string());
        assert_eq!(err.to_string(), "Invalid envelope type 'JSON-P'");

        assert!(SmdError::ServiceNameRequired.to_string().contains("requires a name"));
    }

    #[test]
    fn test_from_json_error() {
        let err = serde_json::from_str::<serde_json::Value>("{").expect_err("Expected parse failure");
        let smd_err: SmdError = err.into();
        assert_eq!(smd_err.kind(), "Json");
    }
}
