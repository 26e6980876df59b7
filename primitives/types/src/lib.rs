#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]

//! Core vocabulary for Service Mapping Descriptions
//!
//! This crate defines the value types that every SMD document is built from:
//! the envelope and transport enumerations, the parameter/return type
//! specification, identifier validation, and the error taxonomy shared by the
//! descriptor model and its collaborators.

/// Error taxonomy for SMD construction and mutation.
pub mod error;
/// JSON-RPC envelope (protocol version) and HTTP transport enumerations.
pub mod protocol;
/// Parameter and return type specifications.
pub mod type_spec;
/// Identifier and content-type validation.
pub mod naming;

pub use error::{Result, SmdError};
pub use naming::{validate_content_type, validate_service_name, SERVICE_NAME_PATTERN};
pub use protocol::{Envelope, Transport};
pub use type_spec::{IntoTypeSpec, TypeSpec};

/// SMD specification version emitted in full documents.
pub const SMD_VERSION: &str = "2.0";

/// Content type advertised by a service map unless overridden.
pub const DEFAULT_CONTENT_TYPE: &str = "application/json";
