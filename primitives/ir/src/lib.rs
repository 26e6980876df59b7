#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]

//! SMD Intermediate Representation
//!
//! This crate defines the in-memory model of a Service Mapping Description:
//! parameters and their deterministic ordering, per-method service
//! descriptors, and the service map that aggregates them into one document.
//! Everything here is pure data; serialization never performs I/O.

pub mod param;
pub mod param_slots;
pub mod service;
pub mod service_map;

pub use param::{Param, ParamOptions, ParamSpec};
pub use param_slots::ParamSlots;
pub use service::ServiceDescriptor;
pub use service_map::ServiceMap;
pub use types::{Envelope, IntoTypeSpec, Result, SmdError, Transport, TypeSpec};
