#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]

//! Service Registrar: turns method signatures into SMD services.
//!
//! A dispatcher knows its callable methods; this crate describes them. Each
//! [`MethodSignature`] becomes one [`ir::ServiceDescriptor`] seeded with the
//! service map's defaults, with native type names normalized to SMD types
//! through a [`TypeAliasRegistry`].

pub mod registrar;
pub mod signature;
pub mod type_alias_registry;

use ir::{ServiceDescriptor, ServiceMap};

pub use registrar::{Registrar, RegistrarError};
pub use signature::{ArgumentSignature, MethodSignature};
pub use type_alias_registry::TypeAliasRegistry;

/// Read-only interface to a populated [`ServiceMap`].
///
/// Dispatchers advertising capabilities only need lookups, never mutation.
pub trait ServiceMapReader {
    /// Get all service names in registration order.
    fn list_services(&self) -> Vec<&str>;

    /// Get a service by name.
    ///
    /// Returns `None` if no service with the given name exists.
    fn get_service(&self, name: &str) -> Option<&ServiceDescriptor>;

    /// Get the total number of services.
    fn service_count(&self) -> usize;
}

impl ServiceMapReader for ServiceMap {
    fn list_services(&self) -> Vec<&str> { self.service_names() }

    fn get_service(&self, name: &str) -> Option<&ServiceDescriptor> { self.service(name) }

    fn service_count(&self) -> usize { self.len() }
}
