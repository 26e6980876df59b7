// SPDX-License-Identifier: CC0-1.0

//! SMD umbrella crate.
//!
//! Re-exports the Service Mapping Description model, the registrar and the
//! descriptor cache from the workspace member crates under `primitives/`.
//!
//! ```
//! use smd::{DescriptorCache, ParamOptions, ServiceMap};
//!
//! # fn main() -> smd::Result<()> {
//! let mut map = ServiceMap::new();
//! let mut add = map.new_service("math.add")?;
//! add.add_param("integer", ParamOptions::new().name("a"), None)?
//!     .add_param("integer", ParamOptions::new().name("b"), None)?
//!     .set_return("integer")?;
//! map.add_service(add);
//!
//! let location = std::env::temp_dir().join("smd_doc_example.json");
//! let cache = DescriptorCache::new();
//! assert!(cache.save(&location, &map));
//! assert_eq!(cache.get(&location), Some(map.to_json_text()));
//! assert!(cache.delete(&location));
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]
#![warn(deprecated_in_future)]
#![doc(test(attr(warn(unused))))]

pub use cache::DescriptorCache;
pub use ir::{Param, ParamOptions, ParamSlots, ParamSpec, ServiceDescriptor, ServiceMap};
pub use registry::{
    ArgumentSignature, MethodSignature, Registrar, RegistrarError, ServiceMapReader,
    TypeAliasRegistry,
};
pub use types::{Envelope, IntoTypeSpec, Result, SmdError, Transport, TypeSpec};

/// Miscellaneous metadata about the SMD workspace.
pub mod smd_meta {
    /// Version string for the umbrella crate, as reported by Cargo.
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");
}
