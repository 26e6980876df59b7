//! Registrar: builds service descriptors from method signatures and adds
//! them to a service map.

use std::collections::HashSet;

use ir::{ParamOptions, ServiceDescriptor, ServiceMap, TypeSpec};
use types::SmdError;

use crate::{ArgumentSignature, MethodSignature, TypeAliasRegistry};

const MODULE: &str = "registrar";

/// Errors that can occur while registering methods
#[derive(Debug, thiserror::Error)]
pub enum RegistrarError {
    /// The generated service failed SMD validation
    #[error(transparent)]
    Smd(#[from] SmdError),
    /// The same method name appears twice in one batch
    #[error("Duplicate method '{0}' in registration batch")]
    DuplicateMethod(String),
    /// I/O error while reading signature or alias files
    #[error(transparent)]
    Io(#[from] std::io::Error),
    /// JSON parsing error in signature or alias files
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Populates service maps from method signatures.
#[derive(Debug, Clone, Default)]
pub struct Registrar {
    namespace: Option<String>,
    aliases: TypeAliasRegistry,
}

impl Registrar {
    /// Registrar with no namespace and the built-in type aliases.
    pub fn new() -> Self { Self::default() }

    /// Registrar that prefixes every service name with `namespace.`.
    pub fn with_namespace(namespace: impl Into<String>) -> Self {
        Self { namespace: Some(namespace.into()), ..Self::default() }
    }

    /// Replace the type alias registry.
    pub fn with_aliases(mut self, aliases: TypeAliasRegistry) -> Self {
        self.aliases = aliases;
        self
    }

    /// Namespace, if any.
    pub fn namespace(&self) -> Option<&str> { self.namespace.as_deref() }

    /// The service name a method is registered under.
    pub fn service_name(&self, method: &str) -> String {
        match &self.namespace {
            Some(ns) if !ns.is_empty() => format!("{}.{}", ns, method),
            _ => method.to_string(),
        }
    }

    /// Build (without registering) the descriptor for one method.
    ///
    /// The descriptor starts from the map's default transport, envelope and
    /// target; one parameter is added per argument in declaration order.
    pub fn describe(
        &self,
        map: &ServiceMap,
        signature: &MethodSignature,
    ) -> Result<ServiceDescriptor, RegistrarError> {
        let mut service = map.new_service(self.service_name(&signature.name))?;
        for arg in &signature.params {
            service.add_param(self.type_spec(&arg.types), self.param_options(arg), None)?;
        }
        if !signature.returns.is_empty() {
            service.set_return(self.type_spec(&signature.returns))?;
        }
        Ok(service)
    }

    /// Describe one method and add it to `map`, replacing any service of
    /// the same name.
    pub fn register(
        &self,
        map: &mut ServiceMap,
        signature: &MethodSignature,
    ) -> Result<(), RegistrarError> {
        let service = self.describe(map, signature)?;
        logging::trace(
            MODULE,
            &format!("registered {} ({} params)", service.name(), signature.params.len()),
        );
        map.add_service(service);
        Ok(())
    }

    /// Register a batch of methods.
    ///
    /// Every signature is described before any is added, so a failure leaves
    /// `map` unchanged. Returns the number of services registered.
    pub fn register_all(
        &self,
        map: &mut ServiceMap,
        signatures: &[MethodSignature],
    ) -> Result<usize, RegistrarError> {
        let mut seen = HashSet::new();
        let mut services = Vec::with_capacity(signatures.len());
        for signature in signatures {
            if !seen.insert(signature.name.as_str()) {
                return Err(RegistrarError::DuplicateMethod(signature.name.clone()));
            }
            services.push(self.describe(map, signature)?);
        }

        let count = services.len();
        for service in services {
            logging::trace(MODULE, &format!("registered {}", service.name()));
            map.add_service(service);
        }
        Ok(count)
    }

    fn type_spec(&self, native: &[String]) -> TypeSpec {
        match native {
            [] => TypeSpec::Single("any".to_string()),
            [single] => TypeSpec::Single(self.aliases.resolve(single).to_string()),
            many => TypeSpec::Union(many.iter().map(|t| self.aliases.resolve(t).to_string()).collect()),
        }
    }

    fn param_options(&self, arg: &ArgumentSignature) -> ParamOptions {
        let mut options = ParamOptions::new().name(arg.name.as_str()).optional(arg.optional);
        if let Some(default) = &arg.default {
            options = options.default_value(default.clone());
        }
        if let Some(description) = &arg.description {
            options = options.description(description.as_str());
        }
        options
    }
}
