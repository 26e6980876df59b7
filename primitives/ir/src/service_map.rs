//! Service map: the root SMD document.
//!
//! Services are keyed by name and serialized in the order they were first
//! registered. Registering a name again replaces the earlier descriptor in
//! place.

use indexmap::IndexMap;
use serde_json::{Map, Value};
use types::{
    validate_content_type, Envelope, Result, Transport, DEFAULT_CONTENT_TYPE, SMD_VERSION,
};

use crate::ServiceDescriptor;

/// A named collection of service descriptors plus document-level defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceMap {
    services: IndexMap<String, ServiceDescriptor>,
    transport: Transport,
    envelope: Envelope,
    target: Option<String>,
    content_type: String,
    id: Option<String>,
    description: Option<String>,
}

impl Default for ServiceMap {
    fn default() -> Self {
        Self {
            services: IndexMap::new(),
            transport: Transport::default(),
            envelope: Envelope::default(),
            target: None,
            content_type: DEFAULT_CONTENT_TYPE.to_string(),
            id: None,
            description: None,
        }
    }
}

impl ServiceMap {
    /// Create an empty map with default transport, envelope and content type.
    pub fn new() -> Self { Self::default() }

    /// Parse the text produced by [`ServiceMap::to_json_text`].
    ///
    /// Document-level defaults are not part of that text, so the returned
    /// map carries default transport, envelope and target.
    pub fn from_json_text(text: &str) -> Result<Self> {
        let raw: IndexMap<String, Map<String, Value>> = serde_json::from_str(text)?;
        let mut map = Self::new();
        for (name, mapping) in &raw {
            map.add_service(ServiceDescriptor::from_mapping(name, mapping)?);
        }
        Ok(map)
    }

    /// Default transport for services built with [`ServiceMap::new_service`].
    pub fn default_transport(&self) -> Transport { self.transport }

    /// Set the default transport.
    pub fn set_default_transport(&mut self, transport: impl AsRef<str>) -> Result<&mut Self> {
        self.transport = transport.as_ref().parse()?;
        Ok(self)
    }

    /// Default envelope for services built with [`ServiceMap::new_service`].
    pub fn default_envelope(&self) -> Envelope { self.envelope }

    /// Set the default envelope.
    pub fn set_default_envelope(&mut self, envelope: impl AsRef<str>) -> Result<&mut Self> {
        self.envelope = envelope.as_ref().parse()?;
        Ok(self)
    }

    /// Default target, if any.
    pub fn default_target(&self) -> Option<&str> { self.target.as_deref() }

    /// Set the default target.
    pub fn set_default_target(&mut self, target: impl ToString) -> &mut Self {
        self.target = Some(target.to_string());
        self
    }

    /// Content type advertised by the document.
    pub fn content_type(&self) -> &str { &self.content_type }

    /// Set the content type (`major/minor`).
    pub fn set_content_type(&mut self, content_type: impl AsRef<str>) -> Result<&mut Self> {
        self.content_type = validate_content_type(content_type.as_ref())?.to_string();
        Ok(self)
    }

    /// Document id, if any.
    pub fn id(&self) -> Option<&str> { self.id.as_deref() }

    /// Set the document id.
    pub fn set_id(&mut self, id: impl Into<String>) -> &mut Self {
        self.id = Some(id.into());
        self
    }

    /// Document description, if any.
    pub fn description(&self) -> Option<&str> { self.description.as_deref() }

    /// Set the document description.
    pub fn set_description(&mut self, description: impl Into<String>) -> &mut Self {
        self.description = Some(description.into());
        self
    }

    /// Build a descriptor seeded with this map's default transport,
    /// envelope and target. The descriptor is not registered.
    pub fn new_service(&self, name: impl AsRef<str>) -> Result<ServiceDescriptor> {
        let mut service = ServiceDescriptor::new(name)?;
        service.set_transport(self.transport)?.set_envelope(self.envelope)?;
        if let Some(target) = &self.target {
            service.set_target(target);
        }
        Ok(service)
    }

    /// Register a service under its name, replacing any service of the
    /// same name.
    pub fn add_service(&mut self, service: ServiceDescriptor) -> &mut Self {
        self.services.insert(service.name().to_string(), service);
        self
    }

    /// Register several services in sequence.
    pub fn add_services(&mut self, services: impl IntoIterator<Item = ServiceDescriptor>) -> &mut Self {
        for service in services {
            self.add_service(service);
        }
        self
    }

    /// Look up a service by name.
    pub fn service(&self, name: &str) -> Option<&ServiceDescriptor> { self.services.get(name) }

    /// Registered services in registration order.
    pub fn services(&self) -> impl Iterator<Item = &ServiceDescriptor> { self.services.values() }

    /// Registered service names in registration order.
    pub fn service_names(&self) -> Vec<&str> { self.services.keys().map(String::as_str).collect() }

    /// Remove a service, keeping the order of the others.
    pub fn remove_service(&mut self, name: &str) -> Option<ServiceDescriptor> {
        self.services.shift_remove(name)
    }

    /// Remove every service; document-level settings are kept.
    pub fn clear_services(&mut self) -> &mut Self {
        self.services.clear();
        self
    }

    /// Number of registered services.
    pub fn len(&self) -> usize { self.services.len() }

    /// Whether no service is registered.
    pub fn is_empty(&self) -> bool { self.services.is_empty() }

    /// `{<name>: <service mapping>, ...}` in registration order.
    pub fn to_mapping(&self) -> Value {
        Value::Object(
            self.services
                .iter()
                .map(|(name, service)| (name.clone(), service.to_mapping()))
                .collect(),
        )
    }

    /// Compact JSON text of [`ServiceMap::to_mapping`]; this is the exact
    /// artifact the descriptor cache stores.
    pub fn to_json_text(&self) -> String { self.to_mapping().to_string() }

    /// Full SMD 2.0 document with the document-level properties and the
    /// services nested under `services`.
    pub fn to_document(&self) -> Value {
        let mut doc = Map::new();
        doc.insert("transport".to_string(), Value::String(self.transport.as_str().to_string()));
        doc.insert("envelope".to_string(), Value::String(self.envelope.as_str().to_string()));
        doc.insert("contentType".to_string(), Value::String(self.content_type.clone()));
        doc.insert("SMDVersion".to_string(), Value::String(SMD_VERSION.to_string()));
        if let Some(target) = &self.target {
            doc.insert("target".to_string(), Value::String(target.clone()));
        }
        if let Some(id) = &self.id {
            doc.insert("id".to_string(), Value::String(id.clone()));
        }
        if let Some(description) = &self.description {
            doc.insert("description".to_string(), Value::String(description.clone()));
        }
        doc.insert("services".to_string(), self.to_mapping());
        Value::Object(doc)
    }
}
