//! Service descriptor: the SMD contract of one RPC method.
//!
//! Setters validate before mutating and return `&mut Self`, so calls chain
//! with `?`:
//!
//! ```
//! use smd_ir::{Envelope, ParamOptions, ServiceDescriptor};
//!
//! # fn main() -> smd_ir::Result<()> {
//! let mut service = ServiceDescriptor::new("add")?;
//! service
//!     .set_target("/rpc")
//!     .set_envelope(Envelope::JsonRpc2)?
//!     .add_param("integer", ParamOptions::new().name("a"), None)?
//!     .add_param("integer", ParamOptions::new().name("b"), None)?
//!     .set_return("integer")?;
//! assert_eq!(service.params().len(), 2);
//! # Ok(())
//! # }
//! ```

use serde_json::{Map, Value};
use types::{validate_service_name, Envelope, IntoTypeSpec, Result, SmdError, Transport, TypeSpec};

use crate::{Param, ParamOptions, ParamSlots, ParamSpec};

/// A validated, mutable description of one RPC method.
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceDescriptor {
    name: String,
    transport: Transport,
    target: Option<String>,
    envelope: Envelope,
    params: ParamSlots,
    returns: Option<TypeSpec>,
}

impl ServiceDescriptor {
    /// Create a descriptor with default transport (`POST`) and envelope
    /// (`JSON-RPC-1.0`), no target, no parameters and no return type.
    ///
    /// An empty name fails with [`SmdError::ServiceNameRequired`]; a name
    /// that is not an identifier fails with [`SmdError::InvalidServiceName`].
    pub fn new(name: impl AsRef<str>) -> Result<Self> {
        let name = name.as_ref();
        if name.is_empty() {
            return Err(SmdError::ServiceNameRequired);
        }
        validate_service_name(name)?;
        Ok(Self {
            name: name.to_string(),
            transport: Transport::default(),
            target: None,
            envelope: Envelope::default(),
            params: ParamSlots::new(),
            returns: None,
        })
    }

    /// Create a descriptor from a name string or a mapping of options.
    ///
    /// Recognized option keys are `name`, `transport`, `target`, `envelope`,
    /// `params`/`parameters` and `return`/`returns`; other keys are ignored.
    /// `null`, an empty array, an empty object, or a mapping without a
    /// usable `name` fail with [`SmdError::ServiceNameRequired`].
    pub fn from_options(spec: &Value) -> Result<Self> {
        match spec {
            Value::String(name) => Self::new(name),
            Value::Object(options) => {
                let name = match options.get("name") {
                    None | Some(Value::Null) => return Err(SmdError::ServiceNameRequired),
                    Some(Value::String(name)) => name.as_str(),
                    Some(other) => return Err(SmdError::InvalidServiceName(other.to_string())),
                };
                let mut service = Self::new(name)?;
                service.apply_options(options)?;
                Ok(service)
            }
            _ => Err(SmdError::ServiceNameRequired),
        }
    }

    /// Rebuild a descriptor from its SMD mapping (the output of
    /// [`ServiceDescriptor::to_mapping`]) under the given name.
    pub fn from_mapping(name: &str, mapping: &Map<String, Value>) -> Result<Self> {
        let mut service = Self::new(name)?;
        service.apply_options(mapping)?;
        Ok(service)
    }

    /// Apply a mapping of options. Either every option applies or none does.
    pub fn set_options(&mut self, options: &Map<String, Value>) -> Result<&mut Self> {
        let mut next = self.clone();
        if let Some(name) = options.get("name") {
            match name {
                Value::String(name) => {
                    next.set_name(name)?;
                }
                other => return Err(SmdError::InvalidServiceName(other.to_string())),
            }
        }
        next.apply_options(options)?;
        *self = next;
        Ok(self)
    }

    fn apply_options(&mut self, options: &Map<String, Value>) -> Result<()> {
        for (key, value) in options {
            match key.as_str() {
                "transport" => {
                    self.set_transport(scalar_text(value))?;
                }
                "envelope" => {
                    self.set_envelope(scalar_text(value))?;
                }
                "target" => match value {
                    Value::Null => {
                        self.clear_target();
                    }
                    other => {
                        self.set_target(scalar_text(other));
                    }
                },
                "params" | "parameters" => {
                    self.set_params_from_value(value)?;
                }
                "return" | "returns" => match value {
                    Value::Null => {
                        self.clear_return();
                    }
                    other => {
                        self.set_return(other)?;
                    }
                },
                _ => {}
            }
        }
        Ok(())
    }

    /// Service name.
    pub fn name(&self) -> &str { &self.name }

    /// Rename the service.
    pub fn set_name(&mut self, name: impl AsRef<str>) -> Result<&mut Self> {
        let name = validate_service_name(name.as_ref())?;
        self.name = name.to_string();
        Ok(self)
    }

    /// Transport the service is reached over.
    pub fn transport(&self) -> Transport { self.transport }

    /// Set the transport; only `POST` is accepted.
    pub fn set_transport(&mut self, transport: impl AsRef<str>) -> Result<&mut Self> {
        self.transport = transport.as_ref().parse()?;
        Ok(self)
    }

    /// Endpoint the service is served from, if set.
    pub fn target(&self) -> Option<&str> { self.target.as_deref() }

    /// Set the target; non-string values are stored as their string form.
    pub fn set_target(&mut self, target: impl ToString) -> &mut Self {
        self.target = Some(target.to_string());
        self
    }

    /// Unset the target.
    pub fn clear_target(&mut self) -> &mut Self {
        self.target = None;
        self
    }

    /// JSON-RPC envelope.
    pub fn envelope(&self) -> Envelope { self.envelope }

    /// Set the envelope; only `JSON-RPC-1.0` and `JSON-RPC-2.0` are accepted.
    pub fn set_envelope(&mut self, envelope: impl AsRef<str>) -> Result<&mut Self> {
        self.envelope = envelope.as_ref().parse()?;
        Ok(self)
    }

    /// Add one parameter.
    ///
    /// With `order == None` the parameter takes the next automatic slot;
    /// otherwise it is stored at exactly `order`, replacing any occupant.
    /// An invalid type fails with [`SmdError::InvalidParamType`] and leaves
    /// the parameters untouched.
    pub fn add_param(
        &mut self,
        param_type: impl IntoTypeSpec,
        options: ParamOptions,
        order: Option<i64>,
    ) -> Result<&mut Self> {
        let param_type = param_type.into_type_spec()?;
        self.params.insert(Param::new(param_type, options), order);
        Ok(self)
    }

    /// Add already-validated parameter specs in sequence.
    pub fn add_params(&mut self, specs: impl IntoIterator<Item = ParamSpec>) -> &mut Self {
        for spec in specs {
            let order = spec.order;
            self.params.insert(Param::new(spec.param_type, spec.options), order);
        }
        self
    }

    /// Add parameters from a JSON array of spec mappings.
    ///
    /// Entries that are not mappings or carry no `type` are skipped. If any
    /// `type` is invalid nothing is added.
    pub fn add_params_from_value(&mut self, specs: &Value) -> Result<&mut Self> {
        let specs = ParamSpec::list_from_value(specs)?;
        Ok(self.add_params(specs))
    }

    /// Replace every parameter with `specs`, resetting automatic ordering.
    pub fn set_params(&mut self, specs: impl IntoIterator<Item = ParamSpec>) -> &mut Self {
        self.params.clear();
        self.add_params(specs)
    }

    /// JSON form of [`ServiceDescriptor::set_params`].
    pub fn set_params_from_value(&mut self, specs: &Value) -> Result<&mut Self> {
        let specs = ParamSpec::list_from_value(specs)?;
        Ok(self.set_params(specs))
    }

    /// Parameters in resolved slot order.
    pub fn params(&self) -> Vec<Param> { self.params.to_vec() }

    /// The underlying slot registry.
    pub fn param_slots(&self) -> &ParamSlots { &self.params }

    /// Return type, if set.
    pub fn returns(&self) -> Option<&TypeSpec> { self.returns.as_ref() }

    /// Set the return type; validated like a parameter type.
    pub fn set_return(&mut self, returns: impl IntoTypeSpec) -> Result<&mut Self> {
        self.returns = Some(returns.into_type_spec()?);
        Ok(self)
    }

    /// Unset the return type.
    pub fn clear_return(&mut self) -> &mut Self {
        self.returns = None;
        self
    }

    /// SMD mapping for this service:
    /// `{transport, envelope, parameters, returns?, target?}`.
    pub fn to_mapping(&self) -> Value {
        let mut map = Map::new();
        map.insert("transport".to_string(), Value::String(self.transport.as_str().to_string()));
        map.insert("envelope".to_string(), Value::String(self.envelope.as_str().to_string()));
        map.insert(
            "parameters".to_string(),
            Value::Array(self.params.iter().map(Param::to_value).collect()),
        );
        if let Some(returns) = &self.returns {
            map.insert("returns".to_string(), returns.to_value());
        }
        if let Some(target) = &self.target {
            map.insert("target".to_string(), Value::String(target.clone()));
        }
        Value::Object(map)
    }

    /// Compact JSON text of `{<name>: <mapping>}`.
    pub fn to_json_text(&self) -> String {
        let mut wrapper = Map::new();
        wrapper.insert(self.name.clone(), self.to_mapping());
        Value::Object(wrapper).to_string()
    }
}

/// String form of an option value: strings as-is, anything else as JSON.
fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
