//! Parameter records and the specs used to add them to a service.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use types::{IntoTypeSpec, Result, TypeSpec};

/// One parameter of a service, as emitted in the SMD `parameters` array.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Param {
    /// Parameter type (single name or union)
    #[serde(rename = "type")]
    pub param_type: TypeSpec,
    /// Parameter name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Whether the caller may omit the parameter
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub optional: Option<bool>,
    /// Default value used when the parameter is omitted
    ///
    /// `Some(Value::Null)` is a real `null` default and is kept distinct
    /// from "no default".
    #[serde(default, deserialize_with = "present_value", skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,
    /// Human-readable description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

fn present_value<'de, D>(deserializer: D) -> std::result::Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

impl Param {
    /// Create a parameter from a type and its options.
    pub fn new(param_type: TypeSpec, options: ParamOptions) -> Self {
        Self {
            param_type,
            name: options.name,
            optional: options.optional,
            default: options.default,
            description: options.description,
        }
    }

    /// Render as the plain mapping used inside SMD JSON.
    ///
    /// `type` always comes first, followed by whichever options are set.
    pub fn to_value(&self) -> Value {
        let mut map = Map::new();
        map.insert("type".to_string(), self.param_type.to_value());
        if let Some(name) = &self.name {
            map.insert("name".to_string(), Value::String(name.clone()));
        }
        if let Some(optional) = self.optional {
            map.insert("optional".to_string(), Value::Bool(optional));
        }
        if let Some(default) = &self.default {
            map.insert("default".to_string(), default.clone());
        }
        if let Some(description) = &self.description {
            map.insert("description".to_string(), Value::String(description.clone()));
        }
        Value::Object(map)
    }
}

/// Optional attributes attached to a parameter.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParamOptions {
    /// Parameter name
    pub name: Option<String>,
    /// Whether the parameter may be omitted
    pub optional: Option<bool>,
    /// Default value
    pub default: Option<Value>,
    /// Description
    pub description: Option<String>,
}

impl ParamOptions {
    /// Empty options.
    pub fn new() -> Self { Self::default() }

    /// Set the parameter name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Mark the parameter optional or required.
    pub fn optional(mut self, optional: bool) -> Self {
        self.optional = Some(optional);
        self
    }

    /// Set the default value.
    pub fn default_value(mut self, default: impl Into<Value>) -> Self {
        self.default = Some(default.into());
        self
    }

    /// Set the description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Pick the recognized options out of a JSON mapping.
    ///
    /// Only `name`, `optional`, `default` and `description` are read. A
    /// recognized key holding a value of the wrong shape is skipped exactly
    /// like an unrecognized key.
    pub fn from_map(map: &Map<String, Value>) -> Self {
        Self {
            name: map.get("name").and_then(Value::as_str).map(str::to_string),
            optional: map.get("optional").and_then(Value::as_bool),
            default: map.get("default").cloned(),
            description: map.get("description").and_then(Value::as_str).map(str::to_string),
        }
    }
}

/// A parameter waiting to be placed in a service: type, options and an
/// optional explicit slot key.
#[derive(Debug, Clone, PartialEq)]
pub struct ParamSpec {
    /// Parameter type
    pub param_type: TypeSpec,
    /// Parameter options
    pub options: ParamOptions,
    /// Explicit slot key; `None` takes the next automatic slot
    pub order: Option<i64>,
}

impl ParamSpec {
    /// Create a spec with no options and automatic ordering.
    pub fn new(param_type: impl IntoTypeSpec) -> Result<Self> {
        Ok(Self { param_type: param_type.into_type_spec()?, options: ParamOptions::default(), order: None })
    }

    /// Attach options.
    pub fn with_options(mut self, options: ParamOptions) -> Self {
        self.options = options;
        self
    }

    /// Pin the spec to an explicit slot key.
    pub fn at(mut self, order: i64) -> Self {
        self.order = Some(order);
        self
    }

    /// Parse a spec from a JSON mapping such as
    /// `{"type": "integer", "order": 4, "name": "count"}`.
    ///
    /// Returns `Ok(None)` when the value is not a mapping or has no `type`
    /// key; such entries are skipped by bulk adds. A `type` of the wrong
    /// shape is an error. A non-integer `order` is ignored.
    pub fn from_value(value: &Value) -> Result<Option<Self>> {
        let Some(map) = value.as_object() else {
            return Ok(None);
        };
        let Some(param_type) = map.get("type") else {
            return Ok(None);
        };

        Ok(Some(Self {
            param_type: TypeSpec::from_value(param_type)?,
            options: ParamOptions::from_map(map),
            order: map.get("order").and_then(Value::as_i64),
        }))
    }

    /// Parse every entry of a JSON array, skipping entries without a type.
    ///
    /// Fails on the first invalid `type` without returning any spec.
    pub fn list_from_value(value: &Value) -> Result<Vec<Self>> {
        let Some(items) = value.as_array() else {
            return Err(types::SmdError::InvalidParamType(value.to_string()));
        };
        let mut specs = Vec::with_capacity(items.len());
        for item in items {
            if let Some(spec) = Self::from_value(item)? {
                specs.push(spec);
            }
        }
        Ok(specs)
    }

    /// Build the parameter record this spec describes.
    pub fn to_param(&self) -> Param { Param::new(self.param_type.clone(), self.options.clone()) }
}
