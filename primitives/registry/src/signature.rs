//! Declarative method signatures.
//!
//! These are the registrar's input: what a dispatcher knows about each
//! callable method, expressed in its own (native) type names.

use std::path::Path;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::RegistrarError;

/// One callable method.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MethodSignature {
    /// Method name, without namespace
    pub name: String,
    /// Arguments in declaration order
    #[serde(default)]
    pub params: Vec<ArgumentSignature>,
    /// Native return type names; empty when the method declares none
    #[serde(default)]
    pub returns: Vec<String>,
}

/// One argument of a method.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArgumentSignature {
    /// Argument name
    pub name: String,
    /// Native type names; empty means any type
    #[serde(default)]
    pub types: Vec<String>,
    /// Whether the argument may be omitted
    #[serde(default)]
    pub optional: bool,
    /// Default value; a JSON `null` here is a real null default
    #[serde(default, deserialize_with = "present_value", skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,
    /// Description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

fn present_value<'de, D>(deserializer: D) -> std::result::Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

impl MethodSignature {
    /// Create a signature with no arguments and no return type.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), params: Vec::new(), returns: Vec::new() }
    }

    /// Append an argument.
    pub fn arg(mut self, arg: ArgumentSignature) -> Self {
        self.params.push(arg);
        self
    }

    /// Set the native return type names.
    pub fn returning<I, S>(mut self, returns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.returns = returns.into_iter().map(Into::into).collect();
        self
    }

    /// Load a JSON array of signatures from `path`.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<Self>, RegistrarError> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }
}

impl ArgumentSignature {
    /// A required argument of the given native types.
    pub fn required<I, S>(name: impl Into<String>, types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            types: types.into_iter().map(Into::into).collect(),
            optional: false,
            default: None,
            description: None,
        }
    }

    /// An optional argument with a default value.
    pub fn optional<I, S>(name: impl Into<String>, types: I, default: impl Into<Value>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self { optional: true, default: Some(default.into()), ..Self::required(name, types) }
    }

    /// Attach a description.
    pub fn described(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}
