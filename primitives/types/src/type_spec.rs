//! Parameter and return type specifications.
//!
//! A type is either a single type name (`"integer"`) or an ordered union of
//! type names (`["integer", "string"]`). The same rule validates parameter
//! types and return types.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{Result, SmdError};

/// A single type name or an ordered sequence of type names.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TypeSpec {
    /// One type name
    Single(String),
    /// Several acceptable type names, in declaration order
    Union(Vec<String>),
}

impl TypeSpec {
    /// Build a `TypeSpec` from a JSON value.
    ///
    /// Strings become [`TypeSpec::Single`]; arrays whose every element is a
    /// string become [`TypeSpec::Union`]. Anything else is rejected with
    /// [`SmdError::InvalidParamType`].
    pub fn from_value(value: &Value) -> Result<Self> {
        match value {
            Value::String(s) => Ok(TypeSpec::Single(s.clone())),
            Value::Array(items) => items
                .iter()
                .map(|item| match item {
                    Value::String(s) => Ok(s.clone()),
                    other => Err(SmdError::InvalidParamType(other.to_string())),
                })
                .collect::<Result<Vec<_>>>()
                .map(TypeSpec::Union),
            other => Err(SmdError::InvalidParamType(other.to_string())),
        }
    }

    /// The type names in declaration order.
    pub fn names(&self) -> Vec<&str> {
        match self {
            TypeSpec::Single(name) => vec![name.as_str()],
            TypeSpec::Union(names) => names.iter().map(String::as_str).collect(),
        }
    }

    /// The single type name, if this is not a union.
    pub fn as_single(&self) -> Option<&str> {
        match self {
            TypeSpec::Single(name) => Some(name),
            TypeSpec::Union(_) => None,
        }
    }

    /// Convert to the JSON value emitted in SMD documents.
    pub fn to_value(&self) -> Value {
        match self {
            TypeSpec::Single(name) => Value::String(name.clone()),
            TypeSpec::Union(names) => Value::Array(names.iter().cloned().map(Value::String).collect()),
        }
    }
}

impl fmt::Display for TypeSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeSpec::Single(name) => write!(f, "{}", name),
            TypeSpec::Union(names) => write!(f, "[{}]", names.join(", ")),
        }
    }
}

impl PartialEq<&str> for TypeSpec {
    fn eq(&self, other: &&str) -> bool { self.as_single() == Some(*other) }
}

/// Conversion into a validated [`TypeSpec`].
///
/// Typed inputs (`&str`, `String`, string slices and vectors) always succeed;
/// JSON values are checked with [`TypeSpec::from_value`].
pub trait IntoTypeSpec {
    /// Perform the conversion.
    fn into_type_spec(self) -> Result<TypeSpec>;
}

impl IntoTypeSpec for TypeSpec {
    fn into_type_spec(self) -> Result<TypeSpec> { Ok(self) }
}

impl IntoTypeSpec for &TypeSpec {
    fn into_type_spec(self) -> Result<TypeSpec> { Ok(self.clone()) }
}

impl IntoTypeSpec for &str {
    fn into_type_spec(self) -> Result<TypeSpec> { Ok(TypeSpec::Single(self.to_string())) }
}

impl IntoTypeSpec for String {
    fn into_type_spec(self) -> Result<TypeSpec> { Ok(TypeSpec::Single(self)) }
}

impl IntoTypeSpec for Vec<String> {
    fn into_type_spec(self) -> Result<TypeSpec> { Ok(TypeSpec::Union(self)) }
}

impl IntoTypeSpec for Vec<&str> {
    fn into_type_spec(self) -> Result<TypeSpec> {
        Ok(TypeSpec::Union(self.into_iter().map(str::to_string).collect()))
    }
}

impl IntoTypeSpec for &[&str] {
    fn into_type_spec(self) -> Result<TypeSpec> {
        Ok(TypeSpec::Union(self.iter().map(|s| s.to_string()).collect()))
    }
}

impl<const N: usize> IntoTypeSpec for [&str; N] {
    fn into_type_spec(self) -> Result<TypeSpec> {
        Ok(TypeSpec::Union(self.iter().map(|s| s.to_string()).collect()))
    }
}

impl IntoTypeSpec for &Value {
    fn into_type_spec(self) -> Result<TypeSpec> { TypeSpec::from_value(self) }
}

impl IntoTypeSpec for Value {
    fn into_type_spec(self) -> Result<TypeSpec> { TypeSpec::from_value(&self) }
}
