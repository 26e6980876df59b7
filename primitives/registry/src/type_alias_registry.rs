//! Type alias registry.
//!
//! Maps native type names (as a dispatcher spells them) to the SMD type
//! vocabulary: `any`, `array`, `boolean`, `float`, `integer`, `null`,
//! `object` and `string`.

use std::collections::HashMap;
use std::path::Path;

use crate::RegistrarError;

/// The SMD type vocabulary.
pub const SMD_TYPES: [&str; 8] =
    ["any", "array", "boolean", "float", "integer", "null", "object", "string"];

/// SMD type used for names that are neither aliases nor SMD types.
pub const FALLBACK_TYPE: &str = "object";

const DEFAULT_ALIASES: &[(&str, &str)] = &[
    ("arr", "array"),
    ("list", "array"),
    ("Vec", "array"),
    ("assoc", "object"),
    ("hash", "object"),
    ("struct", "object"),
    ("map", "object"),
    ("HashMap", "object"),
    ("BTreeMap", "object"),
    ("bool", "boolean"),
    ("true", "boolean"),
    ("false", "boolean"),
    ("dbl", "float"),
    ("double", "float"),
    ("f32", "float"),
    ("f64", "float"),
    ("int", "integer"),
    ("i8", "integer"),
    ("i16", "integer"),
    ("i32", "integer"),
    ("i64", "integer"),
    ("isize", "integer"),
    ("u8", "integer"),
    ("u16", "integer"),
    ("u32", "integer"),
    ("u64", "integer"),
    ("usize", "integer"),
    ("mixed", "any"),
    ("Value", "any"),
    ("nil", "null"),
    ("void", "null"),
    ("()", "null"),
    ("str", "string"),
    ("String", "string"),
];

/// Registry of native-to-SMD type aliases.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeAliasRegistry {
    aliases: HashMap<String, String>,
}

impl Default for TypeAliasRegistry {
    fn default() -> Self { Self::smd_defaults() }
}

impl TypeAliasRegistry {
    /// Create a registry from an explicit alias map.
    pub fn new(aliases: HashMap<String, String>) -> Self { Self { aliases } }

    /// The built-in aliases for common native type spellings.
    pub fn smd_defaults() -> Self {
        Self::new(DEFAULT_ALIASES.iter().map(|(from, to)| (from.to_string(), to.to_string())).collect())
    }

    /// Load additional aliases from a JSON object file (`{"native": "smd"}`),
    /// layered over the built-in ones.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, RegistrarError> {
        let content = std::fs::read_to_string(path)?;
        let extra: HashMap<String, String> = serde_json::from_str(&content)?;
        let mut registry = Self::smd_defaults();
        registry.aliases.extend(extra);
        Ok(registry)
    }

    /// Add or replace one alias.
    pub fn insert(&mut self, from: impl Into<String>, to: impl Into<String>) {
        self.aliases.insert(from.into(), to.into());
    }

    /// Resolve a native type name to its SMD type.
    ///
    /// Aliases win; SMD types resolve to themselves; anything else becomes
    /// [`FALLBACK_TYPE`].
    pub fn resolve<'a>(&'a self, name: &'a str) -> &'a str {
        if let Some(target) = self.aliases.get(name) {
            return target.as_str();
        }
        if SMD_TYPES.contains(&name) {
            return name;
        }
        FALLBACK_TYPE
    }

    /// Whether `name` is a registered alias.
    pub fn is_alias(&self, name: &str) -> bool { self.aliases.contains_key(name) }

    /// Number of registered aliases.
    pub fn len(&self) -> usize { self.aliases.len() }

    /// Whether no alias is registered.
    pub fn is_empty(&self) -> bool { self.aliases.is_empty() }
}
