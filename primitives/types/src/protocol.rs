//! Protocol enumerations for SMD documents.
//!
//! `Envelope` names the JSON-RPC version wrapping each call and `Transport`
//! names the HTTP verb used to deliver it. Both parse from and render to the
//! exact strings that appear in SMD JSON.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::SmdError;

/// JSON-RPC envelope (protocol version) of a service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Envelope {
    /// JSON-RPC 1.0
    #[default]
    #[serde(rename = "JSON-RPC-1.0")]
    JsonRpc1,
    /// JSON-RPC 2.0
    #[serde(rename = "JSON-RPC-2.0")]
    JsonRpc2,
}

impl Envelope {
    /// All supported envelopes.
    pub const ALL: [Envelope; 2] = [Envelope::JsonRpc1, Envelope::JsonRpc2];

    /// Get the string representation used in SMD JSON.
    pub fn as_str(&self) -> &'static str {
        match self {
            Envelope::JsonRpc1 => "JSON-RPC-1.0",
            Envelope::JsonRpc2 => "JSON-RPC-2.0",
        }
    }
}

impl FromStr for Envelope {
    type Err = SmdError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Envelope::ALL
            .into_iter()
            .find(|env| env.as_str() == s)
            .ok_or_else(|| SmdError::InvalidEnvelope(s.to_string()))
    }
}

impl AsRef<str> for Envelope {
    fn as_ref(&self) -> &str { self.as_str() }
}

impl fmt::Display for Envelope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "{}", self.as_str()) }
}

/// HTTP transport a service is reachable over.
///
/// Only `POST` is accepted today.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Transport {
    /// HTTP POST
    #[default]
    #[serde(rename = "POST")]
    Post,
}

impl Transport {
    /// Get the string representation used in SMD JSON.
    pub fn as_str(&self) -> &'static str {
        match self {
            Transport::Post => "POST",
        }
    }
}

impl FromStr for Transport {
    type Err = SmdError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "POST" => Ok(Transport::Post),
            _ => Err(SmdError::InvalidTransport(s.to_string())),
        }
    }
}

impl AsRef<str> for Transport {
    fn as_ref(&self) -> &str { self.as_str() }
}

impl fmt::Display for Transport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "{}", self.as_str()) }
}
