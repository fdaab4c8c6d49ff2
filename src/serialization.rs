//! Serialization and deserialization module for interoperability
//!
//! Supports Base 10, Base 16 (hexadecimal), and Base64 renderings of
//! natural numbers, plus serde support: a [`crate::NaturalNumber`]
//! serializes as its canonical base-10 string, which keeps values of any
//! magnitude exact across JSON and other self-describing formats.

use crate::bignat::NaturalNumber;
use crate::error::NaturalError;
use base64::Engine;
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

// ==================== Serialization Format Enum ====================

/// Format for serializing numeric values
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SerializationFormat {
    #[serde(rename = "base10")]
    #[default]
    Base10,
    #[serde(rename = "base16")]
    Base16,
    #[serde(rename = "base64")]
    Base64,
}

impl SerializationFormat {
    /// Renders a value as a string in this format.
    pub fn encode(&self, value: &NaturalNumber) -> String {
        match self {
            SerializationFormat::Base10 => value.to_base10(),
            SerializationFormat::Base16 => value.to_base16(),
            SerializationFormat::Base64 => {
                base64::engine::general_purpose::STANDARD.encode(value.to_bytes_be())
            }
        }
    }

    /// Parses a string in this format.
    ///
    /// # Errors
    /// [`NaturalError::InvalidFormat`] if the text is not valid in this
    /// format.
    pub fn decode(&self, s: &str) -> Result<NaturalNumber, NaturalError> {
        match self {
            SerializationFormat::Base10 => NaturalNumber::from_base10(s),
            SerializationFormat::Base16 => NaturalNumber::from_base16(s),
            SerializationFormat::Base64 => {
                let bytes = base64::engine::general_purpose::STANDARD
                    .decode(s)
                    .map_err(|e| NaturalError::InvalidFormat(format!("base64: {e}")))?;
                Ok(NaturalNumber::from_bytes_be(&bytes))
            }
        }
    }
}

// ==================== Serde Support ====================

impl Serialize for NaturalNumber {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_base10())
    }
}

struct NaturalNumberVisitor;

impl<'de> Visitor<'de> for NaturalNumberVisitor {
    type Value = NaturalNumber;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a decimal string")
    }

    fn visit_str<E>(self, v: &str) -> Result<NaturalNumber, E>
    where
        E: de::Error,
    {
        NaturalNumber::from_base10(v).map_err(de::Error::custom)
    }
}

impl<'de> Deserialize<'de> for NaturalNumber {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_str(NaturalNumberVisitor)
    }
}
