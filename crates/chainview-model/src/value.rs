// SPDX-License-Identifier: Apache-2.0

use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;
use std::fmt::Write as _;

/// One scalar produced by the store driver. The fixed schema never defines a
/// blob column, but arbitrary SELECT projections can still yield one
/// (e.g. `SELECT x'00';`), so the wire form hex-encodes it.
#[derive(Debug, Clone, PartialEq)]
pub enum ScalarValue {
    Null,
    Integer(i64),
    Real(f64),
    Text(String),
    Blob(Vec<u8>),
}

impl Serialize for ScalarValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Null => serializer.serialize_unit(),
            Self::Integer(v) => serializer.serialize_i64(*v),
            Self::Real(v) => serializer.serialize_f64(*v),
            Self::Text(v) => serializer.serialize_str(v),
            Self::Blob(bytes) => {
                let mut out = String::with_capacity(bytes.len() * 2);
                for b in bytes {
                    let _ = write!(&mut out, "{b:02x}");
                }
                serializer.serialize_str(&out)
            }
        }
    }
}

/// One row of a query result: column-name/value pairs in the order of the
/// query's projection list. Serializes as a JSON object preserving that
/// order, which is why it is not a plain map type.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ResultRow(Vec<(String, ScalarValue)>);

impl ResultRow {
    #[must_use]
    pub fn from_pairs(pairs: Vec<(String, ScalarValue)>) -> Self {
        Self(pairs)
    }

    #[must_use]
    pub fn columns(&self) -> Vec<&str> {
        self.0.iter().map(|(name, _)| name.as_str()).collect()
    }

    #[must_use]
    pub fn get(&self, column: &str) -> Option<&ScalarValue> {
        self.0
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, value)| value)
    }

    pub fn iter(&self) -> impl Iterator<Item = &(String, ScalarValue)> {
        self.0.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Serialize for ResultRow {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (name, value) in &self.0 {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}
