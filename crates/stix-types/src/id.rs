use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::TypeError;

const SEPARATOR: &str = "--";

/// Identifier of a STIX object: `<object-type>--<uuid>`.
///
/// The object type prefix names the type the identifier was minted for.
/// Deserialization goes through [`StixId::parse`], so a decoded id always has
/// a non-empty prefix and a valid UUID suffix.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct StixId(String);

impl StixId {
    /// Mint a fresh random (UUID v4) identifier for the given object type.
    pub fn new(object_type: &str) -> Self {
        Self::from_parts(object_type, Uuid::new_v4())
    }

    /// Build an identifier from an object type and an existing UUID.
    pub fn from_parts(object_type: &str, uuid: Uuid) -> Self {
        Self(format!("{object_type}{SEPARATOR}{uuid}"))
    }

    /// Parse and validate an identifier string.
    pub fn parse(s: &str) -> Result<Self, TypeError> {
        let invalid = |reason: &str| TypeError::InvalidId {
            id: s.to_string(),
            reason: reason.to_string(),
        };
        let (object_type, uuid) = s
            .split_once(SEPARATOR)
            .ok_or_else(|| invalid("missing '--' separator"))?;
        if object_type.is_empty() {
            return Err(invalid("empty object type"));
        }
        Uuid::parse_str(uuid).map_err(|e| invalid(&e.to_string()))?;
        Ok(Self(s.to_string()))
    }

    /// The object type prefix.
    pub fn object_type(&self) -> &str {
        self.0.split_once(SEPARATOR).map_or("", |(t, _)| t)
    }

    /// The UUID suffix, if it parses.
    pub fn uuid(&self) -> Option<Uuid> {
        let (_, uuid) = self.0.split_once(SEPARATOR)?;
        Uuid::parse_str(uuid).ok()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for StixId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StixId({})", self.0)
    }
}

impl fmt::Display for StixId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<StixId> for String {
    fn from(id: StixId) -> Self {
        id.0
    }
}

impl TryFrom<String> for StixId {
    type Error = TypeError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl std::str::FromStr for StixId {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
