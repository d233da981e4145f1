//! Decoding STIX documents of unknown type.
//!
//! [`decode`] reads the `type` property of a JSON object and deserializes the
//! document into the matching typed object.

use serde::Serialize;
use stix_types::StixId;
use tracing::debug;

use crate::error::{ObjectError, Result};
use crate::grouping::Grouping;
use crate::note::Note;
use crate::object::StixObject;
use crate::observable::{DomainName, Ipv4Addr, Ipv6Addr};
use crate::observed_data::ObservedData;
use crate::report::Report;

/// Any object this crate models.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum AnyObject {
    Grouping(Grouping),
    ObservedData(ObservedData),
    Report(Report),
    Note(Note),
    DomainName(DomainName),
    Ipv4Addr(Ipv4Addr),
    Ipv6Addr(Ipv6Addr),
}

/// Every object type string [`decode`] and [`new_object`] understand.
pub const OBJECT_TYPES: &[&str] = &[
    Grouping::OBJECT_TYPE,
    ObservedData::OBJECT_TYPE,
    Report::OBJECT_TYPE,
    Note::OBJECT_TYPE,
    DomainName::OBJECT_TYPE,
    Ipv4Addr::OBJECT_TYPE,
    Ipv6Addr::OBJECT_TYPE,
];

macro_rules! dispatch {
    ($self:expr, $obj:ident => $body:expr) => {
        match $self {
            AnyObject::Grouping($obj) => $body,
            AnyObject::ObservedData($obj) => $body,
            AnyObject::Report($obj) => $body,
            AnyObject::Note($obj) => $body,
            AnyObject::DomainName($obj) => $body,
            AnyObject::Ipv4Addr($obj) => $body,
            AnyObject::Ipv6Addr($obj) => $body,
        }
    };
}

impl AnyObject {
    pub fn object_type(&self) -> &str {
        dispatch!(self, o => o.object_type())
    }

    pub fn id(&self) -> Option<&StixId> {
        dispatch!(self, o => o.id())
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Construct a new, stamped object of the given type.
pub fn new_object(object_type: &str) -> Result<AnyObject> {
    let obj = match object_type {
        Grouping::OBJECT_TYPE => AnyObject::Grouping(Grouping::new()),
        ObservedData::OBJECT_TYPE => AnyObject::ObservedData(ObservedData::new()),
        Report::OBJECT_TYPE => AnyObject::Report(Report::new()),
        Note::OBJECT_TYPE => AnyObject::Note(Note::new()),
        DomainName::OBJECT_TYPE => AnyObject::DomainName(DomainName::new()),
        Ipv4Addr::OBJECT_TYPE => AnyObject::Ipv4Addr(Ipv4Addr::new()),
        Ipv6Addr::OBJECT_TYPE => AnyObject::Ipv6Addr(Ipv6Addr::new()),
        other => return Err(ObjectError::UnsupportedType(other.to_string())),
    };
    Ok(obj)
}

/// Decode a JSON document into the typed object named by its `type`.
pub fn decode(json: &str) -> Result<AnyObject> {
    let value: serde_json::Value = serde_json::from_str(json)?;
    let object_type = value
        .get("type")
        .and_then(serde_json::Value::as_str)
        .ok_or(ObjectError::MissingType)?
        .to_string();
    debug!(object_type = %object_type, "decoding object");

    let obj = match object_type.as_str() {
        Grouping::OBJECT_TYPE => AnyObject::Grouping(serde_json::from_value(value)?),
        ObservedData::OBJECT_TYPE => AnyObject::ObservedData(serde_json::from_value(value)?),
        Report::OBJECT_TYPE => AnyObject::Report(serde_json::from_value(value)?),
        Note::OBJECT_TYPE => AnyObject::Note(serde_json::from_value(value)?),
        DomainName::OBJECT_TYPE => AnyObject::DomainName(serde_json::from_value(value)?),
        Ipv4Addr::OBJECT_TYPE => AnyObject::Ipv4Addr(serde_json::from_value(value)?),
        Ipv6Addr::OBJECT_TYPE => AnyObject::Ipv6Addr(serde_json::from_value(value)?),
        _ => return Err(ObjectError::UnsupportedType(object_type)),
    };
    if let Some(id) = obj.id() {
        if id.object_type() != object_type {
            return Err(ObjectError::IdTypeMismatch {
                object_type,
                id: id.to_string(),
            });
        }
    }
    Ok(obj)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_constructor_stamps_its_canonical_type() {
        for &kind in OBJECT_TYPES {
            let obj = new_object(kind).unwrap();
            assert_eq!(obj.object_type(), kind);
            assert_eq!(obj.id().unwrap().object_type(), kind);
        }
    }

    #[test]
    fn decode_dispatches_on_type() {
        let json = r#"{"type":"grouping","spec_version":"2.1","id":"grouping--84e4d88f-44ea-4bcd-bbf3-b2c1c320bcb3","context":"suspicious-activity"}"#;
        match decode(json).unwrap() {
            AnyObject::Grouping(g) => assert_eq!(g.context(), "suspicious-activity"),
            other => panic!("expected grouping, got {other:?}"),
        }
    }

    #[test]
    fn decode_then_encode_is_stable() {
        let json = r#"{"type":"observed-data","spec_version":"2.1","first_observed":"2015-12-21T19:00:00Z","number_observed":1,"object_refs":["file--1"]}"#;
        let obj = decode(json).unwrap();
        assert_eq!(obj.to_json().unwrap(), json);
    }

    #[test]
    fn decode_rejects_missing_type() {
        assert!(matches!(decode(r#"{"id":"x"}"#), Err(ObjectError::MissingType)));
    }

    #[test]
    fn decode_rejects_unknown_type() {
        let err = decode(r#"{"type":"x-custom"}"#).unwrap_err();
        assert!(matches!(err, ObjectError::UnsupportedType(t) if t == "x-custom"));
    }

    #[test]
    fn decode_rejects_malformed_id_and_timestamp() {
        let err = decode(r#"{"type":"grouping","id":"nonsense"}"#).unwrap_err();
        assert!(matches!(err, ObjectError::Json(_)));
        let err = decode(r#"{"type":"grouping","created":"yesterday"}"#).unwrap_err();
        assert!(matches!(err, ObjectError::Json(_)));
    }

    #[test]
    fn decode_rejects_id_of_another_type() {
        let json = r#"{"type":"grouping","id":"indicator--26ffb872-1dd9-446e-b6f5-d58527e5b5d2"}"#;
        let err = decode(json).unwrap_err();
        assert!(matches!(err, ObjectError::IdTypeMismatch { ref object_type, .. } if object_type == "grouping"));
    }

    #[test]
    fn decode_rejects_malformed_json() {
        assert!(matches!(decode("{"), Err(ObjectError::Json(_))));
    }

    #[test]
    fn new_object_rejects_unknown_type() {
        assert!(new_object("campaign").is_err());
    }
}
