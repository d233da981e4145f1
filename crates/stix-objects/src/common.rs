//! Properties shared by every STIX object.
//!
//! [`CommonObjectProperties`] is embedded (flattened) first in every typed
//! object, so its fields lead the serialized form. It is populated once by
//! [`CommonObjectProperties::init_sdo`] or [`CommonObjectProperties::init_sco`]
//! when the owning object is constructed, and changed afterwards only through
//! the setters below.

use serde::{Deserialize, Serialize};
use stix_types::{StixId, Timestamp, SPEC_VERSION};

/// A pointer to a source outside of STIX (CAPEC entry, CVE, vendor report).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExternalReference {
    #[serde(default)]
    pub source_name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub url: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub external_id: String,
}

impl ExternalReference {
    pub fn new(source_name: impl Into<String>) -> Self {
        Self {
            source_name: source_name.into(),
            ..Default::default()
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommonObjectProperties {
    #[serde(rename = "type", default, skip_serializing_if = "String::is_empty")]
    pub object_type: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub spec_version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<StixId>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub created_by_ref: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<Timestamp>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modified: Option<Timestamp>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub revoked: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub labels: Vec<String>,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub confidence: u8,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub lang: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub external_references: Vec<ExternalReference>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub object_marking_refs: Vec<String>,
}

pub(crate) fn is_zero<T: Default + PartialEq>(v: &T) -> bool {
    *v == T::default()
}

impl CommonObjectProperties {
    /// Stamp the identity of a new STIX Domain Object of the given type:
    /// type, spec version, a fresh id, and `created == modified == now`.
    pub fn init_sdo(&mut self, object_type: &str) {
        self.init_sco(object_type);
        self.set_created_to_current_time();
        self.set_modified_to_created();
    }

    /// Stamp the identity of a new cyber observable. Observables carry no
    /// `created`/`modified` timestamps.
    pub fn init_sco(&mut self, object_type: &str) {
        self.object_type = object_type.to_string();
        self.spec_version = SPEC_VERSION.to_string();
        self.set_new_stix_id(object_type);
    }

    /// Replace the id with a freshly minted one for `object_type`.
    pub fn set_new_stix_id(&mut self, object_type: &str) {
        self.id = Some(StixId::new(object_type));
    }

    pub fn set_id(&mut self, id: StixId) {
        self.id = Some(id);
    }

    pub fn set_created_by_ref(&mut self, id: impl Into<String>) {
        self.created_by_ref = id.into();
    }

    pub fn set_created(&mut self, ts: Timestamp) {
        self.created = Some(ts);
    }

    pub fn set_created_to_current_time(&mut self) {
        self.created = Some(Timestamp::now());
    }

    pub fn set_modified(&mut self, ts: Timestamp) {
        self.modified = Some(ts);
    }

    pub fn set_modified_to_current_time(&mut self) {
        self.modified = Some(Timestamp::now());
    }

    pub fn set_modified_to_created(&mut self) {
        self.modified = self.created.clone();
    }

    pub fn set_revoked(&mut self) {
        self.revoked = true;
    }

    pub fn add_label(&mut self, label: impl Into<String>) {
        self.labels.push(label.into());
    }

    /// Confidence is 0-100 in STIX; values are stored as given.
    pub fn set_confidence(&mut self, confidence: u8) {
        self.confidence = confidence;
    }

    pub fn set_lang(&mut self, lang: impl Into<String>) {
        self.lang = lang.into();
    }

    pub fn add_external_reference(&mut self, reference: ExternalReference) {
        self.external_references.push(reference);
    }

    pub fn add_object_marking_ref(&mut self, id: impl Into<String>) {
        self.object_marking_refs.push(id.into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_value_serializes_empty() {
        let common = CommonObjectProperties::default();
        assert_eq!(serde_json::to_string(&common).unwrap(), "{}");
    }

    #[test]
    fn init_sdo_stamps_identity_and_timestamps() {
        let mut common = CommonObjectProperties::default();
        common.init_sdo("grouping");
        assert_eq!(common.object_type, "grouping");
        assert_eq!(common.spec_version, "2.1");
        assert_eq!(common.id.as_ref().unwrap().object_type(), "grouping");
        assert!(common.created.is_some());
        assert_eq!(common.created, common.modified);
    }

    #[test]
    fn init_sco_has_no_timestamps() {
        let mut common = CommonObjectProperties::default();
        common.init_sco("domain-name");
        assert_eq!(common.object_type, "domain-name");
        assert!(common.id.is_some());
        assert!(common.created.is_none());
        assert!(common.modified.is_none());
    }

    #[test]
    fn field_order_is_stable() {
        let mut common = CommonObjectProperties::default();
        common.object_type = "note".into();
        common.spec_version = "2.1".into();
        common.set_created_by_ref("identity--1");
        common.set_revoked();
        common.add_label("a");
        common.set_confidence(80);
        let json = serde_json::to_string(&common).unwrap();
        assert_eq!(
            json,
            r#"{"type":"note","spec_version":"2.1","created_by_ref":"identity--1","revoked":true,"labels":["a"],"confidence":80}"#
        );
    }

    #[test]
    fn external_reference_roundtrip() {
        let mut common = CommonObjectProperties::default();
        let mut reference = ExternalReference::new("capec");
        reference.external_id = "CAPEC-163".into();
        common.add_external_reference(reference.clone());
        let json = serde_json::to_string(&common).unwrap();
        assert_eq!(
            json,
            r#"{"external_references":[{"source_name":"capec","external_id":"CAPEC-163"}]}"#
        );
        let parsed: CommonObjectProperties = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.external_references, vec![reference]);
    }
}
