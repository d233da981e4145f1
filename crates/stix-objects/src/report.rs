//! The Report SDO.

use serde::{Deserialize, Serialize};
use stix_types::Timestamp;

use crate::common::CommonObjectProperties;
use crate::object::{impl_stix_object, StixObject};
use crate::properties::{
    impl_property, DescriptionProperty, NameProperty, ObjectRefsProperty,
};

/// A published collection of threat intelligence about one or more topics.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    #[serde(flatten)]
    pub common: CommonObjectProperties,
    #[serde(flatten)]
    pub name: NameProperty,
    #[serde(flatten)]
    pub description: DescriptionProperty,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub report_types: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published: Option<Timestamp>,
    #[serde(flatten)]
    pub object_refs: ObjectRefsProperty,
}

impl Report {
    pub fn new() -> Self {
        let mut obj = Self::default();
        obj.common.init_sdo(Self::OBJECT_TYPE);
        obj
    }

    pub fn report_types(&self) -> &[String] {
        &self.report_types
    }

    pub fn add_report_type(&mut self, report_type: impl Into<String>) {
        self.report_types.push(report_type.into());
    }

    pub fn published(&self) -> Option<&Timestamp> {
        self.published.as_ref()
    }

    pub fn set_published(&mut self, ts: Timestamp) {
        self.published = Some(ts);
    }
}

impl_stix_object!(Report, "report");
impl_property!(Named for Report, name_property / name_property_mut => name: NameProperty);
impl_property!(Described for Report, description_property / description_property_mut => description: DescriptionProperty);
impl_property!(HasObjectRefs for Report, object_refs_property / object_refs_property_mut => object_refs: ObjectRefsProperty);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::properties::{HasObjectRefs, Named};

    #[test]
    fn new_stamps_report_type() {
        assert_eq!(Report::new().object_type(), "report");
    }

    #[test]
    fn roundtrip_with_published() {
        let mut r = Report::new();
        r.set_name("The Black Vine Cyberespionage Group");
        r.add_report_type("campaign");
        r.set_published(Timestamp::parse("2016-01-20T17:00:00.000Z").unwrap());
        r.add_object_ref("indicator--26ffb872-1dd9-446e-b6f5-d58527e5b5d2");

        let json = r.to_json().unwrap();
        assert!(json.contains(r#""report_types":["campaign"],"published":"2016-01-20T17:00:00.000Z","object_refs""#));
        let parsed: Report = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, r);
    }
}
