//! The Grouping SDO.
//!
//! A Grouping asserts that the referenced objects share a context, e.g. all
//! objects gathered during one investigation.

use serde::{Deserialize, Serialize};

use crate::common::CommonObjectProperties;
use crate::object::{impl_stix_object, StixObject};
use crate::properties::{
    impl_property, DescriptionProperty, NameProperty, ObjectRefsProperty,
};

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grouping {
    #[serde(flatten)]
    pub common: CommonObjectProperties,
    #[serde(flatten)]
    pub name: NameProperty,
    #[serde(flatten)]
    pub description: DescriptionProperty,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub context: String,
    #[serde(flatten)]
    pub object_refs: ObjectRefsProperty,
}

impl Grouping {
    /// Create a new Grouping stamped with type, id, and timestamps.
    pub fn new() -> Self {
        let mut obj = Self::default();
        obj.common.init_sdo(Self::OBJECT_TYPE);
        obj
    }

    pub fn context(&self) -> &str {
        &self.context
    }

    /// Set the context, e.g. `suspicious-activity` or `malware-analysis`.
    pub fn set_context(&mut self, context: impl Into<String>) {
        self.context = context.into();
    }
}

impl_stix_object!(Grouping, "grouping");
impl_property!(Named for Grouping, name_property / name_property_mut => name: NameProperty);
impl_property!(Described for Grouping, description_property / description_property_mut => description: DescriptionProperty);
impl_property!(HasObjectRefs for Grouping, object_refs_property / object_refs_property_mut => object_refs: ObjectRefsProperty);
