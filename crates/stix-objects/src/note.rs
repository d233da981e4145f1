//! The Note SDO.

use serde::{Deserialize, Serialize};

use crate::common::CommonObjectProperties;
use crate::object::{impl_stix_object, StixObject};
use crate::properties::{impl_property, ObjectRefsProperty};

/// Analyst commentary attached to one or more objects.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    #[serde(flatten)]
    pub common: CommonObjectProperties,
    #[serde(rename = "abstract", default, skip_serializing_if = "String::is_empty")]
    pub summary: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub content: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub authors: Vec<String>,
    #[serde(flatten)]
    pub object_refs: ObjectRefsProperty,
}

impl Note {
    pub fn new() -> Self {
        let mut obj = Self::default();
        obj.common.init_sdo(Self::OBJECT_TYPE);
        obj
    }

    /// The `abstract` property.
    pub fn summary(&self) -> &str {
        &self.summary
    }

    pub fn set_summary(&mut self, summary: impl Into<String>) {
        self.summary = summary.into();
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
    }

    pub fn add_author(&mut self, author: impl Into<String>) {
        self.authors.push(author.into());
    }
}

impl_stix_object!(Note, "note");
impl_property!(HasObjectRefs for Note, object_refs_property / object_refs_property_mut => object_refs: ObjectRefsProperty);
