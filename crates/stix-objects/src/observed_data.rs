//! The Observed Data SDO.

use serde::{Deserialize, Serialize};

use crate::common::{is_zero, CommonObjectProperties};
use crate::object::{impl_stix_object, StixObject};
use crate::properties::{impl_property, ObjectRefsProperty};

/// Raw cyber data (files, systems, network traffic) seen between
/// `first_observed` and `last_observed`, `number_observed` times.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObservedData {
    #[serde(flatten)]
    pub common: CommonObjectProperties,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub first_observed: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub last_observed: String,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub number_observed: u64,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub objects: String,
    #[serde(flatten)]
    pub object_refs: ObjectRefsProperty,
}

impl ObservedData {
    /// Create a new Observed Data object stamped with type, id, and timestamps.
    pub fn new() -> Self {
        let mut obj = Self::default();
        obj.common.init_sdo(Self::OBJECT_TYPE);
        obj
    }

    pub fn first_observed(&self) -> &str {
        &self.first_observed
    }

    pub fn set_first_observed(&mut self, ts: impl Into<String>) {
        self.first_observed = ts.into();
    }

    pub fn last_observed(&self) -> &str {
        &self.last_observed
    }

    pub fn set_last_observed(&mut self, ts: impl Into<String>) {
        self.last_observed = ts.into();
    }

    pub fn number_observed(&self) -> u64 {
        self.number_observed
    }

    pub fn set_number_observed(&mut self, count: u64) {
        self.number_observed = count;
    }

    pub fn objects(&self) -> &str {
        &self.objects
    }

    pub fn set_objects(&mut self, objects: impl Into<String>) {
        self.objects = objects.into();
    }
}

impl_stix_object!(ObservedData, "observed-data");
impl_property!(HasObjectRefs for ObservedData, object_refs_property / object_refs_property_mut => object_refs: ObjectRefsProperty);
