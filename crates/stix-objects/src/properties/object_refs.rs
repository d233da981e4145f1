use serde::{Deserialize, Serialize};

/// The `object_refs` property: ordered identifiers of referenced objects.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectRefsProperty {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub object_refs: Vec<String>,
}

impl ObjectRefsProperty {
    pub fn object_refs(&self) -> &[String] {
        &self.object_refs
    }

    /// Append a reference. Order is kept and duplicates are not removed.
    pub fn add_object_ref(&mut self, id: impl Into<String>) {
        self.object_refs.push(id.into());
    }

    pub fn set_object_refs(&mut self, ids: Vec<String>) {
        self.object_refs = ids;
    }
}

/// Accessors for objects embedding an [`ObjectRefsProperty`].
pub trait HasObjectRefs {
    fn object_refs_property(&self) -> &ObjectRefsProperty;
    fn object_refs_property_mut(&mut self) -> &mut ObjectRefsProperty;

    fn object_refs(&self) -> &[String] {
        self.object_refs_property().object_refs()
    }

    fn add_object_ref(&mut self, id: impl Into<String>) {
        self.object_refs_property_mut().add_object_ref(id);
    }

    fn set_object_refs(&mut self, ids: Vec<String>) {
        self.object_refs_property_mut().set_object_refs(ids);
    }
}
