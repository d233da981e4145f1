use serde::{Deserialize, Serialize};

/// The `resolves_to_refs` property of domain names and network addresses.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvesToRefsProperty {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub resolves_to_refs: Vec<String>,
}

impl ResolvesToRefsProperty {
    pub fn resolves_to_refs(&self) -> &[String] {
        &self.resolves_to_refs
    }

    pub fn add_resolves_to_ref(&mut self, id: impl Into<String>) {
        self.resolves_to_refs.push(id.into());
    }
}

/// Accessors for objects embedding a [`ResolvesToRefsProperty`].
pub trait ResolvesToRefs {
    fn resolves_to_refs_property(&self) -> &ResolvesToRefsProperty;
    fn resolves_to_refs_property_mut(&mut self) -> &mut ResolvesToRefsProperty;

    fn resolves_to_refs(&self) -> &[String] {
        self.resolves_to_refs_property().resolves_to_refs()
    }

    fn add_resolves_to_ref(&mut self, id: impl Into<String>) {
        self.resolves_to_refs_property_mut().add_resolves_to_ref(id);
    }
}
