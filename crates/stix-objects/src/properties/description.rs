use serde::{Deserialize, Serialize};

/// The `description` property.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DescriptionProperty {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
}

impl DescriptionProperty {
    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }
}

/// Accessors for objects embedding a [`DescriptionProperty`].
pub trait Described {
    fn description_property(&self) -> &DescriptionProperty;
    fn description_property_mut(&mut self) -> &mut DescriptionProperty;

    fn description(&self) -> &str {
        self.description_property().description()
    }

    fn set_description(&mut self, description: impl Into<String>) {
        self.description_property_mut().set_description(description);
    }
}
