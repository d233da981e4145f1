use serde::{Deserialize, Serialize};

/// The `value` property of cyber observables (domain names, addresses).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValueProperty {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub value: String,
}

impl ValueProperty {
    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }
}

/// Accessors for objects embedding a [`ValueProperty`].
pub trait HasValue {
    fn value_property(&self) -> &ValueProperty;
    fn value_property_mut(&mut self) -> &mut ValueProperty;

    fn value(&self) -> &str {
        self.value_property().value()
    }

    fn set_value(&mut self, value: impl Into<String>) {
        self.value_property_mut().set_value(value);
    }
}
