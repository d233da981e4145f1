use serde::{Deserialize, Serialize};

/// The `name` property.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameProperty {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
}

impl NameProperty {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }
}

/// Accessors for objects embedding a [`NameProperty`].
pub trait Named {
    fn name_property(&self) -> &NameProperty;
    fn name_property_mut(&mut self) -> &mut NameProperty;

    fn name(&self) -> &str {
        self.name_property().name()
    }

    fn set_name(&mut self, name: impl Into<String>) {
        self.name_property_mut().set_name(name);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_name_is_omitted() {
        let p = NameProperty::default();
        assert_eq!(serde_json::to_string(&p).unwrap(), "{}");
    }

    #[test]
    fn set_name_accepts_freeform_text() {
        let mut p = NameProperty::default();
        p.set_name("  Phishing wave #3 ");
        assert_eq!(p.name(), "  Phishing wave #3 ");
        assert_eq!(
            serde_json::to_string(&p).unwrap(),
            r#"{"name":"  Phishing wave #3 "}"#
        );
    }
}
