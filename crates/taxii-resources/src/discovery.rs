//! TAXII Discovery and API Root resources.

use serde::{Deserialize, Serialize};

use crate::properties::{impl_property, DescriptionProperty, TitleProperty};

/// The TAXII version string advertised by API roots.
pub const TAXII_MEDIA_TYPE: &str = "application/taxii+json;version=2.1";

/// Server discovery document: which API roots a server hosts.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Discovery {
    #[serde(flatten)]
    pub title: TitleProperty,
    #[serde(flatten)]
    pub description: DescriptionProperty,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub contact: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub default: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub api_roots: Vec<String>,
}

impl Discovery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_contact(&mut self, contact: impl Into<String>) {
        self.contact = contact.into();
    }

    pub fn set_default(&mut self, api_root: impl Into<String>) {
        self.default = api_root.into();
    }

    pub fn add_api_root(&mut self, api_root: impl Into<String>) {
        self.api_roots.push(api_root.into());
    }
}

impl_property!(Titled for Discovery, title_property / title_property_mut => title: TitleProperty);
impl_property!(Described for Discovery, description_property / description_property_mut => description: DescriptionProperty);

/// Information about one API root: supported TAXII versions and the largest
/// request body it accepts.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiRoot {
    #[serde(flatten)]
    pub title: TitleProperty,
    #[serde(flatten)]
    pub description: DescriptionProperty,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub versions: Vec<String>,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub max_content_length: u64,
}

fn is_zero<T: Default + PartialEq>(v: &T) -> bool {
    *v == T::default()
}

impl ApiRoot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_version(&mut self, version: impl Into<String>) {
        self.versions.push(version.into());
    }

    pub fn set_max_content_length(&mut self, bytes: u64) {
        self.max_content_length = bytes;
    }
}

impl_property!(Titled for ApiRoot, title_property / title_property_mut => title: TitleProperty);
impl_property!(Described for ApiRoot, description_property / description_property_mut => description: DescriptionProperty);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::properties::Titled;

    #[test]
    fn discovery_document() {
        let mut d = Discovery::new();
        d.set_title("Some TAXII Server");
        d.set_contact("ops@example.com");
        d.set_default("https://example.com/api2/");
        d.add_api_root("https://example.com/api1/");
        d.add_api_root("https://example.com/api2/");
        assert_eq!(
            serde_json::to_string(&d).unwrap(),
            concat!(
                r#"{"title":"Some TAXII Server","contact":"ops@example.com","#,
                r#""default":"https://example.com/api2/","#,
                r#""api_roots":["https://example.com/api1/","https://example.com/api2/"]}"#
            )
        );
    }

    #[test]
    fn api_root_omits_zero_length() {
        let mut root = ApiRoot::new();
        root.set_title("Malware Research Group");
        root.add_version(TAXII_MEDIA_TYPE);
        assert_eq!(
            serde_json::to_string(&root).unwrap(),
            r#"{"title":"Malware Research Group","versions":["application/taxii+json;version=2.1"]}"#
        );

        root.set_max_content_length(104_857_600);
        let parsed: ApiRoot = serde_json::from_str(&serde_json::to_string(&root).unwrap()).unwrap();
        assert_eq!(parsed.max_content_length, 104_857_600);
    }
}
