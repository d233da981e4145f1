use std::path::Path;

use serde::{Deserialize, Serialize};
use stix_types::{Timestamp, STIX_MEDIA_TYPE};
use tracing::info;

use crate::collection::{Collection, Collections};
use crate::error::Result;
use crate::properties::{Described, HasId, Titled};

/// Declarative description of a collection registry, usually read from TOML.
///
/// ```toml
/// default_media_types = ["application/stix+json;version=2.1"]
///
/// [[collections]]
/// id = "91a7b528-80eb-42ed-a74d-c6fbd5a26116"
/// title = "High Value Indicators"
/// can_read = true
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    /// Media types given to collections that declare none.
    pub default_media_types: Vec<String>,
    pub collections: Vec<CollectionConfig>,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            default_media_types: vec![STIX_MEDIA_TYPE.to_string()],
            collections: Vec::new(),
        }
    }
}

/// One collection entry in a [`RegistryConfig`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CollectionConfig {
    pub id: String,
    pub title: String,
    pub description: String,
    pub can_read: bool,
    pub can_write: bool,
    pub enabled: bool,
    pub hidden: bool,
    pub media_types: Vec<String>,
}

impl Default for CollectionConfig {
    fn default() -> Self {
        Self {
            id: String::new(),
            title: String::new(),
            description: String::new(),
            can_read: false,
            can_write: false,
            enabled: true,
            hidden: false,
            media_types: Vec::new(),
        }
    }
}

impl RegistryConfig {
    pub fn from_toml_str(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&text)?;
        info!(
            path = %path.display(),
            collections = config.collections.len(),
            "loaded registry config"
        );
        Ok(config)
    }

    /// Build a registry holding one collection per entry, in file order.
    /// Every collection is stamped with the build time as its date added.
    pub fn build(&self) -> Collections {
        let now = Timestamp::now();
        let mut registry = Collections::new();
        for entry in &self.collections {
            let c = registry.get_new_collection();
            entry.apply(c, &self.default_media_types);
            c.set_date_added(now.clone());
        }
        registry
    }
}

impl CollectionConfig {
    fn apply(&self, c: &mut Collection, default_media_types: &[String]) {
        c.set_id(self.id.as_str());
        c.set_title(self.title.as_str());
        c.set_description(self.description.as_str());
        if self.can_read {
            c.set_can_read();
        }
        if self.can_write {
            c.set_can_write();
        }
        if self.enabled {
            c.set_enabled();
        }
        if self.hidden {
            c.set_hidden();
        }
        let media_types = if self.media_types.is_empty() {
            default_media_types
        } else {
            &self.media_types
        };
        for media_type in media_types {
            c.add_media_type(media_type.as_str());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ResourceError;
    use std::io::Write;

    const SAMPLE: &str = r#"
[[collections]]
id = "91a7b528-80eb-42ed-a74d-c6fbd5a26116"
title = "High Value Indicators"
can_read = true

[[collections]]
id = "52892447-4d7e-4f70-b94d-d7f22742ff63"
title = "Staging"
can_write = true
hidden = true
media_types = ["application/json"]
"#;

    #[test]
    fn default_config() {
        let c = RegistryConfig::default();
        assert_eq!(c.default_media_types, vec![STIX_MEDIA_TYPE.to_string()]);
        assert!(c.collections.is_empty());
        assert!(c.build().is_empty());
    }

    #[test]
    fn collection_entries_default_to_enabled() {
        let c = RegistryConfig::from_toml_str("[[collections]]\nid = \"x\"\n").unwrap();
        assert!(c.collections[0].enabled);
        assert!(!c.collections[0].hidden);
    }

    #[test]
    fn build_preserves_order_and_policy() {
        let registry = RegistryConfig::from_toml_str(SAMPLE).unwrap().build();
        assert_eq!(registry.len(), 2);

        let first = registry.get(0).unwrap();
        assert_eq!(first.id(), "91a7b528-80eb-42ed-a74d-c6fbd5a26116");
        assert!(first.can_read() && !first.can_write());
        assert!(first.is_enabled() && !first.is_hidden());
        assert_eq!(first.media_types(), [STIX_MEDIA_TYPE]);
        assert!(first.date_added().is_some());

        let second = registry.get(1).unwrap();
        assert!(second.can_write() && second.is_hidden());
        assert_eq!(second.media_types(), ["application/json"]);

        let visible: Vec<&str> = registry.visible().map(|c| c.title()).collect();
        assert_eq!(visible, ["High Value Indicators"]);
    }

    #[test]
    fn invalid_toml_is_a_config_error() {
        let err = RegistryConfig::from_toml_str("collections = 3").unwrap_err();
        assert!(matches!(err, ResourceError::Config(_)));
    }

    #[test]
    fn from_file_reads_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();
        let config = RegistryConfig::from_file(file.path()).unwrap();
        assert_eq!(config.collections.len(), 2);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = RegistryConfig::from_file("/nonexistent/registry.toml").unwrap_err();
        assert!(matches!(err, ResourceError::Io(_)));
    }
}
