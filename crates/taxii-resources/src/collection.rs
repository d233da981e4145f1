//! The TAXII Collection registry.
//!
//! A [`Collection`] describes one named group of objects and the access
//! policy a transport layer enforces for it. [`Collections`] is the ordered
//! registry of all collections served under one API root, and
//! [`CollectionRecord`] pairs a collection with an object stored in it.
//!
//! The registry performs no locking. A server sharing it across requests
//! wraps it in its own `RwLock`.

use serde::{Deserialize, Serialize};
use stix_types::Timestamp;
use tracing::debug;

use crate::error::Result;
use crate::properties::{impl_property, DescriptionProperty, IdProperty, TitleProperty};

/// One TAXII Collection and its access policy.
///
/// `date_added`, `enabled` and `hidden` are local policy metadata and are
/// never serialized. `can_read` and `can_write` are always serialized, even
/// when `false`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Collection {
    #[serde(skip)]
    pub date_added: Option<Timestamp>,
    #[serde(skip)]
    pub enabled: bool,
    #[serde(skip)]
    pub hidden: bool,
    #[serde(flatten)]
    pub id: IdProperty,
    #[serde(flatten)]
    pub title: TitleProperty,
    #[serde(flatten)]
    pub description: DescriptionProperty,
    #[serde(default)]
    pub can_read: bool,
    #[serde(default)]
    pub can_write: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub media_types: Vec<String>,
}

impl Collection {
    /// A collection with every flag off and no media types.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_enabled(&mut self) {
        self.enabled = true;
    }

    pub fn set_disabled(&mut self) {
        self.enabled = false;
    }

    pub fn set_hidden(&mut self) {
        self.hidden = true;
    }

    pub fn set_visible(&mut self) {
        self.hidden = false;
    }

    pub fn set_can_read(&mut self) {
        self.can_read = true;
    }

    pub fn set_can_write(&mut self) {
        self.can_write = true;
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    pub fn can_read(&self) -> bool {
        self.can_read
    }

    pub fn can_write(&self) -> bool {
        self.can_write
    }

    pub fn date_added(&self) -> Option<&Timestamp> {
        self.date_added.as_ref()
    }

    pub fn set_date_added(&mut self, ts: Timestamp) {
        self.date_added = Some(ts);
    }

    pub fn media_types(&self) -> &[String] {
        &self.media_types
    }

    /// Append a supported media type. Duplicates are kept.
    pub fn add_media_type(&mut self, media_type: impl Into<String>) {
        self.media_types.push(media_type.into());
    }
}

impl_property!(HasId for Collection, id_property / id_property_mut => id: IdProperty);
impl_property!(Titled for Collection, title_property / title_property_mut => title: TitleProperty);
impl_property!(Described for Collection, description_property / description_property_mut => description: DescriptionProperty);

/// The ordered registry of collections.
///
/// Entries keep their insertion order and are never removed. Collection ids
/// are not checked for uniqueness.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Collections {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub collections: Vec<Collection>,
}

impl Collections {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an already built collection and return its zero-based index.
    pub fn add_collection(&mut self, collection: Collection) -> usize {
        let index = self.collections.len();
        debug!(index, id = %collection.id.id, "collection added");
        self.collections.push(collection);
        index
    }

    /// Append a fresh collection and return it for in-place configuration.
    ///
    /// The returned reference borrows the registry, so it cannot be held
    /// across a later append.
    pub fn get_new_collection(&mut self) -> &mut Collection {
        let index = self.collections.len();
        self.collections.push(Collection::new());
        debug!(index, "new collection created");
        &mut self.collections[index]
    }

    pub fn get(&self, index: usize) -> Option<&Collection> {
        self.collections.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Collection> {
        self.collections.get_mut(index)
    }

    /// First collection with the given id.
    pub fn find(&self, id: &str) -> Option<&Collection> {
        self.collections.iter().find(|c| c.id.id == id)
    }

    pub fn len(&self) -> usize {
        self.collections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.collections.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Collection> {
        self.collections.iter()
    }

    /// Collections that are enabled and not hidden, in registry order.
    pub fn visible(&self) -> impl Iterator<Item = &Collection> {
        self.collections.iter().filter(|c| c.enabled && !c.hidden)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// The registry as seen by discovery clients: only visible collections.
    pub fn discovery_view(&self) -> Collections {
        Collections {
            collections: self.visible().cloned().collect(),
        }
    }
}

/// Membership of one object in one collection, handed to a persistence
/// layer for storage.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CollectionRecord {
    pub collection_id: String,
    pub stix_id: String,
}

impl CollectionRecord {
    pub fn new(collection_id: impl Into<String>, stix_id: impl Into<String>) -> Self {
        Self {
            collection_id: collection_id.into(),
            stix_id: stix_id.into(),
        }
    }
}
