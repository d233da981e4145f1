//! TAXII 2.1 resources.
//!
//! This crate provides the collection registry a TAXII server consults to
//! answer discovery requests and to gate object reads and writes, along with
//! the Discovery and API Root documents.
//!
//! # Architecture
//!
//! - A [`Collection`] carries its public description (`id`, `title`,
//!   `description`, `media_types`), its client permissions (`can_read`,
//!   `can_write`), and local policy flags (`enabled`, `hidden`) that are never
//!   serialized.
//! - [`Collections`] owns collections by value in insertion order. Entries are
//!   appended whole with [`Collections::add_collection`] or created in place
//!   with [`Collections::get_new_collection`].
//! - A [`CollectionRecord`] pairs a collection id with an object id for an
//!   external persistence layer.
//! - [`RegistryConfig`] builds a registry from a TOML file.
//!
//! # Modules
//!
//! - [`error`] — Error types for configuration and encoding
//! - [`properties`] — `id`, `title`, `description` property groups
//! - [`collection`] — [`Collection`], [`Collections`], [`CollectionRecord`]
//! - [`discovery`] — [`Discovery`] and [`ApiRoot`]
//! - [`config`] — [`RegistryConfig`]

pub mod collection;
pub mod config;
pub mod discovery;
pub mod error;
pub mod properties;

pub use collection::{Collection, CollectionRecord, Collections};
pub use config::{CollectionConfig, RegistryConfig};
pub use discovery::{ApiRoot, Discovery, TAXII_MEDIA_TYPE};
pub use error::{ResourceError, Result};
pub use properties::{Described, HasId, Titled};
