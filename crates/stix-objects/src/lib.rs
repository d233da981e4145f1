//! STIX 2.1 objects built by property composition.
//!
//! Every typed object is a flat struct made of [`CommonObjectProperties`],
//! zero or more property groups from [`properties`], and its own fields. The
//! groups are embedded by value and flattened into the object's JSON, so the
//! serialized field order is: common properties, then groups and own fields in
//! declaration order.
//!
//! Objects must be created through their `new()` constructors, which stamp the
//! `type`, `spec_version`, and `id` (and, for domain objects, `created` and
//! `modified`). `Default` values are unstamped.
//!
//! # Modules
//!
//! - [`properties`] — Reusable property groups and their accessor traits
//! - [`common`] — [`CommonObjectProperties`] and [`ExternalReference`]
//! - [`object`] — The [`StixObject`] trait
//! - [`grouping`], [`observed_data`], [`report`], [`note`] — Domain objects
//! - [`observable`] — Domain name and IP address observables
//! - [`decode`] — Decoding documents of unknown type into [`AnyObject`]

pub mod common;
pub mod decode;
pub mod error;
pub mod grouping;
pub mod note;
pub mod object;
pub mod observable;
pub mod observed_data;
pub mod properties;
pub mod report;

pub use common::{CommonObjectProperties, ExternalReference};
pub use decode::{decode, new_object, AnyObject, OBJECT_TYPES};
pub use error::{ObjectError, Result};
pub use grouping::Grouping;
pub use note::Note;
pub use object::StixObject;
pub use observable::{DomainName, Ipv4Addr, Ipv6Addr};
pub use observed_data::ObservedData;
pub use properties::{
    Described, HasObjectRefs, HasValue, Named, ResolvesToRefs,
};
pub use report::Report;
