//! Foundation types for the STIX 2.1 object model.
//!
//! Every other crate in the workspace depends on `stix-types` for the
//! identifier and timestamp primitives stamped onto objects at construction.
//!
//! # Key Types
//!
//! - [`StixId`] — `<object-type>--<uuid>` identifier
//! - [`Timestamp`] — RFC 3339 UTC timestamp with millisecond precision
//! - [`TypeError`] — parse failures for the above

pub mod error;
pub mod id;
pub mod timestamp;

pub use error::TypeError;
pub use id::StixId;
pub use timestamp::Timestamp;

/// The STIX specification version stamped onto every new object.
pub const SPEC_VERSION: &str = "2.1";

/// The TAXII media type for STIX 2.1 content.
pub const STIX_MEDIA_TYPE: &str = "application/stix+json;version=2.1";
