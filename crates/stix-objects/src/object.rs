//! The [`StixObject`] trait implemented by every typed object.

use serde::Serialize;
use stix_types::{StixId, Timestamp};

use crate::common::CommonObjectProperties;
use crate::error::Result;

/// A typed STIX object built on [`CommonObjectProperties`].
///
/// `OBJECT_TYPE` is the canonical `type` string; the object's constructor
/// stamps it into the common properties. A value built with `Default` carries
/// no stamp and is not a well-formed object.
pub trait StixObject: Serialize {
    const OBJECT_TYPE: &'static str;

    fn common(&self) -> &CommonObjectProperties;
    fn common_mut(&mut self) -> &mut CommonObjectProperties;

    fn object_type(&self) -> &str {
        &self.common().object_type
    }

    fn id(&self) -> Option<&StixId> {
        self.common().id.as_ref()
    }

    fn spec_version(&self) -> &str {
        &self.common().spec_version
    }

    fn created(&self) -> Option<&Timestamp> {
        self.common().created.as_ref()
    }

    fn modified(&self) -> Option<&Timestamp> {
        self.common().modified.as_ref()
    }

    /// Returns `true` if the type stamp matches `OBJECT_TYPE`.
    fn is_well_formed(&self) -> bool {
        self.object_type() == Self::OBJECT_TYPE
    }

    fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Implement [`StixObject`] for a type whose common properties live in a
/// field named `common`.
macro_rules! impl_stix_object {
    ($ty:ty, $object_type:literal) => {
        impl $crate::object::StixObject for $ty {
            const OBJECT_TYPE: &'static str = $object_type;

            fn common(&self) -> &$crate::common::CommonObjectProperties {
                &self.common
            }

            fn common_mut(&mut self) -> &mut $crate::common::CommonObjectProperties {
                &mut self.common
            }
        }
    };
}

pub(crate) use impl_stix_object;
