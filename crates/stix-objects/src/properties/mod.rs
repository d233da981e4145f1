//! Reusable property groups.
//!
//! Each group is a small value type owning one semantic concern. Typed
//! objects embed groups by value with `#[serde(flatten)]`, so a group's fields
//! appear inline in the object's JSON. Every group field is omitted from the
//! serialized form while unset.
//!
//! Each group also has an accessor trait (`Named`, `Described`, ...). An
//! object implementing the trait exposes the group's getters and setters
//! directly, e.g. `grouping.set_name("..")`.

pub mod description;
pub mod name;
pub mod object_refs;
pub mod resolves_to_refs;
pub mod value;

pub use description::{Described, DescriptionProperty};
pub use name::{NameProperty, Named};
pub use object_refs::{HasObjectRefs, ObjectRefsProperty};
pub use resolves_to_refs::{ResolvesToRefs, ResolvesToRefsProperty};
pub use value::{HasValue, ValueProperty};

/// Implement a group accessor trait for an object that embeds the group in
/// the named field.
///
/// ```ignore
/// impl_property!(Named for Grouping, name_property / name_property_mut => name: NameProperty);
/// ```
macro_rules! impl_property {
    ($trait:ident for $ty:ty, $get:ident / $get_mut:ident => $field:ident: $group:ty) => {
        impl $crate::properties::$trait for $ty {
            fn $get(&self) -> &$group {
                &self.$field
            }

            fn $get_mut(&mut self) -> &mut $group {
                &mut self.$field
            }
        }
    };
}

pub(crate) use impl_property;
