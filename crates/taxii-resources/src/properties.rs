//! Property groups shared by TAXII resources.

use serde::{Deserialize, Serialize};

/// The `id` property of a resource.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdProperty {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
}

/// The `title` property of a resource.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TitleProperty {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub title: String,
}

/// The `description` property of a resource.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DescriptionProperty {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
}

/// Accessors for resources embedding an [`IdProperty`].
pub trait HasId {
    fn id_property(&self) -> &IdProperty;
    fn id_property_mut(&mut self) -> &mut IdProperty;

    fn id(&self) -> &str {
        &self.id_property().id
    }

    fn set_id(&mut self, id: impl Into<String>) {
        self.id_property_mut().id = id.into();
    }
}

/// Accessors for resources embedding a [`TitleProperty`].
pub trait Titled {
    fn title_property(&self) -> &TitleProperty;
    fn title_property_mut(&mut self) -> &mut TitleProperty;

    fn title(&self) -> &str {
        &self.title_property().title
    }

    fn set_title(&mut self, title: impl Into<String>) {
        self.title_property_mut().title = title.into();
    }
}

/// Accessors for resources embedding a [`DescriptionProperty`].
pub trait Described {
    fn description_property(&self) -> &DescriptionProperty;
    fn description_property_mut(&mut self) -> &mut DescriptionProperty;

    fn description(&self) -> &str {
        &self.description_property().description
    }

    fn set_description(&mut self, description: impl Into<String>) {
        self.description_property_mut().description = description.into();
    }
}

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
