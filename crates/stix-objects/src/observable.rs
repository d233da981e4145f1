//! Cyber observables that resolve to other observables: domain names and
//! IP addresses.
//!
//! These share one shape: common properties (stamped with `init_sco`), a
//! `value`, and `resolves_to_refs`.

use serde::{Deserialize, Serialize};

use crate::common::CommonObjectProperties;
use crate::object::impl_stix_object;
use crate::properties::{impl_property, ResolvesToRefsProperty, ValueProperty};

macro_rules! resolving_observable {
    ($(#[$meta:meta])* $name:ident, $object_type:literal) => {
        $(#[$meta])*
        #[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
        pub struct $name {
            #[serde(flatten)]
            pub common: CommonObjectProperties,
            #[serde(flatten)]
            pub value: ValueProperty,
            #[serde(flatten)]
            pub resolves_to_refs: ResolvesToRefsProperty,
        }

        impl $name {
            pub fn new() -> Self {
                let mut obj = Self::default();
                obj.common.init_sco(<Self as $crate::object::StixObject>::OBJECT_TYPE);
                obj
            }

            /// Create a new observable with `value` already set.
            pub fn with_value(value: impl Into<String>) -> Self {
                let mut obj = Self::new();
                obj.value.set_value(value);
                obj
            }
        }

        impl_stix_object!($name, $object_type);
        impl_property!(HasValue for $name, value_property / value_property_mut => value: ValueProperty);
        impl_property!(ResolvesToRefs for $name, resolves_to_refs_property / resolves_to_refs_property_mut => resolves_to_refs: ResolvesToRefsProperty);
    };
}

resolving_observable!(
    /// The `domain-name` observable.
    DomainName,
    "domain-name"
);

resolving_observable!(
    /// The `ipv4-addr` observable. `value` may be a single address or a CIDR block.
    Ipv4Addr,
    "ipv4-addr"
);

resolving_observable!(
    /// The `ipv6-addr` observable.
    Ipv6Addr,
    "ipv6-addr"
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::object::StixObject;
    use crate::properties::{HasValue, ResolvesToRefs};

    #[test]
    fn observables_have_no_timestamps() {
        let d = DomainName::with_value("example.com");
        assert_eq!(d.object_type(), "domain-name");
        assert!(d.created().is_none());
        let value: serde_json::Value = serde_json::from_str(&d.to_json().unwrap()).unwrap();
        assert!(value.get("created").is_none());
        assert_eq!(value["value"], "example.com");
    }

    #[test]
    fn domain_resolves_to_address() {
        let addr = Ipv4Addr::with_value("198.51.100.3");
        let mut d = DomainName::with_value("example.com");
        d.add_resolves_to_ref(addr.id().unwrap().as_str());

        assert_eq!(d.resolves_to_refs().len(), 1);
        assert!(d.resolves_to_refs()[0].starts_with("ipv4-addr--"));

        let parsed: DomainName = serde_json::from_str(&d.to_json().unwrap()).unwrap();
        assert_eq!(parsed, d);
        assert_eq!(parsed.value(), "example.com");
    }

    #[test]
    fn ipv6_type_stamp() {
        let a = Ipv6Addr::new();
        assert_eq!(a.object_type(), "ipv6-addr");
        assert!(a.is_well_formed());
    }
}
