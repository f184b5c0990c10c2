use std::fmt;

use insta::assert_snapshot;
use optval::{Element, Object, Optional};

mod common;

#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Element)]
struct Asn(u32);

impl fmt::Display for Asn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AS{}", self.0)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Element)]
#[element(null = is_anonymous)]
struct PeerName(String);

impl PeerName {
    fn is_anonymous(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for PeerName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[test]
fn derived_element_uses_display() {
    let asn = Optional::some(Asn(65536));
    assert_snapshot!(asn.to_string(), @"AS65536");
    assert_snapshot!(asn.to_object().to_string(), @"AS65536");
}

#[test]
fn derived_element_narrows() {
    common::init();

    let asn = Optional::some(Asn(10)).to_object();
    assert_eq!(asn.value_or_default_as(Asn(0)), Asn(10));
    assert_eq!(asn.value_or_default_as::<u32>(7), 0);
}

#[test]
fn derived_null() {
    let anonymous = Optional::some(PeerName(String::new()));
    assert!(anonymous.has_value());
    assert_snapshot!(anonymous.to_string(), @"(null)");
    assert_eq!(
        anonymous.value_or_default_as(PeerName("fallback".into())),
        PeerName(String::new())
    );

    let obj = Object::new(PeerName(String::new()));
    assert!(obj.is_null());
    assert_eq!(obj, Object::null());
    assert_eq!(obj.type_name(), None);
    assert_snapshot!(obj.to_string(), @"(null)");
    assert_eq!(
        anonymous.to_object(),
        Optional::some(None::<PeerName>).to_object()
    );

    let named = Optional::some(PeerName("rr1".into()));
    assert_snapshot!(named.to_string(), @"rr1");
}
