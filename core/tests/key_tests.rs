use holey::key::parse_index;
use holey::PropertyKey;

#[test]
fn canonical_integers_are_indices() {
    assert_eq!(PropertyKey::classify("0"), PropertyKey::Index(0));
    assert_eq!(PropertyKey::classify("7"), PropertyKey::Index(7));
    assert_eq!(
        PropertyKey::classify("4294967294"),
        PropertyKey::Index(4_294_967_294)
    );
}

#[test]
fn non_canonical_forms_are_names() {
    for key in ["1.0", "-1", "01", "00", "+1", "1e3", " 1", "1 ", "", "4294967295", "99999999999"] {
        assert_eq!(
            PropertyKey::classify(key),
            PropertyKey::Name(key.to_string()),
            "{key:?} should be a name"
        );
    }
}

#[test]
fn arbitrary_strings_are_names() {
    assert_eq!(PropertyKey::from("length"), PropertyKey::Name("length".into()));
    assert_eq!(PropertyKey::from("foo"), PropertyKey::Name("foo".into()));
    assert_eq!(parse_index("١"), None);
}

#[test]
fn numbers_classify_through_their_string_form() {
    assert_eq!(PropertyKey::from(3.0), PropertyKey::Index(3));
    assert_eq!(PropertyKey::from(-0.0), PropertyKey::Index(0));
    assert_eq!(PropertyKey::from(1.5), PropertyKey::Name("1.5".into()));
    assert_eq!(PropertyKey::from(-1.0), PropertyKey::Name("-1".into()));
    assert_eq!(PropertyKey::from(f64::NAN), PropertyKey::Name("NaN".into()));
    assert_eq!(
        PropertyKey::from(4_294_967_295.0),
        PropertyKey::Name("4294967295".into())
    );
}

#[test]
fn integer_conversions_respect_the_index_range() {
    assert_eq!(PropertyKey::from(5u32), PropertyKey::Index(5));
    assert_eq!(PropertyKey::from(u32::MAX), PropertyKey::Name("4294967295".into()));
    assert_eq!(PropertyKey::from(-3i64), PropertyKey::Name("-3".into()));
    assert_eq!(PropertyKey::from(1i64 << 40), PropertyKey::Name("1099511627776".into()));
    assert_eq!(PropertyKey::from(2usize), PropertyKey::Index(2));
}

#[test]
fn owned_strings_keep_their_allocation_as_names() {
    let key = PropertyKey::from(String::from("label"));
    assert_eq!(key.as_index(), None);
    assert!(!key.is_index());
    assert_eq!(key.to_string(), "label");
    assert!(PropertyKey::from(String::from("12")).is_index());
}
