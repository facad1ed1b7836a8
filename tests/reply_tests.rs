//! Reply Tests
//!
//! Accessor and predicate behavior of the reply model.

use corral::Reply;

#[test]
fn test_accessors_match_their_variant() {
    assert_eq!(Reply::Status("OK".to_string()).as_status(), Some("OK"));
    assert_eq!(Reply::Integer(42).as_integer(), Some(42));
    assert_eq!(
        Reply::Bulk(Some("value".to_string())).as_bulk(),
        Some("value")
    );

    let array = Reply::Array(vec![Reply::Integer(1), Reply::Integer(2)]);
    assert_eq!(array.as_array().map(<[Reply]>::len), Some(2));
}

#[test]
fn test_accessors_never_fail_on_mismatch() {
    let reply = Reply::Error("wrongtype".to_string());
    assert_eq!(reply.as_status(), None);
    assert_eq!(reply.as_integer(), None);
    assert_eq!(reply.as_bulk(), None);
    assert!(reply.as_array().is_none());
}

#[test]
fn test_null_bulk_has_no_payload() {
    // A null bulk and a mismatch both read as None; callers that need the
    // distinction match on the variant.
    assert_eq!(Reply::Bulk(None).as_bulk(), None);
    assert!(matches!(Reply::Bulk(None), Reply::Bulk(None)));
}

#[test]
fn test_status_predicates() {
    assert!(Reply::Status("OK".to_string()).is_ok());
    assert!(Reply::Status("QUEUED".to_string()).is_queued());
    assert!(!Reply::Status("QUEUED".to_string()).is_ok());
    assert!(!Reply::Integer(1).is_ok());
    assert!(!Reply::Error("OK".to_string()).is_ok());
}
