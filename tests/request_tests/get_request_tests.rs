//! Tests for GetRequest configuration
//!
//! These tests verify:
//! - Construction defaults and the fixed lookup/existence kind
//! - Setter validation (family, qualifiers, max versions)
//! - Replacement semantics of qualifier setters

use bytes::Bytes;
use regionwire::{GetRequest, RequestKind, RowLock, ScanFilter, WireError};

struct PrefixFilter(&'static [u8]);

impl ScanFilter for PrefixFilter {
    fn name(&self) -> Bytes {
        Bytes::from_static(b"org.apache.hadoop.hbase.filter.PrefixFilter")
    }

    fn serialize(&self) -> Bytes {
        Bytes::from_static(self.0)
    }
}

// =============================================================================
// Construction Tests
// =============================================================================

#[test]
fn test_new_has_defaults() {
    let req = GetRequest::new("table", "row").unwrap();

    assert_eq!(req.table().as_ref(), b"table");
    assert_eq!(req.key().as_ref(), b"row");
    assert!(req.family().is_none());
    assert!(req.qualifiers().is_none());
    assert_eq!(req.lock_id(), RowLock::NO_LOCK);
    assert_eq!(req.max_versions(), 1);
    assert!(!req.is_exists());
    assert_eq!(req.min_timestamp(), 0);
    assert_eq!(req.max_timestamp(), i64::MAX as u64);
    assert_eq!(req.store_limit(), None);
    assert_eq!(req.store_offset(), 0);
    assert_eq!(req.rpc_timeout_ms(), GetRequest::DEFAULT_RPC_TIMEOUT_MS);
    assert_eq!(req.max_attempts(), GetRequest::DEFAULT_MAX_ATTEMPTS);
}

#[test]
fn test_empty_table_rejected() {
    let err = GetRequest::new("", "row").unwrap_err();
    assert!(matches!(err, WireError::MissingArgument("table")));

    let err = GetRequest::exists(Bytes::new(), "row").unwrap_err();
    assert!(matches!(err, WireError::MissingArgument("table")));
}

#[test]
fn test_with_qualifier_constructor() {
    let req = GetRequest::with_qualifier("t", "r", "cf", "q1").unwrap();

    assert_eq!(req.family().unwrap().as_ref(), b"cf");
    assert_eq!(req.qualifiers().unwrap(), &[Bytes::from_static(b"q1")]);
}

#[test]
fn test_byte_and_string_inputs_agree() {
    let from_str = GetRequest::with_family("t", "r", "cf").unwrap();
    let from_bytes = GetRequest::with_family(b"t".to_vec(), b"r".to_vec(), b"cf".to_vec()).unwrap();

    assert_eq!(from_str.table(), from_bytes.table());
    assert_eq!(from_str.key(), from_bytes.key());
    assert_eq!(from_str.family(), from_bytes.family());
}

#[test]
fn test_exists_kind_is_permanent() {
    let req = GetRequest::exists_in_family("t", "r", "cf")
        .unwrap()
        .set_max_versions(4)
        .unwrap();

    assert!(req.is_exists());
    assert_eq!(req.kind(), RequestKind::Existence { max_versions: 4 });
    assert_eq!(req.family().unwrap().as_ref(), b"cf");
}

#[test]
fn test_lookup_kind_never_exists() {
    let req = GetRequest::new("t", "r").unwrap().set_max_versions(7).unwrap();
    assert_eq!(req.kind(), RequestKind::Lookup { max_versions: 7 });
    assert!(!req.is_exists());
}

// =============================================================================
// Validation Tests
// =============================================================================

#[test]
fn test_max_versions_must_be_positive() {
    for bad in [0, -1, i32::MIN] {
        let err = GetRequest::new("t", "r").unwrap().set_max_versions(bad).unwrap_err();
        assert!(matches!(err, WireError::InvalidArgument(_)), "{} accepted", bad);
    }
}

#[test]
fn test_max_versions_round_trips() {
    for n in [1, 2, 3, 1000, i32::MAX] {
        let req = GetRequest::new("t", "r").unwrap().set_max_versions(n).unwrap();
        assert_eq!(req.max_versions(), n);
    }
}

#[test]
fn test_invalid_family_rejected() {
    let too_long = vec![b'f'; 128];
    for bad in [&b""[..], b"cf:x", b"c\nf", &too_long[..]] {
        let err = GetRequest::new("t", "r")
            .unwrap()
            .set_family(Bytes::copy_from_slice(bad))
            .unwrap_err();
        assert!(matches!(err, WireError::InvalidFamily(_)));
    }
}

#[test]
fn test_longest_family_accepted() {
    let family = vec![b'f'; 127];
    let req = GetRequest::new("t", "r").unwrap().set_family(family).unwrap();
    assert_eq!(req.family().unwrap().len(), 127);
}

#[test]
fn test_empty_qualifier_rejected() {
    let err = GetRequest::new("t", "r").unwrap().set_qualifier("").unwrap_err();
    assert!(matches!(err, WireError::InvalidQualifier(_)));

    let err = GetRequest::new("t", "r")
        .unwrap()
        .set_qualifiers(["a", "", "c"])
        .unwrap_err();
    assert!(matches!(err, WireError::InvalidQualifier(_)));
}

#[test]
fn test_binary_qualifier_accepted() {
    let req = GetRequest::with_family("t", "r", "cf")
        .unwrap()
        .set_qualifier(Bytes::from_static(b"a:b\x00\n\xff"))
        .unwrap();
    assert_eq!(req.qualifiers().unwrap()[0].as_ref(), b"a:b\x00\n\xff");
}

// =============================================================================
// Replacement Semantics
// =============================================================================

#[test]
fn test_set_qualifier_replaces_list() {
    let req = GetRequest::new("t", "r")
        .unwrap()
        .set_qualifiers(["a", "b", "c"])
        .unwrap()
        .set_qualifier("z")
        .unwrap();

    assert_eq!(req.qualifiers().unwrap(), &[Bytes::from_static(b"z")]);
}

#[test]
fn test_set_qualifiers_replaces_single() {
    let req = GetRequest::new("t", "r")
        .unwrap()
        .set_qualifier("z")
        .unwrap()
        .set_qualifiers(vec!["a", "b"])
        .unwrap();

    assert_eq!(
        req.qualifiers().unwrap(),
        &[Bytes::from_static(b"a"), Bytes::from_static(b"b")]
    );
}

#[test]
fn test_set_family_replaces_family() {
    let req = GetRequest::with_family("t", "r", "one")
        .unwrap()
        .set_family("two")
        .unwrap();
    assert_eq!(req.family().unwrap().as_ref(), b"two");
}

// =============================================================================
// Filters, Locks and Hints
// =============================================================================

#[test]
fn test_scan_filter_sets_name_and_payload() {
    let req = GetRequest::new("t", "r")
        .unwrap()
        .set_scan_filter(&PrefixFilter(b"\x01abc"));

    let (name, payload) = req.filter_spec().unwrap();
    assert_eq!(name.as_ref(), b"org.apache.hadoop.hbase.filter.PrefixFilter");
    assert_eq!(payload.as_ref(), b"\x01abc");
    assert!(!req.has_partial_filter());
}

#[test]
fn test_raw_filter_without_name_is_partial() {
    let req = GetRequest::new("t", "r").unwrap().set_filter("payload");

    assert!(req.filter_spec().is_none());
    assert!(req.has_partial_filter());

    let req = req.set_filter_name("SomeFilter");
    assert!(req.filter_spec().is_some());
}

#[test]
fn test_row_lock_copies_id() {
    let lock = RowLock::new(42);
    let req = GetRequest::new("t", "r").unwrap().set_row_lock(&lock);
    assert_eq!(req.lock_id(), 42);
}

#[test]
fn test_hints_and_bounds() {
    let req = GetRequest::new("t", "r")
        .unwrap()
        .set_rpc_timeout_ms(1500)
        .set_max_attempts(3)
        .set_max_results_per_column_family(10)
        .set_row_offset_per_column_family(5)
        .set_min_timestamp(100)
        .set_max_timestamp(200);

    assert_eq!(req.rpc_timeout_ms(), 1500);
    assert_eq!(req.max_attempts(), 3);
    assert_eq!(req.store_limit(), Some(10));
    assert_eq!(req.store_offset(), 5);
    assert_eq!(req.min_timestamp(), 100);
    assert_eq!(req.max_timestamp(), 200);
}

#[test]
fn test_inverted_time_range_accepted() {
    let req = GetRequest::new("t", "r")
        .unwrap()
        .set_min_timestamp(500)
        .set_max_timestamp(10);
    assert_eq!((req.min_timestamp(), req.max_timestamp()), (500, 10));
}

// =============================================================================
// Display
// =============================================================================

#[test]
fn test_display_names_kind() {
    let get = GetRequest::with_qualifier("t", "r", "cf", "q").unwrap();
    let text = get.to_string();
    assert!(text.starts_with("GetRequest(table=b\"t\", key=b\"r\""), "{}", text);
    assert!(text.contains("family=b\"cf\""));
    assert!(text.contains("qualifiers=[b\"q\"]"));

    let exists = GetRequest::exists("t", "r").unwrap();
    let text = exists.to_string();
    assert!(text.starts_with("Exists("), "{}", text);
    assert!(text.contains("family=null"));
}
