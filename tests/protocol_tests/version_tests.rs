//! Version Selector Tests
//!
//! Tests for wire format and method token selection by capability tag.

use regionwire::protocol::{
    method_name, METHOD_EXISTS, METHOD_GET, METHOD_GET_STRUCTURED,
};
use regionwire::{
    EncodedGet, GetCodec, GetRequest, RegionInfo, RequestKind, ServerVersion, WireFormat,
};

const LOOKUP: RequestKind = RequestKind::Lookup { max_versions: 1 };
const EXISTENCE: RequestKind = RequestKind::Existence { max_versions: 1 };

// =============================================================================
// Format Selection
// =============================================================================

#[test]
fn test_thresholds_are_ordered() {
    assert!(ServerVersion::UNKNOWN < ServerVersion::V090_AND_BEFORE);
    assert!(ServerVersion::V090_AND_BEFORE < ServerVersion::CACHE_BLOCKS);
    assert!(ServerVersion::CACHE_BLOCKS < ServerVersion::V092_OR_ABOVE);
    assert!(ServerVersion::V092_OR_ABOVE < ServerVersion::V095_OR_ABOVE);
    assert_eq!(ServerVersion::CACHE_BLOCKS.tag(), 26);
}

#[test]
fn test_wire_format_cutover() {
    assert_eq!(ServerVersion(0).wire_format(), WireFormat::Legacy);
    assert_eq!(ServerVersion(94).wire_format(), WireFormat::Legacy);
    assert_eq!(ServerVersion::V092_OR_ABOVE.wire_format(), WireFormat::Legacy);
    assert_eq!(ServerVersion::V095_OR_ABOVE.wire_format(), WireFormat::Structured);
    assert_eq!(ServerVersion(u8::MAX).wire_format(), WireFormat::Structured);
}

// =============================================================================
// Method Tokens
// =============================================================================

#[test]
fn test_method_tokens_before_cutover() {
    for tag in [0u8, 24, 26, 29, 94] {
        assert_eq!(method_name(LOOKUP, ServerVersion(tag)), METHOD_GET);
        assert_eq!(method_name(EXISTENCE, ServerVersion(tag)), METHOD_EXISTS);
    }
    assert_eq!(METHOD_GET, b"get");
    assert_eq!(METHOD_EXISTS, b"exists");
}

#[test]
fn test_method_token_after_cutover() {
    for tag in [95u8, 96, 200] {
        assert_eq!(method_name(LOOKUP, ServerVersion(tag)), METHOD_GET_STRUCTURED);
        assert_eq!(method_name(EXISTENCE, ServerVersion(tag)), METHOD_GET_STRUCTURED);
    }
    assert_eq!(METHOD_GET_STRUCTURED, b"Get");
}

#[test]
fn test_codec_follows_selector() {
    let codec = GetCodec::default();
    let region = RegionInfo::new("t", "t,,1");
    let exists = GetRequest::exists("t", "r").unwrap();

    let old = codec.encode(&exists, &region, ServerVersion(29)).unwrap();
    assert_eq!(old.method, b"exists");
    assert_eq!(old.wire_format(), WireFormat::Legacy);
    assert!(matches!(old.body, EncodedGet::Legacy(_)));

    let new = codec.encode(&exists, &region, ServerVersion(95)).unwrap();
    assert_eq!(new.method, b"Get");
    assert_eq!(new.wire_format(), WireFormat::Structured);
    match new.body {
        EncodedGet::Structured(msg) => assert_eq!(msg.get.existence_only, Some(true)),
        EncodedGet::Legacy(_) => panic!("Expected structured body"),
    }
}
