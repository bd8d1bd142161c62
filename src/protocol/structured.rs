//! Structured message encoding
//!
//! Builds the `GetRequest` message sent to servers past the cutover. The
//! message is self-describing, so no size prediction is involved.

use crate::region::RegionInfo;
use crate::request::GetRequest;

use super::pb;

/// Build the structured message for `request`, addressed to `region`.
pub fn build_get_request(request: &GetRequest, region: &RegionInfo) -> pb::GetRequest {
    let column = request
        .family()
        .map(|family| pb::Column {
            family: family.clone(),
            qualifier: request.qualifiers().map(<[_]>::to_vec).unwrap_or_default(),
        })
        .into_iter()
        .collect();

    let filter = request.filter_spec().map(|(name, payload)| pb::Filter {
        name: name.clone(),
        serialized_filter: Some(payload.clone()),
    });

    // 1 is the server-side default.
    let max_versions = match request.max_versions() {
        1 => None,
        versions => Some(versions as u32),
    };

    let get = pb::Get {
        row: request.key().clone(),
        column,
        filter,
        time_range: Some(pb::TimeRange {
            from: Some(request.min_timestamp()),
            to: Some(request.max_timestamp()),
        }),
        max_versions,
        cache_blocks: None,
        // Unbounded goes out as all ones, the unsigned form of -1.
        store_limit: Some(request.store_limit().unwrap_or(u32::MAX)),
        store_offset: Some(request.store_offset()),
        existence_only: request.is_exists().then_some(true),
    };

    pb::GetRequest {
        region: region.to_protobuf(),
        get,
    }
}
