//! Region identifiers and row locks handed in by the routing layer.

use bytes::Bytes;

use crate::protocol::pb;

/// A resolved region: the row-key partition a request is routed to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionInfo {
    /// Table the region belongs to
    table: Bytes,
    /// Full region name, e.g. `table,start_key,timestamp.encoded.`
    name: Bytes,
}

impl RegionInfo {
    pub fn new(table: impl Into<Bytes>, name: impl Into<Bytes>) -> Self {
        Self {
            table: table.into(),
            name: name.into(),
        }
    }

    pub fn table(&self) -> &Bytes {
        &self.table
    }

    /// The region name written on the wire.
    pub fn name(&self) -> &Bytes {
        &self.name
    }

    /// Structured form, identifying the region by its full name.
    pub fn to_protobuf(&self) -> pb::RegionSpecifier {
        pb::RegionSpecifier {
            r#type: pb::RegionSpecifierType::RegionName as i32,
            value: self.name.clone(),
        }
    }
}

/// An explicit row lock previously acquired from the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowLock {
    id: i64,
}

impl RowLock {
    /// Sentinel lock id meaning "no lock held".
    pub const NO_LOCK: i64 = -1;

    pub fn new(id: i64) -> Self {
        Self { id }
    }

    pub fn id(&self) -> i64 {
        self.id
    }
}
