//! Structured message definitions.
//!
//! Hand-maintained prost messages for the subset of the server's client
//! protocol used by row lookups. Field numbers and proto2 labels follow the
//! server's `Client.proto`, `HBase.proto`, `Filter.proto` and `Cell.proto`.

use bytes::Bytes;

/// How a region is identified.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum RegionSpecifierType {
    /// Full region name
    RegionName = 1,
    /// Hash-encoded region name
    EncodedRegionName = 2,
}

/// Identifies the region a request targets.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct RegionSpecifier {
    #[prost(enumeration = "RegionSpecifierType", required, tag = "1")]
    pub r#type: i32,
    #[prost(bytes = "bytes", required, tag = "2")]
    pub value: Bytes,
}

/// Timestamp bounds of a read.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct TimeRange {
    #[prost(uint64, optional, tag = "1")]
    pub from: Option<u64>,
    #[prost(uint64, optional, tag = "2")]
    pub to: Option<u64>,
}

/// A family and, optionally, the qualifiers wanted within it.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Column {
    #[prost(bytes = "bytes", required, tag = "1")]
    pub family: Bytes,
    #[prost(bytes = "bytes", repeated, tag = "2")]
    pub qualifier: Vec<Bytes>,
}

/// An opaque, already-serialized filter and its server-side name.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Filter {
    /// Declared as a string by the server; kept as raw bytes here since the
    /// name is never interpreted.
    #[prost(bytes = "bytes", required, tag = "1")]
    pub name: Bytes,
    #[prost(bytes = "bytes", optional, tag = "2")]
    pub serialized_filter: Option<Bytes>,
}

/// A single-row read.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Get {
    #[prost(bytes = "bytes", required, tag = "1")]
    pub row: Bytes,
    #[prost(message, repeated, tag = "2")]
    pub column: Vec<Column>,
    #[prost(message, optional, tag = "4")]
    pub filter: Option<Filter>,
    #[prost(message, optional, tag = "5")]
    pub time_range: Option<TimeRange>,
    /// Server default: 1
    #[prost(uint32, optional, tag = "6")]
    pub max_versions: Option<u32>,
    /// Server default: true
    #[prost(bool, optional, tag = "7")]
    pub cache_blocks: Option<bool>,
    #[prost(uint32, optional, tag = "8")]
    pub store_limit: Option<u32>,
    #[prost(uint32, optional, tag = "9")]
    pub store_offset: Option<u32>,
    /// Server default: false
    #[prost(bool, optional, tag = "10")]
    pub existence_only: Option<bool>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetRequest {
    #[prost(message, required, tag = "1")]
    pub region: RegionSpecifier,
    #[prost(message, required, tag = "2")]
    pub get: Get,
}

/// Kind of a stored cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum CellType {
    Minimum = 0,
    Put = 4,
    Delete = 8,
    DeleteColumn = 12,
    DeleteFamily = 14,
    Maximum = 255,
}

/// A cell embedded in a response. Every field may be omitted.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Cell {
    #[prost(bytes = "bytes", optional, tag = "1")]
    pub row: Option<Bytes>,
    #[prost(bytes = "bytes", optional, tag = "2")]
    pub family: Option<Bytes>,
    #[prost(bytes = "bytes", optional, tag = "3")]
    pub qualifier: Option<Bytes>,
    #[prost(uint64, optional, tag = "4")]
    pub timestamp: Option<u64>,
    #[prost(enumeration = "CellType", optional, tag = "5")]
    pub cell_type: Option<i32>,
    #[prost(bytes = "bytes", optional, tag = "6")]
    pub value: Option<Bytes>,
}

/// Result of a read. Cells may live here or in the trailing cell block.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct RowResult {
    #[prost(message, repeated, tag = "1")]
    pub cell: Vec<Cell>,
    /// Number of cells shipped in the cell block instead of inline
    #[prost(int32, optional, tag = "2")]
    pub associated_cell_count: Option<i32>,
    /// Set for existence-only reads
    #[prost(bool, optional, tag = "3")]
    pub exists: Option<bool>,
    #[prost(bool, optional, tag = "4")]
    pub stale: Option<bool>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetResponse {
    #[prost(message, optional, tag = "1")]
    pub result: Option<RowResult>,
}
