//! Row lookup request
//!
//! A `GetRequest` is built once per lookup through chained, validating
//! setters, handed to the codec, and dropped once the reply is decoded.
//! Byte strings are held as `Bytes`, so the codec shares them instead of
//! copying.

use std::fmt;

use bytes::Bytes;

use crate::error::{Result, WireError};
use crate::region::RowLock;

use super::filter::ScanFilter;
use super::validate::{check_family, check_qualifier};

/// What kind of lookup this is. Fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestKind {
    /// Return the row's cells
    Lookup { max_versions: i32 },

    /// Return only whether the row exists
    Existence { max_versions: i32 },
}

impl RequestKind {
    pub fn max_versions(&self) -> i32 {
        match *self {
            RequestKind::Lookup { max_versions } | RequestKind::Existence { max_versions } => {
                max_versions
            }
        }
    }

    pub fn is_exists(&self) -> bool {
        matches!(self, RequestKind::Existence { .. })
    }

    /// Same kind, different version count.
    fn with_max_versions(self, max_versions: i32) -> Self {
        match self {
            RequestKind::Lookup { .. } => RequestKind::Lookup { max_versions },
            RequestKind::Existence { .. } => RequestKind::Existence { max_versions },
        }
    }
}

/// Reads a single row (or checks for its existence).
#[derive(Debug, Clone)]
pub struct GetRequest {
    table: Bytes,
    key: Bytes,
    // TODO: multi-family lookups need a Vec of (family, qualifiers) pairs.
    family: Option<Bytes>,
    qualifiers: Option<Vec<Bytes>>,
    lock_id: i64,
    filter: Option<Bytes>,
    filter_name: Option<Bytes>,
    kind: RequestKind,
    min_timestamp: u64,
    max_timestamp: u64,
    /// None means unbounded
    store_limit: Option<u32>,
    store_offset: u32,
    /// Dispatch hints, never encoded
    rpc_timeout_ms: u32,
    max_attempts: u8,
}

impl GetRequest {
    /// Default client-side timeout (60 seconds)
    pub const DEFAULT_RPC_TIMEOUT_MS: u32 = 60_000;

    /// Default number of dispatch attempts
    pub const DEFAULT_MAX_ATTEMPTS: u8 = 10;

    /// Upper bound of the default time range (`i64::MAX`, "latest")
    pub const LATEST_TIMESTAMP: u64 = i64::MAX as u64;

    fn build(table: Bytes, key: Bytes, kind: RequestKind) -> Result<Self> {
        if table.is_empty() {
            return Err(WireError::MissingArgument("table"));
        }
        Ok(Self {
            table,
            key,
            family: None,
            qualifiers: None,
            lock_id: RowLock::NO_LOCK,
            filter: None,
            filter_name: None,
            kind,
            min_timestamp: 0,
            max_timestamp: Self::LATEST_TIMESTAMP,
            store_limit: None,
            store_offset: 0,
            rpc_timeout_ms: Self::DEFAULT_RPC_TIMEOUT_MS,
            max_attempts: Self::DEFAULT_MAX_ATTEMPTS,
        })
    }

    // =========================================================================
    // Construction
    // =========================================================================

    /// Look up a whole row.
    ///
    /// Fails with `MissingArgument` if `table` is empty.
    pub fn new(table: impl Into<Bytes>, key: impl Into<Bytes>) -> Result<Self> {
        Self::build(table.into(), key.into(), RequestKind::Lookup { max_versions: 1 })
    }

    /// Look up one column family of a row.
    pub fn with_family(
        table: impl Into<Bytes>,
        key: impl Into<Bytes>,
        family: impl Into<Bytes>,
    ) -> Result<Self> {
        Self::new(table, key)?.set_family(family)
    }

    /// Look up a single column of a row.
    pub fn with_qualifier(
        table: impl Into<Bytes>,
        key: impl Into<Bytes>,
        family: impl Into<Bytes>,
        qualifier: impl Into<Bytes>,
    ) -> Result<Self> {
        Self::new(table, key)?
            .set_family(family)?
            .set_qualifier(qualifier)
    }

    /// Check whether a row exists. The existence kind is permanent.
    pub fn exists(table: impl Into<Bytes>, key: impl Into<Bytes>) -> Result<Self> {
        Self::build(
            table.into(),
            key.into(),
            RequestKind::Existence { max_versions: 1 },
        )
    }

    /// Check whether a row has anything in the given family.
    pub fn exists_in_family(
        table: impl Into<Bytes>,
        key: impl Into<Bytes>,
        family: impl Into<Bytes>,
    ) -> Result<Self> {
        Self::exists(table, key)?.set_family(family)
    }

    // =========================================================================
    // Setters
    // =========================================================================

    /// Restrict the lookup to one column family.
    pub fn set_family(mut self, family: impl Into<Bytes>) -> Result<Self> {
        let family = family.into();
        check_family(&family)?;
        self.family = Some(family);
        Ok(self)
    }

    /// Restrict the lookup to one qualifier, replacing any previous list.
    pub fn set_qualifier(mut self, qualifier: impl Into<Bytes>) -> Result<Self> {
        let qualifier = qualifier.into();
        check_qualifier(&qualifier)?;
        self.qualifiers = Some(vec![qualifier]);
        Ok(self)
    }

    /// Restrict the lookup to a set of qualifiers, replacing any previous one.
    ///
    /// Nothing is stored unless every qualifier is valid.
    pub fn set_qualifiers<I, Q>(mut self, qualifiers: I) -> Result<Self>
    where
        I: IntoIterator<Item = Q>,
        Q: Into<Bytes>,
    {
        let qualifiers: Vec<Bytes> = qualifiers.into_iter().map(Into::into).collect();
        for qualifier in &qualifiers {
            check_qualifier(qualifier)?;
        }
        self.qualifiers = Some(qualifiers);
        Ok(self)
    }

    /// Use an explicit row lock. Only the lock id is kept.
    pub fn set_row_lock(mut self, lock: &RowLock) -> Self {
        self.lock_id = lock.id();
        self
    }

    /// How many versions of each cell to return. Must be strictly positive.
    pub fn set_max_versions(mut self, versions: i32) -> Result<Self> {
        if versions <= 0 {
            return Err(WireError::InvalidArgument(format!(
                "Need a strictly positive number of versions: {}",
                versions
            )));
        }
        self.kind = self.kind.with_max_versions(versions);
        Ok(self)
    }

    /// Set an already-serialized filter payload. Pair with `set_filter_name`.
    pub fn set_filter(mut self, payload: impl Into<Bytes>) -> Self {
        self.filter = Some(payload.into());
        self
    }

    /// Set the server-side name of the filter payload.
    pub fn set_filter_name(mut self, name: impl Into<Bytes>) -> Self {
        self.filter_name = Some(name.into());
        self
    }

    /// Serialize `filter` and keep both its payload and its name.
    pub fn set_scan_filter<F: ScanFilter + ?Sized>(mut self, filter: &F) -> Self {
        self.filter = Some(filter.serialize());
        self.filter_name = Some(filter.name());
        self
    }

    /// Lower bound (inclusive) of the time range.
    ///
    /// Only the structured format honors the time range.
    pub fn set_min_timestamp(mut self, timestamp: u64) -> Self {
        self.min_timestamp = timestamp;
        self
    }

    /// Upper bound of the time range.
    ///
    /// Only the structured format honors the time range.
    pub fn set_max_timestamp(mut self, timestamp: u64) -> Self {
        self.max_timestamp = timestamp;
        self
    }

    /// Maximum number of values returned per row per column family.
    pub fn set_max_results_per_column_family(mut self, limit: u32) -> Self {
        self.store_limit = Some(limit);
        self
    }

    /// Number of values skipped per row per column family.
    pub fn set_row_offset_per_column_family(mut self, offset: u32) -> Self {
        self.store_offset = offset;
        self
    }

    pub fn set_rpc_timeout_ms(mut self, timeout_ms: u32) -> Self {
        self.rpc_timeout_ms = timeout_ms;
        self
    }

    pub fn set_max_attempts(mut self, attempts: u8) -> Self {
        self.max_attempts = attempts;
        self
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn table(&self) -> &Bytes {
        &self.table
    }

    pub fn key(&self) -> &Bytes {
        &self.key
    }

    pub fn family(&self) -> Option<&Bytes> {
        self.family.as_ref()
    }

    pub fn qualifiers(&self) -> Option<&[Bytes]> {
        self.qualifiers.as_deref()
    }

    pub fn lock_id(&self) -> i64 {
        self.lock_id
    }

    pub fn filter(&self) -> Option<&Bytes> {
        self.filter.as_ref()
    }

    pub fn filter_name(&self) -> Option<&Bytes> {
        self.filter_name.as_ref()
    }

    /// Name and payload, only when both are set. Both encoders gate on this.
    pub fn filter_spec(&self) -> Option<(&Bytes, &Bytes)> {
        match (&self.filter_name, &self.filter) {
            (Some(name), Some(payload)) => Some((name, payload)),
            _ => None,
        }
    }

    /// True when exactly one of filter name and payload is set.
    pub fn has_partial_filter(&self) -> bool {
        self.filter_name.is_some() != self.filter.is_some()
    }

    pub fn kind(&self) -> RequestKind {
        self.kind
    }

    pub fn max_versions(&self) -> i32 {
        self.kind.max_versions()
    }

    pub fn is_exists(&self) -> bool {
        self.kind.is_exists()
    }

    pub fn min_timestamp(&self) -> u64 {
        self.min_timestamp
    }

    pub fn max_timestamp(&self) -> u64 {
        self.max_timestamp
    }

    pub fn store_limit(&self) -> Option<u32> {
        self.store_limit
    }

    pub fn store_offset(&self) -> u32 {
        self.store_offset
    }

    pub fn rpc_timeout_ms(&self) -> u32 {
        self.rpc_timeout_ms
    }

    pub fn max_attempts(&self) -> u8 {
        self.max_attempts
    }
}

impl fmt::Display for GetRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = if self.is_exists() { "Exists" } else { "GetRequest" };
        write!(f, "{}(table={:?}, key={:?}", name, self.table, self.key)?;
        match &self.family {
            Some(family) => write!(f, ", family={:?}", family)?,
            None => write!(f, ", family=null")?,
        }
        match &self.qualifiers {
            Some(qualifiers) => write!(f, ", qualifiers={:?}", qualifiers)?,
            None => write!(f, ", qualifiers=null")?,
        }
        write!(f, ", max_versions={})", self.max_versions())
    }
}
