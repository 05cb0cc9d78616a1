// 2022-2026 (c) Copyright Contributors to the GOSH DAO. All rights reserved.
//

use std::fmt;
use std::ops::Bound;
use std::sync::Arc;

use async_trait::async_trait;

use crate::error::StoreError;
use crate::record::Record;
use crate::record::RecordId;

pub mod memory;
pub mod sqlite;

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn as_sql(&self) -> &'static str {
        match self {
            SortDirection::Ascending => "ASC",
            SortDirection::Descending => "DESC",
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_sql())
    }
}

/// Range of ids a query is restricted to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IdFilter {
    pub lower: Bound<RecordId>,
    pub upper: Bound<RecordId>,
}

impl IdFilter {
    pub fn unbounded() -> Self {
        Self { lower: Bound::Unbounded, upper: Bound::Unbounded }
    }

    pub fn greater_than(id: RecordId) -> Self {
        Self { lower: Bound::Excluded(id), upper: Bound::Unbounded }
    }

    pub fn at_least(id: RecordId) -> Self {
        Self { lower: Bound::Included(id), upper: Bound::Unbounded }
    }

    pub fn less_than(id: RecordId) -> Self {
        Self { lower: Bound::Unbounded, upper: Bound::Excluded(id) }
    }

    pub fn at_most(id: RecordId) -> Self {
        Self { lower: Bound::Unbounded, upper: Bound::Included(id) }
    }

    /// `true` when no id can satisfy both bounds.
    pub fn is_empty(&self) -> bool {
        match (self.lower, self.upper) {
            (Bound::Included(lower), Bound::Included(upper)) => lower > upper,
            (Bound::Included(lower) | Bound::Excluded(lower), Bound::Excluded(upper))
            | (Bound::Excluded(lower), Bound::Included(upper)) => lower >= upper,
            _ => false,
        }
    }

    pub fn contains(&self, id: RecordId) -> bool {
        let above = match self.lower {
            Bound::Included(lower) => id >= lower,
            Bound::Excluded(lower) => id > lower,
            Bound::Unbounded => true,
        };
        let below = match self.upper {
            Bound::Included(upper) => id <= upper,
            Bound::Excluded(upper) => id < upper,
            Bound::Unbounded => true,
        };
        above && below
    }
}

impl Default for IdFilter {
    fn default() -> Self {
        Self::unbounded()
    }
}

/// A fully specified read against a [`RecordStore`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RangeQuery {
    pub filter: IdFilter,
    pub order: SortDirection,
    /// `None` means no limit.
    pub limit: Option<usize>,
    pub offset: usize,
}

impl RangeQuery {
    pub fn new(filter: IdFilter, order: SortDirection) -> Self {
        Self { filter, order, limit: None, offset: 0 }
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn offset(mut self, offset: usize) -> Self {
        self.offset = offset;
        self
    }
}

/// Ordered range and existence queries over records.
///
/// `exists` reports whether `query` with the same arguments would return at
/// least one row. An empty match is `Ok(false)`, not an error.
#[async_trait]
pub trait RecordStore: Send + Sync {
    async fn query(&self, query: &RangeQuery) -> Result<Vec<Record>, StoreError>;
    async fn exists(&self, query: &RangeQuery) -> Result<bool, StoreError>;
}

#[async_trait]
impl<S: RecordStore + ?Sized> RecordStore for Arc<S> {
    async fn query(&self, query: &RangeQuery) -> Result<Vec<Record>, StoreError> {
        (**self).query(query).await
    }

    async fn exists(&self, query: &RangeQuery) -> Result<bool, StoreError> {
        (**self).exists(query).await
    }
}
