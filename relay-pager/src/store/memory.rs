// 2022-2026 (c) Copyright Contributors to the GOSH DAO. All rights reserved.
//

use std::collections::BTreeMap;

use async_trait::async_trait;
use parking_lot::RwLock;

use super::RangeQuery;
use super::RecordStore;
use super::SortDirection;
use crate::error::StoreError;
use crate::record::Record;
use crate::record::RecordId;

#[derive(Debug, Default)]
pub struct MemoryStore {
    records: RwLock<BTreeMap<RecordId, Record>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_ids(ids: impl IntoIterator<Item = RecordId>) -> Self {
        let records = ids.into_iter().map(|id| (id, Record::new(id))).collect();
        Self { records: RwLock::new(records) }
    }

    pub fn insert(&self, record: Record) {
        self.records.write().insert(record.id, record);
    }

    pub fn len(&self) -> usize {
        self.records.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.read().is_empty()
    }

    fn select(&self, query: &RangeQuery) -> Vec<Record> {
        // BTreeMap::range panics on inverted bounds
        if query.filter.is_empty() {
            return Vec::new();
        }
        let records = self.records.read();
        let matching = records.range((query.filter.lower, query.filter.upper)).map(|(_, r)| *r);
        let limit = query.limit.unwrap_or(usize::MAX);

        match query.order {
            SortDirection::Ascending => matching.skip(query.offset).take(limit).collect(),
            SortDirection::Descending => matching.rev().skip(query.offset).take(limit).collect(),
        }
    }
}

#[async_trait]
impl RecordStore for MemoryStore {
    async fn query(&self, query: &RangeQuery) -> Result<Vec<Record>, StoreError> {
        tracing::trace!(?query, "memory query");
        Ok(self.select(query))
    }

    async fn exists(&self, query: &RangeQuery) -> Result<bool, StoreError> {
        tracing::trace!(?query, "memory exists");
        Ok(!self.select(&query.limit(1)).is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::IdFilter;

    fn ids(records: Vec<Record>) -> Vec<RecordId> {
        records.into_iter().map(|r| r.id).collect()
    }

    #[tokio::test]
    async fn test_ordered_range() {
        let store = MemoryStore::from_ids(1..=5);

        let query = RangeQuery::new(IdFilter::less_than(4), SortDirection::Descending).limit(2);
        assert_eq!(ids(store.query(&query).await.unwrap()), vec![3, 2]);

        let query = RangeQuery::new(IdFilter::greater_than(1), SortDirection::Ascending).limit(2);
        assert_eq!(ids(store.query(&query).await.unwrap()), vec![2, 3]);

        let query = RangeQuery::new(IdFilter::unbounded(), SortDirection::Descending).offset(3);
        assert_eq!(ids(store.query(&query).await.unwrap()), vec![2, 1]);
    }

    #[tokio::test]
    async fn test_exists() {
        let store = MemoryStore::from_ids(1..=5);

        let query = RangeQuery::new(IdFilter::at_least(5), SortDirection::Descending);
        assert!(store.exists(&query).await.unwrap());
        assert!(!store.exists(&query.offset(1)).await.unwrap());

        let query = RangeQuery::new(IdFilter::greater_than(5), SortDirection::Ascending);
        assert!(!store.exists(&query).await.unwrap());
    }

    #[tokio::test]
    async fn test_insert() {
        let store = MemoryStore::new();
        assert!(store.is_empty());
        store.insert(Record::new(10));
        store.insert(Record::new(10));
        store.insert(Record::new(3));
        assert_eq!(store.len(), 2);

        let query = RangeQuery::new(IdFilter::unbounded(), SortDirection::Ascending);
        assert_eq!(ids(store.query(&query).await.unwrap()), vec![3, 10]);
    }
}
