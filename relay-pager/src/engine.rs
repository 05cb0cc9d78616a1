// 2022-2026 (c) Copyright Contributors to the GOSH DAO. All rights reserved.
//

use serde::Serialize;

use crate::cursor::encode_cursor;
use crate::error::PaginationError;
use crate::record::Record;
use crate::params::PageQuerySpec;
use crate::store::RecordStore;
use crate::store::SortDirection;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct PageInfo {
    pub has_previous_page: bool,
    pub has_next_page: bool,
    pub start_cursor: Option<String>,
    pub end_cursor: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Edge {
    pub cursor: String,
    pub node: Record,
}

/// One page of records, newest first, with its boundary markers.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Page {
    pub records: Vec<Record>,
    pub page_info: PageInfo,
}

impl Page {
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.records.iter().map(|record| Edge { cursor: encode_cursor(record.id), node: *record })
    }
}

/// Runs page fetches and boundary checks for a [`PageQuerySpec`].
#[derive(Clone, Debug)]
pub struct PageQueryEngine<S> {
    store: S,
}

impl<S: RecordStore> PageQueryEngine<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Fetches the page. Records are always returned newest first.
    pub async fn fetch_page(&self, spec: &PageQuerySpec) -> Result<Vec<Record>, PaginationError> {
        let mut records = self.store.query(&spec.page_query()).await?;
        tracing::debug!(?spec, "fetched {} records", records.len());

        if spec.direction() == SortDirection::Ascending {
            records.reverse();
        }
        Ok(records)
    }

    pub async fn has_previous_page(&self, spec: &PageQuerySpec) -> Result<bool, PaginationError> {
        match spec {
            PageQuerySpec::AfterFirst { .. } => self.behind_row_exists(spec).await,
            PageQuerySpec::BeforeLast { .. } => self.additional_row_exists(spec).await,
            PageQuerySpec::FirstOnly { .. } => Ok(false),
        }
    }

    pub async fn has_next_page(&self, spec: &PageQuerySpec) -> Result<bool, PaginationError> {
        if spec.use_before() {
            // The behind-row result does not decide the answer here.
            match self.behind_row_exists(spec).await {
                Ok(exists) => tracing::trace!(?spec, exists, "behind row before cursor"),
                Err(err) => tracing::warn!(?spec, "behind row check failed: {err}"),
            }
        }
        self.additional_row_exists(spec).await
    }

    /// Issues the page fetch and both boundary checks concurrently.
    pub async fn load_page(&self, spec: &PageQuerySpec) -> Result<Page, PaginationError> {
        let (records, has_previous_page, has_next_page) = tokio::try_join!(
            self.fetch_page(spec),
            self.has_previous_page(spec),
            self.has_next_page(spec),
        )?;

        let page_info = PageInfo {
            has_previous_page,
            has_next_page,
            start_cursor: records.first().map(|r| encode_cursor(r.id)),
            end_cursor: records.last().map(|r| encode_cursor(r.id)),
        };
        Ok(Page { records, page_info })
    }

    async fn additional_row_exists(&self, spec: &PageQuerySpec) -> Result<bool, PaginationError> {
        let exists = self.store.exists(&spec.additional_row_query()).await?;
        tracing::trace!(?spec, exists, "additional row");
        Ok(exists)
    }

    async fn behind_row_exists(&self, spec: &PageQuerySpec) -> Result<bool, PaginationError> {
        let Some(query) = spec.behind_row_query() else {
            return Ok(false);
        };
        let exists = self.store.exists(&query).await?;
        tracing::trace!(?spec, exists, "behind row");
        Ok(exists)
    }
}
