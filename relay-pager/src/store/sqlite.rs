// 2022-2026 (c) Copyright Contributors to the GOSH DAO. All rights reserved.
//

use std::ops::Bound;
use std::str::FromStr;

use anyhow::Context;
use async_trait::async_trait;
use sqlx::sqlite::SqliteConnectOptions;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::QueryBuilder;
use sqlx::Sqlite;
use sqlx::SqlitePool;

use super::RangeQuery;
use super::RecordStore;
use crate::config::StoreConfig;
use crate::error::StoreError;
use crate::record::Record;

/// Record store backed by an SQLite table with an integer `id` column.
#[derive(Clone, Debug)]
pub struct SqliteStore {
    pool: SqlitePool,
    table: String,
}

impl SqliteStore {
    pub fn new(pool: SqlitePool, table: impl Into<String>) -> Result<Self, StoreError> {
        let table = table.into();
        if !is_valid_identifier(&table) {
            return Err(StoreError::InvalidTable(table));
        }
        Ok(Self { pool, table })
    }

    /// Opens a read-only pool for `config.database_url`.
    pub async fn connect(config: &StoreConfig) -> anyhow::Result<Self> {
        let connect_options = SqliteConnectOptions::from_str(&config.database_url)
            .with_context(|| format!("DB url: {}", config.database_url))?
            .read_only(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(config.max_connections)
            .connect_with(connect_options)
            .await
            .with_context(|| format!("failed to open DB {}", config.database_url))?;

        tracing::info!(
            "record store opened: {} (table {}, {} connections)",
            config.database_url,
            config.table,
            config.max_connections
        );
        Ok(Self::new(pool, config.table.clone())?)
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    fn push_select(&self, builder: &mut QueryBuilder<'static, Sqlite>, query: &RangeQuery) {
        builder.push(format!("SELECT id FROM \"{}\"", self.table));

        let mut separator = " WHERE ";
        match query.filter.lower {
            Bound::Included(id) => {
                builder.push(separator).push("id >= ").push_bind(id);
                separator = " AND ";
            }
            Bound::Excluded(id) => {
                builder.push(separator).push("id > ").push_bind(id);
                separator = " AND ";
            }
            Bound::Unbounded => {}
        }
        match query.filter.upper {
            Bound::Included(id) => {
                builder.push(separator).push("id <= ").push_bind(id);
            }
            Bound::Excluded(id) => {
                builder.push(separator).push("id < ").push_bind(id);
            }
            Bound::Unbounded => {}
        }

        builder.push(" ORDER BY id ").push(query.order.as_sql());

        // SQLite accepts OFFSET only after LIMIT; -1 means no limit
        let limit = query.limit.map(to_sql_int).unwrap_or(-1);
        builder.push(" LIMIT ").push_bind(limit);
        builder.push(" OFFSET ").push_bind(to_sql_int(query.offset));
    }

    fn select_query(&self, query: &RangeQuery) -> QueryBuilder<'static, Sqlite> {
        let mut builder = QueryBuilder::new("");
        self.push_select(&mut builder, query);
        builder
    }

    fn exists_query(&self, query: &RangeQuery) -> QueryBuilder<'static, Sqlite> {
        let mut builder = QueryBuilder::new("SELECT EXISTS(");
        self.push_select(&mut builder, &query.limit(1));
        builder.push(")");
        builder
    }
}

#[async_trait]
impl RecordStore for SqliteStore {
    async fn query(&self, query: &RangeQuery) -> Result<Vec<Record>, StoreError> {
        let mut builder = self.select_query(query);
        tracing::trace!("SQL: {}", builder.sql());

        let records = builder.build_query_as::<Record>().fetch_all(&self.pool).await.map_err(|e| {
            tracing::error!("query failed: {e}");
            StoreError::from(e)
        })?;
        tracing::debug!("OK: {} rows", records.len());
        Ok(records)
    }

    async fn exists(&self, query: &RangeQuery) -> Result<bool, StoreError> {
        let mut builder = self.exists_query(query);
        tracing::trace!("SQL: {}", builder.sql());

        match builder.build_query_scalar::<i64>().fetch_one(&self.pool).await {
            Ok(flag) => Ok(flag != 0),
            Err(sqlx::Error::RowNotFound) => Ok(false),
            Err(err) => {
                tracing::error!("exists query failed: {err}");
                Err(err.into())
            }
        }
    }
}

fn to_sql_int(value: usize) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

fn is_valid_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
