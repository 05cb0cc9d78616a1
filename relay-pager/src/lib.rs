// 2022-2026 (c) Copyright Contributors to the GOSH DAO. All rights reserved.
//

use tracing::level_filters::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

pub mod config;
pub mod cursor;
pub mod defaults;
pub mod engine;
pub mod error;
pub mod params;
pub mod record;
pub mod store;

pub use config::StoreConfig;
pub use cursor::decode_cursor;
pub use cursor::encode_cursor;
pub use engine::Edge;
pub use engine::Page;
pub use engine::PageInfo;
pub use engine::PageQueryEngine;
pub use error::PaginationError;
pub use error::StoreError;
pub use params::PageQuerySpec;
pub use params::PaginationArgs;
pub use record::Record;
pub use record::RecordId;
pub use store::MemoryStore;
pub use store::RecordStore;
pub use store::SortDirection;
pub use store::SqliteStore;

/// Installs a stderr subscriber for the `relay_pager` target.
///
/// `PAGER_VERBOSE` set to any non-empty value raises the level to `TRACE`,
/// which also logs every SQL statement the store builds.
pub fn init_tracing() {
    let level = match std::env::var("PAGER_VERBOSE") {
        Ok(v) if !v.is_empty() => LevelFilter::TRACE,
        _ => LevelFilter::INFO,
    };
    let filter = tracing_subscriber::filter::Targets::new()
        .with_target("relay_pager", level)
        .with_target("sqlx", LevelFilter::OFF);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .compact()
                .with_thread_ids(true)
                .with_ansi(false)
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}
