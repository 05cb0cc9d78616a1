// 2022-2026 (c) Copyright Contributors to the GOSH DAO. All rights reserved.
//

use serde::Deserialize;
use serde::Serialize;
use sqlx::prelude::FromRow;

/// Record identifier. Ascending order is creation order.
pub type RecordId = i64;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, FromRow)]
pub struct Record {
    pub id: RecordId, // id INTEGER PRIMARY KEY
}

impl Record {
    pub fn new(id: RecordId) -> Self {
        Self { id }
    }
}

impl From<RecordId> for Record {
    fn from(id: RecordId) -> Self {
        Self { id }
    }
}
