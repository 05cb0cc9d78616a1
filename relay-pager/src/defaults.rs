// 2022-2026 (c) Copyright Contributors to the GOSH DAO. All rights reserved.
//
pub const DATABASE_URL: &str = "sqlite://data/records.db";
pub const RECORDS_TABLE: &str = "records";
pub const MAX_POOL_CONNECTIONS: u32 = 4;

pub const CURSOR_PREFIX: &str = "record:";
