// 2022-2026 (c) Copyright Contributors to the GOSH DAO. All rights reserved.
//

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;

use crate::defaults::CURSOR_PREFIX;
use crate::error::PaginationError;
use crate::record::RecordId;

/// Encodes a record id as an opaque cursor string.
pub fn encode_cursor(id: RecordId) -> String {
    URL_SAFE_NO_PAD.encode(format!("{CURSOR_PREFIX}{id}"))
}

pub fn decode_cursor(cursor: &str) -> Result<RecordId, PaginationError> {
    let bytes = URL_SAFE_NO_PAD
        .decode(cursor)
        .map_err(|e| PaginationError::InvalidCursor(format!("{cursor:?}: {e}")))?;
    let text = String::from_utf8(bytes)
        .map_err(|_| PaginationError::InvalidCursor(format!("{cursor:?}: not utf-8")))?;

    text.strip_prefix(CURSOR_PREFIX)
        .and_then(|id| id.parse::<RecordId>().ok())
        .ok_or_else(|| PaginationError::InvalidCursor(format!("{cursor:?}: unknown format")))
}
