// 2022-2026 (c) Copyright Contributors to the GOSH DAO. All rights reserved.
//

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PaginationError {
    #[error("specify one of {{first}}, {{after, first}}, {{before, last}}")]
    InvalidPaginationArguments,

    #[error("invalid cursor: {0}")]
    InvalidCursor(String),

    #[error("record store error: {0}")]
    Store(#[from] StoreError),
}

impl PaginationError {
    /// Errors caused by the caller's input, as opposed to store failures.
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::InvalidPaginationArguments | Self::InvalidCursor(_))
    }
}

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("invalid table name: {0:?}")]
    InvalidTable(String),

    #[error("{0}")]
    Other(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_errors() {
        assert!(PaginationError::InvalidPaginationArguments.is_client_error());
        assert!(PaginationError::InvalidCursor("x".to_string()).is_client_error());
        assert!(!PaginationError::Store(StoreError::Other("down".to_string())).is_client_error());
    }

    #[test]
    fn test_invalid_arguments_message() {
        assert_eq!(
            PaginationError::InvalidPaginationArguments.to_string(),
            "specify one of {first}, {after, first}, {before, last}"
        );
    }
}
