//! Index and record store error types.

/// Errors from a geospatial index.
#[derive(Debug, Clone, thiserror::Error)]
pub enum IndexError {
    /// The index could not be reached
    #[error("index connection error: {0}")]
    Connection(String),

    /// The index rejected a query or an entry
    #[error("index rejected request: {0}")]
    Rejected(String),
}

/// Errors from a station record store.
#[derive(Debug, Clone, thiserror::Error)]
pub enum RecordStoreError {
    /// The store could not be reached
    #[error("record store connection error: {0}")]
    Connection(String),
}
