//! Error types for the SODA client and query builder.

/// Errors that can occur while building or executing a SoQL query.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// `query` was called without a dataset identifier.
    #[error("dataset_id required to query data")]
    MissingIdentifier,
    /// A limit or offset value could not be read as a non-negative integer.
    #[error("invalid count value: {0:?}")]
    InvalidCount(String),
    /// An HTTP request failed (network error, timeout, or unreadable body).
    #[error("Request failed")]
    RequestFailed,
    /// The API returned a non-success status with a body snippet.
    #[error("Request failed with status {status}")]
    HttpStatus { status: u16, body: String },
    /// A returned row did not match the expected record shape.
    #[error("record {index} failed validation: {message}")]
    Validation { index: usize, message: String },
}

impl Error {
    /// True for failures of the HTTP round trip itself, as opposed to
    /// caller mistakes or malformed rows.
    pub fn is_transport(&self) -> bool {
        matches!(self, Error::RequestFailed | Error::HttpStatus { .. })
    }
}
