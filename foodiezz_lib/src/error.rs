//! Error types for the library layer.

use std::fmt;

/// Errors produced by the library layer, wrapping SODA client errors
/// and adding configuration failures.
#[derive(Debug)]
pub enum FoodiezzError {
    /// An error from the query builder, the gateway, or record validation.
    Api(soda_api::Error),
    /// A configuration value was present but unusable.
    InvalidConfig(String),
}

impl FoodiezzError {
    /// True when the remote round trip itself failed.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Api(e) if e.is_transport())
    }

    /// True when the endpoint answered but a row did not fit the record shape.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Api(soda_api::Error::Validation { .. }))
    }
}

impl fmt::Display for FoodiezzError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Api(e) => write!(f, "API error: {}", e),
            Self::InvalidConfig(msg) => write!(f, "Invalid configuration: {}", msg),
        }
    }
}

impl std::error::Error for FoodiezzError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Api(e) => Some(e),
            Self::InvalidConfig(_) => None,
        }
    }
}

impl From<soda_api::Error> for FoodiezzError {
    fn from(e: soda_api::Error) -> Self {
        Self::Api(e)
    }
}
