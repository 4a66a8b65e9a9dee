//! The seam between query building and whatever executes the query.

use std::future::Future;

use serde_json::Value;

use crate::{query::QueryParams, Error};

/// Executes finished [`QueryParams`] against a tabular endpoint.
///
/// [`Client`](crate::Client) is the HTTP implementation; tests substitute
/// in-memory fakes.
pub trait Gateway {
    /// Runs one request and returns the raw rows in the order received.
    fn get(
        &self,
        params: &QueryParams,
    ) -> impl Future<Output = Result<Vec<Value>, Error>> + Send;

    /// Releases the underlying connection. Consumes the gateway, so it can
    /// only happen once.
    fn close(self);
}
