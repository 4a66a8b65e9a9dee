//! HTTP client for the Socrata Open Data (SODA) resource API.

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use serde_json::Value;
use url::Url;

use crate::{gateway::Gateway, query::QueryParams, Error};

/// Request timeout for SODA calls.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP client for a Socrata domain such as `data.sfgov.org`.
///
/// One `reqwest::Client` (and its connection pool) is built up front and
/// kept until [`Gateway::close`]. When an app token is configured it is sent
/// on every request as `X-App-Token`.
pub struct Client {
    http: reqwest::Client,
    /// Base URL for the domain, e.g. `https://data.sfgov.org`.
    base_api_url: String,
}

impl Client {
    /// Creates a client for `https://{domain}`.
    pub fn new(domain: &str, app_token: Option<&str>) -> Result<Self, Error> {
        Self::with_base_url(&format!("https://{}", domain), app_token)
    }

    /// Creates a client with a custom base URL. Used for testing with wiremock.
    pub fn with_base_url(base_url: &str, app_token: Option<&str>) -> Result<Self, Error> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        if let Some(token) = app_token.filter(|t| !t.is_empty()) {
            let value = HeaderValue::from_str(token).map_err(|e| {
                tracing::error!("App token is not a valid header value: {}", e);
                Error::RequestFailed
            })?;
            headers.insert("x-app-token", value);
        }
        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build HTTP client: {}", e);
                Error::RequestFailed
            })?;
        Ok(Self {
            http,
            base_api_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn get_url(&self, params: &QueryParams) -> Result<Url, Error> {
        let url = Url::parse(
            format!(
                "{}/resource/{}.json",
                &self.base_api_url,
                params.dataset_identifier()
            )
            .as_str(),
        )
        .map_err(|e| {
            tracing::error!("Invalid URL constructed: {}", e);
            Error::RequestFailed
        })?;
        Ok(params.add_to_url(&url))
    }
}

impl Gateway for Client {
    async fn get(&self, params: &QueryParams) -> Result<Vec<Value>, Error> {
        let url = self.get_url(params)?;
        let resp = self.http.get(url).send().await.map_err(|e| {
            tracing::error!("Failed to get resource: {}", e);
            Error::RequestFailed
        })?;

        let status = resp.status();
        let body = resp.text().await.map_err(|e| {
            tracing::error!("Failed to read response body: {}", e);
            Error::RequestFailed
        })?;

        if !status.is_success() {
            let snippet = truncate_body(&body);
            tracing::error!("Request failed with status {}: {}", status, snippet);
            return Err(Error::HttpStatus {
                status: status.as_u16(),
                body: snippet,
            });
        }

        let rows = serde_json::from_str::<Vec<Value>>(&body).map_err(|e| {
            let snippet = truncate_body(&body);
            tracing::error!("Failed to parse resource: {} | body: {}", e, snippet);
            Error::RequestFailed
        })?;

        tracing::debug!(rows = rows.len(), "fetched rows");
        Ok(rows)
    }

    fn close(self) {
        tracing::debug!("closing SODA client for {}", self.base_api_url);
        drop(self.http);
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        body.to_string()
    } else {
        let mut end = MAX;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...[truncated]", &body[..end])
    }
}
