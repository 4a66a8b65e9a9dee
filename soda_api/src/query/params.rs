//! The finished, wire-level parameter set handed to a [`Gateway`](crate::Gateway).

use url::Url;

/// Parameters for one request against a tabular dataset.
///
/// Holds the dataset identifier plus an ordered list of `(name, value)`
/// pairs. Names are the plain clause names (`select`, `where`, `order`,
/// `limit`, `offset`) or caller-supplied extras; the HTTP client decides
/// how they map onto the URL.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QueryParams {
    dataset_identifier: String,
    pairs: Vec<(String, String)>,
}

/// Clause names that SODA expects with a `$` prefix.
const SOQL_CLAUSES: &[&str] = &[
    "select", "where", "order", "group", "having", "limit", "offset", "q",
];

impl QueryParams {
    pub(crate) fn new(dataset_identifier: &str) -> Self {
        Self {
            dataset_identifier: dataset_identifier.to_string(),
            pairs: Vec::new(),
        }
    }

    /// Sets `name` to `value`, replacing an existing value in place.
    pub(crate) fn set(&mut self, name: &str, value: String) {
        match self.pairs.iter_mut().find(|(key, _)| key == name) {
            Some(pair) => pair.1 = value,
            None => self.pairs.push((name.to_string(), value)),
        }
    }

    pub fn dataset_identifier(&self) -> &str {
        &self.dataset_identifier
    }

    /// Returns the value stored under `name`, if any.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// All parameters in the order they were set.
    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Appends the parameters to a resource URL as SODA query-string pairs.
    ///
    /// SoQL clauses get their `$` prefix; anything else is passed through as
    /// a simple column filter.
    pub fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        if self.pairs.is_empty() {
            return url;
        }
        {
            let mut query = url.query_pairs_mut();
            for (name, value) in &self.pairs {
                if SOQL_CLAUSES.contains(&name.as_str()) {
                    query.append_pair(&format!("${}", name), value);
                } else {
                    query.append_pair(name, value);
                }
            }
        }
        url
    }
}
