//! Fluent builder for SoQL queries against a SODA dataset.

use serde_json::Value;

use crate::{gateway::Gateway, Error};

use super::{
    common::{Condition, Operator, Selection, SortDirection},
    params::QueryParams,
};

/// Accumulates a column selection, `$where` terms, ordering, and a
/// limit/offset cursor, then turns them into [`QueryParams`].
///
/// ```
/// use soda_api::{SoqlQuery, SortDirection};
///
/// let params = SoqlQuery::default()
///     .select(["applicant", "location"])
///     .where_([("dayorder", "3"), ("start24__lte", "'14:00'")])
///     .order_by("applicant", SortDirection::Asc)
///     .limit(10)
///     .to_params("jjew-r69b", std::iter::empty::<(&str, &str)>())
///     .unwrap();
///
/// assert_eq!(params.get("select"), Some("applicant,location"));
/// assert_eq!(params.get("where"), Some("dayorder=3 and start24<='14:00'"));
/// ```
#[derive(Clone, Debug, Default)]
pub struct SoqlQuery {
    pub selection: Selection,
    pub conditions: Vec<Condition>,
    pub order: Option<(String, SortDirection)>,
    pub limit: Option<u32>,
    pub offset: Option<u32>,
}

impl SoqlQuery {
    /// Restricts the returned columns. Replaces any earlier selection.
    pub fn select(mut self, fields: impl Into<Selection>) -> Self {
        self.selection = fields.into();
        self
    }

    /// Appends `$where` terms from `field` / `field__op` lookup keys.
    ///
    /// Terms accumulate across calls and are joined with `and`. Values are
    /// written as-is, so string literals must arrive already quoted.
    pub fn where_<I, K, V>(mut self, conditions: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: ToString,
    {
        self.conditions.extend(
            conditions
                .into_iter()
                .map(|(key, value)| Condition::from_lookup(key.as_ref(), value)),
        );
        self
    }

    /// Appends a single typed `$where` term.
    pub fn filter(mut self, field: &str, operator: Operator, value: impl ToString) -> Self {
        self.conditions.push(Condition::new(field, operator, value));
        self
    }

    pub fn order_by(mut self, field: &str, direction: SortDirection) -> Self {
        self.order = Some((field.to_string(), direction));
        self
    }

    pub fn order_asc(self, field: &str) -> Self {
        self.order_by(field, SortDirection::Asc)
    }

    pub fn order_desc(self, field: &str) -> Self {
        self.order_by(field, SortDirection::Desc)
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn offset(mut self, offset: u32) -> Self {
        self.offset = Some(offset);
        self
    }

    /// Reads a limit or offset typed by a user.
    pub fn parse_count(input: &str) -> Result<u32, Error> {
        input
            .trim()
            .parse::<u32>()
            .map_err(|_| Error::InvalidCount(input.to_string()))
    }

    /// The `$where` clause built so far, or `None` if no terms were added.
    pub fn where_clause(&self) -> Option<String> {
        if self.conditions.is_empty() {
            return None;
        }
        Some(
            self.conditions
                .iter()
                .map(Condition::to_string)
                .collect::<Vec<_>>()
                .join(" and "),
        )
    }

    /// The `$order` value, with ` DESC` appended for descending order.
    pub fn order_clause(&self) -> Option<String> {
        self.order.as_ref().map(|(field, direction)| match direction {
            SortDirection::Asc => field.clone(),
            SortDirection::Desc => format!("{} DESC", field),
        })
    }

    /// Assembles the request parameters for `dataset_id`.
    ///
    /// Only clauses that were set are included. `extras` are applied last
    /// and win over builder values with the same name.
    pub fn to_params<I, K, V>(&self, dataset_id: &str, extras: I) -> Result<QueryParams, Error>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: ToString,
    {
        if dataset_id.trim().is_empty() {
            return Err(Error::MissingIdentifier);
        }
        let mut params = QueryParams::new(dataset_id);
        if let Some(select) = self.selection.to_param() {
            params.set("select", select);
        }
        if let Some(clause) = self.where_clause() {
            params.set("where", clause);
        }
        if let Some(limit) = self.limit {
            params.set("limit", limit.to_string());
        }
        if let Some(offset) = self.offset {
            params.set("offset", offset.to_string());
        }
        if let Some(order) = self.order_clause() {
            params.set("order", order);
        }
        for (name, value) in extras {
            params.set(name.as_ref(), value.to_string());
        }
        Ok(params)
    }

    /// Builds the parameters and runs them through `gateway`, returning the
    /// raw rows untouched.
    pub async fn query<G, I, K, V>(
        &self,
        gateway: &G,
        dataset_id: &str,
        extras: I,
    ) -> Result<Vec<Value>, Error>
    where
        G: Gateway,
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: ToString,
    {
        let params = self.to_params(dataset_id, extras)?;
        tracing::debug!(
            dataset = params.dataset_identifier(),
            params = ?params.pairs(),
            "running SoQL query"
        );
        gateway.get(&params).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NO_EXTRAS: [(&str, &str); 0] = [];

    #[test]
    fn test_full_query_params() {
        let params = SoqlQuery::default()
            .select(vec!["applicant".to_string(), "location".to_string()])
            .where_([("start24__lte", "'14:00'"), ("end24__gte", "'14:00'")])
            .where_([("dayorder", 3)])
            .order_desc("applicant")
            .limit(10)
            .offset(20)
            .to_params("jjew-r69b", NO_EXTRAS)
            .unwrap();

        let rendered = params
            .pairs()
            .iter()
            .map(|(k, v)| format!("{}={}", k, v))
            .collect::<Vec<_>>()
            .join("\n");
        insta::assert_snapshot!(rendered, @r"
        select=applicant,location
        where=start24<='14:00' and end24>='14:00' and dayorder=3
        limit=10
        offset=20
        order=applicant DESC
        ");
    }

    #[test]
    fn test_unset_clauses_are_omitted() {
        let params = SoqlQuery::default().to_params("abc", NO_EXTRAS).unwrap();
        assert!(params.is_empty());
        assert_eq!(params.dataset_identifier(), "abc");
    }

    #[test]
    fn test_missing_identifier() {
        let err = SoqlQuery::default().to_params("", NO_EXTRAS).unwrap_err();
        assert!(matches!(err, Error::MissingIdentifier));
        let err = SoqlQuery::default().to_params("   ", NO_EXTRAS).unwrap_err();
        assert!(matches!(err, Error::MissingIdentifier));
    }

    #[test]
    fn test_extras_override_builder_values() {
        let params = SoqlQuery::default()
            .limit(10)
            .order_asc("applicant")
            .to_params("abc", [("limit", "99"), ("status", "APPROVED")])
            .unwrap();
        assert_eq!(params.get("limit"), Some("99"));
        assert_eq!(params.get("order"), Some("applicant"));
        assert_eq!(params.get("status"), Some("APPROVED"));
    }

    #[test]
    fn test_parse_count() {
        assert_eq!(SoqlQuery::parse_count(" 25 ").unwrap(), 25);
        assert!(matches!(
            SoqlQuery::parse_count("ten"),
            Err(Error::InvalidCount(_))
        ));
        assert!(SoqlQuery::parse_count("-1").is_err());
    }
}
