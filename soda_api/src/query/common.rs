//! Shared query vocabulary: [`Selection`], [`Operator`], [`Condition`], and [`SortDirection`].

use std::str::FromStr;

/// Which columns a query returns.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Selection {
    /// No `$select` restriction; the endpoint returns every column.
    #[default]
    AllFields,
    /// Only the named columns, in this order.
    Fields(Vec<String>),
}

impl Selection {
    /// Builds a selection from a list of names. An empty list means no restriction.
    pub fn fields<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        if names.is_empty() {
            Selection::AllFields
        } else {
            Selection::Fields(names)
        }
    }

    /// The wire value for `$select`, or `None` when every column is wanted.
    pub fn to_param(&self) -> Option<String> {
        match self {
            Selection::AllFields => None,
            Selection::Fields(names) => Some(names.join(",")),
        }
    }
}

impl From<&str> for Selection {
    /// `"*"` selects everything; anything else is a comma-separated list of names.
    fn from(s: &str) -> Self {
        if s.trim() == "*" {
            return Selection::AllFields;
        }
        Selection::fields(s.split(',').map(str::trim).filter(|name| !name.is_empty()))
    }
}

impl From<String> for Selection {
    fn from(s: String) -> Self {
        Selection::from(s.as_str())
    }
}

impl From<Vec<String>> for Selection {
    fn from(names: Vec<String>) -> Self {
        Selection::fields(names)
    }
}

impl From<&[&str]> for Selection {
    fn from(names: &[&str]) -> Self {
        Selection::fields(names.iter().copied())
    }
}

impl<const N: usize> From<[&str; N]> for Selection {
    fn from(names: [&str; N]) -> Self {
        Selection::fields(names)
    }
}

/// Comparison operator in a SoQL `$where` term.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operator {
    Eq,
    Gt,
    Gte,
    Lt,
    Lte,
    Ne,
}

impl Operator {
    /// The SoQL symbol written between field and value.
    pub fn symbol(self) -> &'static str {
        match self {
            Operator::Eq => "=",
            Operator::Gt => ">",
            Operator::Gte => ">=",
            Operator::Lt => "<",
            Operator::Lte => "<=",
            Operator::Ne => "!=",
        }
    }
}

impl FromStr for Operator {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "gt" => Ok(Operator::Gt),
            "gte" => Ok(Operator::Gte),
            "lt" => Ok(Operator::Lt),
            "lte" => Ok(Operator::Lte),
            "ne" => Ok(Operator::Ne),
            _ => Err(()),
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

/// One `field op value` term of a `$where` clause.
///
/// The value is stored exactly as given. String literals must already be
/// wrapped in single quotes by the caller.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Condition {
    pub field: String,
    pub operator: Operator,
    pub value: String,
}

impl Condition {
    pub fn new(field: impl Into<String>, operator: Operator, value: impl ToString) -> Self {
        Self {
            field: field.into(),
            operator,
            value: value.to_string(),
        }
    }

    /// Parses a lookup key such as `start24__lte` into a field and operator.
    ///
    /// A key without `__`, or whose suffix is not a known operator, is an
    /// equality test on the whole key.
    pub fn from_lookup(key: &str, value: impl ToString) -> Self {
        match key.rsplit_once("__") {
            Some((field, suffix)) if !field.is_empty() => match suffix.parse::<Operator>() {
                Ok(operator) => Condition::new(field, operator, value),
                Err(()) => Condition::new(key, Operator::Eq, value),
            },
            _ => Condition::new(key, Operator::Eq, value),
        }
    }
}

impl std::fmt::Display for Condition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}{}", self.field, self.operator, self.value)
    }
}

/// Sort order for `$order`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortDirection {
    /// Ascending order. This is the SoQL default.
    #[default]
    Asc,
    /// Descending order, sent as a trailing ` DESC`.
    Desc,
}
