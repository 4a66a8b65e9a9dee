mod common;
pub use self::common::{Condition, Operator, Selection, SortDirection};

mod params;
pub use self::params::QueryParams;

mod soql;
pub use self::soql::SoqlQuery;
