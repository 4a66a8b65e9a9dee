mod client;
mod errors;
mod gateway;
mod query;
pub mod types;
pub use self::client::Client;
pub use self::errors::Error;
pub use self::gateway::Gateway;
pub use self::query::{Condition, Operator, QueryParams, Selection, SoqlQuery, SortDirection};
