//! One search: build the open-now query, fetch once, type the rows, dedupe.

use soda_api::types::FoodTruck;
use soda_api::{Gateway, SoqlQuery};

use crate::aggregate::ResultAggregator;
use crate::config::AppConfig;
use crate::error::FoodiezzError;
use crate::open_now::OpenNowFilter;

/// Runs open-now searches against a dataset through a [`Gateway`].
pub struct FoodTruckFinder<'a, G> {
    gateway: &'a G,
    dataset_id: String,
    fetch_limit: u32,
}

impl<'a, G: Gateway> FoodTruckFinder<'a, G> {
    pub fn new(gateway: &'a G, dataset_id: &str, fetch_limit: u32) -> Self {
        Self {
            gateway,
            dataset_id: dataset_id.to_string(),
            fetch_limit,
        }
    }

    pub fn from_config(gateway: &'a G, config: &AppConfig) -> Self {
        Self::new(gateway, &config.socrata_dataset_id, config.fetch_limit)
    }

    /// The query sent for `filter`.
    pub fn build_query(&self, filter: &OpenNowFilter) -> SoqlQuery {
        filter
            .apply(SoqlQuery::default().select(FoodTruck::FIELDS))
            .limit(self.fetch_limit)
    }

    /// Fetches every open row in one round trip and returns them deduped.
    ///
    /// A row that fails validation fails the whole search.
    pub async fn search(&self, filter: &OpenNowFilter) -> Result<ResultAggregator, FoodiezzError> {
        let rows = self
            .build_query(filter)
            .query(self.gateway, &self.dataset_id, std::iter::empty::<(&str, &str)>())
            .await?;
        let fetched = rows.len();
        if fetched as u64 >= u64::from(self.fetch_limit) {
            tracing::warn!(
                "fetched {} rows, the configured limit; results may be incomplete",
                fetched
            );
        }

        let trucks = FoodTruck::from_records(rows)?;
        let mut aggregator = ResultAggregator::new();
        aggregator.ingest(trucks);
        tracing::info!(
            rows = fetched,
            unique = aggregator.len(),
            day = filter.day_order(),
            time = filter.time_token(),
            "food truck search finished"
        );
        Ok(aggregator)
    }
}
