//! Which schedule rows count as "open now".

use chrono::{Datelike, Local, Timelike};
use soda_api::{SoqlQuery, SortDirection};

/// Filter terms for trucks open at a given instant.
///
/// A row is open when `start24 <= now <= end24` on the row's `dayorder`.
/// Times compare as zero-padded `HH:MM` strings on the server, which is why
/// `24:MM` end times sort after every same-day time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OpenNowFilter {
    day_order: u32,
    time_token: String,
}

impl OpenNowFilter {
    /// Terms for the given wall-clock instant.
    pub fn at<T>(now: &T) -> Self
    where
        T: Datelike + Timelike,
    {
        Self {
            day_order: now.weekday().number_from_monday(),
            time_token: format!("'{:02}:{:02}'", now.hour(), now.minute()),
        }
    }

    /// Terms for the local clock right now.
    pub fn now() -> Self {
        Self::at(&Local::now())
    }

    /// ISO weekday, Monday = 1 through Sunday = 7.
    pub fn day_order(&self) -> u32 {
        self.day_order
    }

    /// The current time as a quoted SoQL literal, e.g. `'14:00'`.
    pub fn time_token(&self) -> &str {
        &self.time_token
    }

    /// Adds the open-now terms to `query` and sorts by applicant.
    pub fn apply(&self, query: SoqlQuery) -> SoqlQuery {
        query
            .where_([
                ("start24__lte", self.time_token.clone()),
                ("end24__gte", self.time_token.clone()),
                ("dayorder", self.day_order.to_string()),
            ])
            .order_by("applicant", SortDirection::Asc)
    }
}
