use serde::{de, Deserialize, Deserializer};
use serde_json::Value;

use crate::Error;

/// One row of the SF Mobile Food Schedule dataset: a vendor at a location
/// during one weekly time window.
///
/// Times are `HH:MM` strings on a 24-hour clock. A window that runs past
/// midnight ends at `24:MM`.
#[derive(Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct FoodTruck {
    applicant: String,
    location: String,
    start24: String,
    end24: String,
    #[serde(deserialize_with = "de_day_order")]
    dayorder: u8,
    dayofweekstr: String,
}

impl FoodTruck {
    /// Columns needed to build a [`FoodTruck`], in `$select` order.
    pub const FIELDS: [&'static str; 6] = [
        "applicant",
        "location",
        "start24",
        "end24",
        "dayorder",
        "dayofweekstr",
    ];

    pub fn new(
        applicant: &str,
        location: &str,
        start24: &str,
        end24: &str,
        dayorder: u8,
        dayofweekstr: &str,
    ) -> Self {
        Self {
            applicant: applicant.to_string(),
            location: location.to_string(),
            start24: start24.to_string(),
            end24: end24.to_string(),
            dayorder,
            dayofweekstr: dayofweekstr.to_string(),
        }
    }

    pub fn applicant(&self) -> &str {
        &self.applicant
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn start24(&self) -> &str {
        &self.start24
    }

    pub fn end24(&self) -> &str {
        &self.end24
    }

    /// ISO weekday, Monday = 1 through Sunday = 7.
    pub fn dayorder(&self) -> u8 {
        self.dayorder
    }

    pub fn dayofweekstr(&self) -> &str {
        &self.dayofweekstr
    }

    /// Converts raw rows into typed records.
    ///
    /// All or nothing: the first row that does not fit fails the whole batch
    /// with [`Error::Validation`] naming its position.
    pub fn from_records(rows: Vec<Value>) -> Result<Vec<FoodTruck>, Error> {
        rows.into_iter()
            .enumerate()
            .map(|(index, row)| {
                serde_json::from_value::<FoodTruck>(row).map_err(|e| {
                    tracing::warn!("row {} does not match the food truck shape: {}", index, e);
                    Error::Validation {
                        index,
                        message: e.to_string(),
                    }
                })
            })
            .collect()
    }
}

/// SODA sends numbers as JSON strings, so accept `3` and `"3"` alike.
fn de_day_order<'de, D>(deserializer: D) -> Result<u8, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(u64),
        Text(String),
    }

    let day = match Raw::deserialize(deserializer)? {
        Raw::Number(n) => n,
        Raw::Text(s) => s
            .trim()
            .parse::<u64>()
            .map_err(|_| de::Error::custom(format!("dayorder {:?} is not a number", s)))?,
    };
    match day {
        1..=7 => Ok(day as u8),
        _ => Err(de::Error::custom(format!(
            "dayorder {} is outside 1..=7",
            day
        ))),
    }
}
