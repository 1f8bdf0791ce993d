use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A raw USD price sample
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub timestamp: DateTime<Utc>,
    pub price: f64,
}

impl PricePoint {
    pub fn new(timestamp: DateTime<Utc>, price: f64) -> Self {
        Self { timestamp, price }
    }

    pub fn date(&self) -> NaiveDate {
        self.timestamp.date_naive()
    }
}

/// The last observed sample of a UTC calendar day
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DailyPrice {
    pub date: NaiveDate,
    pub point: PricePoint,
}

impl DailyPrice {
    pub fn price(&self) -> f64 {
        self.point.price
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.point.timestamp
    }
}

/// Collapse samples into one [`DailyPrice`] per calendar day, oldest first.
///
/// The sample with the latest timestamp wins; on equal timestamps the one
/// observed last in `points` wins.
pub fn daily_prices<'a, I>(points: I) -> Vec<DailyPrice>
where
    I: IntoIterator<Item = &'a PricePoint>,
{
    let mut by_day: BTreeMap<NaiveDate, PricePoint> = BTreeMap::new();
    for point in points {
        let date = point.date();
        match by_day.get(&date) {
            Some(existing) if existing.timestamp > point.timestamp => {}
            _ => {
                by_day.insert(date, *point);
            }
        }
    }

    by_day
        .into_iter()
        .map(|(date, point)| DailyPrice { date, point })
        .collect()
}
