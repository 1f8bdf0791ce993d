//! Shared data models spanning the evaluation layers.

pub mod metrics;
pub mod price;

pub use metrics::{
    Indicator, IndicatorOutcome, IndicatorReadings, IndicatorSummary, MetricPoint, MetricSeries,
};
pub use price::{daily_prices, DailyPrice, PricePoint};
