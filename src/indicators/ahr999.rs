//! AHR999 valuation indicator
//!
//! AHR999 = (Price / 200-day DCA cost) × (Price / Growth valuation)
//! Growth valuation = 10^(5.84 × log10(days since genesis) − 17.01)

use crate::indicators::error::IndicatorError;
use crate::models::{
    daily_prices, DailyPrice, Indicator, IndicatorOutcome, IndicatorSummary, MetricPoint,
    MetricSeries, PricePoint,
};
use chrono::{DateTime, Duration, Utc};
use tracing::debug;

/// Days evaluated by the report
pub const EVALUATION_WINDOW_DAYS: i64 = 7;
/// Lookback of the DCA cost average
pub const DCA_LOOKBACK_DAYS: i64 = 200;
/// Price history needed to evaluate the whole window
pub const HISTORY_DAYS: i64 = EVALUATION_WINDOW_DAYS + DCA_LOOKBACK_DAYS;

/// 2009-01-03T00:00:00Z
pub const GENESIS_TIMESTAMP: i64 = 1_230_940_800;

const SECONDS_PER_DAY: i64 = 86_400;

/// Per-day AHR999 values over the evaluation window
#[derive(Debug, Clone, PartialEq)]
pub struct Ahr999Evaluation {
    pub series: MetricSeries,
    pub summary: IndicatorSummary,
}

impl From<Ahr999Evaluation> for IndicatorOutcome {
    fn from(evaluation: Ahr999Evaluation) -> Self {
        IndicatorOutcome::Present {
            series: evaluation.series,
            summary: evaluation.summary,
        }
    }
}

/// Whole days elapsed since the genesis block, floored
pub fn days_since_genesis(at: DateTime<Utc>) -> i64 {
    (at.timestamp() - GENESIS_TIMESTAMP).div_euclid(SECONDS_PER_DAY)
}

/// Power-law growth valuation for a coin age in days.
///
/// Returns `None` when the age is not positive.
pub fn growth_valuation(days_since_genesis: i64) -> Option<f64> {
    if days_since_genesis <= 0 {
        return None;
    }
    let log_age = (days_since_genesis as f64).log10();
    Some(10f64.powf(5.84 * log_age - 17.01))
}

/// Mean price over `[anchor - 200d, anchor)`.
///
/// Falls back to every sample before `anchor`, then to `current_price`.
pub fn dca_cost(points: &[PricePoint], anchor: DateTime<Utc>, current_price: f64) -> f64 {
    let start = anchor - Duration::days(DCA_LOOKBACK_DAYS);

    let mut window: Vec<f64> = points
        .iter()
        .filter(|p| p.timestamp >= start && p.timestamp < anchor)
        .map(|p| p.price)
        .collect();

    if window.is_empty() {
        window = points
            .iter()
            .filter(|p| p.timestamp < anchor)
            .map(|p| p.price)
            .collect();
    }

    if window.is_empty() {
        return current_price;
    }

    window.iter().sum::<f64>() / window.len() as f64
}

/// AHR999 for the day represented by `day`
pub fn ahr999_for_day(points: &[PricePoint], day: &DailyPrice) -> f64 {
    let current_price = day.price();
    let anchor = day.timestamp();

    let cost = dca_cost(points, anchor, current_price);
    let growth = growth_valuation(days_since_genesis(anchor)).unwrap_or(current_price);

    (current_price / cost) * (current_price / growth)
}

/// Compute AHR999 for each calendar day of the trailing window ending at `now`.
///
/// `points` should cover [`HISTORY_DAYS`] so every day has a full DCA lookback.
pub fn compute_ahr999(
    points: &[PricePoint],
    now: DateTime<Utc>,
) -> Result<Ahr999Evaluation, IndicatorError> {
    if points.is_empty() {
        return Err(IndicatorError::DataUnavailable(
            "no price samples returned".to_string(),
        ));
    }

    let window_start = now - Duration::days(EVALUATION_WINDOW_DAYS);
    let days = daily_prices(points.iter().filter(|p| p.timestamp >= window_start));

    let values: Vec<MetricPoint> = days
        .iter()
        .map(|day| {
            let value = ahr999_for_day(points, day);
            debug!(date = %day.date, price = day.price(), ahr999 = value, "AHR999 computed");
            MetricPoint::new(day.date, value)
        })
        .collect();

    let series = MetricSeries::new(Indicator::Ahr999, values);
    let summary = series.summary().ok_or_else(|| {
        IndicatorError::DataUnavailable(format!(
            "no price samples within the last {} days",
            EVALUATION_WINDOW_DAYS
        ))
    })?;

    Ok(Ahr999Evaluation { series, summary })
}
