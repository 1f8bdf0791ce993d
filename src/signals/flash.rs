//! Flash detection: an indicator "flashes" when any value of its window sits
//! strictly below its historical-extremity threshold.

use crate::models::{Indicator, IndicatorReadings, MetricSeries};
use serde::{Deserialize, Serialize};

/// Strict upper bounds per indicator
pub struct FlashThresholds;

impl FlashThresholds {
    pub const MVRV_Z_SCORE: f64 = 0.0;
    pub const PUELL_MULTIPLE: f64 = 0.5;
    pub const AHR999: f64 = 0.45;

    /// Get the threshold for an indicator
    pub fn get(indicator: Indicator) -> f64 {
        match indicator {
            Indicator::MvrvZScore => Self::MVRV_Z_SCORE,
            Indicator::PuellMultiple => Self::PUELL_MULTIPLE,
            Indicator::Ahr999 => Self::AHR999,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlashResult {
    pub count: usize,
    /// Flashed indicators in [`Indicator::ALL`] order
    pub flashed: Vec<Indicator>,
}

impl FlashResult {
    pub fn names(&self) -> Vec<&'static str> {
        self.flashed.iter().map(Indicator::name).collect()
    }
}

pub fn series_flashed(series: &MetricSeries) -> bool {
    let threshold = FlashThresholds::get(series.indicator);
    series.values().any(|v| v < threshold)
}

/// Count the indicators that flashed. Absent indicators never count.
pub fn check_flashes(readings: &IndicatorReadings) -> FlashResult {
    let flashed: Vec<Indicator> = readings
        .iter()
        .filter_map(|(indicator, outcome)| {
            outcome
                .series()
                .filter(|series| series_flashed(series))
                .map(|_| indicator)
        })
        .collect();

    FlashResult {
        count: flashed.len(),
        flashed,
    }
}
