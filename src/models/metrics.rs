use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The valuation indicators tracked by the report, in report order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Indicator {
    MvrvZScore,
    PuellMultiple,
    Ahr999,
}

impl Indicator {
    pub const ALL: [Indicator; 3] = [
        Indicator::MvrvZScore,
        Indicator::PuellMultiple,
        Indicator::Ahr999,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Indicator::MvrvZScore => "MVRV Z-Score",
            Indicator::PuellMultiple => "Puell Multiple",
            Indicator::Ahr999 => "AHR999",
        }
    }
}

impl fmt::Display for Indicator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricPoint {
    pub date: NaiveDate,
    pub value: f64,
}

impl MetricPoint {
    pub fn new(date: NaiveDate, value: f64) -> Self {
        Self { date, value }
    }
}

/// Daily values of one indicator, oldest first
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricSeries {
    pub indicator: Indicator,
    pub points: Vec<MetricPoint>,
}

impl MetricSeries {
    pub fn new(indicator: Indicator, points: Vec<MetricPoint>) -> Self {
        Self { indicator, points }
    }

    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().map(|p| p.value)
    }

    pub fn summary(&self) -> Option<IndicatorSummary> {
        IndicatorSummary::from_points(&self.points)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IndicatorSummary {
    pub min_value: f64,
    pub min_date: NaiveDate,
    pub latest_value: f64,
    pub latest_date: NaiveDate,
}

impl IndicatorSummary {
    /// Summarize a series; the earliest day wins when minima tie.
    pub fn from_points(points: &[MetricPoint]) -> Option<Self> {
        let first = points.first()?;
        let latest = points.last()?;

        let mut min = *first;
        for point in &points[1..] {
            if point.value < min.value {
                min = *point;
            }
        }

        Some(Self {
            min_value: min.value,
            min_date: min.date,
            latest_value: latest.value,
            latest_date: latest.date,
        })
    }
}

/// Result of retrieving one indicator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum IndicatorOutcome {
    Present {
        series: MetricSeries,
        summary: IndicatorSummary,
    },
    Absent {
        reason: String,
    },
}

impl IndicatorOutcome {
    /// Wrap a retrieved series. An empty series has nothing to summarize and
    /// is reported as absent.
    pub fn from_series(series: MetricSeries) -> Self {
        match series.summary() {
            Some(summary) => IndicatorOutcome::Present { series, summary },
            None => IndicatorOutcome::absent(format!("{} series is empty", series.indicator)),
        }
    }

    pub fn absent(reason: impl Into<String>) -> Self {
        IndicatorOutcome::Absent {
            reason: reason.into(),
        }
    }

    pub fn is_present(&self) -> bool {
        matches!(self, IndicatorOutcome::Present { .. })
    }

    pub fn series(&self) -> Option<&MetricSeries> {
        match self {
            IndicatorOutcome::Present { series, .. } => Some(series),
            IndicatorOutcome::Absent { .. } => None,
        }
    }

    pub fn summary(&self) -> Option<&IndicatorSummary> {
        match self {
            IndicatorOutcome::Present { summary, .. } => Some(summary),
            IndicatorOutcome::Absent { .. } => None,
        }
    }
}

/// One outcome per [`Indicator`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorReadings {
    pub mvrv_z_score: IndicatorOutcome,
    pub puell_multiple: IndicatorOutcome,
    pub ahr999: IndicatorOutcome,
}

impl IndicatorReadings {
    pub fn new(
        mvrv_z_score: IndicatorOutcome,
        puell_multiple: IndicatorOutcome,
        ahr999: IndicatorOutcome,
    ) -> Self {
        Self {
            mvrv_z_score,
            puell_multiple,
            ahr999,
        }
    }

    pub fn get(&self, indicator: Indicator) -> &IndicatorOutcome {
        match indicator {
            Indicator::MvrvZScore => &self.mvrv_z_score,
            Indicator::PuellMultiple => &self.puell_multiple,
            Indicator::Ahr999 => &self.ahr999,
        }
    }

    /// Outcomes in [`Indicator::ALL`] order
    pub fn iter(&self) -> impl Iterator<Item = (Indicator, &IndicatorOutcome)> + '_ {
        Indicator::ALL.into_iter().map(move |i| (i, self.get(i)))
    }

    pub fn all_absent(&self) -> bool {
        self.iter().all(|(_, outcome)| !outcome.is_present())
    }
}
