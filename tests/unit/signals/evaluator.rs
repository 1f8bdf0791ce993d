//! Unit tests for the indicator evaluator

use btc_dca_mailer::models::{Indicator, IndicatorOutcome, IndicatorReadings, MetricPoint, MetricSeries};
use btc_dca_mailer::signals::evaluator::IndicatorEvaluator;
use btc_dca_mailer::signals::tiers::InvestmentTiers;
use chrono::NaiveDate;

fn present(indicator: Indicator, values: &[f64]) -> IndicatorOutcome {
    let date = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
    let points = values.iter().map(|&v| MetricPoint::new(date, v)).collect();
    IndicatorOutcome::from_series(MetricSeries::new(indicator, points))
}

#[test]
fn test_one_flash_recommends_first_tier() {
    let readings = IndicatorReadings::new(
        present(Indicator::MvrvZScore, &[-1.2, 0.3, 0.5]),
        present(Indicator::PuellMultiple, &[0.9, 1.1]),
        present(Indicator::Ahr999, &[0.5, 0.6]),
    );
    let evaluation = IndicatorEvaluator::default().evaluate(readings);

    assert_eq!(evaluation.flash.count, 1);
    assert_eq!(evaluation.investment_amount, 750);
    assert_eq!(evaluation.currency, "EUR");
}

#[test]
fn test_all_flashes_recommend_top_tier() {
    let readings = IndicatorReadings::new(
        present(Indicator::MvrvZScore, &[-0.2]),
        present(Indicator::PuellMultiple, &[0.3]),
        present(Indicator::Ahr999, &[0.4]),
    );
    let evaluation = IndicatorEvaluator::default().evaluate(readings);

    assert_eq!(evaluation.flash.count, 3);
    assert_eq!(evaluation.investment_amount, 3000);
}

#[test]
fn test_failed_indicator_stays_absent() {
    let readings = IndicatorReadings::new(
        present(Indicator::MvrvZScore, &[0.8]),
        IndicatorOutcome::absent("HTTP request failed"),
        present(Indicator::Ahr999, &[0.3]),
    );
    let evaluation = IndicatorEvaluator::default().evaluate(readings);

    assert!(evaluation.readings.puell_multiple.summary().is_none());
    assert_eq!(evaluation.flash.flashed, vec![Indicator::Ahr999]);
    assert!(!evaluation.all_absent());
}

#[test]
fn test_custom_tiers() {
    let readings = IndicatorReadings::new(
        present(Indicator::MvrvZScore, &[-0.2]),
        present(Indicator::PuellMultiple, &[0.3]),
        IndicatorOutcome::absent("no price data"),
    );
    let evaluator = IndicatorEvaluator::new(InvestmentTiers::new([0, 550, 1100, 2100]));

    assert_eq!(evaluator.evaluate(readings).investment_amount, 1100);
}
