//! Report workflow steps
//!
//! Each indicator is retrieved behind its own boundary: provider and
//! computation failures become [`IndicatorOutcome::Absent`] and never escape.

use crate::config::AppConfig;
use crate::indicators::ahr999::{compute_ahr999, HISTORY_DAYS};
use crate::jobs::context::JobContext;
use crate::jobs::types::{ReportError, ReportOutcome, METRIC_WINDOW_DAYS};
use crate::models::{Indicator, IndicatorOutcome, IndicatorReadings};
use crate::report::render_email;
use crate::services::mailer::OutgoingMail;
use crate::signals::evaluator::IndicatorEvaluator;
use chrono::{DateTime, Duration, Utc};
use tracing::{debug, info, warn};

/// Retrieve a provider-published indicator (MVRV Z-Score, Puell Multiple)
pub async fn fetch_chart_indicator(ctx: &JobContext, indicator: Indicator) -> IndicatorOutcome {
    match ctx
        .chart_metrics
        .fetch_metric(indicator, METRIC_WINDOW_DAYS)
        .await
    {
        Ok(series) => {
            debug!(
                indicator = %indicator,
                points = series.points.len(),
                "Fetched {} values for {}",
                series.points.len(),
                indicator
            );
            IndicatorOutcome::from_series(series)
        }
        Err(e) => {
            warn!(indicator = %indicator, error = %e, "Error fetching {}", indicator);
            IndicatorOutcome::absent(e.to_string())
        }
    }
}

/// Compute AHR999 from the trailing 207 days of price history
pub async fn fetch_ahr999(ctx: &JobContext, now: DateTime<Utc>) -> IndicatorOutcome {
    let from = now - Duration::days(HISTORY_DAYS);

    let points = match ctx.price_history.fetch_price_range(from, now).await {
        Ok(points) => points,
        Err(e) => {
            warn!(indicator = %Indicator::Ahr999, error = %e, "Error fetching price history");
            return IndicatorOutcome::absent(e.to_string());
        }
    };

    match compute_ahr999(&points, now) {
        Ok(evaluation) => {
            debug!(
                indicator = %Indicator::Ahr999,
                days = evaluation.series.points.len(),
                min = evaluation.summary.min_value,
                "Computed AHR999"
            );
            evaluation.into()
        }
        Err(e) => {
            warn!(indicator = %Indicator::Ahr999, error = %e, "Error computing AHR999");
            IndicatorOutcome::absent(e.to_string())
        }
    }
}

/// Retrieve all indicators one after another
pub async fn fetch_indicators(ctx: &JobContext, now: DateTime<Utc>) -> IndicatorReadings {
    let mvrv_z_score = fetch_chart_indicator(ctx, Indicator::MvrvZScore).await;
    let puell_multiple = fetch_chart_indicator(ctx, Indicator::PuellMultiple).await;
    let ahr999 = fetch_ahr999(ctx, now).await;

    IndicatorReadings::new(mvrv_z_score, puell_multiple, ahr999)
}

/// Current BTC price for the report header, if available
pub async fn fetch_btc_price(ctx: &JobContext) -> Option<f64> {
    match ctx.price_history.fetch_spot_price().await {
        Ok(price) => Some(price),
        Err(e) => {
            warn!(error = %e, "Error fetching current BTC price");
            None
        }
    }
}

/// Fetch, evaluate, render and send one report
pub async fn run_report(
    ctx: &JobContext,
    config: &AppConfig,
    now: DateTime<Utc>,
) -> Result<ReportOutcome, ReportError> {
    info!("Fetching Bitcoin indicators...");
    let readings = fetch_indicators(ctx, now).await;

    if readings.all_absent() {
        return Err(ReportError::AllIndicatorsUnavailable);
    }

    let evaluation = IndicatorEvaluator::new(config.report.tiers).evaluate(readings);
    info!(
        flash_count = evaluation.flash.count,
        flashed = ?evaluation.flash.names(),
        amount = evaluation.investment_amount,
        "Indicators flashed: {}/{}",
        evaluation.flash.count,
        Indicator::ALL.len()
    );

    info!("Fetching current BTC price...");
    let btc_price = fetch_btc_price(ctx).await;

    info!("Formatting email...");
    let mail = OutgoingMail {
        subject: config.report.subject.clone(),
        html_body: render_email(&evaluation, btc_price, now),
    };

    let mail_config = config.mail.require()?;

    info!(recipient = %mail_config.recipient_email, "Sending email...");
    ctx.mailer.send(&mail_config, &mail).await?;

    Ok(ReportOutcome {
        evaluation,
        btc_price,
        recipient: mail_config.recipient_email,
        subject: mail.subject,
    })
}
