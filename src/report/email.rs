//! HTML body of the indicator email

use crate::models::{Indicator, IndicatorOutcome};
use crate::signals::evaluator::IndicatorEvaluation;
use crate::signals::flash::FlashThresholds;
use chrono::{DateTime, Utc};
use std::fmt::Write;

const DATE_FORMAT: &str = "%Y-%m-%d";

pub fn render_email(
    evaluation: &IndicatorEvaluation,
    btc_price: Option<f64>,
    generated_at: DateTime<Utc>,
) -> String {
    let mut html = String::from(
        "<html>\n<body style=\"font-family: Arial, sans-serif; line-height: 1.6;\">\n",
    );

    if evaluation.investment_amount > 0 {
        let _ = writeln!(
            html,
            "<h2 style=\"color: #28a745;\">💰 INVESTMENT RECOMMENDATION: Invest <strong>{} {}</strong></h2>",
            evaluation.investment_amount, evaluation.currency
        );
    } else {
        let _ = writeln!(
            html,
            "<h2 style=\"color: #6c757d;\">💰 INVESTMENT RECOMMENDATION: No investment (0 {})</h2>",
            evaluation.currency
        );
    }
    html.push_str("<hr>\n");

    if let Some(price) = btc_price {
        let _ = writeln!(
            html,
            "<p><strong>📊 Current BTC Price:</strong> <strong>{}</strong></p>",
            format_usd(price)
        );
    }

    html.push_str("<h3>Minimum Values (Last 7 Days):</h3>\n<ul>\n");
    for (indicator, outcome) in evaluation.readings.iter() {
        html.push_str(&indicator_line(indicator, outcome));
    }
    html.push_str("</ul>\n<hr>\n");

    let _ = writeln!(
        html,
        "<p><strong>Indicators Flashed:</strong> <strong>{}/{}</strong></p>",
        evaluation.flash.count,
        Indicator::ALL.len()
    );
    if !evaluation.flash.flashed.is_empty() {
        let _ = writeln!(
            html,
            "<p><strong>Flashed Indicators:</strong> {}</p>",
            evaluation.flash.names().join(", ")
        );
    }

    html.push_str("<p><strong>Flash Thresholds:</strong></p>\n<ul>\n");
    for indicator in Indicator::ALL {
        let _ = writeln!(
            html,
            "<li>{}: &lt; {}</li>",
            indicator,
            FlashThresholds::get(indicator)
        );
    }
    html.push_str("</ul>\n<hr>\n");

    let _ = writeln!(
        html,
        "<p style=\"color: #6c757d; font-size: 0.9em;\">Generated: {}<br>BTC Indicator Emailer</p>",
        generated_at.format("%Y-%m-%d %H:%M:%S UTC")
    );
    html.push_str("</body>\n</html>\n");

    html
}

fn indicator_line(indicator: Indicator, outcome: &IndicatorOutcome) -> String {
    match outcome {
        IndicatorOutcome::Present { summary, .. } => format!(
            "<li><strong>{}:</strong> {:.4} on {} (Current: <strong>{:.4}</strong> from {})</li>\n",
            indicator,
            summary.min_value,
            summary.min_date.format(DATE_FORMAT),
            summary.latest_value,
            summary.latest_date.format(DATE_FORMAT)
        ),
        IndicatorOutcome::Absent { .. } => format!(
            "<li><strong>{}:</strong> [Error fetching data]</li>\n",
            indicator
        ),
    }
}

/// `$1,234,567.89`
pub fn format_usd(value: f64) -> String {
    let fixed = format!("{:.2}", value.abs());
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if value < 0.0 { "-" } else { "" };
    format!("{}${}.{}", sign, grouped, cents)
}
