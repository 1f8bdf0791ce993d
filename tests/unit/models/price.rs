//! Unit tests for daily price grouping

use btc_dca_mailer::models::{daily_prices, PricePoint};
use chrono::{NaiveDate, TimeZone, Utc};

#[test]
fn test_latest_sample_of_each_day_wins() {
    let points = vec![
        PricePoint::new(Utc.with_ymd_and_hms(2024, 1, 1, 20, 0, 0).unwrap(), 3.0),
        PricePoint::new(Utc.with_ymd_and_hms(2024, 1, 1, 8, 0, 0).unwrap(), 1.0),
        PricePoint::new(Utc.with_ymd_and_hms(2024, 1, 2, 0, 0, 0).unwrap(), 4.0),
        PricePoint::new(Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap(), 2.0),
    ];

    let days = daily_prices(&points);

    assert_eq!(days.len(), 2);
    assert_eq!(days[0].date, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
    assert_eq!(days[0].price(), 3.0);
    assert_eq!(days[1].date, NaiveDate::from_ymd_opt(2024, 1, 2).unwrap());
    assert_eq!(days[1].price(), 4.0);
}

#[test]
fn test_duplicate_timestamp_keeps_last_observed() {
    let ts = Utc.with_ymd_and_hms(2024, 1, 1, 20, 0, 0).unwrap();
    let points = vec![PricePoint::new(ts, 1.0), PricePoint::new(ts, 2.0)];

    let days = daily_prices(&points);

    assert_eq!(days.len(), 1);
    assert_eq!(days[0].price(), 2.0);
}
