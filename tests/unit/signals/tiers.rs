//! Unit tests for investment tiers

use btc_dca_mailer::signals::tiers::InvestmentTiers;

#[test]
fn test_default_tier_amounts() {
    let tiers = InvestmentTiers::default();
    assert_eq!(tiers.amount_for(0), 0);
    assert_eq!(tiers.amount_for(1), 750);
    assert_eq!(tiers.amount_for(2), 1500);
    assert_eq!(tiers.amount_for(3), 3000);
}

#[test]
fn test_unknown_count_recommends_nothing() {
    let tiers = InvestmentTiers::default();
    assert_eq!(tiers.amount_for(4), 0);
    assert_eq!(tiers.amount_for(usize::MAX), 0);
}

#[test]
fn test_parse_tiers() {
    let tiers: InvestmentTiers = "0, 550,1100 ,2100".parse().unwrap();
    assert_eq!(tiers.amounts(), [0, 550, 1100, 2100]);
}

#[test]
fn test_parse_rejects_wrong_length() {
    let err = "0,750,1500".parse::<InvestmentTiers>().unwrap_err();
    assert!(err.contains("expected 4"));
}

#[test]
fn test_parse_rejects_non_numeric() {
    assert!("0,750,lots,3000".parse::<InvestmentTiers>().is_err());
    assert!("0,-750,1500,3000".parse::<InvestmentTiers>().is_err());
}
