//! Bitcoin DCA indicator mailer
//!
//! Retrieves MVRV Z-Score and Puell Multiple, computes AHR999 from BTC price
//! history, counts threshold flashes and emails an investment recommendation.

pub mod config;
pub mod core;
pub mod indicators;
pub mod jobs;
pub mod logging;
pub mod models;
pub mod report;
pub mod services;
pub mod signals;
