//! Threshold evaluation interfaces.

pub mod evaluator;
pub mod flash;
pub mod tiers;

pub use evaluator::*;
pub use flash::*;
pub use tiers::*;
