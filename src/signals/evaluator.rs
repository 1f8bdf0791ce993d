//! Combines the three indicator outcomes into a recommendation.

use crate::models::IndicatorReadings;
use crate::signals::flash::{check_flashes, FlashResult};
use crate::signals::tiers::{InvestmentTiers, INVESTMENT_CURRENCY};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorEvaluation {
    pub readings: IndicatorReadings,
    pub flash: FlashResult,
    pub investment_amount: u32,
    pub currency: String,
}

impl IndicatorEvaluation {
    pub fn all_absent(&self) -> bool {
        self.readings.all_absent()
    }
}

#[derive(Debug, Clone, Default)]
pub struct IndicatorEvaluator {
    tiers: InvestmentTiers,
}

impl IndicatorEvaluator {
    pub fn new(tiers: InvestmentTiers) -> Self {
        Self { tiers }
    }

    pub fn evaluate(&self, readings: IndicatorReadings) -> IndicatorEvaluation {
        let flash = check_flashes(&readings);
        let investment_amount = self.tiers.amount_for(flash.count);

        IndicatorEvaluation {
            readings,
            flash,
            investment_amount,
            currency: INVESTMENT_CURRENCY.to_string(),
        }
    }
}
