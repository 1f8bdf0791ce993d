use serde::{Deserialize, Serialize};
use std::str::FromStr;

pub const DEFAULT_TIER_AMOUNTS: [u32; 4] = [0, 750, 1500, 3000];
pub const INVESTMENT_CURRENCY: &str = "EUR";

/// Recommended amount per flash count (0 through 3)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvestmentTiers {
    amounts: [u32; 4],
}

impl Default for InvestmentTiers {
    fn default() -> Self {
        Self {
            amounts: DEFAULT_TIER_AMOUNTS,
        }
    }
}

impl InvestmentTiers {
    pub fn new(amounts: [u32; 4]) -> Self {
        Self { amounts }
    }

    pub fn amounts(&self) -> [u32; 4] {
        self.amounts
    }

    /// Amount for a flash count; unknown counts recommend nothing.
    pub fn amount_for(&self, flash_count: usize) -> u32 {
        self.amounts.get(flash_count).copied().unwrap_or(0)
    }
}

/// Parses `"0,750,1500,3000"`
impl FromStr for InvestmentTiers {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parsed = s
            .split(',')
            .map(|part| {
                part.trim()
                    .parse::<u32>()
                    .map_err(|e| format!("invalid amount '{}': {}", part.trim(), e))
            })
            .collect::<Result<Vec<u32>, String>>()?;

        let amounts: [u32; 4] = parsed
            .try_into()
            .map_err(|v: Vec<u32>| format!("expected 4 amounts, got {}", v.len()))?;

        Ok(Self { amounts })
    }
}
