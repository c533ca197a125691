use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::entity::MonitorError;

/// Stablecoins every monitor looks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TargetToken {
    #[serde(rename = "USDT")]
    Usdt,
    #[serde(rename = "USDC")]
    Usdc,
    #[serde(rename = "DAI")]
    Dai,
}

impl TargetToken {
    pub fn all() -> [TargetToken; 3] {
        [TargetToken::Usdt, TargetToken::Usdc, TargetToken::Dai]
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            TargetToken::Usdt => "USDT",
            TargetToken::Usdc => "USDC",
            TargetToken::Dai => "DAI",
        }
    }
}

impl fmt::Display for TargetToken {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl FromStr for TargetToken {
    type Err = MonitorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "USDT" => Ok(TargetToken::Usdt),
            "USDC" => Ok(TargetToken::Usdc),
            "DAI" => Ok(TargetToken::Dai),
            _ => Err(MonitorError::UnsupportedToken {
                symbol: s.to_string(),
                available: TargetToken::all()
                    .iter()
                    .map(|t| t.symbol().to_string())
                    .collect(),
            }),
        }
    }
}

/// A target token bound to its contract (or property) identifier on one chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenContract {
    pub token: TargetToken,
    pub contract_address: String,
}

impl TokenContract {
    pub fn new(token: TargetToken, contract_address: &str) -> Self {
        Self {
            token,
            contract_address: contract_address.to_string(),
        }
    }

    pub fn matches(&self, contract_address: &str) -> bool {
        self.contract_address.eq_ignore_ascii_case(contract_address)
    }
}
