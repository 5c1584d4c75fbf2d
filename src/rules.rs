use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("n_decks must be at least 1")]
    NonPositiveDecks,
    #[error("unrecognized blackjack payout '{0}' (expected 3:2 or 6:5)")]
    UnknownPayout(String),
    #[error("unrecognized player policy '{0}' (expected baseline)")]
    UnknownPolicy(String),
}

/// Payout for a player natural blackjack, as a multiple of the bet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BlackjackPayout {
    #[serde(rename = "3:2")]
    ThreeToTwo,
    #[serde(rename = "6:5")]
    SixToFive,
}

impl BlackjackPayout {
    pub fn multiplier(&self) -> f64 {
        match self {
            BlackjackPayout::ThreeToTwo => 1.5,
            BlackjackPayout::SixToFive => 1.2,
        }
    }
}

impl FromStr for BlackjackPayout {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "3:2" => Ok(BlackjackPayout::ThreeToTwo),
            "6:5" => Ok(BlackjackPayout::SixToFive),
            other => Err(ConfigError::UnknownPayout(other.to_string())),
        }
    }
}

impl fmt::Display for BlackjackPayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BlackjackPayout::ThreeToTwo => write!(f, "3:2"),
            BlackjackPayout::SixToFive => write!(f, "6:5"),
        }
    }
}

/// Table rules for a simulation batch.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RulesConfig {
    /// Number of decks combined into one shoe
    pub n_decks: u32,
    /// H17 when true, S17 when false
    pub dealer_hits_soft_17: bool,
    pub blackjack_payout: BlackjackPayout,
}

impl Default for RulesConfig {
    fn default() -> Self {
        RulesConfig {
            n_decks: 6,
            dealer_hits_soft_17: true,
            blackjack_payout: BlackjackPayout::ThreeToTwo,
        }
    }
}

impl RulesConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.n_decks == 0 {
            return Err(ConfigError::NonPositiveDecks);
        }
        Ok(())
    }
}

/// Player decision strategy.
///
/// Baseline: hit until hard 17 or better, with soft 17 treated as a hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayerPolicy {
    #[default]
    Baseline,
}

impl FromStr for PlayerPolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "baseline" => Ok(PlayerPolicy::Baseline),
            other => Err(ConfigError::UnknownPolicy(other.to_string())),
        }
    }
}

impl fmt::Display for PlayerPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayerPolicy::Baseline => write!(f, "baseline"),
        }
    }
}
