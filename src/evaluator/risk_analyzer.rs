use serde::{Deserialize, Serialize};
use std::fmt;

/// Coarse qualitative risk classification of an evaluated opportunity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RiskTier {
    Low,
    Medium,
    High,
}

impl RiskTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskTier::Low => "Low",
            RiskTier::Medium => "Medium",
            RiskTier::High => "High",
        }
    }
}

impl fmt::Display for RiskTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Two exclusive lower bounds splitting a metric into three tiers.
///
/// A metric strictly above `low_above` is [`RiskTier::Low`], strictly above
/// `medium_above` is [`RiskTier::Medium`], anything else (including NaN) is
/// [`RiskTier::High`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RiskAnalyzer {
    low_above: f64,
    medium_above: f64,
}

impl RiskAnalyzer {
    pub const fn new(low_above: f64, medium_above: f64) -> Self {
        Self {
            low_above,
            medium_above,
        }
    }

    pub fn low_above(&self) -> f64 {
        self.low_above
    }

    pub fn medium_above(&self) -> f64 {
        self.medium_above
    }

    pub fn analyze_risk(&self, metric: f64) -> RiskTier {
        if metric > self.low_above {
            RiskTier::Low
        } else if metric > self.medium_above {
            RiskTier::Medium
        } else {
            RiskTier::High
        }
    }
}
