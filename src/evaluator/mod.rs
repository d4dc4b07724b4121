pub mod direct;
pub mod futures;
pub mod p2p;
pub mod risk_analyzer;
pub mod triangular;
pub mod validation;

pub use direct::evaluate_direct;
pub use futures::evaluate_futures;
pub use p2p::evaluate_p2p;
pub use risk_analyzer::{RiskAnalyzer, RiskTier};
pub use triangular::evaluate_triangular;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::strategy::{StrategyInput, StrategyKind};

/// Rejection of a calculator input. No partial result is ever produced.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EvaluationError {
    #[error("Invalid input for {field}: {reason}")]
    InvalidInput { field: &'static str, reason: String },

    #[error("Division by zero: {field} must not be zero")]
    DivisionByZero { field: &'static str },
}

impl EvaluationError {
    pub fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            field,
            reason: reason.into(),
        }
    }

    pub fn is_division_by_zero(&self) -> bool {
        matches!(self, Self::DivisionByZero { .. })
    }

    /// Name of the offending input field.
    pub fn field(&self) -> &'static str {
        match self {
            Self::InvalidInput { field, .. } | Self::DivisionByZero { field } => field,
        }
    }
}

/// Uniform outcome of evaluating any strategy.
///
/// `net_profit` is always exactly `gross_profit - total_fees`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluationResult {
    pub strategy: StrategyKind,
    pub gross_profit: f64,
    pub total_fees: f64,
    pub net_profit: f64,
    pub profit_percentage: f64,
    pub estimated_time_minutes: f64,
    pub risk_tier: RiskTier,
    /// The figure `risk_tier` was derived from.
    pub risk_metric: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub annualized_return: Option<f64>,
}

/// Evaluates `input` with the evaluator selected by `strategy`.
///
/// The tag must agree with the input's variant.
pub fn evaluate(
    strategy: StrategyKind,
    input: &StrategyInput,
) -> Result<EvaluationResult, EvaluationError> {
    if strategy != input.kind() {
        warn!("Strategy tag {} does not match {} input", strategy, input.kind());
        return Err(EvaluationError::invalid(
            "strategy",
            format!("tag '{}' does not match a {} input", strategy, input.kind()),
        ));
    }

    let outcome = match input {
        StrategyInput::Direct(direct) => evaluate_direct(direct),
        StrategyInput::Triangular(triangular) => evaluate_triangular(triangular),
        StrategyInput::Futures(futures) => evaluate_futures(futures),
        StrategyInput::P2p(p2p) => evaluate_p2p(p2p),
    };

    match &outcome {
        Ok(result) => debug!(
            "Evaluated {} arbitrage: net profit {:.4}, {:.4}%, risk {}",
            strategy, result.net_profit, result.profit_percentage, result.risk_tier
        ),
        Err(e) => warn!("Rejected {} arbitrage input: {}", strategy, e),
    }

    outcome
}
