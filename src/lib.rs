//! # arbcalc
//!
//! Profit estimator for four kinds of crypto arbitrage: direct (cross-venue),
//! triangular, spot/futures basis, and peer-to-peer. Each evaluator is a pure
//! function from a [`StrategyInput`] to an [`EvaluationResult`] carrying gross
//! and net profit, total fees, profit percentage, an estimated time to
//! complete, and a Low/Medium/High risk tier.
//!
//! ```
//! use arbcalc::{evaluate, DirectInput, RiskTier, StrategyInput, StrategyKind};
//!
//! let input = StrategyInput::Direct(DirectInput::default());
//! let result = evaluate(StrategyKind::Direct, &input).unwrap();
//! assert_eq!(result.risk_tier, RiskTier::High);
//! ```

pub mod config;
pub mod error;
pub mod evaluator;
pub mod monitoring;
pub mod strategy;

pub use error::{ArbCalcError, Result};
pub use evaluator::{evaluate, EvaluationError, EvaluationResult, RiskTier};
pub use strategy::{
    DirectInput, FuturesInput, P2pInput, StrategyInput, StrategyKind, TriangularInput,
};
