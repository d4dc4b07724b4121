pub mod inputs;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::evaluator::EvaluationError;

pub use inputs::{DirectInput, FuturesInput, P2pInput, TriangularInput};

/// Tag naming one of the four supported arbitrage strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StrategyKind {
    Direct,
    Triangular,
    Futures,
    P2p,
}

impl StrategyKind {
    pub const ALL: [StrategyKind; 4] = [
        StrategyKind::Direct,
        StrategyKind::Triangular,
        StrategyKind::Futures,
        StrategyKind::P2p,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            StrategyKind::Direct => "direct",
            StrategyKind::Triangular => "triangular",
            StrategyKind::Futures => "futures",
            StrategyKind::P2p => "p2p",
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for StrategyKind {
    type Err = EvaluationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "direct" => Ok(StrategyKind::Direct),
            "triangular" => Ok(StrategyKind::Triangular),
            "futures" => Ok(StrategyKind::Futures),
            "p2p" => Ok(StrategyKind::P2p),
            other => Err(EvaluationError::invalid(
                "strategy",
                format!("unknown strategy '{}', expected one of direct, triangular, futures, p2p", other),
            )),
        }
    }
}

/// User-supplied parameters for one evaluation, one variant per strategy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "strategy", rename_all = "lowercase")]
pub enum StrategyInput {
    Direct(DirectInput),
    Triangular(TriangularInput),
    Futures(FuturesInput),
    P2p(P2pInput),
}

impl StrategyInput {
    pub fn kind(&self) -> StrategyKind {
        match self {
            StrategyInput::Direct(_) => StrategyKind::Direct,
            StrategyInput::Triangular(_) => StrategyKind::Triangular,
            StrategyInput::Futures(_) => StrategyKind::Futures,
            StrategyInput::P2p(_) => StrategyKind::P2p,
        }
    }

    /// The calculator's initial form values for `kind`.
    pub fn default_for(kind: StrategyKind) -> Self {
        match kind {
            StrategyKind::Direct => StrategyInput::Direct(DirectInput::default()),
            StrategyKind::Triangular => StrategyInput::Triangular(TriangularInput::default()),
            StrategyKind::Futures => StrategyInput::Futures(FuturesInput::default()),
            StrategyKind::P2p => StrategyInput::P2p(P2pInput::default()),
        }
    }
}
