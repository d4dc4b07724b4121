use serde::{Deserialize, Serialize};

/// Buy on one venue, sell the same asset on another.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DirectInput {
    pub buy_price: f64,
    pub sell_price: f64,
    pub amount: f64,
    pub buy_exchange_fee_pct: f64,
    pub sell_exchange_fee_pct: f64,
    pub include_network_fees: bool,
    pub network_fee_flat: f64,
}

impl Default for DirectInput {
    fn default() -> Self {
        Self {
            buy_price: 26500.0,
            sell_price: 26700.0,
            amount: 1.0,
            buy_exchange_fee_pct: 0.1,
            sell_exchange_fee_pct: 0.1,
            include_network_fees: true,
            network_fee_flat: 15.0,
        }
    }
}

/// Three conversions on a single venue that close back into the start currency.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TriangularInput {
    pub start_amount: f64,
    pub first_pair_rate: f64,
    pub second_pair_rate: f64,
    pub third_pair_rate: f64,
    /// Charged on every leg.
    pub exchange_fee_pct: f64,
    pub include_slippage: bool,
    pub slippage_pct: f64,
}

impl Default for TriangularInput {
    fn default() -> Self {
        Self {
            start_amount: 1000.0,
            first_pair_rate: 0.03,
            second_pair_rate: 28000.0,
            third_pair_rate: 1.01,
            exchange_fee_pct: 0.1,
            include_slippage: true,
            slippage_pct: 0.5,
        }
    }
}

/// Long spot, short futures, held until expiration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FuturesInput {
    pub spot_price: f64,
    pub futures_price: f64,
    pub amount: f64,
    pub days_to_expiration: u32,
    pub funding_rate_pct_per_day: f64,
    pub spot_exchange_fee_pct: f64,
    pub futures_exchange_fee_pct: f64,
}

impl Default for FuturesInput {
    fn default() -> Self {
        Self {
            spot_price: 26500.0,
            futures_price: 26900.0,
            amount: 1.0,
            days_to_expiration: 30,
            funding_rate_pct_per_day: 0.01,
            spot_exchange_fee_pct: 0.1,
            futures_exchange_fee_pct: 0.05,
        }
    }
}

/// Buy from one peer-to-peer counterparty, sell to another.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct P2pInput {
    pub buy_rate: f64,
    pub sell_rate: f64,
    pub amount: f64,
    pub payment_processing_fee_pct: f64,
    pub withdrawal_fee_flat: f64,
    pub estimated_time_to_complete_minutes: f64,
}

impl Default for P2pInput {
    fn default() -> Self {
        Self {
            buy_rate: 0.98,
            sell_rate: 1.02,
            amount: 1000.0,
            payment_processing_fee_pct: 1.5,
            withdrawal_fee_flat: 5.0,
            estimated_time_to_complete_minutes: 30.0,
        }
    }
}
