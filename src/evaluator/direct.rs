use super::validation::{ensure_finite_result, ensure_non_negative, ensure_percentage, ensure_positive, percentage_of};
use super::{EvaluationError, EvaluationResult, RiskAnalyzer};
use crate::strategy::{DirectInput, StrategyKind};

/// Two market orders on two venues.
pub const ESTIMATED_TIME_MINUTES: f64 = 5.0;

/// Classifies on profit percentage.
pub const RISK: RiskAnalyzer = RiskAnalyzer::new(2.0, 0.5);

fn validate(input: &DirectInput) -> Result<(), EvaluationError> {
    ensure_positive("buyPrice", input.buy_price)?;
    ensure_non_negative("sellPrice", input.sell_price)?;
    ensure_positive("amount", input.amount)?;
    ensure_percentage("buyExchangeFeePct", input.buy_exchange_fee_pct)?;
    ensure_percentage("sellExchangeFeePct", input.sell_exchange_fee_pct)?;
    ensure_non_negative("networkFeeFlat", input.network_fee_flat)
}

pub fn evaluate_direct(input: &DirectInput) -> Result<EvaluationResult, EvaluationError> {
    validate(input)?;

    let gross_profit = (input.sell_price - input.buy_price) * input.amount;

    let buy_fee = input.buy_price * input.amount * input.buy_exchange_fee_pct / 100.0;
    let sell_fee = input.sell_price * input.amount * input.sell_exchange_fee_pct / 100.0;
    let network_fee = if input.include_network_fees {
        input.network_fee_flat
    } else {
        0.0
    };
    let total_fees = buy_fee + sell_fee + network_fee;

    let net_profit = gross_profit - total_fees;
    let profit_percentage = percentage_of(net_profit, input.buy_price * input.amount)?;

    ensure_finite_result(EvaluationResult {
        strategy: StrategyKind::Direct,
        gross_profit,
        total_fees,
        net_profit,
        profit_percentage,
        estimated_time_minutes: ESTIMATED_TIME_MINUTES,
        risk_tier: RISK.analyze_risk(profit_percentage),
        risk_metric: profit_percentage,
        annualized_return: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluator::RiskTier;
    use assert_approx_eq::assert_approx_eq;

    #[test]
    fn test_default_form_values() {
        let result = evaluate_direct(&DirectInput::default()).unwrap();

        assert_approx_eq!(result.gross_profit, 200.0);
        assert_approx_eq!(result.total_fees, 68.2);
        assert_approx_eq!(result.net_profit, 131.8);
        assert_approx_eq!(result.profit_percentage, 131.8 / 26500.0 * 100.0);
        assert_eq!(result.estimated_time_minutes, 5.0);
        assert_eq!(result.risk_tier, RiskTier::High);
    }

    #[test]
    fn test_network_fee_only_when_included() {
        let input = DirectInput {
            include_network_fees: false,
            ..DirectInput::default()
        };
        let result = evaluate_direct(&input).unwrap();

        assert_approx_eq!(result.total_fees, 53.2);
        assert_approx_eq!(result.net_profit, 146.8);
    }

    #[test]
    fn test_wide_spread_is_low_risk() {
        let input = DirectInput {
            sell_price: 28000.0,
            ..DirectInput::default()
        };
        let result = evaluate_direct(&input).unwrap();

        // 1500 - 26.5 - 28 - 15 = 1430.5 on 26500 => ~5.4%
        assert_approx_eq!(result.net_profit, 1430.5);
        assert_eq!(result.risk_tier, RiskTier::Low);
    }

    #[test]
    fn test_inverted_spread_loses_money() {
        let input = DirectInput {
            sell_price: 26400.0,
            ..DirectInput::default()
        };
        let result = evaluate_direct(&input).unwrap();

        assert!(result.gross_profit < 0.0);
        assert!(result.net_profit < result.gross_profit);
        assert_eq!(result.risk_tier, RiskTier::High);
    }

    #[test]
    fn test_rejects_non_positive_buy_price_and_amount() {
        for (buy_price, amount, field) in [(0.0, 1.0, "buyPrice"), (-5.0, 1.0, "buyPrice"), (26500.0, 0.0, "amount")] {
            let input = DirectInput {
                buy_price,
                amount,
                ..DirectInput::default()
            };
            let err = evaluate_direct(&input).unwrap_err();
            assert_eq!(err.field(), field);
            assert!(!err.is_division_by_zero());
        }
    }

    #[test]
    fn test_rejects_fee_outside_percentage_range() {
        let input = DirectInput {
            sell_exchange_fee_pct: 120.0,
            ..DirectInput::default()
        };
        assert_eq!(evaluate_direct(&input).unwrap_err().field(), "sellExchangeFeePct");
    }

    #[test]
    fn test_rejects_negative_sell_price() {
        let input = DirectInput {
            sell_price: -26700.0,
            include_network_fees: false,
            ..DirectInput::default()
        };
        let err = evaluate_direct(&input).unwrap_err();

        assert_eq!(err.field(), "sellPrice");
        assert!(!err.is_division_by_zero());
    }

    #[test]
    fn test_rejects_nan_sell_price() {
        let input = DirectInput {
            sell_price: f64::NAN,
            ..DirectInput::default()
        };
        assert_eq!(evaluate_direct(&input).unwrap_err().field(), "sellPrice");
    }
}
