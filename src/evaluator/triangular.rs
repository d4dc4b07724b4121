use super::validation::{ensure_finite, ensure_finite_result, ensure_percentage, ensure_positive, percentage_of};
use super::{EvaluationError, EvaluationResult, RiskAnalyzer};
use crate::strategy::{StrategyKind, TriangularInput};

/// All three legs fill on one venue.
pub const ESTIMATED_TIME_MINUTES: f64 = 1.0;

/// Classifies on profit percentage.
pub const RISK: RiskAnalyzer = RiskAnalyzer::new(1.5, 0.3);

fn validate(input: &TriangularInput) -> Result<(), EvaluationError> {
    ensure_positive("startAmount", input.start_amount)?;
    ensure_finite("firstPairRate", input.first_pair_rate)?;
    ensure_finite("secondPairRate", input.second_pair_rate)?;
    ensure_finite("thirdPairRate", input.third_pair_rate)?;

    // The third leg divides by its rate.
    if input.third_pair_rate == 0.0 {
        return Err(EvaluationError::DivisionByZero { field: "thirdPairRate" });
    }

    ensure_positive("firstPairRate", input.first_pair_rate)?;
    ensure_positive("secondPairRate", input.second_pair_rate)?;
    ensure_positive("thirdPairRate", input.third_pair_rate)?;
    ensure_percentage("exchangeFeePct", input.exchange_fee_pct)?;
    ensure_percentage("slippagePct", input.slippage_pct)
}

/// Each leg's fee is charged on that leg's converted notional, not on the
/// start amount, so fees scale with whatever units the intermediate rates use.
pub fn evaluate_triangular(input: &TriangularInput) -> Result<EvaluationResult, EvaluationError> {
    validate(input)?;

    let first_leg_amount = input.start_amount * input.first_pair_rate;
    let second_leg_amount = first_leg_amount * input.second_pair_rate;
    let final_amount = second_leg_amount / input.third_pair_rate;

    let gross_profit = final_amount - input.start_amount;

    let fee_rate = input.exchange_fee_pct;
    let first_fee = input.start_amount * input.first_pair_rate * fee_rate / 100.0;
    let second_fee = first_leg_amount * input.second_pair_rate * fee_rate / 100.0;
    let third_fee = second_leg_amount * fee_rate / 100.0;

    let leg_fees = first_fee + second_fee + third_fee;

    // Slippage follows gross profit, so it turns into a credit on a losing
    // loop. The credit is capped at the leg fees to keep total fees >= 0.
    let slippage_cost = if input.include_slippage {
        (gross_profit * input.slippage_pct / 100.0).max(-leg_fees)
    } else {
        0.0
    };

    let total_fees = leg_fees + slippage_cost;
    let net_profit = gross_profit - total_fees;
    let profit_percentage = percentage_of(net_profit, input.start_amount)?;

    ensure_finite_result(EvaluationResult {
        strategy: StrategyKind::Triangular,
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

    fn balanced_loop() -> TriangularInput {
        // USDT -> BTC -> ETH -> USDT with unit-consistent rates
        TriangularInput {
            start_amount: 1000.0,
            first_pair_rate: 1.0,
            second_pair_rate: 1.02,
            third_pair_rate: 1.0,
            exchange_fee_pct: 0.1,
            include_slippage: false,
            slippage_pct: 0.5,
        }
    }

    #[test]
    fn test_unit_consistent_loop() {
        let result = evaluate_triangular(&balanced_loop()).unwrap();

        assert_approx_eq!(result.gross_profit, 20.0);
        // 1.0 + 1.02 + 1.02 on legs 1..3
        assert_approx_eq!(result.total_fees, 3.04);
        assert_approx_eq!(result.net_profit, 16.96);
        assert_approx_eq!(result.profit_percentage, 1.696);
        assert_eq!(result.risk_tier, RiskTier::Low);
        assert_eq!(result.estimated_time_minutes, 1.0);
    }

    #[test]
    fn test_slippage_charged_on_gross_profit() {
        let input = TriangularInput {
            include_slippage: true,
            ..balanced_loop()
        };
        let result = evaluate_triangular(&input).unwrap();

        assert_approx_eq!(result.total_fees, 3.04 + 0.1);
    }

    #[test]
    fn test_losing_loop_slippage_offsets_fees() {
        let input = TriangularInput {
            second_pair_rate: 0.99,
            include_slippage: true,
            ..balanced_loop()
        };
        let result = evaluate_triangular(&input).unwrap();

        // -10 gross at 0.5% slippage credits 0.05 against 2.98 of leg fees
        assert_approx_eq!(result.gross_profit, -10.0);
        assert_approx_eq!(result.total_fees, 1.0 + 0.99 + 0.99 - 0.05);
        assert_eq!(result.risk_tier, RiskTier::High);
    }

    #[test]
    fn test_slippage_credit_capped_at_leg_fees() {
        let input = TriangularInput {
            second_pair_rate: 0.99,
            include_slippage: true,
            slippage_pct: 100.0,
            ..balanced_loop()
        };
        let result = evaluate_triangular(&input).unwrap();

        assert_eq!(result.total_fees, 0.0);
        assert_approx_eq!(result.net_profit, -10.0);
    }

    #[test]
    fn test_form_defaults_keep_notional_fee_bases() {
        let result = evaluate_triangular(&TriangularInput::default()).unwrap();

        let final_amount = 1000.0 * 0.03 * 28000.0 / 1.01;
        let gross = final_amount - 1000.0;
        let fees = 0.03 + 840.0 + 840.0 + gross * 0.005;

        assert_approx_eq!(result.gross_profit, gross, 1e-6);
        assert_approx_eq!(result.total_fees, fees, 1e-6);
        assert_approx_eq!(result.net_profit, gross - fees, 1e-6);
        assert_eq!(result.risk_tier, RiskTier::Low);
    }

    #[test]
    fn test_zero_third_rate_is_division_by_zero() {
        let input = TriangularInput {
            third_pair_rate: 0.0,
            ..balanced_loop()
        };
        let err = evaluate_triangular(&input).unwrap_err();

        assert!(err.is_division_by_zero());
        assert_eq!(err.field(), "thirdPairRate");
    }

    #[test]
    fn test_negative_rates_are_invalid() {
        let input = TriangularInput {
            first_pair_rate: -0.03,
            ..balanced_loop()
        };
        let err = evaluate_triangular(&input).unwrap_err();
        assert!(!err.is_division_by_zero());
        assert_eq!(err.field(), "firstPairRate");

        let input = TriangularInput {
            third_pair_rate: -1.0,
            ..balanced_loop()
        };
        assert_eq!(evaluate_triangular(&input).unwrap_err().field(), "thirdPairRate");
    }

    #[test]
    fn test_zero_start_amount_is_invalid() {
        let input = TriangularInput {
            start_amount: 0.0,
            ..balanced_loop()
        };
        assert_eq!(evaluate_triangular(&input).unwrap_err().field(), "startAmount");
    }
}
