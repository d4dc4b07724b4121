use super::validation::{ensure_finite_result, ensure_non_negative, ensure_percentage, ensure_positive, percentage_of};
use super::{EvaluationError, EvaluationResult, RiskAnalyzer};
use crate::strategy::{FuturesInput, StrategyKind};

pub const MINUTES_PER_DAY: f64 = 1440.0;
pub const DAYS_PER_YEAR: f64 = 365.0;

/// Classifies on annualized return, not on the raw profit percentage.
pub const RISK: RiskAnalyzer = RiskAnalyzer::new(15.0, 5.0);

fn validate(input: &FuturesInput) -> Result<(), EvaluationError> {
    ensure_positive("spotPrice", input.spot_price)?;
    ensure_non_negative("futuresPrice", input.futures_price)?;
    ensure_positive("amount", input.amount)?;
    if input.days_to_expiration == 0 {
        return Err(EvaluationError::invalid(
            "daysToExpiration",
            "must be at least one day",
        ));
    }
    ensure_percentage("fundingRatePctPerDay", input.funding_rate_pct_per_day)?;
    ensure_percentage("spotExchangeFeePct", input.spot_exchange_fee_pct)?;
    ensure_percentage("futuresExchangeFeePct", input.futures_exchange_fee_pct)
}

pub fn evaluate_futures(input: &FuturesInput) -> Result<EvaluationResult, EvaluationError> {
    validate(input)?;

    let days = f64::from(input.days_to_expiration);
    let spot_notional = input.spot_price * input.amount;

    let gross_profit = (input.futures_price - input.spot_price) * input.amount;

    let spot_fee = spot_notional * input.spot_exchange_fee_pct / 100.0;
    let futures_fee = input.futures_price * input.amount * input.futures_exchange_fee_pct / 100.0;
    let funding_cost = spot_notional * input.funding_rate_pct_per_day * days / 100.0;
    let total_fees = spot_fee + futures_fee + funding_cost;

    let net_profit = gross_profit - total_fees;
    let profit_percentage = percentage_of(net_profit, spot_notional)?;
    let annualized_return = profit_percentage * DAYS_PER_YEAR / days;

    ensure_finite_result(EvaluationResult {
        strategy: StrategyKind::Futures,
        gross_profit,
        total_fees,
        net_profit,
        profit_percentage,
        estimated_time_minutes: days * MINUTES_PER_DAY,
        risk_tier: RISK.analyze_risk(annualized_return),
        risk_metric: annualized_return,
        annualized_return: Some(annualized_return),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluator::RiskTier;
    use assert_approx_eq::assert_approx_eq;

    #[test]
    fn test_default_form_values() {
        let result = evaluate_futures(&FuturesInput::default()).unwrap();

        assert_approx_eq!(result.gross_profit, 400.0);
        // 26.5 spot + 13.45 futures + 79.5 funding
        assert_approx_eq!(result.total_fees, 119.45);
        assert_approx_eq!(result.net_profit, 280.55);
        assert_approx_eq!(result.profit_percentage, 280.55 / 26500.0 * 100.0);
        assert_approx_eq!(result.annualized_return.unwrap(), 280.55 / 26500.0 * 100.0 * 365.0 / 30.0);
        assert_eq!(result.estimated_time_minutes, 30.0 * 1440.0);
        assert_eq!(result.risk_tier, RiskTier::Medium);
    }

    #[test]
    fn test_risk_follows_annualized_return() {
        // 0.5% over 7 days annualizes to ~26%, which is low risk even
        // though the raw percentage alone would not be.
        let input = FuturesInput {
            futures_price: 100.5,
            spot_price: 100.0,
            amount: 1.0,
            days_to_expiration: 7,
            funding_rate_pct_per_day: 0.0,
            spot_exchange_fee_pct: 0.0,
            futures_exchange_fee_pct: 0.0,
        };
        let result = evaluate_futures(&input).unwrap();

        assert_approx_eq!(result.profit_percentage, 0.5);
        assert_approx_eq!(result.risk_metric, 0.5 * 365.0 / 7.0);
        assert_eq!(result.risk_tier, RiskTier::Low);
    }

    #[test]
    fn test_funding_accrues_per_day() {
        let short = evaluate_futures(&FuturesInput {
            days_to_expiration: 10,
            ..FuturesInput::default()
        })
        .unwrap();
        let long = evaluate_futures(&FuturesInput {
            days_to_expiration: 20,
            ..FuturesInput::default()
        })
        .unwrap();

        // 26.5 extra funding for 10 more days at 0.01%/day
        assert_approx_eq!(long.total_fees - short.total_fees, 26.5);
    }

    #[test]
    fn test_zero_days_is_invalid() {
        let input = FuturesInput {
            days_to_expiration: 0,
            ..FuturesInput::default()
        };
        let err = evaluate_futures(&input).unwrap_err();

        assert_eq!(err.field(), "daysToExpiration");
        assert!(!err.is_division_by_zero());
    }

    #[test]
    fn test_non_positive_spot_and_amount_are_invalid() {
        let input = FuturesInput {
            spot_price: 0.0,
            ..FuturesInput::default()
        };
        assert_eq!(evaluate_futures(&input).unwrap_err().field(), "spotPrice");

        let input = FuturesInput {
            amount: -1.0,
            ..FuturesInput::default()
        };
        assert_eq!(evaluate_futures(&input).unwrap_err().field(), "amount");
    }

    #[test]
    fn test_negative_futures_price_is_invalid() {
        let input = FuturesInput {
            futures_price: -100000.0,
            funding_rate_pct_per_day: 0.0,
            ..FuturesInput::default()
        };
        let err = evaluate_futures(&input).unwrap_err();

        assert_eq!(err.field(), "futuresPrice");
        assert!(!err.is_division_by_zero());
    }
}
