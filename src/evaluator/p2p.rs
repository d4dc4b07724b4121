use super::validation::{ensure_finite, ensure_finite_result, ensure_non_negative, ensure_percentage, ensure_positive, percentage_of};
use super::{EvaluationError, EvaluationResult, RiskAnalyzer};
use crate::strategy::{P2pInput, StrategyKind};

/// Classifies on profit percentage.
pub const RISK: RiskAnalyzer = RiskAnalyzer::new(3.0, 1.0);

fn validate(input: &P2pInput) -> Result<(), EvaluationError> {
    ensure_positive("buyRate", input.buy_rate)?;
    ensure_finite("sellRate", input.sell_rate)?;
    ensure_positive("amount", input.amount)?;
    ensure_percentage("paymentProcessingFeePct", input.payment_processing_fee_pct)?;
    ensure_non_negative("withdrawalFeeFlat", input.withdrawal_fee_flat)?;
    ensure_non_negative(
        "estimatedTimeToCompleteMinutes",
        input.estimated_time_to_complete_minutes,
    )
}

pub fn evaluate_p2p(input: &P2pInput) -> Result<EvaluationResult, EvaluationError> {
    validate(input)?;

    let buy_total = input.amount * input.buy_rate;
    let sell_total = input.amount * input.sell_rate;
    let gross_profit = sell_total - buy_total;

    let payment_fee = buy_total * input.payment_processing_fee_pct / 100.0;
    let total_fees = payment_fee + input.withdrawal_fee_flat;

    let net_profit = gross_profit - total_fees;
    let profit_percentage = percentage_of(net_profit, buy_total)?;

    ensure_finite_result(EvaluationResult {
        strategy: StrategyKind::P2p,
        gross_profit,
        total_fees,
        net_profit,
        profit_percentage,
        estimated_time_minutes: input.estimated_time_to_complete_minutes,
        risk_tier: RISK.analyze_risk(profit_percentage),
        risk_metric: profit_percentage,
        annualized_return: None,
    })
}
