//! Field checks shared by the evaluators. Field names are the camelCase names
//! the input types serialize with, so callers can map errors onto form fields.

use super::{EvaluationError, EvaluationResult};

pub fn ensure_finite(field: &'static str, value: f64) -> Result<(), EvaluationError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(EvaluationError::invalid(field, format!("must be a finite number, got {}", value)))
    }
}

pub fn ensure_positive(field: &'static str, value: f64) -> Result<(), EvaluationError> {
    ensure_finite(field, value)?;
    if value > 0.0 {
        Ok(())
    } else {
        Err(EvaluationError::invalid(field, format!("must be greater than zero, got {}", value)))
    }
}

pub fn ensure_non_negative(field: &'static str, value: f64) -> Result<(), EvaluationError> {
    ensure_finite(field, value)?;
    if value >= 0.0 {
        Ok(())
    } else {
        Err(EvaluationError::invalid(field, format!("must not be negative, got {}", value)))
    }
}

pub fn ensure_percentage(field: &'static str, value: f64) -> Result<(), EvaluationError> {
    ensure_finite(field, value)?;
    if (0.0..=100.0).contains(&value) {
        Ok(())
    } else {
        Err(EvaluationError::invalid(field, format!("must be between 0 and 100 percent, got {}", value)))
    }
}

/// `net / base * 100`, rejecting a base that collapsed to zero.
pub fn percentage_of(net: f64, base_capital: f64) -> Result<f64, EvaluationError> {
    if base_capital == 0.0 {
        return Err(EvaluationError::DivisionByZero { field: "baseCapital" });
    }
    Ok(net / base_capital * 100.0)
}

/// Rejects results that overflowed to infinity or NaN.
pub fn ensure_finite_result(result: EvaluationResult) -> Result<EvaluationResult, EvaluationError> {
    let values = [
        result.gross_profit,
        result.total_fees,
        result.net_profit,
        result.profit_percentage,
        result.estimated_time_minutes,
        result.risk_metric,
    ];
    let annualized_ok = result.annualized_return.map_or(true, f64::is_finite);

    if values.iter().all(|v| v.is_finite()) && annualized_ok {
        Ok(result)
    } else {
        Err(EvaluationError::invalid("result", "inputs are too large to evaluate"))
    }
}
