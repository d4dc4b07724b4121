use crate::evaluator::EvaluationResult;

const MINUTES_PER_HOUR: f64 = 60.0;
const MINUTES_PER_DAY: f64 = 1440.0;

/// Human-readable time required, switching to hours and days for long holds.
pub fn format_duration(minutes: f64) -> String {
    if minutes >= MINUTES_PER_DAY {
        format!("{:.1} days", minutes / MINUTES_PER_DAY)
    } else if minutes >= MINUTES_PER_HOUR {
        format!("{:.1} hours", minutes / MINUTES_PER_HOUR)
    } else {
        format!("{} min", minutes)
    }
}

pub fn format_currency(amount: f64) -> String {
    if amount < 0.0 {
        format!("-${:.2}", -amount)
    } else {
        format!("${:.2}", amount)
    }
}

pub fn render_summary(result: &EvaluationResult) -> String {
    let mut lines = vec![
        format!("Strategy:          {}", result.strategy),
        format!("Gross Profit:      {}", format_currency(result.gross_profit)),
        format!("Net Profit:        {}", format_currency(result.net_profit)),
        format!("Profit Percentage: {:.2}%", result.profit_percentage),
        format!("Total Fees:        {}", format_currency(result.total_fees)),
        format!("Time Required:     {}", format_duration(result.estimated_time_minutes)),
    ];
    if let Some(annualized) = result.annualized_return {
        lines.push(format!("Annualized Return: {:.2}%", annualized));
    }
    lines.push(format!("Risk Level:        {}", result.risk_tier));

    lines.join("\n")
}
