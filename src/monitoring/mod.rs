pub mod logger;
pub mod report;

pub use logger::{EvaluationLogger, EvaluationRecord};
pub use report::{format_currency, format_duration, render_summary};
