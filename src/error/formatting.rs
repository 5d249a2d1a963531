//! Error formatting utilities
//!
//! Renders errors together with their cause chain for terminal output and
//! structured log fields.

use crate::Error;
use std::error::Error as StdError;

/// Format error for display, appending nested causes
pub fn format_error(error: &Error) -> String {
    let mut result = error.to_string();
    let mut source = error.source();

    while let Some(cause) = source {
        let cause_str = cause.to_string();
        if !result.contains(&cause_str) {
            result = format!("{} (caused by {})", result, cause_str);
        }
        source = cause.source();
    }

    result
}

/// Format error for logging with structured data
pub fn format_error_for_logging(error: &Error) -> serde_json::Value {
    let mut log_data = serde_json::json!({
        "message": format_error(error),
        "category": error.category(),
        "retryable": error.is_retryable(),
    });

    match error {
        Error::Timeout { duration_secs, .. } => {
            log_data["timeout_duration"] = serde_json::Value::Number((*duration_secs).into());
        }
        Error::Browser { step, .. } => {
            log_data["browser_step"] = serde_json::Value::String(step.clone());
        }
        _ => {}
    }

    log_data
}
