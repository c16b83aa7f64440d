use tracing::{error, info, warn};

/// Logs the start of a conversion with consistent format
pub fn log_conversion_start(time: &str, from_country: &str, to_country: &str) {
    info!(
        "CONVERT_START: {} from {} to {}",
        time, from_country, to_country
    );
}

/// Logs a successful conversion with consistent format
pub fn log_conversion_success(time: &str, from_country: &str, to_country: &str, result: &str) {
    info!(
        "CONVERT_SUCCESS: {} from {} to {} -> {}",
        time, from_country, to_country, result
    );
}

/// Logs a failed conversion with consistent format
pub fn log_conversion_error(time: &str, from_country: &str, to_country: &str, error: &str) {
    error!(
        "CONVERT_ERROR: {} from {} to {} - {}",
        time, from_country, to_country, error
    );
}

/// Logs validation errors with consistent format
pub fn log_validation_error(field: &str, value: &str, error: &str) {
    warn!(
        "VALIDATION_ERROR: {} field '{}' invalid: {}",
        field, value, error
    );
}

/// Logs system events with consistent format
pub fn log_system_event(event: &str, details: Option<&str>) {
    match details {
        Some(d) => info!("SYSTEM: {} - {}", event, d),
        None => info!("SYSTEM: {}", event),
    }
}
