/// Wall-clock time parsing and formatting
pub mod datetime;
/// Consistent-format logging helpers
pub mod logging;
/// Input validation for CLI arguments and country tables
pub mod validation;
