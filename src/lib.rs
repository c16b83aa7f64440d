//! # Timezone Converter
//!
//! A small library and CLI for converting wall-clock times between the
//! time zones of a configurable set of countries.
//!
//! ## Features
//! - Convert an "HH:mm" time between any two supported countries
//! - DST-aware offsets via the IANA time-zone database
//! - Country table replaceable from a JSON file for localization
//! - Configurable offset-reference policy ("now" vs. input time)
//! - Unknown country names fall back to GMT instead of failing

/// Configuration management and environment variables
pub mod config;
/// The country-to-time-zone mapping table
pub mod countries;
/// Conversion services
pub mod services;
/// Utility functions for time parsing, validation, and logging
pub mod utils;

pub use countries::{CountryZone, CountryZoneMapping};
pub use services::converter::{ConversionError, OffsetReference, TimeZoneConverter};
pub use utils::datetime::WallClockTime;
