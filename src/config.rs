use anyhow::{anyhow, Result};
use std::env;

use crate::services::converter::OffsetReference;

/// Application configuration, loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Optional path to a JSON country table overriding the built-in one
    pub country_table_path: Option<String>,
    /// Which instant zone offsets are looked up at
    pub offset_reference: OffsetReference,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let country_table_path = env::var("COUNTRY_TABLE_PATH")
            .ok()
            .map(|p| p.trim().to_string())
            .filter(|p| !p.is_empty());

        let offset_str = env::var("OFFSET_REFERENCE").unwrap_or_else(|_| "now".to_string());
        let offset_reference = match offset_str.trim().to_ascii_lowercase().as_str() {
            "" | "now" => OffsetReference::CurrentInstant,
            "input-time" => OffsetReference::InputTime,
            other => {
                return Err(anyhow!(
                    "Invalid OFFSET_REFERENCE '{}': expected 'now' or 'input-time'",
                    other
                ))
            }
        };

        Ok(Config {
            country_table_path,
            offset_reference,
        })
    }
}
