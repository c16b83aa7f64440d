use std::fs;
use std::path::Path;

use anyhow::{anyhow, Context, Result};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::utils::validation::validate_country_table;

/// A single country entry: display name plus IANA zone identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryZone {
    /// Name shown to the user, e.g. "USA"
    pub display_name: String,
    /// Canonical zone identifier, e.g. "America/New_York"
    pub zone_id: String,
}

impl CountryZone {
    pub fn new(display_name: impl Into<String>, zone_id: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
            zone_id: zone_id.into(),
        }
    }
}

/// Immutable mapping from country display names to time zones.
///
/// Built once at startup and injected into the converter. Lookups for
/// names not in the table fall back to GMT rather than failing; a
/// warning is logged so the gap is at least visible.
#[derive(Debug, Clone)]
pub struct CountryZoneMapping {
    entries: Vec<(String, Tz)>,
}

impl CountryZoneMapping {
    /// The built-in country table.
    pub fn builtin() -> Self {
        let entries = vec![
            ("USA".to_string(), Tz::America__New_York),
            ("Canada".to_string(), Tz::America__Toronto),
            ("Thailand".to_string(), Tz::Asia__Bangkok),
            ("Australia".to_string(), Tz::Australia__Sydney),
            ("UK".to_string(), Tz::Europe__London),
            ("Japan".to_string(), Tz::Asia__Tokyo),
        ];
        Self { entries }
    }

    /// Builds a mapping from explicit entries, validating names and zone ids.
    pub fn from_entries(entries: Vec<CountryZone>) -> Result<Self> {
        validate_country_table(&entries)?;

        let mut resolved = Vec::with_capacity(entries.len());
        for entry in entries {
            let tz: Tz = entry.zone_id.parse().map_err(|_| {
                anyhow!(
                    "'{}' is not a valid IANA timezone (country '{}')",
                    entry.zone_id,
                    entry.display_name
                )
            })?;
            resolved.push((entry.display_name, tz));
        }

        Ok(Self { entries: resolved })
    }

    /// Loads a country table from a JSON file: an array of
    /// `{"display_name": ..., "zone_id": ...}` objects.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path)
            .with_context(|| format!("Failed to read country table {}", path.display()))?;
        let entries: Vec<CountryZone> = serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse country table {}", path.display()))?;
        Self::from_entries(entries)
            .with_context(|| format!("Invalid country table {}", path.display()))
    }

    /// Resolves a country name to its time zone.
    ///
    /// Unknown names resolve to GMT. This mirrors the original lookup
    /// behavior; callers that want to surface unknown names should check
    /// [`Self::contains`] first.
    pub fn resolve(&self, country: &str) -> Tz {
        match self.lookup(country) {
            Some(tz) => tz,
            None => {
                warn!("Unknown country '{}', falling back to GMT", country);
                Tz::GMT
            }
        }
    }

    /// Whether the table has an entry for the given name.
    pub fn contains(&self, country: &str) -> bool {
        self.lookup(country).is_some()
    }

    /// Country display names, in table order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn lookup(&self, country: &str) -> Option<Tz> {
        let country = country.trim();
        self.entries
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(country))
            .map(|(_, tz)| *tz)
    }
}

impl Default for CountryZoneMapping {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_table_resolves_all_countries() {
        let mapping = CountryZoneMapping::builtin();
        assert_eq!(mapping.len(), 6);
        assert_eq!(mapping.resolve("USA"), Tz::America__New_York);
        assert_eq!(mapping.resolve("Japan"), Tz::Asia__Tokyo);
        assert_eq!(mapping.resolve("UK"), Tz::Europe__London);
    }

    #[test]
    fn unknown_country_falls_back_to_gmt() {
        let mapping = CountryZoneMapping::builtin();
        assert_eq!(mapping.resolve("Atlantis"), Tz::GMT);
        assert!(!mapping.contains("Atlantis"));
    }

    #[test]
    fn lookup_ignores_case_and_whitespace() {
        let mapping = CountryZoneMapping::builtin();
        assert_eq!(mapping.resolve(" usa "), Tz::America__New_York);
        assert!(mapping.contains("JAPAN"));
    }
}
