use anyhow::{anyhow, Result};

use crate::countries::CountryZone;

/// Pre-flight check on a user-entered time string before conversion.
///
/// Only shape is checked here; range validation (hour 0-23, minute 0-59)
/// happens when the string is parsed into a wall-clock time.
pub fn validate_time_input(time: &str) -> Result<()> {
    let time = time.trim();

    if time.is_empty() {
        return Err(anyhow!("Time cannot be empty"));
    }

    if time.len() > 5 {
        return Err(anyhow!("Time must be in HH:mm format"));
    }

    let mut parts = time.splitn(2, ':');
    let hour = parts.next().unwrap_or_default();
    let minute = parts.next().unwrap_or_default();

    if hour.is_empty() || minute.is_empty() {
        return Err(anyhow!("Time must be in HH:mm format"));
    }

    if !hour.chars().all(|c| c.is_ascii_digit()) || !minute.chars().all(|c| c.is_ascii_digit()) {
        return Err(anyhow!("Time must contain only digits and a colon"));
    }

    Ok(())
}

pub fn validate_country_name(country: &str) -> Result<()> {
    let country = country.trim();

    if country.is_empty() {
        return Err(anyhow!("Country name cannot be empty"));
    }

    if country.len() > 50 {
        return Err(anyhow!("Country name cannot be longer than 50 characters"));
    }

    if country.contains('\n') || country.contains('\r') {
        return Err(anyhow!("Country name cannot contain line breaks"));
    }

    Ok(())
}

/// Validates a country table before it is turned into a mapping.
pub fn validate_country_table(entries: &[CountryZone]) -> Result<()> {
    if entries.is_empty() {
        return Err(anyhow!("Country table cannot be empty"));
    }

    for entry in entries {
        validate_country_name(&entry.display_name)?;

        if entry.zone_id.trim().is_empty() {
            return Err(anyhow!(
                "Country '{}' has an empty zone identifier",
                entry.display_name
            ));
        }
    }

    // Duplicate display names would make lookups ambiguous
    for (i, entry) in entries.iter().enumerate() {
        let name = entry.display_name.trim();
        if entries[i + 1..]
            .iter()
            .any(|other| other.display_name.trim().eq_ignore_ascii_case(name))
        {
            return Err(anyhow!("Duplicate country name '{}'", name));
        }
    }

    Ok(())
}
