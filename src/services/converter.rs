use chrono::{DateTime, Duration, Offset, TimeZone, Utc};
use thiserror::Error;
use tracing::debug;

use crate::countries::CountryZoneMapping;
use crate::utils::datetime::WallClockTime;

/// Errors produced by [`TimeZoneConverter::convert`].
#[derive(Debug, Error)]
pub enum ConversionError {
    /// The input time string did not parse as 24-hour "HH:mm".
    #[error("invalid time '{0}': expected HH:mm")]
    InvalidTime(String),
}

/// Which instant the zone offsets are looked up at.
///
/// The original behavior resolves offsets at the moment of conversion,
/// which can be wrong near a DST transition relative to the entered
/// time. Whether that is intentional is an open question, so both
/// behaviors are kept selectable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OffsetReference {
    /// Offsets at the current instant (the original behavior).
    #[default]
    CurrentInstant,
    /// Offsets at today's date combined with the entered time of day,
    /// interpreted as UTC.
    InputTime,
}

/// Converts wall-clock times between the zones of two named countries.
///
/// Pure apart from reading the ambient clock; each call is independent
/// and reentrant, so a single instance can be shared freely.
#[derive(Debug, Clone)]
pub struct TimeZoneConverter {
    mapping: CountryZoneMapping,
    offset_reference: OffsetReference,
}

impl TimeZoneConverter {
    /// Creates a converter over the given country table with the default
    /// offset policy.
    pub fn new(mapping: CountryZoneMapping) -> Self {
        Self {
            mapping,
            offset_reference: OffsetReference::default(),
        }
    }

    pub fn with_offset_reference(mut self, offset_reference: OffsetReference) -> Self {
        self.offset_reference = offset_reference;
        self
    }

    /// The country table this converter resolves names against.
    pub fn mapping(&self) -> &CountryZoneMapping {
        &self.mapping
    }

    /// Converts `time` ("HH:mm", 24-hour) from `from_country`'s zone to
    /// `to_country`'s zone.
    ///
    /// Country names not in the table silently resolve to GMT. The result
    /// wraps modulo 24 hours with no day-rollover indication: converting
    /// "23:30" forward by five hours yields "04:30".
    pub fn convert(
        &self,
        time: &str,
        from_country: &str,
        to_country: &str,
    ) -> Result<WallClockTime, ConversionError> {
        let parsed: WallClockTime = time.parse()?;
        let reference = match self.offset_reference {
            OffsetReference::CurrentInstant => Utc::now(),
            OffsetReference::InputTime => Utc::now()
                .date_naive()
                .and_time(parsed.to_naive())
                .and_utc(),
        };
        Ok(self.convert_parsed(parsed, from_country, to_country, reference))
    }

    /// Like [`Self::convert`], but with the offset-lookup instant supplied
    /// by the caller instead of taken from the ambient clock.
    pub fn convert_at(
        &self,
        time: &str,
        from_country: &str,
        to_country: &str,
        reference: DateTime<Utc>,
    ) -> Result<WallClockTime, ConversionError> {
        let parsed: WallClockTime = time.parse()?;
        Ok(self.convert_parsed(parsed, from_country, to_country, reference))
    }

    fn convert_parsed(
        &self,
        time: WallClockTime,
        from_country: &str,
        to_country: &str,
        reference: DateTime<Utc>,
    ) -> WallClockTime {
        let from_zone = self.mapping.resolve(from_country);
        let to_zone = self.mapping.resolve(to_country);

        let from_offset = zone_offset_seconds(from_zone, reference);
        let to_offset = zone_offset_seconds(to_zone, reference);
        let delta = to_offset - from_offset;

        debug!(
            "Converting {} from {} ({}, UTC{:+}s) to {} ({}, UTC{:+}s)",
            time, from_country, from_zone, from_offset, to_country, to_zone, to_offset
        );

        // Pin the time to the reference date; only the time-of-day part of
        // the shifted result is kept, so day rollover is silent.
        let pinned = reference.date_naive().and_time(time.to_naive());
        let shifted = pinned + Duration::seconds(delta);
        shifted.time().into()
    }
}

impl Default for TimeZoneConverter {
    fn default() -> Self {
        Self::new(CountryZoneMapping::builtin())
    }
}

/// A zone's UTC offset in seconds at the given instant, DST included.
fn zone_offset_seconds(zone: chrono_tz::Tz, instant: DateTime<Utc>) -> i64 {
    let offset = zone.offset_from_utc_datetime(&instant.naive_utc());
    i64::from(offset.fix().local_minus_utc())
}
