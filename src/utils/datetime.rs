use std::fmt;
use std::str::FromStr;

use chrono::{NaiveTime, Timelike};

use crate::services::converter::ConversionError;

/// An hour-minute pair with no date component, as entered by the user.
///
/// Hour is always in 0..=23 and minute in 0..=59; construction goes
/// through [`WallClockTime::new`] or parsing so the invariant holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WallClockTime {
    hour: u32,
    minute: u32,
}

impl WallClockTime {
    /// Creates a wall-clock time, or `None` if the fields are out of range.
    pub fn new(hour: u32, minute: u32) -> Option<Self> {
        if hour < 24 && minute < 60 {
            Some(Self { hour, minute })
        } else {
            None
        }
    }

    pub fn hour(&self) -> u32 {
        self.hour
    }

    pub fn minute(&self) -> u32 {
        self.minute
    }

    /// The same time of day as a chrono `NaiveTime`.
    pub fn to_naive(self) -> NaiveTime {
        // Invariant: fields were range-checked at construction.
        NaiveTime::from_hms_opt(self.hour, self.minute, 0).unwrap_or_default()
    }
}

impl From<NaiveTime> for WallClockTime {
    fn from(t: NaiveTime) -> Self {
        Self {
            hour: t.hour(),
            minute: t.minute(),
        }
    }
}

impl FromStr for WallClockTime {
    type Err = ConversionError;

    /// Parses a 24-hour "HH:mm" string. Single-digit hours and minutes
    /// are accepted ("9:05", "9:5"), matching lenient user input.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parsed = NaiveTime::parse_from_str(s.trim(), "%H:%M")
            .map_err(|_| ConversionError::InvalidTime(s.to_string()))?;
        Ok(parsed.into())
    }
}

impl fmt::Display for WallClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_padded_and_unpadded_input() {
        let t: WallClockTime = "07:30".parse().unwrap();
        assert_eq!((t.hour(), t.minute()), (7, 30));

        let t: WallClockTime = "7:30".parse().unwrap();
        assert_eq!((t.hour(), t.minute()), (7, 30));
    }

    #[test]
    fn rejects_out_of_range_fields() {
        assert!("24:00".parse::<WallClockTime>().is_err());
        assert!("12:60".parse::<WallClockTime>().is_err());
        assert!(WallClockTime::new(24, 0).is_none());
        assert!(WallClockTime::new(0, 60).is_none());
    }

    #[test]
    fn formats_zero_padded() {
        let t: WallClockTime = "9:05".parse().unwrap();
        assert_eq!(t.to_string(), "09:05");
    }
}
