use timezone_converter::utils::validation::*;
use timezone_converter::CountryZone;

#[cfg(test)]
mod validation_tests {
    use super::*;

    // Time input validation tests
    #[test]
    fn test_valid_time_inputs() {
        let valid_times = vec!["00:00", "09:30", "9:30", "23:59", "  12:00  "];

        for time in valid_times {
            assert!(validate_time_input(time).is_ok(), "Should accept time: {}", time);
        }
    }

    #[test]
    fn test_invalid_time_inputs() {
        let invalid_times = vec![
            "",          // Empty
            "   ",       // Only whitespace
            "12",        // No colon
            ":30",       // Missing hour
            "12:",       // Missing minute
            "12.30",     // Wrong separator
            "ab:cd",     // Not digits
            "112:30",    // Too long
            "12:30pm",   // Trailing text
        ];

        for time in invalid_times {
            assert!(validate_time_input(time).is_err(), "Should reject time: {:?}", time);
        }
    }

    // Country name validation tests
    #[test]
    fn test_valid_country_names() {
        let valid_names = vec![
            "USA".to_string(),
            "United Kingdom".to_string(),
            "Côte d'Ivoire".to_string(),
            "A".repeat(50), // Exactly 50 characters
        ];

        for name in valid_names {
            assert!(validate_country_name(&name).is_ok(), "Should accept name: {}", name);
        }
    }

    #[test]
    fn test_invalid_country_names() {
        let invalid_names = vec![
            "".to_string(),      // Empty
            "   ".to_string(),   // Only whitespace
            "A".repeat(51),      // Too long
            "two\nlines".to_string(), // Line break
        ];

        for name in invalid_names {
            assert!(validate_country_name(&name).is_err(), "Should reject name: {:?}", name);
        }
    }

    // Country table validation tests
    #[test]
    fn test_valid_country_table() {
        let entries = vec![
            CountryZone::new("USA", "America/New_York"),
            CountryZone::new("Japan", "Asia/Tokyo"),
        ];

        assert!(validate_country_table(&entries).is_ok());
    }

    #[test]
    fn test_country_table_rejects_empty_zone_id() {
        let entries = vec![CountryZone::new("USA", "  ")];

        let error_msg = validate_country_table(&entries).unwrap_err().to_string();
        assert!(error_msg.contains("empty zone identifier"));
    }

    #[test]
    fn test_country_table_rejects_duplicates_case_insensitively() {
        let entries = vec![
            CountryZone::new("Japan", "Asia/Tokyo"),
            CountryZone::new(" JAPAN ", "Asia/Tokyo"),
        ];

        assert!(validate_country_table(&entries).is_err());
    }
}
