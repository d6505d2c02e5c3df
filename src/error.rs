// ⚠️ Error Types - Typed failures of the calendar engine
// Input errors are rejected up front, rule gaps abort a year, ties are audited

use chrono::NaiveDate;

/// Error type for every fallible operation of the calendar core.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OrdoError {
    /// A requested year lies outside the range the computus supports.
    #[error("year {year} is outside the supported range {min}..={max}")]
    YearOutOfRange { year: i32, min: i32, max: i32 },

    /// The end of a requested range precedes its start.
    #[error("invalid year range: end year {end} precedes start year {start}")]
    InvalidRange { start: i32, end: i32 },

    /// The registry produced no candidate at all for a date.
    #[error("rules gap: no observance candidate for {date}")]
    RulesGap { date: NaiveDate },

    /// Two candidates could not be ordered by the table of precedence.
    #[error("resolution tie on {date}: {chosen} chosen over {rejected} by definition order")]
    ResolutionTie {
        date: NaiveDate,
        chosen: String,
        rejected: String,
    },
}

impl OrdoError {
    /// True for the kinds that reject caller input before any computation.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            OrdoError::YearOutOfRange { .. } | OrdoError::InvalidRange { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_range_message() {
        let err = OrdoError::InvalidRange {
            start: 2024,
            end: 2023,
        };
        assert_eq!(
            err.to_string(),
            "invalid year range: end year 2023 precedes start year 2024"
        );
        assert!(err.is_input_error());
    }

    #[test]
    fn test_rules_gap_is_not_input_error() {
        let err = OrdoError::RulesGap {
            date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        };
        assert_eq!(err.to_string(), "rules gap: no observance candidate for 2024-01-01");
        assert!(!err.is_input_error());
    }

    #[test]
    fn test_error_is_send_and_sync() {
        fn assert_impl<T: std::error::Error + Send + Sync>() {}
        assert_impl::<OrdoError>();
    }
}
