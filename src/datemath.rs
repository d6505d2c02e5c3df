// 📅 Date Math - Computus and moveable-feast arithmetic
// Every moveable date of the year hangs off Easter or the first Sunday of Advent

use crate::error::OrdoError;
use chrono::{Datelike, Duration, NaiveDate};

/// First year the Gregorian computus is defined for.
pub const MIN_YEAR: i32 = 1583;

/// Last year the computus is supported for.
pub const MAX_YEAR: i32 = 4099;

// ============================================================================
// VALIDATION
// ============================================================================

/// Reject years outside `MIN_YEAR..=MAX_YEAR`
pub fn validate_year(year: i32) -> Result<(), OrdoError> {
    if (MIN_YEAR..=MAX_YEAR).contains(&year) {
        Ok(())
    } else {
        Err(OrdoError::YearOutOfRange {
            year,
            min: MIN_YEAR,
            max: MAX_YEAR,
        })
    }
}

// ============================================================================
// COMPUTUS
// ============================================================================

/// Easter Sunday of the given Gregorian year (anonymous Gregorian algorithm).
///
/// The result is always a Sunday between March 22 and April 25 inclusive.
pub fn compute_easter(year: i32) -> Result<NaiveDate, OrdoError> {
    validate_year(year)?;

    let a = year % 19;
    let b = year / 100;
    let c = year % 100;
    let d = b / 4;
    let e = b % 4;
    let f = (b + 8) / 25;
    let g = (b - f + 1) / 3;
    let h = (19 * a + b - d - g + 15) % 30;
    let i = c / 4;
    let k = c % 4;
    let l = (32 + 2 * e + 2 * i - h - k) % 7;
    let m = (a + 11 * h + 22 * l) / 451;
    let month = (h + l - 7 * m + 114) / 31;
    let day = (h + l - 7 * m + 114) % 31 + 1;

    // month is 3 or 4 and day is within 1..=31 for every validated year
    NaiveDate::from_ymd_opt(year, month as u32, day as u32).ok_or(OrdoError::YearOutOfRange {
        year,
        min: MIN_YEAR,
        max: MAX_YEAR,
    })
}

/// Date lying `offset_days` from Easter (negative offsets fall before it)
pub fn compute_moveable(offset_days: i64, easter: NaiveDate) -> NaiveDate {
    easter + Duration::days(offset_days)
}

// ============================================================================
// ADVENT AND SUNDAY HELPERS
// ============================================================================

/// First Sunday of Advent of a civil year: the Sunday from Nov 27 to Dec 3.
pub fn first_sunday_of_advent(year: i32) -> Result<NaiveDate, OrdoError> {
    let nov_27 = civil_date(year, 11, 27)?;
    Ok(next_sunday_on_or_after(nov_27))
}

/// Span of liturgical year `year`: first Sunday of Advent of `year - 1`
/// through the Saturday before the first Sunday of Advent of `year`.
pub fn liturgical_year_span(year: i32) -> Result<(NaiveDate, NaiveDate), OrdoError> {
    validate_year(year)?;
    let start = first_sunday_of_advent(year - 1)?;
    let end = first_sunday_of_advent(year)? - Duration::days(1);
    Ok((start, end))
}

/// Last Sunday of a month
pub fn last_sunday_of(year: i32, month: u32) -> Result<NaiveDate, OrdoError> {
    let first_of_next = if month == 12 {
        civil_date(year + 1, 1, 1)?
    } else {
        civil_date(year, month + 1, 1)?
    };
    let last = first_of_next - Duration::days(1);
    Ok(last - Duration::days(last.weekday().num_days_from_sunday() as i64))
}

/// The `n`-th Sunday of a month (1-based)
pub fn nth_sunday_of(year: i32, month: u32, n: u32) -> Result<NaiveDate, OrdoError> {
    let first = next_sunday_on_or_after(civil_date(year, month, 1)?);
    Ok(first + Duration::days(7 * (n.saturating_sub(1)) as i64))
}

/// The Sunday on or after `date`
pub fn next_sunday_on_or_after(date: NaiveDate) -> NaiveDate {
    let from_sunday = date.weekday().num_days_from_sunday() as i64;
    date + Duration::days((7 - from_sunday) % 7)
}

/// The Sunday on or before `date`
pub fn sunday_on_or_before(date: NaiveDate) -> NaiveDate {
    date - Duration::days(date.weekday().num_days_from_sunday() as i64)
}

/// Every date from `start` to `end`, inclusive
pub fn days(start: NaiveDate, end: NaiveDate) -> impl Iterator<Item = NaiveDate> {
    start.iter_days().take_while(move |d| *d <= end)
}

fn civil_date(year: i32, month: u32, day: u32) -> Result<NaiveDate, OrdoError> {
    NaiveDate::from_ymd_opt(year, month, day).ok_or(OrdoError::YearOutOfRange {
        year,
        min: MIN_YEAR,
        max: MAX_YEAR,
    })
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_easter_known_years() {
        assert_eq!(compute_easter(2024).unwrap(), ymd(2024, 3, 31));
        assert_eq!(compute_easter(2025).unwrap(), ymd(2025, 4, 20));
        assert_eq!(compute_easter(2019).unwrap(), ymd(2019, 4, 21));
        assert_eq!(compute_easter(2008).unwrap(), ymd(2008, 3, 23));
        assert_eq!(compute_easter(1818).unwrap(), ymd(1818, 3, 22));
        assert_eq!(compute_easter(1943).unwrap(), ymd(1943, 4, 25));
        assert_eq!(compute_easter(2000).unwrap(), ymd(2000, 4, 23));
    }

    #[test]
    fn test_easter_is_sunday_within_bounds() {
        for year in MIN_YEAR..=MAX_YEAR {
            let easter = compute_easter(year).unwrap();
            assert_eq!(easter.weekday(), Weekday::Sun, "year {}", year);
            assert!(easter >= ymd(year, 3, 22), "year {}", year);
            assert!(easter <= ymd(year, 4, 25), "year {}", year);
        }
    }

    #[test]
    fn test_easter_rejects_unsupported_years() {
        assert!(matches!(
            compute_easter(1582),
            Err(OrdoError::YearOutOfRange { year: 1582, .. })
        ));
        assert!(compute_easter(4100).is_err());
    }

    #[test]
    fn test_moveable_offsets_2024() {
        let easter = compute_easter(2024).unwrap();
        assert_eq!(compute_moveable(-46, easter), ymd(2024, 2, 14));
        assert_eq!(compute_moveable(49, easter), ymd(2024, 5, 19));
        assert_eq!(compute_moveable(39, easter), ymd(2024, 5, 9));
    }

    #[test]
    fn test_moveable_offset_law() {
        for year in [1600, 1962, 2024, 2038, 2500] {
            let easter = compute_easter(year).unwrap();
            let ash = compute_moveable(-46, easter);
            let pentecost = compute_moveable(49, easter);
            assert_eq!((easter - ash).num_days(), 46);
            assert_eq!((pentecost - easter).num_days(), 49);
            assert_eq!(ash.weekday(), Weekday::Wed);
            assert_eq!(pentecost.weekday(), Weekday::Sun);
        }
    }

    #[test]
    fn test_first_sunday_of_advent() {
        assert_eq!(first_sunday_of_advent(2023).unwrap(), ymd(2023, 12, 3));
        assert_eq!(first_sunday_of_advent(2024).unwrap(), ymd(2024, 12, 1));
        assert_eq!(first_sunday_of_advent(2022).unwrap(), ymd(2022, 11, 27));
    }

    #[test]
    fn test_liturgical_year_span() {
        let (start, end) = liturgical_year_span(2024).unwrap();
        assert_eq!(start, ymd(2023, 12, 3));
        assert_eq!(end, ymd(2024, 11, 30));
        assert_eq!(end.weekday(), Weekday::Sat);
    }

    #[test]
    fn test_sunday_helpers() {
        assert_eq!(last_sunday_of(2024, 10).unwrap(), ymd(2024, 10, 27));
        assert_eq!(last_sunday_of(2023, 12).unwrap(), ymd(2023, 12, 31));
        assert_eq!(nth_sunday_of(2024, 9, 3).unwrap(), ymd(2024, 9, 15));
        assert_eq!(sunday_on_or_before(ymd(2024, 3, 20)), ymd(2024, 3, 17));
        assert_eq!(next_sunday_on_or_after(ymd(2024, 3, 17)), ymd(2024, 3, 17));
    }

    #[test]
    fn test_days_is_inclusive() {
        let all: Vec<_> = days(ymd(2024, 2, 27), ymd(2024, 3, 1)).collect();
        assert_eq!(all.len(), 4);
        assert_eq!(all[2], ymd(2024, 2, 29));
    }
}
