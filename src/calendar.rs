// 🗓️ Liturgical Calendar - Built years across a requested range
// Built once in parallel, read-only afterwards

use crate::config::RubricConfig;
use crate::datemath::validate_year;
use crate::error::OrdoError;
use crate::registry::FeastRegistry;
use crate::season::LiturgicalDate;
use crate::year::{AuditEvent, LiturgicalYear, LiturgicalYearBuilder, ResolvedDay};
use chrono::NaiveDate;
use rayon::prelude::*;
use std::collections::BTreeMap;
use tracing::info;

#[derive(Debug, Clone, PartialEq)]
pub struct LiturgicalCalendar {
    years: BTreeMap<i32, LiturgicalYear>,
}

impl LiturgicalCalendar {
    /// Build liturgical years `start..=end` with the 1962 registry and
    /// default rubric settings
    pub fn build(start: i32, end: i32) -> Result<Self, OrdoError> {
        Self::build_with(FeastRegistry::global(), &RubricConfig::default(), start, end)
    }

    /// Build with an explicit registry and rubric configuration.
    /// Fails as a whole if any single year fails.
    pub fn build_with(
        registry: &FeastRegistry,
        config: &RubricConfig,
        start: i32,
        end: i32,
    ) -> Result<Self, OrdoError> {
        validate_year(start)?;
        validate_year(end)?;
        if start > end {
            return Err(OrdoError::InvalidRange { start, end });
        }

        let builder = LiturgicalYearBuilder::new(registry, config);
        let built: Vec<LiturgicalYear> = (start..=end)
            .into_par_iter()
            .map(|year| builder.build(year))
            .collect::<Result<_, _>>()?;

        info!(start, end, years = built.len(), "calendar built");

        Ok(LiturgicalCalendar {
            years: built.into_iter().map(|y| (y.year, y)).collect(),
        })
    }

    /// Every resolved day in chronological order
    pub fn iter(&self) -> impl Iterator<Item = (&LiturgicalDate, &ResolvedDay)> {
        self.years
            .values()
            .flat_map(|y| y.days.iter())
            .map(|day| (&day.date, day))
    }

    pub fn years(&self) -> impl Iterator<Item = &LiturgicalYear> {
        self.years.values()
    }

    pub fn year(&self, year: i32) -> Option<&LiturgicalYear> {
        self.years.get(&year)
    }

    pub fn day(&self, date: NaiveDate) -> Option<&ResolvedDay> {
        self.years.values().find_map(|y| y.day(date))
    }

    /// Audit events of every year, chronologically
    pub fn audit(&self) -> impl Iterator<Item = &AuditEvent> {
        self.years.values().flat_map(|y| y.audit.iter())
    }

    pub fn len(&self) -> usize {
        self.years.values().map(|y| y.days.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Build the calendar for liturgical years `start..=end`
pub fn build_calendar(start: i32, end: i32) -> Result<LiturgicalCalendar, OrdoError> {
    LiturgicalCalendar::build(start, end)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::datemath::{MAX_YEAR, MIN_YEAR};
    use crate::observance::{DateRule, Observance};
    use crate::rank::Class;

    #[test]
    fn test_reversed_range_is_rejected() {
        assert_eq!(
            LiturgicalCalendar::build(2024, 2023),
            Err(OrdoError::InvalidRange {
                start: 2024,
                end: 2023
            })
        );
    }

    #[test]
    fn test_out_of_range_years_are_rejected() {
        assert!(matches!(
            build_calendar(MIN_YEAR - 1, 2000),
            Err(OrdoError::YearOutOfRange { year, .. }) if year == MIN_YEAR - 1
        ));
        assert!(matches!(
            build_calendar(2000, MAX_YEAR + 1),
            Err(OrdoError::YearOutOfRange { .. })
        ));
    }

    #[test]
    fn test_iteration_is_chronological_and_contiguous() {
        let calendar = build_calendar(2023, 2025).unwrap();
        let dates: Vec<NaiveDate> = calendar.iter().map(|(d, _)| d.date).collect();
        assert_eq!(dates.len(), calendar.len());
        for pair in dates.windows(2) {
            assert_eq!((pair[1] - pair[0]).num_days(), 1);
        }

        let years: Vec<i32> = calendar.years().map(|y| y.year).collect();
        assert_eq!(years, vec![2023, 2024, 2025]);
    }

    #[test]
    fn test_iteration_is_restartable() {
        let calendar = build_calendar(2024, 2024).unwrap();
        let first: Vec<_> = calendar.iter().map(|(_, d)| d.celebrated.id.clone()).collect();
        let second: Vec<_> = calendar.iter().map(|(_, d)| d.celebrated.id.clone()).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_day_lookup_spans_years() {
        let calendar = build_calendar(2024, 2025).unwrap();
        let easter = calendar.day(NaiveDate::from_ymd_opt(2025, 4, 20).unwrap()).unwrap();
        assert_eq!(easter.celebrated.id, "tempora/easter");
        assert_eq!(easter.date.year, 2025);

        let advent = calendar.day(NaiveDate::from_ymd_opt(2023, 12, 3).unwrap()).unwrap();
        assert_eq!(advent.date.year, 2024);
        assert!(calendar.day(NaiveDate::from_ymd_opt(2030, 1, 1).unwrap()).is_none());
    }

    #[test]
    fn test_strict_ties_abort_the_build() {
        // two III class feasts with the same row on the same date
        let mut registry = FeastRegistry::empty();
        registry.register(Observance::feast("first", "First", Class::III, DateRule::fixed(6, 5)));
        registry.register(Observance::feast("second", "Second", Class::III, DateRule::fixed(6, 5)));

        let lenient = LiturgicalCalendar::build_with(&registry, &RubricConfig::default(), 2019, 2019).unwrap();
        assert!(lenient.audit().any(|e| matches!(e, AuditEvent::Tie { chosen, .. } if chosen == "first")));

        let strict = RubricConfig {
            strict_ties: true,
            ..RubricConfig::default()
        };
        let result = LiturgicalCalendar::build_with(&registry, &strict, 2019, 2019);
        assert!(matches!(
            result,
            Err(OrdoError::ResolutionTie { chosen, rejected, .. }) if chosen == "First" && rejected == "Second"
        ));
    }

    #[test]
    fn test_holy_family_outranks_the_baptism_without_a_tie() {
        // 2019: Jan 13 is a Sunday
        let strict = RubricConfig {
            strict_ties: true,
            ..RubricConfig::default()
        };
        let calendar = LiturgicalCalendar::build(2019, 2019).unwrap();
        let jan13 = NaiveDate::from_ymd_opt(2019, 1, 13).unwrap();

        let day = calendar.day(jan13).unwrap();
        assert_eq!(day.celebrated.id, "tempora/holy-family");
        assert!(day.commemorations.is_empty());
        assert!(!calendar.audit().any(|e| matches!(e, AuditEvent::Tie { date, .. } if *date == jan13)));

        let registry = FeastRegistry::global();
        let mut january = FeastRegistry::empty();
        for id in ["tempora/holy-family", "sancti/01-13-commemoration-of-the-baptism-of-our-lord"] {
            january.register(registry.get(id).unwrap().clone());
        }
        assert!(LiturgicalCalendar::build_with(&january, &strict, 2019, 2019).is_ok());
    }
}
