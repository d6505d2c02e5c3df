// Integration tests: whole calendars through the public API

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use ordo::{
    build_calendar, compute_easter, compute_moveable, AuditEvent, Class, ExportConfig,
    FeastRegistry, IcsExporter, LiturgicalCalendar, OrdoError, PropersIndex, Rank, MAX_YEAR,
    MIN_YEAR,
};

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn test_easter_bounds_for_every_supported_year() {
    for year in MIN_YEAR..=MAX_YEAR {
        let easter = compute_easter(year).unwrap();
        assert_eq!(easter.weekday(), Weekday::Sun, "{}", year);
        assert!(easter >= ymd(year, 3, 22) && easter <= ymd(year, 4, 25), "{}", year);
        assert_eq!(compute_moveable(-46, easter).weekday(), Weekday::Wed);
        assert_eq!(compute_moveable(49, easter) - easter, Duration::days(49));
    }
}

#[test]
fn test_known_dates_2024() {
    let calendar = build_calendar(2024, 2024).unwrap();
    let celebrated = |d: NaiveDate| calendar.day(d).unwrap().celebrated.name.clone();

    assert_eq!(celebrated(ymd(2024, 3, 31)), "Easter Sunday");
    assert_eq!(celebrated(ymd(2024, 2, 14)), "Ash Wednesday");
    assert_eq!(celebrated(ymd(2024, 5, 19)), "Pentecost Sunday");
    assert_eq!(celebrated(ymd(2024, 5, 9)), "Ascension of Our Lord");
    assert_eq!(celebrated(ymd(2024, 10, 27)), "Our Lord Jesus Christ the King");
    assert_eq!(celebrated(ymd(2023, 12, 3)), "First Sunday of Advent");
}

#[test]
fn test_every_date_has_exactly_one_celebration() {
    let calendar = build_calendar(2020, 2026).unwrap();
    let mut previous: Option<NaiveDate> = None;

    for (date, day) in calendar.iter() {
        assert_eq!(date, &day.date);
        if let Some(prev) = previous {
            assert_eq!(date.date - prev, Duration::days(1), "gap before {}", date.date);
        }
        previous = Some(date.date);
        assert!(day.commemorations.iter().all(|c| c.id != day.celebrated.id));
    }
}

#[test]
fn test_commemorations_never_outrank_the_celebration() {
    let calendar = build_calendar(2020, 2030).unwrap();
    for (date, day) in calendar.iter() {
        for c in &day.commemorations {
            assert!(
                c.class() <= day.celebrated.class(),
                "{} outranks {} on {}",
                c.name,
                day.celebrated.name,
                date.date
            );
        }
    }

    // I class feasts move rather than disappear
    let registry = FeastRegistry::global();
    for event in calendar.audit() {
        if let AuditEvent::Omitted { observance, date } = event {
            if let Some(o) = registry.get(observance) {
                assert_ne!(o.rank, Rank::Feast(Class::I), "{} omitted on {}", o.name, date);
            }
        }
    }
}

#[test]
fn test_building_twice_is_identical() {
    let a = build_calendar(2024, 2026).unwrap();
    let b = build_calendar(2024, 2026).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_reversed_range_fails() {
    assert_eq!(
        build_calendar(2024, 2023),
        Err(OrdoError::InvalidRange {
            start: 2024,
            end: 2023
        })
    );
}

#[test]
fn test_boundary_years_build() {
    assert!(LiturgicalCalendar::build(MIN_YEAR, MIN_YEAR).is_ok());
    assert!(LiturgicalCalendar::build(MAX_YEAR, MAX_YEAR).is_ok());
}

#[test]
fn test_transfers_are_placed_later_and_marked() {
    let calendar = build_calendar(2020, 2030).unwrap();
    let mut placed = 0;

    for (date, day) in calendar.iter() {
        if let Some(t) = &day.transferred_in {
            assert!(t.origin < date.date);
            assert_eq!(day.celebrated.id, t.observance.id);
            placed += 1;
        }
    }
    let audited = calendar
        .audit()
        .filter(|e| matches!(e, AuditEvent::Transferred { .. }))
        .count();
    assert_eq!(placed, audited);
    assert!(placed > 0);
}

#[test]
fn test_export_with_propers_index() {
    let calendar = build_calendar(2024, 2025).unwrap();
    let index = PropersIndex::from_json(
        r#"{
            "Easter Sunday": { "url": "https://uvoc.org/easter" },
            "Saint Joseph, Spouse of the Blessed Virgin Mary": { "url": "https://uvoc.org/joseph" },
            "Saint Praxedes, Virgin": {}
        }"#,
    )
    .unwrap();

    let config = ExportConfig::default();
    let events = IcsExporter::new(&config).with_propers(&index).events(&calendar);

    // Easter and St Joseph, once per year
    assert_eq!(events.len(), 4);
    assert!(events.iter().all(|e| e.description.as_deref().unwrap_or("").starts_with("<a href=")));
}
