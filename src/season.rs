// 🕯️ Seasons - Where a date sits in the liturgical year
// Also the Proper of Time fallback: the Sunday or feria every date has by default

use crate::datemath::{
    compute_easter, compute_moveable, liturgical_year_span, next_sunday_on_or_after,
    sunday_on_or_before,
};
use crate::error::OrdoError;
use crate::observance::{capitalize, slugify, DateRule, Observance};
use crate::rank::{rows, Class, Rank};
use chrono::{Datelike, Duration, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// SEASON
// ============================================================================

/// Seasons in the order they occur within a liturgical year
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Season {
    Advent,
    Christmastide,
    AfterEpiphany,
    Septuagesima,
    Lent,
    Passiontide,
    Paschaltide,
    AfterPentecost,
}

impl Season {
    pub fn as_str(&self) -> &'static str {
        match self {
            Season::Advent => "Advent",
            Season::Christmastide => "Christmastide",
            Season::AfterEpiphany => "Time after Epiphany",
            Season::Septuagesima => "Septuagesima",
            Season::Lent => "Lent",
            Season::Passiontide => "Passiontide",
            Season::Paschaltide => "Paschaltide",
            Season::AfterPentecost => "Time after Pentecost",
        }
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// LITURGICAL DATE
// ============================================================================

/// A civil date tagged with its liturgical year and season.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct LiturgicalDate {
    pub date: NaiveDate,
    pub year: i32,
    pub season: Season,
}

impl fmt::Display for LiturgicalDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}, {})", self.date, self.season, self.year)
    }
}

// ============================================================================
// YEAR ANCHORS
// ============================================================================

/// The handful of dates that fix every season boundary of one liturgical year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearAnchors {
    pub year: i32,
    pub advent: NaiveDate,
    pub christmas: NaiveDate,
    pub epiphany: NaiveDate,
    pub septuagesima: NaiveDate,
    pub ash_wednesday: NaiveDate,
    pub passion_sunday: NaiveDate,
    pub easter: NaiveDate,
    pub pentecost: NaiveDate,
    /// Saturday before the next first Sunday of Advent
    pub end: NaiveDate,
}

impl YearAnchors {
    pub fn new(year: i32) -> Result<Self, OrdoError> {
        let (advent, end) = liturgical_year_span(year)?;
        let easter = compute_easter(year)?;

        Ok(YearAnchors {
            year,
            advent,
            christmas: civil(year - 1, 12, 25),
            epiphany: civil(year, 1, 6),
            septuagesima: compute_moveable(-63, easter),
            ash_wednesday: compute_moveable(-46, easter),
            passion_sunday: compute_moveable(-14, easter),
            easter,
            pentecost: compute_moveable(49, easter),
            end,
        })
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.advent <= date && date <= self.end
    }

    pub fn season_of(&self, date: NaiveDate) -> Season {
        if date < self.christmas {
            Season::Advent
        } else if date <= civil(self.year, 1, 13) {
            Season::Christmastide
        } else if date < self.septuagesima {
            Season::AfterEpiphany
        } else if date < self.ash_wednesday {
            Season::Septuagesima
        } else if date < self.passion_sunday {
            Season::Lent
        } else if date < self.easter {
            Season::Passiontide
        } else if date < self.pentecost + Duration::days(7) {
            Season::Paschaltide
        } else {
            Season::AfterPentecost
        }
    }

    pub fn liturgical_date(&self, date: NaiveDate) -> LiturgicalDate {
        LiturgicalDate {
            date,
            year: self.year,
            season: self.season_of(date),
        }
    }

    /// Number of Sundays after Pentecost this year (23 to 28)
    pub fn sundays_after_pentecost(&self) -> i64 {
        ((self.end - Duration::days(6)) - self.pentecost).num_days() / 7
    }

    /// Title and class of the Sunday falling on `date`
    pub fn sunday_title(&self, date: NaiveDate) -> (String, Class) {
        let weeks_from = |anchor: NaiveDate| (date - anchor).num_days() / 7;

        match self.season_of(date) {
            Season::Advent => (
                format!("{} Sunday of Advent", capitalize(ordinal_word(weeks_from(self.advent) as u32 + 1))),
                Class::I,
            ),
            Season::Christmastide => {
                if date < self.epiphany && date.month() == 12 {
                    ("Sunday within the Octave of Christmas".to_string(), Class::II)
                } else if date < self.epiphany {
                    ("Sunday after the Octave of Christmas".to_string(), Class::II)
                } else {
                    ("First Sunday after Epiphany".to_string(), Class::II)
                }
            }
            Season::AfterEpiphany => {
                let first = next_sunday_on_or_after(self.epiphany + Duration::days(1));
                (
                    format!(
                        "{} Sunday after Epiphany",
                        capitalize(ordinal_word(weeks_from(first) as u32 + 1))
                    ),
                    Class::II,
                )
            }
            Season::Septuagesima => {
                let title = match weeks_from(self.septuagesima) {
                    0 => "Septuagesima Sunday",
                    1 => "Sexagesima Sunday",
                    _ => "Quinquagesima Sunday",
                };
                (title.to_string(), Class::II)
            }
            Season::Lent => {
                let first = self.ash_wednesday + Duration::days(4);
                (
                    format!("{} Sunday of Lent", capitalize(ordinal_word(weeks_from(first) as u32 + 1))),
                    Class::I,
                )
            }
            Season::Passiontide => {
                if date == self.passion_sunday {
                    ("First Sunday of the Passion".to_string(), Class::I)
                } else {
                    ("Second Sunday of the Passion or Palm Sunday".to_string(), Class::I)
                }
            }
            Season::Paschaltide => match weeks_from(self.easter) {
                0 => ("Easter Sunday".to_string(), Class::I),
                1 => ("Low Sunday".to_string(), Class::I),
                6 => ("Sunday after the Ascension".to_string(), Class::II),
                7 => ("Pentecost Sunday".to_string(), Class::I),
                n => (
                    format!("{} Sunday after Easter", capitalize(ordinal_word(n as u32))),
                    Class::II,
                ),
            },
            Season::AfterPentecost => (self.pentecost_sunday_title(weeks_from(self.pentecost)), Class::II),
        }
    }

    /// The last Sunday before Advent is always the Twenty-fourth; surplus
    /// Sundays between the Twenty-third and the last resume the Sundays after
    /// Epiphany that Septuagesima cut short.
    fn pentecost_sunday_title(&self, n: i64) -> String {
        let total = self.sundays_after_pentecost();
        if n == 1 {
            return "Trinity Sunday".to_string();
        }
        if n == total {
            return "Twenty-fourth Sunday after Pentecost".to_string();
        }
        if n <= 23 {
            return format!("{} Sunday after Pentecost", capitalize(ordinal_word(n as u32)));
        }
        let resumed = n - total + 7;
        format!(
            "{} Sunday after Epiphany (resumed)",
            capitalize(ordinal_word(resumed as u32))
        )
    }

    /// The default observance of `date`: its Sunday, or the feria of its season
    pub fn default_observance(&self, date: NaiveDate) -> Observance {
        let season = self.season_of(date);

        // The Epiphany has no Sunday of its own, its octave day being next
        if date.weekday() == Weekday::Sun && date != self.epiphany {
            let (title, class) = self.sunday_title(date);
            let mut sunday = Observance::new(
                format!("tempora/{}", slugify(&title)),
                title,
                Rank::Sunday(class),
                DateRule::Derived,
            );
            sunday.proper_of_time = true;
            return sunday;
        }

        let title = self.feria_title(date, season);
        let (rank, precedence) = match season {
            Season::Advent if date >= civil(self.year - 1, 12, 17) => {
                (Rank::Feria(Class::II), Rank::Feria(Class::II).default_precedence())
            }
            Season::Advent => (Rank::Feria(Class::III), Rank::Feria(Class::III).default_precedence()),
            Season::Lent | Season::Passiontide => (Rank::Feria(Class::III), rows::LENTEN_FERIA),
            _ => (Rank::Feria(Class::IV), Rank::Feria(Class::IV).default_precedence()),
        };

        let mut feria = Observance::new(
            format!("tempora/{}-{}", slugify(&title), date.format("%m-%d")),
            title,
            rank,
            DateRule::Derived,
        )
        .with_precedence(precedence);
        feria.proper_of_time = true;
        feria
    }

    fn feria_title(&self, date: NaiveDate, season: Season) -> String {
        let weekday = weekday_name(date.weekday());
        match season {
            Season::Christmastide if date < self.epiphany => "Feria of Christmastide".to_string(),
            Season::Christmastide => "Feria of Epiphanytide".to_string(),
            Season::Lent if date < self.ash_wednesday + Duration::days(4) => {
                format!("{} after Ash Wednesday", weekday)
            }
            _ => {
                let (sunday, _) = self.sunday_title(sunday_on_or_before(date));
                if sunday.ends_with("Sunday") {
                    format!("{} after {}", weekday, sunday)
                } else {
                    format!("{} after the {}", weekday, sunday)
                }
            }
        }
    }
}

fn civil(year: i32, month: u32, day: u32) -> NaiveDate {
    // only called with literal month/day pairs that exist in every year
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or(NaiveDate::MIN)
}

pub(crate) fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// English ordinal word, lowercase ("first" .. "twenty-eighth")
pub fn ordinal_word(n: u32) -> &'static str {
    const WORDS: [&str; 29] = [
        "zeroth",
        "first",
        "second",
        "third",
        "fourth",
        "fifth",
        "sixth",
        "seventh",
        "eighth",
        "ninth",
        "tenth",
        "eleventh",
        "twelfth",
        "thirteenth",
        "fourteenth",
        "fifteenth",
        "sixteenth",
        "seventeenth",
        "eighteenth",
        "nineteenth",
        "twentieth",
        "twenty-first",
        "twenty-second",
        "twenty-third",
        "twenty-fourth",
        "twenty-fifth",
        "twenty-sixth",
        "twenty-seventh",
        "twenty-eighth",
    ];
    WORDS.get(n as usize).copied().unwrap_or("last")
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_anchors_2024() {
        let a = YearAnchors::new(2024).unwrap();
        assert_eq!(a.advent, ymd(2023, 12, 3));
        assert_eq!(a.septuagesima, ymd(2024, 1, 28));
        assert_eq!(a.ash_wednesday, ymd(2024, 2, 14));
        assert_eq!(a.passion_sunday, ymd(2024, 3, 17));
        assert_eq!(a.pentecost, ymd(2024, 5, 19));
        assert_eq!(a.end, ymd(2024, 11, 30));
    }

    #[test]
    fn test_season_boundaries() {
        let a = YearAnchors::new(2024).unwrap();
        assert_eq!(a.season_of(ymd(2023, 12, 3)), Season::Advent);
        assert_eq!(a.season_of(ymd(2023, 12, 24)), Season::Advent);
        assert_eq!(a.season_of(ymd(2023, 12, 25)), Season::Christmastide);
        assert_eq!(a.season_of(ymd(2024, 1, 13)), Season::Christmastide);
        assert_eq!(a.season_of(ymd(2024, 1, 14)), Season::AfterEpiphany);
        assert_eq!(a.season_of(ymd(2024, 1, 28)), Season::Septuagesima);
        assert_eq!(a.season_of(ymd(2024, 2, 14)), Season::Lent);
        assert_eq!(a.season_of(ymd(2024, 3, 17)), Season::Passiontide);
        assert_eq!(a.season_of(ymd(2024, 3, 31)), Season::Paschaltide);
        assert_eq!(a.season_of(ymd(2024, 5, 25)), Season::Paschaltide);
        assert_eq!(a.season_of(ymd(2024, 5, 26)), Season::AfterPentecost);
        assert_eq!(a.season_of(ymd(2024, 11, 30)), Season::AfterPentecost);
    }

    #[test]
    fn test_sunday_titles() {
        let a = YearAnchors::new(2024).unwrap();
        assert_eq!(a.sunday_title(ymd(2023, 12, 10)).0, "Second Sunday of Advent");
        assert_eq!(a.sunday_title(ymd(2023, 12, 31)).0, "Sunday within the Octave of Christmas");
        assert_eq!(a.sunday_title(ymd(2024, 1, 21)).0, "Third Sunday after Epiphany");
        assert_eq!(a.sunday_title(ymd(2024, 2, 4)).0, "Sexagesima Sunday");
        assert_eq!(a.sunday_title(ymd(2024, 2, 18)).0, "First Sunday of Lent");
        assert_eq!(a.sunday_title(ymd(2024, 3, 10)).0, "Fourth Sunday of Lent");
        assert_eq!(a.sunday_title(ymd(2024, 3, 24)).0, "Second Sunday of the Passion or Palm Sunday");
        assert_eq!(a.sunday_title(ymd(2024, 4, 7)).0, "Low Sunday");
        assert_eq!(a.sunday_title(ymd(2024, 4, 14)).0, "Second Sunday after Easter");
        assert_eq!(a.sunday_title(ymd(2024, 5, 12)).0, "Sunday after the Ascension");
        assert_eq!(a.sunday_title(ymd(2024, 6, 2)).0, "Second Sunday after Pentecost");
    }

    #[test]
    fn test_feria_after_named_sunday_has_no_article() {
        let a = YearAnchors::new(2024).unwrap();
        assert_eq!(a.default_observance(ymd(2024, 4, 9)).name, "Tuesday after Low Sunday");
        assert_eq!(a.default_observance(ymd(2024, 1, 30)).name, "Tuesday after Septuagesima Sunday");
    }

    #[test]
    fn test_last_sunday_after_pentecost_is_twenty_fourth() {
        // 2024: Pentecost May 19, last Sunday Nov 24 -> 27 Sundays after Pentecost
        let a = YearAnchors::new(2024).unwrap();
        assert_eq!(a.sundays_after_pentecost(), 27);
        assert_eq!(a.sunday_title(ymd(2024, 11, 24)).0, "Twenty-fourth Sunday after Pentecost");
        assert_eq!(a.sunday_title(ymd(2024, 10, 27)).0, "Twenty-third Sunday after Pentecost");
        assert_eq!(a.sunday_title(ymd(2024, 11, 3)).0, "Fourth Sunday after Epiphany (resumed)");
        assert_eq!(a.sunday_title(ymd(2024, 11, 17)).0, "Sixth Sunday after Epiphany (resumed)");
    }

    #[test]
    fn test_default_feria_ranks() {
        let a = YearAnchors::new(2024).unwrap();

        let advent = a.default_observance(ymd(2023, 12, 5));
        assert_eq!(advent.rank, Rank::Feria(Class::III));
        assert_eq!(advent.name, "Tuesday after the First Sunday of Advent");

        let greater_advent = a.default_observance(ymd(2023, 12, 19));
        assert_eq!(greater_advent.rank, Rank::Feria(Class::II));

        let lent = a.default_observance(ymd(2024, 2, 27));
        assert_eq!(lent.rank, Rank::Feria(Class::III));
        assert_eq!(lent.precedence, rows::LENTEN_FERIA);
        assert_eq!(lent.name, "Tuesday after the Second Sunday of Lent");

        let after_ash = a.default_observance(ymd(2024, 2, 16));
        assert_eq!(after_ash.name, "Friday after Ash Wednesday");

        let ordinary = a.default_observance(ymd(2024, 7, 3));
        assert_eq!(ordinary.rank, Rank::Feria(Class::IV));
        assert!(!ordinary.commemorable);
        assert!(ordinary.proper_of_time);
    }

    #[test]
    fn test_default_sunday() {
        let a = YearAnchors::new(2024).unwrap();
        let sunday = a.default_observance(ymd(2024, 7, 7));
        assert_eq!(sunday.rank, Rank::Sunday(Class::II));
        assert_eq!(sunday.name, "Seventh Sunday after Pentecost");
        assert_eq!(sunday.id, "tempora/seventh-sunday-after-pentecost");
        assert!(sunday.commemorable);
    }

    #[test]
    fn test_epiphany_on_sunday_has_no_sunday_default() {
        // 2019: Jan 6 is a Sunday
        let a = YearAnchors::new(2019).unwrap();
        let default = a.default_observance(ymd(2019, 1, 6));
        assert_eq!(default.rank, Rank::Feria(Class::IV));
        assert_eq!(default.name, "Feria of Epiphanytide");
        assert!(!default.commemorable);

        // the following Sunday keeps its title
        assert_eq!(a.sunday_title(ymd(2019, 1, 13)).0, "First Sunday after Epiphany");
    }

    #[test]
    fn test_liturgical_dates_sort_by_date() {
        let a = YearAnchors::new(2024).unwrap();
        let mut dates = vec![
            a.liturgical_date(ymd(2024, 3, 31)),
            a.liturgical_date(ymd(2023, 12, 3)),
            a.liturgical_date(ymd(2024, 1, 14)),
        ];
        dates.sort();

        let seasons: Vec<Season> = dates.iter().map(|d| d.season).collect();
        assert_eq!(seasons, vec![Season::Advent, Season::AfterEpiphany, Season::Paschaltide]);
        assert!(Season::Advent < Season::Christmastide && Season::Paschaltide < Season::AfterPentecost);
    }

    #[test]
    fn test_liturgical_date_tags() {
        let a = YearAnchors::new(2025).unwrap();
        let d = a.liturgical_date(ymd(2024, 12, 25));
        assert_eq!(d.year, 2025);
        assert_eq!(d.season, Season::Christmastide);
    }
}
