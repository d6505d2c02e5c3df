// ✝️ Observance - One entry of the calendar, defined once and never mutated
// Identity (id) + rank metadata + the rule that places it in a year

use crate::rank::{Class, Rank};
use crate::season::ordinal_word;
use serde::{Deserialize, Serialize};

// ============================================================================
// DATE RULE
// ============================================================================

/// How an observance finds its date inside a liturgical year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DateRule {
    /// Same civil month and day every year
    Fixed { month: u32, day: u32 },

    /// Offset in days from Easter Sunday
    Easter(i64),

    /// Offset in days from the first Sunday of Advent opening the year
    Advent(i64),

    /// Last Sunday of a month, in the civil year of Easter
    LastSunday { month: u32 },

    /// `nth` Sunday of a month plus an offset in days
    NthSunday { month: u32, nth: u32, offset: i64 },

    /// Sunday from Jan 2 to Jan 5, otherwise Jan 2
    HolyName,

    /// Sunday after the Epiphany (Jan 7 to Jan 13)
    HolyFamily,

    /// Synthesized for a single date (seasonal defaults, octave days)
    Derived,
}

impl DateRule {
    pub fn fixed(month: u32, day: u32) -> Self {
        DateRule::Fixed { month, day }
    }

    pub fn is_moveable(&self) -> bool {
        !matches!(self, DateRule::Fixed { .. })
    }
}

// ============================================================================
// OCTAVE
// ============================================================================

/// Octave carried by a feast: `days` counts the feast itself through the
/// last day within the octave, so `days - 1` octave days follow the feast.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Octave {
    pub days: u8,

    /// Class of the days within the octave
    pub class: Class,

    /// Short title used to name the days ("Christmas", "Easter")
    pub of: String,
}

// ============================================================================
// OBSERVANCE
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Observance {
    /// Stable identifier (e.g., "sancti/03-19-joseph")
    pub id: String,

    /// Display name
    pub name: String,

    pub rank: Rank,

    /// Row within the class in the table of liturgical days (lower wins)
    pub precedence: u8,

    pub date_rule: DateRule,

    /// May be retained as a commemoration when outranked
    pub commemorable: bool,

    /// Must be moved to the next open day when outranked
    pub transferable: bool,

    /// When celebrated, the day keeps commemorations of what it outranks
    pub admits_commemorations: bool,

    pub octave: Option<Octave>,

    /// Belongs to the Proper of Time and stands in for the day's default
    /// Sunday or feria
    pub proper_of_time: bool,

    /// Registry definition order, the final deterministic tie fallback
    pub order: u32,
}

impl Observance {
    /// Create an observance with the defaults its rank implies
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        rank: Rank,
        date_rule: DateRule,
    ) -> Self {
        let (commemorable, transferable) = match rank {
            // I class feasts are never reduced to a commemoration, they move
            Rank::Feast(Class::I) => (false, true),
            Rank::Feria(Class::IV) => (false, false),
            _ => (true, false),
        };

        Observance {
            id: id.into(),
            name: name.into(),
            rank,
            precedence: rank.default_precedence(),
            date_rule,
            commemorable,
            transferable,
            admits_commemorations: true,
            octave: None,
            proper_of_time: false,
            order: 0,
        }
    }

    pub fn feast(id: &str, name: &str, class: Class, date_rule: DateRule) -> Self {
        Observance::new(id, name, Rank::Feast(class), date_rule)
    }

    /// Builder: explicit row in the table of liturgical days
    pub fn with_precedence(mut self, precedence: u8) -> Self {
        self.precedence = precedence;
        self
    }

    /// Builder: attach an octave
    pub fn with_octave(mut self, days: u8, class: Class, of: &str) -> Self {
        self.octave = Some(Octave {
            days,
            class,
            of: of.to_string(),
        });
        self
    }

    /// Builder: mark as part of the Proper of Time
    pub fn temporal(mut self) -> Self {
        self.proper_of_time = true;
        self
    }

    /// Builder: never kept as a commemoration
    pub fn not_commemorable(mut self) -> Self {
        self.commemorable = false;
        self
    }

    /// Builder: a day celebrating this observance commemorates nothing
    pub fn without_commemorations(mut self) -> Self {
        self.admits_commemorations = false;
        self
    }

    pub fn class(&self) -> Class {
        self.rank.class()
    }

    pub fn is_moveable(&self) -> bool {
        self.date_rule.is_moveable()
    }

    /// Synthesize the `nth` day of this feast's octave (the feast is day 1).
    pub fn octave_day(&self, nth: u8) -> Option<Observance> {
        let octave = self.octave.as_ref()?;
        if nth < 2 || nth > octave.days {
            return None;
        }

        let name = format!(
            "{} Day within the Octave of {}",
            capitalize(ordinal_word(nth as u32)),
            octave.of
        );
        let mut day = Observance::new(
            format!("{}/octave-{}", self.id, nth),
            name,
            Rank::OctaveDay(octave.class),
            DateRule::Derived,
        );
        day.order = self.order;
        Some(day)
    }
}

pub(crate) fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Lowercase ASCII slug of a display name, for synthesized identifiers
pub(crate) fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    for c in name.chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c.to_ascii_lowercase());
        } else if !slug.ends_with('-') && !slug.is_empty() {
            slug.push('-');
        }
    }
    slug.trim_end_matches('-').to_string()
}

// ============================================================================
// TESTS
// ============================================================================
