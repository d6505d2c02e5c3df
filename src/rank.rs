// 🏷️ Rank - The table of liturgical days as one total order
// Class first, then the row within the class, then the seasonal tie-break

use crate::season::Season;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

// ============================================================================
// CLASS
// ============================================================================

/// Liturgical class of a day (1962 rubrics). Class I is the highest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Class {
    I,
    II,
    III,
    IV,
}

impl Class {
    /// Numeric weight, higher is more solemn
    pub fn weight(self) -> u8 {
        match self {
            Class::I => 4,
            Class::II => 3,
            Class::III => 2,
            Class::IV => 1,
        }
    }

    pub fn numeral(self) -> &'static str {
        match self {
            Class::I => "I",
            Class::II => "II",
            Class::III => "III",
            Class::IV => "IV",
        }
    }
}

impl Ord for Class {
    fn cmp(&self, other: &Self) -> Ordering {
        self.weight().cmp(&other.weight())
    }
}

impl PartialOrd for Class {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Class {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} class", self.numeral())
    }
}

// ============================================================================
// RANK
// ============================================================================

/// Rank of an observance: what kind of liturgical day it is, and its class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rank {
    Feast(Class),
    Sunday(Class),
    Feria(Class),
    Vigil(Class),
    OctaveDay(Class),
}

/// Rows of the table of liturgical days that observances name explicitly.
/// Everything else takes `Rank::default_precedence`.
pub mod rows {
    /// Nativity, Easter, Pentecost
    pub const PRINCIPAL: u8 = 1;
    /// Maundy Thursday, Good Friday, Holy Saturday
    pub const TRIDUUM: u8 = 2;
    /// I and II class feasts of the Lord
    pub const LORD: u8 = 3;
    /// Immaculate Conception and Assumption
    pub const OUR_LADY_I: u8 = 4;
    /// Christmas Eve, which takes the place of the Fourth Sunday of Advent
    pub const NATIVITY_VIGIL: u8 = 4;
    /// Ferias of Lent and Passiontide (III class)
    pub const LENTEN_FERIA: u8 = 1;
}

impl Rank {
    pub fn class(&self) -> Class {
        match *self {
            Rank::Feast(c)
            | Rank::Sunday(c)
            | Rank::Feria(c)
            | Rank::Vigil(c)
            | Rank::OctaveDay(c) => c,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Rank::Feast(_) => "feast",
            Rank::Sunday(_) => "Sunday",
            Rank::Feria(_) => "feria",
            Rank::Vigil(_) => "vigil",
            Rank::OctaveDay(_) => "day within octave",
        }
    }

    pub fn is_sunday(&self) -> bool {
        matches!(self, Rank::Sunday(_))
    }

    pub fn is_feria(&self) -> bool {
        matches!(self, Rank::Feria(_))
    }

    /// Row of this rank inside its class in the table of liturgical days.
    /// Lower rows take precedence.
    pub fn default_precedence(&self) -> u8 {
        match *self {
            Rank::Sunday(Class::I) => 5,
            Rank::Feria(Class::I) => 6,
            Rank::OctaveDay(Class::I) => 7,
            Rank::Feast(Class::I) => 8,
            Rank::Vigil(Class::I) => 9,

            Rank::Sunday(Class::II) => 4,
            Rank::Feast(Class::II) => 5,
            Rank::OctaveDay(Class::II) => 6,
            Rank::Feria(Class::II) => 7,
            Rank::Vigil(Class::II) => 8,

            Rank::Feast(Class::III) => 2,
            Rank::Feria(Class::III) => 3,
            Rank::Vigil(Class::III) => 4,

            Rank::Feria(Class::IV) => 1,
            Rank::Feast(Class::IV) => 2,

            // kinds the rubrics never assign to these classes
            Rank::Sunday(_) | Rank::OctaveDay(_) | Rank::Vigil(_) => 9,
        }
    }

    /// Privileged commemorations: the only ones admitted on a I class day.
    pub fn is_privileged(&self) -> bool {
        match *self {
            Rank::Sunday(_) => true,
            Rank::Feria(c) => c != Class::IV,
            Rank::OctaveDay(_) => true,
            other => other.class() == Class::I,
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.class(), self.kind())
    }
}

// ============================================================================
// PRECEDENCE KEY
// ============================================================================

/// Total-order precedence key of a candidate on a given date.
///
/// Greater keys win: class first, then the lower table row, then the
/// seasonal tie-break (only ever non-zero for Sundays and ferias).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PrecedenceKey {
    pub class: Class,
    pub precedence: u8,
    pub seasonal: u8,
}

impl PrecedenceKey {
    pub fn new(rank: Rank, precedence: u8, season: Season) -> Self {
        let seasonal = if rank.is_sunday() || rank.is_feria() {
            seasonal_weight(season)
        } else {
            0
        };
        PrecedenceKey {
            class: rank.class(),
            precedence,
            seasonal,
        }
    }
}

impl Ord for PrecedenceKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.class
            .cmp(&other.class)
            .then_with(|| other.precedence.cmp(&self.precedence))
            .then_with(|| self.seasonal.cmp(&other.seasonal))
    }
}

impl PartialOrd for PrecedenceKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Penitential seasons weigh heaviest between Sundays and ferias of equal row
fn seasonal_weight(season: Season) -> u8 {
    match season {
        Season::Passiontide => 4,
        Season::Lent => 3,
        Season::Advent => 2,
        _ => 1,
    }
}

// ============================================================================
// TESTS
// ============================================================================
