// 🗂️ Feast Registry - Immutable catalog of the 1962 Roman calendar
// Built once, shared by reference with every year build, never mutated
//
// Lookup for a date returns:
// - fixed feasts whose month/day match (shifted in leap-year Februaries)
// - moveable feasts whose date, resolved once per year, matches
// - the day's default Sunday or feria, unless the Proper of Time already
//   occupies it

use crate::datemath::{
    compute_moveable, last_sunday_of, next_sunday_on_or_after, nth_sunday_of,
};
use crate::error::OrdoError;
use crate::observance::{slugify, DateRule, Observance};
use crate::rank::rows::{LORD, PRINCIPAL, TRIDUUM};
use crate::rank::{Class, Rank};
use crate::sanctoral::{
    DEFAULT_ROW, OMITTED_WHEN_IMPEDED, SANCTORAL, VIGILS, WITHOUT_COMMEMORATIONS,
};
use crate::season::YearAnchors;
use chrono::{Datelike, Duration, NaiveDate};
use std::collections::{BTreeMap, HashMap};
use std::sync::OnceLock;
use tracing::debug;

// ============================================================================
// FEAST REGISTRY
// ============================================================================

pub struct FeastRegistry {
    /// Every observance, in definition order
    observances: Vec<Observance>,

    by_id: HashMap<String, usize>,

    /// Fixed feasts keyed by (month, day)
    fixed: HashMap<(u32, u32), Vec<usize>>,

    /// Indices of moveable observances
    moveable: Vec<usize>,
}

impl FeastRegistry {
    /// Empty registry, for callers assembling their own table
    pub fn empty() -> Self {
        FeastRegistry {
            observances: Vec::new(),
            by_id: HashMap::new(),
            fixed: HashMap::new(),
            moveable: Vec::new(),
        }
    }

    /// The universal calendar of the 1962 Roman Missal
    pub fn roman_1962() -> Self {
        let mut registry = FeastRegistry::empty();
        registry.register_proper_of_time();
        registry.register_sanctoral();
        debug!(observances = registry.len(), "feast registry loaded");
        registry
    }

    /// Process-wide registry, built on first use
    pub fn global() -> &'static FeastRegistry {
        static REGISTRY: OnceLock<FeastRegistry> = OnceLock::new();
        REGISTRY.get_or_init(FeastRegistry::roman_1962)
    }

    /// Proper of Time: moveable days with an identity of their own.
    /// Ordinary Sundays and ferias come from the season defaults.
    fn register_proper_of_time(&mut self) {
        let ember = |id: &str, name: &str, rule: DateRule| {
            Observance::new(id, name, Rank::Feria(Class::II), rule).temporal()
        };

        // ====================================================================
        // ADVENT AND CHRISTMASTIDE
        // ====================================================================
        self.register(ember("tempora/advent-ember-wednesday", "Ember Wednesday of Advent", DateRule::Advent(17)));
        self.register(ember("tempora/advent-ember-friday", "Ember Friday of Advent", DateRule::Advent(19)));
        self.register(ember("tempora/advent-ember-saturday", "Ember Saturday of Advent", DateRule::Advent(20)));

        self.register(
            Observance::feast("tempora/holy-name", "Most Holy Name of Jesus", Class::II, DateRule::HolyName)
                .with_precedence(LORD)
                .temporal(),
        );
        self.register(
            Observance::feast("tempora/holy-family", "Holy Family of Jesus, Mary and Joseph", Class::II, DateRule::HolyFamily)
                .with_precedence(LORD)
                .temporal(),
        );

        // ====================================================================
        // LENT AND PASSIONTIDE
        // ====================================================================
        self.register(
            Observance::new("tempora/ash-wednesday", "Ash Wednesday", Rank::Feria(Class::I), DateRule::Easter(-46))
                .temporal(),
        );
        self.register(ember("tempora/lent-ember-wednesday", "Ember Wednesday of Lent", DateRule::Easter(-39)));
        self.register(ember("tempora/lent-ember-friday", "Ember Friday of Lent", DateRule::Easter(-37)));
        self.register(ember("tempora/lent-ember-saturday", "Ember Saturday of Lent", DateRule::Easter(-36)));

        for (offset, name) in [
            (-6, "Monday of Holy Week"),
            (-5, "Tuesday of Holy Week"),
            (-4, "Wednesday of Holy Week"),
        ] {
            self.register(
                Observance::new(format!("tempora/{}", slugify(name)), name, Rank::Feria(Class::I), DateRule::Easter(offset))
                    .temporal(),
            );
        }
        for (offset, name) in [(-3, "Maundy Thursday"), (-2, "Good Friday"), (-1, "Holy Saturday")] {
            self.register(
                Observance::new(format!("tempora/{}", slugify(name)), name, Rank::Feria(Class::I), DateRule::Easter(offset))
                    .with_precedence(TRIDUUM)
                    .temporal(),
            );
        }

        // ====================================================================
        // PASCHALTIDE
        // ====================================================================
        self.register(
            Observance::feast("tempora/easter", "Easter Sunday", Class::I, DateRule::Easter(0))
                .with_precedence(PRINCIPAL)
                .with_octave(7, Class::I, "Easter")
                .temporal(),
        );
        self.register(
            Observance::new("tempora/vigil-of-the-ascension", "Vigil of the Ascension", Rank::Vigil(Class::II), DateRule::Easter(38))
                .temporal(),
        );
        self.register(
            Observance::feast("tempora/ascension", "Ascension of Our Lord", Class::I, DateRule::Easter(39))
                .with_precedence(LORD)
                .temporal(),
        );
        self.register(
            Observance::new("tempora/vigil-of-pentecost", "Vigil of Pentecost", Rank::Vigil(Class::I), DateRule::Easter(48))
                .temporal(),
        );
        self.register(
            Observance::feast("tempora/pentecost", "Pentecost Sunday", Class::I, DateRule::Easter(49))
                .with_precedence(PRINCIPAL)
                .with_octave(7, Class::I, "Pentecost")
                .temporal(),
        );

        // ====================================================================
        // TIME AFTER PENTECOST
        // ====================================================================
        for (offset, id, name) in [
            (56, "tempora/trinity", "Most Holy Trinity"),
            (60, "tempora/corpus-christi", "Corpus Christi"),
            (68, "tempora/sacred-heart", "Most Sacred Heart of Jesus"),
        ] {
            self.register(
                Observance::feast(id, name, Class::I, DateRule::Easter(offset))
                    .with_precedence(LORD)
                    .temporal(),
            );
        }

        let september = |offset| DateRule::NthSunday { month: 9, nth: 3, offset };
        self.register(ember("tempora/september-ember-wednesday", "Ember Wednesday of September", september(3)));
        self.register(ember("tempora/september-ember-friday", "Ember Friday of September", september(5)));
        self.register(ember("tempora/september-ember-saturday", "Ember Saturday of September", september(6)));

        self.register(
            Observance::feast("tempora/christ-the-king", "Our Lord Jesus Christ the King", Class::I, DateRule::LastSunday { month: 10 })
                .with_precedence(LORD),
        );
    }

    fn register_sanctoral(&mut self) {
        for &(month, day, name, class, row) in SANCTORAL {
            let mut feast = Observance::feast(
                &fixed_id(month, day, name),
                name,
                class,
                DateRule::fixed(month, day),
            );
            if row != DEFAULT_ROW {
                feast = feast.with_precedence(row);
            }
            if (month, day) == (12, 25) {
                feast = feast.with_octave(7, Class::II, "Christmas");
            }
            if OMITTED_WHEN_IMPEDED.contains(&(month, day)) {
                feast = feast.not_commemorable();
            }
            if WITHOUT_COMMEMORATIONS.contains(&(month, day)) {
                feast = feast.without_commemorations();
            }
            self.register(feast);
        }

        for &(month, day, name, class, row) in VIGILS {
            let mut vigil = Observance::new(
                fixed_id(month, day, name),
                name,
                Rank::Vigil(class),
                DateRule::fixed(month, day),
            );
            if row != DEFAULT_ROW {
                vigil = vigil.with_precedence(row);
            }
            if WITHOUT_COMMEMORATIONS.contains(&(month, day)) {
                vigil = vigil.without_commemorations();
            }
            self.register(vigil);
        }
    }

    /// Append an observance; its definition order is its position
    pub fn register(&mut self, mut observance: Observance) {
        let index = self.observances.len();
        observance.order = index as u32 + 1;

        match observance.date_rule {
            DateRule::Fixed { month, day } => self.fixed.entry((month, day)).or_default().push(index),
            DateRule::Derived => {}
            _ => self.moveable.push(index),
        }
        self.by_id.insert(observance.id.clone(), index);
        self.observances.push(observance);
    }

    pub fn get(&self, id: &str) -> Option<&Observance> {
        self.by_id.get(id).map(|&i| &self.observances[i])
    }

    pub fn len(&self) -> usize {
        self.observances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observances.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Observance> {
        self.observances.iter()
    }

    // ========================================================================
    // DATE RESOLUTION
    // ========================================================================

    /// Concrete date of an observance within a liturgical year.
    /// Derived observances have no date of their own.
    pub fn resolve_date(&self, observance: &Observance, anchors: &YearAnchors) -> Result<Option<NaiveDate>, OrdoError> {
        let year = anchors.year;
        let date = match observance.date_rule {
            DateRule::Derived => return Ok(None),
            DateRule::Fixed { month, day } => return Ok(fixed_date(anchors, month, day)),
            DateRule::Easter(offset) => compute_moveable(offset, anchors.easter),
            DateRule::Advent(offset) => anchors.advent + Duration::days(offset),
            DateRule::LastSunday { month } => last_sunday_of(year, month)?,
            DateRule::NthSunday { month, nth, offset } => nth_sunday_of(year, month, nth)? + Duration::days(offset),
            DateRule::HolyName => {
                let sunday = next_sunday_on_or_after(anchors.epiphany - Duration::days(4));
                if sunday.day() <= 5 {
                    sunday
                } else {
                    anchors.epiphany - Duration::days(4)
                }
            }
            DateRule::HolyFamily => next_sunday_on_or_after(anchors.epiphany + Duration::days(1)),
        };
        Ok(Some(date))
    }

    /// Resolve every moveable observance of liturgical year `year` up front
    pub fn resolve_year(&self, year: i32) -> Result<YearTable<'_>, OrdoError> {
        let anchors = YearAnchors::new(year)?;
        let mut moveable: BTreeMap<NaiveDate, Vec<usize>> = BTreeMap::new();

        for &index in &self.moveable {
            if let Some(date) = self.resolve_date(&self.observances[index], &anchors)? {
                if anchors.contains(date) {
                    moveable.entry(date).or_default().push(index);
                }
            }
        }

        Ok(YearTable {
            registry: self,
            anchors,
            moveable,
        })
    }

    fn fixed_on(&self, date: NaiveDate) -> &[usize] {
        match fixed_key(date) {
            Some(key) => self.fixed.get(&key).map(Vec::as_slice).unwrap_or(&[]),
            None => &[],
        }
    }
}

impl Default for FeastRegistry {
    fn default() -> Self {
        Self::roman_1962()
    }
}

// ============================================================================
// YEAR TABLE
// ============================================================================

/// The registry viewed through one liturgical year, moveables resolved.
pub struct YearTable<'r> {
    registry: &'r FeastRegistry,
    pub anchors: YearAnchors,
    moveable: BTreeMap<NaiveDate, Vec<usize>>,
}

impl<'r> YearTable<'r> {
    /// Resolved date of every moveable observance this year
    pub fn moveable_dates(&self) -> impl Iterator<Item = (NaiveDate, &Observance)> + '_ {
        self.moveable
            .iter()
            .flat_map(move |(date, indices)| indices.iter().map(move |&i| (*date, &self.registry.observances[i])))
    }

    /// Every observance nominally falling on `date`, in definition order,
    /// the season default first when it applies.
    pub fn candidates(&self, date: NaiveDate) -> Result<Vec<Observance>, OrdoError> {
        if !self.anchors.contains(date) {
            return Err(OrdoError::RulesGap { date });
        }

        let mut indices: Vec<usize> = self.registry.fixed_on(date).to_vec();
        if let Some(moveable) = self.moveable.get(&date) {
            indices.extend(moveable);
        }
        indices.sort_unstable();
        indices.dedup();

        let mut candidates: Vec<Observance> = indices
            .into_iter()
            .map(|i| self.registry.observances[i].clone())
            .collect();

        if !candidates.iter().any(|o| o.proper_of_time) {
            candidates.insert(0, self.anchors.default_observance(date));
        }

        if candidates.is_empty() {
            return Err(OrdoError::RulesGap { date });
        }
        Ok(candidates)
    }
}

/// Registry key of a civil date. In leap years the feasts from Feb 24
/// onward fall one day later and Feb 24 keeps none of them.
fn fixed_key(date: NaiveDate) -> Option<(u32, u32)> {
    let (month, day) = (date.month(), date.day());
    let leap = NaiveDate::from_ymd_opt(date.year(), 2, 29).is_some();
    if leap && month == 2 {
        return match day {
            24 => None,
            25..=29 => Some((2, day - 1)),
            _ => Some((2, day)),
        };
    }
    Some((month, day))
}

/// Civil date of a fixed feast inside the year: December dates from Advent
/// onward belong to the previous civil year.
fn fixed_date(anchors: &YearAnchors, month: u32, day: u32) -> Option<NaiveDate> {
    let early = NaiveDate::from_ymd_opt(anchors.year - 1, month, day).filter(|d| anchors.contains(*d));
    let year = if early.is_some() { anchors.year - 1 } else { anchors.year };

    let leap = NaiveDate::from_ymd_opt(year, 2, 29).is_some();
    let day = if leap && month == 2 && day >= 24 { day + 1 } else { day };
    NaiveDate::from_ymd_opt(year, month, day).filter(|d| anchors.contains(*d))
}

fn fixed_id(month: u32, day: u32, name: &str) -> String {
    format!("sancti/{:02}-{:02}-{}", month, day, slugify(name))
}

// ============================================================================
// TESTS
// ============================================================================
