// 📅 Liturgical Year - Every date of one year resolved, plus its audit log
// Pass 1 resolves each date in order, Pass 2 places transferred feasts
//
// Pass 1:
// - gather candidates (moveables resolved once for the year)
// - add octave days propagated from feasts celebrated earlier
// - resolve and queue transfer requests
//
// Pass 2:
// - replay transfers in order of origin date
// - place each on the nearest later date it outranks with no transfer yet
// - requests displaced by a placement go back in the queue

use crate::config::RubricConfig;
use crate::datemath::days;
use crate::error::OrdoError;
use crate::observance::Observance;
use crate::registry::FeastRegistry;
use crate::resolver::{PrecedenceResolver, Resolution};
use crate::season::LiturgicalDate;
use chrono::{Duration, NaiveDate};
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};
use tracing::{debug, info};

// ============================================================================
// RESOLVED DAY
// ============================================================================

/// A feast celebrated away from its own date, with the date it came from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransferredObservance {
    pub observance: Observance,
    pub origin: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedDay {
    pub date: LiturgicalDate,
    pub celebrated: Observance,
    pub commemorations: Vec<Observance>,
    pub transferred_in: Option<TransferredObservance>,
}

impl ResolvedDay {
    /// Celebrated observance followed by the commemorations
    pub fn observances(&self) -> impl Iterator<Item = &Observance> {
        std::iter::once(&self.celebrated).chain(self.commemorations.iter())
    }
}

// ============================================================================
// AUDIT
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum AuditEvent {
    /// Outranked and neither commemorated nor transferred
    Omitted { date: NaiveDate, observance: String },

    Transferred { observance: String, from: NaiveDate, to: NaiveDate },

    /// Transfer that found no open date before the year ended
    Unplaced { observance: String, from: NaiveDate },

    /// Two candidates shared the top key; definition order decided
    Tie { date: NaiveDate, chosen: String, rejected: String },
}

impl AuditEvent {
    pub fn date(&self) -> NaiveDate {
        match self {
            AuditEvent::Omitted { date, .. } | AuditEvent::Tie { date, .. } => *date,
            AuditEvent::Transferred { from, .. } | AuditEvent::Unplaced { from, .. } => *from,
        }
    }
}

// ============================================================================
// LITURGICAL YEAR
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LiturgicalYear {
    pub year: i32,

    /// One entry per date, first Sunday of Advent to the Saturday before the next
    pub days: Vec<ResolvedDay>,

    pub audit: Vec<AuditEvent>,
}

impl LiturgicalYear {
    pub fn start(&self) -> Option<NaiveDate> {
        self.days.first().map(|d| d.date.date)
    }

    pub fn end(&self) -> Option<NaiveDate> {
        self.days.last().map(|d| d.date.date)
    }

    /// Resolved day for a civil date inside this year
    pub fn day(&self, date: NaiveDate) -> Option<&ResolvedDay> {
        let start = self.start()?;
        let offset = usize::try_from((date - start).num_days()).ok()?;
        self.days.get(offset)
    }
}

// ============================================================================
// BUILDER
// ============================================================================

pub struct LiturgicalYearBuilder<'r> {
    registry: &'r FeastRegistry,
    resolver: PrecedenceResolver,
}

/// Working state of one date between the two passes
struct DayState {
    date: LiturgicalDate,
    candidates: Vec<Observance>,
    resolution: Resolution,
    transferred_in: Option<TransferredObservance>,
}

impl<'r> LiturgicalYearBuilder<'r> {
    pub fn new(registry: &'r FeastRegistry, config: &RubricConfig) -> Self {
        LiturgicalYearBuilder {
            registry,
            resolver: PrecedenceResolver::new(config.clone()),
        }
    }

    pub fn build(&self, year: i32) -> Result<LiturgicalYear, OrdoError> {
        let table = self.registry.resolve_year(year)?;
        let anchors = table.anchors;

        // ====================================================================
        // PASS 1: direct resolution with octave propagation
        // ====================================================================
        let mut states: Vec<DayState> = Vec::new();
        let mut octave_days: HashMap<NaiveDate, Vec<Observance>> = HashMap::new();
        let mut queue: BTreeMap<(NaiveDate, usize), Observance> = BTreeMap::new();
        let mut seq = 0;

        for date in days(anchors.advent, anchors.end) {
            let liturgical = anchors.liturgical_date(date);
            let mut candidates = table.candidates(date)?;
            candidates.extend(octave_days.remove(&date).unwrap_or_default());

            let resolution = self.resolver.resolve(&liturgical, candidates.clone())?;

            if resolution.celebrated.octave.is_some() {
                for nth in 2.. {
                    let Some(day) = resolution.celebrated.octave_day(nth) else {
                        break;
                    };
                    let on = date + Duration::days(i64::from(nth) - 1);
                    octave_days.entry(on).or_default().push(day);
                }
            }

            for transfer in &resolution.transfers {
                queue.insert((date, seq), transfer.clone());
                seq += 1;
            }

            states.push(DayState {
                date: liturgical,
                candidates,
                resolution,
                transferred_in: None,
            });
        }

        // ====================================================================
        // PASS 2: deferred placement of transferred feasts
        // ====================================================================
        let mut placement_events = Vec::new();

        while let Some(((origin, _), observance)) = queue.pop_first() {
            let start = (origin - anchors.advent).num_days() as usize + 1;

            let target = (start..states.len()).find(|&i| {
                let state = &states[i];
                let season = state.date.season;
                state.transferred_in.is_none()
                    && self.resolver.key(&state.resolution.celebrated, season)
                        < self.resolver.key(&observance, season)
            });

            let Some(i) = target else {
                debug!(observance = %observance.name, %origin, "transfer unplaced");
                placement_events.push(AuditEvent::Unplaced {
                    observance: observance.id.clone(),
                    from: origin,
                });
                continue;
            };

            let state = &mut states[i];
            let mut candidates = state.candidates.clone();
            candidates.push(observance.clone());
            let resolution = self.resolver.resolve(&state.date, candidates)?;

            debug!(observance = %observance.name, from = %origin, to = %state.date.date, "transferred");
            placement_events.push(AuditEvent::Transferred {
                observance: observance.id.clone(),
                from: origin,
                to: state.date.date,
            });

            // Feasts newly displaced by the placement must move on in turn
            for displaced in &resolution.transfers {
                if !state.resolution.transfers.iter().any(|t| t.id == displaced.id) {
                    queue.insert((state.date.date, seq), displaced.clone());
                    seq += 1;
                }
            }

            state.resolution = resolution;
            state.transferred_in = Some(TransferredObservance { observance, origin });
        }

        // ====================================================================
        // ASSEMBLY
        // ====================================================================
        let mut audit = Vec::new();
        let mut resolved = Vec::with_capacity(states.len());

        for state in states {
            let date = state.date.date;
            let resolution = state.resolution;

            if let Some(rival) = &resolution.tie {
                audit.push(AuditEvent::Tie {
                    date,
                    chosen: resolution.celebrated.id.clone(),
                    rejected: rival.id.clone(),
                });
            }
            for omitted in &resolution.omitted {
                audit.push(AuditEvent::Omitted {
                    date,
                    observance: omitted.id.clone(),
                });
            }

            resolved.push(ResolvedDay {
                date: state.date,
                celebrated: resolution.celebrated,
                commemorations: resolution.commemorations,
                transferred_in: state.transferred_in,
            });
        }

        audit.extend(placement_events);
        audit.sort_by_key(AuditEvent::date);

        info!(
            year,
            days = resolved.len(),
            audit = audit.len(),
            "liturgical year built"
        );

        Ok(LiturgicalYear {
            year,
            days: resolved,
            audit,
        })
    }
}

// ============================================================================
// TESTS
// ============================================================================
