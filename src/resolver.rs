// ⚖️ Precedence Resolver - Decide one date among competing observances
// One winner is celebrated, the rest are commemorated, transferred or omitted
//
// Rules applied in order:
// 1. Highest PrecedenceKey is celebrated (definition order breaks ties)
// 2. Commemorable candidates admitted by the day's class become commemorations
// 3. Transferable candidates (I class feasts) are queued for another day
// 4. Everything else is omitted

use crate::config::RubricConfig;
use crate::error::OrdoError;
use crate::observance::Observance;
use crate::rank::{Class, PrecedenceKey, Rank};
use crate::season::{LiturgicalDate, Season};
use tracing::debug;

// ============================================================================
// RESOLUTION
// ============================================================================

/// Outcome of resolving one date.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolution {
    pub celebrated: Observance,

    /// Retained commemorations, highest key first
    pub commemorations: Vec<Observance>,

    /// Outranked observances that must move to a later day
    pub transfers: Vec<Observance>,

    /// Outranked observances dropped for the day
    pub omitted: Vec<Observance>,

    /// Candidate that tied the celebrated one and lost on definition order
    pub tie: Option<Observance>,
}

// ============================================================================
// RESOLVER
// ============================================================================

#[derive(Debug, Clone, Default)]
pub struct PrecedenceResolver {
    config: RubricConfig,
}

impl PrecedenceResolver {
    pub fn new(config: RubricConfig) -> Self {
        PrecedenceResolver { config }
    }

    /// Precedence key of an observance in a given season
    pub fn key(&self, observance: &Observance, season: Season) -> PrecedenceKey {
        PrecedenceKey::new(observance.rank, observance.precedence, season)
    }

    /// Resolve the candidates of one date
    pub fn resolve(
        &self,
        date: &LiturgicalDate,
        candidates: Vec<Observance>,
    ) -> Result<Resolution, OrdoError> {
        let mut ranked: Vec<(PrecedenceKey, Observance)> = candidates
            .into_iter()
            .map(|o| (self.key(&o, date.season), o))
            .collect();

        // Highest key first, then definition order
        ranked.sort_by(|(ka, a), (kb, b)| kb.cmp(ka).then_with(|| a.order.cmp(&b.order)));

        let mut rest = ranked.into_iter();
        let (top, celebrated) = rest.next().ok_or(OrdoError::RulesGap { date: date.date })?;
        let rest: Vec<(PrecedenceKey, Observance)> = rest.collect();

        let tie = match rest.first() {
            Some((key, rival)) if *key == top => {
                if self.config.strict_ties {
                    return Err(OrdoError::ResolutionTie {
                        date: date.date,
                        chosen: celebrated.name.clone(),
                        rejected: rival.name.clone(),
                    });
                }
                debug!(date = %date.date, chosen = %celebrated.name, rejected = %rival.name, "resolution tie");
                Some(rival.clone())
            }
            _ => None,
        };

        let limit = self.commemoration_limit(&celebrated);
        let mut commemorations = Vec::new();
        let mut transfers = Vec::new();
        let mut omitted = Vec::new();

        for (_, observance) in rest {
            if observance.transferable {
                transfers.push(observance);
            } else if observance.commemorable
                && commemorations.len() < limit
                && admits(&celebrated.rank, &observance)
            {
                commemorations.push(observance);
            } else {
                omitted.push(observance);
            }
        }

        Ok(Resolution {
            celebrated,
            commemorations,
            transfers,
            omitted,
            tie,
        })
    }

    /// Most commemorations the celebrated observance's day admits
    fn commemoration_limit(&self, celebrated: &Observance) -> usize {
        if !celebrated.admits_commemorations {
            return 0;
        }
        let limit = match celebrated.class() {
            Class::I | Class::II => 1,
            Class::III | Class::IV => 2,
        };
        limit.min(self.config.max_commemorations)
    }
}

/// Commemoration floor of a day celebrated with `celebrated`
fn admits(celebrated: &Rank, candidate: &Observance) -> bool {
    match *celebrated {
        r if r.class() == Class::I => candidate.rank.is_privileged(),
        Rank::Sunday(Class::II) => candidate.class() >= Class::II,
        _ => true,
    }
}

// ============================================================================
// TESTS
// ============================================================================
