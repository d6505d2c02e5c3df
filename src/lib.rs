// Ordo - Core Library
// 1962 Roman calendar engine, shared by the CLI and the integration tests

pub mod error;
pub mod datemath;
pub mod rank;
pub mod observance;
pub mod season;
mod sanctoral;
pub mod registry;
pub mod resolver;
pub mod year;
pub mod calendar;
pub mod config;
pub mod propers;
pub mod ics;
pub mod logging;

// Re-export commonly used types
pub use error::OrdoError;
pub use datemath::{
    compute_easter, compute_moveable, first_sunday_of_advent, liturgical_year_span,
    MAX_YEAR, MIN_YEAR,
};
pub use rank::{Class, PrecedenceKey, Rank};
pub use observance::{DateRule, Observance, Octave};
pub use season::{LiturgicalDate, Season, YearAnchors};
pub use registry::{FeastRegistry, YearTable};
pub use resolver::{PrecedenceResolver, Resolution};
pub use year::{
    AuditEvent, LiturgicalYear, LiturgicalYearBuilder, ResolvedDay, TransferredObservance,
};
pub use calendar::{build_calendar, LiturgicalCalendar};
pub use config::{ExportConfig, OrdoConfig, RubricConfig};
pub use propers::{PropersIndex, ProperEntry};
pub use ics::IcsExporter;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
