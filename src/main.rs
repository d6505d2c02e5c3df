mod cli;

use std::process;

use anyhow::{Context as AnyhowContext, Result};
use clap::Parser;

use ordo::{
    logging, AuditEvent, FeastRegistry, IcsExporter, LiturgicalCalendar, OrdoConfig, PropersIndex,
};

use crate::cli::Cli;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("❌ Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    println!("📅 Ordo - 1962 Roman calendar, years {} to {}", cli.start_year, cli.end_year);
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    // 1. Configuration
    let mut config = match &cli.config {
        Some(path) => OrdoConfig::from_file(path)?,
        None => OrdoConfig::default(),
    };
    if let Some(output) = cli.output {
        config = config.with_output(output);
    }
    if let Some(propers) = cli.propers {
        config = config.with_propers(propers);
    }

    // 2. Build calendar
    println!("\n🔧 Resolving liturgical years...");
    let calendar = LiturgicalCalendar::build_with(
        FeastRegistry::global(),
        &config.rubrics,
        cli.start_year,
        cli.end_year,
    )
    .context("Failed to build calendar")?;
    println!("✓ Resolved {} days", calendar.len());

    let transfers = calendar
        .audit()
        .filter(|e| matches!(e, AuditEvent::Transferred { .. }))
        .count();
    println!("✓ {} feasts transferred, {} audit events", transfers, calendar.audit().count());

    // 3. Propers index
    let propers = match &config.export.propers {
        Some(path) => {
            println!("\n📂 Loading propers index...");
            let index = PropersIndex::from_file(path)?;
            println!("✓ Loaded {} entries", index.len());
            Some(index)
        }
        None => None,
    };

    // 4. Export
    println!("\n💾 Writing {:?}...", config.export.output);
    let mut exporter = IcsExporter::new(&config.export);
    if let Some(index) = &propers {
        exporter = exporter.with_propers(index);
    }
    let written = exporter.write(&calendar, &config.export.output)?;

    println!("\n━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("✅ {} events written to {:?}", written, config.export.output);

    Ok(())
}
