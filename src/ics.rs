// 📤 iCalendar Export - One VEVENT per observance of every resolved day
// Serialization (escaping, folding, CRLF) is left to the icalendar crate
//
// With a propers index, only observances that have a URL get an event.
// Without one, every observance gets an event and no link.

use crate::calendar::LiturgicalCalendar;
use crate::config::ExportConfig;
use crate::propers::PropersIndex;
use anyhow::{Context as AnyhowContext, Result};
use chrono::{DateTime, NaiveDate, Utc};
use icalendar::{Calendar, Component, Event, EventLike, Property};
use std::fs;
use std::path::Path;
use tracing::info;
use uuid::Uuid;

// ============================================================================
// ENTRY
// ============================================================================

/// One exported observance, before serialization
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    pub uid: Uuid,
    pub date: NaiveDate,
    pub summary: String,
    pub description: Option<String>,
}

impl Entry {
    fn to_event(&self, stamp: DateTime<Utc>) -> Event {
        let mut event = Event::new();
        event
            .uid(&self.uid.to_string())
            .timestamp(stamp)
            .starts(self.date)
            .summary(&self.summary);
        if let Some(description) = &self.description {
            event.description(description);
        }
        event.done()
    }
}

// ============================================================================
// EXPORTER
// ============================================================================

pub struct IcsExporter<'a> {
    config: &'a ExportConfig,
    propers: Option<&'a PropersIndex>,
}

impl<'a> IcsExporter<'a> {
    pub fn new(config: &'a ExportConfig) -> Self {
        IcsExporter {
            config,
            propers: None,
        }
    }

    /// Builder: keep only observances the index links to
    pub fn with_propers(mut self, propers: &'a PropersIndex) -> Self {
        self.propers = Some(propers);
        self
    }

    /// Entries for the whole calendar, chronologically, celebrated first
    pub fn events(&self, calendar: &LiturgicalCalendar) -> Vec<Entry> {
        let mut events = Vec::new();

        for (date, day) in calendar.iter() {
            for observance in day.observances() {
                let description = match self.propers {
                    Some(index) => match index.url(&observance.name) {
                        Some(url) => Some(format!("<a href={}>{}</a>", url, observance.name)),
                        None => continue,
                    },
                    None => None,
                };

                events.push(Entry {
                    uid: Uuid::new_v4(),
                    date: date.date,
                    summary: observance.name.clone(),
                    description,
                });
            }
        }

        events
    }

    /// Render the VCALENDAR document with a fixed generation timestamp
    pub fn render_at(&self, events: &[Entry], stamp: DateTime<Utc>) -> String {
        let mut calendar = Calendar::empty();
        calendar
            .append_property(Property::new("PRODID", self.config.prodid.as_str()))
            .append_property(Property::new("VERSION", "2.0"))
            .append_property(Property::new("X-WR-CALNAME", self.config.calendar_name.as_str()))
            .append_property(Property::new(
                "X-WR-CALDESC",
                self.config.calendar_description.as_str(),
            ));

        for entry in events {
            calendar.push(entry.to_event(stamp));
        }

        calendar.to_string()
    }

    /// Write the calendar to `path`; returns the number of events written
    pub fn write<P: AsRef<Path>>(&self, calendar: &LiturgicalCalendar, path: P) -> Result<usize> {
        let events = self.events(calendar);
        let document = self.render_at(&events, Utc::now());

        fs::write(path.as_ref(), document)
            .with_context(|| format!("Failed to write calendar file: {:?}", path.as_ref()))?;

        info!(events = events.len(), path = ?path.as_ref(), "calendar exported");
        Ok(events.len())
    }
}

// ============================================================================
// TESTS
// ============================================================================
