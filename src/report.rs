use chrono::{Local, NaiveDate};

use crate::models::{ExtractionOutcome, Report};

/// Aggregates ordered outcomes into a [`Report`]. Pure apart from reading the clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReportBuilder;

impl ReportBuilder {
    pub fn new() -> Self {
        ReportBuilder
    }

    /// Builds a report stamped with today's local date.
    pub fn build(&self, outcomes: Vec<ExtractionOutcome>) -> Report {
        self.build_on(Local::now().date_naive(), outcomes)
    }

    pub fn build_on(&self, date: NaiveDate, outcomes: Vec<ExtractionOutcome>) -> Report {
        Report::new(date, outcomes)
    }
}
