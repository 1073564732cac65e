use chrono::NaiveDate;
use std::fmt;

use crate::models::ExtractionOutcome;

/// Aggregated outcomes of one run plus the day it was generated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    generated_on: NaiveDate,
    outcomes: Vec<ExtractionOutcome>,
}

impl Report {
    pub(crate) fn new(generated_on: NaiveDate, outcomes: Vec<ExtractionOutcome>) -> Self {
        Self {
            generated_on,
            outcomes,
        }
    }

    pub fn generated_on(&self) -> NaiveDate {
        self.generated_on
    }

    pub fn outcomes(&self) -> &[ExtractionOutcome] {
        &self.outcomes
    }

    pub fn failures(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_failure()).count()
    }

    pub fn header(&self) -> String {
        format!("Price report for {}", self.generated_on.format("%Y-%m-%d"))
    }

    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.header())?;
        for outcome in &self.outcomes {
            write!(f, "\n- {}: {}", outcome.name(), outcome.summary())?;
        }
        Ok(())
    }
}
