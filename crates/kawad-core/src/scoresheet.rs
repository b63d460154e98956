//! Mutable judging form state.
//!
//! Scores are clamped at the point of entry; section and grand totals are
//! derived from the current mapping on every call, never stored.

use std::collections::HashMap;

use crate::error::{Error, Result};
use crate::rubric::{self, Criterion, Section};

/// Clamp a raw input value to a criterion's valid range
pub fn clamp_score(raw: i64, max: u32) -> u32 {
    raw.clamp(0, i64::from(max)) as u32
}

/// One judge's in-progress evaluation of one house
#[derive(Debug, Clone, Default)]
pub struct ScoreSheet {
    house: String,
    judge: String,
    pub remarks: String,
    scores: HashMap<&'static str, u32>,
}

impl ScoreSheet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn house(&self) -> &str {
        &self.house
    }

    pub fn set_house(&mut self, house: &str) {
        self.house = house.to_string();
    }

    pub fn judge(&self) -> &str {
        &self.judge
    }

    /// Judge names are stored upper-cased, matching the form's behavior
    pub fn set_judge(&mut self, judge: &str) {
        self.judge = judge.trim().to_uppercase();
    }

    /// Current score for a criterion, zero when untouched
    pub fn score(&self, criterion_id: &str) -> u32 {
        self.scores.get(criterion_id).copied().unwrap_or(0)
    }

    /// Clamp `raw` into the criterion's range and record it.
    ///
    /// Other entries are left untouched. Returns the stored value.
    pub fn set_score(&mut self, criterion: &'static Criterion, raw: i64) -> u32 {
        let score = clamp_score(raw, criterion.max_score);
        self.scores.insert(criterion.id, score);
        score
    }

    /// Sum of the section's criteria scores
    pub fn section_total(&self, section: &Section) -> u32 {
        section.criteria.iter().map(|c| self.score(c.id)).sum()
    }

    /// Sum of all section totals
    pub fn grand_total(&self) -> u32 {
        rubric::sections()
            .iter()
            .map(|s| self.section_total(s))
            .sum()
    }

    /// A sheet may only be submitted with a house and a judge name
    pub fn validate(&self) -> Result<()> {
        if self.house.is_empty() || self.judge.is_empty() {
            return Err(Error::IncompleteSheet);
        }
        Ok(())
    }

    /// Discard all entered data, ready for the next house
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}
