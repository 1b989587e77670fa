//! Selection summaries.
//!
//! Derives what the chosen jobs leave for others.
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Complement count | `len(jobs) - len(selected)` |
//! | Complement profit | `Σ profit(jobs) - Σ profit(selected)` |
//! | Selected profit | `Σ profit(selected)` |

use serde::{Deserialize, Serialize};

use super::interval::{select_max_profit_jobs, total_profit};
use crate::models::Job;

/// Jobs and profit not taken by a selection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Complement {
    /// Number of unselected jobs.
    pub count: usize,
    /// Total profit of unselected jobs.
    pub total_profit: f64,
}

/// Computes the complement of `selected` within `jobs`.
///
/// `selected` is expected to be a subset of `jobs`; the result is
/// computed from counts and sums only.
pub fn complement(jobs: &[Job], selected: &[Job]) -> Complement {
    Complement {
        count: jobs.len().saturating_sub(selected.len()),
        total_profit: total_profit(jobs) - total_profit(selected),
    }
}

/// A planned selection with its totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobSchedule {
    /// Chosen jobs in ascending start order.
    pub selected: Vec<Job>,
    /// Total profit of the chosen jobs.
    pub selected_profit: f64,
    /// What remains for others.
    pub complement: Complement,
}

impl JobSchedule {
    /// Selects the maximum-profit jobs and summarizes the result.
    pub fn plan(jobs: &[Job]) -> Self {
        let selected = select_max_profit_jobs(jobs);
        let complement = complement(jobs, &selected);
        Self {
            selected_profit: total_profit(&selected),
            selected,
            complement,
        }
    }

    /// Number of chosen jobs.
    pub fn selected_count(&self) -> usize {
        self.selected.len()
    }
}
