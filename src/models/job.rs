//! Job (weighted interval) model.
//!
//! A job occupies the half-open interval `[start, end)` and carries a
//! profit. Two jobs conflict only if their intervals overlap; a job ending
//! exactly when another starts does not conflict with it.
//!
//! # Time Representation
//! Times are plain integers. Input files use the HHMM clock encoding
//! (`"0930"` → `930`), which preserves ordering within a day; no minute
//! arithmetic is performed on them.
//!
//! # Reference
//! Kleinberg & Tardos (2005), "Algorithm Design", Ch. 6.1

use serde::{Deserialize, Serialize};

use crate::error::RecordError;

/// A job with a time interval and a profit.
///
/// Immutable after construction. Construction rejects `end < start` and
/// negative or non-finite profits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "JobFields")]
pub struct Job {
    start: i64,
    end: i64,
    profit: f64,
}

#[derive(Deserialize)]
struct JobFields {
    start: i64,
    end: i64,
    profit: f64,
}

impl TryFrom<JobFields> for Job {
    type Error = RecordError;

    fn try_from(fields: JobFields) -> Result<Self, Self::Error> {
        Job::new(fields.start, fields.end, fields.profit)
    }
}

impl Job {
    /// Creates a validated job.
    pub fn new(start: i64, end: i64, profit: f64) -> Result<Self, RecordError> {
        if end < start {
            return Err(RecordError::EndBeforeStart { start, end });
        }
        if !profit.is_finite() || profit < 0.0 {
            return Err(RecordError::InvalidProfit(profit));
        }
        Ok(Self { start, end, profit })
    }

    /// Start time.
    #[inline]
    pub fn start(&self) -> i64 {
        self.start
    }

    /// End time.
    #[inline]
    pub fn end(&self) -> i64 {
        self.end
    }

    /// Profit earned by taking this job.
    #[inline]
    pub fn profit(&self) -> f64 {
        self.profit
    }

    /// Whether the two half-open intervals overlap.
    pub fn conflicts_with(&self, other: &Job) -> bool {
        !(self.end <= other.start || other.end <= self.start)
    }
}
