//! Structural checks on job selections.
//!
//! Verifies that a selection is usable as a schedule. Detects:
//! - Pairs of selected jobs whose intervals overlap
//! - Selected jobs that do not occur in the source list
//!
//! The runner applies these checks after every selection.

use std::cmp::Ordering;

use crate::models::Job;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two selected jobs overlap.
    Conflict,
    /// A selected job is not present in the source jobs (or is selected
    /// more times than it occurs).
    UnknownJob,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates that `selected` is a non-conflicting sub-multiset of `jobs`.
///
/// Checks:
/// 1. Every selected job matches a distinct source job
/// 2. No selected job overlaps an earlier-starting one (half-open intervals)
///
/// Each overlapping job is reported once, against the earlier job that
/// reaches furthest.
///
/// # Complexity
/// O((n + m) log(n + m)): both lists are sorted, then merged and swept.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_selection(jobs: &[Job], selected: &[Job]) -> ValidationResult {
    let mut errors = Vec::new();

    // Match selected jobs against source jobs as sorted multisets
    let source = sorted_by_interval(jobs);
    let mut next = 0;
    for job in sorted_by_interval(selected) {
        while next < source.len() && interval_order(source[next], job) == Ordering::Less {
            next += 1;
        }
        if next < source.len() && interval_order(source[next], job) == Ordering::Equal {
            next += 1;
        } else {
            errors.push(ValidationError::new(
                ValidationErrorKind::UnknownJob,
                format!(
                    "Selected job [{}, {}) with profit {} is not in the input",
                    job.start(),
                    job.end(),
                    job.profit()
                ),
            ));
        }
    }

    for (earlier, later) in overlapping_pairs(selected) {
        errors.push(ValidationError::new(
            ValidationErrorKind::Conflict,
            format!(
                "Jobs [{}, {}) and [{}, {}) overlap",
                earlier.start(),
                earlier.end(),
                later.start(),
                later.end()
            ),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Whether no two jobs in `jobs` overlap.
pub fn is_non_conflicting(jobs: &[Job]) -> bool {
    overlapping_pairs(jobs).is_empty()
}

/// Sweeps jobs in (start, end) order, pairing each job that overlaps an
/// earlier one with the earlier job whose end reaches furthest.
///
/// If a job overlaps any earlier job it also overlaps that furthest-reaching
/// one, so every overlapping job is found in a single pass.
fn overlapping_pairs(jobs: &[Job]) -> Vec<(&Job, &Job)> {
    let mut order: Vec<&Job> = jobs.iter().collect();
    order.sort_by_key(|job| (job.start(), job.end()));

    let mut pairs = Vec::new();
    let mut reach: Option<&Job> = None;
    for job in order {
        match reach {
            Some(furthest) => {
                if furthest.conflicts_with(job) {
                    pairs.push((furthest, job));
                }
                if job.end() > furthest.end() {
                    reach = Some(job);
                }
            }
            None => reach = Some(job),
        }
    }
    pairs
}

fn sorted_by_interval(jobs: &[Job]) -> Vec<&Job> {
    let mut order: Vec<&Job> = jobs.iter().collect();
    order.sort_by(|a, b| interval_order(a, b));
    order
}

fn interval_order(a: &Job, b: &Job) -> Ordering {
    (a.start(), a.end())
        .cmp(&(b.start(), b.end()))
        .then_with(|| a.profit().total_cmp(&b.profit()))
}
