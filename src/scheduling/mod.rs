//! Weighted job scheduling.
//!
//! Chooses the maximum-profit set of non-overlapping jobs and reports
//! what that choice leaves for others.
//!
//! # Algorithm
//!
//! `select_max_profit_jobs` is the classic dynamic program over jobs
//! ordered by end time, with a binary search for each job's last
//! compatible predecessor. It is exact, not a heuristic.
//!
//! # References
//!
//! - Kleinberg & Tardos (2005), "Algorithm Design", Ch. 6.1
//! - Cormen et al. (2009), "Introduction to Algorithms", Ch. 16.1

mod interval;
mod summary;

pub use interval::{last_compatible, select_max_profit_jobs, total_profit};
pub use summary::{complement, Complement, JobSchedule};
