//! Weighted interval scheduling.
//!
//! # Algorithm
//!
//! 1. Order jobs chronologically, then stably by end time, so every job's
//!    compatible predecessors form a prefix of the ordering.
//! 2. `best[i]` is the maximum profit over the first `i` jobs. Job `i`
//!    either joins the best prefix ending at its last compatible job, or is
//!    skipped in favour of `best[i]`. It is taken only when strictly better.
//! 3. Walk the recorded decisions backwards to recover the chosen jobs.
//!
//! # Complexity
//! O(n log n): sorting plus one binary search per job.
//!
//! # Reference
//! Kleinberg & Tardos (2005), "Algorithm Design", Ch. 6.1: Weighted Interval Scheduling

use crate::models::Job;
use crate::validation::is_non_conflicting;

/// Selects the non-conflicting subset of `jobs` with maximum total profit.
///
/// The input may be in any order. The result is sorted by ascending start
/// time. When taking a job ties with skipping it, the job is skipped; the
/// earliest-ending job is always taken since nothing precedes it.
///
/// # Example
///
/// ```
/// use u_select::models::Job;
/// use u_select::scheduling::select_max_profit_jobs;
///
/// let jobs = vec![
///     Job::new(900, 1030, 100.0).unwrap(),
///     Job::new(1000, 1200, 500.0).unwrap(),
///     Job::new(1100, 1200, 300.0).unwrap(),
/// ];
/// let selected = select_max_profit_jobs(&jobs);
/// assert_eq!(selected, vec![Job::new(1000, 1200, 500.0).unwrap()]);
/// ```
pub fn select_max_profit_jobs(jobs: &[Job]) -> Vec<Job> {
    let mut order: Vec<&Job> = jobs.iter().collect();
    order.sort_by_key(|job| job.start());
    order.sort_by_key(|job| job.end());

    let n = order.len();
    let mut best = vec![0.0_f64; n + 1];
    let mut taken = vec![false; n];
    let mut predecessor = Vec::with_capacity(n);

    for i in 0..n {
        let prior = last_compatible_by_end(&order, i);
        let include = order[i].profit() + prior.map_or(0.0, |p| best[p + 1]);
        let exclude = best[i];

        if i == 0 || include > exclude {
            best[i + 1] = include;
            taken[i] = true;
        } else {
            best[i + 1] = exclude;
        }
        predecessor.push(prior);
    }

    let mut selected = Vec::new();
    let mut i = n;
    while i > 0 {
        let idx = i - 1;
        if taken[idx] {
            selected.push(order[idx].clone());
            i = predecessor[idx].map_or(0, |p| p + 1);
        } else {
            i = idx;
        }
    }

    selected.reverse();
    selected.sort_by_key(|job| job.start());
    debug_assert!(is_non_conflicting(&selected));
    selected
}

/// Finds the highest index before `index` whose job ends at or before
/// `jobs[index]` starts.
///
/// Linear backward scan; valid for any ordering of `jobs`.
///
/// # Panics
/// Panics if `index` is out of bounds.
pub fn last_compatible(jobs: &[Job], index: usize) -> Option<usize> {
    let start = jobs[index].start();
    (0..index).rev().find(|&j| jobs[j].end() <= start)
}

/// Binary-search variant of [`last_compatible`] for jobs sorted by end time.
fn last_compatible_by_end(by_end: &[&Job], index: usize) -> Option<usize> {
    let start = by_end[index].start();
    by_end[..index]
        .partition_point(|job| job.end() <= start)
        .checked_sub(1)
}

/// Sum of profits.
pub fn total_profit(jobs: &[Job]) -> f64 {
    jobs.iter().map(Job::profit).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::validate_selection;
    use rand::rngs::SmallRng;
    use rand::{Rng, SeedableRng};

    fn job(start: i64, end: i64, profit: f64) -> Job {
        Job::new(start, end, profit).unwrap()
    }

    /// Exhaustive search over all subsets.
    fn brute_force_best(jobs: &[Job]) -> f64 {
        let n = jobs.len();
        let mut best = 0.0_f64;
        for mask in 0u32..(1 << n) {
            let subset: Vec<&Job> = (0..n)
                .filter(|i| mask & (1 << i) != 0)
                .map(|i| &jobs[i])
                .collect();
            let feasible = subset.iter().enumerate().all(|(a, ja)| {
                subset[a + 1..].iter().all(|jb| !ja.conflicts_with(jb))
            });
            if feasible {
                best = best.max(subset.iter().map(|j| j.profit()).sum());
            }
        }
        best
    }

    fn random_jobs(rng: &mut SmallRng, n: usize) -> Vec<Job> {
        (0..n)
            .map(|_| {
                let start = rng.random_range(0..20);
                let end = start + rng.random_range(0..8);
                let profit = f64::from(rng.random_range(0..50_u32));
                job(start, end, profit)
            })
            .collect()
    }

    #[test]
    fn test_select_empty() {
        assert!(select_max_profit_jobs(&[]).is_empty());
    }

    #[test]
    fn test_select_single_job() {
        let jobs = vec![job(900, 1000, 40.0)];
        assert_eq!(select_max_profit_jobs(&jobs), jobs);
    }

    #[test]
    fn test_select_single_zero_profit_job() {
        let jobs = vec![job(900, 1000, 0.0)];
        assert_eq!(select_max_profit_jobs(&jobs).len(), 1);
    }

    #[test]
    fn test_select_overlapping_high_profit() {
        let jobs = vec![
            job(900, 1030, 100.0),
            job(1000, 1200, 500.0),
            job(1100, 1200, 300.0),
        ];
        assert_eq!(select_max_profit_jobs(&jobs), vec![job(1000, 1200, 500.0)]);
    }

    #[test]
    fn test_select_middle_job_wins() {
        let jobs = vec![
            job(900, 1000, 250.0),
            job(945, 1200, 550.0),
            job(1130, 1500, 150.0),
        ];
        assert_eq!(select_max_profit_jobs(&jobs), vec![job(945, 1200, 550.0)]);
    }

    #[test]
    fn test_select_equal_profits_prefers_more_jobs() {
        let jobs = vec![
            job(900, 1030, 100.0),
            job(1000, 1200, 100.0),
            job(1100, 1200, 100.0),
        ];
        assert_eq!(
            select_max_profit_jobs(&jobs),
            vec![job(900, 1030, 100.0), job(1100, 1200, 100.0)]
        );
    }

    #[test]
    fn test_tie_prefers_exclusion() {
        // Taking the second job gives 100, same as keeping the first.
        let jobs = vec![job(0, 10, 100.0), job(5, 15, 100.0)];
        assert_eq!(select_max_profit_jobs(&jobs), vec![job(0, 10, 100.0)]);
    }

    #[test]
    fn test_touching_jobs_chain() {
        let jobs = vec![job(900, 1000, 10.0), job(1000, 1100, 10.0), job(1100, 1200, 10.0)];
        assert_eq!(select_max_profit_jobs(&jobs), jobs);
    }

    #[test]
    fn test_best_of_all_prior_not_previous() {
        // The long early job is dominated only when compared with the
        // best prefix, not with the immediately preceding job.
        let jobs = vec![
            job(0, 100, 60.0),
            job(0, 10, 50.0),
            job(10, 20, 50.0),
            job(15, 30, 1.0),
        ];
        let selected = select_max_profit_jobs(&jobs);
        assert_eq!(total_profit(&selected), 100.0);
        assert_eq!(selected, vec![job(0, 10, 50.0), job(10, 20, 50.0)]);
    }

    #[test]
    fn test_unsorted_input() {
        let jobs = vec![
            job(1100, 1200, 300.0),
            job(900, 1030, 100.0),
            job(1000, 1200, 500.0),
        ];
        assert_eq!(select_max_profit_jobs(&jobs), vec![job(1000, 1200, 500.0)]);
    }

    #[test]
    fn test_result_sorted_by_start() {
        let jobs = vec![job(20, 30, 5.0), job(0, 10, 5.0), job(10, 20, 5.0)];
        let starts: Vec<i64> = select_max_profit_jobs(&jobs)
            .iter()
            .map(Job::start)
            .collect();
        assert_eq!(starts, vec![0, 10, 20]);
    }

    #[test]
    fn test_last_compatible_linear() {
        let jobs = vec![job(900, 1000, 1.0), job(945, 1200, 1.0), job(1130, 1500, 1.0)];
        assert_eq!(last_compatible(&jobs, 0), None);
        assert_eq!(last_compatible(&jobs, 1), None);
        assert_eq!(last_compatible(&jobs, 2), Some(0));
    }

    #[test]
    fn test_last_compatible_variants_agree() {
        let mut rng = SmallRng::seed_from_u64(7);
        for _ in 0..50 {
            let mut jobs = random_jobs(&mut rng, 8);
            jobs.sort_by_key(|j| j.end());
            let refs: Vec<&Job> = jobs.iter().collect();
            for i in 0..jobs.len() {
                assert_eq!(last_compatible(&jobs, i), last_compatible_by_end(&refs, i));
            }
        }
    }

    #[test]
    fn test_optimal_against_brute_force() {
        let mut rng = SmallRng::seed_from_u64(42);
        for _ in 0..200 {
            let n = rng.random_range(0..=10);
            let jobs = random_jobs(&mut rng, n);
            let selected = select_max_profit_jobs(&jobs);

            assert!(validate_selection(&jobs, &selected).is_ok());
            assert_eq!(total_profit(&selected), brute_force_best(&jobs));
        }
    }
}
