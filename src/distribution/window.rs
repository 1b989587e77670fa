//! Minimum-spread window selection.
//!
//! # Algorithm
//!
//! 1. Stable-sort goodies by ascending price.
//! 2. Slide a window of `headcount` consecutive items over the sorted list;
//!    the spread of a window is its last price minus its first.
//! 3. Keep the first window with the smallest spread (strict `<`).
//!
//! # Complexity
//! O(n log n) for the sort, O(n) for the scan.

use serde::{Deserialize, Serialize};

use crate::error::SelectionError;
use crate::models::Goodie;

/// A chosen window of goodies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoodieWindow {
    /// Chosen goodies in ascending price order.
    pub chosen: Vec<Goodie>,
    /// Highest minus lowest chosen price.
    pub spread: f64,
}

impl GoodieWindow {
    /// Lowest chosen price.
    pub fn min_price(&self) -> Option<f64> {
        self.chosen.first().map(Goodie::price)
    }

    /// Highest chosen price.
    pub fn max_price(&self) -> Option<f64> {
        self.chosen.last().map(Goodie::price)
    }
}

/// Chooses `headcount` goodies whose prices are as close together as possible.
///
/// # Errors
/// - [`SelectionError::InvalidHeadcount`] if `headcount` is zero.
/// - [`SelectionError::InsufficientItems`] if `headcount` exceeds the
///   number of goodies.
///
/// # Example
///
/// ```
/// use u_select::distribution::select_min_spread_window;
/// use u_select::models::Goodie;
///
/// let goodies = vec![
///     Goodie::new("a", 100.0).unwrap(),
///     Goodie::new("b", 500.0).unwrap(),
///     Goodie::new("c", 300.0).unwrap(),
/// ];
/// let window = select_min_spread_window(2, &goodies).unwrap();
/// assert_eq!(window.spread, 200.0);
/// assert_eq!(window.chosen[0].name(), "a");
/// assert_eq!(window.chosen[1].name(), "c");
/// ```
pub fn select_min_spread_window(
    headcount: usize,
    goodies: &[Goodie],
) -> Result<GoodieWindow, SelectionError> {
    if headcount == 0 {
        return Err(SelectionError::InvalidHeadcount { headcount: 0 });
    }
    if headcount > goodies.len() {
        return Err(SelectionError::InsufficientItems {
            requested: headcount,
            available: goodies.len(),
        });
    }

    let mut sorted: Vec<&Goodie> = goodies.iter().collect();
    sorted.sort_by(|a, b| a.price().total_cmp(&b.price()));

    let mut best_start = 0;
    let mut best_spread = f64::INFINITY;
    for (i, window) in sorted.windows(headcount).enumerate() {
        let spread = window[headcount - 1].price() - window[0].price();
        if spread < best_spread {
            best_spread = spread;
            best_start = i;
        }
    }

    Ok(GoodieWindow {
        chosen: sorted[best_start..best_start + headcount]
            .iter()
            .map(|&g| g.clone())
            .collect(),
        spread: best_spread,
    })
}

/// Converts a declared headcount into a window size.
///
/// # Errors
/// [`SelectionError::InvalidHeadcount`] for zero or negative values.
pub fn headcount_from_declared(raw: i64) -> Result<usize, SelectionError> {
    match usize::try_from(raw) {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(SelectionError::InvalidHeadcount { headcount: raw }),
    }
}
