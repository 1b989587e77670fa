//! Minimum-spread goodie distribution.
//!
//! Picks `headcount` items whose prices are as even as possible, so that
//! the most and least expensive chosen items differ by the least amount.
//! After sorting by price, the optimum is always a contiguous window.

mod window;

pub use window::{headcount_from_declared, select_min_spread_window, GoodieWindow};
