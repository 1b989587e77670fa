//! Selection algorithms for the U-Engine ecosystem.
//!
//! Solves two independent batch selection problems over small in-memory
//! lists: choosing the most profitable set of non-overlapping jobs, and
//! choosing a group of items whose prices are as close together as possible.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Job`, `Goodie`
//! - **`scheduling`**: Weighted interval scheduling and its complement
//! - **`distribution`**: Minimum-spread window selection
//! - **`validation`**: Post-selection integrity checks (overlaps, membership)
//! - **`io`**: Fixed-format text parsers, report rendering, file entry points
//! - **`error`**: Error types
//!
//! # Architecture
//!
//! The algorithms in `scheduling` and `distribution` are pure functions
//! over slices; they perform no I/O and hold no global state. All file
//! handling lives in `io`.
//!
//! # References
//!
//! - Kleinberg & Tardos (2005), "Algorithm Design", Ch. 6.1
//! - Cormen et al. (2009), "Introduction to Algorithms", Ch. 16

pub mod distribution;
pub mod error;
pub mod io;
pub mod models;
pub mod scheduling;
pub mod validation;

pub use error::{Error, Result};
