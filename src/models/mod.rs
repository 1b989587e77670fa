//! Selection domain models.
//!
//! Plain immutable value types, validated at construction.
//!
//! | Type | Problem | Key fields |
//! |------|---------|-----------|
//! | Job | Weighted interval scheduling | start, end, profit |
//! | Goodie | Minimum-spread distribution | name, price |

mod goodie;
mod job;

pub use goodie::Goodie;
pub use job::Job;
