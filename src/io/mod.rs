//! Text input/output adapters.
//!
//! Keeps file formats and file access out of the selection algorithms.
//!
//! - **`parser`**: fixed-format job and goodie files → records
//! - **`report`**: results → text or JSON
//! - **`runner`**: read → select → write, one file each way

mod parser;
mod report;
mod runner;

pub use parser::{parse_goodies, parse_jobs, GoodieInput};
pub use report::{render_goodie_window, render_job_schedule, OutputFormat};
pub use runner::{run_goodies, run_jobs};
