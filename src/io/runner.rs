//! File-based entry points.
//!
//! Each run reads one input file, computes one selection, and writes one
//! output file. Nothing is written when parsing or selection fails.

use std::fs;
use std::path::Path;

use tracing::{info, warn};

use super::parser::{parse_goodies, parse_jobs};
use super::report::{render_goodie_window, render_job_schedule, OutputFormat};
use crate::distribution::{headcount_from_declared, select_min_spread_window, GoodieWindow};
use crate::error::{Error, Result};
use crate::scheduling::JobSchedule;
use crate::validation::validate_selection;

/// Reads jobs from `input`, selects the maximum-profit subset, and writes
/// what remains for others to `output`.
pub fn run_jobs(input: &Path, output: &Path, format: OutputFormat) -> Result<JobSchedule> {
    let text = read_input(input)?;
    let jobs = parse_jobs(&text)?;

    let schedule = JobSchedule::plan(&jobs);
    if let Err(errors) = validate_selection(&jobs, &schedule.selected) {
        for e in &errors {
            warn!(kind = ?e.kind, "{}", e.message);
        }
    }
    info!(
        jobs = jobs.len(),
        selected = schedule.selected_count(),
        selected_profit = schedule.selected_profit,
        remaining = schedule.complement.count,
        remaining_profit = schedule.complement.total_profit,
        "job selection complete"
    );

    write_output(output, &render_job_schedule(&schedule, format)?)?;
    Ok(schedule)
}

/// Reads goodies and a headcount from `input`, selects the minimum-spread
/// window, and writes it to `output`.
pub fn run_goodies(input: &Path, output: &Path, format: OutputFormat) -> Result<GoodieWindow> {
    let text = read_input(input)?;
    let parsed = parse_goodies(&text)?;

    let headcount = headcount_from_declared(parsed.headcount)?;
    let window = select_min_spread_window(headcount, &parsed.goodies)?;
    info!(
        goodies = parsed.goodies.len(),
        headcount,
        lowest = ?window.min_price(),
        highest = ?window.max_price(),
        spread = window.spread,
        "goodie selection complete"
    );

    write_output(output, &render_goodie_window(&window, format)?)?;
    Ok(window)
}

fn read_input(path: &Path) -> Result<String> {
    info!(path = %path.display(), "reading input");
    fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn write_output(path: &Path, contents: &str) -> Result<()> {
    fs::write(path, contents).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), bytes = contents.len(), "wrote output");
    Ok(())
}
