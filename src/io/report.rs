//! Report rendering.
//!
//! Text reports are the human-readable formats written by the CLI; JSON
//! reports serialize the full result.

use serde::{Deserialize, Serialize};

use crate::distribution::GoodieWindow;
use crate::error::Result;
use crate::scheduling::JobSchedule;

const JOB_HEADER: &str = "The number of tasks and earnings available for others:";
const GOODIE_HEADER: &str = "The goodies selected for distribution are:";
const SPREAD_PREFIX: &str =
    "And the difference between the chosen goodie with highest price and the lowest price is";

/// Output encoding.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Fixed human-readable text.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
}

/// Renders what a job selection leaves for others.
pub fn render_job_schedule(schedule: &JobSchedule, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(format!(
            "{JOB_HEADER}\nTasks: {}\nEarnings: {}\n",
            schedule.complement.count, schedule.complement.total_profit
        )),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(schedule)? + "\n"),
    }
}

/// Renders a chosen goodie window.
pub fn render_goodie_window(window: &GoodieWindow, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => {
            let chosen: String = window
                .chosen
                .iter()
                .map(|goodie| format!("{}: {}\n", goodie.name(), goodie.price()))
                .collect();
            Ok(format!(
                "{GOODIE_HEADER}\n{chosen}{SPREAD_PREFIX} {}\n",
                window.spread
            ))
        }
        OutputFormat::Json => Ok(serde_json::to_string_pretty(window)? + "\n"),
    }
}
