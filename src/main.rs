use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use u_select::io::{run_goodies, run_jobs, OutputFormat};

#[derive(Parser)]
#[command(name = "u-select", version, about = "Job and goodie selection")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Pick the most profitable non-overlapping jobs and report what is left
    Jobs {
        /// Job input file
        #[arg(short, long, default_value = "jobs.input.txt")]
        input: PathBuf,
        /// Report output file
        #[arg(short, long, default_value = "jobs.output.txt")]
        output: PathBuf,
        /// Report format
        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },
    /// Pick goodies with the smallest price spread for every employee
    Goodies {
        /// Goodie input file
        #[arg(short, long, default_value = "goodies.input.txt")]
        input: PathBuf,
        /// Report output file
        #[arg(short, long, default_value = "goodies.output.txt")]
        output: PathBuf,
        /// Report format
        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Json,
}

impl From<Format> for OutputFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Text => OutputFormat::Text,
            Format::Json => OutputFormat::Json,
        }
    }
}

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Jobs {
            input,
            output,
            format,
        } => run_jobs(&input, &output, format.into()).map(|_| ()),
        Commands::Goodies {
            input,
            output,
            format,
        } => run_goodies(&input, &output, format.into()).map(|_| ()),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
