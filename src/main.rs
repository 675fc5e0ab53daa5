use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};

use gov2qualtrics::application::SurveyConverter;

/// Convert an exported proposition CSV into a Qualtrics Advanced Format survey
#[derive(Parser)]
#[command(name = "gov2qualtrics")]
struct Cli {
    /// Path to the input CSV file
    #[arg(long = "input_csv")]
    input_csv: PathBuf,

    /// Output filename
    #[arg(long = "output_txt")]
    output_txt: PathBuf,
}

fn main() -> ExitCode {
    let _ = tracing_subscriber::fmt().with_env_filter("info").try_init();

    let cli = Cli::parse();

    let converter = SurveyConverter::new();
    match converter.convert(&cli.input_csv, &cli.output_txt) {
        Ok(result) => {
            info!(
                rows = result.row_count,
                elapsed_ms = result.processing_time_ms,
                output = %cli.output_txt.display(),
                "Survey written"
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %e, "Conversion failed");
            ExitCode::FAILURE
        }
    }
}
