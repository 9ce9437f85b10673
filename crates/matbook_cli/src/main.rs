use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use matbook_cli::{load_analysis, render_summary_text, render_to_file, summarize, CliError};
use matbook_report::ReportFormat;

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
enum FormatArg {
    Markdown,
    Pdf,
}

impl From<FormatArg> for ReportFormat {
    fn from(arg: FormatArg) -> ReportFormat {
        match arg {
            FormatArg::Markdown => ReportFormat::Markdown,
            FormatArg::Pdf => ReportFormat::Pdf,
        }
    }
}

#[derive(Parser)]
#[command(name = "matbook", about = "Render material analysis reports", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render a completed analysis snapshot to markdown or PDF
    Render {
        /// Path to the analysis snapshot JSON
        #[arg(long)]
        analysis: PathBuf,
        #[arg(long, value_enum, default_value = "markdown")]
        format: FormatArg,
        /// Output path; defaults to a timestamp-derived filename
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Print a summary of a completed analysis snapshot
    Summary {
        /// Path to the analysis snapshot JSON
        #[arg(long)]
        analysis: PathBuf,
        /// Emit the summary as JSON
        #[arg(long)]
        json: bool,
    },
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::Render {
            analysis,
            format,
            out,
        } => {
            let snapshot = load_analysis(&analysis)?;
            let outcome = render_to_file(&snapshot, format.into(), out)?;
            println!("wrote {} ({} bytes)", outcome.path.display(), outcome.bytes);
            println!("sha256: {}", outcome.sha256);
            Ok(())
        }
        Command::Summary { analysis, json } => {
            let snapshot = load_analysis(&analysis)?;
            let summary = summarize(&snapshot);
            if json {
                let encoded = serde_json::to_string_pretty(&summary)
                    .map_err(|e| CliError::Json(e.to_string()))?;
                println!("{encoded}");
            } else {
                print!("{}", render_summary_text(&summary));
            }
            Ok(())
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
