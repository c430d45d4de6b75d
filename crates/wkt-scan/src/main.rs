use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use wkt_scan::output;
use wkt_scan::{
    CliOverrides, FileReport, Settings, Summary, Target, expand_inputs, extract_inputs, locate,
};

#[derive(Parser)]
#[command(name = "wkt-scan")]
#[command(about = "Find WKT geometry literals embedded in text files")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file (defaults to ./wkt-scan.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log scanning details to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract every geometry from the given files
    Extract {
        /// Input files, glob patterns like "logs/**/*.log", or - for stdin
        #[arg(required = true)]
        files: Vec<String>,

        /// Stop after this many geometries per file
        #[arg(short = 'n', long)]
        max_tokens: Option<usize>,

        /// Output results as JSONL
        #[arg(long)]
        json: bool,

        /// Also write the JSONL results to a file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show the geometry at a position in a file
    Locate {
        /// File to scan
        file: PathBuf,

        #[command(flatten)]
        position: PositionArgs,

        /// Output the geometry as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the recognized geometry keywords
    Kinds,
}

#[derive(Args)]
#[group(required = true, multiple = true)]
struct PositionArgs {
    /// Byte offset (0-based)
    #[arg(long, conflicts_with_all = ["line", "column"])]
    offset: Option<usize>,

    /// Line number (1-based)
    #[arg(long, requires = "column")]
    line: Option<usize>,

    /// Column in characters (1-based)
    #[arg(long, requires = "line")]
    column: Option<usize>,
}

impl PositionArgs {
    fn target(&self) -> Option<Target> {
        match (self.offset, self.line, self.column) {
            (Some(offset), _, _) => Some(Target::Offset(offset)),
            (None, Some(line), Some(column)) => Some(Target::LineColumn { line, column }),
            _ => None,
        }
    }
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose {
        "wkt_scan=debug,wkt_scanner=trace"
    } else {
        "wkt_scan=info"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn load_settings(cli_overrides: &CliOverrides) -> Result<Settings> {
    let cwd = std::env::current_dir().context("Failed to determine the current directory")?;
    let settings = Settings::load(cli_overrides, &cwd)?;
    if !settings.color {
        colored::control::set_override(false);
    }
    Ok(settings)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Extract {
            files,
            max_tokens,
            json,
            output: output_path,
        } => {
            let settings = load_settings(&CliOverrides {
                max_tokens,
                json,
                config: cli.config,
            })?;
            let inputs = expand_inputs(&files)?;
            let reports = extract_inputs(&inputs, settings.max_tokens)?;

            let stdout = std::io::stdout();
            let mut out = stdout.lock();
            if settings.json {
                output::write_jsonl(&mut out, &reports)?;
            } else {
                output::write_text(&mut out, &reports)?;
                write!(out, "{}", output::format_summary(&Summary::from_reports(&reports)))?;
            }
            out.flush()?;

            if let Some(output_path) = output_path {
                write_jsonl_file(&output_path, &reports)?;
            }
            Ok(())
        }

        Commands::Locate {
            file,
            position,
            json,
        } => {
            let settings = load_settings(&CliOverrides {
                max_tokens: None,
                json,
                config: cli.config,
            })?;
            let target = position
                .target()
                .context("Either --offset or both --line and --column are required")?;
            let text = wkt_scan::inputs::read_file(&file)?;
            let Some(token) = locate(&file, &text, target)? else {
                anyhow::bail!("no geometry at position");
            };

            let report = FileReport {
                file: file.display().to_string(),
                tokens: vec![token],
            };
            let stdout = std::io::stdout();
            let mut out = stdout.lock();
            if settings.json {
                output::write_jsonl(&mut out, std::slice::from_ref(&report))?;
            } else {
                output::write_text(&mut out, std::slice::from_ref(&report))?;
            }
            out.flush()?;
            Ok(())
        }

        Commands::Kinds => {
            print!("{}", output::format_kinds());
            Ok(())
        }
    }
}

fn write_jsonl_file(path: &Path, reports: &[FileReport]) -> Result<()> {
    let mut buffer = Vec::new();
    output::write_jsonl(&mut buffer, reports)?;
    std::fs::write(path, buffer)
        .with_context(|| format!("Failed to write output file: {}", path.display()))
}
