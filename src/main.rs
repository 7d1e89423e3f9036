use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::filter::LevelFilter;

use polyeval::export::{JsonLinesExporter, RecordSink};
use polyeval::parse;
use polyeval::pipeline::{self, RunConfig};
use polyeval::{PolyError, Result};

/// Evaluates every polynomial in a coefficient file at a single point.
#[derive(Parser)]
#[command(name = "polyeval", version)]
struct Cli {
    /// Input file with one semicolon-separated coefficient line per polynomial
    #[arg(long, default_value = "input.txt")]
    input: PathBuf,

    /// Output file receiving one formatted result per input line
    #[arg(long, default_value = "output.txt")]
    output: PathBuf,

    /// Also export each polynomial as a tagged record to this file
    #[arg(long, value_name = "PATH")]
    record: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = if cli.verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::INFO
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .init();

    match execute(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report(&err);
            ExitCode::FAILURE
        }
    }
}

fn execute(cli: Cli) -> Result<()> {
    let x = prompt_for_point()?;

    // The stale record file goes away before any line is processed.
    let mut exporter = match &cli.record {
        Some(path) => Some(JsonLinesExporter::create(path)?),
        None => None,
    };
    let sink = exporter.as_mut().map(|e| e as &mut dyn RecordSink);

    let config = RunConfig::new(cli.input, cli.output);
    let summary = pipeline::run(&config, x, sink)?;

    println!(
        "evaluated {} function(s) at x = {x}; results written to {}",
        summary.lines,
        config.output.display()
    );
    Ok(())
}

fn prompt_for_point() -> Result<f64> {
    print!("Enter the point at which the functions should be evaluated: ");
    io::stdout().flush().map_err(PolyError::Stdin)?;

    let mut buffer = String::new();
    io::stdin()
        .read_line(&mut buffer)
        .map_err(PolyError::Stdin)?;
    parse::parse_point(&buffer)
}

fn report(err: &PolyError) {
    eprintln!("error: {err}");
    let mut source = std::error::Error::source(err);
    while let Some(cause) = source {
        eprintln!("  caused by: {cause}");
        source = cause.source();
    }
}
