use std::io::Write;
use std::path::PathBuf;

use clap::Parser;
use log::error;
use log::info;
use log::LevelFilter;
use u_dioph::export::{save_csv, DEFAULT_EXPORT_PATH};
use u_dioph::report::Report;
use u_dioph::search::{Domain, SearchConfig, SearchOutcome, SearchRunner, Variant};
use u_dioph::Result;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// The variant to solve: A (C1-C5), B (C1-C12) or C (C1-C17). Any other
    /// value reports no solution with zero attempts.
    #[arg(default_value = "A")]
    variant: String,

    /// Smallest value any variable may take.
    #[arg(long = "min", default_value_t = 1)]
    min: i64,

    /// Largest value any variable may take.
    #[arg(long = "max", default_value_t = 120)]
    max: i64,

    /// Search root values in parallel. Needs the `parallel` feature; the
    /// result is the same either way.
    #[arg(short = 'p', long = "parallel", default_value_t = false)]
    parallel: bool,

    /// Where to write the solution as CSV.
    #[arg(short = 'o', long = "output", default_value = DEFAULT_EXPORT_PATH)]
    output: PathBuf,

    /// Do not write the CSV file.
    #[arg(long = "no-export", default_value_t = false)]
    no_export: bool,

    /// Enables log message output from the search
    #[arg(short = 'v', long = "verbose", default_value_t = false)]
    verbose: bool,
}

fn configure_logging(verbose: bool) {
    let level_filter = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    env_logger::Builder::new()
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
        .filter_level(level_filter)
        .target(env_logger::Target::Stderr)
        .init();
    info!("Logging successfully configured");
}

fn main() {
    match run() {
        Ok(()) => {}
        Err(e) => {
            error!("Execution failed, error: {}", e);
            std::process::exit(1);
        }
    }
}

/// Builds the search configuration from the command line.
fn search_config(args: &Args) -> Result<SearchConfig> {
    let domain = Domain::new(args.min, args.max)?;
    Ok(SearchConfig::default()
        .with_domain(domain)
        .with_parallel(args.parallel))
}

/// Name shown in the report banner: the canonical variant name, or the
/// selector as given when it names no variant.
fn variant_label(selector: &str) -> String {
    match selector.parse::<Variant>() {
        Ok(variant) => variant.to_string(),
        Err(_) => selector.trim().to_owned(),
    }
}

/// Writes the CSV unless disabled. Returns whether a file was written.
fn export_solution(args: &Args, outcome: &SearchOutcome) -> Result<bool> {
    if args.no_export {
        return Ok(false);
    }
    save_csv(outcome, &args.output)
}

fn run() -> Result<()> {
    let args = Args::parse();
    configure_logging(args.verbose);

    let config = search_config(&args)?;
    let label = variant_label(&args.variant);

    println!("Bounded search - variant {label}");

    let outcome = match args.variant.parse::<Variant>() {
        Ok(variant) => SearchRunner::run(variant, &config),
        Err(e) => {
            info!("{e}");
            SearchOutcome::unsupported()
        }
    };

    print!("{}", Report::new(&label, &outcome));

    if export_solution(&args, &outcome)? {
        println!("Solution saved to {}", args.output.display());
    }

    match &outcome.assignment {
        Some(assignment) => println!("Final solution: {assignment}"),
        None => println!("No solution found"),
    }
    println!("Total variable assignments: {}", outcome.attempts);
    Ok(())
}
