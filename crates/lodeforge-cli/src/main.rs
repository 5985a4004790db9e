mod logging;
mod report;
mod settings;

use std::path::PathBuf;
use std::time::Instant;

use clap::{Args, Parser, Subcommand};
use lodeforge_compile::{FeatureRegistry, load_directory};
use lodeforge_core::CompileError;
use lodeforge_rules::{CompileContext, rule_file_json_schema};
use thiserror::Error;

use logging::init_logging;
use report::{RunContext, RunReport, write_report};
use settings::{SETTINGS_FILE, load_settings};

#[derive(Debug, Error)]
enum CliError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json serialization error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid settings: {0}")]
    Settings(#[from] toml::de::Error),
    #[error("compile context error: {0}")]
    Context(#[from] CompileError),
    #[error("logging error: {0}")]
    Logging(String),
    #[error("{failed} rule(s) and {files} file(s) failed to load")]
    LoadFailed { failed: u64, files: usize },
}

#[derive(Parser, Debug)]
#[command(name = "lodeforge", version, about = "Ore generation rule compiler")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compile every rule file and report the outcome.
    Check(CheckArgs),
    /// Print the JSON Schema of a rule file.
    Schema,
}

#[derive(Args, Debug)]
struct CheckArgs {
    /// Settings file.
    #[arg(long, default_value = SETTINGS_FILE)]
    config: PathBuf,
    /// World generation directory, overriding the settings.
    #[arg(long)]
    dir: Option<PathBuf>,
    /// Load the vanilla rule file too.
    #[arg(long, default_value_t = false)]
    replace_vanilla: bool,
    /// Write a JSON report of the load to this path.
    #[arg(long)]
    report: Option<PathBuf>,
    /// Append JSON logs to this file instead of stderr.
    #[arg(long)]
    log_file: Option<PathBuf>,
    /// Exit with an error when any rule or file fails.
    #[arg(long, default_value_t = false)]
    strict: bool,
}

fn main() -> Result<(), CliError> {
    let cli = Cli::parse();

    match cli.command {
        Command::Check(args) => run_check(args),
        Command::Schema => {
            let schema = rule_file_json_schema();
            println!("{}", serde_json::to_string_pretty(&schema)?);
            Ok(())
        }
    }
}

fn run_check(args: CheckArgs) -> Result<(), CliError> {
    init_logging(args.log_file.as_deref())?;

    let mut settings = load_settings(&args.config)?;
    if let Some(dir) = args.dir {
        settings.world_gen_dir = dir;
    }
    settings.replace_vanilla |= args.replace_vanilla;

    let run = RunContext::start(&settings.world_gen_dir, settings.replace_vanilla);
    tracing::info!(
        event = "run_started",
        run_id = %run.run_id,
        dir = %settings.world_gen_dir.display(),
        replace_vanilla = settings.replace_vanilla,
    );
    let timer = Instant::now();

    let ctx = CompileContext::with_options(settings.catalog(), settings.context_options())?;
    let mut registry = FeatureRegistry::new();
    let load = load_directory(&ctx, &settings.loader_options(), &mut registry);

    let duration_ms = timer.elapsed().as_millis();
    println!(
        "{} feature(s) registered from {} file(s); {} rule failure(s), {} file failure(s)",
        load.registered_total,
        load.files.len(),
        load.failed_total,
        load.failed_files(),
    );
    for (code, count) in &load.failures_by_code {
        println!("  {code}: {count}");
    }

    if let Some(path) = &args.report {
        write_report(path, &RunReport::new(&run, &load, duration_ms))?;
        tracing::info!(event = "report_written", path = %path.display());
    }

    let status = if load.is_clean() { "clean" } else { "with_failures" };
    tracing::info!(
        event = "run_finished",
        run_id = %run.run_id,
        status = status,
        duration_ms = duration_ms,
    );

    if args.strict && !load.is_clean() {
        return Err(CliError::LoadFailed {
            failed: load.failed_total,
            files: load.failed_files(),
        });
    }
    Ok(())
}
