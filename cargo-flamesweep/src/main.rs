mod output;

use anyhow::{Context, Result};
use clap::Parser;
use flamesweep_core::{SystemExecutor, TargetRunner};
use std::env;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Generate a flamegraph for every bench target of the Cargo project in the
/// current directory.
///
/// Targets are the `*.rs` files in `benches/`. Each one is profiled with
/// `cargo flamegraph --bench <target> -o flamegraphs_output/flamegraph_<target>.svg -- --bench`.
/// Layout and profiler invocation can be adjusted in an optional `flamesweep.toml`.
#[derive(Parser, Debug)]
#[command(name = "cargo-flamesweep", bin_name = "cargo flamesweep", version, about)]
struct Cli {}

/// Command line without the subcommand name cargo inserts.
fn cli_args() -> Vec<String> {
    let mut args: Vec<String> = env::args().collect();
    // Called as `cargo flamesweep`: cargo passes "flamesweep" as first arg
    if args.len() > 1 && args[1] == "flamesweep" {
        args.remove(1);
    }
    args
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .try_init();
}

fn main() -> ExitCode {
    let _cli = Cli::parse_from(cli_args());
    init_tracing();

    match run() {
        Ok(code) => code,
        Err(err) => {
            output::print_fatal(&err);
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<ExitCode> {
    let project_root = env::current_dir().context("Failed to get current directory")?;
    let runner = TargetRunner::load(project_root)?;

    output::print_header();

    let mut reporter = output::ConsoleReporter::new();
    let summary = runner.run(&mut SystemExecutor, &mut reporter)?;

    if runner.config().run.fail_on_error && summary.has_failures() {
        Ok(ExitCode::FAILURE)
    } else {
        Ok(ExitCode::SUCCESS)
    }
}
