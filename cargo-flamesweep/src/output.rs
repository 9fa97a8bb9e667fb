//! Console output for a sweep
//!
//! Everything the operator sees besides the profiler's own output, which is
//! passed straight through to the terminal.

use colored::*;
use flamesweep_core::{BenchTarget, ProfilerCommand, Reporter, SweepError, SweepSummary};
use std::path::Path;

/// `1 bench target` / `3 bench targets`
pub fn pluralize(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("{} {}", count, noun)
    } else {
        format!("{} {}s", count, noun)
    }
}

/// Comma-separated target names, or `none`
pub fn format_target_list(targets: &[BenchTarget]) -> String {
    if targets.is_empty() {
        return "none".to_string();
    }
    targets
        .iter()
        .map(BenchTarget::name)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Print the tool header
pub fn print_header() {
    println!("flamesweep - flamegraphs for every bench target");
    println!("===============================================\n");
}

/// Print an error that ended the sweep
pub fn print_fatal(err: &anyhow::Error) {
    eprintln!("{} {:#}", "error:".red().bold(), err);
}

/// Reporter writing progress to stdout and failures to stderr
#[derive(Debug, Default)]
pub struct ConsoleReporter;

impl ConsoleReporter {
    pub fn new() -> Self {
        Self
    }
}

impl Reporter for ConsoleReporter {
    fn targets_discovered(&mut self, targets: &[BenchTarget]) {
        println!(
            "{} {}: {}",
            "Found".green().bold(),
            pluralize(targets.len(), "bench target"),
            format_target_list(targets).cyan()
        );
    }

    fn target_started(&mut self, target: &BenchTarget, command: &ProfilerCommand) {
        println!();
        println!("{} {}", "Profiling".green().bold(), target.name().cyan().bold());
        println!("        {}", command.to_string().dimmed());
    }

    fn target_succeeded(&mut self, _target: &BenchTarget, artifact: &Path) {
        println!("{} {}", "Generated".green().bold(), artifact.display());
    }

    fn target_failed(&mut self, target: &BenchTarget, error: &SweepError) {
        eprintln!(
            "{} {}: {}",
            "FAILED".red().bold(),
            target.name().cyan(),
            error
        );
    }

    fn finished(&mut self, summary: &SweepSummary) {
        println!();
        println!("{}", "─".repeat(60).dimmed());
        println!(
            "{} {} total: {} {}, {} {}",
            "Summary:".cyan().bold(),
            summary.total(),
            summary.succeeded(),
            "succeeded".green(),
            summary.failed(),
            if summary.has_failures() {
                "failed".red().bold()
            } else {
                "failed".dimmed()
            }
        );

        for (target, _) in summary.failures() {
            println!("  {} {}", "-".red(), target.name());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pluralize() {
        assert_eq!(pluralize(0, "bench target"), "0 bench targets");
        assert_eq!(pluralize(1, "bench target"), "1 bench target");
        assert_eq!(pluralize(7, "bench target"), "7 bench targets");
    }

    #[test]
    fn test_format_target_list() {
        assert_eq!(format_target_list(&[]), "none");
        assert_eq!(
            format_target_list(&[BenchTarget::new("alpha"), BenchTarget::new("beta")]),
            "alpha, beta"
        );
    }
}
