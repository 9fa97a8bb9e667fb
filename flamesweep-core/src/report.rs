use std::path::{Path, PathBuf};

use crate::command::ProfilerCommand;
use crate::discovery::BenchTarget;
use crate::error::SweepError;

/// Result of profiling a single target.
#[derive(Debug)]
pub struct TargetOutcome {
    pub target: BenchTarget,
    /// Artifact path on success
    pub result: Result<PathBuf, SweepError>,
}

impl TargetOutcome {
    pub fn is_success(&self) -> bool {
        self.result.is_ok()
    }
}

/// All per-target outcomes of one sweep, in the order targets were visited.
#[derive(Debug, Default)]
pub struct SweepSummary {
    pub outcomes: Vec<TargetOutcome>,
}

impl SweepSummary {
    pub fn total(&self) -> usize {
        self.outcomes.len()
    }

    pub fn succeeded(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_success()).count()
    }

    pub fn failed(&self) -> usize {
        self.total() - self.succeeded()
    }

    pub fn has_failures(&self) -> bool {
        self.outcomes.iter().any(|o| !o.is_success())
    }

    /// Targets whose profiling failed, with the error for each
    pub fn failures(&self) -> impl Iterator<Item = (&BenchTarget, &SweepError)> {
        self.outcomes
            .iter()
            .filter_map(|o| o.result.as_ref().err().map(|e| (&o.target, e)))
    }
}

/// Receives progress events while a sweep runs.
///
/// Events arrive in order: `targets_discovered` once, then for every target
/// `target_started` followed by exactly one of `target_succeeded` or
/// `target_failed`, then `finished` once.
pub trait Reporter {
    fn targets_discovered(&mut self, targets: &[BenchTarget]);

    fn target_started(&mut self, target: &BenchTarget, command: &ProfilerCommand);

    fn target_succeeded(&mut self, target: &BenchTarget, artifact: &Path);

    fn target_failed(&mut self, target: &BenchTarget, error: &SweepError);

    fn finished(&mut self, summary: &SweepSummary);
}
