//! The sweep itself: manifest check, target discovery, output directory
//! setup, then one profiler run per target.

use std::fs;
use std::path::PathBuf;

use crate::command::{artifact_path, ProfilerCommand};
use crate::config::SweepConfig;
use crate::discovery::{check_manifest, discover_targets, BenchTarget};
use crate::error::SweepError;
use crate::executor::CommandExecutor;
use crate::report::{Reporter, SweepSummary, TargetOutcome};

/// Profiles every benchmark target of one project, one after another.
#[derive(Debug, Clone)]
pub struct TargetRunner {
    root: PathBuf,
    config: SweepConfig,
}

impl TargetRunner {
    pub fn new(root: impl Into<PathBuf>, config: SweepConfig) -> Self {
        Self {
            root: root.into(),
            config,
        }
    }

    /// Create a runner for `root` using its `flamesweep.toml`, if any.
    ///
    /// When the config file is broken and the default manifest is missing
    /// too, the missing manifest is reported: the directory is most likely
    /// not a project root at all.
    pub fn load(root: impl Into<PathBuf>) -> Result<Self, SweepError> {
        let root = root.into();
        let config = match SweepConfig::load(&root) {
            Ok(config) => config,
            Err(err) => {
                check_manifest(&root, &SweepConfig::default().layout)?;
                return Err(err);
            }
        };
        Ok(Self::new(root, config))
    }

    pub fn config(&self) -> &SweepConfig {
        &self.config
    }

    /// Run the whole sweep.
    ///
    /// Returns `Err` only for fatal problems (missing manifest, missing bench
    /// directory, unusable output directory), all of which are detected
    /// before any profiler is started. Per-target failures are collected in
    /// the returned summary.
    pub fn run<E, R>(&self, executor: &mut E, reporter: &mut R) -> Result<SweepSummary, SweepError>
    where
        E: CommandExecutor,
        R: Reporter,
    {
        let layout = &self.config.layout;

        check_manifest(&self.root, layout)?;
        let targets = discover_targets(&self.root, layout)?;
        self.ensure_output_dir()?;

        reporter.targets_discovered(&targets);

        let mut summary = SweepSummary::default();
        for target in targets {
            let result = self.profile_target(&target, executor, reporter);
            summary.outcomes.push(TargetOutcome { target, result });
        }

        reporter.finished(&summary);
        Ok(summary)
    }

    /// Create the output directory if it does not exist yet.
    pub fn ensure_output_dir(&self) -> Result<PathBuf, SweepError> {
        let dir = self.root.join(&self.config.layout.output_dir);
        fs::create_dir_all(&dir).map_err(|source| SweepError::OutputDirectory {
            path: dir.clone(),
            source,
        })?;
        Ok(dir)
    }

    /// Profile a single target, reporting start and outcome.
    ///
    /// On success returns the artifact path relative to the project root.
    pub fn profile_target<E, R>(
        &self,
        target: &BenchTarget,
        executor: &mut E,
        reporter: &mut R,
    ) -> Result<PathBuf, SweepError>
    where
        E: CommandExecutor,
        R: Reporter,
    {
        let artifact = artifact_path(&self.config.layout, target);
        let command = ProfilerCommand::for_target(&self.config.profiler, target, &artifact);

        reporter.target_started(target, &command);

        let result = match executor.run(&command, &self.root) {
            Ok(status) if status.success() => Ok(artifact),
            Ok(status) => Err(SweepError::ProfilerExited {
                target: target.name().to_string(),
                command: command.to_string(),
                status,
            }),
            Err(source) => Err(SweepError::ProfilerSpawn {
                target: target.name().to_string(),
                command: command.to_string(),
                source,
            }),
        };

        match &result {
            Ok(artifact) => reporter.target_succeeded(target, artifact),
            Err(err) => {
                tracing::debug!(bench = target.name(), error = %err, "profiling failed");
                reporter.target_failed(target, err);
            }
        }

        result
    }
}
