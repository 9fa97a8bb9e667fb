use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::error::SweepError;

/// Name of the optional configuration file looked up in the project root.
pub const CONFIG_FILE_NAME: &str = "flamesweep.toml";

/// Where things live inside the project being profiled
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LayoutConfig {
    /// Manifest whose presence marks the project root
    #[serde(default = "default_manifest")]
    pub manifest: String,

    /// Directory holding one source file per benchmark target
    #[serde(default = "default_bench_dir")]
    pub bench_dir: String,

    /// Extension (without the dot) a file needs to count as a target
    #[serde(default = "default_source_extension")]
    pub source_extension: String,

    /// Directory receiving the generated flamegraphs
    #[serde(default = "default_output_dir")]
    pub output_dir: String,

    /// Prefix of each artifact file name, followed by the target name and `.svg`
    #[serde(default = "default_artifact_prefix")]
    pub artifact_prefix: String,
}

fn default_manifest() -> String { "Cargo.toml".to_string() }
fn default_bench_dir() -> String { "benches".to_string() }
fn default_source_extension() -> String { "rs".to_string() }
fn default_output_dir() -> String { "flamegraphs_output".to_string() }
fn default_artifact_prefix() -> String { "flamegraph_".to_string() }

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            manifest: default_manifest(),
            bench_dir: default_bench_dir(),
            source_extension: default_source_extension(),
            output_dir: default_output_dir(),
            artifact_prefix: default_artifact_prefix(),
        }
    }
}

/// How the profiler is invoked
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ProfilerConfig {
    /// Executable to launch
    #[serde(default = "default_program")]
    pub program: String,

    /// First argument, selecting the flamegraph subcommand
    #[serde(default = "default_subcommand")]
    pub subcommand: String,

    /// Arguments forwarded to the benchmark harness after `--`
    #[serde(default = "default_harness_args")]
    pub harness_args: Vec<String>,
}

fn default_program() -> String { "cargo".to_string() }
fn default_subcommand() -> String { "flamegraph".to_string() }
fn default_harness_args() -> Vec<String> { vec!["--bench".to_string()] }

impl Default for ProfilerConfig {
    fn default() -> Self {
        Self {
            program: default_program(),
            subcommand: default_subcommand(),
            harness_args: default_harness_args(),
        }
    }
}

/// Run-level behavior
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RunConfig {
    /// Exit non-zero when at least one target failed to profile
    #[serde(default)]
    pub fail_on_error: bool,
}

/// Complete flamesweep configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SweepConfig {
    #[serde(default)]
    pub layout: LayoutConfig,

    #[serde(default)]
    pub profiler: ProfilerConfig,

    #[serde(default)]
    pub run: RunConfig,
}

impl SweepConfig {
    /// Load the configuration for the project rooted at `root`.
    ///
    /// A missing `flamesweep.toml` yields the defaults. A file that exists but
    /// cannot be read or parsed is an error.
    pub fn load(root: &Path) -> Result<Self, SweepError> {
        let path = root.join(CONFIG_FILE_NAME);
        if !path.is_file() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        tracing::debug!(path = %path.display(), "loading config file");
        Self::from_file(&path)
    }

    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, SweepError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|e| SweepError::InvalidConfig {
            path: path.to_path_buf(),
            detail: e.to_string(),
        })?;
        toml::from_str(&contents).map_err(|e| SweepError::InvalidConfig {
            path: path.to_path_buf(),
            detail: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::{NamedTempFile, TempDir};

    #[test]
    fn test_default_config() {
        let config = SweepConfig::default();
        assert_eq!(config.layout.manifest, "Cargo.toml");
        assert_eq!(config.layout.bench_dir, "benches");
        assert_eq!(config.layout.source_extension, "rs");
        assert_eq!(config.layout.output_dir, "flamegraphs_output");
        assert_eq!(config.layout.artifact_prefix, "flamegraph_");
        assert_eq!(config.profiler.program, "cargo");
        assert_eq!(config.profiler.subcommand, "flamegraph");
        assert_eq!(config.profiler.harness_args, vec!["--bench".to_string()]);
        assert!(!config.run.fail_on_error);
    }

    #[test]
    fn test_full_config_file() {
        let toml_content = r#"
            [layout]
            manifest = "Cargo.toml"
            bench_dir = "perf"
            source_extension = "bench"
            output_dir = "profiles"
            artifact_prefix = "fg-"

            [profiler]
            program = "cargo"
            subcommand = "flamegraph"
            harness_args = []

            [run]
            fail_on_error = true
        "#;

        let temp_file = NamedTempFile::new().unwrap();
        fs::write(temp_file.path(), toml_content).unwrap();

        let config = SweepConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.layout.bench_dir, "perf");
        assert_eq!(config.layout.source_extension, "bench");
        assert_eq!(config.layout.artifact_prefix, "fg-");
        assert!(config.profiler.harness_args.is_empty());
        assert!(config.run.fail_on_error);
    }

    #[test]
    fn test_partial_config_file() {
        let toml_content = r#"
            [layout]
            output_dir = "profiles"

            [profiler]
            harness_args = ["--bench", "--noplot"]
        "#;

        let temp_file = NamedTempFile::new().unwrap();
        fs::write(temp_file.path(), toml_content).unwrap();

        let config = SweepConfig::from_file(temp_file.path()).unwrap();

        // Specified values
        assert_eq!(config.layout.output_dir, "profiles");
        assert_eq!(config.profiler.harness_args, vec!["--bench", "--noplot"]);

        // Default values for unspecified fields
        assert_eq!(config.layout.bench_dir, "benches");
        assert_eq!(config.profiler.program, "cargo");
        assert!(!config.run.fail_on_error);
    }

    #[test]
    fn test_load_without_file_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let config = SweepConfig::load(dir.path()).unwrap();
        assert_eq!(config, SweepConfig::default());
    }

    #[test]
    fn test_load_rejects_malformed_file() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILE_NAME), "[layout\nbench_dir = 3").unwrap();

        match SweepConfig::load(dir.path()) {
            Err(SweepError::InvalidConfig { path, .. }) => {
                assert_eq!(path, dir.path().join(CONFIG_FILE_NAME));
            }
            other => panic!("expected InvalidConfig, got {:?}", other),
        }
    }
}
