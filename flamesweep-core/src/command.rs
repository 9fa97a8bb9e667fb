use std::fmt;
use std::path::{Path, PathBuf};

use crate::config::{LayoutConfig, ProfilerConfig};
use crate::discovery::BenchTarget;

/// A command line as an ordered list of tokens, program first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfilerCommand {
    tokens: Vec<String>,
}

impl ProfilerCommand {
    /// Build the profiler invocation for one target:
    ///
    /// `<program> <subcommand> --bench <target> -o <output> -- <harness args...>`
    ///
    /// Everything after `--` goes to the benchmark harness, which makes it run
    /// in measurement mode instead of test mode.
    pub fn for_target(profiler: &ProfilerConfig, target: &BenchTarget, output: &Path) -> Self {
        let mut tokens = vec![
            profiler.program.clone(),
            profiler.subcommand.clone(),
            "--bench".to_string(),
            target.name().to_string(),
            "-o".to_string(),
            output.display().to_string(),
            "--".to_string(),
        ];
        tokens.extend(profiler.harness_args.iter().cloned());

        Self { tokens }
    }

    /// Wrap an arbitrary token list. Returns `None` when there is no program.
    pub fn from_tokens(tokens: Vec<String>) -> Option<Self> {
        if tokens.is_empty() {
            None
        } else {
            Some(Self { tokens })
        }
    }

    pub fn program(&self) -> &str {
        &self.tokens[0]
    }

    pub fn args(&self) -> &[String] {
        &self.tokens[1..]
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }
}

impl fmt::Display for ProfilerCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tokens.join(" "))
    }
}

/// Path of the flamegraph generated for `target`, relative to the project root.
pub fn artifact_path(layout: &LayoutConfig, target: &BenchTarget) -> PathBuf {
    Path::new(&layout.output_dir).join(format!("{}{}.svg", layout.artifact_prefix, target.name()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_template() {
        let target = BenchTarget::new("alpha");
        let output = artifact_path(&LayoutConfig::default(), &target);
        let command = ProfilerCommand::for_target(&ProfilerConfig::default(), &target, &output);

        assert_eq!(
            command.tokens(),
            &[
                "cargo",
                "flamegraph",
                "--bench",
                "alpha",
                "-o",
                "flamegraphs_output/flamegraph_alpha.svg",
                "--",
                "--bench",
            ]
        );
        assert_eq!(command.program(), "cargo");
        assert_eq!(command.args().len(), 7);
        assert_eq!(
            command.to_string(),
            "cargo flamegraph --bench alpha -o flamegraphs_output/flamegraph_alpha.svg -- --bench"
        );
    }

    #[test]
    fn test_custom_profiler_and_harness_args() {
        let profiler = ProfilerConfig {
            program: "cargo".to_string(),
            subcommand: "flamegraph".to_string(),
            harness_args: vec!["--bench".to_string(), "--noplot".to_string()],
        };
        let target = BenchTarget::new("routing");
        let output = Path::new("out/flamegraph_routing.svg");
        let command = ProfilerCommand::for_target(&profiler, &target, output);

        assert_eq!(&command.tokens()[6..], &["--", "--bench", "--noplot"]);
    }

    #[test]
    fn test_artifact_path_uses_layout() {
        let layout = LayoutConfig {
            output_dir: "profiles".to_string(),
            artifact_prefix: "fg-".to_string(),
            ..LayoutConfig::default()
        };
        assert_eq!(
            artifact_path(&layout, &BenchTarget::new("beta")),
            PathBuf::from("profiles/fg-beta.svg")
        );
    }

    #[test]
    fn test_from_tokens_requires_program() {
        assert!(ProfilerCommand::from_tokens(Vec::new()).is_none());
        let command = ProfilerCommand::from_tokens(vec!["true".to_string()]).unwrap();
        assert!(command.args().is_empty());
    }
}
