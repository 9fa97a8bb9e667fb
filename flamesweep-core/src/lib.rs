//! Core of flamesweep: find the benchmark targets of a Cargo project and
//! produce one flamegraph per target by running an external profiler.
//!
//! ```ignore
//! use flamesweep_core::{SweepConfig, SystemExecutor, TargetRunner};
//!
//! let root = std::env::current_dir()?;
//! let config = SweepConfig::load(&root)?;
//! let summary = TargetRunner::new(root, config).run(&mut SystemExecutor, &mut reporter)?;
//! ```

pub mod command;
pub mod config;
pub mod discovery;
pub mod error;
pub mod executor;
pub mod report;
pub mod runner;

pub use command::{artifact_path, ProfilerCommand};
pub use config::{LayoutConfig, ProfilerConfig, RunConfig, SweepConfig, CONFIG_FILE_NAME};
pub use discovery::{check_manifest, discover_targets, BenchTarget};
pub use error::SweepError;
pub use executor::{CommandExecutor, ProcessStatus, SystemExecutor};
pub use report::{Reporter, SweepSummary, TargetOutcome};
pub use runner::TargetRunner;
