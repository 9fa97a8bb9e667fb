use std::io;
use std::path::PathBuf;
use thiserror::Error;

use crate::executor::ProcessStatus;

#[derive(Debug, Error)]
pub enum SweepError {
    #[error(
        "{manifest} not found in {}; run flamesweep from the root of a Cargo project",
        root.display()
    )]
    MissingManifest { manifest: String, root: PathBuf },

    #[error("benchmark directory {} not found", path.display())]
    MissingBenchDirectory { path: PathBuf },

    #[error("failed to read benchmark directory {}: {source}", path.display())]
    BenchDirectoryRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to create output directory {}: {source}", path.display())]
    OutputDirectory {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid config file {}: {detail}", path.display())]
    InvalidConfig { path: PathBuf, detail: String },

    #[error("command `{command}` returned {status}")]
    ProfilerExited {
        target: String,
        command: String,
        status: ProcessStatus,
    },

    #[error("failed to launch `{command}`: {source}")]
    ProfilerSpawn {
        target: String,
        command: String,
        #[source]
        source: io::Error,
    },
}
