//! Benchmark target discovery
//!
//! A target is any regular file in the bench directory carrying the source
//! extension; its name is the file stem. Targets are returned sorted by name
//! so repeated runs visit them in the same order on every platform.

use std::fmt;
use std::fs;
use std::path::Path;

use crate::config::LayoutConfig;
use crate::error::SweepError;

/// A benchmark target, known only by its name.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BenchTarget {
    name: String,
}

impl BenchTarget {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for BenchTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Fail unless the project manifest exists in `root`.
pub fn check_manifest(root: &Path, layout: &LayoutConfig) -> Result<(), SweepError> {
    if root.join(&layout.manifest).is_file() {
        Ok(())
    } else {
        Err(SweepError::MissingManifest {
            manifest: layout.manifest.clone(),
            root: root.to_path_buf(),
        })
    }
}

/// Enumerate the benchmark targets of the project rooted at `root`.
pub fn discover_targets(
    root: &Path,
    layout: &LayoutConfig,
) -> Result<Vec<BenchTarget>, SweepError> {
    let bench_dir = root.join(&layout.bench_dir);

    if !bench_dir.is_dir() {
        return Err(SweepError::MissingBenchDirectory {
            path: Path::new(&layout.bench_dir).to_path_buf(),
        });
    }

    let entries = fs::read_dir(&bench_dir).map_err(|source| SweepError::BenchDirectoryRead {
        path: bench_dir.clone(),
        source,
    })?;

    let mut targets = Vec::new();

    for entry in entries {
        let entry = entry.map_err(|source| SweepError::BenchDirectoryRead {
            path: bench_dir.clone(),
            source,
        })?;
        let path = entry.path();

        // Subdirectories (e.g. shared bench helpers) are not targets
        if !path.is_file() {
            continue;
        }

        let matches_extension = path
            .extension()
            .map(|ext| ext == layout.source_extension.as_str())
            .unwrap_or(false);
        if !matches_extension {
            continue;
        }

        match path.file_stem().and_then(|stem| stem.to_str()) {
            Some(stem) if !stem.is_empty() => targets.push(BenchTarget::new(stem)),
            _ => {
                tracing::warn!(path = %path.display(), "skipping bench file without a UTF-8 name");
            }
        }
    }

    targets.sort();
    tracing::debug!(count = targets.len(), dir = %bench_dir.display(), "discovered bench targets");

    Ok(targets)
}
