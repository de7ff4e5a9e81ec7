//! shotpath: deterministic, configuration-driven path and filename resolution
//! for studio pipeline tooling.
//!
//! Given a per-project configuration document, a task descriptor, a version
//! and a file type, the engine computes every path kind the pipeline cares
//! about (working file, render output, media, cache, submission) as exact
//! strings. It performs no file-system I/O, never checks that directories
//! exist, and takes the target platform as an explicit input so paths can be
//! generated for any machine.

pub mod cache;
pub mod domain;
pub mod engine;

#[cfg(test)]
pub(crate) mod testing;

use std::path::Path;

pub use cache::ProjectCache;
pub use domain::config::{
    NameCleaningRules, NameRule, PlatformRoots, ProjectConfig, ValidationReport, VersionSettings,
};
pub use domain::error::PathError;
pub use domain::platform::Platform;
pub use domain::task::TaskDescriptor;
pub use engine::builder::{PathBuilder, PathGenerationResult};

/// Resolve every path kind for one task using a configuration document on
/// disk.
///
/// Convenience wrapper over [`ProjectConfig::load`] + [`PathBuilder`]; callers
/// resolving many tasks for the same project should keep the builder (see
/// [`ProjectCache`]) instead of re-reading the document per call.
pub fn resolve(
    config_path: &Path,
    task: &TaskDescriptor,
    version: &str,
    file_type: &str,
    platform: Platform,
) -> Result<PathGenerationResult, PathError> {
    let config = ProjectConfig::load(config_path)?;
    let builder = PathBuilder::new(config)?;
    builder.generate_all_paths(task, version, file_type, platform)
}

/// Run pre-flight validation on a configuration document on disk, reporting
/// every problem at once.
pub fn validate_config_file(config_path: &Path) -> Result<ValidationReport, PathError> {
    let config = ProjectConfig::load(config_path)?;
    Ok(config.validate())
}
