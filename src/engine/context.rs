//! Platform root resolution and variable-context assembly.

use std::collections::BTreeMap;

use crate::domain::config::{PlatformRoots, ProjectConfig};
use crate::domain::error::PathError;
use crate::domain::platform::Platform;
use crate::domain::task::TaskDescriptor;
use crate::engine::template;
use crate::engine::version::FormattedVersion;

/// Cleaned identifier forms for one task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanedNames {
    pub sequence: String,
    pub shot: String,
    pub episode: String,
}

/// Root-mapping table for the requested platform.
pub fn roots_for(config: &ProjectConfig, platform: Platform) -> Result<&PlatformRoots, PathError> {
    config
        .root_mapping
        .get(platform.key())
        .ok_or_else(|| PathError::UnsupportedPlatform(platform.key().to_string()))
}

/// Directory separator for the requested platform, honoring a per-project
/// override in the root-mapping table.
pub fn separator_for(config: &ProjectConfig, platform: Platform) -> Result<char, PathError> {
    let table = roots_for(config, platform)?;
    Ok(table.separator.unwrap_or_else(|| platform.default_separator()))
}

/// Assemble the complete variable map for one task/version combination.
///
/// Later layers shadow earlier ones: platform roots first, then path
/// segments, cleaned identifiers, raw task fields, and version tokens. The
/// computed filename is inserted last by the orchestrator, after composition,
/// because it may itself reference any of the earlier variables.
///
/// Roots and path segments are path fragments, so their separators are
/// rewritten to the active platform convention here; identifier values and
/// the filename are never rewritten.
pub fn build(
    config: &ProjectConfig,
    task: &TaskDescriptor,
    cleaned: &CleanedNames,
    version: &FormattedVersion,
    platform: Platform,
) -> Result<BTreeMap<String, String>, PathError> {
    let roots = roots_for(config, platform)?;
    let separator = roots.separator.unwrap_or_else(|| platform.default_separator());

    let mut variables = BTreeMap::new();
    for (name, root) in &roots.roots {
        variables.insert(name.clone(), template::normalize_separators(root, separator));
    }
    for (name, segment) in &config.path_segments {
        variables.insert(name.clone(), template::normalize_separators(segment, separator));
    }
    variables.insert("sequence_clean".to_string(), cleaned.sequence.clone());
    variables.insert("shot_clean".to_string(), cleaned.shot.clone());
    variables.insert("episode_clean".to_string(), cleaned.episode.clone());
    variables.insert("project".to_string(), task.project.clone());
    variables.insert("episode".to_string(), task.episode.clone());
    variables.insert("sequence".to_string(), task.sequence.clone());
    variables.insert("shot".to_string(), task.shot.clone());
    variables.insert("task".to_string(), task.task.clone());
    if let Some(client) = &task.client {
        variables.insert("client".to_string(), client.clone());
    }
    variables.insert("version".to_string(), version.padded.clone());
    variables.insert("version_v".to_string(), version.display.clone());
    Ok(variables)
}
