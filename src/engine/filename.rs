//! Filename composition by file/artifact type.

use std::collections::BTreeMap;

use crate::domain::error::PathError;
use crate::engine::template;

/// Compose a filename for `file_type` from its configured pattern.
///
/// The extension is whatever literal suffix the pattern bakes in; the
/// composer never attaches one itself.
pub fn compose(
    file_type: &str,
    variables: &BTreeMap<String, String>,
    patterns: &BTreeMap<String, String>,
) -> Result<String, PathError> {
    let pattern = lookup(file_type, patterns)?;
    template::render(&format!("filename pattern '{file_type}'"), pattern, variables)
}

/// The literal extension baked into a file type's configured pattern, without
/// the leading dot. `None` when the pattern has no literal extension (no dot,
/// or the suffix after the last dot contains a placeholder).
pub fn extension<'a>(
    file_type: &str,
    patterns: &'a BTreeMap<String, String>,
) -> Result<Option<&'a str>, PathError> {
    let pattern = lookup(file_type, patterns)?;
    let Some((_, suffix)) = pattern.rsplit_once('.') else {
        return Ok(None);
    };
    if suffix.is_empty() || suffix.contains(['{', '}']) {
        return Ok(None);
    }
    Ok(Some(suffix))
}

fn lookup<'a>(
    file_type: &str,
    patterns: &'a BTreeMap<String, String>,
) -> Result<&'a String, PathError> {
    patterns.get(file_type).ok_or_else(|| PathError::UnknownFileType {
        file_type: file_type.to_string(),
        available: patterns.keys().cloned().collect::<Vec<_>>().join(", "),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn patterns() -> BTreeMap<String, String> {
        [
            ("maya_scene", "{shot_clean}_{task}_master_{version_v}.ma"),
            ("nuke_script", "{shot_clean}_{task}_comp_{version_v}.nk"),
            ("plain", "notes"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
    }

    fn variables() -> BTreeMap<String, String> {
        [("shot_clean", "SH0090"), ("task", "lighting"), ("version_v", "v003")]
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn composes_filename_from_pattern() {
        let filename = compose("maya_scene", &variables(), &patterns()).unwrap();
        assert_eq!(filename, "SH0090_lighting_master_v003.ma");
    }

    #[test]
    fn unknown_file_type_is_rejected() {
        let err = compose("blender_scene", &variables(), &patterns()).unwrap_err();
        assert!(matches!(
            err,
            PathError::UnknownFileType { file_type, available }
                if file_type == "blender_scene" && available.contains("maya_scene")
        ));
    }

    #[test]
    fn missing_pattern_variable_is_rejected() {
        let mut incomplete = variables();
        incomplete.remove("task");
        let err = compose("maya_scene", &incomplete, &patterns()).unwrap_err();
        assert!(matches!(err, PathError::UnresolvedVariable { name, .. } if name == "task"));
    }

    #[test]
    fn exposes_configured_extension() {
        assert_eq!(extension("maya_scene", &patterns()).unwrap(), Some("ma"));
        assert_eq!(extension("nuke_script", &patterns()).unwrap(), Some("nk"));
        assert_eq!(extension("plain", &patterns()).unwrap(), None);
    }
}
