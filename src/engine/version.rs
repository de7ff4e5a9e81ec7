//! Version number formatting.

use crate::domain::config::VersionSettings;
use crate::domain::error::PathError;

/// Zero-padded rendering of a version number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormattedVersion {
    /// Zero-padded digits, e.g. "015".
    pub padded: String,
    /// "v"-prefixed display form, e.g. "v015".
    pub display: String,
}

/// Parse and zero-pad a version value.
///
/// Accepts a decimal string, optionally prefixed with `v` or `V`. An empty
/// value falls back to the configured default version. Values that cannot be
/// represented within the configured padding width fail with
/// [`PathError::InvalidVersion`] rather than silently widening or truncating.
pub fn format(version: &str, settings: &VersionSettings) -> Result<FormattedVersion, PathError> {
    let raw = version.trim();
    if raw.is_empty() {
        return format_number(settings.default_version, settings)
            .map_err(|_| PathError::invalid_version(version, "default version exceeds padding"));
    }
    let digits = raw.strip_prefix('v').or_else(|| raw.strip_prefix('V')).unwrap_or(raw);
    if digits.starts_with('-') {
        return Err(PathError::invalid_version(version, "version numbers cannot be negative"));
    }
    let number: u64 = digits
        .parse()
        .map_err(|_| PathError::invalid_version(version, "not a decimal version number"))?;
    format_number(number, settings).map_err(|_| overflow(version, settings.padding))
}

/// Zero-pad an already-numeric version.
pub fn format_number(
    version: u64,
    settings: &VersionSettings,
) -> Result<FormattedVersion, PathError> {
    let width = settings.padding;
    if let Some(cap) = 10u64.checked_pow(width as u32)
        && version >= cap
    {
        return Err(overflow(&version.to_string(), width));
    }
    let padded = format!("{version:0width$}");
    Ok(FormattedVersion { display: format!("v{padded}"), padded })
}

fn overflow(value: &str, width: usize) -> PathError {
    PathError::invalid_version(value, format!("does not fit the configured {width}-digit padding"))
}
