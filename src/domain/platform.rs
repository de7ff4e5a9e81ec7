use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::error::PathError;

/// Target platform for path generation.
///
/// Always an explicit input: the engine never inspects the running operating
/// system, so callers can generate paths for a different target machine or
/// force a platform in tests. [`Platform::current`] exists for thin wrappers
/// (such as the CLI) that want to default from the local environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Windows,
    Linux,
    MacOs,
}

impl Platform {
    /// All supported platforms.
    pub const ALL: [Platform; 3] = [Platform::Windows, Platform::Linux, Platform::MacOs];

    /// Key naming this platform's table in the configured root mapping.
    pub fn key(&self) -> &'static str {
        match self {
            Platform::Windows => "windows",
            Platform::Linux => "linux",
            Platform::MacOs => "macos",
        }
    }

    /// Default directory separator convention for this platform.
    ///
    /// A project's root-mapping table may override this (studio conventions
    /// commonly mandate forward slashes even on Windows).
    pub fn default_separator(&self) -> char {
        match self {
            Platform::Windows => '\\',
            Platform::Linux | Platform::MacOs => '/',
        }
    }

    /// Platform of the machine this process is running on.
    pub fn current() -> Self {
        if cfg!(windows) {
            Platform::Windows
        } else if cfg!(target_os = "macos") {
            Platform::MacOs
        } else {
            Platform::Linux
        }
    }
}

impl FromStr for Platform {
    type Err = PathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "windows" | "win" => Ok(Platform::Windows),
            "linux" => Ok(Platform::Linux),
            "macos" | "mac" | "darwin" => Ok(Platform::MacOs),
            other => Err(PathError::UnsupportedPlatform(other.to_string())),
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
