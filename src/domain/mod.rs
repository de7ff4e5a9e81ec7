pub mod config;
pub mod error;
pub mod platform;
pub mod task;

pub use config::{
    NameCleaningRules, NameRule, PlatformRoots, ProjectConfig, ValidationReport, VersionSettings,
};
pub use error::PathError;
pub use platform::Platform;
pub use task::TaskDescriptor;
