//! Output directory resolution.

use std::env;
use std::path::PathBuf;

use super::error::PathError;

/// Default output directory, relative to the working directory.
pub const DEFAULT_OUTPUT_DIR: &str = "resumos";

/// Environment variable overriding the output directory.
pub const OUTPUT_DIR_ENV: &str = "SUMDOC_OUTPUT_DIR";

/// How the output directory was derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputDirSource {
    /// The caller passed an explicit path (e.g., CLI flag).
    Explicit,
    /// The path came from [`OUTPUT_DIR_ENV`].
    EnvVar,
    /// Fallback default ([`DEFAULT_OUTPUT_DIR`]).
    Default,
}

impl OutputDirSource {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Explicit => "explicit",
            Self::EnvVar => "env",
            Self::Default => "default",
        }
    }
}

impl std::fmt::Display for OutputDirSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resolution result for the output directory.
#[derive(Debug, Clone)]
pub struct OutputDirResolution {
    pub path: PathBuf,
    pub source: OutputDirSource,
}

/// Resolve the output directory from an explicit path, the environment or
/// the default.
///
/// Resolution order:
/// 1. Explicit path provided by caller (highest priority)
/// 2. `SUMDOC_OUTPUT_DIR` environment variable
/// 3. `resumos` in the working directory
pub fn resolve_output_dir(explicit: Option<&str>) -> Result<OutputDirResolution, PathError> {
    resolve_output_dir_with(explicit, env::var(OUTPUT_DIR_ENV).ok())
}

/// Same as [`resolve_output_dir`] with the environment value passed in.
pub fn resolve_output_dir_with(
    explicit: Option<&str>,
    env_value: Option<String>,
) -> Result<OutputDirResolution, PathError> {
    if let Some(path) = explicit {
        if path.trim().is_empty() {
            return Err(PathError::EmptyPath);
        }
        return Ok(OutputDirResolution {
            path: PathBuf::from(path),
            source: OutputDirSource::Explicit,
        });
    }

    if let Some(env_path) = env_value {
        if !env_path.trim().is_empty() {
            return Ok(OutputDirResolution {
                path: PathBuf::from(env_path),
                source: OutputDirSource::EnvVar,
            });
        }
    }

    Ok(OutputDirResolution {
        path: PathBuf::from(DEFAULT_OUTPUT_DIR),
        source: OutputDirSource::Default,
    })
}
