//! Builder-pattern loader that locates and parses the config file.
//!
//! Responsibilities:
//! - Resolve the config path from an optional CLI argument.
//! - Reject an explicit path that is blank; only an absent argument means `config.ini`.
//! - Read the file (lossy UTF-8) and parse it into an [`IniDocument`].
//!
//! Does NOT handle:
//! - Validation of individual settings (see `types`).

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::constants::DEFAULT_CONFIG_FILE_NAME;
use crate::loader::document::IniDocument;
use crate::loader::error::{ConfigError, Result};

/// Locates and loads the INI configuration file.
#[derive(Debug, Default, Clone)]
pub struct ConfigLoader {
    config_path: Option<PathBuf>,
    program_dir: Option<PathBuf>,
}

impl ConfigLoader {
    /// Create a loader that looks for `config.ini` next to the executable.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use an explicit config path. Relative paths resolve against the program directory.
    pub fn with_config_path(mut self, path: PathBuf) -> Self {
        self.config_path = Some(path);
        self
    }

    /// Override the program directory used to resolve relative paths.
    ///
    /// Defaults to the directory containing the running executable.
    pub fn with_program_dir(mut self, dir: PathBuf) -> Self {
        self.program_dir = Some(dir);
        self
    }

    /// Returns the configured path, if any.
    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    fn program_dir(&self) -> Result<PathBuf> {
        if let Some(dir) = &self.program_dir {
            return Ok(dir.clone());
        }
        let exe = std::env::current_exe()
            .map_err(|e| ConfigError::ProgramDirUnavailable(e.to_string()))?;
        exe.parent().map(Path::to_path_buf).ok_or_else(|| {
            ConfigError::ProgramDirUnavailable(format!(
                "executable path {} has no parent directory",
                exe.display()
            ))
        })
    }

    /// Resolve the path of the config file to read.
    pub fn resolve_path(&self) -> Result<PathBuf> {
        let candidate = match &self.config_path {
            Some(path) if path.as_os_str().to_string_lossy().trim().is_empty() => {
                return Err(ConfigError::EmptyConfigPath);
            }
            Some(path) => path.clone(),
            None => PathBuf::from(DEFAULT_CONFIG_FILE_NAME),
        };

        if candidate.is_absolute() {
            return Ok(candidate);
        }
        Ok(self.program_dir()?.join(candidate))
    }

    /// Read and parse the config file.
    pub fn load(&self) -> Result<IniDocument> {
        let path = self.resolve_path()?;
        debug!(path = %path.display(), "Reading configuration file");

        let bytes = std::fs::read(&path).map_err(|source| ConfigError::ConfigFileRead {
            path: path.clone(),
            source,
        })?;
        let contents = String::from_utf8_lossy(&bytes);

        IniDocument::parse(&path, &contents)
    }
}
