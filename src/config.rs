use std::path::{Path, PathBuf};

use crate::error::FetchError;

pub const SOURCE_URL: &str = "https://raw.githubusercontent.com/google/adk-python/main/llms-full.txt";

/// Subdirectory of the install root that receives the file.
pub const OUTPUT_DIR_NAME: &str = "docs";
pub const OUTPUT_FILE_NAME: &str = "llms-full.txt";

/// Where to fetch from and where to put the result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTarget {
    pub source_url: String,
    pub destination: PathBuf,
}

impl FetchTarget {
    pub fn new(source_url: impl Into<String>, destination: impl Into<PathBuf>) -> Result<Self, FetchError> {
        let target = Self {
            source_url: source_url.into(),
            destination: destination.into(),
        };
        target.validate()?;
        Ok(target)
    }

    /// Resolves the destination relative to the directory above the one
    /// holding `exe_path`.
    ///
    /// The install root is the executable's grandparent. For an installed
    /// `<root>/bin/llms-fetch` that is `<root>`, but a binary run straight out
    /// of cargo's `target/debug/` writes to `target/docs/llms-full.txt`.
    pub fn for_executable(exe_path: &Path) -> Result<Self, FetchError> {
        let install_root = exe_path
            .parent()
            .and_then(Path::parent)
            .ok_or_else(|| FetchError::InstallLocation(exe_path.to_path_buf()))?;

        Self::new(
            SOURCE_URL,
            install_root.join(OUTPUT_DIR_NAME).join(OUTPUT_FILE_NAME),
        )
    }

    pub fn from_current_exe() -> Result<Self, FetchError> {
        let exe_path = std::env::current_exe().map_err(FetchError::CurrentExe)?;
        log::debug!("Executable path: {:?}", exe_path);
        Self::for_executable(&exe_path)
    }

    pub fn output_dir(&self) -> Option<&Path> {
        self.destination.parent()
    }

    fn validate(&self) -> Result<(), FetchError> {
        if self.source_url.trim().is_empty() {
            return Err(FetchError::InvalidTarget("source URL is empty".to_string()));
        }

        if self.destination.file_name().is_none() {
            return Err(FetchError::InvalidTarget(format!(
                "destination {:?} has no file name",
                self.destination
            )));
        }

        Ok(())
    }
}
