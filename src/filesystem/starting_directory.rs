use std::env;
use std::path::{Path, PathBuf};

use derive_more::{AsRef, Deref, From};
use snafu::{OptionExt, ResultExt, Snafu};

use crate::ext::BestEffortPathExt;

/// The directory a run is rooted at.
///
/// Resolved once at startup from the location of the running executable and
/// threaded through the rest of the program as a plain value, so the core
/// never consults any ambient notion of "where the program lives".
#[derive(Debug, Clone, PartialEq, Eq, AsRef, Deref, From)]
#[as_ref(forward)]
pub struct StartingDirectory(PathBuf);

impl StartingDirectory {
    /// Resolves the absolute directory containing the running executable
    pub fn from_running_executable() -> Result<Self, StartingDirectoryResolutionError> {
        let executable = env::current_exe().context(CurrentExeSnafu)?;
        let executable = executable.canonicalize().context(CanonicalizeSnafu {
            path: executable.clone(),
        })?;

        let directory = executable
            .parent()
            .context(NoParentDirectorySnafu {
                path: executable.clone(),
            })?
            .to_path_buf();

        Ok(Self(directory))
    }

    pub fn as_path(&self) -> &Path {
        &self.0
    }
}

#[derive(Debug, Snafu)]
pub enum StartingDirectoryResolutionError {
    #[snafu(display("Failed to obtain the path of the running executable"))]
    CurrentExeError { source: std::io::Error },
    #[snafu(display("Failed to canonicalize executable path {}", path.best_effort_display()))]
    CanonicalizeError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[snafu(display("Executable path {} has no parent directory", path.best_effort_display()))]
    NoParentDirectoryError { path: PathBuf },
}
