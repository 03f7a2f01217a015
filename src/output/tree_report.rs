use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use snafu::{ResultExt, Snafu};
use tracing::{debug, info};

use crate::ext::BestEffortPathExt;

const OUTPUT_FILE_NAME: &str = "tree_output.txt";

fn get_output_file_path(root: &Path) -> PathBuf {
    root.join(OUTPUT_FILE_NAME)
}

pub struct TreeReport;

impl TreeReport {
    /// Writes `tree_text` to the report file inside `root`, replacing any
    /// previous report, and returns the artifact's path.
    ///
    /// The file handle lives only inside this function, so it is closed on
    /// every exit path.
    pub fn write(root: &Path, tree_text: &str) -> Result<PathBuf, TreeReportError> {
        let path = get_output_file_path(root);
        debug!("Writing tree report to {}", path.best_effort_display());

        let mut file = File::create(&path).context(CreateSnafu { path: path.clone() })?;
        file.write_all(tree_text.as_bytes())
            .context(WriteSnafu { path: path.clone() })?;

        info!("Wrote {} bytes to {}", tree_text.len(), path.best_effort_display());
        Ok(path)
    }
}

#[derive(Debug, Snafu)]
pub enum TreeReportError {
    #[snafu(display("Failed to create report file {}", path.best_effort_display()))]
    CreateError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[snafu(display("Failed to write report file {}", path.best_effort_display()))]
    WriteError {
        path: PathBuf,
        source: std::io::Error,
    },
}
