use colored::Colorize as _;
use snafu::Snafu;
use snafu::prelude::*;
use tracing::debug;
use tracing::info;

use crate::application::RuntimeConfig;
use crate::ext::BestEffortPathExt;
use crate::filesystem::FilesystemAccessError;
use crate::filesystem::StartingDirectoryResolutionError;
use crate::filesystem::TreeRenderer;
use crate::output::TreeReport;
use crate::output::TreeReportError;

pub struct Application;

impl Application {
    pub fn run(config: impl Into<RuntimeConfig>) -> Result<(), ApplicationError> {
        let config: RuntimeConfig = config.into();
        let root = config.starting_directory.as_path();
        debug!("Rendering tree rooted at {}", root.best_effort_display());

        // The whole tree text is assembled before the report file is
        // opened: a traversal failure must not truncate an existing report.
        let branches = TreeRenderer::render(root, "").context(TraversalSnafu)?;
        let tree_text = format!("{}\n{}", root.best_effort_display(), branches);
        info!("Rendered {} lines", tree_text.lines().count());

        let output_path = TreeReport::write(root, &tree_text).context(ReportSnafu)?;

        print_confirmation(&output_path.best_effort_display());

        Ok(())
    }
}

fn print_confirmation(output_path: &str) {
    if supports_color::on(supports_color::Stream::Stdout).is_some() {
        println!("Tree structure written to: {}", output_path.green());
    } else {
        println!("Tree structure written to: {output_path}");
    }
}

#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum ApplicationError {
    #[snafu(display("Critical failure encountered while resolving the starting directory"))]
    StartingDirectoryError {
        source: StartingDirectoryResolutionError,
    },
    #[snafu(display("Critical failure encountered during directory traversal"))]
    TraversalError { source: FilesystemAccessError },
    #[snafu(display("Critical failure encountered while writing the tree report"))]
    ReportError { source: TreeReportError },
}
