#![allow(clippy::enum_variant_names)]

use snafu::ResultExt as _;
use tracing::debug;

use crate::{
    application::{Application, ApplicationError, StartingDirectorySnafu},
    filesystem::StartingDirectory,
};

mod application;
mod ext;
mod filesystem;
mod output;

#[snafu::report]
fn main() -> Result<(), ApplicationError> {
    setup_tracing();

    let starting_directory =
        StartingDirectory::from_running_executable().context(StartingDirectorySnafu)?;
    debug!("Resolved starting directory: {starting_directory:?}");

    Application::run(starting_directory)?;

    Ok(())
}

fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::WARN)
        .without_time()
        .compact()
        .init();
}
