mod application;
mod runtime_config;

pub use application::{Application, ApplicationError, StartingDirectorySnafu};
pub use runtime_config::RuntimeConfig;
