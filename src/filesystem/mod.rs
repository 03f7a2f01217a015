//! Filesystem traversal and tree rendering.
//!
//! This module provides the recursive renderer that turns a directory
//! subtree into connector-glyph text, plus the starting-directory value
//! the rest of the program is rooted at.

mod starting_directory;
mod tree_renderer;

pub use starting_directory::{StartingDirectory, StartingDirectoryResolutionError};
pub use tree_renderer::{FilesystemAccessError, TreeRenderer};
