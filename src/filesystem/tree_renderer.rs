use std::fs;
use std::path::{Path, PathBuf};

use snafu::{ResultExt, Snafu};
use tracing::debug;

use crate::ext::BestEffortPathExt;

const MID_BRANCH: &str = "├── ";
const LAST_BRANCH: &str = "└── ";
const CONTINUATION_EXTENSION: &str = "│   ";
const LAST_EXTENSION: &str = "    ";

/// One immediate child of the directory currently being rendered
#[derive(Debug, Clone, PartialEq, Eq)]
struct Entry {
    name: String,
    path: PathBuf,
    is_directory: bool,
}

pub struct TreeRenderer;

impl TreeRenderer {
    /// Renders the contents of `path` as an indented branch listing.
    ///
    /// `indent` is the accumulated prefix for the current depth; the root
    /// call passes an empty string. The returned text covers every entry
    /// below `path`, depth-first, with subtrees spliced directly after
    /// their directory's own line.
    pub fn render(path: &Path, indent: &str) -> Result<String, FilesystemAccessError> {
        let entries = Self::sorted_entries(path)?;

        let mut output = String::new();
        for (index, entry) in entries.iter().enumerate() {
            let is_last = index + 1 == entries.len();
            let connector = if is_last { LAST_BRANCH } else { MID_BRANCH };

            output.push_str(indent);
            output.push_str(connector);
            output.push_str(&entry.name);
            output.push('\n');

            if entry.is_directory {
                let extension = if is_last {
                    LAST_EXTENSION
                } else {
                    CONTINUATION_EXTENSION
                };
                let child_indent = format!("{indent}{extension}");
                output.push_str(&Self::render(&entry.path, &child_indent)?);
            }
        }

        Ok(output)
    }

    /// Lists the immediate children of `path` in ascending name order
    fn sorted_entries(path: &Path) -> Result<Vec<Entry>, FilesystemAccessError> {
        let read_dir = fs::read_dir(path).context(ListDirectorySnafu {
            path: path.to_path_buf(),
        })?;

        let mut entries = read_dir
            .map(|dir_entry| {
                let dir_entry = dir_entry.context(ReadEntrySnafu {
                    path: path.to_path_buf(),
                })?;
                let entry_path = dir_entry.path();
                Ok(Entry {
                    name: dir_entry.file_name().to_string_lossy().into_owned(),
                    is_directory: entry_path.is_dir(),
                    path: entry_path,
                })
            })
            .collect::<Result<Vec<_>, FilesystemAccessError>>()?;

        // Ordinal comparison: the rendered order must not depend on the
        // process locale.
        entries.sort_by(|a, b| a.name.cmp(&b.name));

        debug!(
            "Listed {} entries in {}",
            entries.len(),
            path.best_effort_display()
        );
        Ok(entries)
    }
}

#[derive(Debug, Snafu)]
pub enum FilesystemAccessError {
    #[snafu(display("Failed to list directory {}", path.best_effort_display()))]
    ListDirectoryError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[snafu(display("Failed to read an entry of directory {}", path.best_effort_display()))]
    ReadEntryError {
        path: PathBuf,
        source: std::io::Error,
    },
}
