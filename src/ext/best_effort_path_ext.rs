use std::env;
use std::path::{Component, Path, PathBuf};

/// Best-effort absolute rendering of a path for user-facing text.
///
/// Canonicalization needs the path to exist, but error messages often carry
/// paths that do not. The fallback anchors relative paths to the current
/// directory and folds `.` and `..` components textually.
pub trait BestEffortPathExt {
    fn best_effort_display(&self) -> String;
}

impl<T: AsRef<Path>> BestEffortPathExt for T {
    fn best_effort_display(&self) -> String {
        let path = self.as_ref();
        if let Ok(canonical) = path.canonicalize() {
            return canonical.display().to_string();
        }

        let anchored = if path.is_absolute() {
            path.to_path_buf()
        } else {
            env::current_dir()
                .map(|current_dir| current_dir.join(path))
                .unwrap_or_else(|_| path.to_path_buf())
        };
        fold_relative_components(&anchored).display().to_string()
    }
}

fn fold_relative_components(path: &Path) -> PathBuf {
    let mut folded: Vec<Component> = Vec::new();

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if !matches!(folded.last(), None | Some(Component::RootDir)) {
                    folded.pop();
                }
            }
            other => folded.push(other),
        }
    }

    folded.iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_existing_path_is_canonicalized() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");

        let display = temp_dir.path().best_effort_display();

        let canonical = temp_dir
            .path()
            .canonicalize()
            .expect("Failed to canonicalize temp directory");
        assert_eq!(display, canonical.display().to_string());
    }

    #[test]
    fn test_missing_absolute_path_folds_relative_components() {
        let display = Path::new("/no/such/place/../spot/./here").best_effort_display();

        assert_eq!(display, "/no/such/spot/here");
    }

    #[test]
    fn test_parent_components_never_climb_past_the_root() {
        let display = Path::new("/../../above").best_effort_display();

        assert_eq!(display, "/above");
    }

    #[test]
    fn test_missing_relative_path_is_anchored_to_the_current_directory() {
        let display = Path::new("no_such_entry_here.txt").best_effort_display();

        assert!(Path::new(&display).is_absolute());
        assert!(display.ends_with("no_such_entry_here.txt"));
    }
}
