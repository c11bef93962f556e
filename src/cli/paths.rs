//! Path resolution for the global `--root` and `--store` flags

use std::env;
use std::path::{Path, PathBuf};

/// Resolve the root path for store discovery.
///
/// If a root path is provided, returns it. Otherwise, falls back to the
/// current working directory, or "." if that cannot be determined.
pub fn resolve_root_path(root: Option<PathBuf>) -> PathBuf {
    root.unwrap_or_else(|| env::current_dir().unwrap_or_else(|_| PathBuf::from(".")))
}

/// Resolve an explicit `--store` path against the root directory
pub fn resolve_store_path(store: &Path, root: &Path) -> PathBuf {
    if store.is_absolute() {
        store.to_path_buf()
    } else {
        root.join(store)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    #[test]
    fn test_resolve_with_explicit_path() {
        let explicit = PathBuf::from("/tmp/test/path");
        let result = resolve_root_path(Some(explicit.clone()));
        assert_eq!(result, explicit);
    }

    #[test]
    fn test_relative_store_path_joins_root() {
        let root = PathBuf::from("/srv/site");
        assert_eq!(
            resolve_store_path(Path::new("content/.folio"), &root),
            PathBuf::from("/srv/site/content/.folio")
        );
        assert_eq!(
            resolve_store_path(Path::new("/data/.folio"), &root),
            PathBuf::from("/data/.folio")
        );
    }

    #[test]
    fn test_resolve_without_path_uses_current_dir() {
        // When no path is provided, should fall back to current_dir or "."
        let result = resolve_root_path(None);
        // Result should either be current_dir or "."
        if let Ok(current) = env::current_dir() {
            assert!(result == current || result == PathBuf::from("."));
        } else {
            assert_eq!(result, PathBuf::from("."));
        }
    }
}
