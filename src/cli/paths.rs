use anyhow::{Context, Result};
use std::path::PathBuf;

/// Name of the default data directory under the home directory
const DEFAULT_DIR_NAME: &str = ".template-tool";

/// Resolve the data directory holding the installation secret.
pub fn resolve_data_dir(data_dir: Option<PathBuf>) -> Result<PathBuf> {
    match data_dir {
        Some(path) => Ok(path),
        None => Ok(dirs::home_dir()
            .context("Could not determine home directory")?
            .join(DEFAULT_DIR_NAME)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_dir_wins() {
        let dir = resolve_data_dir(Some(PathBuf::from("/opt/tool"))).unwrap();
        assert_eq!(dir, PathBuf::from("/opt/tool"));
    }

    #[test]
    fn test_default_dir_is_under_home() {
        if let Some(home) = dirs::home_dir() {
            let dir = resolve_data_dir(None).unwrap();
            assert_eq!(dir, home.join(DEFAULT_DIR_NAME));
        }
    }
}
