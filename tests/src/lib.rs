//! Shared fixtures for the workspace integration tests

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Write `contents` to a `ping.toml` inside a fresh temporary directory.
///
/// The directory is returned alongside the path and must outlive its use.
pub fn write_config(contents: &str) -> std::io::Result<(TempDir, PathBuf)> {
    let dir = TempDir::new()?;
    let path = dir.path().join("ping.toml");
    fs::write(&path, contents)?;
    Ok((dir, path))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_config_creates_file() {
        let (_dir, path) = write_config("timeout_seconds = 1\n").unwrap();
        assert_eq!(fs::read_to_string(path).unwrap(), "timeout_seconds = 1\n");
    }
}
