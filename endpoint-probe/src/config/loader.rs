use crate::config::types::ProbeConfig;
use crate::error::{ProbeError, Result};
use std::path::Path;

/// Configuration loader trait
pub trait ConfigLoader {
    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<ProbeConfig>;
}

/// Loads a [`ProbeConfig`] from a TOML file
pub struct DefaultConfigLoader;

impl ConfigLoader for DefaultConfigLoader {
    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<ProbeConfig> {
        let path_ref = path.as_ref();

        if !path_ref.exists() {
            return Err(ProbeError::ConfigNotFound {
                path: path_ref.to_path_buf(),
            });
        }

        let content = std::fs::read_to_string(path_ref)?;

        toml::from_str(&content).map_err(|e| {
            ProbeError::invalid_config(format!(
                "Failed to parse TOML in {}: {}",
                path_ref.display(),
                e
            ))
        })
    }
}

impl ProbeConfig {
    /// Load configuration from a TOML file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        DefaultConfigLoader::load_from_file(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_load_full_config() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("ping.toml");
        fs::write(
            &path,
            r#"
user_agent = "probe/2.0"
timeout_seconds = 5
max_concurrent_requests = 16
follow_redirects = false
"#,
        )
        .unwrap();

        let config = ProbeConfig::load_from_file(&path).unwrap();
        assert_eq!(config.user_agent.as_deref(), Some("probe/2.0"));
        assert_eq!(config.timeout_seconds, Some(5));
        assert_eq!(config.max_concurrent_requests, Some(16));
        assert_eq!(config.follow_redirects, Some(false));
    }

    #[test]
    fn test_load_empty_config_uses_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("ping.toml");
        fs::write(&path, "").unwrap();

        let config = ProbeConfig::load_from_file(&path).unwrap();
        assert_eq!(config, ProbeConfig::default());
    }

    #[test]
    fn test_missing_config_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("absent.toml");

        let err = ProbeConfig::load_from_file(&path).unwrap_err();
        assert!(matches!(err, ProbeError::ConfigNotFound { .. }));
    }

    #[test]
    fn test_invalid_toml_mentions_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("broken.toml");
        fs::write(&path, "timeout_seconds = \"soon\"").unwrap();

        let err = ProbeConfig::load_from_file(&path).unwrap_err();
        assert!(matches!(err, ProbeError::InvalidConfig { .. }));
        assert!(err.to_string().contains("broken.toml"));
    }
}
