use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct FileConfig {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub metrics_port: Option<u16>,
    pub logging_level: Option<String>,
    pub log_format: Option<String>,
    pub cors_origins: Option<Vec<String>>,
    /// Start with the six sample albums.
    pub seed: Option<bool>,
}

impl FileConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        toml::from_str(&content).with_context(|| format!("Failed to parse config file: {:?}", path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_full_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
host = "127.0.0.1"
port = 8080
metrics_port = 0
logging_level = "headers"
log_format = "json"
cors_origins = ["http://localhost:3000"]
seed = false
"#
        )
        .unwrap();

        let config = FileConfig::load(file.path()).unwrap();

        assert_eq!(config.host.as_deref(), Some("127.0.0.1"));
        assert_eq!(config.port, Some(8080));
        assert_eq!(config.metrics_port, Some(0));
        assert_eq!(config.logging_level.as_deref(), Some("headers"));
        assert_eq!(config.log_format.as_deref(), Some("json"));
        assert_eq!(
            config.cors_origins,
            Some(vec!["http://localhost:3000".to_string()])
        );
        assert_eq!(config.seed, Some(false));
    }

    #[test]
    fn test_load_partial_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "port = 9000").unwrap();

        let config = FileConfig::load(file.path()).unwrap();

        assert_eq!(config.port, Some(9000));
        assert!(config.host.is_none());
        assert!(config.seed.is_none());
    }

    #[test]
    fn test_load_missing_file() {
        let result = FileConfig::load(Path::new("/nonexistent/album-api.toml"));
        assert!(result.is_err());
    }

    #[test]
    fn test_load_malformed_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "port = \"not a number\"").unwrap();

        let result = FileConfig::load(file.path());
        assert!(result.unwrap_err().to_string().contains("Failed to parse"));
    }
}
