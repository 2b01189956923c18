//! Configuration file loading and CLI/file/default resolution.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};

use crate::ServerConfig;

/// Optional on-disk configuration (`.json`, `.toml`, `.yaml`/`.yml`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct FileConfig {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub data_file: Option<String>,
    pub log_level: Option<String>,
    pub default_list_limit: Option<usize>,
}

/// CLI options that can override config file settings.
///
/// This trait allows the binary to pass CLI arguments to [`resolve_config`]
/// without the library depending on clap types.
pub trait CliOptions {
    fn host(&self) -> Option<String>;
    fn port(&self) -> Option<u16>;
    fn data_file(&self) -> Option<PathBuf>;
    fn log_level(&self) -> Option<String>;
    fn default_list_limit(&self) -> Option<usize>;
}

pub fn expand_path(raw: impl AsRef<str>) -> PathBuf {
    let s = raw.as_ref();
    if let Some(stripped) = s.strip_prefix("~/")
        && let Some(home) = std::env::var_os("HOME")
    {
        return PathBuf::from(home).join(stripped);
    }
    PathBuf::from(s)
}

pub fn load_config(path: &Path) -> Result<Option<FileConfig>> {
    if !path.exists() {
        return Ok(None);
    }
    let data = fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;

    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let cfg: FileConfig = match ext.as_str() {
        "yaml" | "yml" => serde_yaml::from_str(&data)
            .with_context(|| format!("failed to parse yaml config {}", path.display()))?,
        "toml" => toml::from_str(&data)
            .with_context(|| format!("failed to parse toml config {}", path.display()))?,
        _ => serde_json::from_str(&data)
            .with_context(|| format!("failed to parse json config {}", path.display()))?,
    };
    Ok(Some(cfg))
}

/// Resolve the server configuration.
///
/// CLI options take precedence over the config file, which takes precedence
/// over [`ServerConfig::default`].
pub fn resolve_config<C: CliOptions>(cli: &C, file: Option<&FileConfig>) -> Result<ServerConfig> {
    let defaults = ServerConfig::default();

    let host = cli
        .host()
        .or_else(|| file.and_then(|f| f.host.clone()))
        .unwrap_or(defaults.host);

    let port = cli
        .port()
        .or_else(|| file.and_then(|f| f.port))
        .unwrap_or(defaults.port);

    let data_file = cli
        .data_file()
        .or_else(|| file.and_then(|f| f.data_file.as_deref().map(expand_path)));

    let log_level = cli
        .log_level()
        .or_else(|| file.and_then(|f| f.log_level.clone()))
        .unwrap_or(defaults.log_level);

    let default_list_limit = cli
        .default_list_limit()
        .or_else(|| file.and_then(|f| f.default_list_limit))
        .unwrap_or(defaults.default_list_limit);
    if default_list_limit == 0 {
        return Err(anyhow!("default_list_limit must be at least 1"));
    }

    let config = ServerConfig {
        host,
        port,
        data_file,
        log_level,
        default_list_limit,
    };
    config.socket_addr()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    #[derive(Default)]
    struct TestCli {
        host: Option<String>,
        port: Option<u16>,
        data_file: Option<PathBuf>,
        log_level: Option<String>,
        default_list_limit: Option<usize>,
    }

    impl CliOptions for TestCli {
        fn host(&self) -> Option<String> {
            self.host.clone()
        }
        fn port(&self) -> Option<u16> {
            self.port
        }
        fn data_file(&self) -> Option<PathBuf> {
            self.data_file.clone()
        }
        fn log_level(&self) -> Option<String> {
            self.log_level.clone()
        }
        fn default_list_limit(&self) -> Option<usize> {
            self.default_list_limit
        }
    }

    #[test]
    fn defaults_without_cli_or_file() {
        let cfg = resolve_config(&TestCli::default(), None).unwrap();
        assert_eq!(cfg, ServerConfig::default());
        assert_eq!(cfg.port, 8001);
        assert_eq!(cfg.default_list_limit, 50);
    }

    #[test]
    fn cli_overrides_file_and_file_overrides_defaults() {
        let file = FileConfig {
            host: Some("0.0.0.0".into()),
            port: Some(9000),
            log_level: Some("debug".into()),
            ..Default::default()
        };
        let cli = TestCli {
            port: Some(9100),
            ..Default::default()
        };
        let cfg = resolve_config(&cli, Some(&file)).unwrap();
        assert_eq!(cfg.host, "0.0.0.0");
        assert_eq!(cfg.port, 9100);
        assert_eq!(cfg.log_level, "debug");
    }

    #[test]
    fn zero_limit_is_rejected() {
        let cli = TestCli {
            default_list_limit: Some(0),
            ..Default::default()
        };
        assert!(resolve_config(&cli, None).is_err());
    }

    #[test]
    fn bad_host_is_rejected() {
        let cli = TestCli {
            host: Some("not a host".into()),
            ..Default::default()
        };
        assert!(resolve_config(&cli, None).is_err());
    }

    #[test]
    fn load_missing_file_is_none() {
        let temp = TempDir::new().expect("temp dir");
        let loaded = load_config(&temp.path().join("absent.toml")).unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn load_toml_yaml_and_json() {
        let temp = TempDir::new().expect("temp dir");

        let toml_path = temp.path().join("server.toml");
        let mut file = fs::File::create(&toml_path).expect("create toml");
        writeln!(file, "port = 8080\ndata_file = \"messages.json\"").expect("write toml");
        let cfg = load_config(&toml_path).unwrap().unwrap();
        assert_eq!(cfg.port, Some(8080));
        assert_eq!(cfg.data_file.as_deref(), Some("messages.json"));

        let yaml_path = temp.path().join("server.yaml");
        fs::write(&yaml_path, "host: 0.0.0.0\ndefault_list_limit: 10\n").expect("write yaml");
        let cfg = load_config(&yaml_path).unwrap().unwrap();
        assert_eq!(cfg.host.as_deref(), Some("0.0.0.0"));
        assert_eq!(cfg.default_list_limit, Some(10));

        let json_path = temp.path().join("server.json");
        fs::write(&json_path, r#"{"log_level":"warn"}"#).expect("write json");
        let cfg = load_config(&json_path).unwrap().unwrap();
        assert_eq!(cfg.log_level.as_deref(), Some("warn"));
    }

    #[test]
    fn load_invalid_file_errors() {
        let temp = TempDir::new().expect("temp dir");
        let path = temp.path().join("server.toml");
        fs::write(&path, "port = \"eighty\"").expect("write");
        assert!(load_config(&path).is_err());
    }

    #[test]
    fn expand_home_prefix() {
        assert_eq!(expand_path("plain/path.json"), PathBuf::from("plain/path.json"));
        assert_eq!(expand_path("/abs/~/x.json"), PathBuf::from("/abs/~/x.json"));

        let expected = match std::env::var_os("HOME") {
            Some(home) => PathBuf::from(home).join("x.json"),
            None => PathBuf::from("~/x.json"),
        };
        let expanded = expand_path("~/x.json");
        assert_eq!(expanded, expected);
        if std::env::var_os("HOME").is_some() {
            assert!(!expanded.starts_with("~"));
        }
    }
}
