use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub assets: AssetsConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AssetsConfig {
    /// Directory with the compiled frontend bundle
    pub dir: String,
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[server]
host = "127.0.0.1"
port = 8080

[assets]
dir = "dist"
"#;

pub fn parse_config(contents: &str) -> anyhow::Result<Config> {
    Ok(toml::from_str(contents)?)
}

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable
/// 2. Falls back to embedded default config
pub fn load_config() -> anyhow::Result<Config> {
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let config_path = exe_dir.join("config.toml");

            if config_path.exists() {
                tracing::info!("Loading config from: {}", config_path.display());
                let contents = std::fs::read_to_string(&config_path)?;
                return parse_config(&contents);
            } else {
                tracing::warn!("config.toml not found at: {}", config_path.display());
            }
        }
    }

    tracing::info!("Using default embedded configuration");
    parse_config(DEFAULT_CONFIG)
}

/// Absolute paths are used as is; relative ones are taken from `base`.
pub fn resolve_path(base: Option<&Path>, raw: &str) -> PathBuf {
    let path = Path::new(raw);
    if path.is_absolute() {
        return path.to_path_buf();
    }
    match base {
        Some(base) => base.join(path),
        None => path.to_path_buf(),
    }
}

/// Bundle directory, relative paths resolved against the executable directory
pub fn get_assets_dir(config: &Config) -> PathBuf {
    let exe_path = std::env::current_exe().ok();
    let exe_dir = exe_path.as_deref().and_then(Path::parent);
    resolve_path(exe_dir, &config.assets.dir)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = parse_config(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.assets.dir, "dist");
    }

    #[test]
    fn test_missing_section_is_an_error() {
        assert!(parse_config("[server]\nhost = \"0.0.0.0\"\nport = 3000\n").is_err());
    }

    #[test]
    fn test_resolve_path() {
        let base = Path::new("/opt/catalog");
        assert_eq!(
            resolve_path(Some(base), "dist"),
            PathBuf::from("/opt/catalog/dist")
        );
        assert_eq!(resolve_path(Some(base), "/srv/www"), PathBuf::from("/srv/www"));
        assert_eq!(resolve_path(None, "dist"), PathBuf::from("dist"));
    }
}
