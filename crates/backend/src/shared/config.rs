use once_cell::sync::OnceCell;
use serde::Deserialize;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub site: SiteConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SiteConfig {
    /// Directory with the compiled frontend (`index.html`, wasm, styles).
    pub dist_dir: String,
    /// Public origin used for absolute sitemap URLs.
    pub base_url: String,
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[server]
host = "0.0.0.0"
port = 3000

[site]
dist_dir = "dist"
base_url = "http://localhost:3000"
"#;

static CONFIG: OnceCell<Config> = OnceCell::new();

/// Load configuration from config.toml
///
/// Search order:
/// 1. Next to the executable (copied there by build.rs)
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

pub fn parse_config(contents: &str) -> anyhow::Result<Config> {
    let config: Config = toml::from_str(contents)?;
    if config.server.port == 0 {
        anyhow::bail!("server.port must be non-zero");
    }
    Ok(config)
}

/// Loads the configuration once; later calls return the cached value.
pub fn get_config() -> anyhow::Result<&'static Config> {
    CONFIG.get_or_try_init(load_config)
}

impl Config {
    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        let addr = format!("{}:{}", self.server.host, self.server.port).parse()?;
        Ok(addr)
    }

    /// Resolves `site.dist_dir`; relative paths are taken from the executable directory.
    pub fn dist_path(&self) -> PathBuf {
        let dist = Path::new(&self.site.dist_dir);
        if dist.is_absolute() {
            return dist.to_path_buf();
        }

        if let Ok(exe_path) = std::env::current_exe() {
            if let Some(exe_dir) = exe_path.parent() {
                let resolved = exe_dir.join(dist);
                if resolved.exists() {
                    return resolved;
                }
            }
        }

        // Fallback: relative to the current directory (cargo run from the workspace root)
        PathBuf::from(&self.site.dist_dir)
    }

    pub fn base_url(&self) -> &str {
        self.site.base_url.trim_end_matches('/')
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = parse_config(DEFAULT_CONFIG).expect("default config");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.site.dist_dir, "dist");
        assert_eq!(config.socket_addr().expect("addr").port(), 3000);
    }

    #[test]
    fn test_base_url_trims_trailing_slash() {
        let config = parse_config(
            r#"
            [server]
            host = "127.0.0.1"
            port = 8080
            [site]
            dist_dir = "/srv/site"
            base_url = "https://example.org/"
            "#,
        )
        .expect("config");
        assert_eq!(config.base_url(), "https://example.org");
        assert_eq!(config.dist_path(), PathBuf::from("/srv/site"));
    }

    #[test]
    fn test_zero_port_rejected() {
        let broken = DEFAULT_CONFIG.replace("port = 3000", "port = 0");
        assert!(parse_config(&broken).is_err());
    }

    #[test]
    fn test_missing_section_rejected() {
        assert!(parse_config("[server]\nhost = \"0.0.0.0\"\nport = 1\n").is_err());
    }
}
