use serde::{Deserialize, Serialize};
use std::io::{Read, Write};
use std::path::Path;

/// Which configuration file gets loaded, and how chatty the default
/// logging is. Selected by the `APP_ENV` environment variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Development,
    Production,
}

impl Mode {
    pub fn from_env() -> Self {
        Self::parse(std::env::var("APP_ENV").ok().as_deref())
    }

    fn parse(value: Option<&str>) -> Self {
        match value {
            Some("production") | Some("prod") => Mode::Production,
            _ => Mode::Development,
        }
    }

    pub fn config_path(self) -> &'static str {
        match self {
            Mode::Development => "config.toml",
            Mode::Production => "config.prod.toml",
        }
    }

    /// Routine diagnostics are suppressed outside development.
    /// `RUST_LOG` still overrides this.
    pub fn default_log_filter(self) -> &'static str {
        match self {
            Mode::Development => "info",
            Mode::Production => "warn",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub port: u16,
    pub uploads_dir: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 3000,
            uploads_dir: "uploads".to_string(),
        }
    }
}

impl Config {
    pub fn load(mode: Mode) -> Self {
        let config_path = Path::new(mode.config_path());
        if config_path.exists() {
            let mut file = std::fs::File::open(config_path).expect("failed to open config file");
            let mut contents = String::new();
            file.read_to_string(&mut contents)
                .expect("failed to read config file");
            toml::from_str(&contents).expect("failed to parse config file")
        } else {
            let default_config = Config::default();
            let toml_string = toml::to_string_pretty(&default_config)
                .expect("failed to serialize default config");
            let mut file =
                std::fs::File::create(config_path).expect("failed to create config file");
            file.write_all(toml_string.as_bytes())
                .expect("failed to write config file");
            default_config
        }
    }

    pub fn from_env(mode: Mode) -> Self {
        let mut final_cfg = Self::load(mode);
        if let Ok(port) = std::env::var("PORT") {
            final_cfg.port = Self::parse_port(&port, final_cfg.port);
        }
        final_cfg
    }

    fn parse_port(raw: &str, fallback: u16) -> u16 {
        match raw.parse() {
            Ok(p) => p,
            Err(_) => {
                log::warn!("ignoring unparseable PORT value {raw:?}, using {fallback}");
                fallback
            }
        }
    }
}
