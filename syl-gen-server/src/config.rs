use std::env;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Environment variable overriding the config file location.
pub const CONFIG_ENV: &str = "SYL_GEN_CONFIG";

const DEFAULT_CONFIG_PATH: &str = "./syl-gen.toml";

/// Top-level server configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
	pub server: ServerConfig,
	pub limits: Limits,
	pub fragments: FragmentsConfig,
}

/// Listening address.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
	pub host: String,
	pub port: u16,
}

/// Upper bounds applied to every request before generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Limits {
	/// Names per request.
	pub max_count: usize,
	/// Words per name.
	pub max_words: usize,
	/// Syllables per word.
	pub max_syllables: u32,
}

/// Optional fragment file replacing the builtin tables.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FragmentsConfig {
	pub file: Option<PathBuf>,
}

impl Default for ServerConfig {
	fn default() -> Self {
		Self {
			host: "127.0.0.1".to_owned(),
			port: 5000,
		}
	}
}

impl Default for Limits {
	fn default() -> Self {
		Self {
			max_count: 100,
			max_words: 3,
			max_syllables: 5,
		}
	}
}

impl AppConfig {
	/// Loads the configuration from `SYL_GEN_CONFIG` or `./syl-gen.toml`.
	/// Returns `Default` if the file is missing or unparseable.
	pub fn load() -> Self {
		Self::load_from(Self::config_path())
	}

	pub fn load_from<P: AsRef<Path>>(config_path: P) -> Self {
		let config_path = config_path.as_ref();
		match std::fs::read_to_string(config_path) {
			Ok(contents) => match toml::from_str(&contents) {
				Ok(config) => {
					log::info!("Loaded config from {}", config_path.display());
					config
				}
				Err(e) => {
					log::warn!("Failed to parse config at {}: {e}, using defaults", config_path.display());
					Self::default()
				}
			},
			Err(_) => {
				log::debug!("No config file at {}, using defaults", config_path.display());
				Self::default()
			}
		}
	}

	pub fn config_path() -> PathBuf {
		match env::var_os(CONFIG_ENV) {
			Some(path) if !path.is_empty() => PathBuf::from(path),
			_ => PathBuf::from(DEFAULT_CONFIG_PATH),
		}
	}
}
