//! Application configuration.
//!
//! Defaults, then an optional TOML file, then environment overrides.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::{KgbError, KgbResult};

/// Config file looked up in the working directory when none is given.
pub const DEFAULT_CONFIG_FILE: &str = "kgb.toml";

/// Neo4j connection settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GraphSettings {
    pub uri: String,
    pub user: String,
    pub password: String,
    pub database: String,
}

impl Default for GraphSettings {
    fn default() -> Self {
        Self {
            uri: "neo4j://127.0.0.1:7687".to_string(),
            user: "neo4j".to_string(),
            password: "password".to_string(),
            database: "neo4j".to_string(),
        }
    }
}

/// Ollama chat settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ModelSettings {
    pub base_url: String,
    pub model: String,
    pub temperature: f32,
    pub timeout_secs: u64,
}

impl Default for ModelSettings {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:11434".to_string(),
            model: "llama3".to_string(),
            temperature: 0.0,
            timeout_secs: 120,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PromptSettings {
    /// Directory holding the three template files. Built-in templates are
    /// used when unset.
    pub dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8501,
        }
    }
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub graph: GraphSettings,
    pub model: ModelSettings,
    pub prompts: PromptSettings,
    pub server: ServerSettings,
}

impl AppConfig {
    /// Load configuration.
    ///
    /// An explicit `path` must exist. Without one, `kgb.toml` in the current
    /// directory is read if present. Environment variables win over both.
    pub fn load(path: Option<&Path>) -> KgbResult<Self> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => {
                let default = Path::new(DEFAULT_CONFIG_FILE);
                if default.exists() {
                    Self::from_file(default)?
                } else {
                    Self::default()
                }
            }
        };
        config.apply_env(|key| std::env::var(key).ok());
        Ok(config)
    }

    /// Parse a TOML config file.
    pub fn from_file(path: &Path) -> KgbResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| {
            KgbError::config(format!("Cannot read config {}: {}", path.display(), e))
        })?;
        let config = Self::from_toml(&text)?;
        debug!(path = %path.display(), "Loaded config file");
        Ok(config)
    }

    pub fn from_toml(text: &str) -> KgbResult<Self> {
        toml::from_str(text).map_err(|e| KgbError::config(format!("Invalid config: {}", e)))
    }

    /// Apply overrides from `lookup`, normally the process environment.
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(v) = lookup("NEO4J_URI") {
            self.graph.uri = v;
        }
        if let Some(v) = lookup("NEO4J_USERNAME") {
            self.graph.user = v;
        }
        if let Some(v) = lookup("NEO4J_PASSWORD") {
            self.graph.password = v;
        }
        if let Some(v) = lookup("NEO4J_DATABASE") {
            self.graph.database = v;
        }
        if let Some(v) = lookup("OLLAMA_URL") {
            self.model.base_url = v;
        }
        if let Some(v) = lookup("OLLAMA_MODEL") {
            self.model.model = v;
        }
        if let Some(v) = lookup("KGB_PROMPTS_DIR") {
            self.prompts.dir = Some(PathBuf::from(v));
        }
    }
}
