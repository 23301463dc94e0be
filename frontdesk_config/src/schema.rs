use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::info;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    pub providers: ProvidersConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ServerConfig {
    #[serde(default = "ServerConfig::default_port")]
    pub port: u16,
    #[serde(default = "ServerConfig::default_log_file")]
    pub log_file: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: Self::default_port(),
            log_file: Self::default_log_file(),
        }
    }
}

impl ServerConfig {
    const fn default_port() -> u16 {
        3001
    }

    fn default_log_file() -> PathBuf {
        PathBuf::from("logs.json")
    }
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ProvidersConfig {
    pub openai: ProviderConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ProviderConfig {
    pub api_key: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    #[serde(default = "ProviderConfig::default_model")]
    pub model: String,
}

impl ProviderConfig {
    fn default_model() -> String {
        "gpt-4o".to_string()
    }
}

impl Config {
    /// Load `~/frontdesk/config.json`.
    ///
    /// The `OPENAI_API_KEY` environment variable, when set and non-empty,
    /// overrides the key stored in the file.
    pub fn load() -> anyhow::Result<Self> {
        let config_path = Self::config_dir()?.join("config.json");

        if !config_path.exists() {
            anyhow::bail!(
                "Config file not found at: {}. Please run 'frontdesk init' to create config.",
                config_path.display()
            );
        }

        let content = std::fs::read_to_string(&config_path)?;
        let mut config: Self = serde_json::from_str(&content)?;

        match std::env::var("OPENAI_API_KEY") {
            Ok(key) if !key.is_empty() => {
                info!("Using OpenAI API key from environment");
                config.providers.openai.api_key = key;
            }
            _ => {}
        }

        Ok(config)
    }

    fn config_dir() -> anyhow::Result<PathBuf> {
        Ok(dirs::home_dir()
            .ok_or_else(|| anyhow::anyhow!("Cannot find home directory"))?
            .join("frontdesk"))
    }

    pub fn ensure_config_dir() -> anyhow::Result<PathBuf> {
        let config_dir = Self::config_dir()?;
        std::fs::create_dir_all(&config_dir)?;
        Ok(config_dir)
    }

    pub fn create_config() -> anyhow::Result<()> {
        let config_dir = Self::ensure_config_dir()?;
        let config_path = config_dir.join("config.json");

        if config_path.exists() {
            anyhow::bail!(
                "Config file already exists at: {}. Please edit it directly.",
                config_path.display()
            );
        }

        let config_template = r#"{
  "server": {
    "port": 3001,
    "log_file": "logs.json"
  },
  "providers": {
    "openai": {
      "api_key": "your-openai-api-key-here",
      "model": "gpt-4o"
    }
  }
}"#;

        std::fs::write(&config_path, config_template)?;

        println!("✅ Created config file at: {}", config_path.display());
        println!();
        println!("📝 Next steps:");
        println!("   1. Edit the config file and add your OpenAI API key");
        println!("      (or export OPENAI_API_KEY to override it)");
        println!("   2. Run 'frontdesk serve' to start the clinic relay");
        println!();
        Ok(())
    }
}
