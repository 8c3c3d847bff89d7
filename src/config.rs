use serde::{Deserialize, Serialize};
use std::fs;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AppConfig {
    pub log_level: String,
    pub log_dir: String,
    pub log_file: String,
    pub use_json: bool,
    pub rotation: String,
    pub gateway: GatewayConfig,
    pub postgres_url: String,
    /// Strict lookups only accept observations at most this many minutes old.
    #[serde(default = "default_expire_in_minutes")]
    pub expire_in_minutes: i64,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct GatewayConfig {
    pub host: String,
    pub port: u16,
}

fn default_expire_in_minutes() -> i64 {
    1440
}

impl AppConfig {
    pub fn load(env: &str) -> anyhow::Result<Self> {
        let config_path = format!("config/{}.yaml", env);
        let content = fs::read_to_string(&config_path)
            .map_err(|e| anyhow::anyhow!("failed to read config file {}: {}", config_path, e))?;
        Ok(serde_yaml::from_str(&content)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal_config() {
        let yaml = r#"
log_level: "debug"
log_dir: "logs"
log_file: "test.log"
use_json: false
rotation: "never"
gateway:
  host: "127.0.0.1"
  port: 9090
postgres_url: "postgresql://localhost/rates"
"#;
        let config: AppConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.gateway.port, 9090);
        assert_eq!(config.expire_in_minutes, 1440);
    }

    #[test]
    fn test_expire_in_minutes_override() {
        let yaml = r#"
log_level: "info"
log_dir: "logs"
log_file: "test.log"
use_json: true
rotation: "daily"
gateway:
  host: "0.0.0.0"
  port: 8080
postgres_url: "postgresql://localhost/rates"
expire_in_minutes: 60
"#;
        let config: AppConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.expire_in_minutes, 60);
    }
}
