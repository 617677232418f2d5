use crate::error::Result;
use crate::store::fs::{read_json, write_json};
use serde::{Deserialize, Serialize};
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_PLATFORM_NAME: &str = "AutomateX";
const DEFAULT_SUPPORT_EMAIL: &str = "support@automatex.com";
const DEFAULT_COMMISSION: u8 = 10;

pub const KEYS: [&str; 3] = ["platform-name", "support-email", "commission"];

/// Platform settings, stored in `<data dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MarketConfig {
    #[serde(default = "default_platform_name")]
    pub platform_name: String,

    #[serde(default = "default_support_email")]
    pub support_email: String,

    /// Platform commission on completed orders, in percent
    #[serde(default = "default_commission")]
    pub commission_percent: u8,
}

fn default_platform_name() -> String {
    DEFAULT_PLATFORM_NAME.to_string()
}

fn default_support_email() -> String {
    DEFAULT_SUPPORT_EMAIL.to_string()
}

fn default_commission() -> u8 {
    DEFAULT_COMMISSION
}

impl Default for MarketConfig {
    fn default() -> Self {
        Self {
            platform_name: default_platform_name(),
            support_email: default_support_email(),
            commission_percent: DEFAULT_COMMISSION,
        }
    }
}

impl MarketConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        Ok(read_json(config_dir.as_ref(), CONFIG_FILENAME)?.unwrap_or_default())
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        write_json(config_dir.as_ref(), CONFIG_FILENAME, self)
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "platform-name" => Some(self.platform_name.clone()),
            "support-email" => Some(self.support_email.clone()),
            "commission" => Some(format!("{}%", self.commission_percent)),
            _ => None,
        }
    }

    /// Sets a key from user input. The error string is meant for display.
    pub fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), String> {
        let value = value.trim();
        match key {
            "platform-name" => {
                if value.is_empty() {
                    return Err("Platform name cannot be empty".to_string());
                }
                self.platform_name = value.to_string();
            }
            "support-email" => {
                if !value.contains('@') {
                    return Err(format!("Invalid support email: {}", value));
                }
                self.support_email = value.to_string();
            }
            "commission" => {
                let pct: u8 = value
                    .trim_end_matches('%')
                    .parse()
                    .map_err(|_| format!("Invalid commission: {}", value))?;
                if pct > 100 {
                    return Err(format!("Commission must be between 0 and 100, got {}", pct));
                }
                self.commission_percent = pct;
            }
            other => return Err(format!("Unknown config key: {}", other)),
        }
        Ok(())
    }

    /// The platform's cut of `revenue`, rounded down.
    pub fn commission_on(&self, revenue: u64) -> u64 {
        revenue * u64::from(self.commission_percent) / 100
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = MarketConfig::default();
        assert_eq!(config.platform_name, "AutomateX");
        assert_eq!(config.support_email, "support@automatex.com");
        assert_eq!(config.commission_percent, 10);
    }

    #[test]
    fn test_set_commission_accepts_percent_sign() {
        let mut config = MarketConfig::default();
        config.set("commission", "15%").unwrap();
        assert_eq!(config.commission_percent, 15);
        assert_eq!(config.get("commission").unwrap(), "15%");
    }

    #[test]
    fn test_set_rejects_bad_values() {
        let mut config = MarketConfig::default();
        assert!(config.set("commission", "150").is_err());
        assert!(config.set("commission", "lots").is_err());
        assert!(config.set("support-email", "nobody").is_err());
        assert!(config.set("platform-name", "  ").is_err());
        assert!(config.set("theme", "dark").is_err());
        assert_eq!(config, MarketConfig::default());
    }

    #[test]
    fn test_load_missing_config() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config = MarketConfig::load(temp_dir.path()).unwrap();
        assert_eq!(config, MarketConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = tempfile::tempdir().unwrap();

        let mut config = MarketConfig::default();
        config.set("platform-name", "AutomateX Pro").unwrap();
        config.save(temp_dir.path()).unwrap();

        let loaded = MarketConfig::load(temp_dir.path()).unwrap();
        assert_eq!(loaded.platform_name, "AutomateX Pro");
    }

    #[test]
    fn test_save_creates_missing_dir() {
        let temp_dir = tempfile::tempdir().unwrap();
        let nested = temp_dir.path().join("a").join("b");

        MarketConfig::default().save(&nested).unwrap();
        assert!(nested.join(CONFIG_FILENAME).exists());
        assert_eq!(MarketConfig::load(&nested).unwrap(), MarketConfig::default());
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let temp_dir = tempfile::tempdir().unwrap();
        std::fs::write(
            temp_dir.path().join(CONFIG_FILENAME),
            r#"{"commission_percent": 25}"#,
        )
        .unwrap();

        let loaded = MarketConfig::load(temp_dir.path()).unwrap();
        assert_eq!(loaded.commission_percent, 25);
        assert_eq!(loaded.platform_name, "AutomateX");
    }

    #[test]
    fn test_commission_on_revenue() {
        let config = MarketConfig::default();
        assert_eq!(config.commission_on(10998), 1099);
    }
}
