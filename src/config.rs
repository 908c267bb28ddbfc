use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::warn;

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct AppConfig {
    pub display: DisplayConfig,
    pub save: SaveConfig,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct DisplayConfig {
    /// ANSI color in the board rendering.
    pub color: bool,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct SaveConfig {
    /// Filename offered when the user saves or loads without typing one.
    pub default_file: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self { color: true }
    }
}

impl Default for SaveConfig {
    fn default() -> Self {
        Self {
            default_file: "checkers.sav".to_string(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            display: DisplayConfig::default(),
            save: SaveConfig::default(),
        }
    }
}

impl AppConfig {
    pub fn load() -> Self {
        let config_path = "Config.toml";
        let mut config = if Path::new(config_path).exists() {
            match fs::read_to_string(config_path)
                .map_err(|e| e.to_string())
                .and_then(|contents| toml::from_str(&contents).map_err(|e| e.to_string()))
            {
                Ok(parsed) => parsed,
                Err(e) => {
                    warn!("Config.toml unreadable ({e}), using defaults");
                    Self::default()
                }
            }
        } else {
            Self::default()
        };

        config.merge_env();
        config
    }

    fn merge_env(&mut self) {
        if let Ok(val) = std::env::var("CHECKERS_DISPLAY_COLOR") {
            if let Ok(parsed) = val.parse() {
                self.display.color = parsed;
            }
        }
        if let Ok(val) = std::env::var("CHECKERS_SAVE_FILE") {
            if !val.is_empty() {
                self.save.default_file = val;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    struct EnvVarGuard {
        key: String,
        original: Option<String>,
    }

    impl EnvVarGuard {
        fn new(key: &str, value: &str) -> Self {
            let original = env::var(key).ok();
            unsafe {
                env::set_var(key, value);
            }
            Self {
                key: key.to_string(),
                original,
            }
        }
    }

    impl Drop for EnvVarGuard {
        fn drop(&mut self) {
            unsafe {
                match &self.original {
                    Some(val) => env::set_var(&self.key, val),
                    None => env::remove_var(&self.key),
                }
            }
        }
    }

    #[test]
    fn defaults_are_sane() {
        let config = AppConfig::default();
        assert!(config.display.color);
        assert_eq!(config.save.default_file, "checkers.sav");
    }

    // One test for all env handling: the harness runs tests in parallel
    // and these variables are process-global.
    #[test]
    fn merge_env_overrides_and_ignores_invalid_values() {
        {
            let mut config = AppConfig::default();
            let _g1 = EnvVarGuard::new("CHECKERS_DISPLAY_COLOR", "false");
            let _g2 = EnvVarGuard::new("CHECKERS_SAVE_FILE", "other.sav");

            config.merge_env();

            assert!(!config.display.color);
            assert_eq!(config.save.default_file, "other.sav");
        }

        {
            let mut config = AppConfig::default();
            let _g1 = EnvVarGuard::new("CHECKERS_DISPLAY_COLOR", "not_a_bool");
            let _g2 = EnvVarGuard::new("CHECKERS_SAVE_FILE", "");

            config.merge_env();

            assert!(config.display.color);
            assert_eq!(config.save.default_file, "checkers.sav");
        }
    }

    #[test]
    fn toml_fragment_parses() {
        let config: AppConfig =
            toml::from_str("[display]\ncolor = false\n[save]\ndefault_file = \"x.sav\"\n").unwrap();
        assert!(!config.display.color);
        assert_eq!(config.save.default_file, "x.sav");
    }
}
