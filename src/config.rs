use serde::Deserialize;
use std::path::{Path, PathBuf};

/// File locations used by the converter.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct FilesConfig {
    /// Source text listing location
    #[serde(default = "default_input_file")]
    pub input_file: String,
    /// Destination JSON document location
    #[serde(default = "default_output_file")]
    pub output_file: String,
}

impl Default for FilesConfig {
    fn default() -> Self {
        FilesConfig {
            input_file: default_input_file(),
            output_file: default_output_file(),
        }
    }
}

fn default_input_file() -> String {
    "src.txt".to_string()
}

fn default_output_file() -> String {
    "characters.json".to_string()
}

/// Converter configuration loaded from `converter.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct ConverterConfig {
    #[serde(default)]
    pub files: FilesConfig,
}

impl ConverterConfig {
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    pub fn load_default() -> Result<Self, Box<dyn std::error::Error>> {
        let content = include_str!("../converter.toml");
        Ok(Self::from_toml(content)?)
    }

    /// Load configuration from custom file path
    pub fn load_from_file(path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        Ok(Self::from_toml(&content)?)
    }

    /// Load configuration with user overrides from standard locations
    /// 1. Start with the built-in defaults
    /// 2. Override with ~/.config/hanzi-index/converter.toml if it exists
    /// 3. Override with ./converter.toml if it exists in current directory
    pub fn load_with_overrides() -> Result<Self, Box<dyn std::error::Error>> {
        let mut config = Self::load_default()?;

        if let Some(config_dir) = dirs::config_dir() {
            let user_config_path = config_dir.join("hanzi-index").join("converter.toml");
            if user_config_path.exists() {
                match Self::load_from_file(&user_config_path) {
                    Ok(user_config) => {
                        config.merge(user_config);
                    }
                    Err(e) => {
                        eprintln!(
                            "Warning: Failed to load user config from {:?}: {}",
                            user_config_path, e
                        );
                    }
                }
            }
        }

        let local_config_path = Path::new("converter.toml");
        if local_config_path.exists() {
            match Self::load_from_file(local_config_path) {
                Ok(local_config) => {
                    config.merge(local_config);
                }
                Err(e) => {
                    eprintln!(
                        "Warning: Failed to load local config from {:?}: {}",
                        local_config_path, e
                    );
                }
            }
        }

        Ok(config)
    }

    /// Merge another config into this one, overriding the file locations.
    pub fn merge(&mut self, other: ConverterConfig) {
        self.files = other.files;
    }

    /// Input path with `~` expanded.
    pub fn input_path(&self) -> PathBuf {
        PathBuf::from(shellexpand::tilde(&self.files.input_file).as_ref())
    }

    /// Output path with `~` expanded.
    pub fn output_path(&self) -> PathBuf {
        PathBuf::from(shellexpand::tilde(&self.files.output_file).as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_default_config() {
        let config = ConverterConfig::load_default().unwrap();
        assert_eq!(config.files.input_file, "src.txt");
        assert_eq!(config.files.output_file, "characters.json");
    }

    #[test]
    fn test_missing_fields_fall_back_to_defaults() {
        let config = ConverterConfig::from_toml("[files]\ninput_file = \"listing.txt\"\n").unwrap();
        assert_eq!(config.files.input_file, "listing.txt");
        assert_eq!(config.files.output_file, "characters.json");
    }

    #[test]
    fn test_empty_toml_is_all_defaults() {
        let config = ConverterConfig::from_toml("").unwrap();
        assert_eq!(config.files, FilesConfig::default());
    }

    #[test]
    fn test_merge_overrides_file_locations() {
        let mut config = ConverterConfig::load_default().unwrap();
        let other = ConverterConfig::from_toml(
            "[files]\ninput_file = \"a.txt\"\noutput_file = \"b.json\"\n",
        )
        .unwrap();
        config.merge(other);
        assert_eq!(config.files.input_file, "a.txt");
        assert_eq!(config.files.output_file, "b.json");
    }

    #[test]
    fn test_tilde_expansion() {
        let config =
            ConverterConfig::from_toml("[files]\ninput_file = \"~/listing.txt\"\n").unwrap();
        assert!(!config.input_path().to_string_lossy().starts_with('~'));
    }
}
