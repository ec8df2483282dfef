use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Default template for the `prerelease.feature` key
///
/// `{sha}` is the feature tag label (or short origin sha fallback), `{count}`
/// the number of commits since the origin.
pub const DEFAULT_FEATURE_TEMPLATE: &str = "feature.{sha}.{count}";

/// Represents the complete configuration for branch-version.
///
/// Contains the branch names to compare and prerelease template patterns.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Config {
    #[serde(default)]
    pub branches: BranchesConfig,

    #[serde(default)]
    pub prerelease: PrereleaseConfig,
}

/// Branch names used as comparison baselines.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct BranchesConfig {
    #[serde(default = "default_develop_branch")]
    pub develop: String,
}

fn default_develop_branch() -> String {
    "develop".to_string()
}

impl Default for BranchesConfig {
    fn default() -> Self {
        BranchesConfig {
            develop: default_develop_branch(),
        }
    }
}

/// Prerelease template configuration, keyed by branch kind.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct PrereleaseConfig {
    #[serde(default = "default_feature_template")]
    pub feature: String,
}

fn default_feature_template() -> String {
    DEFAULT_FEATURE_TEMPLATE.to_string()
}

impl Default for PrereleaseConfig {
    fn default() -> Self {
        PrereleaseConfig {
            feature: default_feature_template(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            branches: BranchesConfig::default(),
            prerelease: PrereleaseConfig::default(),
        }
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `branchversion.toml` in current directory
/// 3. `.branchversion.toml` in user config directory
/// 4. Default configuration if no file found
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&str>) -> Result<Config, Box<dyn std::error::Error>> {
    let config_str = if let Some(path) = config_path {
        fs::read_to_string(path)?
    } else if Path::new("./branchversion.toml").exists() {
        fs::read_to_string("./branchversion.toml")?
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join(".branchversion.toml");
        if config_path.exists() {
            fs::read_to_string(config_path)?
        } else {
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    let config: Config = toml::from_str(&config_str)?;
    Ok(config)
}
