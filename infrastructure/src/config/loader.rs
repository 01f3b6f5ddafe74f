//! Configuration file loader with multi-source merging

use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Format, Serialized, Toml},
};
use std::path::PathBuf;
use tracing::debug;

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. Explicit config path (if provided)
    /// 2. Project root: `./tidyquote.toml` or `./.tidyquote.toml`
    /// 3. XDG config: `$XDG_CONFIG_HOME/tidyquote/config.toml`
    /// 4. Default values
    pub fn load(config_path: Option<&PathBuf>) -> Result<FileConfig, Box<figment::Error>> {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                debug!("Merging global config: {}", global_path.display());
                figment = figment.merge(Toml::file(&global_path));
            }
        }

        if let Some(path) = Self::project_config_path() {
            debug!("Merging project config: {}", path.display());
            figment = figment.merge(Toml::file(&path));
        }

        if let Some(path) = config_path {
            debug!("Merging explicit config: {}", path.display());
            figment = figment.merge(Toml::file(path));
        }

        figment.extract().map_err(Box::new)
    }

    /// Load only default configuration (for --no-config)
    pub fn load_defaults() -> FileConfig {
        FileConfig::default()
    }

    /// Get the global config file path
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("tidyquote").join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        for filename in &["tidyquote.toml", ".tidyquote.toml"] {
            let path = PathBuf::from(filename);
            if path.exists() {
                return Some(path);
            }
        }
        None
    }

    /// Print the config file locations being used (for debugging)
    pub fn print_config_sources() {
        println!("Configuration sources (in priority order):");

        if let Some(path) = Self::project_config_path() {
            println!("  [FOUND] Project: {}", path.display());
        } else {
            println!("  [     ] Project: ./tidyquote.toml or ./.tidyquote.toml");
        }

        if let Some(path) = Self::global_config_path() {
            if path.exists() {
                println!("  [FOUND] Global:  {}", path.display());
            } else {
                println!("  [     ] Global:  {}", path.display());
            }
        }

        println!("  [     ] Default: built-in defaults");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tidyquote_domain::ServiceType;

    #[test]
    fn test_load_defaults() {
        let config = ConfigLoader::load_defaults();
        assert_eq!(config.rates.len(), ServiceType::ALL.len());
        assert!(config.panels.is_empty());
        assert_eq!(config.ui.panel_transition_ms, 300);
    }

    #[test]
    fn test_global_config_path_returns_some() {
        // Should return a path (even if file doesn't exist)
        let path = ConfigLoader::global_config_path();
        assert!(path.is_some());
        assert!(path.unwrap().to_string_lossy().contains("tidyquote"));
    }

    #[test]
    fn test_toml_overrides_merge_over_defaults() {
        let config: FileConfig = Figment::new()
            .merge(Serialized::defaults(FileConfig::default()))
            .merge(Toml::string(
                r#"
                [rates]
                residential = 250.0

                [ui]
                feedback_hide_ms = 2000
                "#,
            ))
            .extract()
            .unwrap();

        assert_eq!(config.rates["residential"], 250.0);
        // Untouched keys keep their defaults.
        assert_eq!(config.rates["commercial"], 1000.0);
        assert_eq!(config.ui.feedback_hide_ms, 2000);
        assert_eq!(config.ui.panel_transition_ms, 300);
    }

    #[test]
    fn test_explicit_file_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("quote.toml");
        std::fs::write(&path, "[rates]\ncommercial = 900.0\n").unwrap();

        let config = ConfigLoader::load(Some(&path)).unwrap();
        assert_eq!(config.rates["commercial"], 900.0);
        assert_eq!(config.rates["residential"], 200.0);
    }
}
