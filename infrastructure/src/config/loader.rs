//! Configuration file loader with multi-source merging

use std::path::PathBuf;

use figment::{
    providers::{Format, Serialized, Toml},
    Figment,
};

use super::file_config::GatewayFileConfig;

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. Explicit config path (if provided)
    /// 2. Project root: `./toolgate.toml` or `./.toolgate.toml`
    /// 3. Default values
    pub fn load(config_path: Option<&PathBuf>) -> Result<GatewayFileConfig, Box<figment::Error>> {
        let mut figment =
            Figment::new().merge(Serialized::defaults(GatewayFileConfig::default()));

        for filename in &["toolgate.toml", ".toolgate.toml"] {
            let path = PathBuf::from(filename);
            if path.exists() {
                figment = figment.merge(Toml::file(&path));
                break;
            }
        }

        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        figment.extract().map_err(Box::new)
    }

    /// Built-in defaults only, skipping file discovery entirely.
    pub fn load_defaults() -> GatewayFileConfig {
        GatewayFileConfig::default()
    }
}
