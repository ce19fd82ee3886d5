mod scaffold_config;
mod settings;

pub use scaffold_config::ScaffoldConfig;
pub use settings::{AwsSettings, CatalogSettings, ConfigError, PollingSettings, Settings};
