use crate::mapping::DEFAULT_MAPPING_PATH;
use config as config_rs;
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

/// Name of the optional settings file looked up inside the project directory.
pub const CONFIG_FILE_STEM: &str = "tsrg-apply";
pub const ENV_PREFIX: &str = "TSRG_APPLY";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AppConfig {
    /// Mapping file location relative to the project directory.
    pub mapping_path: String,
    /// Skip every "press Enter" prompt.
    pub assume_yes: bool,
    pub json_logs: bool,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config error: {0}")]
    Config(#[from] config_rs::ConfigError),
}

/// Builds the settings for one run.
///
/// Precedence, lowest first: defaults, `<project_dir>/tsrg-apply.toml`,
/// `TSRG_APPLY_*` environment variables, then the `--yes` flag.
pub fn load_config(project_dir: &Path, assume_yes: bool) -> Result<AppConfig, ConfigError> {
    let mut builder = config_rs::Config::builder()
        .set_default("mapping_path", DEFAULT_MAPPING_PATH)?
        .set_default("assume_yes", false)?
        .set_default("json_logs", false)?
        .add_source(config_rs::File::from(project_dir.join(CONFIG_FILE_STEM)).required(false))
        .add_source(config_rs::Environment::with_prefix(ENV_PREFIX).try_parsing(true));

    // The flag can only switch prompts off, never back on.
    if assume_yes {
        builder = builder.set_override("assume_yes", true)?;
    }

    Ok(builder.build()?.try_deserialize()?)
}
