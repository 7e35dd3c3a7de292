use std::{num::NonZeroUsize, path::Path};

use anyhow::Context;
use config::{File, FileFormat};
use serde::Deserialize;

pub const DEFAULT_CONFIG_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../config.toml");

/// Loads the configuration by merging the given files, later files taking
/// precedence.
pub fn load(paths: &[impl AsRef<Path>]) -> anyhow::Result<Config> {
    paths
        .iter()
        .try_fold(config::Config::builder(), |builder, path| {
            let path = path.as_ref();
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file at {}", path.display()))?;
            let source = File::from_str(&content, FileFormat::Toml);
            anyhow::Ok(builder.add_source(source))
        })?
        .build()?
        .try_deserialize()
        .context("Failed to load config")
}

#[derive(Debug, Deserialize)]
pub struct Config {
    pub form: FormConfig,
    pub validation: ValidationConfig,
}

#[derive(Debug, Deserialize)]
pub struct FormConfig {
    pub clear_on_submit: bool,
}

#[derive(Debug, Deserialize)]
pub struct ValidationConfig {
    pub first_name_min_length: NonZeroUsize,
}
