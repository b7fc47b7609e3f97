mod check;
mod completions;
mod config;
mod generate;
mod man;
mod schema;

pub(crate) use check::run as check;
pub(crate) use completions::run as completions;
pub(crate) use config::run as config;
pub(crate) use generate::run as generate;
pub(crate) use man::run as man;
pub(crate) use schema::run as schema;

use crate::cli::GenerateSettings;
use crate::config::{self as app_config, Config, RawConfig};
use crate::error::Result;

/// Load the configuration for the current directory and apply flag overrides.
fn effective_config(settings: &GenerateSettings) -> Result<Config> {
    let cwd = std::env::current_dir()?;
    let loaded = app_config::load(&cwd)?;

    let mut raw = RawConfig::from(&loaded);
    if let Some(include) = &settings.include {
        raw.include = include.clone();
    }
    if let Some(width) = settings.width {
        raw.wrap_width = width;
    }
    if let Some(depth) = settings.max_ref_depth {
        raw.max_ref_depth = depth;
    }
    raw.compact |= settings.compact;
    raw.strict |= settings.strict;

    Config::try_from(raw)
}
