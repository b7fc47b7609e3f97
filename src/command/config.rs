use crate::cli::ConfigCommand;
use crate::config::{self, CONFIG_FILE_NAME, RawConfig};
use crate::error::{Error, Result};
use crate::output::Output;
use crate::template::{self, GenerateOptions};

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Execute the `config` subcommand.
pub(crate) fn run(command: Option<ConfigCommand>, output: &Output) -> Result<()> {
    match command {
        Some(ConfigCommand::Validate) => validate(output),
        Some(ConfigCommand::Schema) => crate::command::schema(),
        Some(ConfigCommand::Show) => show(),
        Some(ConfigCommand::New {
            path,
            global,
            override_existing,
        }) => {
            let target = new_config_path(path, global)?;
            new(&target, override_existing)?;
            output.success(&format!("Created: {}", target.display()));
            Ok(())
        }
        None => {
            // Show help when no subcommand is given
            use clap::CommandFactory;
            let mut cmd = crate::cli::Cli::command();
            let Some(config_cmd) = cmd.find_subcommand_mut("config") else {
                return Err(Error::Internal("config subcommand missing".to_string()));
            };
            config_cmd.print_help()?;
            println!();
            Ok(())
        }
    }
}

/// Validate the config file that would be used from the current directory.
fn validate(output: &Output) -> Result<()> {
    let cwd = env::current_dir()?;
    match config::find(&cwd) {
        Some(path) => {
            config::load_file(&path)?;
            output.success(&format!("Config is valid: {}", path.display()));
        }
        None => output.success("No config file found, using defaults"),
    }
    Ok(())
}

/// Print the effective configuration as YAML.
fn show() -> Result<()> {
    let cwd = env::current_dir()?;
    let source = config::find(&cwd);
    let config = config::load(&cwd)?;

    let yaml = serde_yaml::to_string(&RawConfig::from(&config))
        .map_err(|e| Error::Internal(format!("Failed to serialize config: {e}")))?;
    match source {
        Some(path) => println!("# source: {}", path.display()),
        None => println!("# source: defaults"),
    }
    print!("{yaml}");
    Ok(())
}

fn new_config_path(path: Option<PathBuf>, global: bool) -> Result<PathBuf> {
    if let Some(path) = path {
        return Ok(path);
    }
    if global {
        return config::global_path()
            .ok_or_else(|| Error::Internal("Could not determine config directory".to_string()));
    }
    Ok(env::current_dir()?.join(CONFIG_FILE_NAME))
}

/// Write a config file documenting every option, generated from the config
/// schema itself.
fn new(target: &Path, override_existing: bool) -> Result<()> {
    if target.exists() && !override_existing {
        return Err(Error::ConfigExists {
            path: target.to_path_buf(),
        });
    }

    let schema = crate::command::schema::config_schema()?;
    let (text, _) = template::render_to_string(&schema, &GenerateOptions::default())?;

    if let Some(parent) = target.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }
    fs::write(target, text)?;
    Ok(())
}
