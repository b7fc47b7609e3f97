use crate::error::{Error, Result};
use crate::schema::DEFAULT_INCLUDE;
use crate::template::{DEFAULT_MAX_REF_DEPTH, DEFAULT_WRAP_WIDTH, GenerateOptions};

use std::fs;
use std::path::{Path, PathBuf};

use globset::Glob;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Config file name, looked up in the current directory.
pub const CONFIG_FILE_NAME: &str = ".confgen.yaml";

/// Narrowest comment width accepted.
const MIN_WRAP_WIDTH: usize = 10;

/// Path of the global config file: `<config_dir>/confgen/config.yaml`.
pub(crate) fn global_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("confgen").join("config.yaml"))
}

/// Locate the config file to use: `.confgen.yaml` in `dir`, else the global
/// one. Returns None if neither exists.
pub(crate) fn find(dir: &Path) -> Option<PathBuf> {
    let local = dir.join(CONFIG_FILE_NAME);
    if local.is_file() {
        return Some(local);
    }
    global_path().filter(|path| path.is_file())
}

/// Load the effective config for `dir`, falling back to defaults.
pub(crate) fn load(dir: &Path) -> Result<Config> {
    match find(dir) {
        Some(path) => load_file(&path),
        None => Ok(Config::default()),
    }
}

/// Load and validate a specific config file.
pub(crate) fn load_file(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    parse(&content)
}

fn parse(content: &str) -> Result<Config> {
    // An empty file deserializes as YAML null.
    if content.trim().is_empty() {
        return Config::try_from(RawConfig::default());
    }
    let raw: RawConfig = serde_yaml::from_str(content).map_err(|e| Error::ConfigParse {
        message: e.to_string(),
    })?;
    Config::try_from(raw)
}

// Raw type for permissive YAML parsing. Missing fields get default values
// instead of parse errors, allowing validation to collect all errors at once.

/// confgen configuration.
#[derive(Debug, Deserialize, Serialize, JsonSchema)]
#[serde(default)]
#[schemars(title = "confgen configuration")]
pub(crate) struct RawConfig {
    /// Width of description comments in generated templates, not counting
    /// indentation and the comment marker.
    pub wrap_width: usize,

    /// How many `$ref` pointers may be followed inside one another before
    /// generation stops expanding array items.
    pub max_ref_depth: usize,

    /// Omit the empty line written before each documented field.
    pub compact: bool,

    /// Glob that files must match when a directory is given as input.
    pub include: String,

    /// Treat unresolved references and malformed arrays as errors.
    pub strict: bool,
}

impl Default for RawConfig {
    fn default() -> Self {
        Self {
            wrap_width: DEFAULT_WRAP_WIDTH,
            max_ref_depth: DEFAULT_MAX_REF_DEPTH,
            compact: false,
            include: DEFAULT_INCLUDE.to_string(),
            strict: false,
        }
    }
}

// Validated type used by the application. Guaranteed valid after TryFrom conversion.

/// Effective configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Config {
    pub generate: GenerateOptions,
    pub include: String,
    pub strict: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            generate: GenerateOptions::default(),
            include: DEFAULT_INCLUDE.to_string(),
            strict: false,
        }
    }
}

impl TryFrom<RawConfig> for Config {
    type Error = Error;

    fn try_from(raw: RawConfig) -> Result<Self> {
        let mut errors = Vec::new();

        if raw.wrap_width < MIN_WRAP_WIDTH {
            errors.push(format!(
                "  - wrap_width: must be at least {MIN_WRAP_WIDTH}, got {}",
                raw.wrap_width
            ));
        }

        if raw.max_ref_depth == 0 {
            errors.push("  - max_ref_depth: must be at least 1".to_string());
        }

        if raw.include.is_empty() {
            errors.push("  - include: pattern is required".to_string());
        } else if let Err(e) = Glob::new(&raw.include) {
            errors.push(format!("  - include: invalid pattern: {}", e.kind()));
        }

        if !errors.is_empty() {
            return Err(Error::ConfigValidation {
                message: errors.join("\n"),
            });
        }

        Ok(Config {
            generate: GenerateOptions {
                wrap_width: raw.wrap_width,
                max_ref_depth: raw.max_ref_depth,
                blank_line_before_comments: !raw.compact,
            },
            include: raw.include,
            strict: raw.strict,
        })
    }
}

impl From<&Config> for RawConfig {
    fn from(config: &Config) -> Self {
        Self {
            wrap_width: config.generate.wrap_width,
            max_ref_depth: config.generate.max_ref_depth,
            compact: !config.generate.blank_line_before_comments,
            include: config.include.clone(),
            strict: config.strict,
        }
    }
}
