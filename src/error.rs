use std::path::PathBuf;

use thiserror::Error;

/// Application errors.
#[derive(Debug, Error)]
pub(crate) enum Error {
    #[error("Failed to read schema: {}", .path.display())]
    SchemaRead {
        path: PathBuf,
        #[source]
        cause: std::io::Error,
    },

    #[error("Failed to parse schema {}:\n  {message}", .path.display())]
    SchemaParse { path: PathBuf, message: String },

    #[error("Schema {} is not a mapping at the top level", .path.display())]
    SchemaNotObject { path: PathBuf },

    #[error("No schema files found in the given inputs")]
    NoInputs,

    #[error("Multiple inputs require --out-dir.\n  Use --out-dir to write one template per schema.")]
    OutputDirRequired,

    #[error("Invalid include pattern '{pattern}': {message}")]
    InvalidGlob { pattern: String, message: String },

    #[error("Failed to walk directory: {message}")]
    Walk { message: String },

    #[error("Failed to parse config: {message}")]
    ConfigParse { message: String },

    #[error("Your '.confgen.yaml' configuration is invalid.\n\n{message}")]
    ConfigValidation { message: String },

    #[error("Config file already exists: {}\n  Use --override to replace it.", .path.display())]
    ConfigExists { path: PathBuf },

    #[error("{count} schema problem(s) found")]
    ProblemsFound { count: usize },

    #[error("Internal error: {0}")]
    Internal(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Result type alias for this crate.
pub(crate) type Result<T> = std::result::Result<T, Error>;
