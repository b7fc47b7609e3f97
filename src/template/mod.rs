//! Example configuration generation from JSON Schema.
//!
//! The generator walks a schema document depth-first and writes a commented,
//! YAML-compatible template: descriptions become `#` comments, enums list
//! their options, defaults (or placeholders) fill in values, and arrays whose
//! `items` point elsewhere in the document via `$ref` are expanded in place.

mod pointer;
mod render;
mod walk;
mod wrap;

use std::fmt;
use std::io::Write;

use serde_json::Value;

use crate::error::{Error, Result};

pub(crate) use walk::Walker;

/// Comment wrap width used when nothing else is configured.
pub const DEFAULT_WRAP_WIDTH: usize = 70;

/// Maximum number of nested `$ref` follows when nothing else is configured.
pub const DEFAULT_MAX_REF_DEPTH: usize = 16;

/// Options controlling the generated template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct GenerateOptions {
    /// Width of comment text, excluding indentation and the `# ` prefix.
    pub wrap_width: usize,
    pub max_ref_depth: usize,
    pub blank_line_before_comments: bool,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            wrap_width: DEFAULT_WRAP_WIDTH,
            max_ref_depth: DEFAULT_MAX_REF_DEPTH,
            blank_line_before_comments: true,
        }
    }
}

/// A part of the schema that could not be rendered completely.
///
/// Generation never stops on these; the affected branch is emitted as a bare
/// list marker and the walk continues.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Diagnostic {
    UnresolvedRef { path: String, pointer: String },
    InvalidRef { path: String },
    MissingItems { path: String },
    RefDepthExceeded {
        path: String,
        pointer: String,
        limit: usize,
    },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::UnresolvedRef { path, pointer } => {
                write!(f, "{path}: unresolved reference \"{pointer}\"")
            }
            Diagnostic::InvalidRef { path } => write!(f, "{path}: \"$ref\" is not a string"),
            Diagnostic::MissingItems { path } => {
                write!(f, "{path}: array has no \"items\" schema")
            }
            Diagnostic::RefDepthExceeded {
                path,
                pointer,
                limit,
            } => write!(
                f,
                "{path}: not following \"{pointer}\", reference depth limit ({limit}) reached"
            ),
        }
    }
}

/// Diagnostics collected during one generation.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub(crate) struct Report {
    pub diagnostics: Vec<Diagnostic>,
}

impl Report {
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

/// Write the example configuration for `schema` to `out`.
///
/// Only I/O failures on `out` are errors.
pub(crate) fn generate<W: Write>(
    schema: &Value,
    out: &mut W,
    options: &GenerateOptions,
) -> Result<Report> {
    let mut walker = Walker::new(schema, out, options);
    walker.run()?;
    Ok(walker.finish())
}

/// Generate the example configuration into a string.
pub(crate) fn render_to_string(
    schema: &Value,
    options: &GenerateOptions,
) -> Result<(String, Report)> {
    let mut buf = Vec::new();
    let report = generate(schema, &mut buf, options)?;
    let text = String::from_utf8(buf)
        .map_err(|e| Error::Internal(format!("Generated template is not UTF-8: {e}")))?;
    Ok((text, report))
}
