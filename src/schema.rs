use crate::error::{Error, Result};

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use globset::{Glob, GlobMatcher};
use indexmap::IndexSet;
use serde_json::Value;
use walkdir::WalkDir;

/// Input path meaning "read the schema from stdin".
pub const STDIN: &str = "-";

/// Default include pattern for directory inputs.
pub const DEFAULT_INCLUDE: &str = "*.{json,yaml,yml}";

/// A schema document loaded from a file or stdin.
#[derive(Debug)]
pub(crate) struct SchemaFile {
    pub path: PathBuf,
    pub document: Value,
}

impl SchemaFile {
    /// Name used for the generated file: `<stem>.example.yaml`.
    pub fn output_name(&self) -> String {
        if self.path == Path::new(STDIN) {
            return "stdin.example.yaml".to_string();
        }
        let stem = self
            .path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "schema".to_string());
        format!("{stem}.example.yaml")
    }
}

/// Load a schema file. JSON and YAML are both accepted; JSON is tried first
/// so its error messages are reported for `.json` files.
pub(crate) fn load(path: &Path) -> Result<SchemaFile> {
    let content = if path == Path::new(STDIN) {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .map_err(|cause| Error::SchemaRead {
                path: path.to_path_buf(),
                cause,
            })?;
        buf
    } else {
        fs::read_to_string(path).map_err(|cause| Error::SchemaRead {
            path: path.to_path_buf(),
            cause,
        })?
    };

    let document = parse(path, &content)?;
    Ok(SchemaFile {
        path: path.to_path_buf(),
        document,
    })
}

/// Parse schema text, preserving key order.
pub(crate) fn parse(path: &Path, content: &str) -> Result<Value> {
    let is_json = path.extension().is_some_and(|ext| ext == "json");

    let document: Value = match serde_json::from_str(content) {
        Ok(value) => value,
        Err(json_err) if is_json => {
            return Err(Error::SchemaParse {
                path: path.to_path_buf(),
                message: json_err.to_string(),
            });
        }
        Err(_) => serde_yaml::from_str(content).map_err(|e| Error::SchemaParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?,
    };

    if !document.is_object() {
        return Err(Error::SchemaNotObject {
            path: path.to_path_buf(),
        });
    }
    Ok(document)
}

/// Expand inputs into a list of schema paths.
///
/// Files and `-` are taken as given. Directories are walked recursively and
/// only files whose name matches `include` are kept, in sorted order. A path
/// reached more than once is kept at its first position.
pub(crate) fn collect_inputs(inputs: &[PathBuf], include: &str) -> Result<Vec<PathBuf>> {
    let matcher = include_matcher(include)?;
    let mut paths = IndexSet::new();

    for input in inputs {
        if !input.is_dir() {
            paths.insert(input.clone());
            continue;
        }

        for entry in WalkDir::new(input).sort_by_file_name() {
            let entry = entry.map_err(|e| Error::Walk {
                message: e.to_string(),
            })?;
            if entry.file_type().is_file() && matcher.is_match(entry.file_name()) {
                paths.insert(entry.into_path());
            }
        }
    }

    if paths.is_empty() {
        return Err(Error::NoInputs);
    }
    Ok(paths.into_iter().collect())
}

fn include_matcher(pattern: &str) -> Result<GlobMatcher> {
    Glob::new(pattern)
        .map(|glob| glob.compile_matcher())
        .map_err(|e| Error::InvalidGlob {
            pattern: pattern.to_string(),
            message: e.kind().to_string(),
        })
}
