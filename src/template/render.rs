use std::io::Write;

use serde_json::Value;

use super::GenerateOptions;
use super::wrap::wrap;
use crate::error::{Error, Result};

/// How a node's value line is labelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Label<'k> {
    /// `key: value`
    Key(&'k str),
    /// Bare value with no key, such as the document root.
    Anonymous,
    /// `- value`, an array element.
    ListItem,
}

/// Line-oriented sink with two-space indentation per level.
pub(crate) struct Emitter<'w, W: Write> {
    out: &'w mut W,
    written: bool,
}

impl<'w, W: Write> Emitter<'w, W> {
    pub fn new(out: &'w mut W) -> Self {
        Self {
            out,
            written: false,
        }
    }

    pub fn line(&mut self, level: isize, text: &str) -> Result<()> {
        writeln!(self.out, "{}{text}", indent(level))?;
        self.written = true;
        Ok(())
    }

    /// Empty separator line. Never emitted at the start of the output.
    pub fn blank(&mut self) -> Result<()> {
        if self.written {
            writeln!(self.out)?;
        }
        Ok(())
    }

    /// Bare `-` list marker.
    pub fn marker(&mut self, level: isize) -> Result<()> {
        self.line(level, "-")
    }
}

fn indent(level: isize) -> String {
    "  ".repeat(usize::try_from(level).unwrap_or(0))
}

/// The placeholder printed for a node's value.
#[derive(Debug, PartialEq)]
enum Placeholder {
    None,
    Inline(String),
    Block(String),
}

/// Render the comments and the value line of a single node.
///
/// `name` is the key the node is documented under, used by enum comments even
/// when the value line itself carries no key.
pub(crate) fn render_node<W: Write>(
    out: &mut Emitter<'_, W>,
    node: &Value,
    name: Option<&str>,
    label: Label<'_>,
    level: isize,
    options: &GenerateOptions,
) -> Result<()> {
    if let Some(Value::String(description)) = node.get("description") {
        let lines = wrap(description, options.wrap_width);
        if !lines.is_empty() {
            if options.blank_line_before_comments {
                out.blank()?;
            }
            for line in lines {
                out.line(level, &format!("# {line}"))?;
            }
        }
    }

    if let Some(Value::Array(values)) = node.get("enum") {
        out.line(
            level,
            &format!("# options for \"{}\" are:", name.unwrap_or_default()),
        )?;
        for value in values {
            out.line(level, &format!("# - \"{}\"", scalar_text(value)))?;
        }
    }

    let placeholder = placeholder(node)?;
    let head = match (label, &placeholder) {
        (Label::Key(key), Placeholder::Inline(value)) => Some(format!("{key}: {value}")),
        (Label::Key(key), _) => Some(format!("{key}:")),
        (Label::ListItem, Placeholder::Inline(value)) => Some(format!("- {value}")),
        (Label::ListItem, _) => Some("-".to_string()),
        (Label::Anonymous, Placeholder::Inline(value)) => Some(value.clone()),
        (Label::Anonymous, _) => None,
    };
    if let Some(head) = head {
        out.line(level, &head)?;
    }

    if let Placeholder::Block(block) = placeholder {
        for line in block.lines() {
            out.line(level + 2, line)?;
        }
    }
    Ok(())
}

fn placeholder(node: &Value) -> Result<Placeholder> {
    let ty = node_type(node);
    match node.get("default") {
        None | Some(Value::Null) => Ok(match ty {
            Some("string") => Placeholder::Inline("\"\"".to_string()),
            _ => Placeholder::None,
        }),
        Some(default @ (Value::Object(_) | Value::Array(_))) => match ty {
            Some("object" | "array") => {
                let yaml = serde_yaml::to_string(default).map_err(|e| {
                    Error::Internal(format!("Failed to serialize default value: {e}"))
                })?;
                Ok(Placeholder::Block(yaml))
            }
            _ => Ok(Placeholder::Inline(default.to_string())),
        },
        Some(default) => scalar_default(default).map(Placeholder::Inline),
    }
}

/// Scalar defaults print as-is. Strings are quoted only where a plain YAML
/// scalar would read back as something else.
fn scalar_default(value: &Value) -> Result<String> {
    let Value::String(text) = value else {
        return Ok(value.to_string());
    };
    let yaml = serde_yaml::to_string(text)
        .map_err(|e| Error::Internal(format!("Failed to serialize default value: {e}")))?;
    let yaml = yaml.trim_end_matches('\n');
    if yaml.contains('\n') {
        // Multi-line strings become block scalars; keep them on one line.
        Ok(value.to_string())
    } else {
        Ok(yaml.to_string())
    }
}

/// The node's `type`. For a list of types, the first one that is not `null`.
pub(crate) fn node_type(node: &Value) -> Option<&str> {
    match node.get("type")? {
        Value::String(ty) => Some(ty),
        Value::Array(types) => types
            .iter()
            .filter_map(Value::as_str)
            .find(|ty| *ty != "null"),
        _ => None,
    }
}

fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
