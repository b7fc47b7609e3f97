use std::io::Write;

use serde_json::Value;

use super::pointer;
use super::render::{Emitter, Label, node_type, render_node};
use super::{Diagnostic, GenerateOptions, Report};
use crate::error::Result;

/// Depth-first walk over a schema document.
///
/// Holds the state of exactly one generation: the root every `$ref` is
/// resolved against, the nesting level and key path of the node being
/// rendered, and how many references are currently being followed. Level
/// and path are pushed before and popped after every child, so they are the
/// same after a node's children as before them.
pub(crate) struct Walker<'a, 'w, W: Write> {
    root: &'a Value,
    options: &'a GenerateOptions,
    out: Emitter<'w, W>,
    level: isize,
    path: Vec<&'a str>,
    ref_depth: usize,
    diagnostics: Vec<Diagnostic>,
}

impl<'a, 'w, W: Write> Walker<'a, 'w, W> {
    pub fn new(root: &'a Value, out: &'w mut W, options: &'a GenerateOptions) -> Self {
        Self {
            root,
            options,
            out: Emitter::new(out),
            // The root has no line of its own; its children render at level 0.
            level: -1,
            path: Vec::new(),
            ref_depth: 0,
            diagnostics: Vec::new(),
        }
    }

    /// Walk the whole document from its root.
    pub fn run(&mut self) -> Result<()> {
        self.walk(self.root, Label::Anonymous)
    }

    pub fn finish(self) -> Report {
        Report {
            diagnostics: self.diagnostics,
        }
    }

    fn walk(&mut self, node: &'a Value, label: Label<'a>) -> Result<()> {
        let name = self.path.last().copied();
        render_node(&mut self.out, node, name, label, self.level, self.options)?;

        if node_type(node) == Some("array") && node.get("default").is_none() {
            self.level += 1;
            let result = self.walk_items(node);
            self.level -= 1;
            result?;
        }

        if let Some(Value::Object(properties)) = node.get("properties") {
            for (key, child) in properties {
                self.level += 1;
                self.path.push(key);
                let result = self.walk(child, Label::Key(key));
                self.path.pop();
                self.level -= 1;
                result?;
            }
        }
        Ok(())
    }

    /// Render the element of an array node one level below it.
    fn walk_items(&mut self, node: &'a Value) -> Result<()> {
        let Some(items) = node.get("items") else {
            self.report(|path| Diagnostic::MissingItems { path });
            return self.out.marker(self.level);
        };

        let pointer = match items.get("$ref") {
            None => return self.walk(items, Label::ListItem),
            Some(Value::String(pointer)) => pointer,
            Some(_) => {
                self.report(|path| Diagnostic::InvalidRef { path });
                return self.out.marker(self.level);
            }
        };

        if self.ref_depth >= self.options.max_ref_depth {
            let limit = self.options.max_ref_depth;
            self.report(|path| Diagnostic::RefDepthExceeded {
                path,
                pointer: pointer.clone(),
                limit,
            });
            return self.out.marker(self.level);
        }

        let Some(target) = pointer::resolve(self.root, pointer) else {
            self.report(|path| Diagnostic::UnresolvedRef {
                path,
                pointer: pointer.clone(),
            });
            return self.out.marker(self.level);
        };

        self.ref_depth += 1;
        let result = self.walk(target, Label::ListItem);
        self.ref_depth -= 1;
        result
    }

    fn report(&mut self, diagnostic: impl FnOnce(String) -> Diagnostic) {
        let path = if self.path.is_empty() {
            "<root>".to_string()
        } else {
            self.path.join(".")
        };
        self.diagnostics.push(diagnostic(path));
    }
}
