use serde_json::Value;

/// Resolve an internal `$ref` pointer such as `#/definitions/item`.
///
/// The pointer is always resolved against `root`, never against the node
/// that contains the reference. Returns `None` when any segment is missing.
pub(crate) fn resolve<'a>(root: &'a Value, pointer: &str) -> Option<&'a Value> {
    let trimmed = pointer.trim_start_matches(['#', '/']);
    if trimmed.is_empty() {
        return Some(root);
    }

    trimmed
        .split('/')
        .try_fold(root, |node, segment| step(node, &unescape(segment)))
}

fn step<'a>(node: &'a Value, segment: &str) -> Option<&'a Value> {
    match node {
        Value::Object(map) => map.get(segment),
        Value::Array(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
        _ => None,
    }
}

// RFC 6901: `~1` must be decoded before `~0`.
fn unescape(segment: &str) -> String {
    segment.replace("~1", "/").replace("~0", "~")
}
