use serde_json::Value;

use crate::block::Block;

/// Decode an editor payload into a block list.
///
/// The editor serializes each block as an object with a `type` tag, an
/// optional `value1` repeat parameter and an optional `innerBlocks` array;
/// the descriptive spellings `kind`, `parameter` and `children` are accepted
/// as well. The payload itself is normally an array of such objects;
/// anything else decodes to an empty list.
pub fn decode_blocks(value: &Value) -> Vec<Block> {
    match value {
        Value::Array(items) => items.iter().map(decode_block).collect(),
        _ => Vec::new(),
    }
}

/// Decode a single block node. Never fails: a node that is not an object, or
/// an object without a string kind tag, decodes to [`Block::Unknown`] with an
/// empty tag, which no handler matches.
pub fn decode_block(value: &Value) -> Block {
    let kind = kind_tag(value);
    let parameter = parameter(value);
    let body = body(value);

    match kind.as_str() {
        "moveForward" => Block::MoveForward,
        "turnRight" => Block::TurnRight,
        "turnLeft" => Block::TurnLeft,
        "while" => Block::While {
            count: parameter,
            body,
        },
        _ => Block::Unknown {
            kind,
            parameter,
            body,
        },
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// First matching field on an object. `Value::get` returns None for
/// non-objects, so this needs no shape check of its own.
fn field<'a>(value: &'a Value, names: &[&str]) -> Option<&'a Value> {
    names.iter().find_map(|name| value.get(*name))
}

fn kind_tag(value: &Value) -> String {
    field(value, &["type", "kind"])
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

/// The raw repeat parameter. Numbers and other scalars are kept in their
/// JSON textual form so the compiler sees one representation.
fn parameter(value: &Value) -> Option<String> {
    match field(value, &["value1", "parameter"])? {
        Value::String(text) => Some(text.clone()),
        Value::Null => None,
        other => Some(other.to_string()),
    }
}

/// The nested body. A missing field, or one that is not an array, decodes to
/// an empty body.
fn body(value: &Value) -> Vec<Block> {
    match field(value, &["innerBlocks", "children"]) {
        Some(items @ Value::Array(_)) => decode_blocks(items),
        _ => Vec::new(),
    }
}
