pub mod block;
pub mod wire;

use serde_json::Value;

use crate::block::Block;

/// A block program, as authored in the visual editor.
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    /// Top-level blocks, in document order.
    pub blocks: Vec<Block>,
}

impl Program {
    pub fn empty() -> Self {
        Program { blocks: Vec::new() }
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Decode a program from an editor payload that has already been parsed
    /// into a `serde_json::Value`. Decoding is total: unrecognized kinds
    /// become [`Block::Unknown`] and malformed structure becomes empty
    /// bodies, never an error.
    pub fn from_value(value: &Value) -> Self {
        Program {
            blocks: wire::decode_blocks(value),
        }
    }

    /// Parse a raw JSON payload and decode it. Only the JSON text itself can
    /// fail to parse; every well-formed JSON value decodes to a program.
    pub fn from_json(payload: &str) -> Result<Self, serde_json::Error> {
        Ok(Self::from_value(&serde_json::from_str(payload)?))
    }
}
