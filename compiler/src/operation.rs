use std::fmt;

use serde::{Serialize, Serializer};

/// One primitive, directly executable instruction.
///
/// Operations are atomic: nesting and repetition are resolved at compile
/// time, so the engine steps through a sequence one element at a time with
/// nothing left to interpret.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    MoveForward,
    TurnRight,
    TurnLeft,
}

impl Operation {
    /// The kind tag the engine dispatches on.
    pub fn kind(&self) -> &'static str {
        match self {
            Operation::MoveForward => "moveForward",
            Operation::TurnRight => "turnRight",
            Operation::TurnLeft => "turnLeft",
        }
    }

    /// Numeric payload for kinds that carry a magnitude. None of the current
    /// kinds do; the wire shape reserves the slot for kinds that will.
    pub fn value(&self) -> Option<f64> {
        match self {
            Operation::MoveForward | Operation::TurnRight | Operation::TurnLeft => None,
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind())
    }
}

/// Wire shape consumed by the game engine: `{"type": "...", "value": n}`,
/// with `value` omitted when the kind carries none.
#[derive(Serialize)]
struct WireOperation<'a> {
    #[serde(rename = "type")]
    kind: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    value: Option<f64>,
}

impl Serialize for Operation {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        WireOperation {
            kind: self.kind(),
            value: self.value(),
        }
        .serialize(serializer)
    }
}
