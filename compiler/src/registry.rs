use std::collections::HashMap;

use crate::operation::Operation;

/// How a registered block kind contributes to the compiled sequence.
#[derive(Debug, Clone, PartialEq)]
pub enum Handler {
    /// Emit exactly one primitive operation.
    Emit(Operation),
    /// Compile the nested body once, then replicate the compiled
    /// sub-sequence by the block's resolved repeat count.
    Unroll,
}

/// Registry of the block kinds the compiler understands, indexed by kind tag.
///
/// New kinds are added by registering a handler; the traversal itself never
/// changes. Blocks decoded as `Unknown` keep their parameter and body, so a
/// kind registered at runtime compiles like any built-in one.
#[derive(Debug, Clone)]
pub struct Registry {
    handlers: HashMap<String, Handler>,
}

impl Registry {
    /// A registry that recognizes nothing.
    pub fn empty() -> Self {
        Registry {
            handlers: HashMap::new(),
        }
    }

    /// The stock vocabulary: the three movement blocks and the loop block.
    pub fn builtin() -> Self {
        let mut registry = Registry::empty();
        registry.register("moveForward", Handler::Emit(Operation::MoveForward));
        registry.register("turnRight", Handler::Emit(Operation::TurnRight));
        registry.register("turnLeft", Handler::Emit(Operation::TurnLeft));
        registry.register("while", Handler::Unroll);
        registry
    }

    pub fn register(&mut self, kind: impl Into<String>, handler: Handler) {
        self.handlers.insert(kind.into(), handler);
    }

    pub fn get(&self, kind: &str) -> Option<&Handler> {
        self.handlers.get(kind)
    }

    /// All registered kind tags (for editor palettes and debugging).
    pub fn kinds(&self) -> Vec<&str> {
        self.handlers.keys().map(|tag| tag.as_str()).collect()
    }
}

impl Default for Registry {
    fn default() -> Self {
        Registry::builtin()
    }
}
