use blocklang::Program;
use blocklang::block::Block;

use crate::diagnostic::{BlockPath, Diagnostic};
use crate::operation::Operation;
use crate::registry::{Handler, Registry};

/// Everything one compile call produces.
#[derive(Debug, Clone, PartialEq)]
pub struct Compiled {
    /// Primitive operations, in execution order.
    pub operations: Vec<Operation>,
    /// Non-fatal reports, in the order the offending blocks were visited.
    pub diagnostics: Vec<Diagnostic>,
}

impl Compiled {
    pub fn empty() -> Self {
        Compiled {
            operations: Vec::new(),
            diagnostics: Vec::new(),
        }
    }

    /// True when compilation raised no diagnostics at all.
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

/// Compile a program against the builtin registry.
pub fn compile_program(program: &Program) -> Compiled {
    compile_program_with_registry(program, &Registry::builtin())
}

/// Compile a program against a caller-supplied registry.
///
/// Compilation is a pure function of its input: it never fails, reads no
/// shared state, and identical inputs yield identical results, so concurrent
/// callers need no coordination. Call-stack depth is proportional to block
/// nesting depth, and total work is proportional to the fully *unrolled*
/// output, which nested loops with large counts amplify; a caller that needs
/// a ceiling must cap the input tree or the resulting sequence itself.
pub fn compile_program_with_registry(program: &Program, registry: &Registry) -> Compiled {
    let mut out = Compiled::empty();
    compile_blocks(&program.blocks, &BlockPath::root(), registry, &mut out);
    out
}

/// Compile one sibling list in order, appending to `out`. Each sibling's
/// contribution is contiguous; siblings never interleave.
fn compile_blocks(blocks: &[Block], path: &BlockPath, registry: &Registry, out: &mut Compiled) {
    for (index, block) in blocks.iter().enumerate() {
        let at = path.child(index);
        match registry.get(block.kind()) {
            Some(Handler::Emit(operation)) => out.operations.push(*operation),
            Some(Handler::Unroll) => unroll(block, &at, registry, out),
            None => out
                .diagnostics
                .push(Diagnostic::unknown_kind(block.kind(), at)),
        }
    }
}

/// Compile the body exactly once, then append the compiled sub-sequence
/// `count` times. Body diagnostics are forwarded once, at the original
/// occurrence, not once per repetition.
fn unroll(block: &Block, path: &BlockPath, registry: &Registry, out: &mut Compiled) {
    let (count, normalized) = resolve_count(block.parameter());
    if let Some(raw) = normalized {
        out.diagnostics
            .push(Diagnostic::normalized_count(raw, path.clone()));
    }

    let mut body = Compiled::empty();
    compile_blocks(block.body(), path, registry, &mut body);
    out.diagnostics.append(&mut body.diagnostics);

    for _ in 0..count {
        out.operations.extend_from_slice(&body.operations);
    }
}

/// Resolve a raw repeat parameter to a count.
///
/// A positive base-10 integer is taken as-is, with no upper bound. Anything
/// else resolves to one, so a loop with a botched count still shows its body
/// in the compiled output; a parameter that was present but invalid is also
/// returned so the caller can flag it.
fn resolve_count(raw: Option<&str>) -> (u64, Option<String>) {
    let Some(raw) = raw else {
        return (1, None);
    };
    match raw.trim().parse::<u64>() {
        Ok(count) if count > 0 => (count, None),
        _ => (1, Some(raw.to_string())),
    }
}
