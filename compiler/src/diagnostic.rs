use std::fmt;

use codespan_reporting::diagnostic::Severity;

/// Position of a block in the tree: the trail of child indexes from the
/// top-level list down to the block itself. Editor payloads carry no source
/// spans, so the trail is what locates a block for highlighting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockPath(Vec<usize>);

impl BlockPath {
    /// The path above the top-level list. Child paths hang off this.
    pub fn root() -> Self {
        BlockPath(Vec::new())
    }

    /// Path of the `index`-th block one nesting level below this one.
    pub fn child(&self, index: usize) -> Self {
        let mut trail = self.0.clone();
        trail.push(index);
        BlockPath(trail)
    }

    pub fn indexes(&self) -> &[usize] {
        &self.0
    }
}

impl fmt::Display for BlockPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let trail: Vec<String> = self.0.iter().map(|index| index.to_string()).collect();
        write!(f, "{}", trail.join("."))
    }
}

/// What a diagnostic is about.
#[derive(Debug, Clone, PartialEq)]
pub enum DiagnosticKind {
    /// A block whose kind tag has no registered handler. The block
    /// contributed nothing to the output.
    UnknownKind { kind: String },
    /// A loop parameter that was present but did not resolve to a positive
    /// integer. The body was still compiled once.
    NormalizedCount { raw: String },
}

/// A non-fatal report about one input block.
///
/// Diagnostics never abort compilation. The caller decides whether they are
/// warnings or grounds to reject the program before execution.
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub path: BlockPath,
    pub severity: Severity,
}

impl Diagnostic {
    pub fn unknown_kind(kind: impl Into<String>, path: BlockPath) -> Self {
        Diagnostic {
            kind: DiagnosticKind::UnknownKind { kind: kind.into() },
            path,
            severity: Severity::Error,
        }
    }

    pub fn normalized_count(raw: impl Into<String>, path: BlockPath) -> Self {
        Diagnostic {
            kind: DiagnosticKind::NormalizedCount { raw: raw.into() },
            path,
            severity: Severity::Warning,
        }
    }

    pub fn message(&self) -> String {
        match &self.kind {
            DiagnosticKind::UnknownKind { kind } if kind.is_empty() => {
                format!("block {} has no kind tag", self.path)
            }
            DiagnosticKind::UnknownKind { kind } => {
                format!("unknown block kind `{}` at block {}", kind, self.path)
            }
            DiagnosticKind::NormalizedCount { raw } => {
                format!(
                    "loop count `{}` on block {} is not a positive integer",
                    raw, self.path
                )
            }
        }
    }

    /// Convert to a codespan-reporting Diagnostic for display.
    pub fn to_diagnostic(&self) -> codespan_reporting::diagnostic::Diagnostic<usize> {
        let note = match &self.kind {
            DiagnosticKind::UnknownKind { .. } => "the block contributed no operations",
            DiagnosticKind::NormalizedCount { .. } => "the body was compiled as if the count were 1",
        };
        codespan_reporting::diagnostic::Diagnostic::new(self.severity)
            .with_message(self.message())
            .with_notes(vec![note.to_string()])
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}
