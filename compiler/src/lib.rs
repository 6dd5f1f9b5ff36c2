pub mod compile;
pub mod diagnostic;
pub mod operation;
pub mod registry;

pub use compile::{Compiled, compile_program, compile_program_with_registry};
pub use diagnostic::{BlockPath, Diagnostic, DiagnosticKind};
pub use operation::Operation;
pub use registry::{Handler, Registry};
