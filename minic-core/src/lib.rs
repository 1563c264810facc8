//! Core compiler pipeline for the minic toy language.
//!
//! The pipeline is:
//!
//!   source text
//!     -> lexer    (tokens)
//!     -> parser   (arena AST)
//!     -> codegen  (typed IR ops)
//!     -> ir       (wasm encoding / textual dump)
//!     -> exec     (wasmi execution session)
//!
//! Front ends (the CLI binary, tests) should depend on this crate
//! rather than reimplementing the pipeline.

// ---------------------------------------------------------------------
// Error handling
// ---------------------------------------------------------------------

pub mod error;

// ---------------------------------------------------------------------
// Front-end: lexing and parsing
// ---------------------------------------------------------------------

pub mod lexer;
pub mod parser;
pub mod ast;

// ---------------------------------------------------------------------
// Back-end: IR, code generation, execution
// ---------------------------------------------------------------------

pub mod ir;
pub mod codegen;
pub mod exec;
pub mod compiler;

// ---------------------------------------------------------------------
// Public API re-exports
// ---------------------------------------------------------------------

pub use compiler::compile;
pub use error::CoreError;
pub use exec::ExecutionSession;
pub use ir::{ENTRY_SYMBOL, IrModule, IrOp};
