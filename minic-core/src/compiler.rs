//! Compiler orchestration: source text to a finished IR module.

use crate::codegen;
use crate::error::CoreError;
use crate::ir::IrModule;
use crate::lexer::Lexer;
use crate::parser::Parser;

/// Compile one source string into an IR module.
///
/// The reachable grammar is a single top-level expression:
///
///   expression := NUMBER (OPERATOR expression)?
///
/// Tokens past the expression (a trailing `;` in particular) are left
/// unconsumed. Every call builds fresh lexer, parser, and module
/// instances; nothing is shared between compiles.
pub fn compile(source: &str) -> Result<IrModule, CoreError> {
    let lexer = Lexer::new(source);
    let mut parser = Parser::new(lexer)?;
    let root = parser.parse_expression()?;
    let ast = parser.into_ast();

    let mut module = IrModule::new();
    codegen::lower(&ast, root, &mut module)?;
    Ok(module)
}
