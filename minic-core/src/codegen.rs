//! Lowering from AST nodes to IR instructions.

use crate::ast::{Ast, Node, NodeId};
use crate::error::CoreError;
use crate::ir::{IrModule, IrOp};

/// Lower `node` and its subtree into `module`.
///
/// The emission context is the explicit `module` parameter; a module
/// belongs to exactly one compile, so generation state is never shared
/// across compiles. The match is exhaustive over the node variants:
/// constructs without a lowering rule fail with
/// [`CoreError::UnsupportedNode`] instead of producing nothing.
pub fn lower(ast: &Ast, node: NodeId, module: &mut IrModule) -> Result<(), CoreError> {
    match ast.node(node) {
        Node::Number(value) => {
            module.push(IrOp::Const(*value));
            Ok(())
        }
        Node::Binary { op, lhs, rhs } => {
            lower(ast, *lhs, module)?;
            lower(ast, *rhs, module)?;
            module.push(op_instruction(*op)?);
            Ok(())
        }
        Node::If { .. } => Err(CoreError::UnsupportedNode("if statement".to_string())),
        Node::While { .. } => Err(CoreError::UnsupportedNode("while loop".to_string())),
        Node::Call { name, .. } => Err(CoreError::UnsupportedNode(format!(
            "call to '{name}'"
        ))),
    }
}

fn op_instruction(op: char) -> Result<IrOp, CoreError> {
    match op {
        '+' => Ok(IrOp::Add),
        '-' => Ok(IrOp::Sub),
        '*' => Ok(IrOp::Mul),
        '/' => Ok(IrOp::Div),
        other => Err(CoreError::UnsupportedNode(format!(
            "binary operator '{other}'"
        ))),
    }
}
