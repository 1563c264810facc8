//! Typed intermediate representation and its encodings.
//!
//! An [`IrModule`] is the ordered instruction body of a single exported
//! `main : () -> i32` function. [`IrModule::encode`] produces the wasm
//! binary for the execution engine; [`IrModule::render`] produces the
//! human-readable dump the CLI prints.

use core::fmt;

use wasm_encoder::{
    CodeSection, ExportKind, ExportSection, Function, FunctionSection, Instruction, Module,
    TypeSection, ValType,
};

/// Name of the exported entry function in every encoded module.
pub const ENTRY_SYMBOL: &str = "main";

/// A single stack-machine instruction of the IR.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IrOp {
    /// Push a 32-bit signed constant.
    Const(i32),
    Add,
    Sub,
    Mul,
    Div,
}

impl fmt::Display for IrOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IrOp::Const(value) => write!(f, "i32.const {value}"),
            IrOp::Add => write!(f, "i32.add"),
            IrOp::Sub => write!(f, "i32.sub"),
            IrOp::Mul => write!(f, "i32.mul"),
            IrOp::Div => write!(f, "i32.div_s"),
        }
    }
}

/// An IR module accumulated by one compile.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct IrModule {
    ops: Vec<IrOp>,
}

impl IrModule {
    pub fn new() -> IrModule {
        IrModule { ops: Vec::new() }
    }

    /// Append one instruction. Code generation uses this as its only
    /// emission primitive.
    pub fn push(&mut self, op: IrOp) {
        self.ops.push(op);
    }

    pub fn ops(&self) -> &[IrOp] {
        &self.ops
    }

    /// Encode to a wasm binary with a single function `main : () -> i32`.
    ///
    /// Borrows `self`, so the module stays usable for [`IrModule::render`]
    /// after a backend has taken the returned bytes.
    pub fn encode(&self) -> Vec<u8> {
        let mut module = Module::new();

        // Type section: () -> i32
        let mut types = TypeSection::new();
        let type_index = types.len();
        types.ty().function(Vec::<ValType>::new(), [ValType::I32]);
        module.section(&types);

        // Function section: one function of that type
        let mut functions = FunctionSection::new();
        functions.function(type_index);
        module.section(&functions);

        // Export section: the function as "main"
        let mut exports = ExportSection::new();
        exports.export(ENTRY_SYMBOL, ExportKind::Func, 0);
        module.section(&exports);

        // Code section: the accumulated instruction body
        let mut code = CodeSection::new();
        let mut func = Function::new(Vec::new());
        for op in &self.ops {
            func.instruction(&instruction_for(op));
        }
        func.instruction(&Instruction::End);
        code.function(&func);
        module.section(&code);

        module.finish()
    }

    /// Human-readable dump of the module in WAT-like form.
    pub fn render(&self) -> String {
        let mut text = String::from("(module\n  (func (export \"main\") (result i32)\n");
        for op in &self.ops {
            text.push_str("    ");
            text.push_str(&op.to_string());
            text.push('\n');
        }
        text.push_str("  )\n)\n");
        text
    }
}

fn instruction_for(op: &IrOp) -> Instruction<'static> {
    match op {
        IrOp::Const(value) => Instruction::I32Const(*value),
        IrOp::Add => Instruction::I32Add,
        IrOp::Sub => Instruction::I32Sub,
        IrOp::Mul => Instruction::I32Mul,
        IrOp::Div => Instruction::I32DivS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sum_module() -> IrModule {
        let mut module = IrModule::new();
        module.push(IrOp::Const(5));
        module.push(IrOp::Const(3));
        module.push(IrOp::Add);
        module
    }

    #[test]
    fn encoded_module_is_valid_wasm() {
        let bytes = sum_module().encode();
        wasmparser::validate(&bytes).expect("module validates");
    }

    #[test]
    fn encode_leaves_the_module_usable() {
        let module = sum_module();
        let first = module.encode();
        let second = module.encode();
        assert_eq!(first, second);
        assert!(module.render().contains("i32.add"));
    }

    #[test]
    fn renders_readable_instruction_listing() {
        let text = sum_module().render();
        assert_eq!(
            text,
            "(module\n  (func (export \"main\") (result i32)\n    i32.const 5\n    i32.const 3\n    i32.add\n  )\n)\n"
        );
    }

    #[test]
    fn renders_every_operator_mnemonic() {
        let mut module = IrModule::new();
        for op in [IrOp::Const(-1), IrOp::Add, IrOp::Sub, IrOp::Mul, IrOp::Div] {
            module.push(op);
        }
        let text = module.render();
        for mnemonic in ["i32.const -1", "i32.add", "i32.sub", "i32.mul", "i32.div_s"] {
            assert!(text.contains(mnemonic), "missing {mnemonic} in:\n{text}");
        }
    }
}
