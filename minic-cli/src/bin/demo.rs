//! Informational entry point: compiles a fixed built-in expression and
//! prints its IR. Takes no arguments.

use anyhow::Result;
use minic_core::compile;

const DEMO_SOURCE: &str = "5 + 3;";

fn main() -> Result<()> {
    let module = compile(DEMO_SOURCE)?;
    print!("{}", module.render());
    Ok(())
}
