use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use minic_core::{ENTRY_SYMBOL, ExecutionSession, compile};

/// Compile a minic source file to IR and optionally execute it.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the source file to compile.
    input: Option<PathBuf>,

    #[arg(long, help = "Execute the compiled module after printing its IR")]
    run: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let Some(input) = cli.input else {
        eprintln!("usage: minic <source-file> [--run]");
        return ExitCode::from(1);
    };
    match execute(&input, cli.run) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::from(1)
        }
    }
}

fn execute(input: &Path, run: bool) -> Result<()> {
    let source = fs::read_to_string(input)
        .with_context(|| format!("could not open file {}", input.display()))?;

    let module = compile(&source)?;
    print!("{}", module.render());

    if run {
        let mut session = ExecutionSession::new(&module)?;
        let result = session.invoke(ENTRY_SYMBOL)?;
        session.teardown();
        println!("Program exited with {result}");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_cmd::Command;
    use predicates::prelude::*;
    use tempfile::tempdir;

    #[test]
    fn prints_ir_for_source_file() {
        let dir = tempdir().expect("tempdir");
        let input_path = dir.path().join("input.mc");
        fs::write(&input_path, "5 + 3;").expect("write input");

        Command::cargo_bin("minic")
            .expect("binary exists")
            .arg(&input_path)
            .assert()
            .success()
            .stdout(predicate::str::contains("i32.const 5"))
            .stdout(predicate::str::contains("i32.add"))
            .stdout(predicate::str::contains("(export \"main\")"));
    }

    #[test]
    fn compiles_and_runs_program() {
        let dir = tempdir().expect("tempdir");
        let input_path = dir.path().join("input.mc");
        fs::write(&input_path, "5 + 3;").expect("write input");

        Command::cargo_bin("minic")
            .expect("binary exists")
            .arg(&input_path)
            .arg("--run")
            .assert()
            .success()
            .stdout(predicate::str::contains("Program exited with 8"));
    }

    #[test]
    fn chained_operators_run_right_to_left() {
        let dir = tempdir().expect("tempdir");
        let input_path = dir.path().join("input.mc");
        fs::write(&input_path, "2 * 3 + 4").expect("write input");

        Command::cargo_bin("minic")
            .expect("binary exists")
            .arg(&input_path)
            .arg("--run")
            .assert()
            .success()
            .stdout(predicate::str::contains("Program exited with 14"));
    }

    #[test]
    fn missing_argument_prints_usage() {
        Command::cargo_bin("minic")
            .expect("binary exists")
            .assert()
            .failure()
            .code(1)
            .stderr(predicate::str::contains("usage: minic"));
    }

    #[test]
    fn unreadable_file_reports_error() {
        let dir = tempdir().expect("tempdir");
        Command::cargo_bin("minic")
            .expect("binary exists")
            .arg(dir.path().join("missing.mc"))
            .assert()
            .failure()
            .code(1)
            .stderr(predicate::str::contains("could not open file"));
    }

    #[test]
    fn failed_compile_prints_no_ir() {
        let dir = tempdir().expect("tempdir");
        let input_path = dir.path().join("input.mc");
        fs::write(&input_path, "1 < 2").expect("write input");

        Command::cargo_bin("minic")
            .expect("binary exists")
            .arg(&input_path)
            .assert()
            .failure()
            .code(1)
            .stdout(predicate::str::is_empty())
            .stderr(predicate::str::contains("unrecognized character"));
    }

    #[test]
    fn invalid_operand_reports_diagnostic() {
        let dir = tempdir().expect("tempdir");
        let input_path = dir.path().join("input.mc");
        fs::write(&input_path, "x + 1").expect("write input");

        Command::cargo_bin("minic")
            .expect("binary exists")
            .arg(&input_path)
            .assert()
            .failure()
            .stderr(predicate::str::contains("invalid number literal 'x'"));
    }
}
