use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("unrecognized character '{ch}' at byte {position}")]
    UnrecognizedCharacter { ch: char, position: usize },
    #[error("invalid number literal '{text}'")]
    InvalidNumber { text: String },
    #[error("no lowering rule for {0}")]
    UnsupportedNode(String),
    #[error("failed to compile module: {0}")]
    Compile(String),
    #[error("symbol '{name}' not found in compiled module")]
    SymbolNotFound { name: String },
    #[error("execution failed: {0}")]
    Execution(String),
    #[error("execution session is already torn down")]
    SessionClosed,
}
