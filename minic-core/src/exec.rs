//! Execution bridge: compiles a finished IR module with the wasmi
//! engine and invokes its exported entry point.
//!
//! A session covers one compile-and-invoke cycle. Construction acquires
//! every engine resource; any failure on the way drops what was already
//! acquired. [`ExecutionSession::teardown`] releases the engine state,
//! may be called more than once, and a closed session refuses further
//! invocations rather than re-running the entry point.

use wasmi::{Engine, Instance, Linker, Module, Store};

use crate::error::CoreError;
use crate::ir::IrModule;

/// One scoped execution session against the wasmi engine.
pub struct ExecutionSession {
    state: Option<SessionState>,
}

impl std::fmt::Debug for ExecutionSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExecutionSession")
            .field("open", &self.state.is_some())
            .finish()
    }
}

struct SessionState {
    store: Store<()>,
    instance: Instance,
}

impl ExecutionSession {
    /// Compile `module` for execution.
    ///
    /// The module is encoded, not consumed: the caller can still render
    /// it after the session is built. Fails with [`CoreError::Compile`]
    /// if the engine rejects the encoded form.
    pub fn new(module: &IrModule) -> Result<ExecutionSession, CoreError> {
        Self::from_wasm(&module.encode())
    }

    /// Compile raw wasm bytes for execution.
    pub fn from_wasm(wasm: &[u8]) -> Result<ExecutionSession, CoreError> {
        let engine = Engine::default();
        let module =
            Module::new(&engine, wasm).map_err(|err| CoreError::Compile(err.to_string()))?;
        let linker = Linker::new(&engine);
        let mut store = Store::new(&engine, ());
        let instance = linker
            .instantiate_and_start(&mut store, &module)
            .map_err(|err| CoreError::Compile(err.to_string()))?;
        Ok(ExecutionSession {
            state: Some(SessionState { store, instance }),
        })
    }

    /// Resolve `symbol` as `() -> i32` and invoke it.
    ///
    /// Fails with [`CoreError::SymbolNotFound`] if the export is missing
    /// or has the wrong type, [`CoreError::Execution`] if the invoked
    /// code traps, and [`CoreError::SessionClosed`] after teardown.
    pub fn invoke(&mut self, symbol: &str) -> Result<i32, CoreError> {
        let state = self.state.as_mut().ok_or(CoreError::SessionClosed)?;
        let entry = state
            .instance
            .get_typed_func::<(), i32>(&state.store, symbol)
            .map_err(|_| CoreError::SymbolNotFound {
                name: symbol.to_string(),
            })?;
        entry
            .call(&mut state.store, ())
            .map_err(|err| CoreError::Execution(err.to_string()))
    }

    /// Release all engine resources. Idempotent.
    pub fn teardown(&mut self) {
        self.state = None;
    }

    pub fn is_closed(&self) -> bool {
        self.state.is_none()
    }
}
