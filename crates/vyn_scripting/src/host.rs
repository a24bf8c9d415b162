//! In-process script host
//!
//! The host keeps the global namespace of registered native modules and dispatches calls to
//! them by name. It plays the part of the embedding runtime: values are checked and converted
//! here, before they reach a native function.

pub use context::*;
pub use function::*;
pub use value::*;

use vyn_shared::types::Result;

use crate::ScriptRuntime;

mod context;
mod function;
mod value;

/// The host keeps no engine state, all state lives in the contexts it creates
#[derive(Debug, Default)]
pub struct HostRuntime;

impl HostRuntime {
    pub fn new() -> Self {
        Self
    }
}

impl ScriptRuntime for HostRuntime {
    type Context = HostContext;
    type Value = HostValue;
    type Args = HostArgs;
    type FunctionCallBack = HostFunctionCallBack;

    fn new_context(&mut self) -> Result<Self::Context> {
        Ok(HostContext::default())
    }
}
