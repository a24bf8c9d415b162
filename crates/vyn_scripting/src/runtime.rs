use vyn_shared::types::Result;

use crate::{Args, ScriptContext, ScriptFunctionCallBack, ScriptValue};

// trait around the scripting engine that hosts the native modules
pub trait ScriptRuntime: Sized {
    type Context: ScriptContext<RT = Self>;
    type Value: ScriptValue<RT = Self>;
    type Args: Args<RT = Self>;
    type FunctionCallBack: ScriptFunctionCallBack<RT = Self>;

    fn new_context(&mut self) -> Result<Self::Context>;
}
