use core::fmt::Display;

use log::debug;
use vyn_shared::types::Result;

use crate::host::{HostContext, HostRuntime, HostValue};
use crate::{Args, ScriptError, ScriptFunctionCallBack};

#[derive(Debug, Clone, Default)]
pub struct HostArgs {
    values: Vec<HostValue>,
}

impl HostArgs {
    pub fn new(values: Vec<HostValue>) -> Self {
        Self { values }
    }
}

impl Args for HostArgs {
    type RT = HostRuntime;

    fn get(&self, index: usize) -> Option<&HostValue> {
        self.values.get(index)
    }

    fn len(&self) -> usize {
        self.values.len()
    }

    fn as_slice(&self) -> &[HostValue] {
        &self.values
    }
}

/// Call frame of a single native function call
pub struct HostFunctionCallBack {
    ctx: HostContext,
    function: String,
    args: HostArgs,
    returns: Vec<HostValue>,
    error: Option<String>,
}

impl HostFunctionCallBack {
    pub fn new(ctx: HostContext, function: &str, args: HostArgs) -> Self {
        Self {
            ctx,
            function: function.to_string(),
            args,
            returns: Vec::new(),
            error: None,
        }
    }

    /// Values returned by the function, or the error it raised
    pub fn finish(self) -> Result<Vec<HostValue>> {
        match self.error {
            Some(message) => Err(ScriptError::Runtime(message).into()),
            None => Ok(self.returns),
        }
    }
}

impl ScriptFunctionCallBack for HostFunctionCallBack {
    type RT = HostRuntime;

    fn context(&mut self) -> HostContext {
        self.ctx.clone()
    }

    fn args(&self) -> &HostArgs {
        &self.args
    }

    fn function_name(&self) -> &str {
        &self.function
    }

    fn error(&mut self, error: impl Display) {
        let message = error.to_string();
        debug!("host: {} raised: {message}", self.function);
        // the first error wins, like an error unwinding the script
        if self.error.is_none() {
            self.error = Some(message);
        }
    }

    fn ret(&mut self, value: HostValue) {
        self.returns.push(value);
    }
}
