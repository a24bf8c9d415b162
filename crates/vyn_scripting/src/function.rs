use core::fmt::Display;

use vyn_shared::types::Result;

use crate::{Args, ScriptError, ScriptRuntime, ScriptType, ScriptValue};

/// Native function that can be registered in a [`NativeModule`](crate::NativeModule). Results are
/// handed back through [`ScriptFunctionCallBack::ret`]; an `Err` aborts the call.
pub type NativeFunction<RT> = fn(&mut <RT as ScriptRuntime>::FunctionCallBack) -> Result<()>;

//trait for the call frame a native function receives (interop between scripts and Rust)
pub trait ScriptFunctionCallBack {
    type RT: ScriptRuntime<FunctionCallBack = Self>;

    fn context(&mut self) -> <Self::RT as ScriptRuntime>::Context;

    fn args(&self) -> &<Self::RT as ScriptRuntime>::Args;

    /// Name the function was called by, used in argument errors
    fn function_name(&self) -> &str;

    fn len(&self) -> usize {
        self.args().len()
    }

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Raises a runtime error in the calling script
    fn error(&mut self, error: impl Display);

    fn ret(&mut self, value: <Self::RT as ScriptRuntime>::Value);

    /// Returns the argument at `position` (1-based, as in error messages) as a string. Numbers
    /// are accepted and converted.
    fn check_string(&self, position: usize) -> std::result::Result<String, ScriptError> {
        match self.arg(position) {
            Some(value) if value.is_string() || value.is_number() => value
                .as_string()
                .map_err(|err| ScriptError::Conversion(err.to_string())),
            other => Err(self.bad_argument(position, ScriptType::String, other)),
        }
    }

    /// Returns the argument at `position` (1-based) as an integer. Numbers and numeric strings
    /// are accepted when they have an exact integer value.
    fn check_integer(&self, position: usize) -> std::result::Result<i64, ScriptError> {
        let value = self.arg(position);
        let Some(v) = value.filter(|v| v.is_number() || v.is_string()) else {
            return Err(self.bad_argument(position, ScriptType::Integer, value));
        };

        if let Ok(n) = v.as_integer() {
            return Ok(n);
        }

        if v.as_number().is_ok() {
            return Err(ScriptError::NoIntegerRepresentation {
                position,
                function: self.function_name().to_string(),
            });
        }

        Err(self.bad_argument(position, ScriptType::Integer, value))
    }

    #[doc(hidden)]
    fn arg(&self, position: usize) -> Option<&<Self::RT as ScriptRuntime>::Value> {
        position.checked_sub(1).and_then(|index| self.args().get(index))
    }

    #[doc(hidden)]
    fn bad_argument(
        &self,
        position: usize,
        expected: ScriptType,
        got: Option<&<Self::RT as ScriptRuntime>::Value>,
    ) -> ScriptError {
        ScriptError::BadArgument {
            position,
            function: self.function_name().to_string(),
            expected,
            got: got.map_or_else(|| "no value".to_string(), |v| v.type_of().to_string()),
        }
    }
}
