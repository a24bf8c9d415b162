use vyn_shared::types::Result;

use crate::{NativeModule, ScriptRuntime};

//main trait for a script context, holding the global namespace scripts resolve names in
pub trait ScriptContext: Clone {
    type RT: ScriptRuntime<Context = Self>;

    /// Makes all functions of the module reachable as `module.function`. Registering a module
    /// name that already exists adds the new functions to it, replacing functions with the same
    /// name.
    fn register_module(&mut self, module: NativeModule<Self::RT>) -> Result<()>;

    fn has_function(&self, module: &str, function: &str) -> bool;

    fn module_names(&self) -> Vec<String>;

    fn function_names(&self, module: &str) -> Vec<String>;

    /// Calls `module.function` with the given arguments and returns the values it returned
    fn call(
        &mut self,
        module: &str,
        function: &str,
        args: &[<Self::RT as ScriptRuntime>::Value],
    ) -> Result<Vec<<Self::RT as ScriptRuntime>::Value>>;
}
