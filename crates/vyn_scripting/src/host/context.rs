use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use log::debug;
use vyn_shared::types::Result;

use crate::host::{HostArgs, HostFunctionCallBack, HostRuntime, HostValue};
use crate::{NativeFunction, NativeModule, ScriptContext, ScriptError};

/// Global namespace of the host. Clones share the same namespace, so a context can be handed to
/// the native functions it calls.
#[derive(Debug, Clone, Default)]
pub struct HostContext {
    globals: Rc<RefCell<BTreeMap<String, NativeModule<HostRuntime>>>>,
}

impl HostContext {
    fn lookup(&self, module: &str, function: &str) -> std::result::Result<NativeFunction<HostRuntime>, ScriptError> {
        let globals = self.globals.borrow();
        let table = globals
            .get(module)
            .ok_or_else(|| ScriptError::UnknownModule(module.to_string()))?;

        table.get(function).ok_or_else(|| ScriptError::UnknownFunction {
            module: module.to_string(),
            function: function.to_string(),
        })
    }
}

impl ScriptContext for HostContext {
    type RT = HostRuntime;

    fn register_module(&mut self, module: NativeModule<HostRuntime>) -> Result<()> {
        debug!(
            "host: registering module {} ({} functions)",
            module.name(),
            module.len()
        );

        let mut globals = self.globals.borrow_mut();
        match globals.get_mut(module.name()) {
            Some(existing) => existing.merge(module),
            None => {
                globals.insert(module.name().to_string(), module);
            }
        }

        Ok(())
    }

    fn has_function(&self, module: &str, function: &str) -> bool {
        self.lookup(module, function).is_ok()
    }

    fn module_names(&self) -> Vec<String> {
        self.globals.borrow().keys().cloned().collect()
    }

    fn function_names(&self, module: &str) -> Vec<String> {
        self.globals
            .borrow()
            .get(module)
            .map(|table| table.function_names().map(str::to_string).collect())
            .unwrap_or_default()
    }

    fn call(&mut self, module: &str, function: &str, args: &[HostValue]) -> Result<Vec<HostValue>> {
        // the namespace borrow ends here, native functions may register modules themselves
        let func = self.lookup(module, function)?;

        debug!("host: calling {module}.{function} with {} arguments", args.len());

        let mut cb = HostFunctionCallBack::new(self.clone(), function, HostArgs::new(args.to_vec()));
        func(&mut cb)?;
        cb.finish()
    }
}
