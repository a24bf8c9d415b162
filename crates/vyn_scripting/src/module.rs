use crate::{NativeFunction, ScriptError, ScriptRuntime};

/// Registration table of a native module: a name, and the functions reachable under it.
pub struct NativeModule<RT: ScriptRuntime> {
    name: String,
    functions: Vec<(String, NativeFunction<RT>)>,
}

impl<RT: ScriptRuntime> Clone for NativeModule<RT> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            functions: self.functions.clone(),
        }
    }
}

impl<RT: ScriptRuntime> core::fmt::Debug for NativeModule<RT> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("NativeModule")
            .field("name", &self.name)
            .field("functions", &self.function_names().collect::<Vec<_>>())
            .finish()
    }
}

impl<RT: ScriptRuntime> NativeModule<RT> {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            functions: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn add_function(
        &mut self,
        name: impl Into<String>,
        func: NativeFunction<RT>,
    ) -> Result<(), ScriptError> {
        let name = name.into();
        if self.get(&name).is_some() {
            return Err(ScriptError::DuplicateFunction {
                module: self.name.clone(),
                function: name,
            });
        }

        self.functions.push((name, func));
        Ok(())
    }

    pub fn with_function(
        mut self,
        name: impl Into<String>,
        func: NativeFunction<RT>,
    ) -> Result<Self, ScriptError> {
        self.add_function(name, func)?;
        Ok(self)
    }

    pub fn get(&self, name: &str) -> Option<NativeFunction<RT>> {
        self.functions
            .iter()
            .find(|(entry, _)| entry == name)
            .map(|(_, func)| *func)
    }

    /// Function names in registration order
    pub fn function_names(&self) -> impl Iterator<Item = &str> {
        self.functions.iter().map(|(name, _)| name.as_str())
    }

    pub fn len(&self) -> usize {
        self.functions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }

    /// Adds all functions of `other`, replacing the ones with the same name
    pub fn merge(&mut self, other: Self) {
        for (name, func) in other.functions {
            match self.functions.iter_mut().find(|(entry, _)| *entry == name) {
                Some(slot) => slot.1 = func,
                None => self.functions.push((name, func)),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::{HostFunctionCallBack, HostRuntime};
    use crate::ScriptFunctionCallBack;

    fn noop(_cb: &mut HostFunctionCallBack) -> vyn_shared::types::Result<()> {
        Ok(())
    }

    fn fails(cb: &mut HostFunctionCallBack) -> vyn_shared::types::Result<()> {
        cb.error("replaced");
        Ok(())
    }

    #[test]
    fn lookup_by_name() {
        let module = NativeModule::<HostRuntime>::new("Window")
            .with_function("Create", noop)
            .unwrap()
            .with_function("Close", noop)
            .unwrap();

        assert_eq!(module.name(), "Window");
        assert_eq!(module.len(), 2);
        assert!(module.get("Create").is_some());
        assert!(module.get("create").is_none());
        assert_eq!(module.function_names().collect::<Vec<_>>(), vec!["Create", "Close"]);
    }

    #[test]
    fn duplicate_function() {
        let mut module = NativeModule::<HostRuntime>::new("Window");
        module.add_function("Create", noop).unwrap();

        let err = module.add_function("Create", noop).unwrap_err();
        assert_eq!(
            err.to_string(),
            "function 'Create' is already defined in module 'Window'"
        );
        assert_eq!(module.len(), 1);
    }

    #[test]
    fn merge_replaces_existing() {
        let mut module = NativeModule::<HostRuntime>::new("Window")
            .with_function("Create", noop)
            .unwrap();
        let other = NativeModule::<HostRuntime>::new("Window")
            .with_function("Create", fails)
            .unwrap()
            .with_function("Close", noop)
            .unwrap();

        module.merge(other);
        assert_eq!(module.function_names().collect::<Vec<_>>(), vec!["Create", "Close"]);
        assert_eq!(module.get("Create").map(|f| f as usize), Some(fails as usize));
    }
}
