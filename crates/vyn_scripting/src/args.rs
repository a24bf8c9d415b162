use crate::ScriptRuntime;

/// Positional arguments of a native function call. Indices are 0-based.
pub trait Args {
    type RT: ScriptRuntime<Args = Self>;

    fn get(&self, index: usize) -> Option<&<Self::RT as ScriptRuntime>::Value>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn as_slice(&self) -> &[<Self::RT as ScriptRuntime>::Value];
}
