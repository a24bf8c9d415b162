use vyn_shared::types::Result;

use crate::{ScriptRuntime, ScriptType};

pub trait ScriptValue: Sized + Clone {
    type RT: ScriptRuntime<Value = Self>;

    fn type_of(&self) -> ScriptType;

    /// Strings, and numbers converted to their textual form
    fn as_string(&self) -> Result<String>;

    /// Integers, numbers with an exact integer value and strings holding an integer
    fn as_integer(&self) -> Result<i64>;

    fn as_number(&self) -> Result<f64>;

    fn as_bool(&self) -> Result<bool>;

    fn is_nil(&self) -> bool {
        self.type_of() == ScriptType::Nil
    }

    fn is_bool(&self) -> bool {
        self.type_of() == ScriptType::Boolean
    }

    fn is_integer(&self) -> bool {
        self.type_of() == ScriptType::Integer
    }

    fn is_number(&self) -> bool {
        matches!(self.type_of(), ScriptType::Integer | ScriptType::Number)
    }

    fn is_string(&self) -> bool {
        self.type_of() == ScriptType::String
    }

    fn new_string(ctx: <Self::RT as ScriptRuntime>::Context, value: &str) -> Result<Self>;

    fn new_integer(ctx: <Self::RT as ScriptRuntime>::Context, value: i64) -> Result<Self>;

    fn new_number(ctx: <Self::RT as ScriptRuntime>::Context, value: f64) -> Result<Self>;

    fn new_bool(ctx: <Self::RT as ScriptRuntime>::Context, value: bool) -> Result<Self>;

    fn new_nil(ctx: <Self::RT as ScriptRuntime>::Context) -> Result<Self>;
}
