//! Scripting runtime bindings
//!
//! This crate contains the seam between native Rust functions and a scripting runtime. Native
//! functions are collected in a [`NativeModule`] (a name to function lookup table) and registered
//! into a [`ScriptContext`], after which scripts can call them by `Module.Function` name.
//!
//! The traits can be implemented for different runtimes. The [`host`] module contains an
//! in-process implementation that performs the dispatch and argument checking itself.
//!

use core::fmt;

use thiserror::Error;

pub use args::*;
pub use context::*;
pub use function::*;
pub use module::*;
pub use runtime::*;
pub use value::*;
pub use value_conversion::*;

mod args;
mod context;
mod function;
pub mod host;
mod module;
mod runtime;
mod value;
mod value_conversion;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ScriptError {
    #[error("module '{0}' is not registered")]
    UnknownModule(String),

    #[error("module '{module}' has no function '{function}'")]
    UnknownFunction { module: String, function: String },

    #[error("function '{function}' is already defined in module '{module}'")]
    DuplicateFunction { module: String, function: String },

    #[error("bad argument #{position} to '{function}' ({expected} expected, got {got})")]
    BadArgument {
        position: usize,
        function: String,
        expected: ScriptType,
        got: String,
    },

    #[error("bad argument #{position} to '{function}' (number has no integer representation)")]
    NoIntegerRepresentation { position: usize, function: String },

    #[error("conversion error: {0}")]
    Conversion(String),

    #[error("runtime error: {0}")]
    Runtime(String),
}

/// Types a script value can have, displayed the way the runtime names them in error messages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptType {
    Nil,
    Boolean,
    Integer,
    Number,
    String,
    Function,
    Table,
}

impl fmt::Display for ScriptType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Nil => "nil",
            Self::Boolean => "boolean",
            // integers are a subtype of numbers for scripts
            Self::Integer | Self::Number => "number",
            Self::String => "string",
            Self::Function => "function",
            Self::Table => "table",
        };
        f.write_str(name)
    }
}
