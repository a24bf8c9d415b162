//! Window module
//!
//! `Window.Create(title, width, height)` announces a window on stdout and returns a status
//! message. No window is created and nothing is kept between calls, so every call with the same
//! arguments prints the same line and returns the same message.

use std::io::{self, Write};

use log::debug;
use vyn_config::config;
use vyn_scripting::{IntoScriptValue, NativeModule, ScriptContext, ScriptFunctionCallBack, ScriptRuntime};
use vyn_shared::errors::Error;
use vyn_shared::types::Result;

/// Returned to the script by every successful `Create` call
pub const CREATED_MESSAGE: &str = "Window created successfully!";

/// Writes the creation line for the window to `out`. Title, width and height are not validated:
/// an empty title or a negative size is printed as given.
pub fn create_window_to<W: Write>(out: &mut W, title: &str, width: i64, height: i64) -> io::Result<&'static str> {
    writeln!(out, "Window Created: {title} ({width}x{height})")?;
    Ok(CREATED_MESSAGE)
}

/// Same as [`create_window_to`], writing to stdout
pub fn create_window(title: &str, width: i64, height: i64) -> Result<&'static str> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let message = create_window_to(&mut out, title, width, height).map_err(Error::IO)?;
    out.flush().map_err(Error::IO)?;

    Ok(message)
}

/// Native entry point: `Create(title: string, width: integer, height: integer) -> string`
fn create<RT: ScriptRuntime>(cb: &mut RT::FunctionCallBack) -> Result<()> {
    let title = cb.check_string(1)?;
    let width = cb.check_integer(2)?;
    let height = cb.check_integer(3)?;

    debug!("window: create {title:?} {width}x{height}");
    let message = create_window(&title, width, height)?;

    let value: RT::Value = message.to_script_value(cb.context())?;
    cb.ret(value);
    Ok(())
}

/// Builds the window module table under the given names
pub fn window_module<RT: ScriptRuntime>(module: &str, create_fn: &str) -> Result<NativeModule<RT>> {
    Ok(NativeModule::<RT>::new(module).with_function(create_fn, create::<RT>)?)
}

/// Registers the window module under explicit names. Returns the number of modules registered.
pub fn open_window_as<C: ScriptContext>(ctx: &mut C, module: &str, create_fn: &str) -> Result<usize> {
    ctx.register_module(window_module::<C::RT>(module, create_fn)?)?;

    debug!("window: registered {module}.{create_fn}");
    Ok(1)
}

/// Registers the window module under the names from the `stdlib.window.*` settings
/// (`Window.Create` by default). Returns the number of modules registered.
pub fn open_window<C: ScriptContext>(ctx: &mut C) -> Result<usize> {
    let module = config!(string "stdlib.window.module");
    let create_fn = config!(string "stdlib.window.create");

    open_window_as(ctx, &module, &create_fn)
}
