//! Vyn standard library
//!
//! Native modules that are made available to scripts. Each module has an `open_*` function that
//! registers its table into a script context.
//!

use log::info;
use vyn_scripting::ScriptContext;
use vyn_shared::types::Result;

pub mod window;

/// Registers every stdlib module into the context and returns the number of modules opened
pub fn open_stdlib<C: ScriptContext>(ctx: &mut C) -> Result<usize> {
    let opened = window::open_window(ctx)?;

    info!("stdlib: opened {opened} module(s)");
    Ok(opened)
}
