//! Vyn
//!
//! Scoping exercises and the command line tools around the vyn standard library. The native
//! bindings themselves live in the `vyn_scripting` and `vyn_stdlib` crates.

pub mod cli;
pub mod scope;
