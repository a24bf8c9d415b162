//! Shared functionality
//!
//! This crate supplies the error and result types used throughout the vyn crates.
//!

pub mod errors;
pub mod types;
