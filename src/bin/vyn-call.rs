use std::process::ExitCode;

use anyhow::{anyhow, Result};
use clap::Parser;
use log::debug;
use simple_logger::SimpleLogger;
use vyn::cli::SettingsOpts;
use vyn_config::config;
use vyn_scripting::host::{HostRuntime, HostValue};
use vyn_scripting::{ScriptContext, ScriptRuntime};
use vyn_stdlib::open_stdlib;

#[derive(Debug, Parser)]
#[clap(
    name = "vyn-call",
    version = "0.1.0",
    author = "Vyn",
    about = "Calls a native stdlib function the way a script would"
)]
struct Cli {
    /// Function to call, as Module.Function (ie: Window.Create)
    #[clap(required_unless_present = "list")]
    function: Option<String>,

    /// Arguments; integers and numbers are passed as such, anything else as a string
    #[clap(allow_hyphen_values = true)]
    args: Vec<String>,

    /// List the registered functions
    #[clap(short = 'l', long = "list")]
    list: bool,

    /// Enable debug logging
    #[clap(short = 'd', long = "debug")]
    debug: bool,

    #[clap(flatten)]
    settings: SettingsOpts,
}

fn split_name(name: &str) -> Result<(&str, &str)> {
    name.split_once('.')
        .filter(|(module, function)| !module.is_empty() && !function.is_empty())
        .ok_or_else(|| anyhow!("expected Module.Function, got '{name}'"))
}

fn run(args: Cli) -> Result<()> {
    let mut runtime = HostRuntime::new();
    let mut ctx = runtime.new_context()?;
    open_stdlib(&mut ctx)?;

    if args.list {
        for module in ctx.module_names() {
            for function in ctx.function_names(&module) {
                println!("{module}.{function}");
            }
        }
        return Ok(());
    }

    let name = args.function.unwrap_or_default();
    let (module, function) = split_name(&name)?;

    let values: Vec<HostValue> = args.args.iter().map(|arg| HostValue::parse_literal(arg)).collect();
    debug!("vyn-call: {module}.{function}({values:?})");

    for value in ctx.call(module, function, &values)? {
        println!("{value}");
    }

    Ok(())
}

fn main() -> ExitCode {
    let args = Cli::parse();

    if let Err(err) = args.settings.load() {
        eprintln!("vyn-call: {err}");
        return ExitCode::FAILURE;
    }

    if (args.debug || config!(bool "log.debug")) && SimpleLogger::new().init().is_err() {
        eprintln!("vyn-call: cannot initialize logging");
    }

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("vyn-call: {err}");
            ExitCode::FAILURE
        }
    }
}
