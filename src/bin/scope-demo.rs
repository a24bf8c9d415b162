use anyhow::Result;
use clap::Parser;
use simple_logger::SimpleLogger;
use vyn::cli::SettingsOpts;
use vyn::scope::{block_scope, function_scope};
use vyn_config::config;

#[derive(Debug, Parser)]
#[clap(name = "scope-demo", version = "0.1.0", author = "Vyn", about = "Runs the block scope exercise")]
struct Cli {
    /// Run the variant where the inner block is a function
    #[clap(short = 'f', long = "function")]
    function: bool,

    /// Enable debug logging
    #[clap(short = 'd', long = "debug")]
    debug: bool,

    #[clap(flatten)]
    settings: SettingsOpts,
}

fn main() -> Result<()> {
    let args = Cli::parse();
    args.settings.load()?;

    if args.debug || config!(bool "log.debug") {
        SimpleLogger::new().init()?;
    }

    let mut stdout = std::io::stdout().lock();
    if args.function {
        function_scope(&mut stdout)?;
    } else {
        block_scope(&mut stdout)?;
    }

    Ok(())
}
