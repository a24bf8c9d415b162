use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use derive_more::Display;
use std::str::FromStr;
use vyn_config::settings::Setting;
use vyn_config::storage::{JsonStorageAdapter, MemoryStorageAdapter};
use vyn_config::{config_store, config_store_write, StorageAdapter};

#[derive(Debug, Parser)]
#[clap(name = "Config-Store", version = "0.1.0", author = "Vyn")]
struct Cli {
    #[clap(flatten)]
    global_opts: GlobalOpts,

    #[clap(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    #[clap(arg_required_else_help = true, about = "View a setting")]
    View {
        #[clap(required = true, short = 'k', long = "key")]
        key: String,
    },
    #[clap(about = "List all settings")]
    List,
    #[clap(arg_required_else_help = true, about = "Set a setting (ie: -k log.debug -v b:true)")]
    Set {
        #[clap(required = true, short = 'k', long = "key")]
        key: String,
        #[clap(required = true, short = 'v', long = "value")]
        value: String,
    },
    #[clap(arg_required_else_help = true, about = "Search for settings, wildcards allowed")]
    Search {
        #[clap(required = true, short = 'k', long = "key")]
        key: String,
    },
}

#[derive(Clone, Copy, Debug, Display, clap::ValueEnum)]
enum Engine {
    #[display("json")]
    Json,
    #[display("memory")]
    Memory,
}

#[derive(Debug, Parser)]
struct GlobalOpts {
    #[clap(short = 'e', long = "engine", global = true, default_value_t = Engine::Json)]
    engine: Engine,
    #[clap(short = 'p', long = "path", global = true, default_value = "settings.json")]
    path: String,
}

fn print_settings(keys: Vec<String>) {
    for key in keys {
        if let Some(value) = config_store().get(&key) {
            println!("{key:40}: {value}");
        }
    }
}

fn main() -> Result<()> {
    let args = Cli::parse();

    let storage: Box<dyn StorageAdapter> = match args.global_opts.engine {
        Engine::Json => Box::new(JsonStorageAdapter::try_from(args.global_opts.path.as_str())?),
        Engine::Memory => Box::new(MemoryStorageAdapter::new()),
    };

    config_store_write().set_storage(storage);

    match args.command {
        Commands::View { key } => {
            let store = config_store();
            let (Some(info), Some(value)) = (store.get_info(&key), store.get(&key)) else {
                println!("Key not found");
                return Ok(());
            };

            println!("Key            : {key}");
            println!("Current Value  : {value}");
            println!("Default Value  : {}", info.default);
            println!("Description    : {}", info.description);
        }
        Commands::List => {
            let keys = config_store().find("*");
            print_settings(keys);
        }
        Commands::Set { key, value } => {
            if config_store().get_info(&key).is_none() {
                return Err(anyhow!("unknown setting: {key}"));
            }
            config_store().set(&key, Setting::from_str(&value)?);
        }
        Commands::Search { key } => {
            let keys = config_store().find(&key);
            print_settings(keys);
        }
    }

    Ok(())
}
