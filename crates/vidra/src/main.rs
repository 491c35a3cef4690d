//! Binary entrypoint for the vidra media player core.

use std::{path::PathBuf, process};

use clap::{Parser, Subcommand};
use config::{ConfigPaths, CustomCommandStore, ShortcutStore};
use tracing::error;
use vidra::{Application, NullTarget, logging};

#[derive(Parser, Debug)]
#[command(name = "vidra", about = "A configurable media player", version)]
/// Command-line interface for the `vidra` binary.
struct Cli {
    /// Optional subcommand.
    #[command(subcommand)]
    command: Option<Command>,

    /// Directory holding the persisted stores (defaults to the user config dir)
    #[arg(long, value_name = "DIR")]
    config_dir: Option<PathBuf>,

    /// Logging controls
    #[command(flatten)]
    log: logging::LogArgs,
}

#[derive(Subcommand, Debug)]
/// Top-level CLI subcommands.
enum Command {
    /// Load and validate the persisted stores then exit.
    Check {
        /// Dump the parsed shortcut store as JSON to stdout
        #[arg(long)]
        dump: bool,
    },
}

/// Validate both stores, optionally dumping the shortcut map, and exit.
fn run_check(paths: &ConfigPaths, dump: bool) -> process::ExitCode {
    let shortcuts = match ShortcutStore::try_load(&paths.shortcuts) {
        Ok(store) => store,
        Err(e) => {
            eprintln!("{}", e.pretty());
            return process::ExitCode::FAILURE;
        }
    };
    let commands = match CustomCommandStore::try_load(&paths.commands) {
        Ok(store) => store,
        Err(e) => {
            eprintln!("{}", e.pretty());
            return process::ExitCode::FAILURE;
        }
    };

    if dump {
        let map: std::collections::BTreeMap<&str, &str> = shortcuts.iter().collect();
        match serde_json::to_string_pretty(&map) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("Failed to serialize shortcuts: {e}");
                return process::ExitCode::FAILURE;
            }
        }
    } else {
        println!(
            "OK ({} shortcuts, {} custom command groups)",
            shortcuts.len(),
            commands.group_count()
        );
    }
    process::ExitCode::SUCCESS
}

fn main() -> process::ExitCode {
    let cli = Cli::parse();
    logging::init(&cli.log);

    let paths = ConfigPaths::resolve(cli.config_dir.as_deref());

    if let Some(Command::Check { dump }) = &cli.command {
        return run_check(&paths, *dump);
    }

    let app = match Application::new(&paths) {
        Ok(app) => app,
        Err(e) => {
            error!("startup failed: {e}");
            return process::ExitCode::FAILURE;
        }
    };

    let mut target = NullTarget;
    if let Err(e) = app.run(&mut target) {
        error!("exited with error: {e}");
        return process::ExitCode::FAILURE;
    }
    process::ExitCode::SUCCESS
}
