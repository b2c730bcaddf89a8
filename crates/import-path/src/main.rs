use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use import_path::runtime::{self, RunError};
use import_path::settings::PluginSettings;
use import_path::settings_store::{default_settings_path, load_settings, load_settings_or_default};
use tracing::error;
use tracing::level_filters::LevelFilter;

/// Insert relative import paths and open the files they point at.
#[derive(Debug, Parser)]
#[command(name = "import-path", version, about)]
struct Cli {
    /// Settings file; defaults to `<config_dir>/import-path/settings.json`.
    #[arg(long, global = true)]
    settings: Option<PathBuf>,

    /// Log debug details to stderr.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the candidate list for the file's directory.
    List {
        /// File the listing is relative to.
        #[arg(long)]
        file: PathBuf,
        /// Number of levels to move the listing root up.
        #[arg(long, default_value_t = 0)]
        up: usize,
        /// Print one JSON object per item.
        #[arg(long)]
        json: bool,
    },
    /// Pick a path interactively and print the value to insert.
    Insert {
        /// File the inserted path is relative to.
        #[arg(long)]
        file: PathBuf,
    },
    /// Resolve the quoted path under the cursor and print the file it names.
    Open {
        /// File containing the quoted path.
        #[arg(long)]
        file: PathBuf,
        /// 1-based cursor line.
        #[arg(long)]
        line: usize,
        /// 1-based cursor column.
        #[arg(long)]
        column: usize,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let level = if cli.verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();

    if let Err(err) = run(cli) {
        error!("{err}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

fn run(cli: Cli) -> Result<(), RunError> {
    let settings = read_settings(cli.settings)?;

    match cli.command {
        Command::List { file, up, json } => {
            runtime::run_list(&file, up, json, &settings, &mut io::stdout().lock())
        }
        Command::Insert { file } => runtime::run_insert(
            &file,
            &settings,
            io::stdin().lock(),
            io::stdout().lock(),
            io::stderr(),
        ),
        Command::Open { file, line, column } => runtime::run_open(
            &file,
            line,
            column,
            &settings,
            io::stdout().lock(),
            io::stderr(),
        ),
    }
}

fn read_settings(path: Option<PathBuf>) -> Result<PluginSettings, RunError> {
    let settings = match path {
        Some(path) => load_settings(&path)?,
        None => load_settings_or_default(&default_settings_path())?,
    };

    Ok(settings)
}
