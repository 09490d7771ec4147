//! Simple Migrations CLI - Main entry point

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use simple_migrations_cli::error::CliError;
use simple_migrations_cli::output;
use simple_migrations_migrate::{CONFIG_FILE, Config};

/// Simple Migrations - table builder and DDL runner for MySQL/MariaDB
#[derive(Parser, Debug)]
#[command(name = "simple-migrations")]
#[command(author, version, about = "Table builder and DDL runner for MySQL/MariaDB", long_about = None)]
struct Cli {
    /// Path to config file
    #[arg(short, long, global = true, value_name = "PATH", default_value = CONFIG_FILE)]
    config: PathBuf,

    /// Log filter, e.g. `info` or `query-debug=debug` (overrides RUST_LOG)
    #[arg(long, global = true, value_name = "LEVEL")]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print resolved table defaults and the connection target
    Show,

    /// Drop a table
    Drop {
        /// Table name
        table: String,
    },

    /// Execute a single SQL statement
    Exec {
        /// Statement to run; use `?` for positional parameters
        sql: String,

        /// Positional parameter value (repeatable)
        #[arg(short, long = "param", value_name = "VALUE")]
        params: Vec<String>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.log_level.as_deref());

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", output::err_line(&e.to_string()));
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let config = Config::load(&cli.config)?;

    match cli.command {
        Command::Show => simple_migrations_cli::commands::show::run(&config),
        Command::Drop { table } => block_on(simple_migrations_cli::commands::drop::run(
            &config, &table,
        )),
        Command::Exec { sql, params } => block_on(simple_migrations_cli::commands::exec::run(
            &config, &sql, &params,
        )),
    }
}

fn block_on<F>(future: F) -> Result<(), CliError>
where
    F: Future<Output = Result<(), CliError>>,
{
    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(|e| CliError::Runtime(e.to_string()))?
        .block_on(future)
}

/// Install the fmt subscriber on stderr; `--log-level` wins over `RUST_LOG`
fn init_logging(level: Option<&str>) {
    let filter = match level {
        Some(directives) => EnvFilter::try_new(directives).ok(),
        None => EnvFilter::try_from_default_env().ok(),
    }
    .unwrap_or_else(|| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();
}
