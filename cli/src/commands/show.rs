//! Show command - print the resolved configuration
//!
//! Reports the table options every new blueprint starts from and the
//! connection target. Never contacts the database and never prints the
//! password.

use simple_migrations_migrate::Config;

use crate::error::CliError;
use crate::output;

pub fn run(config: &Config) -> Result<(), CliError> {
    let defaults = config.table_defaults()?;
    let connection = config.connection()?;

    println!("{}", output::heading("Table defaults"));
    println!(
        "{}",
        output::field(
            "engine",
            &defaults
                .engine
                .map_or_else(|| output::muted("(none)"), |e| e.to_string())
        )
    );
    println!(
        "{}",
        output::field("charset", &display_or_none(defaults.charset.as_deref()))
    );
    println!(
        "{}",
        output::field("collation", &display_or_none(defaults.collation.as_deref()))
    );
    println!();

    println!("{}", output::heading("Connection"));
    println!("{}", output::field("target", &connection.target()));
    println!(
        "{}",
        output::field("log", if config.log_queries() { "on" } else { "off" })
    );

    Ok(())
}

fn display_or_none(value: Option<&str>) -> String {
    match value {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => output::muted("(none)"),
    }
}
