//! Drop command - remove a table

use simple_migrations_migrate::{Config, Schema};

use crate::error::CliError;
use crate::output;

pub async fn run(config: &Config, table: &str) -> Result<(), CliError> {
    let db = simple_migrations_migrate::connect(config).await?;
    let schema = Schema::from_config(&db, config)?;

    let outcome = schema.drop_table(table).await;
    db.disconnect().await?;
    outcome?;

    println!("{}", output::success(&format!("Dropped table {}", table)));
    Ok(())
}
