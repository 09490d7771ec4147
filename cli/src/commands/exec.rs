//! Exec command - run a single statement

use simple_migrations_migrate::{Config, Database, QueryResult, Value};

use crate::error::CliError;
use crate::output;

pub async fn run(config: &Config, sql: &str, params: &[String]) -> Result<(), CliError> {
    let params: Vec<Value> = params.iter().map(|p| Value::from(p.as_str())).collect();

    let db = simple_migrations_migrate::connect(config).await?;
    let outcome = db.execute(sql, &params).await;
    db.disconnect().await?;

    print_result(&outcome?);
    Ok(())
}

fn print_result(result: &QueryResult) {
    if let Some(first) = result.rows.first() {
        println!("{}", output::heading(&first.columns().join("\t")));
        for row in &result.rows {
            let cells: Vec<String> = row.values().iter().map(ToString::to_string).collect();
            println!("{}", cells.join("\t"));
        }
        println!("{}", output::muted(&format!("{} row(s)", result.rows.len())));
        return;
    }

    println!("{}", output::field("affected", &result.affected_rows.to_string()));
    if let Some(id) = result.last_insert_id {
        println!("{}", output::field("insert id", &id.to_string()));
    }
}
