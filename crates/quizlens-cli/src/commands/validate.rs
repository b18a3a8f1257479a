//! The `quizlens validate` command.

use anyhow::{Context, Result};

use quizlens_core::record::REQUIRED_COLUMNS;
use quizlens_core::validate::check_required_columns;
use quizlens_source::source_for;

pub async fn execute(source_spec: String) -> Result<()> {
    let source = source_for(&source_spec);
    let table = source
        .fetch_table()
        .await
        .with_context(|| format!("failed to load data from {source_spec}"))?;

    println!("Columns: {}", table.columns.join(", "));

    check_required_columns(&table)?;

    println!(
        "All {} required columns present ({} rows)",
        REQUIRED_COLUMNS.len(),
        table.rows.len()
    );
    Ok(())
}
