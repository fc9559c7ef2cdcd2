//! `colsift sift <input> -o <name>` – filter a spreadsheet down to allow-listed columns.

use anyhow::{bail, Context, Result};
use colsift_core::config::ColsiftConfig;
use colsift_core::reader;
use colsift_core::sift;
use colsift_core::store::AllowListStore;
use colsift_core::writer::{self, OutputFormat};
use std::path::Path;

pub async fn run_sift(
    store: &impl AllowListStore,
    cfg: &ColsiftConfig,
    input: &Path,
    output: &str,
    format: OutputFormat,
    sheet: usize,
) -> Result<()> {
    if !input.is_file() {
        bail!("input file not found: {}", input.display());
    }
    let file_name = writer::output_file_name(output, format)?;

    let allow_list = store.snapshot(cfg.normalization).await?;
    if allow_list.is_empty() {
        tracing::warn!("allow-list is empty; run `colsift allow seed` or `colsift allow add`");
    }

    let grid = reader::read_path(input, sheet)?;
    let outcome = sift(&grid, &allow_list, &cfg.sift_options())
        .with_context(|| format!("filter {}", input.display()))?;

    writer::write_to_path(&outcome.table, format, Path::new(&file_name))?;
    tracing::info!(
        input = %input.display(),
        output = %file_name,
        header_row = outcome.header.index,
        columns = outcome.table.width(),
        rows = outcome.table.row_count(),
        "sift completed"
    );
    println!(
        "Header row {} (score {}); kept {} column(s), {} row(s) -> {}",
        outcome.header.index + 1,
        outcome.header.score,
        outcome.table.width(),
        outcome.table.row_count(),
        file_name
    );
    Ok(())
}
