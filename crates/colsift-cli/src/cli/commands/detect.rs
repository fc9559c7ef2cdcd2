//! `colsift detect <input>` – show the chosen header row without writing anything.

use anyhow::{bail, Result};
use colsift_core::config::ColsiftConfig;
use colsift_core::detect::detect_header_within;
use colsift_core::filter::kept_positions;
use colsift_core::reader;
use colsift_core::store::AllowListStore;
use std::path::Path;

pub async fn run_detect(
    store: &impl AllowListStore,
    cfg: &ColsiftConfig,
    input: &Path,
    sheet: usize,
    json: bool,
) -> Result<()> {
    if !input.is_file() {
        bail!("input file not found: {}", input.display());
    }
    let allow_list = store.snapshot(cfg.normalization).await?;
    let grid = reader::read_path(input, sheet)?;
    let header = detect_header_within(&grid, &allow_list, cfg.header_scan_limit)?;
    let kept = kept_positions(&header.labels, &allow_list);

    if json {
        let kept_labels: Vec<&str> = kept.iter().map(|&j| header.labels[j].as_str()).collect();
        let report = serde_json::json!({
            "rows": grid.len(),
            "header": header,
            "kept": kept_labels,
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!(
        "Header row {} of {} (score {})",
        header.index + 1,
        grid.len(),
        header.score
    );
    println!("{:<4} {:<5} {:<24} {}", "COL", "KEEP", "LABEL", "KEY");
    for (j, label) in header.labels.iter().enumerate() {
        let keep = if kept.contains(&j) { "yes" } else { "-" };
        println!(
            "{:<4} {:<5} {:<24} {}",
            j + 1,
            keep,
            label,
            allow_list.key_for(label)
        );
    }
    if kept.is_empty() {
        println!("No columns match the allow-list.");
    }
    Ok(())
}
