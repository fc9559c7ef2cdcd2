//! Output writer: serializes a [`FilteredTable`] for delivery.

use anyhow::{anyhow, bail, Context, Result};
use rust_xlsxwriter::{Format, Workbook};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::grid::FilteredTable;

/// Output container format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Xlsx,
    Csv,
}

impl OutputFormat {
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Xlsx => "xlsx",
            OutputFormat::Csv => "csv",
        }
    }
}

/// File name for the output: `name` with the format's extension appended
/// unless it already ends with it (case-insensitive).
pub fn output_file_name(name: &str, format: OutputFormat) -> Result<String> {
    let name = name.trim();
    if name.is_empty() {
        bail!("output file name is empty");
    }
    let suffix = format!(".{}", format.extension());
    if name.to_ascii_lowercase().ends_with(&suffix) {
        Ok(name.to_string())
    } else {
        Ok(format!("{name}{suffix}"))
    }
}

/// Serialize `table` (header row first) into bytes.
pub fn write_table(table: &FilteredTable, format: OutputFormat) -> Result<Vec<u8>> {
    let bytes = match format {
        OutputFormat::Xlsx => write_xlsx(table)?,
        OutputFormat::Csv => write_csv(table)?,
    };
    tracing::debug!(?format, bytes = bytes.len(), "serialized table");
    Ok(bytes)
}

/// Serialize and write to `path`, creating the parent directory if needed.
pub fn write_to_path(table: &FilteredTable, format: OutputFormat, path: &Path) -> Result<()> {
    let bytes = write_table(table, format)?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create dir: {}", parent.display()))?;
    }
    std::fs::write(path, bytes).with_context(|| format!("write output: {}", path.display()))?;
    Ok(())
}

fn write_xlsx(table: &FilteredTable) -> Result<Vec<u8>> {
    let mut workbook = Workbook::new();
    let header_format = Format::new().set_bold();
    let sheet = workbook.add_worksheet();

    for (col, label) in table.labels.iter().enumerate() {
        let col = u16::try_from(col).context("too many columns for xlsx")?;
        sheet.write_string_with_format(0, col, label, &header_format)?;
    }
    for (r, row) in table.rows.iter().enumerate() {
        let r = u32::try_from(r + 1).context("too many rows for xlsx")?;
        for (col, value) in row.iter().enumerate() {
            if value.is_empty() {
                continue;
            }
            let col = u16::try_from(col).context("too many columns for xlsx")?;
            sheet.write_string(r, col, value)?;
        }
    }

    workbook.save_to_buffer().context("serialize xlsx workbook")
}

fn write_csv(table: &FilteredTable) -> Result<Vec<u8>> {
    let mut wtr = csv::WriterBuilder::new().flexible(false).from_writer(Vec::new());
    wtr.write_record(&table.labels)?;
    for row in &table.rows {
        wtr.write_record(row)?;
    }
    wtr.into_inner()
        .map_err(|e| anyhow!("flush csv writer: {}", e.error()))
}
