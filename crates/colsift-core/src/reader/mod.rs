//! Tabular file reader: turns an uploaded file into a text-only [`RawGrid`].
//!
//! Every cell becomes a string. Blank cells are `""`; nothing is typed as a
//! number or date, so normalization sees the same text regardless of format.

mod cell;
mod format;

use anyhow::{bail, Context, Result};
use calamine::{Ods, Reader, Xls, Xlsb, Xlsx};
use std::io::{Cursor, Read, Seek};
use std::path::Path;

use crate::grid::RawGrid;

pub use cell::cell_text;
pub use format::SourceFormat;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Read `bytes` as the format named by `extension` (with or without the dot).
/// For workbooks, `sheet_index` picks the worksheet; CSV ignores it.
pub fn read_grid(bytes: &[u8], extension: &str, sheet_index: usize) -> Result<RawGrid> {
    let Some(format) = SourceFormat::from_extension(extension) else {
        bail!("unsupported file type: {extension:?} (expected xlsx, xlsm, xlsb, xls, ods or csv)");
    };
    let grid = match format {
        SourceFormat::Csv => read_csv(bytes)?,
        SourceFormat::Xlsx => {
            let mut wb: Xlsx<_> = Xlsx::new(Cursor::new(bytes)).context("open xlsx workbook")?;
            sheet_grid(&mut wb, sheet_index)?
        }
        SourceFormat::Xlsb => {
            let mut wb: Xlsb<_> = Xlsb::new(Cursor::new(bytes)).context("open xlsb workbook")?;
            sheet_grid(&mut wb, sheet_index)?
        }
        SourceFormat::Xls => {
            let mut wb: Xls<_> = Xls::new(Cursor::new(bytes)).context("open xls workbook")?;
            sheet_grid(&mut wb, sheet_index)?
        }
        SourceFormat::Ods => {
            let mut wb: Ods<_> = Ods::new(Cursor::new(bytes)).context("open ods workbook")?;
            sheet_grid(&mut wb, sheet_index)?
        }
    };
    tracing::debug!(?format, rows = grid.len(), "read grid");
    Ok(grid)
}

/// Read a file from disk, taking the format from its extension.
pub fn read_path(path: &Path, sheet_index: usize) -> Result<RawGrid> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .with_context(|| format!("file has no extension: {}", path.display()))?;
    let bytes = std::fs::read(path).with_context(|| format!("read input: {}", path.display()))?;
    read_grid(&bytes, extension, sheet_index)
        .with_context(|| format!("parse input: {}", path.display()))
}

fn sheet_grid<RS, R>(workbook: &mut R, sheet_index: usize) -> Result<RawGrid>
where
    RS: Read + Seek,
    R: Reader<RS>,
    R::Error: std::error::Error + Send + Sync + 'static,
{
    let range = workbook
        .worksheet_range_at(sheet_index)
        .with_context(|| format!("workbook has no sheet at index {sheet_index}"))?
        .context("read worksheet range")?;
    // The range starts at the first used cell; pad back to A1 so row
    // indices match the sheet.
    let (top, left) = range
        .start()
        .map_or((0, 0), |(row, col)| (row as usize, col as usize));
    let mut rows: Vec<Vec<String>> = vec![Vec::new(); top];
    rows.extend(range.rows().map(|row| {
        std::iter::repeat(String::new())
            .take(left)
            .chain(row.iter().map(cell_text))
            .collect::<Vec<String>>()
    }));
    Ok(RawGrid::new(rows))
}

fn read_csv(bytes: &[u8]) -> Result<RawGrid> {
    let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(bytes);

    let mut rows = Vec::new();
    for (idx, result) in rdr.byte_records().enumerate() {
        let record = result.with_context(|| format!("CSV parse error at record {idx}"))?;
        rows.push(
            record
                .iter()
                .map(|field| String::from_utf8_lossy(field).into_owned())
                .collect(),
        );
    }
    Ok(RawGrid::new(rows))
}
