//! Builds a stock-report workbook shaped like real exports: a title block
//! above the header, ragged body rows and a trailing totals line.

use rust_xlsxwriter::Workbook;

pub const HEADER_ROW: usize = 3;

pub fn rows() -> Vec<Vec<&'static str>> {
    vec![
        vec!["ACME JEWELS PVT LTD"],
        vec!["Stock statement as of 01-04"],
        vec![],
        vec!["Sr.", "PRODUCT", "Remarks", "Gr. WT", "Nt.\u{00a0}WT", "QTY"],
        vec!["1", "RING-01", "ok", "5.20", "4.80", "2"],
        vec!["2", "PEND-07", "", "3.10"],
        vec!["3", "BANGLE-2", "rush", "12.00", "11.50", "1", "stray"],
        vec!["", "TOTAL", "", "20.30", "16.30", "3"],
    ]
}

pub fn xlsx_bytes() -> Vec<u8> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    for (r, row) in rows().iter().enumerate() {
        for (c, value) in row.iter().enumerate() {
            if !value.is_empty() {
                sheet.write_string(r as u32, c as u16, *value).unwrap();
            }
        }
    }
    workbook.save_to_buffer().unwrap()
}

pub fn csv_bytes() -> Vec<u8> {
    let mut out = String::new();
    for row in rows() {
        // A bare newline would be skipped by CSV readers; keep the blank row.
        if row.is_empty() {
            out.push(',');
        }
        out.push_str(&row.join(","));
        out.push('\n');
    }
    out.into_bytes()
}
