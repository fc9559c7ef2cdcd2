use calamine::Data;

/// Text form of a workbook cell.
///
/// Whole floats print without a fractional part ("5", not "5.0"), since
/// spreadsheets store most integers as floats.
pub fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        Data::Float(f) if f.fract() == 0.0 && f.abs() < 1e15 => format!("{}", *f as i64),
        other => other.to_string(),
    }
}
