use crate::error::{QianjiError, Result};
use crate::models::RawRow;

pub(crate) fn is_blank(row: &[String]) -> bool {
    row.iter().all(|cell| cell.trim().is_empty())
}

/// Split CSV text into rows of cells.
///
/// Quoted fields may contain commas, doubled quotes and line breaks. LF, CR and
/// CRLF all end a row. Rows whose cells are all blank are dropped. A quote in
/// the middle of an unquoted field is kept as a literal character.
pub fn decode(text: &str) -> Result<Vec<RawRow>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(text.as_bytes());
    let mut rows = Vec::new();

    for result in rdr.records() {
        let record = result?;
        let row: RawRow = record.iter().map(|cell| cell.to_string()).collect();
        if is_blank(&row) {
            continue;
        }
        rows.push(row);
    }
    Ok(rows)
}

fn encode_line(row: &[String]) -> Result<String> {
    // An empty row is an empty line; the csv writer would emit `""` here.
    if row.iter().all(String::is_empty) && row.len() <= 1 {
        return Ok(String::new());
    }
    let mut wtr = csv::WriterBuilder::new()
        .flexible(true)
        .quote_style(csv::QuoteStyle::Necessary)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());
    wtr.write_record(row)?;
    let bytes = wtr
        .into_inner()
        .map_err(|e| QianjiError::Other(e.to_string()))?;
    let mut line = String::from_utf8(bytes).map_err(|e| QianjiError::Other(e.to_string()))?;
    line.pop();
    Ok(line)
}

/// Join rows back into CSV text, quoting only cells that contain a quote,
/// comma or line break. Rows are separated by `\n` with no trailing newline.
pub fn encode(rows: &[RawRow]) -> Result<String> {
    let lines = rows
        .iter()
        .map(|row| encode_line(row))
        .collect::<Result<Vec<_>>>()?;
    Ok(lines.join("\n"))
}
