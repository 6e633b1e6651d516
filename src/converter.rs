use std::path::Path;

use chrono::NaiveDate;
use tracing::info;

use crate::banks::{BankKind, Conversion};
use crate::codec::{decode, encode};
use crate::error::{QianjiError, Result};
use crate::models::RawRow;
use crate::records::{clean_headers, to_records};

/// Which transform to run: a named bank, or whichever one the headers match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BankSelection {
    Auto,
    Fixed(BankKind),
}

impl BankSelection {
    pub fn from_key(key: &str) -> Result<Self> {
        if key == "auto" {
            return Ok(Self::Auto);
        }
        BankKind::from_key(key)
            .map(Self::Fixed)
            .ok_or_else(|| QianjiError::UnknownBank(key.to_string()))
    }
}

pub struct ConvertOutput {
    pub bank: BankKind,
    pub conversion: Conversion,
    /// Encoded Qianji CSV, header included, without the byte-order mark.
    pub csv: String,
}

impl ConvertOutput {
    pub fn record_count(&self) -> usize {
        self.conversion.rows.len()
    }
}

fn detect_rows(rows: &[RawRow]) -> Option<BankKind> {
    let headers = clean_headers(rows.first()?);
    BankKind::detect(&headers)
}

/// Detect the bank of a statement from its header line.
pub fn detect_text(text: &str) -> Result<Option<BankKind>> {
    Ok(detect_rows(&decode(text)?))
}

/// Run the whole conversion over in-memory text. Zero converted records is
/// not an error here; callers decide how to report it.
pub fn convert_text(text: &str, selection: BankSelection) -> Result<ConvertOutput> {
    let rows = decode(text)?;
    let bank = match selection {
        BankSelection::Fixed(bank) => bank,
        BankSelection::Auto => detect_rows(&rows).ok_or(QianjiError::UndetectedBank)?,
    };

    let records = to_records(&rows);
    let conversion = bank.convert(&records);
    let csv = encode(&conversion.to_rows())?;

    info!(
        bank = bank.key(),
        converted = conversion.rows.len(),
        skipped = conversion.skipped,
        "converted statement"
    );
    Ok(ConvertOutput { bank, conversion, csv })
}

pub fn read_input(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(QianjiError::InputNotFound(path.display().to_string()));
    }
    Ok(std::fs::read_to_string(path)?)
}

/// `{bank}_qianji_output_{YYYY-MM-DD}.csv`
pub fn output_filename(bank: BankKind, date: NaiveDate) -> String {
    format!("{}_qianji_output_{}.csv", bank.key(), date.format("%Y-%m-%d"))
}

/// Write the CSV with a UTF-8 byte-order mark so spreadsheet apps pick the right encoding.
pub fn write_output(path: &Path, csv: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(path, format!("\u{FEFF}{csv}"))?;
    Ok(())
}
