use std::path::PathBuf;

use colored::Colorize;

use crate::converter::{convert_text, output_filename, read_input, write_output, BankSelection};
use crate::error::{QianjiError, Result};
use crate::settings::{expand_home, resolve_output_dir};

pub fn run(file: &str, bank: &str, output_dir: Option<&str>, output: Option<&str>) -> Result<()> {
    let selection = BankSelection::from_key(bank)?;
    let input = PathBuf::from(expand_home(file));
    let text = read_input(&input)?;

    let result = convert_text(&text, selection)?;
    if result.record_count() == 0 {
        return Err(QianjiError::NoRecords);
    }

    let path = match output {
        Some(p) => PathBuf::from(expand_home(p)),
        None => {
            let today = chrono::Local::now().date_naive();
            resolve_output_dir(output_dir).join(output_filename(result.bank, today))
        }
    };
    write_output(&path, &result.csv)?;

    println!(
        "{} {} records ({}) to {}",
        "Exported".green().bold(),
        result.record_count(),
        result.bank.name(),
        path.display()
    );
    if result.conversion.skipped > 0 {
        println!(
            "{} rows skipped (no usable date or amount)",
            result.conversion.skipped
        );
    }
    Ok(())
}
