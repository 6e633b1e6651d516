use std::path::PathBuf;

use colored::Colorize;
use comfy_table::{Cell, Table};

use crate::converter::{convert_text, read_input, BankSelection};
use crate::error::Result;
use crate::fmt::grouped;
use crate::models::TxType;
use crate::settings::expand_home;

pub fn run(file: &str, bank: &str, limit: usize) -> Result<()> {
    let selection = BankSelection::from_key(bank)?;
    let text = read_input(&PathBuf::from(expand_home(file)))?;
    let result = convert_text(&text, selection)?;

    let mut table = Table::new();
    table.set_header(vec!["Time", "Category", "Type", "Amount", "Account", "Note"]);
    for row in result.conversion.rows.iter().take(limit) {
        let (label, amount) = match row.tx_type {
            TxType::Expense => (row.tx_type.label().red(), grouped(row.amount).red()),
            TxType::Income => (row.tx_type.label().green(), grouped(row.amount).green()),
        };
        table.add_row(vec![
            Cell::new(&row.time),
            Cell::new(&row.category),
            Cell::new(label),
            Cell::new(amount),
            Cell::new(&row.account1),
            Cell::new(&row.note),
        ]);
    }

    println!("{}\n{table}", result.bank.name());
    let shown = result.record_count().min(limit);
    println!(
        "{shown} of {} records shown, {} rows skipped",
        result.record_count(),
        result.conversion.skipped
    );
    Ok(())
}
