use comfy_table::{Cell, Table};

use crate::banks::{SignConvention, ALL_BANKS};
use crate::error::Result;

pub fn list() -> Result<()> {
    let mut table = Table::new();
    table.set_header(vec!["Key", "Name", "Date column", "Amount column", "Expenses are", "Note"]);
    for bank in ALL_BANKS {
        let profile = bank.profile();
        let sign = match profile.sign {
            SignConvention::NegativeIsExpense => "negative",
            SignConvention::PositiveIsExpense => "positive",
        };
        table.add_row(vec![
            Cell::new(bank.key()),
            Cell::new(bank.name()),
            Cell::new(profile.date_field),
            Cell::new(profile.amount_field),
            Cell::new(sign),
            Cell::new(profile.note_tag),
        ]);
    }
    println!("Supported statements\n{table}");
    Ok(())
}
