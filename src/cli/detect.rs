use std::path::PathBuf;

use crate::converter::{detect_text, read_input};
use crate::error::{QianjiError, Result};
use crate::settings::expand_home;

pub fn run(file: &str) -> Result<()> {
    let text = read_input(&PathBuf::from(expand_home(file)))?;
    let bank = detect_text(&text)?.ok_or(QianjiError::UndetectedBank)?;
    println!("{} ({})", bank.key(), bank.name());
    Ok(())
}
