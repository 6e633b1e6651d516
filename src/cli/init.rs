use std::path::PathBuf;

use crate::error::Result;
use crate::settings::{expand_home, load_settings, save_settings};

pub fn run(output_dir: Option<String>) -> Result<()> {
    let mut settings = load_settings();

    if let Some(dir) = output_dir {
        settings.output_dir = expand_home(&dir);
    } else {
        let default = &settings.output_dir;
        println!("Output directory [{}]: ", default);
        let mut input = String::new();
        std::io::stdin().read_line(&mut input).ok();
        let chosen = input.trim();
        if !chosen.is_empty() {
            settings.output_dir = expand_home(chosen);
        }
    }

    let saved_to = save_settings(&settings)?;
    std::fs::create_dir_all(PathBuf::from(&settings.output_dir))?;

    println!("Output directory set to {}", settings.output_dir);
    println!("Settings saved to {}", saved_to.display());
    Ok(())
}
