mod banks;
mod cli;
mod codec;
mod converter;
mod error;
mod fmt;
mod models;
mod records;
mod settings;

use clap::Parser;

use cli::{Cli, Commands};

fn main() {
    // Silent unless RUST_LOG is set, e.g. RUST_LOG=qianji=debug to see skipped rows.
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Convert {
            file,
            bank,
            output_dir,
            output,
        } => cli::convert::run(&file, &bank, output_dir.as_deref(), output.as_deref()),
        Commands::Detect { file } => cli::detect::run(&file),
        Commands::Preview { file, bank, limit } => cli::preview::run(&file, &bank, limit),
        Commands::Banks => cli::formats::list(),
        Commands::Init { output_dir } => cli::init::run(output_dir),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
