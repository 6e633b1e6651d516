pub mod convert;
pub mod detect;
pub mod formats;
pub mod init;
pub mod preview;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "qianji",
    version,
    about = "Convert HSBC and BEA credit card CSV statements into Qianji import files."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Convert a statement CSV and write the Qianji import file.
    Convert {
        /// Path to the bank statement CSV
        file: String,
        /// Statement format: auto, hsbc, bea
        #[arg(long, default_value = "auto")]
        bank: String,
        /// Directory for the output file (default: saved setting, ~/Documents/qianji)
        #[arg(long = "output-dir")]
        output_dir: Option<String>,
        /// Exact output file path; overrides --output-dir and the generated name
        #[arg(long)]
        output: Option<String>,
    },
    /// Print which bank a statement CSV comes from.
    Detect {
        /// Path to the bank statement CSV
        file: String,
    },
    /// Show converted rows without writing anything.
    Preview {
        /// Path to the bank statement CSV
        file: String,
        /// Statement format: auto, hsbc, bea
        #[arg(long, default_value = "auto")]
        bank: String,
        /// Maximum rows to show
        #[arg(long, default_value = "20")]
        limit: usize,
    },
    /// List supported statement formats.
    Banks,
    /// Save the default output directory.
    Init {
        /// Directory converted files are written to
        #[arg(long = "output-dir")]
        output_dir: Option<String>,
    },
}
