use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "payconfirm", version, about = "Terminal payment confirmation form")]
pub struct Cli {
    /// YAML file overriding the payment instructions
    #[arg(long, value_name = "path")]
    pub config: Option<PathBuf>,

    /// Write logs here instead of the default data directory
    #[arg(long, value_name = "path")]
    pub log_file: Option<PathBuf>,

    /// Print the payment instructions and exit without entering the TUI
    #[arg(long)]
    pub show_details: bool,
}
