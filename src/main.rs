use clap::Parser;

use payconfirm::cli::Cli;
use payconfirm::config::{self, Config, PaymentInstructions};
use payconfirm::error::AppError;
use payconfirm::state::AppState;
use payconfirm::{logging, tui};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), AppError> {
    let cli = Cli::parse();

    let config = Config::load(cli.config.as_deref())?;

    // Handle --show-details
    if cli.show_details {
        print_details(&config.instructions);
        return Ok(());
    }

    let log_path = cli.log_file.unwrap_or_else(config::default_log_path);
    logging::init_logging(&log_path)?;
    tracing::info!(log = %log_path.display(), "starting payconfirm");

    let state = AppState::new(config.instructions);
    tui::run_tui(state)
}

fn print_details(info: &PaymentInstructions) {
    println!("{}", info.headline);
    println!("{}", info.lead);
    println!();
    println!("Account Number: {}", info.account_number);
    println!("Bank:           {}", info.bank_name);
    println!("Account Name:   {}", info.account_name);
    println!("Amount:         {}", info.amount);
}
