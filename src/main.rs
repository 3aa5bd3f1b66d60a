//! Finance Manager CLI
//!
//! Converts CSV finance records to JSON and runs balance and spending
//! queries over them.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- export transactions transactions.csv transactions.json
//! cargo run -- balance comptes.csv transactions.csv Courant 2024-06-15
//! cargo run -- spending transactions.csv food 2024-01-01 2024-01-31
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Set to `info` or `debug` to control logging verbosity

use chrono::NaiveDate;
use finance_manager::field::parse_date;
use finance_manager::{
    account_balance_by_date, create_accounts, create_categories, create_transactions,
    export_accounts_to_json, export_categories_to_json, export_transactions_to_json,
    spending_by_category, FinanceError, Result,
};
use std::env;
use std::process;

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let args: Vec<String> = env::args().skip(1).collect();
    let command = args.first().ok_or(FinanceError::MissingArgument)?;

    match command.as_str() {
        "export" => {
            let [kind, input, output] = expect_args(&args[1..])?;
            export(kind, input, output)
        }
        "balance" => {
            let [accounts_path, transactions_path, name, date] = expect_args(&args[1..])?;
            let date = cli_date(date)?;

            let accounts = create_accounts(accounts_path)?;
            let account = accounts
                .iter()
                .find(|a| a.name.as_deref() == Some(name.as_str()))
                .ok_or_else(|| FinanceError::AccountNotFound(name.clone()))?;
            let transactions = create_transactions(transactions_path)?;

            println!("{}", account_balance_by_date(&transactions, account, date));
            Ok(())
        }
        "spending" => {
            let [transactions_path, category, start, end] = expect_args(&args[1..])?;
            let (start, end) = (cli_date(start)?, cli_date(end)?);

            let transactions = create_transactions(transactions_path)?;
            println!("{}", spending_by_category(&transactions, category, start, end));
            Ok(())
        }
        other => Err(FinanceError::UnknownCommand(other.to_string())),
    }
}

fn export(kind: &str, input: &str, output: &str) -> Result<()> {
    match kind {
        "accounts" => export_accounts_to_json(&create_accounts(input)?, output),
        "categories" => export_categories_to_json(&create_categories(input)?, output),
        "transactions" => export_transactions_to_json(&create_transactions(input)?, output),
        other => Err(FinanceError::UnknownRecordKind(other.to_string())),
    }
}

/// Takes exactly `N` positional arguments.
fn expect_args<const N: usize>(args: &[String]) -> Result<[&String; N]> {
    args.iter()
        .collect::<Vec<_>>()
        .try_into()
        .map_err(|_| FinanceError::MissingArgument)
}

fn cli_date(value: &str) -> Result<NaiveDate> {
    parse_date(value).ok_or_else(|| FinanceError::InvalidDate(value.to_string()))
}
