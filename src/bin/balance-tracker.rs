use std::{fs::File, str::FromStr};

use anyhow::{Context, Result};
use balance_tracker::{
    account::Account,
    bin_utils::{RowError, Service},
    processor::TransactionProcessError,
};
use rust_decimal::Decimal;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    // stdout is reserved for the CSV result
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let mut args = std::env::args().skip(1);
    let account_id = args
        .next()
        .context("Expected an account id as the first argument")?;
    let filename = args
        .next()
        .context("Expected a file name as the second argument")?;
    let initial_balance = match args.next() {
        Some(raw) => Decimal::from_str(&raw)
            .with_context(|| format!("Failed to parse initial balance `{raw}`"))?,
        None => Decimal::ZERO,
    };

    let account = Account::with_balance(account_id, initial_balance)
        .context("Failed to open account")?;
    let file = File::open(&filename).with_context(|| format!("Failed to open `{filename}`"))?;

    let service = Service {
        input: file,
        output: &mut std::io::stdout(),
        processor: account,
        error_printer: Box::new(|line: u64, err: RowError| match err {
            RowError::Parse(_) | RowError::Process(TransactionProcessError::CommandErr(_)) => {
                tracing::warn!(line, %err, "skipped malformed row")
            }
            // business rejections, not technical errors
            RowError::Process(TransactionProcessError::AccountErr(_)) => {
                tracing::info!(line, %err, "transaction rejected")
            }
        }),
    };
    let account = service.run()?;
    tracing::debug!(account = %account.id(), balance = %account.balance(), "replay finished");
    Ok(())
}
