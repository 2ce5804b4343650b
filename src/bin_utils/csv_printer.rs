use std::io::Write;

use csv::Writer;
use rust_decimal::Decimal;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct AccountBalance<'a> {
    pub account: &'a str,
    pub balance: Decimal,
}

pub fn print_balance<W>(output: &mut W, balance: AccountBalance<'_>) -> anyhow::Result<()>
where
    W: Write,
{
    let mut writer = Writer::from_writer(output);
    if let Err(err) = writer.serialize(balance) {
        anyhow::bail!("Failed to write to CSV: {err}")
    }
    // Ensure all data is flushed to the output
    if let Err(err) = writer.flush() {
        anyhow::bail!("Failed to flush CSV writer: {err}")
    }
    Ok(())
}
