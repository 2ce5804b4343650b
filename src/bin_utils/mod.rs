//! Bootstraps [`balance_tracker`](crate) within the binary: reads operations from CSV, feeds
//! them to a processor and prints the final balance.

use std::io::{Read, Write};

use crate::processor::{TransactionProcessError, TransactionProcessor};
use anyhow::Result;
use csv_parser::CsvTransactionParser;
use csv_printer::{AccountBalance, print_balance};
use thiserror::Error;
pub mod csv_parser;
pub mod csv_printer;

#[derive(Debug, Error)]
pub enum RowError {
    #[error("Malformed row: {0}")]
    Parse(#[from] csv::Error),
    #[error(transparent)]
    Process(#[from] TransactionProcessError),
}

pub struct Service<'w, R, W: 'w, P> {
    pub input: R,
    pub output: &'w mut W,
    pub processor: P,
    pub error_printer: Box<dyn FnMut(u64, RowError)>,
}

impl<'w, R, W, P> Service<'w, R, W, P>
where
    R: Read,
    W: Write + 'w,
    P: TransactionProcessor,
{
    /// Rejected rows are reported and skipped; only output failures abort the run.
    pub fn run(mut self) -> Result<P> {
        let parser = CsvTransactionParser::new(self.input);

        for (line, row) in parser {
            let result = row
                .map_err(RowError::from)
                .and_then(|row| {
                    self.processor
                        .process_transaction(row.kind, row.amount)
                        .map_err(RowError::from)
                });
            if let Err(err) = result {
                (self.error_printer)(line, err);
            }
        }

        print_balance(
            self.output,
            AccountBalance {
                account: self.processor.account_id().as_str(),
                balance: self.processor.balance(),
            },
        )?;
        Ok(self.processor)
    }
}
