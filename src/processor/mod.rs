use rust_decimal::Decimal;
use thiserror::Error;

use crate::{
    account::{Account, AccountError, AccountId},
    command::{AccountCommand, AccountCommandError, TransactionKind},
};

#[derive(Debug, Error)]
pub enum TransactionProcessError {
    #[error(transparent)]
    CommandErr(#[from] AccountCommandError),
    #[error(transparent)]
    AccountErr(#[from] AccountError),
}

pub trait TransactionProcessor {
    fn process_transaction(
        &mut self,
        kind: TransactionKind,
        amount: Option<Decimal>,
    ) -> Result<(), TransactionProcessError>;

    fn account_id(&self) -> &AccountId;

    fn balance(&self) -> Decimal;
}

impl TransactionProcessor for Account {
    fn process_transaction(
        &mut self,
        kind: TransactionKind,
        amount: Option<Decimal>,
    ) -> Result<(), TransactionProcessError> {
        let cmd = AccountCommand::parse_command(kind, amount)?;
        self.execute(cmd)?;
        Ok(())
    }

    fn account_id(&self) -> &AccountId {
        self.id()
    }

    fn balance(&self) -> Decimal {
        Account::balance(self)
    }
}
