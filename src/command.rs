use rust_decimal::Decimal;
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Deposit,
    Withdrawal,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountCommand {
    pub kind: TransactionKind,
    pub amount: Decimal,
}

#[derive(Debug, Error)]
pub enum AccountCommandError {
    #[error("Amount is required for {kind:?}")]
    AmountRequired { kind: TransactionKind },
}

impl AccountCommand {
    /// Only checks that an amount is present; whether it is acceptable is
    /// decided by the account.
    pub fn parse_command(
        kind: TransactionKind,
        amount: Option<Decimal>,
    ) -> Result<Self, AccountCommandError> {
        let Some(amount) = amount else {
            return Err(AccountCommandError::AmountRequired { kind });
        };
        Ok(Self { kind, amount })
    }
}
