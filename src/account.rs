use std::fmt;

use rust_decimal::Decimal;
use thiserror::Error;

use crate::command::{AccountCommand, TransactionKind};

/// Opaque account identifier, fixed at creation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AccountId(String);

impl AccountId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for AccountId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl From<String> for AccountId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AccountEventKind {
    Deposited,
    Withdrawn,
}

/// Produced only by [`Account::handle_command`] against the state it is
/// applied to.
#[derive(Debug)]
struct AccountEvent {
    amount: Decimal,
    kind: AccountEventKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidArgumentReason {
    #[error("Initial balance cannot be negative")]
    NegativeInitialBalance,
    #[error("Deposit amount must be positive")]
    NonPositiveDeposit,
    #[error("Withdrawal amount must be positive")]
    NonPositiveWithdrawal,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AccountError {
    #[error("{reason}")]
    InvalidArgument { reason: InvalidArgumentReason },
    #[error("Insufficient funds")]
    InsufficientFunds { balance: Decimal, requested: Decimal },
    #[error("Deposit would overflow the balance")]
    BalanceOverflow,
    #[error("Amount {amount} cannot be applied to balance {balance} without rounding")]
    PrecisionLoss { balance: Decimal, amount: Decimal },
}

impl From<InvalidArgumentReason> for AccountError {
    fn from(reason: InvalidArgumentReason) -> Self {
        Self::InvalidArgument { reason }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    id: AccountId,
    balance: Decimal,
}

impl Account {
    /// Opens an account with zero balance.
    pub fn new(id: impl Into<AccountId>) -> Self {
        Self {
            id: id.into(),
            balance: Decimal::ZERO,
        }
    }

    /// Opens an account with the given initial balance, which must not be negative.
    pub fn with_balance(
        id: impl Into<AccountId>,
        initial_balance: Decimal,
    ) -> Result<Self, AccountError> {
        if initial_balance < Decimal::ZERO {
            return Err(InvalidArgumentReason::NegativeInitialBalance.into());
        }
        Ok(Self {
            id: id.into(),
            balance: initial_balance,
        })
    }

    pub fn id(&self) -> &AccountId {
        &self.id
    }

    pub fn balance(&self) -> Decimal {
        self.balance
    }

    pub fn deposit(&mut self, amount: Decimal) -> Result<(), AccountError> {
        self.execute(AccountCommand {
            kind: TransactionKind::Deposit,
            amount,
        })
    }

    pub fn withdraw(&mut self, amount: Decimal) -> Result<(), AccountError> {
        self.execute(AccountCommand {
            kind: TransactionKind::Withdrawal,
            amount,
        })
    }

    /// Validates the command against the current balance and applies it.
    /// A rejected command leaves the account untouched.
    pub fn execute(&mut self, command: AccountCommand) -> Result<(), AccountError> {
        match self.handle_command(&command) {
            Ok(evt) => {
                self.apply(&evt);
                tracing::debug!(
                    account = %self.id,
                    kind = ?evt.kind,
                    amount = %evt.amount,
                    balance = %self.balance,
                    "applied account event"
                );
                Ok(())
            }
            Err(err) => {
                tracing::debug!(
                    account = %self.id,
                    kind = ?command.kind,
                    amount = %command.amount,
                    %err,
                    "rejected account command"
                );
                Err(err)
            }
        }
    }

    fn apply(&mut self, event: &AccountEvent) {
        match event.kind {
            AccountEventKind::Deposited => {
                self.balance += event.amount;
            }
            AccountEventKind::Withdrawn => {
                self.balance -= event.amount;
            }
        }
    }

    fn handle_command(&self, command: &AccountCommand) -> Result<AccountEvent, AccountError> {
        let amount = command.amount;
        match command.kind {
            TransactionKind::Deposit => {
                if amount <= Decimal::ZERO {
                    return Err(InvalidArgumentReason::NonPositiveDeposit.into());
                }
                // checked here so that `apply` cannot overflow or round
                let Some(new_balance) = self.balance.checked_add(amount) else {
                    return Err(AccountError::BalanceOverflow);
                };
                if new_balance.checked_sub(self.balance) != Some(amount) {
                    return Err(AccountError::PrecisionLoss {
                        balance: self.balance,
                        amount,
                    });
                }
                Ok(AccountEvent {
                    amount,
                    kind: AccountEventKind::Deposited,
                })
            }
            TransactionKind::Withdrawal => {
                if amount <= Decimal::ZERO {
                    return Err(InvalidArgumentReason::NonPositiveWithdrawal.into());
                }
                if amount > self.balance {
                    return Err(AccountError::InsufficientFunds {
                        balance: self.balance,
                        requested: amount,
                    });
                }
                let exact = self
                    .balance
                    .checked_sub(amount)
                    .and_then(|new_balance| self.balance.checked_sub(new_balance));
                if exact != Some(amount) {
                    return Err(AccountError::PrecisionLoss {
                        balance: self.balance,
                        amount,
                    });
                }
                Ok(AccountEvent {
                    amount,
                    kind: AccountEventKind::Withdrawn,
                })
            }
        }
    }
}
