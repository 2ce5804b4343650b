use std::{cell::RefCell, rc::Rc, str::FromStr, str::from_utf8};

use balance_tracker::{
    account::{Account, AccountError, InvalidArgumentReason},
    bin_utils::{RowError, Service},
};
use rust_decimal::{Decimal, prelude::FromPrimitive};

const TEST_FILE: &str = include_str!("operations.csv");

fn fail_on_error(line: u64, err: RowError) {
    panic!("unexpected error at line {line}: {err}")
}

#[test]
fn replay_operations() {
    let rejected = Rc::new(RefCell::new(Vec::new()));
    let mut output = Vec::new();
    let service = Service {
        input: TEST_FILE.as_bytes(),
        output: &mut output,
        processor: Account::with_balance("12345", Decimal::from_u32(100).unwrap()).unwrap(),
        error_printer: Box::new({
            let rejected = rejected.clone();
            move |_line: u64, err: RowError| rejected.borrow_mut().push(err.to_string())
        }),
    };
    let account = service.run().unwrap();

    assert_eq!(account.balance(), Decimal::new(1195, 1));
    assert_eq!(from_utf8(&output).unwrap(), "account,balance\n12345,119.5\n");

    let rejected = rejected.borrow();
    assert_eq!(rejected.len(), 4);
    assert!(rejected.contains(&"Insufficient funds".to_string()));
    assert!(rejected.contains(&"Deposit amount must be positive".to_string()));
    assert!(rejected.contains(&"Amount is required for Deposit".to_string()));
    assert!(rejected.iter().any(|msg| msg.starts_with("Malformed row")));
}

#[test]
fn rejected_operations_leave_balance_unchanged() {
    let mut account = Account::with_balance("12345", Decimal::from_u32(100).unwrap()).unwrap();
    assert!(account.withdraw(Decimal::from_u32(150).unwrap()).is_err());
    assert!(account.deposit(Decimal::ZERO).is_err());
    assert!(account.withdraw(Decimal::NEGATIVE_ONE).is_err());
    assert_eq!(account.balance(), Decimal::from_u32(100).unwrap());

    account.deposit(Decimal::from_u32(50).unwrap()).unwrap();
    account.withdraw(Decimal::from_u32(30).unwrap()).unwrap();
    assert_eq!(account.balance(), Decimal::from_u32(120).unwrap());
}

#[test]
fn initial_balance_from_argument() {
    let mut output = Vec::new();
    let initial = Decimal::from_str("25.75").unwrap();
    let service = Service {
        input: "type,amount\nwithdrawal,5\n".as_bytes(),
        output: &mut output,
        processor: Account::with_balance("acc-7", initial).unwrap(),
        error_printer: Box::new(fail_on_error),
    };
    service.run().unwrap();
    assert_eq!(from_utf8(&output).unwrap(), "account,balance\nacc-7,20.75\n");

    let negative = Decimal::from_str("-0.01").unwrap();
    let err = Account::with_balance("acc-7", negative).unwrap_err();
    assert_eq!(
        err,
        AccountError::InvalidArgument {
            reason: InvalidArgumentReason::NegativeInitialBalance
        }
    );
}
