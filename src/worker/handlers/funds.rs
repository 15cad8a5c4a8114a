use crate::{
    common::{error::BankError, money::Money},
    domain::{
        account::{AccountNumber, Pin},
        bank::Bank,
        transaction::Transaction,
    },
};

pub fn handle_credit(
    bank: &Bank,
    account: AccountNumber,
    pin: Pin,
    amount: Money,
) -> Result<(), BankError> {
    Transaction::new(bank, account, pin)?.credit(amount)
}

/// `Ok(false)` when the account holds less than `amount`.
pub fn handle_debit(
    bank: &Bank,
    account: AccountNumber,
    pin: Pin,
    amount: Money,
) -> Result<bool, BankError> {
    Transaction::new(bank, account, pin)?.debit(amount)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::holder::Person;

    fn bank_with_account() -> (Bank, AccountNumber) {
        let bank = Bank::new();
        let n = bank.open_consumer_account(Person::new(1, "A", "B"), 1234, Money::from_units(100));
        (bank, n)
    }

    #[test]
    fn credit_and_debit_require_matching_pin() {
        let (bank, n) = bank_with_account();

        assert_eq!(
            handle_credit(&bank, n, 1111, Money::from_units(5)),
            Err(BankError::AuthenticationFailed(n))
        );
        assert_eq!(
            handle_debit(&bank, n, 1111, Money::from_units(5)),
            Err(BankError::AuthenticationFailed(n))
        );
        assert_eq!(bank.get_balance(n), Money::from_units(100));
    }

    #[test]
    fn authenticated_credit_and_debit_move_funds() {
        let (bank, n) = bank_with_account();

        handle_credit(&bank, n, 1234, Money::from_units(50)).unwrap();
        assert_eq!(handle_debit(&bank, n, 1234, Money::from_units(500)), Ok(false));
        assert_eq!(handle_debit(&bank, n, 1234, Money::from_units(150)), Ok(true));
        assert_eq!(bank.get_balance(n), Money::zero());
    }

    #[test]
    fn unknown_account_is_reported() {
        let (bank, _) = bank_with_account();

        assert_eq!(
            handle_debit(&bank, 99, 1234, Money::from_units(1)),
            Err(BankError::AccountNotFound(99))
        );
    }
}
