use crate::{
    common::{error::BankError, money::Money},
    domain::{
        account::{AccountNumber, Pin},
        bank::Bank,
    },
};

/// An authenticated session on one account.
///
/// The PIN is checked once, in [`Transaction::new`]; every later call goes
/// straight to the bank.
#[derive(Debug, Clone, Copy)]
pub struct Transaction<'a> {
    bank: &'a Bank,
    account_number: AccountNumber,
}

impl<'a> Transaction<'a> {
    pub fn new(
        bank: &'a Bank,
        account_number: AccountNumber,
        attempted_pin: Pin,
    ) -> Result<Self, BankError> {
        if !bank.authenticate_user(account_number, attempted_pin)? {
            tracing::warn!(account = account_number, "account validation failed");
            return Err(BankError::AuthenticationFailed(account_number));
        }

        Ok(Self {
            bank,
            account_number,
        })
    }

    pub fn account_number(&self) -> AccountNumber {
        self.account_number
    }

    pub fn balance(&self) -> Result<Money, BankError> {
        self.bank.balance(self.account_number)
    }

    pub fn credit(&self, amount: Money) -> Result<(), BankError> {
        self.bank.credit(self.account_number, amount)
    }

    pub fn debit(&self, amount: Money) -> Result<bool, BankError> {
        self.bank.debit(self.account_number, amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::holder::Person;

    fn bank_with_account() -> (Bank, AccountNumber) {
        let bank = Bank::new();
        let n = bank.open_consumer_account(
            Person::new(1, "Ada", "Lovelace"),
            1234,
            Money::from_units(100),
        );
        (bank, n)
    }

    #[test]
    fn wrong_pin_fails_construction() {
        let (bank, n) = bank_with_account();

        let err = Transaction::new(&bank, n, 9999).unwrap_err();
        assert_eq!(err, BankError::AuthenticationFailed(n));
    }

    #[test]
    fn unknown_account_fails_construction() {
        let (bank, _) = bank_with_account();

        let err = Transaction::new(&bank, 77, 1234).unwrap_err();
        assert_eq!(err, BankError::AccountNotFound(77));
    }

    #[test]
    fn authenticated_transaction_forwards_to_bank() {
        let (bank, n) = bank_with_account();
        let tx = Transaction::new(&bank, n, 1234).unwrap();

        assert_eq!(tx.account_number(), n);
        assert_eq!(tx.balance(), Ok(Money::from_units(100)));

        tx.credit(Money::from_units(50)).unwrap();
        assert_eq!(tx.debit(Money::from_units(200)), Ok(false));
        assert_eq!(tx.debit(Money::from_units(150)), Ok(true));
        assert_eq!(bank.get_balance(n), Money::zero());
    }
}
