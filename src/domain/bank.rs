use std::collections::{BTreeMap, HashMap};

use parking_lot::RwLock;

use crate::{
    common::{error::BankError, money::Money},
    domain::{
        account::{
            Account, AccountNumber, AccountOps, AccountType, CommercialAccount, ConsumerAccount,
            Pin,
        },
        holder::{AccountHolder, Company, Person},
    },
};

/// First number handed out; zero is never a valid account number.
const FIRST_ACCOUNT_NUMBER: AccountNumber = 1;

#[derive(Debug)]
struct Registry {
    /// Numbers grow monotonically, so key order is insertion order.
    accounts: BTreeMap<AccountNumber, Account>,
    next_number: AccountNumber,
}

/// Point-in-time view of one account, used for output.
#[derive(Debug, Clone, PartialEq)]
pub struct AccountSummary {
    pub number: AccountNumber,
    pub account_type: AccountType,
    pub holder: AccountHolder,
    pub balance: Money,
}

/// In-memory registry owning every account.
///
/// Opening an account takes the registry write lock, so number assignment and
/// insertion happen as one step. All other operations share the read lock and
/// serialize on the target account's own balance lock.
#[derive(Debug)]
pub struct Bank {
    registry: RwLock<Registry>,
}

impl Default for Bank {
    fn default() -> Self {
        Self::new()
    }
}

impl Bank {
    pub fn new() -> Self {
        Self {
            registry: RwLock::new(Registry {
                accounts: BTreeMap::new(),
                next_number: FIRST_ACCOUNT_NUMBER,
            }),
        }
    }

    pub fn open_consumer_account(
        &self,
        person: Person,
        pin: Pin,
        starting_deposit: Money,
    ) -> AccountNumber {
        self.open_with(|number| {
            Account::Consumer(ConsumerAccount::new(person, number, pin, starting_deposit))
        })
    }

    pub fn open_commercial_account(
        &self,
        company: Company,
        pin: Pin,
        starting_deposit: Money,
    ) -> AccountNumber {
        self.open_with(|number| {
            Account::Commercial(CommercialAccount::new(company, number, pin, starting_deposit))
        })
    }

    fn open_with<F>(&self, build: F) -> AccountNumber
    where
        F: FnOnce(AccountNumber) -> Account,
    {
        let mut registry = self.registry.write();
        let number = registry.next_number;
        registry.next_number += 1;

        let account = build(number);
        tracing::debug!(
            account = number,
            kind = %account.account_type(),
            holder = account.holder().id_number(),
            "opened account"
        );
        registry.accounts.insert(number, account);
        number
    }

    fn with_account<T, F>(&self, number: AccountNumber, f: F) -> Result<T, BankError>
    where
        F: FnOnce(&Account) -> T,
    {
        let registry = self.registry.read();
        registry
            .accounts
            .get(&number)
            .map(f)
            .ok_or(BankError::AccountNotFound(number))
    }

    /// Balance of `number`, or [`Money::NOT_FOUND`] (-1.0) when no such account exists.
    pub fn get_balance(&self, number: AccountNumber) -> Money {
        self.balance(number).unwrap_or(Money::NOT_FOUND)
    }

    pub fn balance(&self, number: AccountNumber) -> Result<Money, BankError> {
        self.with_account(number, |acc| acc.balance())
    }

    pub fn credit(&self, number: AccountNumber, amount: Money) -> Result<(), BankError> {
        if amount.is_negative() {
            tracing::warn!(account = number, %amount, "negative credit applied as a debit");
        }
        self.with_account(number, |acc| acc.credit(amount))??;
        tracing::debug!(account = number, %amount, "credited");
        Ok(())
    }

    /// `Ok(false)` means insufficient funds; the balance is then unchanged.
    /// `AmountOverflow` also leaves it unchanged.
    pub fn debit(&self, number: AccountNumber, amount: Money) -> Result<bool, BankError> {
        let debited = self.with_account(number, |acc| acc.debit(amount))??;
        tracing::debug!(account = number, %amount, debited, "debit");
        Ok(debited)
    }

    pub fn authenticate_user(&self, number: AccountNumber, pin: Pin) -> Result<bool, BankError> {
        self.with_account(number, |acc| acc.validate_pin(pin))
    }

    /// Silently ignored for unknown and non-commercial accounts.
    pub fn add_authorized_user(&self, number: AccountNumber, person: Person) {
        let registry = self.registry.read();
        match registry.accounts.get(&number).and_then(Account::as_commercial) {
            Some(acc) => acc.add_authorized_user(person),
            None => tracing::debug!(
                account = number,
                "authorized user ignored: no commercial account"
            ),
        }
    }

    /// `false` for account number zero, a missing person, an unknown account
    /// or a non-commercial account.
    pub fn check_authorized_user(&self, number: AccountNumber, person: Option<&Person>) -> bool {
        let Some(person) = person else {
            return false;
        };
        if number == 0 {
            return false;
        }

        let registry = self.registry.read();
        registry
            .accounts
            .get(&number)
            .and_then(Account::as_commercial)
            .is_some_and(|acc| acc.is_authorized_user(person))
    }

    /// Average balance per account type.
    ///
    /// Every balance lock is taken in ascending account-number order before
    /// any balance is read, so the averages reflect a single instant. Credit
    /// and debit only ever hold one balance lock, which keeps the ordered
    /// acquisition deadlock-free.
    pub fn average_balance_report(&self) -> HashMap<AccountType, Money> {
        let mut groups: HashMap<AccountType, Vec<Money>> = HashMap::new();
        for (account_type, balance) in self.snapshot_balances() {
            groups.entry(account_type).or_default().push(balance);
        }

        groups
            .into_iter()
            .filter_map(|(account_type, balances)| {
                Money::average(balances).map(|avg| (account_type, avg))
            })
            .collect()
    }

    /// Consistent snapshot of every account in insertion order.
    pub fn accounts(&self) -> Vec<AccountSummary> {
        let registry = self.registry.read();
        let guards: Vec<_> = registry
            .accounts
            .values()
            .map(|acc| (acc, acc.core().lock_balance()))
            .collect();

        guards
            .iter()
            .map(|(acc, balance)| AccountSummary {
                number: acc.account_number(),
                account_type: acc.account_type(),
                holder: acc.holder().clone(),
                balance: **balance,
            })
            .collect()
    }

    fn snapshot_balances(&self) -> Vec<(AccountType, Money)> {
        let registry = self.registry.read();
        let guards: Vec<_> = registry
            .accounts
            .values()
            .map(|acc| (acc.account_type(), acc.core().lock_balance()))
            .collect();

        guards
            .iter()
            .map(|(account_type, balance)| (*account_type, **balance))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.registry.read().accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
