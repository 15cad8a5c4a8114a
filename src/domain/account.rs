use std::fmt;

use parking_lot::{Mutex, MutexGuard};

use crate::{
    common::{error::BankError, money::Money},
    domain::holder::{AccountHolder, Company, Person},
};

pub type AccountNumber = u64;
pub type Pin = u32;

/// Concrete account variant, used as the grouping key of the balance report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AccountType {
    Consumer,
    Commercial,
}

impl AccountType {
    pub fn as_str(&self) -> &'static str {
        match self {
            AccountType::Consumer => "ConsumerAccount",
            AccountType::Commercial => "CommercialAccount",
        }
    }
}

impl fmt::Display for AccountType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// State shared by every account variant.
#[derive(Debug)]
pub struct AccountCore {
    number: AccountNumber,
    holder: AccountHolder,
    pin: Pin,
    /// Guards the read-check-write of credit and debit.
    balance: Mutex<Money>,
}

impl AccountCore {
    fn new(
        holder: AccountHolder,
        number: AccountNumber,
        pin: Pin,
        starting_deposit: Money,
    ) -> Self {
        Self {
            number,
            holder,
            pin,
            balance: Mutex::new(starting_deposit),
        }
    }

    pub(crate) fn lock_balance(&self) -> MutexGuard<'_, Money> {
        self.balance.lock()
    }
}

/// Operations every account supports.
pub trait AccountOps {
    fn core(&self) -> &AccountCore;

    fn account_number(&self) -> AccountNumber {
        self.core().number
    }

    fn holder(&self) -> &AccountHolder {
        &self.core().holder
    }

    fn validate_pin(&self, attempt: Pin) -> bool {
        self.core().pin == attempt
    }

    fn balance(&self) -> Money {
        *self.core().lock_balance()
    }

    /// Adds `amount`; zero and negative amounts are applied as given. A sum
    /// outside the representable range leaves the balance untouched.
    fn credit(&self, amount: Money) -> Result<(), BankError> {
        let mut balance = self.core().lock_balance();
        *balance = balance
            .checked_add(amount)
            .ok_or(BankError::AmountOverflow(self.account_number()))?;
        Ok(())
    }

    /// `Ok(false)` and an untouched balance when `amount` exceeds it.
    fn debit(&self, amount: Money) -> Result<bool, BankError> {
        let mut balance = self.core().lock_balance();
        if amount > *balance {
            return Ok(false);
        }
        *balance = balance
            .checked_sub(amount)
            .ok_or(BankError::AmountOverflow(self.account_number()))?;
        Ok(true)
    }
}

#[derive(Debug)]
pub struct ConsumerAccount {
    core: AccountCore,
}

impl ConsumerAccount {
    pub(crate) fn new(
        person: Person,
        number: AccountNumber,
        pin: Pin,
        starting_deposit: Money,
    ) -> Self {
        Self {
            core: AccountCore::new(person.into(), number, pin, starting_deposit),
        }
    }
}

impl AccountOps for ConsumerAccount {
    fn core(&self) -> &AccountCore {
        &self.core
    }
}

/// Account held by a company, with a list of persons allowed to operate it.
#[derive(Debug)]
pub struct CommercialAccount {
    core: AccountCore,
    authorized_users: Mutex<Vec<Person>>,
}

impl CommercialAccount {
    pub(crate) fn new(
        company: Company,
        number: AccountNumber,
        pin: Pin,
        starting_deposit: Money,
    ) -> Self {
        Self {
            core: AccountCore::new(company.into(), number, pin, starting_deposit),
            authorized_users: Mutex::new(Vec::new()),
        }
    }

    /// Adds `person` unless a user with the same id is already listed.
    pub fn add_authorized_user(&self, person: Person) {
        let mut users = self.authorized_users.lock();
        if users.iter().all(|p| p.id_number() != person.id_number()) {
            users.push(person);
        }
    }

    /// Stricter than the add check: id, first name and last name must all match.
    pub fn is_authorized_user(&self, person: &Person) -> bool {
        self.authorized_users
            .lock()
            .iter()
            .any(|p| p.same_identity(person))
    }

    pub fn authorized_users(&self) -> Vec<Person> {
        self.authorized_users.lock().clone()
    }
}

impl AccountOps for CommercialAccount {
    fn core(&self) -> &AccountCore {
        &self.core
    }
}

#[derive(Debug)]
pub enum Account {
    Consumer(ConsumerAccount),
    Commercial(CommercialAccount),
}

impl Account {
    pub fn account_type(&self) -> AccountType {
        match self {
            Account::Consumer(_) => AccountType::Consumer,
            Account::Commercial(_) => AccountType::Commercial,
        }
    }

    pub fn as_commercial(&self) -> Option<&CommercialAccount> {
        match self {
            Account::Commercial(acc) => Some(acc),
            Account::Consumer(_) => None,
        }
    }
}

impl AccountOps for Account {
    fn core(&self) -> &AccountCore {
        match self {
            Account::Consumer(acc) => acc.core(),
            Account::Commercial(acc) => acc.core(),
        }
    }
}
