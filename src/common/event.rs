use crate::{
    common::money::Money,
    domain::{
        account::{AccountNumber, Pin},
        holder::{Company, Person},
    },
};

/// A bank operation parsed by the reader and applied by the processor.
#[derive(Debug, Clone, PartialEq)]
pub enum BankCommand {
    OpenConsumer {
        person: Person,
        pin: Pin,
        deposit: Money,
    },
    OpenCommercial {
        company: Company,
        pin: Pin,
        deposit: Money,
    },
    Credit {
        account: AccountNumber,
        pin: Pin,
        amount: Money,
    },
    Debit {
        account: AccountNumber,
        pin: Pin,
        amount: Money,
    },
    Authorize {
        account: AccountNumber,
        person: Person,
    },
}
