use crate::{
    common::money::Money,
    domain::{
        account::{AccountNumber, Pin},
        bank::Bank,
        holder::{Company, Person},
    },
};

pub fn handle_consumer(bank: &Bank, person: Person, pin: Pin, deposit: Money) -> AccountNumber {
    bank.open_consumer_account(person, pin, deposit)
}

pub fn handle_commercial(bank: &Bank, company: Company, pin: Pin, deposit: Money) -> AccountNumber {
    bank.open_commercial_account(company, pin, deposit)
}
