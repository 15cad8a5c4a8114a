use crate::{
    common::{error::BankError, event::BankCommand},
    domain::bank::Bank,
    worker::handlers::{authorize, funds, open},
};

/// Applies parsed commands to a bank.
///
/// Rejected operations (bad PIN, unknown account, insufficient funds, balance
/// overflow, authorization on a non-commercial account) are logged and
/// counted, and never stop the batch.
#[derive(Debug, Default)]
pub struct Processor {
    rejected: usize,
}

impl Processor {
    pub fn new() -> Self {
        Self { rejected: 0 }
    }

    pub fn rejected(&self) -> usize {
        self.rejected
    }

    pub fn process(&mut self, bank: &Bank, command: BankCommand) {
        match command {
            BankCommand::OpenConsumer {
                person,
                pin,
                deposit,
            } => {
                let number = open::handle_consumer(bank, person, pin, deposit);
                tracing::info!(account = number, "consumer account opened");
            }
            BankCommand::OpenCommercial {
                company,
                pin,
                deposit,
            } => {
                let number = open::handle_commercial(bank, company, pin, deposit);
                tracing::info!(account = number, "commercial account opened");
            }
            BankCommand::Credit {
                account,
                pin,
                amount,
            } => {
                if let Err(err) = funds::handle_credit(bank, account, pin, amount) {
                    self.reject(&err);
                }
            }
            BankCommand::Debit {
                account,
                pin,
                amount,
            } => match funds::handle_debit(bank, account, pin, amount) {
                Ok(true) => {}
                Ok(false) => {
                    tracing::warn!(account, %amount, "debit rejected: insufficient funds");
                    self.rejected += 1;
                }
                Err(err) => self.reject(&err),
            },
            BankCommand::Authorize { account, person } => {
                let id = person.id_number();
                if !authorize::handle(bank, account, person) {
                    tracing::warn!(account, person = id, "authorized user not recorded");
                    self.rejected += 1;
                }
            }
        }
    }

    fn reject(&mut self, err: &BankError) {
        tracing::warn!(error = %err, "operation rejected");
        self.rejected += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        common::money::Money,
        domain::holder::{Company, Person},
    };

    fn open_consumer(processor: &mut Processor, bank: &Bank, deposit: i64) {
        processor.process(
            bank,
            BankCommand::OpenConsumer {
                person: Person::new(1, "Ada", "Lovelace"),
                pin: 1234,
                deposit: Money::from_units(deposit),
            },
        );
    }

    #[test]
    fn applies_commands_in_order() {
        let bank = Bank::new();
        let mut processor = Processor::new();

        open_consumer(&mut processor, &bank, 100);
        processor.process(
            &bank,
            BankCommand::Credit {
                account: 1,
                pin: 1234,
                amount: Money::from_units(50),
            },
        );
        processor.process(
            &bank,
            BankCommand::Debit {
                account: 1,
                pin: 1234,
                amount: Money::from_units(25),
            },
        );

        assert_eq!(bank.get_balance(1), Money::from_units(125));
        assert_eq!(processor.rejected(), 0);
    }

    #[test]
    fn counts_rejections_without_stopping() {
        let bank = Bank::new();
        let mut processor = Processor::new();

        open_consumer(&mut processor, &bank, 100);
        // wrong pin
        processor.process(
            &bank,
            BankCommand::Credit {
                account: 1,
                pin: 9999,
                amount: Money::from_units(50),
            },
        );
        // insufficient funds
        processor.process(
            &bank,
            BankCommand::Debit {
                account: 1,
                pin: 1234,
                amount: Money::from_units(500),
            },
        );
        // unknown account
        processor.process(
            &bank,
            BankCommand::Debit {
                account: 8,
                pin: 1234,
                amount: Money::from_units(1),
            },
        );
        // consumer accounts have no authorized users
        processor.process(
            &bank,
            BankCommand::Authorize {
                account: 1,
                person: Person::new(7, "A", "B"),
            },
        );

        assert_eq!(processor.rejected(), 4);
        assert_eq!(bank.get_balance(1), Money::from_units(100));
    }

    #[test]
    fn overflowing_credit_is_counted_as_rejection() {
        let bank = Bank::new();
        let mut processor = Processor::new();

        open_consumer(&mut processor, &bank, 900_000_000_000_000);
        processor.process(
            &bank,
            BankCommand::Credit {
                account: 1,
                pin: 1234,
                amount: Money::from_units(900_000_000_000_000),
            },
        );

        assert_eq!(processor.rejected(), 1);
        assert_eq!(bank.get_balance(1), Money::from_units(900_000_000_000_000));
    }

    #[test]
    fn authorizes_users_on_commercial_accounts() {
        let bank = Bank::new();
        let mut processor = Processor::new();

        processor.process(
            &bank,
            BankCommand::OpenCommercial {
                company: Company::new(3, "C"),
                pin: 4321,
                deposit: Money::from_units(500),
            },
        );
        processor.process(
            &bank,
            BankCommand::Authorize {
                account: 1,
                person: Person::new(7, "A", "B"),
            },
        );

        assert_eq!(processor.rejected(), 0);
        assert!(bank.check_authorized_user(1, Some(&Person::new(7, "A", "B"))));
    }
}
