use crate::{
    common::{event::BankCommand, money::Money},
    domain::holder::{Company, Person},
};
use std::{io::Read, str::FromStr};

#[derive(serde::Deserialize)]
/// Internal CSV row representation matching the input headers. Columns a row
/// type does not use are left empty (or omitted at the end of the row).
struct CsvRow {
    #[serde(rename = "type")]
    op: String,
    account: Option<u64>,
    holder: Option<u32>,
    name: Option<String>,
    surname: Option<String>,
    pin: Option<u32>,
    amount: Option<String>,
}

impl CsvRow {
    fn context(&self) -> String {
        match (self.account, self.holder) {
            (Some(account), _) => format!("account {account}"),
            (None, Some(holder)) => format!("holder {holder}"),
            (None, None) => "row".to_string(),
        }
    }

    fn require<T: Clone>(&self, kind: &str, field: &str, value: &Option<T>) -> Result<T, String> {
        value
            .clone()
            .ok_or_else(|| format!("{kind} missing {field} for {}", self.context()))
    }

    fn amount(&self, kind: &str) -> Result<Money, String> {
        let amt_str = self.require(kind, "amount", &self.amount)?;
        Money::from_str(&amt_str)
            .map_err(|e| format!("{kind} invalid amount for {}: {e}", self.context()))
    }

    fn person(&self, kind: &str) -> Result<Person, String> {
        Ok(Person::new(
            self.require(kind, "holder", &self.holder)?,
            self.require(kind, "name", &self.name)?,
            self.require(kind, "surname", &self.surname)?,
        ))
    }
}

/// Reads and validates bank operations from a CSV reader.
///
/// Supported headers: `type,account,holder,name,surname,pin,amount`.
/// The `type` field is matched case-insensitively; errors name the row type
/// and the account or holder involved.
///
/// # Examples
///
/// ```
/// use bank_ledger::io::reader::read_commands;
/// use bank_ledger::common::event::BankCommand;
/// use csv::ReaderBuilder;
///
/// let data = "type,account,holder,name,surname,pin,amount\n\
/// open_consumer,,7,Ada,Lovelace,1234,100.0\n\
/// debit,1,,,,1234,25\n";
/// let mut rdr = ReaderBuilder::new().from_reader(data.as_bytes());
/// let commands: Vec<_> = read_commands(&mut rdr).collect();
///
/// assert!(matches!(commands[0], Ok(BankCommand::OpenConsumer { pin: 1234, .. })));
/// assert!(matches!(commands[1], Ok(BankCommand::Debit { account: 1, .. })));
/// ```
pub fn read_commands<R: Read>(
    rdr: &mut csv::Reader<R>,
) -> impl Iterator<Item = Result<BankCommand, String>> + '_ {
    rdr.deserialize::<CsvRow>().map(|res| {
        let row = res.map_err(|e| e.to_string())?;
        let kind = row.op.trim().to_ascii_lowercase();
        let kind = kind.as_str();

        match kind {
            "open_consumer" => Ok(BankCommand::OpenConsumer {
                person: row.person(kind)?,
                pin: row.require(kind, "pin", &row.pin)?,
                deposit: row.amount(kind)?,
            }),
            "open_commercial" => Ok(BankCommand::OpenCommercial {
                company: Company::new(
                    row.require(kind, "holder", &row.holder)?,
                    row.require(kind, "name", &row.name)?,
                ),
                pin: row.require(kind, "pin", &row.pin)?,
                deposit: row.amount(kind)?,
            }),
            "credit" => Ok(BankCommand::Credit {
                account: row.require(kind, "account", &row.account)?,
                pin: row.require(kind, "pin", &row.pin)?,
                amount: row.amount(kind)?,
            }),
            "debit" => Ok(BankCommand::Debit {
                account: row.require(kind, "account", &row.account)?,
                pin: row.require(kind, "pin", &row.pin)?,
                amount: row.amount(kind)?,
            }),
            "authorize" => Ok(BankCommand::Authorize {
                account: row.require(kind, "account", &row.account)?,
                person: row.person(kind)?,
            }),
            other => Err(format!("unknown operation type: {other} for {}", row.context())),
        }
    })
}
