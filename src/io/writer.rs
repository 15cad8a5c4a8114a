use std::{collections::HashMap, io::Write};

use crate::{
    common::money::Money,
    domain::{account::AccountType, bank::AccountSummary},
};

#[derive(serde::Serialize)]
/// Internal CSV output row for the account table.
///
/// Headers written (in this order): `account,type,holder,balance`.
struct AccountRow<'a> {
    account: u64,
    #[serde(rename = "type")]
    account_type: &'a str,
    holder: u32,
    balance: String,
}

#[derive(serde::Serialize)]
struct ReportRow<'a> {
    #[serde(rename = "type")]
    account_type: &'a str,
    average_balance: String,
}

/// Writes account states to a CSV writer, in the order given.
///
/// Balances are formatted with exactly 4 decimal places using
/// `to_string_4dp()`.
///
/// # Errors
///
/// Returns a `csv::Error` if writing/serializing any row fails.
///
/// # Examples
///
/// ```
/// use bank_ledger::domain::bank::Bank;
/// use bank_ledger::domain::holder::Person;
/// use bank_ledger::common::money::Money;
/// use bank_ledger::io::writer::write_accounts;
///
/// let bank = Bank::new();
/// bank.open_consumer_account(Person::new(7, "Ada", "Lovelace"), 1234, Money::from_units(5));
///
/// let mut out = Vec::new();
/// write_accounts(&mut out, &bank.accounts()).unwrap();
///
/// let s = String::from_utf8(out).unwrap();
/// assert_eq!(s, "account,type,holder,balance\n1,ConsumerAccount,7,5.0000\n");
/// ```
pub fn write_accounts<W: Write>(writer: W, accounts: &[AccountSummary]) -> Result<(), csv::Error> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(true)
        .from_writer(writer);

    for acc in accounts {
        wtr.serialize(AccountRow {
            account: acc.number,
            account_type: acc.account_type.as_str(),
            holder: acc.holder.id_number(),
            balance: acc.balance.to_string_4dp(),
        })?;
    }

    wtr.flush()?;
    Ok(())
}

/// Writes the average-balance report, one row per account type.
///
/// For deterministic output, rows are sorted by type name.
pub fn write_report<W: Write>(
    writer: W,
    report: &HashMap<AccountType, Money>,
) -> Result<(), csv::Error> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(true)
        .from_writer(writer);

    let mut types: Vec<AccountType> = report.keys().copied().collect();
    types.sort_unstable_by_key(|t| t.as_str());

    for account_type in types {
        wtr.serialize(ReportRow {
            account_type: account_type.as_str(),
            average_balance: report[&account_type].to_string_4dp(),
        })?;
    }

    wtr.flush()?;
    Ok(())
}
