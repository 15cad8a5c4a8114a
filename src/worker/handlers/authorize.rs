use crate::domain::{account::AccountNumber, bank::Bank, holder::Person};

/// Returns whether `person` is authorized on `account` afterwards. Unknown and
/// consumer accounts never authorize anyone.
pub fn handle(bank: &Bank, account: AccountNumber, person: Person) -> bool {
    bank.add_authorized_user(account, person.clone());
    bank.check_authorized_user(account, Some(&person))
}
