use crate::domain::account::AccountNumber;

/// Failures raised by the bank registry and the transaction façade.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum BankError {
    #[error("account {0} not found")]
    AccountNotFound(AccountNumber),
    #[error("account validation failed for account {0}")]
    AuthenticationFailed(AccountNumber),
    #[error("balance of account {0} would overflow")]
    AmountOverflow(AccountNumber),
}

#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("missing operations csv path. usage: bank_ledger <operations.csv> [--report]")]
    MissingArg,
    #[error("unknown argument: {0}")]
    UnknownArg(String),
    #[error("failed to open input file: {0}")]
    OpenInput(#[from] std::io::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("parse error: {0}")]
    Parse(String),
    #[error("bank error: {0}")]
    Bank(#[from] BankError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bank_error_messages_name_the_account() {
        assert_eq!(
            BankError::AccountNotFound(9).to_string(),
            "account 9 not found"
        );
        assert_eq!(
            BankError::AuthenticationFailed(3).to_string(),
            "account validation failed for account 3"
        );
        assert_eq!(
            BankError::AmountOverflow(5).to_string(),
            "balance of account 5 would overflow"
        );
    }

    #[test]
    fn bank_error_converts_into_app_error() {
        let err: AppError = BankError::AccountNotFound(1).into();
        assert!(matches!(err, AppError::Bank(BankError::AccountNotFound(1))));
    }
}
