use thiserror::Error;

use crate::ledger::{AccountId, Amount};

/// Canonical error type exposed by the ledger operations.
///
/// Every variant is reported synchronously to the caller of the failing
/// operation; the ledger never retries internally, and a returned error
/// guarantees that no state was touched.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LedgerError {
    /// Initialization parameters were rejected.
    #[error("invalid ledger configuration: {0}")]
    InvalidConfig(String),

    /// A debit would exceed the holder's current balance.
    #[error("insufficient balance in account {account}: have {balance}, need {requested}")]
    InsufficientBalance {
        account: AccountId,
        balance: Amount,
        requested: Amount,
    },

    /// A delegated spend would exceed the remaining allowance.
    #[error(
        "insufficient allowance for spender {spender} on account {owner}: \
         have {remaining}, need {requested}"
    )]
    InsufficientAllowance {
        owner: AccountId,
        spender: AccountId,
        remaining: Amount,
        requested: Amount,
    },

    /// A quantity was negative or otherwise malformed.
    #[error("invalid amount: {0}")]
    InvalidAmount(i64),
}
