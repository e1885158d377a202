use serde::{Deserialize, Serialize};

use crate::error::LedgerError;
use crate::ledger::AccountId;

/// Deployment parameters for one ledger instance.
///
/// The supply is carried as a signed integer because the embedding transport
/// may hand us anything; [`Ledger::initialize`](crate::ledger::Ledger::initialize)
/// rejects negative values with [`LedgerError::InvalidConfig`].
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct TokenConfig {
    pub name: String,
    pub symbol: String,
    pub standard: String,
    pub admin: AccountId,
    pub total_supply: i64,
}

impl TokenConfig {
    /// Parse a config from the JSON shape used by deployment manifests.
    pub fn from_json(raw: &str) -> Result<Self, LedgerError> {
        serde_json::from_str(raw).map_err(|err| LedgerError::InvalidConfig(err.to_string()))
    }
}

/// Immutable name/symbol/standard triple.
///
/// Pure read accessors; carries no invariant beyond immutability.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct TokenMetadata {
    pub name: String,
    pub symbol: String,
    pub standard: String,
}
