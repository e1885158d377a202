use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use tracing::{debug, warn};

use crate::config::{TokenConfig, TokenMetadata};
use crate::error::LedgerError;
use crate::events::{EventLog, EventSink, LedgerEvent};

pub type AccountId = String;
pub type Amount = u64;

/// Convert a signed wire quantity into a ledger [`Amount`].
///
/// Transports that speak signed integers call this at the boundary; the
/// core itself only ever sees non-negative quantities.
pub fn checked_amount(raw: i64) -> Result<Amount, LedgerError> {
    Amount::try_from(raw).map_err(|_| LedgerError::InvalidAmount(raw))
}

/// Single-asset balance table with a delegated-spend layer.
///
/// The ledger exclusively owns both tables; mutation happens only through
/// [`transfer`](Ledger::transfer), [`approve`](Ledger::approve), and
/// [`transfer_from`](Ledger::transfer_from). Every mutating operation stages
/// all precondition checks before the first write, so a returned error
/// guarantees untouched state. Exclusivity of mutation is a type-system
/// fact (`&mut self`); embedders that share the ledger across threads wrap
/// it in [`SharedLedger`](crate::shared::SharedLedger).
pub struct Ledger<S: EventSink = EventLog> {
    metadata: TokenMetadata,
    total_supply: Amount,
    balances: BTreeMap<AccountId, Amount>,
    allowances: BTreeMap<AccountId, BTreeMap<AccountId, Amount>>,
    sink: S,
}

/// Serializable copy of the full ledger state plus its digest.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct LedgerSnapshot {
    pub metadata: TokenMetadata,
    pub total_supply: Amount,
    pub balances: BTreeMap<AccountId, Amount>,
    pub allowances: BTreeMap<AccountId, BTreeMap<AccountId, Amount>>,
    pub state_root: [u8; 32],
}

impl Ledger<EventLog> {
    /// Create a ledger and credit the entire supply to the admin account.
    ///
    /// This is the only construction path; there is no re-initialization.
    pub fn initialize(config: TokenConfig) -> Result<Self, LedgerError> {
        Self::initialize_with_sink(config, EventLog::new())
    }

    /// Committed events in commit order.
    pub fn events(&self) -> &[LedgerEvent] {
        self.sink.events()
    }

    /// Hand the accumulated events to an external consumer.
    pub fn drain_events(&mut self) -> Vec<LedgerEvent> {
        self.sink.drain()
    }
}

impl<S: EventSink> Ledger<S> {
    /// Like [`Ledger::initialize`] but delivering events to a custom sink.
    pub fn initialize_with_sink(config: TokenConfig, sink: S) -> Result<Self, LedgerError> {
        if config.admin.is_empty() {
            return Err(LedgerError::InvalidConfig(
                "admin account is unset".to_string(),
            ));
        }
        let total_supply = checked_amount(config.total_supply).map_err(|_| {
            LedgerError::InvalidConfig(format!(
                "total supply {} is negative",
                config.total_supply
            ))
        })?;
        let mut balances = BTreeMap::new();
        balances.insert(config.admin.clone(), total_supply);
        debug!(admin = %config.admin, total_supply, "ledger initialized");
        Ok(Self {
            metadata: TokenMetadata {
                name: config.name,
                symbol: config.symbol,
                standard: config.standard,
            },
            total_supply,
            balances,
            allowances: BTreeMap::new(),
            sink,
        })
    }

    pub fn name(&self) -> &str {
        &self.metadata.name
    }

    pub fn symbol(&self) -> &str {
        &self.metadata.symbol
    }

    pub fn standard(&self) -> &str {
        &self.metadata.standard
    }

    pub fn metadata(&self) -> &TokenMetadata {
        &self.metadata
    }

    pub fn total_supply(&self) -> Amount {
        self.total_supply
    }

    /// Balance credited to `account`; 0 for accounts the ledger has never seen.
    pub fn balance_of(&self, account: &str) -> Amount {
        self.balances.get(account).copied().unwrap_or(0)
    }

    /// Remaining amount `spender` may withdraw from `owner`; 0 for absent pairs.
    pub fn allowance(&self, owner: &str, spender: &str) -> Amount {
        self.allowances
            .get(owner)
            .and_then(|per_spender| per_spender.get(spender))
            .copied()
            .unwrap_or(0)
    }

    /// Sum of every account balance. Equals `total_supply` in any reachable
    /// state (conservation).
    pub fn balances_total(&self) -> Amount {
        self.balances.values().sum()
    }

    /// Move `amount` from the caller's own balance to `to`.
    ///
    /// Zero-amount and self-transfers are valid and still emit a
    /// [`LedgerEvent::Transfer`].
    pub fn transfer(&mut self, caller: &str, to: &str, amount: Amount) -> Result<(), LedgerError> {
        let balance = self.balance_of(caller);
        if balance < amount {
            warn!(from = caller, to, amount, balance, "transfer rejected");
            return Err(LedgerError::InsufficientBalance {
                account: caller.to_owned(),
                balance,
                requested: amount,
            });
        }
        self.debit(caller, amount);
        self.credit(to, amount);
        debug!(from = caller, to, amount, "transfer committed");
        self.sink.record(LedgerEvent::Transfer {
            from: caller.to_owned(),
            to: to.to_owned(),
            value: amount,
        });
        Ok(())
    }

    /// Set the allowance of `spender` on the caller's balance to exactly
    /// `amount`, overwriting any prior value.
    ///
    /// Authorization bookkeeping, not an escrow: the amount may exceed the
    /// caller's current balance.
    pub fn approve(
        &mut self,
        caller: &str,
        spender: &str,
        amount: Amount,
    ) -> Result<(), LedgerError> {
        self.allowances
            .entry(caller.to_owned())
            .or_default()
            .insert(spender.to_owned(), amount);
        debug!(owner = caller, spender, amount, "approval committed");
        self.sink.record(LedgerEvent::Approval {
            owner: caller.to_owned(),
            spender: spender.to_owned(),
            value: amount,
        });
        Ok(())
    }

    /// Move `amount` from `from` to `to`, spending down the caller's
    /// allowance on `from`.
    ///
    /// Checks balance before allowance; on success the debit, credit, and
    /// allowance decrement commit together.
    pub fn transfer_from(
        &mut self,
        caller: &str,
        from: &str,
        to: &str,
        amount: Amount,
    ) -> Result<(), LedgerError> {
        let balance = self.balance_of(from);
        if balance < amount {
            warn!(spender = caller, from, to, amount, balance, "delegated transfer rejected");
            return Err(LedgerError::InsufficientBalance {
                account: from.to_owned(),
                balance,
                requested: amount,
            });
        }
        let remaining = self.allowance(from, caller);
        if remaining < amount {
            warn!(spender = caller, from, to, amount, remaining, "delegated transfer rejected");
            return Err(LedgerError::InsufficientAllowance {
                owner: from.to_owned(),
                spender: caller.to_owned(),
                remaining,
                requested: amount,
            });
        }
        self.debit(from, amount);
        self.credit(to, amount);
        if let Some(entry) = self
            .allowances
            .get_mut(from)
            .and_then(|per_spender| per_spender.get_mut(caller))
        {
            *entry -= amount;
        }
        debug!(spender = caller, from, to, amount, "delegated transfer committed");
        self.sink.record(LedgerEvent::Transfer {
            from: from.to_owned(),
            to: to.to_owned(),
            value: amount,
        });
        Ok(())
    }

    /// Serializable copy of the state plus a deterministic digest over it.
    pub fn snapshot(&self) -> LedgerSnapshot {
        LedgerSnapshot {
            metadata: self.metadata.clone(),
            total_supply: self.total_supply,
            balances: self.balances.clone(),
            allowances: self.allowances.clone(),
            state_root: compute_state_root(self.total_supply, &self.balances, &self.allowances),
        }
    }

    // Sufficiency is checked by the caller before either of these runs.
    fn debit(&mut self, account: &str, amount: Amount) {
        let entry = self.balances.entry(account.to_owned()).or_insert(0);
        *entry -= amount;
    }

    fn credit(&mut self, account: &str, amount: Amount) {
        // Conservation bounds every balance by total_supply, so no overflow.
        let entry = self.balances.entry(account.to_owned()).or_insert(0);
        *entry += amount;
    }
}

/// Domain-separated digest over the canonically ordered tables.
fn compute_state_root(
    total_supply: Amount,
    balances: &BTreeMap<AccountId, Amount>,
    allowances: &BTreeMap<AccountId, BTreeMap<AccountId, Amount>>,
) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(b"supply");
    hasher.update(total_supply.to_le_bytes());
    for (account, amount) in balances {
        hasher.update(b"acct");
        hasher.update(account.as_bytes());
        hasher.update(amount.to_le_bytes());
    }
    for (owner, per_spender) in allowances {
        for (spender, amount) in per_spender {
            hasher.update(b"allow");
            hasher.update(owner.as_bytes());
            hasher.update(spender.as_bytes());
            hasher.update(amount.to_le_bytes());
        }
    }
    hasher.finalize().into()
}
