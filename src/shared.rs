//! Thread-safe façade over an owned [`Ledger`].
//!
//! Mutations serialize behind the write lock; reads run concurrently and
//! always observe committed state, never a torn mid-transfer view.

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::config::TokenConfig;
use crate::error::LedgerError;
use crate::events::LedgerEvent;
use crate::ledger::{Amount, Ledger, LedgerSnapshot};

/// Cloneable handle to one ledger shared across threads.
#[derive(Clone)]
pub struct SharedLedger {
    inner: Arc<RwLock<Ledger>>,
}

impl SharedLedger {
    pub fn initialize(config: TokenConfig) -> Result<Self, LedgerError> {
        Ok(Self {
            inner: Arc::new(RwLock::new(Ledger::initialize(config)?)),
        })
    }

    pub fn balance_of(&self, account: &str) -> Amount {
        self.read().balance_of(account)
    }

    pub fn allowance(&self, owner: &str, spender: &str) -> Amount {
        self.read().allowance(owner, spender)
    }

    pub fn total_supply(&self) -> Amount {
        self.read().total_supply()
    }

    pub fn balances_total(&self) -> Amount {
        self.read().balances_total()
    }

    pub fn snapshot(&self) -> LedgerSnapshot {
        self.read().snapshot()
    }

    pub fn transfer(&self, caller: &str, to: &str, amount: Amount) -> Result<(), LedgerError> {
        self.write().transfer(caller, to, amount)
    }

    pub fn approve(&self, caller: &str, spender: &str, amount: Amount) -> Result<(), LedgerError> {
        self.write().approve(caller, spender, amount)
    }

    pub fn transfer_from(
        &self,
        caller: &str,
        from: &str,
        to: &str,
        amount: Amount,
    ) -> Result<(), LedgerError> {
        self.write().transfer_from(caller, from, to, amount)
    }

    pub fn drain_events(&self) -> Vec<LedgerEvent> {
        self.write().drain_events()
    }

    // Ledger operations stage every check before the first write, so a
    // panicked holder cannot leave torn state behind; recover the guard.
    fn read(&self) -> RwLockReadGuard<'_, Ledger> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Ledger> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }
}
