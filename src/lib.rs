//! Fixed-supply fungible-asset ledger with a delegated-spend layer.
//!
//! The crate exposes one component, the [`Ledger`]: a balance table and an
//! allowance table for a single divisible asset, mutated only through four
//! operations (`transfer`, `approve`, `transfer_from`, plus the one-time
//! `initialize`). The modules around it stay small and focused:
//!
//! * [`ledger`] — the tables, the operations, and the snapshot surface.
//! * [`events`] — typed Transfer/Approval records and the append-only sink
//!   seam the ledger emits into.
//! * [`config`] — deployment parameters and the immutable metadata triple.
//! * [`shared`] — `RwLock` façade for embedders that share one ledger
//!   across threads.
//!
//! The ledger holds three invariants in every reachable state: the balances
//! sum to the fixed total supply, no balance is negative, and no delegated
//! spend exceeds its authorization. Any operation that would break one of
//! them returns a [`LedgerError`] and leaves the state untouched. Identity
//! is an opaque, caller-supplied concern; the ledger never authenticates
//! accounts, and no transport, wire format, or CLI lives here.

pub mod config;
pub mod events;
pub mod ledger;
pub mod shared;

mod error;

pub use config::{TokenConfig, TokenMetadata};
pub use error::LedgerError;
pub use events::{EventLog, EventSink, LedgerEvent};
pub use ledger::{checked_amount, AccountId, Amount, Ledger, LedgerSnapshot};
pub use shared::SharedLedger;
