use serde::{Deserialize, Serialize};

use crate::ledger::{AccountId, Amount};

/// Record of one successful ledger mutation.
///
/// Exactly one event exists per committed transfer/approve call; a failed
/// call produces nothing.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum LedgerEvent {
    Transfer {
        from: AccountId,
        to: AccountId,
        value: Amount,
    },
    Approval {
        owner: AccountId,
        spender: AccountId,
        value: Amount,
    },
}

/// Append-only observer of committed mutations.
///
/// The ledger has already committed by the time the sink sees the event,
/// so implementors must not fail or push back.
pub trait EventSink {
    fn record(&mut self, event: LedgerEvent);
}

/// Vec-backed sink, the default for embedders that just want the log.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct EventLog {
    events: Vec<LedgerEvent>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Committed events in commit order.
    pub fn events(&self) -> &[LedgerEvent] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Hand the accumulated events to an external consumer, emptying the log.
    pub fn drain(&mut self) -> Vec<LedgerEvent> {
        std::mem::take(&mut self.events)
    }
}

impl EventSink for EventLog {
    fn record(&mut self, event: LedgerEvent) {
        self.events.push(event);
    }
}
