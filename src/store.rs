//! Owner of the live application state.
//!
//! The store holds the current `Arc<State>` inside a `tokio::sync::watch`
//! channel. Dispatches are serialised by the channel's lock: each one reads
//! the current state, runs the reducer, and publishes the result. Subscribers
//! are only woken when the reducer returned a different state.

use crate::domain::{Action, ActionError};
use crate::engine::{reduce, State};
use serde_json::Value;
use std::sync::Arc;
use tokio::sync::watch;
use tracing::{debug, warn};

/// Outcome of a single dispatch.
#[derive(Debug, Clone)]
pub struct Dispatched {
    pub state: Arc<State>,
    /// False when the reducer returned the prior state unchanged.
    pub changed: bool,
}

pub struct Store {
    sender: watch::Sender<Arc<State>>,
}

impl Store {
    pub fn new(initial: State) -> Self {
        let (sender, _receiver) = watch::channel(Arc::new(initial));
        Self { sender }
    }

    /// Apply an already-validated action.
    pub fn dispatch(&self, action: &Action) -> Dispatched {
        let mut next = None;
        let changed = self.sender.send_if_modified(|current| {
            let reduced = reduce(current, action);
            let changed = !Arc::ptr_eq(current, &reduced);
            *current = reduced;
            next = Some(Arc::clone(current));
            changed
        });

        let state = next.unwrap_or_else(|| self.snapshot());
        if changed && state.error {
            warn!(action_type = action.action_type(), "Rejected trade action");
        } else {
            debug!(action_type = action.action_type(), changed, "Dispatched action");
        }

        Dispatched { state, changed }
    }

    /// Validate a raw action object and apply it.
    ///
    /// # Errors
    /// Returns an error if the action is malformed; the state is left as is.
    pub fn dispatch_json(&self, raw: Value) -> Result<Dispatched, ActionError> {
        let action = Action::from_json(raw).map_err(|e| {
            warn!(error = %e, "Rejected malformed action");
            e
        })?;
        Ok(self.dispatch(&action))
    }

    /// The current state.
    pub fn snapshot(&self) -> Arc<State> {
        self.sender.borrow().clone()
    }

    /// Receive every state the store publishes from now on.
    pub fn subscribe(&self) -> watch::Receiver<Arc<State>> {
        self.sender.subscribe()
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new(State::default())
    }
}
