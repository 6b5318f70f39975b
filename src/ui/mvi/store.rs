//! Single owner of a feature's state.
//!
//! The store keeps the current snapshot, an intent queue fed by view
//! callbacks, and the list of subscribers notified after each transition.
//! Intents are applied strictly one at a time on the thread that owns the
//! store; a subscriber only ever sees `&State`, so it cannot re-enter.

use std::sync::mpsc::{self, Receiver, Sender};

use super::reducer::Reducer;

/// Queue handle given to callbacks. Sending never applies the intent;
/// the owner of the store does that on its next `apply_next`/`drain`.
pub type IntentSender<I> = Sender<I>;

type Subscriber<S> = Box<dyn FnMut(&S, u64)>;

pub struct Store<R: Reducer> {
    state: R::State,
    revision: u64,
    tx: Sender<R::Intent>,
    rx: Receiver<R::Intent>,
    subscribers: Vec<Subscriber<R::State>>,
}

impl<R: Reducer> Store<R> {
    pub fn new(initial: R::State) -> Self {
        let (tx, rx) = mpsc::channel();
        Self {
            state: initial,
            revision: 0,
            tx,
            rx,
            subscribers: Vec::new(),
        }
    }

    /// Current snapshot.
    pub fn state(&self) -> &R::State {
        &self.state
    }

    /// Number of transitions applied so far.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn sender(&self) -> IntentSender<R::Intent> {
        self.tx.clone()
    }

    /// Register a listener called with the new snapshot and its revision
    /// after every transition.
    pub fn subscribe<F>(&mut self, subscriber: F)
    where
        F: FnMut(&R::State, u64) + 'static,
    {
        self.subscribers.push(Box::new(subscriber));
    }

    /// Apply one intent immediately and return the resulting revision.
    pub fn dispatch(&mut self, intent: R::Intent) -> u64 {
        tracing::trace!(?intent, revision = self.revision, "applying intent");
        let previous = std::mem::take(&mut self.state);
        self.state = R::reduce(previous, intent);
        self.revision += 1;
        for subscriber in &mut self.subscribers {
            subscriber(&self.state, self.revision);
        }
        self.revision
    }

    /// Apply the oldest queued intent, if any.
    pub fn apply_next(&mut self) -> Option<u64> {
        let intent = self.rx.try_recv().ok()?;
        Some(self.dispatch(intent))
    }

    /// Apply every queued intent in order. Returns how many were applied.
    pub fn drain(&mut self) -> usize {
        let mut applied = 0;
        while self.apply_next().is_some() {
            applied += 1;
        }
        applied
    }
}
