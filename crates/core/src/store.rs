//! Transactional state store
//!
//! A [`Store`] holds one value and publishes every new value, in order, to its
//! subscribers. Mutations come in two flavours:
//!
//! - [`Store::update`]: apply one function and publish immediately.
//! - [`Store::add_to_queue`] + [`Store::process_queue`]: collect functions and
//!   fold them over a single snapshot, publishing exactly once.
//!
//! The queue lets the engine stage many per-cell edits (all cells of a moved
//! piece, for example) and commit them as one observable transition.
//!
//! Subscribers receive the current value at subscribe time (replay-of-one),
//! then each later publication. A stream only ends when its store is closed or
//! dropped.

use std::sync::mpsc;

/// A pure state transition queued on a store.
pub type Action<T> = Box<dyn FnOnce(T) -> T>;

/// Single-value container with ordered publication and batched commits.
pub struct Store<T> {
    value: T,
    queue: Vec<Action<T>>,
    subscribers: Vec<mpsc::Sender<T>>,
    version: u64,
}

impl<T: Clone> Store<T> {
    /// Create a store holding `initial`. The initial value counts as the first
    /// publication and is replayed to every subscriber.
    pub fn new(initial: T) -> Self {
        Self {
            value: initial,
            queue: Vec::new(),
            subscribers: Vec::new(),
            version: 1,
        }
    }

    /// Latest published value.
    pub fn get(&self) -> &T {
        &self.value
    }

    /// Number of publications so far (the initial value is publication 1).
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Number of queued actions waiting for [`Store::process_queue`].
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// Subscribe to the value stream. The current value is delivered first.
    pub fn subscribe(&mut self) -> StateStream<T> {
        let (tx, rx) = mpsc::channel();
        if tx.send(self.value.clone()).is_ok() {
            self.subscribers.push(tx);
        }
        StateStream { rx }
    }

    /// Apply `action` to the current value and publish the result.
    ///
    /// Pending queued actions are left untouched.
    pub fn update(&mut self, action: impl FnOnce(T) -> T) {
        let next = action(self.value.clone());
        self.publish(next);
    }

    /// Append `action` to the pending queue without mutating or publishing.
    pub fn add_to_queue(&mut self, action: impl FnOnce(T) -> T + 'static) {
        self.queue.push(Box::new(action));
    }

    /// Fold every pending action left-to-right over one snapshot of the
    /// current value and publish once.
    ///
    /// The queue is taken before any action runs, so the fold only sees the
    /// actions queued up to this call. An empty queue still publishes the
    /// unchanged value.
    pub fn process_queue(&mut self) {
        let pending = std::mem::take(&mut self.queue);
        let next = pending
            .into_iter()
            .fold(self.value.clone(), |value, action| action(value));
        self.publish(next);
    }

    /// Drop every subscriber; their streams report [`TryNext::Closed`] once drained.
    pub fn close(&mut self) {
        self.subscribers.clear();
        self.queue.clear();
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    fn publish(&mut self, value: T) {
        self.value = value;
        self.version += 1;
        let value = &self.value;
        self.subscribers.retain(|tx| tx.send(value.clone()).is_ok());
    }
}

impl<T: Clone + std::fmt::Debug> std::fmt::Debug for Store<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Store")
            .field("value", &self.value)
            .field("pending", &self.queue.len())
            .field("subscribers", &self.subscribers.len())
            .field("version", &self.version)
            .finish()
    }
}

/// Result of polling a [`StateStream`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TryNext<T> {
    Value(T),
    Empty,
    Closed,
}

/// Read side of a store subscription.
///
/// Values arrive in publication order. Dropping the stream unsubscribes it.
#[derive(Debug)]
pub struct StateStream<T> {
    rx: mpsc::Receiver<T>,
}

impl<T> StateStream<T> {
    /// Next published value, if one is waiting.
    pub fn try_next(&self) -> TryNext<T> {
        match self.rx.try_recv() {
            Ok(value) => TryNext::Value(value),
            Err(mpsc::TryRecvError::Empty) => TryNext::Empty,
            Err(mpsc::TryRecvError::Disconnected) => TryNext::Closed,
        }
    }

    /// Every value waiting on the stream, oldest first.
    pub fn drain(&self) -> Vec<T> {
        self.rx.try_iter().collect()
    }

    /// Drain the stream and keep only the newest value.
    pub fn latest(&self) -> Option<T> {
        self.rx.try_iter().last()
    }
}
