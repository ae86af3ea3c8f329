//! Observable "is a user signed in" flag.
//!
//! DESIGN
//! ======
//! Subscribers get the current value as soon as they subscribe and then every
//! later change, in order. Writing the value it already holds is not a change.
//! Callbacks run after the internal lock is released, so a subscriber may
//! read the publisher again or unsubscribe itself.

#[cfg(test)]
#[path = "publisher_test.rs"]
mod publisher_test;

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

type Listener = Arc<dyn Fn(bool) + Send + Sync>;

/// Handle returned by [`SessionPublisher::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Subscription(u64);

struct Inner {
    value: bool,
    next_id: u64,
    listeners: Vec<(u64, Listener)>,
}

/// Shared boolean with subscribe/notify semantics. Clones share state.
#[derive(Clone)]
pub struct SessionPublisher {
    inner: Arc<Mutex<Inner>>,
}

impl std::fmt::Debug for SessionPublisher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionPublisher").field("value", &self.get()).finish_non_exhaustive()
    }
}

impl SessionPublisher {
    pub fn new(initial: bool) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Inner { value: initial, next_id: 0, listeners: Vec::new() })),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Current value.
    pub fn get(&self) -> bool {
        self.lock().value
    }

    /// Publish `value`, notifying subscribers if it differs from the current one.
    pub fn set(&self, value: bool) {
        let listeners: Vec<Listener> = {
            let mut inner = self.lock();
            if inner.value == value {
                return;
            }
            inner.value = value;
            inner.listeners.iter().map(|(_, l)| Arc::clone(l)).collect()
        };
        for listener in listeners {
            listener(value);
        }
    }

    /// Register `listener`; it is called immediately with the current value.
    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn(bool) + Send + Sync + 'static,
    {
        let listener: Listener = Arc::new(listener);
        let (id, current) = {
            let mut inner = self.lock();
            let id = inner.next_id;
            inner.next_id += 1;
            inner.listeners.push((id, Arc::clone(&listener)));
            (id, inner.value)
        };
        listener(current);
        Subscription(id)
    }

    /// Detach a subscription. Unknown handles are ignored.
    pub fn unsubscribe(&self, subscription: Subscription) {
        self.lock().listeners.retain(|(id, _)| *id != subscription.0);
    }

    pub fn subscriber_count(&self) -> usize {
        self.lock().listeners.len()
    }
}
