//! Client-side cache coordination for named collections.
//!
//! Views that render a cached collection subscribe to its key; whoever
//! changes that collection on the server calls [`QueryClient::invalidate`]
//! with the same key, and every subscriber is told to refetch. The client is
//! a cheap clonable handle around shared state and travels to components
//! through their properties rather than through a global.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use yew::Callback;

/// Clonable handle over the shared invalidation registry.
///
/// All clones observe the same versions and subscribers. Equality is handle
/// identity so the type can sit inside component `Properties` without
/// triggering re-renders on every parent update.
#[derive(Clone, Debug, Default)]
pub struct QueryClient {
    inner: Rc<RefCell<Registry>>,
}

#[derive(Debug, Default)]
struct Registry {
    versions: HashMap<String, u64>,
    next_subscriber: u64,
    subscribers: HashMap<String, Vec<(u64, Callback<u64>)>>,
}

/// Token returned by [`QueryClient::subscribe`]; hand it back to
/// [`QueryClient::unsubscribe`] when the subscriber goes away.
pub struct Subscription {
    key: String,
    id: u64,
}

impl QueryClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current version of `key`; 0 until the first invalidation.
    pub fn version(&self, key: &str) -> u64 {
        self.inner.borrow().versions.get(key).copied().unwrap_or(0)
    }

    /// Marks `key` stale and notifies its subscribers with the new version.
    ///
    /// Callbacks run after the registry borrow is released, so a subscriber
    /// may invalidate further keys without re-entrancy problems. The call is
    /// fire-and-forget: refetch failures are the subscriber's concern.
    pub fn invalidate(&self, key: &str) {
        let (version, notify) = {
            let mut registry = self.inner.borrow_mut();
            let version = registry.versions.entry(key.to_string()).or_insert(0);
            *version += 1;
            let version = *version;
            let notify: Vec<Callback<u64>> = registry
                .subscribers
                .get(key)
                .map(|list| list.iter().map(|(_, callback)| callback.clone()).collect())
                .unwrap_or_default();
            (version, notify)
        };
        for callback in notify {
            callback.emit(version);
        }
    }

    /// Registers `callback` to run on every invalidation of `key`.
    pub fn subscribe(&self, key: &str, callback: Callback<u64>) -> Subscription {
        let mut registry = self.inner.borrow_mut();
        let id = registry.next_subscriber;
        registry.next_subscriber += 1;
        registry
            .subscribers
            .entry(key.to_string())
            .or_default()
            .push((id, callback));
        Subscription {
            key: key.to_string(),
            id,
        }
    }

    /// Drops a registration; later invalidations no longer reach it.
    pub fn unsubscribe(&self, subscription: Subscription) {
        let mut registry = self.inner.borrow_mut();
        if let Some(list) = registry.subscribers.get_mut(&subscription.key) {
            list.retain(|(id, _)| *id != subscription.id);
        }
    }
}

impl PartialEq for QueryClient {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}
