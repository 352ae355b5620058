//! Subscription registry: normalized path -> ordered subscriber list.

use crate::error::Result;
use crate::path::normalize;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::hash::Hash;
use std::sync::Arc;
use tracing::debug;

use super::types::{Callback, SubscribeOptions, Subscription};

/// A frozen view of the subscribers at one path.
pub(crate) type Snapshot<T, P> = Arc<Vec<Subscription<T, P>>>;

/// Holds every subscription, keyed by normalized path.
///
/// Lists are copy-on-write: taking a snapshot is an `Arc` clone, and a
/// subscribe that races an in-flight dispatch allocates a fresh list instead
/// of mutating the one being iterated. A path with no subscribers has no key.
pub struct SubscriptionRegistry<T, P> {
    paths: RwLock<HashMap<String, Snapshot<T, P>>>,
}

impl<T: Eq + Hash, P> SubscriptionRegistry<T, P> {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Create a registry with room for `capacity` distinct paths.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            paths: RwLock::new(HashMap::with_capacity(capacity)),
        }
    }

    /// Append a subscriber at `path`, after any already registered there.
    pub fn subscribe(
        &self,
        path: &str,
        callback: Callback<T, P>,
        options: SubscribeOptions<T>,
    ) -> Result<()> {
        let key = normalize(path)?;
        let bubble = options.bubble;
        let subscription = Subscription::new(callback, options);

        let mut paths = self.paths.write();
        let list = paths.entry(key.to_string()).or_default();
        Arc::make_mut(list).push(subscription);

        debug!(path = key, bubble, count = list.len(), "subscribed");
        Ok(())
    }

    /// Drop every subscriber registered exactly at `path`.
    ///
    /// Ancestors and descendants are untouched. Clearing an unknown path is a no-op.
    pub fn clear(&self, path: &str) -> Result<()> {
        let key = normalize(path)?;
        if let Some(removed) = self.paths.write().remove(key) {
            debug!(path = key, count = removed.len(), "cleared subscriptions");
        }
        Ok(())
    }

    /// Snapshot of the subscribers at an already-normalized path.
    pub(crate) fn snapshot(&self, key: &str) -> Option<Snapshot<T, P>> {
        self.paths.read().get(key).cloned()
    }

    /// Subscribers registered exactly at `path`, in registration order.
    pub fn listeners_at(&self, path: &str) -> Result<Vec<Subscription<T, P>>> {
        let key = normalize(path)?;
        Ok(self
            .snapshot(key)
            .map(|list| Vec::clone(&list))
            .unwrap_or_default())
    }

    /// Number of subscribers registered exactly at `path`.
    pub fn listener_count(&self, path: &str) -> Result<usize> {
        let key = normalize(path)?;
        Ok(self.paths.read().get(key).map_or(0, |list| list.len()))
    }

    /// Total subscribers across all paths.
    pub fn subscription_count(&self) -> usize {
        self.paths.read().values().map(|list| list.len()).sum()
    }

    /// Number of paths with at least one subscriber.
    pub fn path_count(&self) -> usize {
        self.paths.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.read().is_empty()
    }
}

impl<T: Eq + Hash, P> Default for SubscriptionRegistry<T, P> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BubblerError;

    fn noop() -> Callback<&'static str, ()> {
        Arc::new(|_, _, _| Ok(()))
    }

    #[test]
    fn test_subscribe_and_clear() {
        let registry = SubscriptionRegistry::new();

        registry
            .subscribe("/abc", noop(), SubscribeOptions::default())
            .unwrap();
        assert_eq!(registry.listener_count("/abc").unwrap(), 1);

        registry.clear("/abc").unwrap();
        assert_eq!(registry.listener_count("/abc").unwrap(), 0);
        assert!(registry.is_empty());
    }

    #[test]
    fn test_trailing_slash_shares_key() {
        let registry = SubscriptionRegistry::new();

        registry
            .subscribe("/a/b/", noop(), SubscribeOptions::default())
            .unwrap();
        registry
            .subscribe("/a/b", noop(), SubscribeOptions::exact())
            .unwrap();

        assert_eq!(registry.path_count(), 1);
        let listeners = registry.listeners_at("/a/b/").unwrap();
        assert_eq!(listeners.len(), 2);
        assert!(listeners[0].bubble());
        assert!(!listeners[1].bubble());
    }

    #[test]
    fn test_clear_is_exact() {
        let registry = SubscriptionRegistry::new();
        for path in ["/", "/a", "/a/b", "/a/b/c"] {
            registry
                .subscribe(path, noop(), SubscribeOptions::default())
                .unwrap();
        }

        registry.clear("/a/b/").unwrap();
        registry.clear("/never/registered").unwrap();

        assert_eq!(registry.listener_count("/").unwrap(), 1);
        assert_eq!(registry.listener_count("/a").unwrap(), 1);
        assert_eq!(registry.listener_count("/a/b").unwrap(), 0);
        assert_eq!(registry.listener_count("/a/b/c").unwrap(), 1);
        assert_eq!(registry.subscription_count(), 3);
    }

    #[test]
    fn test_snapshot_survives_later_subscribe() {
        let registry = SubscriptionRegistry::new();
        registry
            .subscribe("/a", noop(), SubscribeOptions::default())
            .unwrap();

        let before = registry.snapshot("/a").unwrap();
        registry
            .subscribe("/a", noop(), SubscribeOptions::default())
            .unwrap();

        assert_eq!(before.len(), 1);
        assert_eq!(registry.snapshot("/a").unwrap().len(), 2);
    }

    #[test]
    fn test_invalid_path_leaves_registry_untouched() {
        let registry = SubscriptionRegistry::new();

        let result = registry.subscribe("abc", noop(), SubscribeOptions::default());
        assert!(matches!(result, Err(BubblerError::InvalidPath(_))));
        assert!(registry.is_empty());
        assert!(matches!(registry.clear(""), Err(BubblerError::InvalidPath(_))));
    }
}
