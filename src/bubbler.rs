//! The `Bubbler` facade tying the registry, dispatcher and store together.

use crate::dispatch::EventDispatcher;
use crate::error::Result;
use crate::store::Store;
use crate::subscriptions::{CallbackResult, SubscribeOptions, Subscription, SubscriptionRegistry};
use crate::types::{BubblerConfig, EventSource};
use serde_json::Value;
use std::sync::Arc;

/// Path-hierarchical publish/subscribe bus.
///
/// Owns one registry and the injected store for its whole lifetime. Every
/// emit is a single synchronous pass; nothing is queued or deferred.
pub struct Bubbler<S: Store> {
    registry: SubscriptionRegistry<S::Type, S::Payload>,
    store: S,
}

impl<S: Store> Bubbler<S> {
    /// Create a bus backed by `store`.
    pub fn new(store: S) -> Self {
        Self::with_config(store, BubblerConfig::default())
    }

    pub fn with_config(store: S, config: BubblerConfig) -> Self {
        Self {
            registry: SubscriptionRegistry::with_capacity(config.path_capacity),
            store,
        }
    }

    /// Register `callback` at `path`.
    ///
    /// The callback receives `(first emitted value, source, remaining values)`.
    /// Subscribers at one path fire in registration order.
    pub fn subscribe<F>(&self, path: &str, callback: F, options: SubscribeOptions<S::Type>) -> Result<()>
    where
        F: Fn(Option<&Value>, &EventSource<S::Type, S::Payload>, &[Value]) -> CallbackResult
            + Send
            + Sync
            + 'static,
    {
        self.registry.subscribe(path, Arc::new(callback), options)
    }

    /// Emit an event at `path` with the given positional values.
    ///
    /// Fails with `InvalidPath` before touching the store, with `Store` before
    /// any subscriber runs, or with `Subscriber` as soon as one callback fails.
    pub fn emit(&self, path: &str, args: &[Value]) -> Result<()> {
        EventDispatcher::new(&self.registry, &self.store).emit(path, args)
    }

    /// Remove every subscription registered exactly at `path`.
    pub fn clear_subscriptions(&self, path: &str) -> Result<()> {
        self.registry.clear(path)
    }

    /// Subscriptions registered exactly at `path`.
    pub fn listeners_at(&self, path: &str) -> Result<Vec<Subscription<S::Type, S::Payload>>> {
        self.registry.listeners_at(path)
    }

    pub fn listener_count(&self, path: &str) -> Result<usize> {
        self.registry.listener_count(path)
    }

    /// Total subscriptions across all paths.
    pub fn subscription_count(&self) -> usize {
        self.registry.subscription_count()
    }

    /// The injected store.
    pub fn store(&self) -> &S {
        &self.store
    }
}
