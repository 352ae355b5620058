//! Event dispatch: one synchronous fan-out from a target path up to the root.

use crate::error::{BoxError, BubblerError, Result};
use crate::path::{ancestors, normalize};
use crate::store::Store;
use crate::subscriptions::SubscriptionRegistry;
use crate::types::EventSource;
use serde_json::Value;
use tracing::{trace, warn};

/// Runs a single emit against a registry and a store.
///
/// Order is part of the contract: the target path first, then each ancestor
/// up to `/`, and registration order within a level.
pub struct EventDispatcher<'a, S: Store> {
    registry: &'a SubscriptionRegistry<S::Type, S::Payload>,
    store: &'a S,
}

impl<'a, S: Store> EventDispatcher<'a, S> {
    pub fn new(registry: &'a SubscriptionRegistry<S::Type, S::Payload>, store: &'a S) -> Self {
        Self { registry, store }
    }

    /// Deliver `args` to every eligible subscriber on the ancestor chain of `path`.
    ///
    /// The store is consulted exactly once for the type and once for the
    /// object, before any subscriber runs. The first subscriber error stops
    /// the walk and is returned; subscribers not yet reached see nothing.
    pub fn emit(&self, path: &str, args: &[Value]) -> Result<()> {
        let target = normalize(path)?;
        let source = self.resolve_source(target)?;

        trace!(path = target, args = args.len(), "emit");

        for level in ancestors(target) {
            let is_exact = level.len() == target.len();

            // Snapshot before running callbacks; mutations apply to later emits.
            let Some(subscribers) = self.registry.snapshot(level) else {
                continue;
            };
            trace!(level, subscribers = subscribers.len(), "dispatch level");

            for subscription in subscribers.iter() {
                if !subscription.accepts(&source.ty, is_exact) {
                    continue;
                }

                subscription.deliver(&source, args).map_err(|source| {
                    warn!(path = target, level, error = %source, "subscriber failed, aborting emit");
                    BubblerError::Subscriber {
                        path: level.to_string(),
                        source,
                    }
                })?;
            }
        }

        Ok(())
    }

    fn resolve_source(&self, target: &str) -> Result<EventSource<S::Type, S::Payload>> {
        let store_error = |source: BoxError| {
            warn!(path = target, error = %source, "store lookup failed");
            BubblerError::Store {
                path: target.to_string(),
                source,
            }
        };

        let ty = self.store.get_type(target).map_err(store_error)?;
        let obj = self.store.get(target).map_err(store_error)?;

        Ok(EventSource {
            path: target.to_string(),
            obj,
            ty,
        })
    }
}
