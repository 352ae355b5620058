//! Subscription records and options.

use crate::error::BoxError;
use crate::types::EventSource;
use serde_json::Value;
use std::collections::HashSet;
use std::fmt;
use std::hash::Hash;
use std::sync::Arc;

/// What a subscriber returns. An `Err` aborts the rest of the emit.
pub type CallbackResult = Result<(), BoxError>;

/// Subscriber callback: `(first emitted value, source, remaining values)`.
pub type Callback<T, P> =
    Arc<dyn Fn(Option<&Value>, &EventSource<T, P>, &[Value]) -> CallbackResult + Send + Sync>;

/// Options for a new subscription.
#[derive(Clone, Debug)]
pub struct SubscribeOptions<T> {
    /// Receive events emitted at descendants of the registered path.
    /// Default: true
    pub bubble: bool,

    /// Only receive events whose source type is in this set (None = all types).
    pub types: Option<HashSet<T>>,
}

impl<T> Default for SubscribeOptions<T> {
    fn default() -> Self {
        Self {
            bubble: true,
            types: None,
        }
    }
}

impl<T: Eq + Hash> SubscribeOptions<T> {
    /// Only events targeted exactly at the registered path.
    pub fn exact() -> Self {
        Self {
            bubble: false,
            ..Default::default()
        }
    }

    /// Bubbled and targeted events of the given types.
    pub fn types(types: impl IntoIterator<Item = T>) -> Self {
        Self {
            types: Some(types.into_iter().collect()),
            ..Default::default()
        }
    }

    pub fn with_bubble(mut self, bubble: bool) -> Self {
        self.bubble = bubble;
        self
    }

    pub fn with_types(mut self, types: impl IntoIterator<Item = T>) -> Self {
        self.types = Some(types.into_iter().collect());
        self
    }
}

/// A registered subscriber.
pub struct Subscription<T, P> {
    callback: Callback<T, P>,
    bubble: bool,
    types: Option<Arc<HashSet<T>>>,
}

impl<T: Eq + Hash, P> Subscription<T, P> {
    pub(crate) fn new(callback: Callback<T, P>, options: SubscribeOptions<T>) -> Self {
        Self {
            callback,
            bubble: options.bubble,
            types: options.types.map(Arc::new),
        }
    }

    /// Whether this subscriber receives events from descendants.
    pub fn bubble(&self) -> bool {
        self.bubble
    }

    /// The type filter, if any.
    pub fn types(&self) -> Option<&HashSet<T>> {
        self.types.as_deref()
    }

    /// Check if this subscription wants an event of `ty`, reached at an exact
    /// or ancestor level.
    pub(crate) fn accepts(&self, ty: &T, is_exact: bool) -> bool {
        if !is_exact && !self.bubble {
            return false;
        }

        if let Some(ref types) = self.types {
            if !types.contains(ty) {
                return false;
            }
        }

        true
    }

    /// Invoke the callback, injecting `source` after the first emitted value.
    pub(crate) fn deliver(&self, source: &EventSource<T, P>, args: &[Value]) -> CallbackResult {
        match args.split_first() {
            Some((first, rest)) => (self.callback)(Some(first), source, rest),
            None => (self.callback)(None, source, &[]),
        }
    }
}

// Manual impl: cloning shares the callback and filter, no `T: Clone` needed.
impl<T, P> Clone for Subscription<T, P> {
    fn clone(&self) -> Self {
        Self {
            callback: Arc::clone(&self.callback),
            bubble: self.bubble,
            types: self.types.clone(),
        }
    }
}

impl<T: fmt::Debug, P> fmt::Debug for Subscription<T, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("bubble", &self.bubble)
            .field("types", &self.types)
            .finish_non_exhaustive()
    }
}
