//! The store collaborator: resolves a path to a type and a payload.
//!
//! The bus never owns event data. On every emit it asks the injected store,
//! exactly once each, for the type and the object at the target path.

use crate::error::{BoxError, BubblerError};
use crate::path::normalize;
use std::collections::HashMap;
use std::hash::Hash;
use std::sync::Arc;

/// Source of event metadata for a path.
///
/// Both methods receive the normalized target path and are called before any
/// subscriber runs. An error from either aborts the emit.
pub trait Store {
    /// Type identifier, compared by set membership against subscriber filters.
    type Type: Eq + Hash;

    /// Object attached to every event source.
    type Payload;

    /// Resolve the type at `path`.
    fn get_type(&self, path: &str) -> Result<Self::Type, BoxError>;

    /// Resolve the object at `path`.
    fn get(&self, path: &str) -> Result<Self::Payload, BoxError>;
}

impl<S: Store + ?Sized> Store for &S {
    type Type = S::Type;
    type Payload = S::Payload;

    fn get_type(&self, path: &str) -> Result<Self::Type, BoxError> {
        (**self).get_type(path)
    }

    fn get(&self, path: &str) -> Result<Self::Payload, BoxError> {
        (**self).get(path)
    }
}

impl<S: Store + ?Sized> Store for Arc<S> {
    type Type = S::Type;
    type Payload = S::Payload;

    fn get_type(&self, path: &str) -> Result<Self::Type, BoxError> {
        (**self).get_type(path)
    }

    fn get(&self, path: &str) -> Result<Self::Payload, BoxError> {
        (**self).get(path)
    }
}

/// In-memory store keyed by normalized path.
///
/// Paths without an entry resolve to the fallback, if one is set, and
/// otherwise fail with [`BubblerError::UnknownPath`].
#[derive(Clone, Debug)]
pub struct MemoryStore<T, P> {
    entries: HashMap<String, (T, P)>,
    fallback: Option<(T, P)>,
}

impl<T, P> MemoryStore<T, P> {
    /// Create an empty store with no fallback.
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
            fallback: None,
        }
    }

    /// Create a store that answers every path with the same type and object.
    pub fn uniform(ty: T, obj: P) -> Self {
        Self {
            entries: HashMap::new(),
            fallback: Some((ty, obj)),
        }
    }

    /// Set the entry returned for paths with no explicit entry.
    pub fn with_fallback(mut self, ty: T, obj: P) -> Self {
        self.fallback = Some((ty, obj));
        self
    }

    /// Insert or replace the entry at `path`.
    pub fn insert(&mut self, path: &str, ty: T, obj: P) -> crate::Result<()> {
        let key = normalize(path)?;
        self.entries.insert(key.to_string(), (ty, obj));
        Ok(())
    }

    /// Remove the entry at `path`, returning it if present.
    pub fn remove(&mut self, path: &str) -> crate::Result<Option<(T, P)>> {
        let key = normalize(path)?;
        Ok(self.entries.remove(key))
    }

    /// Number of explicit entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn lookup(&self, path: &str) -> Result<&(T, P), BoxError> {
        self.entries
            .get(path)
            .or(self.fallback.as_ref())
            .ok_or_else(|| BubblerError::UnknownPath(path.to_string()).into())
    }
}

impl<T, P> Default for MemoryStore<T, P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, P> Store for MemoryStore<T, P>
where
    T: Clone + Eq + Hash,
    P: Clone,
{
    type Type = T;
    type Payload = P;

    fn get_type(&self, path: &str) -> Result<T, BoxError> {
        self.lookup(path).map(|(ty, _)| ty.clone())
    }

    fn get(&self, path: &str) -> Result<P, BoxError> {
        self.lookup(path).map(|(_, obj)| obj.clone())
    }
}
