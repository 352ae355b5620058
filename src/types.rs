//! Core types shared by the registry, dispatcher and subscribers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Metadata describing the target of one emit.
///
/// Built once per emit and handed unchanged to every subscriber reached,
/// including those at ancestor levels: `path` is always the emitted target,
/// never the level the subscriber registered at.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventSource<T, P> {
    /// Normalized target path.
    pub path: String,
    /// Object resolved by the store for `path`.
    pub obj: P,
    /// Type resolved by the store for `path`.
    #[serde(rename = "type")]
    pub ty: T,
}

impl<T: fmt::Debug, P> fmt::Display for EventSource<T, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({:?})", self.path, self.ty)
    }
}

/// Registry sizing.
#[derive(Clone, Debug)]
pub struct BubblerConfig {
    /// Number of distinct paths to reserve room for up front.
    /// Default: 0
    pub path_capacity: usize,
}

impl Default for BubblerConfig {
    fn default() -> Self {
        Self { path_capacity: 0 }
    }
}
