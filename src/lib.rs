//! # Bubbler
//!
//! A path-hierarchical publish/subscribe bus. An event emitted at a path is
//! delivered to subscribers registered at that exact path and, unless they
//! opt out, to subscribers at every ancestor up to `/`.
//!
//! ## Core Concepts
//!
//! - **Paths**: `/`-delimited addresses, normalized on subscribe and emit
//! - **Bubbling**: delivery walks from the target up to the root, most specific first
//! - **Source**: `{path, obj, type}` resolved once per emit from the injected [`Store`]
//! - **Filters**: per-subscriber bubble flag and type set
//!
//! ## Example
//!
//! ```
//! use bubbler::{Bubbler, MemoryStore, SubscribeOptions};
//! use serde_json::json;
//!
//! let bus = Bubbler::new(MemoryStore::uniform("TYPE", json!({"obj": "myObj"})));
//!
//! bus.subscribe(
//!     "/",
//!     |data, source, _| {
//!         assert_eq!(source.path, "/abc/def");
//!         assert_eq!(data, Some(&json!({"a": 1})));
//!         Ok(())
//!     },
//!     SubscribeOptions::default(),
//! )?;
//!
//! bus.emit("/abc/def/", &[json!({"a": 1})])?;
//! # Ok::<(), bubbler::BubblerError>(())
//! ```

pub mod bubbler;
pub mod dispatch;
pub mod error;
pub mod path;
pub mod store;
pub mod subscriptions;
pub mod types;

// Re-exports
pub use crate::bubbler::Bubbler;
pub use dispatch::EventDispatcher;
pub use error::{BoxError, BubblerError, Result};
pub use path::{ancestors, normalize, Ancestors, ROOT, SEPARATOR};
pub use store::{MemoryStore, Store};
pub use subscriptions::{
    Callback, CallbackResult, SubscribeOptions, Subscription, SubscriptionRegistry,
};
pub use types::{BubblerConfig, EventSource};
