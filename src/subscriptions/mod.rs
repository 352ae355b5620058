//! Subscriber registration.
//!
//! Subscriptions are keyed by normalized path and kept in registration order.
//! Each carries:
//! - a callback receiving `(first value, source, remaining values)`
//! - a bubble flag: whether events from descendants reach it
//! - an optional set of accepted source types
//!
//! # Example
//!
//! ```ignore
//! let registry = SubscriptionRegistry::new();
//!
//! registry.subscribe(
//!     "/users",
//!     Arc::new(|data, source, _| {
//!         println!("{} changed: {:?}", source.path, data);
//!         Ok(())
//!     }),
//!     SubscribeOptions::types(["user"]),
//! )?;
//!
//! registry.clear("/users")?;
//! ```

mod registry;
mod types;

pub use registry::SubscriptionRegistry;
pub use types::{Callback, CallbackResult, SubscribeOptions, Subscription};
