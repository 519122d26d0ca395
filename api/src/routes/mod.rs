//! Route handlers
//!
//! Handlers are generic over the store and notifier types so tests can run
//! the real routing against in-memory stores.

pub mod events;
pub mod health;
pub mod questions;
pub mod users;
pub mod verification;
