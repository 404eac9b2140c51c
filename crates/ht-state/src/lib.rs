//! World-state boundary for the HomeTransfer contract.
//!
//! The hosting ledger platform owns persistence, transaction isolation, and
//! ordering; this crate only defines the key-value capability the contract
//! is handed per invocation, plus an in-memory implementation for tests and
//! embedding.
//!
//! # Design Rules
//!
//! 1. Keys are non-empty strings; values are opaque bytes.
//! 2. `put` is a full overwrite of the value at a key, never a patch.
//! 3. The state never interprets stored bytes — it is a pure key-value store.
//! 4. All backend errors are propagated, never silently ignored.

pub mod error;
pub mod memory;
pub mod traits;

pub use error::{StateError, StateResult};
pub use memory::InMemoryWorldState;
pub use traits::WorldState;
