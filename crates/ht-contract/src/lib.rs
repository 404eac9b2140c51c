//! HomeTransfer contract: CRUD operations over a ledger world state.
//!
//! This crate is the behavioral surface of the system. It provides:
//! - The [`HomeTransfer`] contract with its four operations
//!   (`init_ledger`, `add_new_home`, `query_home_by_id`,
//!   `change_home_ownership`)
//! - The [`ContractError`] taxonomy (`NotFound` / `AlreadyExists`, plus
//!   codec and backend propagation)
//!
//! The contract holds no state between invocations. Each operation is a
//! pure function of (world-state contents, inputs) to (world-state
//! mutation, return value or error); everything else — persistence,
//! transaction ordering, identity — belongs to the hosting platform behind
//! the [`ht_state::WorldState`] boundary.

pub mod contract;
pub mod error;

pub use contract::HomeTransfer;
pub use error::{ContractError, ContractResult};
