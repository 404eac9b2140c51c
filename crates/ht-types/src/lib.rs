//! Foundation types for the HomeTransfer contract.
//!
//! This crate provides the [`Home`] record — the sole entity the contract
//! manages — together with its JSON wire codec. The record is stored in the
//! world state as a textual, self-describing object encoding; the codec must
//! round-trip losslessly for every valid field value, including empty
//! strings.
//!
//! # Key Types
//!
//! - [`Home`] — the property record keyed by its `id` in the world state
//! - [`CodecError`] — serialization/deserialization failure

pub mod error;
pub mod home;

pub use error::CodecError;
pub use home::Home;
