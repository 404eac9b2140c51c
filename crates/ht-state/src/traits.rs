use crate::error::{StateError, StateResult};

/// Key-value world state supplied by the hosting ledger platform.
///
/// All implementations must satisfy these invariants:
/// - Keys are non-empty strings; `get` and `put` reject the empty key.
/// - `put` fully overwrites the value at a key, never a partial patch.
/// - Single-key `get`/`put` are at least linearizable; no read-modify-write
///   atomicity across two calls is assumed by callers.
/// - Calls are synchronous and either succeed or fail outright — no internal
///   retries, no cancellation.
/// - The state never interprets stored bytes.
pub trait WorldState: Send + Sync {
    /// Read the value stored at `key`.
    ///
    /// Returns `Ok(None)` if the key has never been written. Callers treat
    /// an empty stored value the same as an absent one.
    fn get(&self, key: &str) -> StateResult<Option<Vec<u8>>>;

    /// Store `value` at `key`, overwriting any existing value.
    fn put(&self, key: &str, value: &[u8]) -> StateResult<()>;

    /// Check whether a non-empty value is stored at `key`.
    ///
    /// Default implementation goes through `get`. Backends may override
    /// to avoid fetching the value.
    fn exists(&self, key: &str) -> StateResult<bool> {
        Ok(matches!(self.get(key)?, Some(v) if !v.is_empty()))
    }
}

/// Shared precondition for `get` and `put`.
pub(crate) fn check_key(key: &str) -> StateResult<()> {
    if key.is_empty() {
        return Err(StateError::EmptyKey);
    }
    Ok(())
}
