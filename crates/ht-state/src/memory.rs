use std::collections::HashMap;
use std::sync::RwLock;

use crate::error::StateResult;
use crate::traits::{check_key, WorldState};

/// In-memory, HashMap-based world state.
///
/// Intended for tests and embedding. All entries are held in memory behind a
/// `RwLock` for safe concurrent access. Values are cloned on read.
pub struct InMemoryWorldState {
    entries: RwLock<HashMap<String, Vec<u8>>>,
}

impl InMemoryWorldState {
    /// Create a new empty world state.
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// Number of keys currently stored.
    pub fn len(&self) -> usize {
        self.entries.read().expect("lock poisoned").len()
    }

    /// Returns `true` if the state holds no keys.
    pub fn is_empty(&self) -> bool {
        self.entries.read().expect("lock poisoned").is_empty()
    }

    /// Remove all entries.
    pub fn clear(&self) {
        self.entries.write().expect("lock poisoned").clear();
    }

    /// Return a sorted list of all keys in the state.
    pub fn keys(&self) -> Vec<String> {
        let map = self.entries.read().expect("lock poisoned");
        let mut keys: Vec<String> = map.keys().cloned().collect();
        keys.sort();
        keys
    }
}

impl Default for InMemoryWorldState {
    fn default() -> Self {
        Self::new()
    }
}

impl WorldState for InMemoryWorldState {
    fn get(&self, key: &str) -> StateResult<Option<Vec<u8>>> {
        check_key(key)?;
        let map = self.entries.read().expect("lock poisoned");
        Ok(map.get(key).cloned())
    }

    fn put(&self, key: &str, value: &[u8]) -> StateResult<()> {
        check_key(key)?;
        let mut map = self.entries.write().expect("lock poisoned");
        map.insert(key.to_owned(), value.to_vec());
        Ok(())
    }
}

impl std::fmt::Debug for InMemoryWorldState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let count = self.len();
        f.debug_struct("InMemoryWorldState")
            .field("key_count", &count)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StateError;

    // -----------------------------------------------------------------------
    // Core get/put
    // -----------------------------------------------------------------------

    #[test]
    fn put_and_get() {
        let state = InMemoryWorldState::new();
        state.put("k", b"hello").unwrap();
        assert_eq!(state.get("k").unwrap(), Some(b"hello".to_vec()));
    }

    #[test]
    fn get_missing_key_returns_none() {
        let state = InMemoryWorldState::new();
        assert!(state.get("missing").unwrap().is_none());
    }

    #[test]
    fn put_overwrites_in_full() {
        let state = InMemoryWorldState::new();
        state.put("k", b"first").unwrap();
        state.put("k", b"second").unwrap();
        assert_eq!(state.get("k").unwrap(), Some(b"second".to_vec()));
        assert_eq!(state.len(), 1);
    }

    // -----------------------------------------------------------------------
    // Key validation
    // -----------------------------------------------------------------------

    #[test]
    fn get_rejects_empty_key() {
        let state = InMemoryWorldState::new();
        assert!(matches!(state.get("").unwrap_err(), StateError::EmptyKey));
    }

    #[test]
    fn put_rejects_empty_key() {
        let state = InMemoryWorldState::new();
        assert!(matches!(
            state.put("", b"x").unwrap_err(),
            StateError::EmptyKey
        ));
    }

    // -----------------------------------------------------------------------
    // Exists
    // -----------------------------------------------------------------------

    #[test]
    fn exists_for_missing_key() {
        let state = InMemoryWorldState::new();
        assert!(!state.exists("nope").unwrap());
    }

    #[test]
    fn exists_for_present_key() {
        let state = InMemoryWorldState::new();
        state.put("k", b"v").unwrap();
        assert!(state.exists("k").unwrap());
    }

    #[test]
    fn empty_value_counts_as_absent() {
        let state = InMemoryWorldState::new();
        state.put("k", b"").unwrap();
        assert!(!state.exists("k").unwrap());
    }

    // -----------------------------------------------------------------------
    // Utility methods
    // -----------------------------------------------------------------------

    #[test]
    fn len_and_is_empty() {
        let state = InMemoryWorldState::new();
        assert!(state.is_empty());
        assert_eq!(state.len(), 0);

        state.put("a", b"1").unwrap();
        assert!(!state.is_empty());
        assert_eq!(state.len(), 1);
    }

    #[test]
    fn clear_removes_all() {
        let state = InMemoryWorldState::new();
        state.put("a", b"1").unwrap();
        state.put("b", b"2").unwrap();
        assert_eq!(state.len(), 2);

        state.clear();
        assert!(state.is_empty());
    }

    #[test]
    fn keys_is_sorted() {
        let state = InMemoryWorldState::new();
        state.put("c", b"3").unwrap();
        state.put("a", b"1").unwrap();
        state.put("b", b"2").unwrap();
        assert_eq!(state.keys(), vec!["a", "b", "c"]);
    }

    #[test]
    fn default_creates_empty_state() {
        let state = InMemoryWorldState::default();
        assert!(state.is_empty());
    }

    // -----------------------------------------------------------------------
    // Concurrent read safety
    // -----------------------------------------------------------------------

    #[test]
    fn concurrent_reads_are_safe() {
        use std::sync::Arc;
        use std::thread;

        let state = Arc::new(InMemoryWorldState::new());
        state.put("shared", b"data").unwrap();

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let state = Arc::clone(&state);
                thread::spawn(move || {
                    let value = state.get("shared").unwrap();
                    assert_eq!(value, Some(b"data".to_vec()));
                })
            })
            .collect();

        for h in handles {
            h.join().expect("thread should not panic");
        }
    }

    // -----------------------------------------------------------------------
    // Debug
    // -----------------------------------------------------------------------

    #[test]
    fn debug_format() {
        let state = InMemoryWorldState::new();
        state.put("x", b"1").unwrap();
        let debug = format!("{state:?}");
        assert!(debug.contains("InMemoryWorldState"));
        assert!(debug.contains("key_count"));
    }
}
