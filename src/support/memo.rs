//! Single-slot memoization keyed by structural equality.
//!
//! A [`Memo`] holds at most one computed value together with the key it was
//! computed from. Asking for a different key discards the old value and
//! recomputes, so there is only ever one "current" result.

/// A single-entry cache for a pure function of `K`.
///
/// # Example
///
/// ```
/// use binary_vle::support::memo::Memo;
///
/// let mut memo = Memo::new();
/// let mut calls = 0;
///
/// memo.get_or_compute(&2, |k| { calls += 1; k * 10 });
/// let value = *memo.get_or_compute(&2, |k| { calls += 1; k * 10 });
///
/// assert_eq!(value, 20);
/// assert_eq!(calls, 1);
/// ```
#[derive(Debug, Clone)]
pub struct Memo<K, V> {
    entry: Option<(K, V)>,
}

impl<K, V> Default for Memo<K, V> {
    fn default() -> Self {
        Self { entry: None }
    }
}

impl<K: PartialEq + Clone, V> Memo<K, V> {
    /// Creates an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached value for `key`, computing it first if the cache is
    /// empty or holds a different key.
    pub fn get_or_compute(&mut self, key: &K, compute: impl FnOnce(&K) -> V) -> &V {
        let entry = match self.entry.take() {
            Some((cached, value)) if cached == *key => (cached, value),
            _ => (key.clone(), compute(key)),
        };
        let (_, value) = self.entry.insert(entry);
        value
    }

    /// Returns `true` if the cache currently holds a value for `key`.
    #[must_use]
    pub fn is_current(&self, key: &K) -> bool {
        matches!(&self.entry, Some((cached, _)) if cached == key)
    }

    /// Discards the cached value.
    pub fn invalidate(&mut self) {
        self.entry = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recomputes_on_key_change() {
        let mut memo = Memo::new();
        let mut calls = 0;

        for key in [1.5, 1.5, 2.5, 2.5, 1.5] {
            memo.get_or_compute(&key, |k| {
                calls += 1;
                k * 2.0
            });
        }

        assert_eq!(calls, 3);
        assert!(memo.is_current(&1.5));
        assert!(!memo.is_current(&2.5));
    }

    #[test]
    fn invalidate_forces_recompute() {
        let mut memo = Memo::new();
        memo.get_or_compute(&"a", |_| 1);
        memo.invalidate();
        assert!(!memo.is_current(&"a"));
        assert_eq!(*memo.get_or_compute(&"a", |_| 2), 2);
    }
}
