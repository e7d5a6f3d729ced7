//! Identity-keyed memoization for composed accessors.
//!
//! A [`Memo`] remembers the inputs of its last computation and hands back the
//! same [`Arc`] for as long as the inputs are the same objects. Collections are
//! compared by pointer, never by content, so the check stays O(1) no matter
//! how large the state tree grows.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use tracing::debug;
use wallet_model::ChainId;

/// Inputs of a memoized accessor.
pub trait MemoKey: Clone {
    /// Whether `other` denotes the same input as `self`.
    fn same_as(&self, other: &Self) -> bool;
}

impl<T: ?Sized> MemoKey for Arc<T> {
    fn same_as(&self, other: &Self) -> bool {
        Arc::ptr_eq(self, other)
    }
}

impl MemoKey for String {
    fn same_as(&self, other: &Self) -> bool {
        self == other
    }
}

impl MemoKey for ChainId {
    fn same_as(&self, other: &Self) -> bool {
        self == other
    }
}

impl<T: MemoKey> MemoKey for Option<T> {
    fn same_as(&self, other: &Self) -> bool {
        match (self, other) {
            (Some(a), Some(b)) => a.same_as(b),
            (None, None) => true,
            _ => false,
        }
    }
}

macro_rules! tuple_memo_key {
    ($($name:ident : $idx:tt),+) => {
        impl<$($name: MemoKey),+> MemoKey for ($($name,)+) {
            fn same_as(&self, other: &Self) -> bool {
                $(self.$idx.same_as(&other.$idx))&&+
            }
        }
    };
}

tuple_memo_key!(A: 0, B: 1);
tuple_memo_key!(A: 0, B: 1, C: 2);
tuple_memo_key!(A: 0, B: 1, C: 2, D: 3);

struct Entry<K, V> {
    // Holding the input Arcs keeps their allocations alive, so a pointer match
    // can never come from a freed-and-reused address.
    key: K,
    value: Arc<V>,
}

/// Single-slot cache for one accessor.
pub struct Memo<K, V> {
    name: &'static str,
    entry: Mutex<Option<Entry<K, V>>>,
    recomputations: AtomicUsize,
}

impl<K: MemoKey, V> Memo<K, V> {
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            entry: Mutex::new(None),
            recomputations: AtomicUsize::new(0),
        }
    }

    /// Return the cached value when `key` matches the last inputs, otherwise
    /// run `compute` and cache its result.
    pub fn get_or_compute<F>(&self, key: K, compute: F) -> Arc<V>
    where
        F: FnOnce(&K) -> V,
    {
        let mut entry = self.entry.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(cached) = entry.as_ref() {
            if cached.key.same_as(&key) {
                return Arc::clone(&cached.value);
            }
        }

        let value = Arc::new(compute(&key));
        let count = self.recomputations.fetch_add(1, Ordering::Relaxed) + 1;
        debug!(selector = self.name, recomputations = count, "recomputed");
        *entry = Some(Entry {
            key,
            value: Arc::clone(&value),
        });
        value
    }

    /// Number of times the value has been computed.
    pub fn recomputations(&self) -> usize {
        self.recomputations.load(Ordering::Relaxed)
    }

    /// Drop the cached value and its inputs.
    pub fn clear(&self) {
        let mut entry = self.entry.lock().unwrap_or_else(PoisonError::into_inner);
        *entry = None;
    }
}

impl<K, V> std::fmt::Debug for Memo<K, V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Memo")
            .field("name", &self.name)
            .field(
                "recomputations",
                &self.recomputations.load(Ordering::Relaxed),
            )
            .finish_non_exhaustive()
    }
}
