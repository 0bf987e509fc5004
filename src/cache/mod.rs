//! Process-lifetime response caches: at most one stored result per key.
//!
//! Growth is unbounded with no eviction or TTL; the topic catalog is small
//! and fixed, so this is a stated scaling limit rather than an oversight.
//! There is no in-flight dedup: two near-simultaneous misses for one key may
//! both call upstream and both write the same slot.

use crate::curriculum::Difficulty;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tracing::debug;

/// Separator for composite keys; never appears in prompt text.
const KEY_SEPARATOR: char = '\u{1f}';

/// Clonable handle to one key→value store.
pub struct ResponseCache<V> {
    inner: Arc<Mutex<HashMap<String, V>>>,
    name: &'static str,
}

impl<V> Clone for ResponseCache<V> {
    fn clone(&self) -> Self {
        Self { inner: Arc::clone(&self.inner), name: self.name }
    }
}

impl<V: Clone> ResponseCache<V> {
    pub fn new(name: &'static str) -> Self {
        Self { inner: Arc::new(Mutex::new(HashMap::new())), name }
    }

    pub fn get(&self, key: &str) -> Option<V> {
        let hit = self.inner.lock().unwrap().get(key).cloned();
        debug!(cache = self.name, key, hit = hit.is_some(), "cache lookup");
        hit
    }

    /// Stores a value, overwriting any previous entry for the key.
    pub fn put(&self, key: impl Into<String>, value: V) {
        self.inner.lock().unwrap().insert(key.into(), value);
    }

    pub fn len(&self) -> usize {
        self.inner.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().unwrap().is_empty()
    }

    /// Drops every entry. For test isolation and explicit resets only;
    /// nothing invalidates entries automatically.
    pub fn clear(&self) {
        self.inner.lock().unwrap().clear();
    }
}

pub fn lesson_key(prompt_context: &str) -> String {
    prompt_context.to_string()
}

/// Composite, order-sensitive key: same context at two difficulties must
/// occupy distinct slots.
pub fn lab_key(prompt_context: &str, difficulty: Difficulty) -> String {
    format!("{}{}{}", prompt_context, KEY_SEPARATOR, difficulty)
}

pub fn diagram_key(topic_label: &str) -> String {
    topic_label.to_string()
}
