use parking_lot::RwLock;
use std::collections::HashMap;

use crate::text::fallback_transformer::normalize;

/// In-memory map from normalized input to a previously produced rewrite.
/// Lives for the process; nothing is evicted.
#[derive(Default)]
pub struct ResponseCacheService {
    entries: RwLock<HashMap<String, String>>,
}

impl ResponseCacheService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, text: &str) -> Option<String> {
        self.entries.read().get(&normalize(text)).cloned()
    }

    pub fn put(&self, text: &str, response: &str) {
        self.entries
            .write()
            .insert(normalize(text), response.to_string());
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    pub fn clear(&self) {
        self.entries.write().clear();
    }
}
