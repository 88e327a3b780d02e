use std::collections::BTreeMap;

/// In-progress values of one form, keyed by that form's field enum.
///
/// Drafts are immutable values: every change produces a new draft through
/// [`Draft::with_field`]. Keys that were never written read as `""`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Draft<K: Ord> {
    values: BTreeMap<K, String>,
}

impl<K: Ord + Copy> Default for Draft<K> {
    fn default() -> Self {
        Self {
            values: BTreeMap::new(),
        }
    }
}

impl<K: Ord + Copy> Draft<K> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: K) -> &str {
        self.values.get(&key).map(String::as_str).unwrap_or("")
    }

    pub fn is_filled(&self, key: K) -> bool {
        !self.get(key).is_empty()
    }

    /// Copy of this draft with `key` set to `value`; every other key is kept.
    #[must_use]
    pub fn with_field(&self, key: K, value: impl Into<String>) -> Self {
        let mut values = self.values.clone();
        values.insert(key, value.into());
        Self { values }
    }
}
