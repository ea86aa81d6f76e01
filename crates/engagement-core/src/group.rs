// File: crates/engagement-core/src/group.rs
// Summary: Order-preserving distinct values and group-by (first occurrence wins).

use std::collections::{HashMap, HashSet};

/// Distinct values in first-occurrence order: `[B, A, C, A, B]` gives `[B, A, C]`.
pub fn distinct<I, S>(values: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen = HashSet::new();
    let mut out = Vec::new();
    for v in values {
        let v = v.as_ref();
        if seen.insert(v.to_string()) {
            out.push(v.to_string());
        }
    }
    out
}

/// Values grouped under string keys, iterated in key insertion order.
#[derive(Clone, Debug)]
pub struct Groups<V> {
    index: HashMap<String, usize>,
    entries: Vec<(String, Vec<V>)>,
}

impl<V> Default for Groups<V> {
    fn default() -> Self {
        Self { index: HashMap::new(), entries: Vec::new() }
    }
}

impl<V> Groups<V> {
    pub fn new() -> Self { Self::default() }

    pub fn push(&mut self, key: &str, value: V) {
        match self.index.get(key) {
            Some(&i) => self.entries[i].1.push(value),
            None => {
                self.index.insert(key.to_string(), self.entries.len());
                self.entries.push((key.to_string(), vec![value]));
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&[V]> {
        self.index.get(key).map(|&i| self.entries[i].1.as_slice())
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[V])> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    pub fn len(&self) -> usize { self.entries.len() }

    pub fn is_empty(&self) -> bool { self.entries.is_empty() }

    /// Reduce every group, keeping key order.
    pub fn rollup<R>(&self, mut reduce: impl FnMut(&[V]) -> R) -> Vec<(String, R)> {
        self.entries.iter().map(|(k, v)| (k.clone(), reduce(v))).collect()
    }
}

impl<K: AsRef<str>, V> FromIterator<(K, V)> for Groups<V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(pairs: I) -> Self {
        let mut g = Groups::new();
        for (k, v) in pairs {
            g.push(k.as_ref(), v);
        }
        g
    }
}
