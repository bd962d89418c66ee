//! Common utilities

use alloc::vec::Vec;
use hashbrown::{HashMap, hash_map::Entry};

/// Classifies elements, converting them into unique `u64`s for quicker comparison
#[derive(Default)]
pub struct Classifier<'a> {
    next_id: u64,
    unique_ids: HashMap<&'a str, u64>,
}

impl<'a> Classifier<'a> {
    fn classify(&mut self, record: &'a str) -> u64 {
        match self.unique_ids.entry(record) {
            Entry::Occupied(o) => *o.get(),
            Entry::Vacant(v) => {
                let id = self.next_id;
                self.next_id += 1;
                *v.insert(id)
            }
        }
    }

    /// Classify every element, returning their ids in order.
    pub fn classify_all(&mut self, elements: &[&'a str]) -> Vec<u64> {
        elements.iter().map(|&element| self.classify(element)).collect()
    }

    /// Number of distinct elements seen so far. Ids are handed out densely, so any id at or above
    /// a previously observed `distinct()` belongs to an element first seen after that point.
    pub fn distinct(&self) -> u64 {
        self.next_id
    }
}

#[cfg(test)]
mod tests {
    use super::Classifier;

    #[test]
    fn ids_are_dense_and_shared() {
        let mut classifier = Classifier::default();
        assert_eq!(classifier.classify_all(&["a", "b", "a"]), [0, 1, 0]);
        assert_eq!(classifier.distinct(), 2);
        assert_eq!(classifier.classify_all(&["c", "b"]), [2, 1]);
        assert_eq!(classifier.distinct(), 3);
    }
}
