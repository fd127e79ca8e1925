// src/table.rs
use std::collections::BTreeMap;

/// Per-item record kept by [`UniqueItemTable`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ItemStats {
    pub frequency: usize,
    pub first_order: usize,
}

/// Frequency table keyed by the exact bytes of a word or line.
///
/// Keys iterate in ascending byte-wise order. The first insert of a key fixes
/// its `first_order`; later inserts only bump the frequency.
#[derive(Clone, Debug, Default)]
pub struct UniqueItemTable {
    items: BTreeMap<Vec<u8>, ItemStats>,
    total: usize,
}

impl UniqueItemTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, content: &[u8], order: usize) {
        self.total += 1;
        match self.items.get_mut(content) {
            Some(stats) => stats.frequency += 1,
            None => {
                self.items.insert(
                    content.to_vec(),
                    ItemStats {
                        frequency: 1,
                        first_order: order,
                    },
                );
            }
        }
    }

    /// Number of inserts, duplicates included.
    pub fn total_count(&self) -> usize {
        self.total
    }

    pub fn unique_count(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, content: &[u8]) -> Option<&ItemStats> {
        self.items.get(content)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&[u8], &ItemStats)> + '_ {
        self.items.iter().map(|(k, v)| (k.as_slice(), v))
    }
}

impl<'a> FromIterator<&'a [u8]> for UniqueItemTable {
    /// Builds a table, numbering items in iteration order from zero.
    fn from_iter<I: IntoIterator<Item = &'a [u8]>>(iter: I) -> Self {
        let mut table = Self::new();
        for (order, item) in iter.into_iter().enumerate() {
            table.insert(item, order);
        }
        table
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build(words: &[&str]) -> UniqueItemTable {
        words.iter().map(|w| w.as_bytes()).collect()
    }

    #[test]
    fn duplicate_keeps_first_order() {
        let mut table = UniqueItemTable::new();
        table.insert(b"a", 0);
        table.insert(b"bb", 1);
        table.insert(b"a", 2);

        assert_eq!(
            table.get(b"a"),
            Some(&ItemStats {
                frequency: 2,
                first_order: 0
            })
        );
        assert_eq!(table.total_count(), 3);
        assert_eq!(table.unique_count(), 2);
    }

    #[test]
    fn iterates_in_byte_order() {
        let table = build(&["pear", "Apple", "apple", "banana", "pear", "Zebra"]);

        let keys: Vec<&[u8]> = table.iter().map(|(k, _)| k).collect();
        let expected: Vec<&[u8]> = ["Apple", "Zebra", "apple", "banana", "pear"]
            .iter()
            .map(|w| w.as_bytes())
            .collect();
        assert_eq!(keys, expected);
        assert!(keys.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn frequencies_sum_to_total() {
        let table = build(&["x", "y", "x", "", "x", "y"]);

        let sum: usize = table.iter().map(|(_, s)| s.frequency).sum();
        assert_eq!(sum, table.total_count());
        assert_eq!(table.get(b"").map(|s| s.first_order), Some(3));
    }

    #[test]
    fn iteration_is_restartable() {
        let table = build(&["b", "a"]);
        let first: Vec<_> = table.iter().collect();
        let second: Vec<_> = table.iter().collect();
        assert_eq!(first, second);
    }

    #[test]
    fn empty_table() {
        let table = UniqueItemTable::new();
        assert!(table.is_empty());
        assert_eq!(table.total_count(), 0);
        assert_eq!(table.iter().count(), 0);
    }
}
