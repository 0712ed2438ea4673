use std::collections::HashMap;

use crate::types::Tally;

/// Frequency table that remembers the order in which keys were first seen
#[derive(Debug, Default)]
pub struct FrequencyTable {
    // Position of each key in `entries`
    index: HashMap<String, usize>,
    // Keys in first-seen order with their running counts
    entries: Vec<(String, u64)>,
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one occurrence of `key`. Blank keys are ignored.
    pub fn add(&mut self, key: &str) {
        if key.is_empty() {
            return;
        }

        match self.index.get(key) {
            Some(&pos) => self.entries[pos].1 += 1,
            None => {
                self.index.insert(key.to_string(), self.entries.len());
                self.entries.push((key.to_string(), 1));
            }
        }
    }

    #[cfg(test)]
    pub fn get(&self, key: &str) -> u64 {
        self.index
            .get(key)
            .map(|&pos| self.entries[pos].1)
            .unwrap_or(0)
    }

    /// Number of distinct keys
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts
    pub fn total(&self) -> u64 {
        self.entries.iter().map(|(_, count)| count).sum()
    }

    /// Consume the table into tallies, most common first.
    ///
    /// Equal counts keep first-seen order: entries are stored in insertion
    /// order and `sort_by` is stable.
    pub fn into_most_common(self) -> Vec<Tally> {
        let mut entries = self.entries;
        entries.sort_by(|a, b| b.1.cmp(&a.1));
        entries
            .into_iter()
            .map(|(key, count)| Tally::new(key, count))
            .collect()
    }
}

/// Split a cell into the keys it contributes.
///
/// The cell is trimmed, then split on `delimiter` when one is given; every
/// piece is trimmed and empty pieces are dropped.
pub fn split_cell<'a>(
    cell: &'a str,
    delimiter: Option<&'a str>,
) -> Box<dyn Iterator<Item = &'a str> + 'a> {
    let trimmed = cell.trim();
    match delimiter {
        Some(d) if !d.is_empty() => Box::new(
            trimmed
                .split(d)
                .map(str::trim)
                .filter(|piece| !piece.is_empty()),
        ),
        _ => Box::new(std::iter::once(trimmed).filter(|v| !v.is_empty())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frequency_table_counts() {
        let mut table = FrequencyTable::new();
        table.add("a");
        table.add("b");
        table.add("a");

        assert_eq!(table.len(), 2);
        assert_eq!(table.get("a"), 2);
        assert_eq!(table.get("b"), 1);
        assert_eq!(table.get("c"), 0);
        assert_eq!(table.total(), 3);
    }

    #[test]
    fn test_frequency_table_ignores_blank() {
        let mut table = FrequencyTable::new();
        table.add("");
        assert!(table.is_empty());
    }

    #[test]
    fn test_most_common_ties_keep_first_seen_order() {
        let mut table = FrequencyTable::new();
        for key in ["x", "y", "y", "z", "w", "z"] {
            table.add(key);
        }

        let tallies = table.into_most_common();
        assert_eq!(
            tallies,
            vec![
                Tally::new("y", 2),
                Tally::new("z", 2),
                Tally::new("x", 1),
                Tally::new("w", 1),
            ]
        );
    }

    #[test]
    fn test_split_cell_with_delimiter() {
        let keys: Vec<_> = split_cell("  x; y ;;  ; z ", Some(";")).collect();
        assert_eq!(keys, vec!["x", "y", "z"]);
    }

    #[test]
    fn test_split_cell_multi_char_delimiter() {
        let keys: Vec<_> = split_cell("Smith, J.; Doe, A.", Some("; ")).collect();
        assert_eq!(keys, vec!["Smith, J.", "Doe, A."]);
    }

    #[test]
    fn test_split_cell_without_occurrence_matches_whole_cell() {
        let split: Vec<_> = split_cell(" alpha ", Some("|")).collect();
        let whole: Vec<_> = split_cell(" alpha ", None).collect();
        assert_eq!(split, vec!["alpha"]);
        assert_eq!(split, whole);
    }

    #[test]
    fn test_split_cell_blank() {
        assert_eq!(split_cell("   ", None).count(), 0);
        assert_eq!(split_cell(" ; ", Some(";")).count(), 0);
    }

    #[test]
    fn test_split_cell_empty_delimiter_is_no_split() {
        let keys: Vec<_> = split_cell("a;b", Some("")).collect();
        assert_eq!(keys, vec!["a;b"]);
    }
}
