//! Analysis output: colour rows ordered by frequency.

use serde::Serialize;

use super::Colour;

/// One row of analysis output.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColourEntry {
    pub hex: String,
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub count: u64,
    pub ratio: f64,
}

impl ColourEntry {
    /// Build a row, computing `count / total` (0 when `total` is 0).
    pub fn new(colour: Colour, count: u64, total: u64) -> Self {
        let ratio = if total == 0 {
            0.0
        } else {
            count as f64 / total as f64
        };

        Self {
            hex: colour.to_hex(),
            r: colour.r,
            g: colour.g,
            b: colour.b,
            count,
            ratio,
        }
    }

    pub fn colour(&self) -> Colour {
        Colour::rgb(self.r, self.g, self.b)
    }
}

/// Colour rows sorted by descending count.
///
/// Equal counts keep the order in which their colours were first seen.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ColourTable {
    /// Pixels or samples the ratios are relative to.
    pub total: u64,
    pub entries: Vec<ColourEntry>,
}

impl ColourTable {
    /// Sort `entries` (given in discovery order) and wrap them.
    pub fn from_discovered(total: u64, mut entries: Vec<ColourEntry>) -> Self {
        // `sort_by` is stable, which preserves discovery order among ties.
        entries.sort_by(|a, b| b.count.cmp(&a.count));
        Self { total, entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all row counts.
    pub fn counted(&self) -> u64 {
        self.entries.iter().map(|e| e.count).sum()
    }

    /// The first `n` rows, for display.
    pub fn top(&self, n: usize) -> &[ColourEntry] {
        &self.entries[..n.min(self.entries.len())]
    }

    pub fn iter(&self) -> impl Iterator<Item = &ColourEntry> {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_ratio() {
        let e = ColourEntry::new(Colour::rgb(255, 0, 0), 2, 4);
        assert_eq!(e.hex, "#FF0000");
        assert_eq!(e.ratio, 0.5);
        assert_eq!(e.colour(), Colour::rgb(255, 0, 0));
    }

    #[test]
    fn test_entry_ratio_zero_total() {
        let e = ColourEntry::new(Colour::BLACK, 0, 0);
        assert_eq!(e.ratio, 0.0);
    }

    #[test]
    fn test_sort_is_stable_for_ties() {
        let entries = vec![
            ColourEntry::new(Colour::rgb(1, 0, 0), 1, 6),
            ColourEntry::new(Colour::rgb(2, 0, 0), 3, 6),
            ColourEntry::new(Colour::rgb(3, 0, 0), 1, 6),
            ColourEntry::new(Colour::rgb(4, 0, 0), 1, 6),
        ];
        let table = ColourTable::from_discovered(6, entries);

        let order: Vec<u8> = table.iter().map(|e| e.r).collect();
        assert_eq!(order, vec![2, 1, 3, 4]);
        assert_eq!(table.counted(), 6);
    }

    #[test]
    fn test_top_clamps() {
        let entries = vec![
            ColourEntry::new(Colour::BLACK, 2, 3),
            ColourEntry::new(Colour::WHITE, 1, 3),
        ];
        let table = ColourTable::from_discovered(3, entries);

        assert_eq!(table.top(1).len(), 1);
        assert_eq!(table.top(10).len(), 2);
        assert!(table.top(0).is_empty());
    }
}
