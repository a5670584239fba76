//! Year → position lookup for one topic's yearly statistics

use rustc_hash::FxHashMap;

use crate::model::YearlyStat;

/// O(1) lookup from year to the index of its stat entry.
///
/// Built once per topic. When a year appears more than once the first
/// entry is indexed, matching a front-to-back linear scan.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct YearIndex {
    positions: FxHashMap<i32, usize>,
}

impl YearIndex {
    pub fn build(stats: &[YearlyStat]) -> Self {
        let mut positions = FxHashMap::default();
        positions.reserve(stats.len());
        for (idx, stat) in stats.iter().enumerate() {
            positions.entry(stat.year).or_insert(idx);
        }
        Self { positions }
    }

    pub fn position(&self, year: i32) -> Option<usize> {
        self.positions.get(&year).copied()
    }

    /// Number of distinct years.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}
