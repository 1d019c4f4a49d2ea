//! Column bookkeeping for a decision-tree node
//!
//! A `ColumnSet` holds an ordering of character positions where the first
//! `unprocessed` slots are still eligible for testing. Consuming a column swaps
//! it past the unprocessed boundary and returns a fresh set, so every recursive
//! frame owns its own ordering.

/// Column positions still eligible for testing at a tree node
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnSet {
    order: Vec<usize>,
    unprocessed: usize,
}

impl ColumnSet {
    /// Identity ordering `[0, 1, ..., length - 1]` with every column unprocessed
    ///
    /// # Examples
    /// ```
    /// use reserved_switch::core::ColumnSet;
    ///
    /// let columns = ColumnSet::identity(3);
    /// assert_eq!(columns.pending(), &[0, 1, 2]);
    /// assert_eq!(columns.unprocessed(), 3);
    /// ```
    #[must_use]
    pub fn identity(length: usize) -> Self {
        Self {
            order: (0..length).collect(),
            unprocessed: length,
        }
    }

    /// Number of columns not yet tested on the path to this node
    #[inline]
    #[must_use]
    pub const fn unprocessed(&self) -> usize {
        self.unprocessed
    }

    #[inline]
    #[must_use]
    pub const fn is_exhausted(&self) -> bool {
        self.unprocessed == 0
    }

    /// Unprocessed columns in slot order
    #[inline]
    #[must_use]
    pub fn pending(&self) -> &[usize] {
        &self.order[..self.unprocessed]
    }

    /// Return a copy with the column at `slot` marked as processed
    ///
    /// The column at `slot` is swapped with the last unprocessed slot, which
    /// keeps removal constant-time at the cost of reordering the pending tail.
    ///
    /// # Panics
    /// Panics if `slot >= self.unprocessed()`
    ///
    /// # Examples
    /// ```
    /// use reserved_switch::core::ColumnSet;
    ///
    /// let columns = ColumnSet::identity(4).consume(1);
    /// assert_eq!(columns.pending(), &[0, 3, 2]);
    /// ```
    #[must_use]
    pub fn consume(&self, slot: usize) -> Self {
        assert!(slot < self.unprocessed, "slot {slot} is already processed");

        let mut order = self.order.clone();
        order.swap(slot, self.unprocessed - 1);

        Self {
            order,
            unprocessed: self.unprocessed - 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_of_zero_is_exhausted() {
        let columns = ColumnSet::identity(0);
        assert!(columns.is_exhausted());
        assert!(columns.pending().is_empty());
    }

    #[test]
    fn consume_last_slot_keeps_order() {
        let columns = ColumnSet::identity(3).consume(2);
        assert_eq!(columns.pending(), &[0, 1]);
        assert_eq!(columns.unprocessed(), 2);
    }

    #[test]
    fn consume_first_slot_swaps_with_last() {
        let columns = ColumnSet::identity(5).consume(0);
        assert_eq!(columns.pending(), &[4, 1, 2, 3]);
    }

    #[test]
    fn consume_does_not_touch_parent() {
        let parent = ColumnSet::identity(3);
        let child = parent.consume(0);

        assert_eq!(parent.pending(), &[0, 1, 2]);
        assert_eq!(child.pending(), &[2, 1]);
    }

    #[test]
    fn repeated_consumption_never_repeats_a_column() {
        let mut columns = ColumnSet::identity(6);
        let mut seen = Vec::new();

        while !columns.is_exhausted() {
            let slot = columns.unprocessed() / 2;
            seen.push(columns.pending()[slot]);
            columns = columns.consume(slot);
        }

        seen.sort_unstable();
        assert_eq!(seen, vec![0, 1, 2, 3, 4, 5]);
    }

    #[test]
    #[should_panic(expected = "already processed")]
    fn consume_out_of_range_panics() {
        let _ = ColumnSet::identity(2).consume(2);
    }
}
