//! Undo log of wall knowledge learned by sensing.

use mms_core::{CellId, DirMask};

/// One sensing result: the walls newly learned at a cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Discovery {
    pub cell: CellId,
    /// Sides learned by this sensing pass.
    pub learned: DirMask,
    /// Sides among `learned` where a wall is present.
    pub walls: DirMask,
    /// Number of physical hops taken before the entry was recorded.
    pub hop: u32,
}

/// Stack of [`Discovery`] entries since the run started.
///
/// Entries are never modified once recorded; reset drains the stack
/// newest first.
#[derive(Clone, Debug, Default)]
pub struct DiscoveryLog {
    entries: Vec<Discovery>,
    hops: u32,
}

impl DiscoveryLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry for `cell`.
    ///
    /// Panics if `walls` names a side that is not in `learned`.
    pub fn record(&mut self, cell: CellId, learned: DirMask, walls: DirMask) {
        assert!(
            (walls & learned) == walls,
            "present walls {walls:?} not a subset of learned {learned:?}"
        );
        self.entries.push(Discovery {
            cell,
            learned,
            walls,
            hop: self.hops,
        });
    }

    /// Move boundary marker, called once per physical hop.
    pub fn mark_hop(&mut self) {
        self.hops = self.hops.saturating_add(1);
    }

    /// Hops marked so far.
    #[inline]
    pub fn hops(&self) -> u32 {
        self.hops
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Remove and return the newest entry.
    pub fn pop_last(&mut self) -> Option<Discovery> {
        self.entries.pop()
    }

    /// Entries, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &Discovery> {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mms_core::Direction;

    #[test]
    fn pops_newest_first() {
        let mut log = DiscoveryLog::new();
        assert!(log.is_empty());
        log.record(CellId(0), DirMask::of(Direction::East), DirMask::of(Direction::East));
        log.mark_hop();
        log.mark_hop();
        let learned: DirMask = [Direction::North, Direction::West].into_iter().collect();
        log.record(CellId(4), learned, DirMask::NONE);
        assert_eq!(log.len(), 2);
        assert_eq!(log.hops(), 2);

        let last = log.pop_last().unwrap();
        assert_eq!(last.cell, CellId(4));
        assert_eq!(last.learned, learned);
        assert_eq!(last.hop, 2);
        let first = log.pop_last().unwrap();
        assert_eq!(first.cell, CellId(0));
        assert_eq!(first.hop, 0);
        assert_eq!(log.pop_last(), None);
    }

    #[test]
    fn iter_is_oldest_first() {
        let mut log = DiscoveryLog::new();
        for i in 0..3 {
            log.record(CellId(i), DirMask::of(Direction::South), DirMask::NONE);
        }
        let cells: Vec<_> = log.iter().map(|d| d.cell.0).collect();
        assert_eq!(cells, vec![0, 1, 2]);
    }

    #[test]
    #[should_panic(expected = "not a subset")]
    fn present_wall_must_be_learned() {
        let mut log = DiscoveryLog::new();
        log.record(CellId(0), DirMask::of(Direction::North), DirMask::of(Direction::East));
    }
}
