//! Indexed binary min-heap over cell ids, keyed by the distance each cell
//! currently holds in the [`Maze`].
//!
//! Unlike `std::collections::BinaryHeap`, a queued cell can have its key
//! lowered in place ([`CellQueue::decrease_key`]) because the heap keeps a
//! cell → heap-slot index. Ties on distance are broken by cell id, so the
//! pop order is a total order and identical across runs.

use mms_core::{CellId, Maze};

const ABSENT: usize = usize::MAX;

/// Decrease-key priority queue of [`CellId`]s.
#[derive(Clone, Debug)]
pub struct CellQueue {
    heap: Vec<CellId>,
    /// Heap slot of each cell, or `ABSENT`.
    slots: Vec<usize>,
}

impl CellQueue {
    /// Create an empty queue able to hold every cell of a maze with
    /// `cells` cells.
    pub fn new(cells: usize) -> Self {
        Self {
            heap: Vec::with_capacity(cells),
            slots: vec![ABSENT; cells],
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Whether `cell` is currently queued.
    #[inline]
    pub fn contains(&self, cell: CellId) -> bool {
        self.slots.get(cell.index()).is_some_and(|&s| s != ABSENT)
    }

    /// Insert a cell that is not yet queued.
    pub fn push(&mut self, cell: CellId, maze: &Maze) {
        self.ensure_capacity(maze.len());
        assert!(!self.contains(cell), "cell {cell:?} pushed twice");
        let slot = self.heap.len();
        self.heap.push(cell);
        self.slots[cell.index()] = slot;
        self.sift_up(slot, maze);
    }

    /// Remove and return the cell with the smallest distance.
    pub fn pop_min(&mut self, maze: &Maze) -> Option<CellId> {
        let last = self.heap.len().checked_sub(1)?;
        self.swap(0, last);
        let min = self.heap.pop()?;
        self.slots[min.index()] = ABSENT;
        if !self.heap.is_empty() {
            self.sift_down(0, maze);
        }
        Some(min)
    }

    /// Restore heap order after the distance of a queued cell decreased.
    pub fn decrease_key(&mut self, cell: CellId, maze: &Maze) {
        assert!(self.contains(cell), "decrease_key on unqueued cell {cell:?}");
        let slot = self.slots[cell.index()];
        self.sift_up(slot, maze);
    }

    /// Remove every cell.
    pub fn clear(&mut self) {
        for c in self.heap.drain(..) {
            self.slots[c.index()] = ABSENT;
        }
    }

    // -----------------------------------------------------------------------
    // Heap internals
    // -----------------------------------------------------------------------

    fn ensure_capacity(&mut self, cells: usize) {
        if self.slots.len() < cells {
            self.slots.resize(cells, ABSENT);
        }
    }

    #[inline]
    fn less(&self, a: usize, b: usize, maze: &Maze) -> bool {
        let (ca, cb) = (self.heap[a], self.heap[b]);
        (maze.distance(ca), ca) < (maze.distance(cb), cb)
    }

    #[inline]
    fn swap(&mut self, a: usize, b: usize) {
        self.heap.swap(a, b);
        self.slots[self.heap[a].index()] = a;
        self.slots[self.heap[b].index()] = b;
    }

    fn sift_up(&mut self, mut i: usize, maze: &Maze) {
        while i > 0 {
            let parent = (i - 1) / 2;
            if !self.less(i, parent, maze) {
                break;
            }
            self.swap(i, parent);
            i = parent;
        }
    }

    fn sift_down(&mut self, mut i: usize, maze: &Maze) {
        let n = self.heap.len();
        loop {
            let l = 2 * i + 1;
            let r = l + 1;
            let mut smallest = i;
            if l < n && self.less(l, smallest, maze) {
                smallest = l;
            }
            if r < n && self.less(r, smallest, maze) {
                smallest = r;
            }
            if smallest == i {
                break;
            }
            self.swap(i, smallest);
            i = smallest;
        }
    }
}
