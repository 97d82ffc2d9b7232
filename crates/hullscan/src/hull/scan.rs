//! Stack scan with pop-and-retry backtracking.
//!
//! States: `Seeded` after the stack holds `pivot, s[0], s[1]`; `Scanning` while
//! heads are accepted; `Backtracking` while clockwise turns pop the top;
//! `Closed` once the pivot is pushed again. The head index only advances on a
//! non-clockwise turn, so a popped vertex is always retried against the same
//! head.

use crate::point::{classify_turn, Point, Turn};

/// Scan state, reported in trace logs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ScanState {
    Seeded,
    Scanning,
    Backtracking,
    Closed,
}

/// Stack traffic of one scan. Seeding and closing pushes are counted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScanStats {
    pub pushes: usize,
    pub pops: usize,
}

pub(crate) struct Scanner<'a> {
    pivot: Point,
    sorted: &'a [Point],
    stack: Vec<Point>,
    state: ScanState,
    stats: ScanStats,
}

impl<'a> Scanner<'a> {
    /// Seed the stack with `pivot, sorted[0], sorted[1]`.
    ///
    /// Pre: `sorted.len() >= 2`, not all of `pivot ∪ sorted` collinear.
    pub(crate) fn seed(pivot: Point, sorted: &'a [Point]) -> Self {
        debug_assert!(sorted.len() >= 2);
        let mut s = Self {
            pivot,
            sorted,
            stack: Vec::with_capacity(sorted.len() + 2),
            state: ScanState::Seeded,
            stats: ScanStats::default(),
        };
        s.push(pivot);
        for &p in sorted.iter().take(2) {
            s.push(p);
        }
        s
    }

    pub(crate) fn run(mut self) -> (Vec<Point>, ScanStats) {
        let mut i = 2;
        while i < self.sorted.len() {
            let head = self.sorted[i];
            // Never below `pivot, s[0]`: popping `s[0]` needs `pivot -> s[0] -> head`
            // clockwise, and every head is at least as far round as `s[0]`.
            let depth = self.stack.len();
            debug_assert!(depth >= 2, "scan popped into the seed");
            let (tail, middle) = (self.stack[depth - 2], self.stack[depth - 1]);
            match classify_turn(tail, middle, head) {
                Turn::Clockwise => {
                    self.transition(ScanState::Backtracking, head);
                    self.stack.pop();
                    self.stats.pops += 1;
                }
                // collinear heads stay on the boundary chain
                Turn::CounterClockwise | Turn::Collinear => {
                    self.transition(ScanState::Scanning, head);
                    self.push(head);
                    i += 1;
                }
            }
        }
        let pivot = self.pivot;
        self.transition(ScanState::Closed, pivot);
        self.push(pivot);
        (self.stack, self.stats)
    }

    #[inline]
    fn push(&mut self, p: Point) {
        self.stack.push(p);
        self.stats.pushes += 1;
    }

    #[inline]
    fn transition(&mut self, to: ScanState, head: Point) {
        if self.state != to {
            tracing::trace!(from = ?self.state, to = ?to, %head, depth = self.stack.len(), "scan");
            self.state = to;
        }
    }
}
