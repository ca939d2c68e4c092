use std::sync::Arc;

use crate::fork::Fork;
use crate::model::Hand;

/// A philosopher's place at the table: the shared ring plus the indices of the
/// two forks within reach.
///
/// Philosopher `p` of `n` has fork `p` on the right and fork `(p + n - 1) % n`
/// on the left, so fork `i` is shared by philosophers `i` and `(i + 1) % n`:
/// it is the right fork of the one and the left fork of the other.
#[derive(Debug, Clone)]
pub struct Seating {
    ring: Arc<[Fork]>,
    seat: usize,
    left: usize,
    right: usize,
}

impl Seating {
    /// Seats philosopher `seat` at the ring. Returns `None` if the ring has
    /// fewer than two forks or the seat does not exist.
    pub fn at(ring: Arc<[Fork]>, seat: usize) -> Option<Self> {
        let n = ring.len();
        if n < 2 || seat >= n {
            return None;
        }
        Some(Self {
            ring,
            seat,
            left: (seat + n - 1) % n,
            right: seat,
        })
    }

    pub fn seat(&self) -> usize {
        self.seat
    }

    pub fn seats(&self) -> usize {
        self.ring.len()
    }

    /// Index of the fork in `hand`'s reach.
    pub fn index(&self, hand: Hand) -> usize {
        match hand {
            Hand::Left => self.left,
            Hand::Right => self.right,
        }
    }

    pub fn fork(&self, hand: Hand) -> &Fork {
        &self.ring[self.index(hand)]
    }

    /// The hand a seat reaches for first.
    ///
    /// Everyone starts with the left fork except the last seat, which starts
    /// with the right one. A single reversed philosopher is enough to break the
    /// circular wait.
    pub fn primary_hand(&self) -> Hand {
        if self.seat + 1 == self.seats() {
            Hand::Right
        } else {
            Hand::Left
        }
    }
}
