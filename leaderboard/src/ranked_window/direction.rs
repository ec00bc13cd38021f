use std::cmp::Ordering;
use std::fmt;
use std::marker::PhantomData;

use crate::types::{InstrumentId, Percent, TopEntry};

/// Sort direction of a leaderboard.
///
/// Ties on percent are broken by id in the same direction as the percent
/// itself, so every instrument has a distinct rank.
pub trait Direction {
    const NAME: &'static str;

    fn compare(a: (Percent, InstrumentId), b: (Percent, InstrumentId)) -> Ordering;
}

/// Largest change first. Used for gainers.
#[derive(Clone, Copy, Debug, Default)]
pub struct Descending;

/// Smallest change first. Used for losers.
#[derive(Clone, Copy, Debug, Default)]
pub struct Ascending;

impl Direction for Ascending {
    const NAME: &'static str = "losers";

    fn compare(a: (Percent, InstrumentId), b: (Percent, InstrumentId)) -> Ordering {
        a.0.total_cmp(&b.0).then(a.1.cmp(&b.1))
    }
}

impl Direction for Descending {
    const NAME: &'static str = "gainers";

    fn compare(a: (Percent, InstrumentId), b: (Percent, InstrumentId)) -> Ordering {
        Ascending::compare(a, b).reverse()
    }
}

/// A `(percent, id)` pair ordered by `D`.
pub(crate) struct Ranked<D> {
    pub percent: Percent,
    pub id: InstrumentId,
    _direction: PhantomData<D>,
}

impl<D> Ranked<D> {
    pub fn new(percent: Percent, id: InstrumentId) -> Self {
        Self {
            percent,
            id,
            _direction: PhantomData,
        }
    }

    pub fn entry(&self) -> TopEntry {
        TopEntry::new(self.id, self.percent)
    }
}

impl<D> Clone for Ranked<D> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<D> Copy for Ranked<D> {}

impl<D> fmt::Debug for Ranked<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.percent, self.id)
    }
}

impl<D: Direction> Ord for Ranked<D> {
    fn cmp(&self, other: &Self) -> Ordering {
        D::compare((self.percent, self.id), (other.percent, other.id))
    }
}

impl<D: Direction> PartialOrd for Ranked<D> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<D: Direction> PartialEq for Ranked<D> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<D: Direction> Eq for Ranked<D> {}
