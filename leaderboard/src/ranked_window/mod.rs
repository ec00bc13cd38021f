mod direction;

use std::collections::BTreeSet;

use tracing::{debug, trace, warn};

pub use direction::{Ascending, Descending, Direction};
use direction::Ranked;

use crate::config::LeaderboardConfig;
use crate::types::{InstrumentId, Percent, PercentChange, TopList};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WindowStats {
    /// Updates that reached the boundary and forced a top recomputation.
    pub recomputes: u64,
    /// Recomputations that found fewer than `top_size` candidates and had to
    /// reload the window from the full quote set.
    pub refills: u64,
    /// Lists handed out, bootstrap rebuilds included.
    pub publishes: u64,
}

/// Bounded ordered set of leaderboard candidates for one direction.
///
/// The window always holds exactly the instruments ranked at or before the
/// admission cut, and never more than `capacity` of them. The published top
/// is the first `top_size` entries. Two keys gate the work per update:
///
/// * `admission`: the last key kept after the window was trimmed. Keys ranked
///   after it are not tracked. `None` while the window holds every instrument.
/// * `boundary`: the last entry of the current top. Updates whose old and new
///   keys both rank after it cannot change the top. `None` while the top is
///   shorter than `top_size`.
pub struct RankedWindow<D: Direction> {
    top_size: usize,
    capacity: usize,
    entries: BTreeSet<Ranked<D>>,
    admission: Option<Ranked<D>>,
    boundary: Option<Ranked<D>>,
    published: TopList,
    stats: WindowStats,
}

impl<D: Direction> RankedWindow<D> {
    pub fn new(top_size: usize, capacity: usize) -> Self {
        debug_assert!(top_size > 0 && capacity >= top_size);

        Self {
            top_size,
            capacity,
            entries: BTreeSet::new(),
            admission: None,
            boundary: None,
            published: TopList::default(),
            stats: WindowStats::default(),
        }
    }

    pub fn with_config(config: &LeaderboardConfig) -> Self {
        Self::new(config.top_size, config.window_capacity)
    }

    /// Repopulate from the full quote set and return the resulting top.
    ///
    /// Used while fewer than `top_size` instruments exist; every call counts
    /// as a change.
    pub fn rebuild<I>(&mut self, quotes: I) -> TopList
    where
        I: IntoIterator<Item = (InstrumentId, Percent)>,
    {
        self.fill(quotes);

        let top = self.materialize();
        self.published = top.clone();
        self.stats.publishes += 1;

        debug!(direction = D::NAME, size = top.len(), "window rebuilt");
        top
    }

    /// Apply one percent change. Returns the new top only when it differs
    /// from the last one handed out.
    ///
    /// `universe` yields every tracked `(id, percent)`. It is only called when
    /// the window runs short of candidates for a full top.
    pub fn process<F, I>(&mut self, change: &PercentChange, universe: F) -> Option<TopList>
    where
        F: FnOnce() -> I,
        I: IntoIterator<Item = (InstrumentId, Percent)>,
    {
        let old = Ranked::new(change.previous, change.id);
        let new = Ranked::new(change.current, change.id);

        if !change.is_new {
            self.remove(old);
        }
        self.insert(new);

        let touched = (!change.is_new && self.touches_top(&old)) || self.touches_top(&new);
        if !touched {
            trace!(direction = D::NAME, id = change.id, "update outside top, skipped");
            return None;
        }

        self.stats.recomputes += 1;

        if self.entries.len() < self.top_size && self.admission.is_some() {
            warn!(
                direction = D::NAME,
                window = self.entries.len(),
                top_size = self.top_size,
                "window underflow, refilling from quote store"
            );
            self.stats.refills += 1;
            self.fill(universe());
        }

        let top = self.materialize();
        if top == self.published {
            return None;
        }

        self.published = top.clone();
        self.stats.publishes += 1;
        Some(top)
    }

    /// Last list handed out.
    pub fn published(&self) -> &TopList {
        &self.published
    }

    /// Number of tracked candidates.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn stats(&self) -> WindowStats {
        self.stats
    }

    fn fill<I>(&mut self, quotes: I)
    where
        I: IntoIterator<Item = (InstrumentId, Percent)>,
    {
        self.entries.clear();
        self.admission = None;

        for (id, percent) in quotes {
            self.insert(Ranked::new(percent, id));
        }
    }

    fn admits(&self, key: &Ranked<D>) -> bool {
        self.admission.is_none_or(|cut| *key <= cut)
    }

    fn touches_top(&self, key: &Ranked<D>) -> bool {
        self.boundary.is_none_or(|last| *key <= last)
    }

    fn insert(&mut self, key: Ranked<D>) {
        if !self.admits(&key) {
            return;
        }

        let inserted = self.entries.insert(key);
        debug_assert!(inserted, "{} window already holds {:?}", D::NAME, key);

        if self.entries.len() > self.capacity {
            self.entries.pop_last();
            self.admission = self.entries.last().copied();
        }
    }

    fn remove(&mut self, key: Ranked<D>) {
        if !self.admits(&key) {
            return;
        }

        let removed = self.entries.remove(&key);
        debug_assert!(removed, "{} window lost track of {:?}", D::NAME, key);
    }

    /// Take the first `top_size` entries and move the boundary to the last one.
    fn materialize(&mut self) -> TopList {
        debug_assert!(self.entries.len() <= self.capacity);

        let head: Vec<Ranked<D>> = self.entries.iter().take(self.top_size).copied().collect();

        self.boundary = if head.len() == self.top_size {
            head.last().copied()
        } else {
            None
        };

        head.iter().map(Ranked::entry).collect()
    }
}
