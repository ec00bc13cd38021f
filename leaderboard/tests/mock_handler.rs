#![allow(dead_code)]

use leaderboard::{InstrumentId, LeaderboardHandler, Percent, TopEntry, TopList};

#[derive(Clone, Debug, PartialEq)]
pub enum Notification {
    Gainers(Vec<TopEntry>),
    Losers(Vec<TopEntry>),
}

/// Records every notification in arrival order.
#[derive(Default)]
pub struct RecordingHandler {
    pub events: Vec<Notification>,
}

impl RecordingHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Test convenience: hand back and forget what was recorded so far.
    pub fn take(&mut self) -> Vec<Notification> {
        std::mem::take(&mut self.events)
    }
}

impl LeaderboardHandler for RecordingHandler {
    fn on_gainers_changed(&mut self, gainers: &TopList) {
        self.events.push(Notification::Gainers(gainers.entries().to_vec()));
    }

    fn on_losers_changed(&mut self, losers: &TopList) {
        self.events.push(Notification::Losers(losers.entries().to_vec()));
    }
}

pub fn list(entries: &[(InstrumentId, Percent)]) -> Vec<TopEntry> {
    entries.iter().copied().map(TopEntry::from).collect()
}

/// Compare lists with a tolerance on percents.
pub fn assert_list_eq(actual: &[TopEntry], expected: &[(InstrumentId, Percent)]) {
    assert_eq!(
        actual.len(),
        expected.len(),
        "length mismatch: {actual:?} vs {expected:?}"
    );
    for (a, (id, pct)) in actual.iter().zip(expected) {
        assert_eq!(a.id, *id, "id mismatch: {actual:?} vs {expected:?}");
        assert!(
            (a.percent - pct).abs() < 1e-10,
            "percent mismatch: {actual:?} vs {expected:?}"
        );
    }
}
