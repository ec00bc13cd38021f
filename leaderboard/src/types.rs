use serde::Serialize;

pub type InstrumentId = i64;
pub type Price = f64;
pub type Percent = f64;

/// Number of entries in a published leaderboard.
pub const TOP_SIZE: usize = 10;

/// Upper bound on the candidates a window tracks.
pub const WINDOW_CAPACITY: usize = 16;

/// One incoming quote.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PriceUpdate {
    pub id: InstrumentId,
    pub price: Price,
}

impl PriceUpdate {
    pub fn new(id: InstrumentId, price: Price) -> Self {
        Self { id, price }
    }
}

/// Stored state of one tracked instrument.
///
/// `base_price == 0.0` marks the instrument as invalidated: it keeps its slot
/// but reports a zero change forever.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Quote {
    pub id: InstrumentId,
    pub base_price: Price,
    pub last_percent: Percent,
}

impl Quote {
    pub fn is_zombie(&self) -> bool {
        self.base_price == 0.0
    }
}

/// Result of applying an accepted quote to the store.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PercentChange {
    pub id: InstrumentId,
    /// Percent before this quote. Meaningless when `is_new`.
    pub previous: Percent,
    pub current: Percent,
    pub is_new: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct TopEntry {
    pub id: InstrumentId,
    pub percent: Percent,
}

impl TopEntry {
    pub fn new(id: InstrumentId, percent: Percent) -> Self {
        Self { id, percent }
    }
}

impl From<(InstrumentId, Percent)> for TopEntry {
    fn from((id, percent): (InstrumentId, Percent)) -> Self {
        Self { id, percent }
    }
}

/// Materialized leaderboard, best entry first.
///
/// Holds exactly `top_size` entries once that many instruments are tracked;
/// fewer only while bootstrapping. A missing trailing entry means "no
/// instrument", never a zero-percent one.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct TopList(Vec<TopEntry>);

impl TopList {
    pub fn entries(&self) -> &[TopEntry] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn last(&self) -> Option<&TopEntry> {
        self.0.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TopEntry> {
        self.0.iter()
    }
}

impl FromIterator<TopEntry> for TopList {
    fn from_iter<I: IntoIterator<Item = TopEntry>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a TopList {
    type Item = &'a TopEntry;
    type IntoIter = std::slice::Iter<'a, TopEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
