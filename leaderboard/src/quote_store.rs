use std::collections::HashMap;

use crate::types::{InstrumentId, Percent, PercentChange, Price, Quote};

/// Reference prices and last computed change per instrument.
///
/// Entries are never removed. An instrument that once received a
/// non-positive (or non-finite) price loses its reference price and reports
/// a zero change from then on.
#[derive(Debug, Default)]
pub struct QuoteStore {
    quotes: HashMap<InstrumentId, Quote>,
}

impl QuoteStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one quote. Returns `None` when the quote is ignored: the id is
    /// not positive, or an unknown id arrives with an invalid price.
    pub fn update(&mut self, id: InstrumentId, price: Price) -> Option<PercentChange> {
        if id <= 0 {
            return None;
        }

        let valid_price = is_valid_price(price);

        let Some(quote) = self.quotes.get_mut(&id) else {
            if !valid_price {
                return None;
            }

            self.quotes.insert(
                id,
                Quote {
                    id,
                    base_price: price,
                    last_percent: 0.0,
                },
            );

            return Some(PercentChange {
                id,
                previous: 0.0,
                current: 0.0,
                is_new: true,
            });
        };

        if !valid_price {
            quote.base_price = 0.0;
        }

        let current = if quote.is_zombie() {
            0.0
        } else {
            percent_change(quote.base_price, price)
        };
        let previous = std::mem::replace(&mut quote.last_percent, current);

        Some(PercentChange {
            id,
            previous,
            current,
            is_new: false,
        })
    }

    pub fn get(&self, id: InstrumentId) -> Option<&Quote> {
        self.quotes.get(&id)
    }

    pub fn len(&self) -> usize {
        self.quotes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quotes.is_empty()
    }

    /// Current `(id, percent)` of every tracked instrument, in no particular order.
    pub fn percents(&self) -> impl Iterator<Item = (InstrumentId, Percent)> + '_ {
        self.quotes.values().map(|q| (q.id, q.last_percent))
    }
}

fn is_valid_price(price: Price) -> bool {
    price.is_finite() && price > 0.0
}

fn percent_change(base: Price, price: Price) -> Percent {
    (price - base) / base * 100.0
}
