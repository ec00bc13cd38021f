use tracing::{debug, trace};

use crate::config::LeaderboardConfig;
use crate::error::ConfigError;
use crate::handler::LeaderboardHandler;
use crate::quote_store::QuoteStore;
use crate::ranked_window::{Ascending, Descending, RankedWindow, WindowStats};
use crate::types::{InstrumentId, Price, PriceUpdate, TopList};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EngineStats {
    pub accepted: u64,
    pub ignored: u64,
    pub gainers: WindowStats,
    pub losers: WindowStats,
}

/// Live top gainers / top losers over a stream of quotes.
///
/// Every accepted quote updates the quote store and both windows. The
/// handler hears about a direction only when its visible list changed,
/// except while fewer than `top_size` instruments are tracked: then both
/// lists are republished on every accepted quote.
pub struct LeaderboardEngine<H> {
    config: LeaderboardConfig,
    quotes: QuoteStore,
    gainers: RankedWindow<Descending>,
    losers: RankedWindow<Ascending>,
    handler: H,
    accepted: u64,
    ignored: u64,
}

impl<H: LeaderboardHandler> LeaderboardEngine<H> {
    pub fn new(handler: H) -> Self {
        Self::build(LeaderboardConfig::default(), handler)
    }

    pub fn with_config(config: LeaderboardConfig, handler: H) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(config, handler))
    }

    fn build(config: LeaderboardConfig, handler: H) -> Self {
        Self {
            gainers: RankedWindow::with_config(&config),
            losers: RankedWindow::with_config(&config),
            quotes: QuoteStore::new(),
            config,
            handler,
            accepted: 0,
            ignored: 0,
        }
    }

    /// Feed one quote. Invalid input is dropped without any effect.
    pub fn on_quote(&mut self, id: InstrumentId, price: Price) {
        let Some(change) = self.quotes.update(id, price) else {
            self.ignored += 1;
            trace!(id, price, "quote ignored");
            return;
        };
        self.accepted += 1;

        if self.quotes.len() < self.config.top_size {
            let gainers = self.gainers.rebuild(self.quotes.percents());
            let losers = self.losers.rebuild(self.quotes.percents());

            self.handler.on_gainers_changed(&gainers);
            self.handler.on_losers_changed(&losers);
            return;
        }

        let quotes = &self.quotes;

        if let Some(gainers) = self.gainers.process(&change, || quotes.percents()) {
            debug!(id, size = gainers.len(), "gainers changed");
            self.handler.on_gainers_changed(&gainers);
        }

        if let Some(losers) = self.losers.process(&change, || quotes.percents()) {
            debug!(id, size = losers.len(), "losers changed");
            self.handler.on_losers_changed(&losers);
        }
    }

    pub fn apply(&mut self, update: PriceUpdate) {
        self.on_quote(update.id, update.price);
    }

    pub fn gainers(&self) -> &TopList {
        self.gainers.published()
    }

    pub fn losers(&self) -> &TopList {
        self.losers.published()
    }

    pub fn config(&self) -> &LeaderboardConfig {
        &self.config
    }

    pub fn quotes(&self) -> &QuoteStore {
        &self.quotes
    }

    pub fn stats(&self) -> EngineStats {
        EngineStats {
            accepted: self.accepted,
            ignored: self.ignored,
            gainers: self.gainers.stats(),
            losers: self.losers.stats(),
        }
    }

    pub fn handler(&self) -> &H {
        &self.handler
    }

    pub fn handler_mut(&mut self) -> &mut H {
        &mut self.handler
    }

    pub fn into_handler(self) -> H {
        self.handler
    }
}
