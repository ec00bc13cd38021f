use tokio::sync::mpsc::Receiver;
use tracing::info;

use crate::engine::LeaderboardEngine;
use crate::handler::LeaderboardHandler;
use crate::types::PriceUpdate;

/// Single-writer front for one engine.
///
/// Any number of producers may hold a `Sender<PriceUpdate>`; the dispatcher
/// applies updates one at a time in arrival order, so the engine sees a
/// single linear history.
pub struct QuoteDispatcher<H> {
    engine: LeaderboardEngine<H>,
    rx: Receiver<PriceUpdate>,
}

impl<H: LeaderboardHandler> QuoteDispatcher<H> {
    pub fn new(engine: LeaderboardEngine<H>, rx: Receiver<PriceUpdate>) -> Self {
        Self { engine, rx }
    }

    /// Main loop: drains the channel until every sender is dropped, then
    /// hands the engine back.
    pub async fn run(mut self) -> LeaderboardEngine<H> {
        while let Some(update) = self.rx.recv().await {
            self.engine.apply(update);
        }

        let stats = self.engine.stats();
        info!(
            accepted = stats.accepted,
            ignored = stats.ignored,
            "quote stream closed"
        );

        self.engine
    }
}
