use std::time::Duration;

use anyhow::Context;
use leaderboard::{InstrumentId, PriceUpdate};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tokio::sync::mpsc::Sender;
use tracing::{debug, info};

#[derive(Clone, Debug)]
pub struct FeedConfig {
    pub instruments: u64,
    pub ticks: u64,
    pub interval: Duration,
    pub seed: Option<u64>,
}

/// Synthetic quote source.
///
/// Seeds every instrument at `id * 10`, then draws prices from -400% to
/// +999% around the seed price. Negative results are damped by 5; they
/// invalidate the instrument for good, so the pool of live instruments
/// shrinks over time.
pub struct SyntheticFeed {
    config: FeedConfig,
    rng: StdRng,
}

impl SyntheticFeed {
    pub fn new(config: FeedConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self { config, rng }
    }

    /// Initial quotes. Id 0 is included on purpose; the engine drops it.
    pub fn seed_quotes(&self) -> impl Iterator<Item = PriceUpdate> {
        (0..self.config.instruments as InstrumentId)
            .map(|id| PriceUpdate::new(id, (id * 10) as f64))
    }

    pub fn next_quote(&mut self) -> PriceUpdate {
        let instruments = self.config.instruments.max(1) as InstrumentId;
        let id = self.rng.gen_range(0..instruments) + 1;
        let step: InstrumentId = self.rng.gen_range(0..1500) - 500;

        let mut price = (id * 10 + step * id * 10 / 100) as f64;
        if price < 0.0 {
            price /= 5.0;
        }
        PriceUpdate::new(id, price)
    }

    /// Push seed quotes then `ticks` random quotes into the engine queue.
    pub async fn run(mut self, tx: Sender<PriceUpdate>) -> anyhow::Result<()> {
        for update in self.seed_quotes() {
            tx.send(update).await.context("engine queue closed while seeding")?;
        }
        info!(instruments = self.config.instruments, "feed seeded");

        for tick in 0..self.config.ticks {
            let update = self.next_quote();
            tx.send(update).await.context("engine queue closed")?;

            if !self.config.interval.is_zero() {
                tokio::time::sleep(self.config.interval).await;
            }
            if tick > 0 && tick % 10_000 == 0 {
                debug!(tick, "feed progress");
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(instruments: u64, ticks: u64) -> FeedConfig {
        FeedConfig {
            instruments,
            ticks,
            interval: Duration::ZERO,
            seed: Some(99),
        }
    }

    #[test]
    fn seeds_every_id_from_zero() {
        let feed = SyntheticFeed::new(config(4, 0));
        let seeded: Vec<_> = feed.seed_quotes().collect();

        assert_eq!(
            seeded,
            vec![
                PriceUpdate::new(0, 0.0),
                PriceUpdate::new(1, 10.0),
                PriceUpdate::new(2, 20.0),
                PriceUpdate::new(3, 30.0),
            ]
        );
    }

    #[test]
    fn random_quotes_stay_in_range() {
        let mut feed = SyntheticFeed::new(config(100, 0));

        for _ in 0..10_000 {
            let q = feed.next_quote();
            let seed_price = (q.id * 10) as f64;

            assert!((1..=100).contains(&q.id));
            assert!(q.price <= seed_price * 11.0);
            assert!(q.price >= -seed_price * 0.8 - 1e-9);
        }
    }

    #[test]
    fn same_seed_same_walk() {
        let mut a = SyntheticFeed::new(config(1000, 0));
        let mut b = SyntheticFeed::new(config(1000, 0));

        for _ in 0..100 {
            assert_eq!(a.next_quote(), b.next_quote());
        }
    }

    #[tokio::test]
    async fn run_sends_seed_then_ticks() {
        let (tx, mut rx) = tokio::sync::mpsc::channel(64);
        SyntheticFeed::new(config(5, 7)).run(tx).await.unwrap();

        let mut received = 0;
        while rx.recv().await.is_some() {
            received += 1;
        }
        assert_eq!(received, 12);
    }
}
