mod cli;
mod display;
mod feed;

use anyhow::Context;
use clap::Parser;
use tokio::sync::mpsc;
use tracing::{Instrument, info};

use cli::*;
use common::logger::{TraceId, feed_span, init_logger, run_span};
use feed::SyntheticFeed;
use leaderboard::{LeaderboardConfig, LeaderboardEngine, QuoteDispatcher};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logger("topstocks");

    let cli = Cli::parse();
    let trace_id = TraceId::default();

    run(cli).instrument(run_span("topstocks", &trace_id)).await
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = LeaderboardConfig::from_env().context("invalid leaderboard config")?;
    info!(
        top_size = config.top_size,
        window_capacity = config.window_capacity,
        "welcome to top stocks display"
    );

    let display = build_display(&cli, config.top_size);
    let engine = LeaderboardEngine::with_config(config, display)?;

    // Single-writer queue: the feed produces, the dispatcher owns the engine.
    let (quote_tx, quote_rx) = mpsc::channel(cli.channel_capacity.max(1));

    let feed = SyntheticFeed::new(build_feed_config(&cli));
    let producer = tokio::spawn(feed.run(quote_tx).instrument(feed_span(cli.instruments)));

    let engine = QuoteDispatcher::new(engine, quote_rx).run().await;
    producer.await.context("feed task panicked")??;

    let stats = engine.stats();
    info!(
        accepted = stats.accepted,
        ignored = stats.ignored,
        gainers_published = stats.gainers.publishes,
        losers_published = stats.losers.publishes,
        gainers_recomputes = stats.gainers.recomputes,
        losers_recomputes = stats.losers.recomputes,
        refills = stats.gainers.refills + stats.losers.refills,
        "feed finished"
    );

    Ok(())
}
