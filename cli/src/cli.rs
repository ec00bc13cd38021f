use std::io;
use std::time::Duration;

use clap::Parser;
use leaderboard::LeaderboardHandler;

use crate::display::{JsonDisplay, QuietDisplay, TextDisplay};
use crate::feed::FeedConfig;

/// Largest instrument universe the synthetic feed accepts.
pub const MAX_INSTRUMENTS: u64 = 1_000_000;

#[derive(Debug, Parser)]
#[clap(
    name = "topstocks",
    version,
    about = "Live top gainers / top losers over a synthetic quote feed"
)]
pub struct Cli {
    /// Number of instruments seeded before the random walk starts
    #[clap(
        long,
        default_value = "10000",
        value_parser = clap::value_parser!(u64).range(1..=MAX_INSTRUMENTS)
    )]
    pub instruments: u64,

    /// Number of random quotes emitted after seeding
    #[clap(long, default_value = "100000")]
    pub ticks: u64,

    /// Pause between random quotes, in milliseconds
    #[clap(long, default_value = "0")]
    pub interval_ms: u64,

    /// Seed for the random walk; a fresh one is drawn when omitted
    #[clap(long)]
    pub seed: Option<u64>,

    /// Print each change as one JSON line instead of the text blocks
    #[clap(long)]
    pub json: bool,

    /// Do not print leaderboard changes; only the final stats are logged
    #[clap(long)]
    pub quiet: bool,

    /// Capacity of the queue between the feed and the engine
    #[clap(long, default_value = "1024")]
    pub channel_capacity: usize,
}

/// Convert CLI flags → feed configuration
pub(crate) fn build_feed_config(cli: &Cli) -> FeedConfig {
    FeedConfig {
        instruments: cli.instruments,
        ticks: cli.ticks,
        interval: Duration::from_millis(cli.interval_ms),
        seed: cli.seed,
    }
}

/// Build the handler that renders leaderboard changes to stdout
pub(crate) fn build_display(cli: &Cli, top_size: usize) -> Box<dyn LeaderboardHandler + Send> {
    if cli.quiet {
        Box::new(QuietDisplay)
    } else if cli.json {
        Box::new(JsonDisplay::new(io::stdout()))
    } else {
        Box::new(TextDisplay::new(io::stdout(), top_size))
    }
}
