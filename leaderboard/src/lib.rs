pub mod config;
pub mod dispatcher;
pub mod engine;
pub mod error;
pub mod handler;
pub mod quote_store;
pub mod ranked_window;
pub mod types;

pub use config::LeaderboardConfig;
pub use dispatcher::QuoteDispatcher;
pub use engine::{EngineStats, LeaderboardEngine};
pub use error::ConfigError;
pub use handler::LeaderboardHandler;
pub use ranked_window::{Ascending, Descending, Direction, RankedWindow, WindowStats};
pub use types::{InstrumentId, Percent, Price, PriceUpdate, TopEntry, TopList};
