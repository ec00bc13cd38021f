use crate::types::TopList;

/// Receiver of leaderboard changes.
///
/// Called synchronously from inside `LeaderboardEngine::on_quote`; an
/// implementation must not feed quotes back into the same engine.
pub trait LeaderboardHandler {
    fn on_gainers_changed(&mut self, gainers: &TopList);

    fn on_losers_changed(&mut self, losers: &TopList);
}

impl<H: LeaderboardHandler + ?Sized> LeaderboardHandler for &mut H {
    fn on_gainers_changed(&mut self, gainers: &TopList) {
        (**self).on_gainers_changed(gainers);
    }

    fn on_losers_changed(&mut self, losers: &TopList) {
        (**self).on_losers_changed(losers);
    }
}

impl<H: LeaderboardHandler + ?Sized> LeaderboardHandler for Box<H> {
    fn on_gainers_changed(&mut self, gainers: &TopList) {
        (**self).on_gainers_changed(gainers);
    }

    fn on_losers_changed(&mut self, losers: &TopList) {
        (**self).on_losers_changed(losers);
    }
}
