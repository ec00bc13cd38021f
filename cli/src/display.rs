use std::io::Write;

use leaderboard::{LeaderboardHandler, TopList};
use serde::Serialize;
use tracing::warn;

/// Console rendering in the shape of the classic two-block display:
/// a "Top Gainers:" block and a "Top Losers:" block, one `#rank id percent`
/// row per slot. Slots with no instrument yet print `-`.
pub struct TextDisplay<W: Write> {
    out: W,
    top_size: usize,
    gainers: Vec<String>,
    losers: Vec<String>,
}

impl<W: Write> TextDisplay<W> {
    pub fn new(out: W, top_size: usize) -> Self {
        Self {
            out,
            top_size,
            gainers: render("Top Gainers:", &TopList::default(), top_size),
            losers: render("Top Losers:", &TopList::default(), top_size),
        }
    }

    fn print(&mut self) {
        let mut block = self.gainers.join("\n");
        block.push_str("\n\n");
        block.push_str(&self.losers.join("\n"));
        block.push_str("\n\n");

        if let Err(err) = self.out.write_all(block.as_bytes()) {
            warn!(%err, "failed to print leaderboard");
        }
    }

    #[cfg(test)]
    fn into_inner(self) -> W {
        self.out
    }
}

fn render(title: &str, list: &TopList, top_size: usize) -> Vec<String> {
    let mut lines = Vec::with_capacity(top_size + 1);
    lines.push(title.to_string());

    for rank in 0..top_size {
        let line = match list.entries().get(rank) {
            Some(e) => format!("#{} {} {:.6}", rank + 1, e.id, e.percent),
            None => format!("#{} -", rank + 1),
        };
        lines.push(line);
    }
    lines
}

impl<W: Write> LeaderboardHandler for TextDisplay<W> {
    fn on_gainers_changed(&mut self, gainers: &TopList) {
        self.gainers = render("Top Gainers:", gainers, self.top_size);
        self.print();
    }

    fn on_losers_changed(&mut self, losers: &TopList) {
        self.losers = render("Top Losers:", losers, self.top_size);
        self.print();
    }
}

#[derive(Serialize)]
struct Snapshot<'a> {
    side: &'static str,
    entries: &'a TopList,
}

/// One JSON object per change, newline delimited.
pub struct JsonDisplay<W: Write> {
    out: W,
}

impl<W: Write> JsonDisplay<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    fn emit(&mut self, side: &'static str, entries: &TopList) {
        let result = serde_json::to_writer(&mut self.out, &Snapshot { side, entries })
            .map_err(std::io::Error::from)
            .and_then(|_| self.out.write_all(b"\n"));

        if let Err(err) = result {
            warn!(%err, side, "failed to emit leaderboard");
        }
    }

    #[cfg(test)]
    fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> LeaderboardHandler for JsonDisplay<W> {
    fn on_gainers_changed(&mut self, gainers: &TopList) {
        self.emit("gainers", gainers);
    }

    fn on_losers_changed(&mut self, losers: &TopList) {
        self.emit("losers", losers);
    }
}

/// Swallows every change; the run only reports its final stats.
#[derive(Debug, Default)]
pub struct QuietDisplay;

impl LeaderboardHandler for QuietDisplay {
    fn on_gainers_changed(&mut self, _gainers: &TopList) {}

    fn on_losers_changed(&mut self, _losers: &TopList) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use leaderboard::TopEntry;

    fn top(entries: &[(i64, f64)]) -> TopList {
        entries.iter().copied().map(TopEntry::from).collect()
    }

    #[test]
    fn text_pads_missing_slots() {
        let mut d = TextDisplay::new(Vec::new(), 3);
        d.on_gainers_changed(&top(&[(42, 12.3)]));

        let out = String::from_utf8(d.into_inner()).unwrap();
        assert_eq!(
            out,
            "Top Gainers:\n#1 42 12.300000\n#2 -\n#3 -\n\nTop Losers:\n#1 -\n#2 -\n#3 -\n\n"
        );
    }

    #[test]
    fn text_keeps_other_side_between_updates() {
        let mut d = TextDisplay::new(Vec::new(), 2);
        d.on_losers_changed(&top(&[(1, -50.0), (2, 0.0)]));
        d.on_gainers_changed(&top(&[(2, 0.0), (1, -50.0)]));

        let out = String::from_utf8(d.into_inner()).unwrap();
        let last_block = out.split("\n\n").filter(|b| !b.is_empty()).collect::<Vec<_>>();

        assert_eq!(
            &last_block[last_block.len() - 2..],
            &[
                "Top Gainers:\n#1 2 0.000000\n#2 1 -50.000000",
                "Top Losers:\n#1 1 -50.000000\n#2 2 0.000000"
            ]
        );
    }

    #[test]
    fn json_emits_one_line_per_change() {
        let mut d = JsonDisplay::new(Vec::new());
        d.on_gainers_changed(&top(&[(42, 12.5)]));
        d.on_losers_changed(&top(&[]));

        let out = String::from_utf8(d.into_inner()).unwrap();
        let lines: Vec<_> = out.lines().collect();

        assert_eq!(lines.len(), 2);
        assert_eq!(
            lines[0],
            r#"{"side":"gainers","entries":[{"id":42,"percent":12.5}]}"#
        );
        assert_eq!(lines[1], r#"{"side":"losers","entries":[]}"#);
    }

    #[test]
    fn quiet_accepts_changes_from_an_engine() {
        let mut engine = leaderboard::LeaderboardEngine::new(QuietDisplay);
        engine.on_quote(42, 100.0);
        engine.on_quote(42, 150.0);

        assert_eq!(engine.gainers().entries(), &[TopEntry::new(42, 50.0)]);
        assert_eq!(engine.stats().accepted, 2);
    }
}
