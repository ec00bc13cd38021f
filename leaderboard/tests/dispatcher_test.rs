mod mock_handler;

use leaderboard::{LeaderboardEngine, PriceUpdate, QuoteDispatcher, TopEntry};
use mock_handler::{Notification, RecordingHandler};
use tokio::sync::mpsc;

#[tokio::test]
async fn dispatcher_applies_updates_in_order() {
    let (tx, rx) = mpsc::channel(16);
    let engine = LeaderboardEngine::new(RecordingHandler::new());

    let handle = tokio::spawn(QuoteDispatcher::new(engine, rx).run());

    for update in [
        PriceUpdate::new(42, 100.0),
        PriceUpdate::new(-1, 100.0),
        PriceUpdate::new(42, 150.0),
    ] {
        tx.send(update).await.unwrap();
    }
    drop(tx);

    let engine = handle.await.unwrap();
    let events = engine.into_handler().events;

    assert_eq!(
        events,
        vec![
            Notification::Gainers(vec![TopEntry::new(42, 0.0)]),
            Notification::Losers(vec![TopEntry::new(42, 0.0)]),
            Notification::Gainers(vec![TopEntry::new(42, 50.0)]),
            Notification::Losers(vec![TopEntry::new(42, 50.0)]),
        ]
    );
}

#[tokio::test]
async fn concurrent_producers_feed_one_engine() {
    let (tx, rx) = mpsc::channel(8);
    let engine = LeaderboardEngine::new(RecordingHandler::new());
    let handle = tokio::spawn(QuoteDispatcher::new(engine, rx).run());

    let mut producers = Vec::new();
    for worker in 0..4i64 {
        let tx = tx.clone();
        producers.push(tokio::spawn(async move {
            for i in 1..=25 {
                let id = worker * 25 + i;
                tx.send(PriceUpdate::new(id, 10.0)).await.unwrap();
            }
        }));
    }
    drop(tx);

    for p in producers {
        p.await.unwrap();
    }

    let engine = handle.await.unwrap();
    let stats = engine.stats();

    assert_eq!(stats.accepted, 100);
    assert_eq!(engine.quotes().len(), 100);
    assert_eq!(engine.gainers().len(), 10);
    assert_eq!(
        engine.losers().entries().first(),
        Some(&TopEntry::new(1, 0.0))
    );
}
