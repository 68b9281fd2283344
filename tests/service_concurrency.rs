mod common;

use common::StubResolver;

/// N concurrent successful creations must yield N distinct identifiers with
/// no gaps relative to allocation order, and every record must round-trip
/// through the store.
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_creations_get_distinct_gapless_ids() {
    const REQUESTS: u64 = 50;

    let state = common::create_test_state(StubResolver::new());
    let shortener = state.shortener.clone();

    let mut handles = Vec::new();
    for n in 0..REQUESTS {
        let shortener = shortener.clone();
        handles.push(tokio::spawn(async move {
            shortener
                .shorten(&format!("https://example.com/{n}"))
                .await
                .unwrap()
        }));
    }

    let mut ids = Vec::with_capacity(REQUESTS as usize);
    for handle in handles {
        let record = handle.await.unwrap();

        // Each record is immediately visible under its id.
        let stored = shortener.resolve(record.id).await.unwrap();
        assert_eq!(stored.original_url, record.original_url);

        ids.push(record.id);
    }

    ids.sort_unstable();
    let expected: Vec<u64> = (1..=REQUESTS).collect();
    assert_eq!(ids, expected);
}

/// A slow resolution for one request must not block unrelated requests.
#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_creations_interleave_with_pending_resolution() {
    let state = common::create_test_state(StubResolver::new());
    let shortener = state.shortener.clone();

    // Kick off a batch together; each request suspends at its own resolver
    // call only.
    let first = tokio::spawn({
        let shortener = shortener.clone();
        async move { shortener.shorten("https://first.example").await }
    });
    let second = tokio::spawn({
        let shortener = shortener.clone();
        async move { shortener.shorten("https://second.example").await }
    });

    let (first, second) = (first.await.unwrap(), second.await.unwrap());
    let mut ids = vec![first.unwrap().id, second.unwrap().id];
    ids.sort_unstable();
    assert_eq!(ids, vec![1, 2]);
}
