#![no_main]
use libfuzzer_sys::fuzz_target;
use suggest::{distance, rank, Costs, ResolvedOptions};

fuzz_target!(|data: &[u8]| {
    let text = String::from_utf8_lossy(data);
    let mut parts = text.split('\n');
    let query = parts.next().unwrap_or_default();
    let candidates: Vec<&str> = parts.collect();

    let costs = Costs::default();
    assert_eq!(distance(query, query, &costs), 0);
    for cand in &candidates {
        let _ = distance(query, cand, &costs);
    }

    let result = rank(query, &candidates, &ResolvedOptions::default());
    if let Some(pick) = result.autocorrect {
        assert_eq!(result.matches.first().copied(), Some(pick));
    }
});
