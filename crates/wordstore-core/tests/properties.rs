use std::sync::Arc;

use proptest::prelude::*;
use wordstore_core::rank::rank;
use wordstore_core::tokenize::tokenize_str;
use wordstore_core::{
    DirectoryStore, FileStore, FileUpload, Order, RankRequest, WordFrequencyTable, WordStatistics,
    WordStats,
};

fn texts() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("([a-dA-D]{1,3}[ \t\n]{1,2}){0,12}", 0..8)
}

fn table() -> impl Strategy<Value = WordFrequencyTable> {
    prop::collection::btree_map("[a-z]{1,4}", 1u64..6, 0..20)
        .prop_map(|m| m.into_iter().collect())
}

fn merged<'a>(parts: impl IntoIterator<Item = &'a WordFrequencyTable>) -> WordFrequencyTable {
    let mut combined = WordFrequencyTable::new();
    for part in parts {
        combined.merge(part.clone());
    }
    combined
}

proptest! {
    #[test]
    fn merge_is_order_and_batch_independent(
        (texts, shuffled) in texts().prop_flat_map(|t| {
            let indices: Vec<usize> = (0..t.len()).collect();
            (Just(t), Just(indices).prop_shuffle())
        }),
        batch in 1usize..4,
    ) {
        let partials: Vec<WordFrequencyTable> = texts.iter().map(|t| tokenize_str(t)).collect();
        let in_order = merged(&partials);

        let reordered: Vec<WordFrequencyTable> = shuffled.iter().map(|&i| partials[i].clone()).collect();
        let batches: Vec<WordFrequencyTable> = reordered.chunks(batch).map(|chunk| merged(chunk)).collect();
        let batched = merged(batches.iter().rev());

        prop_assert_eq!(in_order, batched);
    }

    #[test]
    fn merged_counts_sum_per_file_counts(texts in texts()) {
        let partials: Vec<WordFrequencyTable> = texts.iter().map(|t| tokenize_str(t)).collect();
        let combined = merged(&partials);

        for (word, count) in combined.iter() {
            let expected: u64 = partials.iter().filter_map(|p| p.get(word)).sum();
            prop_assert_eq!(count, expected);
            prop_assert!(count >= 1);
        }
        for part in &partials {
            for (word, _) in part.iter() {
                prop_assert!(combined.get(word).is_some());
            }
        }
    }

    #[test]
    fn descending_is_reversed_ascending(table in table(), limit in 0usize..25) {
        let mut asc = rank(&table, RankRequest::new(limit, Order::Ascending));
        let dsc = rank(&table, RankRequest::new(limit, Order::Descending));
        asc.reverse();
        prop_assert_eq!(asc, dsc);
    }

    #[test]
    fn oversized_limit_returns_every_token_sorted(table in table(), extra in 0usize..10) {
        let words = rank(&table, RankRequest::new(table.len() + extra, Order::Ascending));
        prop_assert_eq!(words.len(), table.len());

        let counts: Vec<u64> = words.iter().filter_map(|w| table.get(w)).collect();
        prop_assert!(counts.windows(2).all(|pair| pair[0] <= pair[1]));
    }

    #[test]
    fn selection_keeps_the_highest_counts(table in table(), limit in 0usize..25) {
        let words = rank(&table, RankRequest::new(limit, Order::Descending));
        let lowest_kept = words.iter().filter_map(|w| table.get(w)).min();
        if let Some(lowest_kept) = lowest_kept {
            let dropped_above = table
                .iter()
                .filter(|(w, _)| !words.iter().any(|kept| kept == w))
                .any(|(_, count)| count > lowest_kept);
            prop_assert!(!dropped_above);
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn word_count_matches_direct_scan(texts in texts()) {
        let dir = tempfile::tempdir().unwrap();
        let store = Arc::new(DirectoryStore::open(dir.path()).unwrap());
        let uploads: Vec<FileUpload> = texts
            .iter()
            .enumerate()
            .map(|(i, t)| FileUpload::new(format!("f{i}.txt"), t.as_bytes().to_vec()))
            .collect();
        store.add_files(&uploads).unwrap();

        let stats = WordStats::new(Arc::clone(&store));
        let direct = merged(&texts.iter().map(|t| tokenize_str(t)).collect::<Vec<_>>());

        prop_assert_eq!(stats.word_count().unwrap(), direct.len());
        prop_assert_eq!(stats.combined_table().unwrap(), direct);
    }
}
