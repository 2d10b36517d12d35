use std::collections::BTreeSet;

use proptest::prelude::*;

use cantor::core::model::tier_weight;
use cantor::core::{SegmentType, WeightedSampler, WeightedSegment, segment, split_train_val};

fn weighted(id: i64, tier: u8) -> WeightedSegment
{
    WeightedSegment {
        segment_id: id,
        content: format!("segment {id}"),
        source_title: format!("source of tier {tier}"),
        tier,
        weight: tier_weight(tier),
        segment_type: SegmentType::Section,
        language: "de".to_string(),
        sender: None,
        recipient: None,
        annotations: Vec::new(),
    }
}

/// Text made of letter-like and paper-like lines.
fn corpus_text() -> impl Strategy<Value = String>
{
    let line = prop_oneof![
        Just("Lieber Dedekind!".to_string()),
        Just("Halle, den 5. Januar 1874".to_string()),
        Just("Ihr ergebener G. Cantor".to_string()),
        Just("§ 1".to_string()),
        Just("Satz. Jede Menge ist wohlgeordnet.".to_string()),
        Just("Kapitel IV".to_string()),
        Just("   ".to_string()),
        "[a-zA-ZäöüÄÖÜß ,.]{0,40}",
    ];
    prop::collection::vec(line, 0..30).prop_map(|lines| lines.join("\n"))
}

proptest! {
    #[test]
    fn segments_are_non_empty_and_densely_ordered(
        text in corpus_text(),
        hint in prop::sample::select(vec!["letter", "collection", "paper", "article", "book", "biography"]),
    ) {
        let segs = segment(&text, hint);

        prop_assert!(segs.iter().all(|s| !s.content.trim().is_empty()));
        let orderings: Vec<u32> = segs.iter().map(|s| s.ordering).collect();
        let expected: Vec<u32> = (0..segs.len() as u32).collect();
        prop_assert_eq!(orderings, expected);

        if text.trim().is_empty() {
            prop_assert!(segs.is_empty());
        }
    }

    #[test]
    fn pool_size_follows_the_tier_policy(
        tiers in prop::collection::vec(1u8..=8, 0..40),
        oversample in 0.5f64..6.0,
    ) {
        let sampler = WeightedSampler::new(oversample).unwrap();
        let segments: Vec<_> = tiers.iter().enumerate().map(|(i, &t)| weighted(i as i64, t)).collect();

        let expected: usize = tiers
            .iter()
            .map(|&t| match t {
                8 => 0,
                7 => 1,
                1 => oversample.ceil() as usize,
                _ => ((tier_weight(t) * oversample).ceil() as usize).max(1),
            })
            .sum();

        let pool = sampler.build_training_pool(segments);
        prop_assert_eq!(pool.len(), expected);
        prop_assert!(pool.iter().all(|e| e.tier() != 8));
        prop_assert!(pool.iter().all(|e| e.negative_example == (e.tier() == 7)));
    }

    #[test]
    fn split_is_a_deterministic_partition(
        tiers in prop::collection::vec(1u8..=7, 1..40),
        val_ratio in 0.0f64..=1.0,
        seed in any::<u64>(),
    ) {
        let segments: Vec<_> = tiers.iter().enumerate().map(|(i, &t)| weighted(i as i64, t)).collect();
        let pool = WeightedSampler::default().build_training_pool(segments);
        let pool_len = pool.len();

        let a = split_train_val(pool.clone(), val_ratio, seed).unwrap();
        let b = split_train_val(pool, val_ratio, seed).unwrap();

        prop_assert_eq!(a.train.len() + a.validation.len(), pool_len);
        prop_assert_eq!(&a.train, &b.train);
        prop_assert_eq!(&a.validation, &b.validation);

        // Every tier present in the pool keeps at least one validation entry.
        let pool_tiers: BTreeSet<u8> = tiers.iter().copied().collect();
        let val_tiers: BTreeSet<u8> = a.validation.iter().map(|e| e.tier()).collect();
        prop_assert_eq!(pool_tiers, val_tiers);
    }
}

#[test]
fn out_of_range_val_ratio_is_rejected()
{
    let pool = WeightedSampler::default().build_training_pool(vec![weighted(1, 1)]);
    assert!(split_train_val(pool.clone(), -0.1, 1).is_err());
    assert!(split_train_val(pool, 1.5, 1).is_err());
}
