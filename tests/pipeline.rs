//! End-to-end pipeline over an in-memory catalog:
//! seed → segment → tag → link → sample → format.

use std::collections::HashSet;

use cantor::core::formatter::TrainingRecord;
use cantor::core::parallel::{flag_translation_discrepancy, link_parallel, parallel_candidates};
use cantor::core::{
    AcquisitionStatus, Dimension, Formatter, RuleBasedTagger, Segment, SegmentType, Segmenter, Source,
    SourceFormat, TrainingFormat, WeightedSampler, tag_all_segments,
};
use cantor::infra::seed::seed_catalog;
use cantor::infra::store::SourceFilter;
use cantor::{CatalogStore, SqliteStore};

mod util;
use util::{CORRESPONDENCE, THREE_LETTERS};

/// A seeded store plus the id of its first tier-1 collection.
fn seeded_store() -> (SqliteStore, i64)
{
    let mut store = SqliteStore::open_in_memory().expect("in-memory store");
    seed_catalog(&mut store, false).expect("seed");

    let tier_one = store
        .sources(SourceFilter { tier: Some(1), status: None })
        .expect("list tier 1");
    let id = tier_one
        .first()
        .and_then(|s| s.id)
        .expect("a tier-1 source");
    (store, id)
}

#[test]
fn correspondence_flows_through_to_training_records()
{
    // Given: a seeded catalog and the correspondence segmented into a tier-1 source
    let (mut store, source_id) = seeded_store();
    let segments = Segmenter::new(source_id).split_letters(CORRESPONDENCE);
    assert_eq!(segments.len(), 3);
    store
        .insert_segments(&segments)
        .expect("insert segments");

    // When: tagging every pending segment
    let summary = tag_all_segments(&mut store, &RuleBasedTagger::new()).expect("tag");

    // Then: nothing is left in the queue and every segment carries annotations
    assert_eq!(summary.tagged, 3);
    assert_eq!(summary.dropped, 0);
    assert!(store.tagging_queue().expect("queue").is_empty());

    let weighted = store
        .weighted_segments()
        .expect("weighted");
    assert_eq!(weighted.len(), 3);
    assert!(weighted.iter().all(|w| w.tier == 1 && !w.annotations.is_empty()));
    assert!(weighted.iter().any(|w| w.has_dimension(Dimension::KroneckerConflict)));

    // When: sampling and formatting
    let split = WeightedSampler::new(3.0)
        .expect("sampler")
        .split_train_val(weighted, 0.1, 42)
        .expect("split");

    // Then: three copies of each segment, one held out for validation
    assert_eq!(split.train.len() + split.validation.len(), 9);
    assert_eq!(split.validation.len(), 1);

    let formatter = Formatter::new(TrainingFormat::Alpaca);
    for entry in &split.train
    {
        match formatter.record(&entry.segment)
        {
            TrainingRecord::Instruction { output, system, .. } =>
            {
                assert_eq!(output, entry.segment.content);
                assert!(!system.is_empty());
            }
            other => panic!("expected an instruction record, got {other:?}"),
        }
    }
}

#[test]
fn three_letters_become_three_addressed_segments()
{
    // Given: a letter block with no preamble, segmented into a tier-1 source
    let (mut store, source_id) = seeded_store();
    let segments = Segmenter::new(source_id).split_letters(THREE_LETTERS);

    // Then: one segment per letter, each with its addressee
    assert_eq!(segments.len(), 3);
    let recipients: Vec<Option<&str>> = segments
        .iter()
        .map(|s| s.recipient.as_deref())
        .collect();
    assert_eq!(recipients, vec![Some("Dedekind"), Some("Freund"), Some("Herr Weierstrass")]);
    assert!(segments[0].content.starts_with("Lieber Dedekind!"));
    assert!(segments[2].content.ends_with("Georg Cantor"));

    // When: storing and tagging them
    let ids = store
        .insert_segments(&segments)
        .expect("insert");
    tag_all_segments(&mut store, &RuleBasedTagger::new()).expect("tag");

    // Then: the letter on Mengenlehre carries the set_theory subtag
    let annotations = store
        .annotations_for(ids[0])
        .expect("annotations");
    let math = annotations
        .iter()
        .find(|a| a.dimension == Dimension::MathematicalIntuition)
        .expect("a mathematical annotation");
    assert!(math.subtags.contains(&"set_theory".to_string()), "{math:?}");

    // When: building the pool with three copies per tier-1 segment
    let pool = WeightedSampler::new(3.0)
        .expect("sampler")
        .build_training_pool(store.weighted_segments().expect("weighted"));

    // Then: nine entries, three per letter
    assert_eq!(pool.len(), 9);
    for id in &ids
    {
        let copies = pool
            .iter()
            .filter(|e| e.segment.segment_id == *id)
            .count();
        assert_eq!(copies, 3);
    }
}

#[test]
fn translations_pair_with_originals_and_flags_are_mutual()
{
    // Given: a German letter and its English translation in one source
    let (mut store, source_id) = seeded_store();
    let mut original = Segment::new(SegmentType::Letter, "den 5. Januar 1874", "Lieber Dedekind!", 0);
    original.source_id = source_id;
    let mut translation = Segment::new(SegmentType::Letter, "5 January 1874", "Dear Dedekind!", 1);
    translation.source_id = source_id;
    translation.language = "en".to_string();
    let ids = store
        .insert_segments(&[original, translation])
        .expect("insert");

    // When: listing candidates and linking the pair
    let candidates = parallel_candidates(&store).expect("candidates");
    assert_eq!(candidates.len(), 1);
    assert_eq!((candidates[0].original, candidates[0].translation), (ids[0], ids[1]));
    link_parallel(&mut store, ids[0], ids[1]).expect("link");

    // Then: both segments point at each other
    let a = store
        .segment(ids[0])
        .expect("read")
        .expect("exists");
    let b = store
        .segment(ids[1])
        .expect("read")
        .expect("exists");
    assert_eq!(a.parallel_id, Some(ids[1]));
    assert_eq!(b.parallel_id, Some(ids[0]));

    // When: flagging a discrepancy
    let rows = flag_translation_discrepancy(&mut store, ids[0], ids[1], "Mächtigkeit rendered as power")
        .expect("flag");

    // Then: each side references the other
    assert_eq!(rows, 2);
    let on_original = store
        .annotations_for(ids[0])
        .expect("annotations");
    assert_eq!(on_original.len(), 1);
    assert!(on_original[0].contradiction_flag);
    assert_eq!(on_original[0].contradiction_ref, Some(ids[1]));
}

#[test]
fn tier_eight_sources_never_reach_the_pool()
{
    // Given: a fabricated-source segment and a genuine one
    let mut store = SqliteStore::open_in_memory().expect("store");
    let ids = store
        .add_sources(&[
            Source::new("Men of Mathematics", 8, SourceFormat::Book).status(AcquisitionStatus::Excluded),
            Source::new("Gesammelte Abhandlungen", 1, SourceFormat::Collection),
        ])
        .expect("add");

    let mut fabricated = Segment::new(SegmentType::Chapter, "Paradise Lost?", "Cantor in Halle.", 0);
    fabricated.source_id = ids[0];
    let mut genuine = Segment::new(SegmentType::Section, "§ 1", "Die Mengenlehre in Halle.", 0);
    genuine.source_id = ids[1];
    store
        .insert_segments(&[fabricated, genuine])
        .expect("insert");
    tag_all_segments(&mut store, &RuleBasedTagger::new()).expect("tag");

    // When
    let pool = WeightedSampler::default().build_training_pool(store.weighted_segments().expect("weighted"));

    // Then: only the tier-1 segment is replicated
    let tiers: HashSet<u8> = pool
        .iter()
        .map(|e| e.tier())
        .collect();
    assert_eq!(tiers, HashSet::from([1]));
    assert_eq!(pool.len(), 3);
}
