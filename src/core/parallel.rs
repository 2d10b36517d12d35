//! Parallel-text handling: original/translation pairs within one source.

use serde::Serialize;
use tracing::{info, warn};

use crate::core::schema::SegmentAnnotation;
use crate::core::vocabulary::Dimension;
use crate::error::{CorpusError, Result};
use crate::infra::store::CatalogStore;

/// Two unlinked segments of the same source written in different languages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParallelCandidate {
    pub original: i64,
    pub translation: i64,
    pub original_language: String,
    pub translation_language: String,
}

/// Candidate pairs in document order. Nothing is linked.
pub fn parallel_candidates(store: &impl CatalogStore) -> Result<Vec<ParallelCandidate>> {
    let candidates = store.parallel_candidates()?;
    info!(count = candidates.len(), "parallel candidates");
    Ok(candidates)
}

/// Link `a` and `b` to each other.
///
/// Both segments must exist, belong to the same source and differ in language.
pub fn link_parallel(store: &mut impl CatalogStore, a: i64, b: i64) -> Result<()> {
    let invalid = |reason: &str| CorpusError::InvalidLink {
        a,
        b,
        reason: reason.to_string(),
    };
    if a == b {
        return Err(invalid("a segment cannot be its own translation"));
    }

    let left = store.segment(a)?.ok_or(CorpusError::SegmentNotFound(a))?;
    let right = store.segment(b)?.ok_or(CorpusError::SegmentNotFound(b))?;

    if left.source_id != right.source_id {
        return Err(invalid("segments belong to different sources"));
    }
    if left.language == right.language {
        return Err(invalid("segments share a language"));
    }
    if left.parallel_id.is_some() || right.parallel_id.is_some() {
        warn!(a, b, "relinking segment that already has a parallel; previous partner is unlinked");
    }

    store.set_parallel(a, b)?;
    info!(a, b, "linked parallel segments");
    Ok(())
}

/// Record a discrepancy between an original and its translation.
///
/// Writes two `personal_context` annotations flagged as contradictions, each
/// referencing the other segment, in a single transaction.
pub fn flag_translation_discrepancy(
    store: &mut impl CatalogStore,
    original: i64,
    translation: i64,
    note: &str,
) -> Result<usize> {
    for id in [original, translation] {
        if store.segment(id)?.is_none() {
            return Err(CorpusError::SegmentNotFound(id));
        }
    }

    let flagged = |segment_id: i64, other: i64| SegmentAnnotation {
        segment_id,
        dimensions: vec![Dimension::PersonalContext],
        confidence: 1.0,
        contradiction_flag: true,
        contradiction_ref: Some(other),
        notes: note.to_string(),
        ..Default::default()
    };

    let written = store.save_annotations(&[
        flagged(original, translation),
        flagged(translation, original),
    ])?;
    info!(original, translation, "flagged translation discrepancy");
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::model::{Segment, SegmentType, Source, SourceFormat};
    use crate::infra::store::SqliteStore;

    fn bilingual_store() -> (SqliteStore, Vec<i64>) {
        let mut store = SqliteStore::open_in_memory().unwrap();
        let src = store
            .add_sources(&[Source::new("Grundlagen", 1, SourceFormat::Paper)])
            .unwrap()[0];
        let other = store
            .add_sources(&[Source::new("Beiträge", 1, SourceFormat::Paper)])
            .unwrap()[0];

        let mut de = Segment::new(SegmentType::Section, "§1", "Die Mengenlehre", 0);
        de.source_id = src;
        let mut en = Segment::new(SegmentType::Section, "§1", "Set theory", 1);
        en.source_id = src;
        en.language = "en".to_string();
        let mut elsewhere = Segment::new(SegmentType::Section, "§1", "Transfinite numbers", 0);
        elsewhere.source_id = other;
        elsewhere.language = "en".to_string();

        let ids = store.insert_segments(&[de, en, elsewhere]).unwrap();
        (store, ids)
    }

    #[test]
    fn candidates_pair_languages_within_a_source() {
        let (store, ids) = bilingual_store();
        let candidates = parallel_candidates(&store).unwrap();
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].original, ids[0]);
        assert_eq!(candidates[0].translation, ids[1]);
        assert_eq!(candidates[0].translation_language, "en");
    }

    #[test]
    fn linking_is_bidirectional_and_clears_candidates() {
        let (mut store, ids) = bilingual_store();
        link_parallel(&mut store, ids[0], ids[1]).unwrap();

        assert_eq!(store.segment(ids[0]).unwrap().unwrap().parallel_id, Some(ids[1]));
        assert_eq!(store.segment(ids[1]).unwrap().unwrap().parallel_id, Some(ids[0]));
        assert!(parallel_candidates(&store).unwrap().is_empty());
    }

    #[test]
    fn relinking_clears_the_previous_partner() {
        // Given: de linked to en, and a second English rendering
        let (mut store, ids) = bilingual_store();
        let src = store.segment(ids[0]).unwrap().unwrap().source_id;
        let mut en2 = Segment::new(SegmentType::Section, "§1", "Theory of sets", 2);
        en2.source_id = src;
        en2.language = "en".to_string();
        let en2 = store.insert_segments(&[en2]).unwrap()[0];
        link_parallel(&mut store, ids[0], ids[1]).unwrap();

        // When
        link_parallel(&mut store, ids[0], en2).unwrap();

        // Then: the old partner no longer points back
        assert_eq!(store.segment(ids[0]).unwrap().unwrap().parallel_id, Some(en2));
        assert_eq!(store.segment(en2).unwrap().unwrap().parallel_id, Some(ids[0]));
        assert!(store.segment(ids[1]).unwrap().unwrap().parallel_id.is_none());
    }

    #[test]
    fn linking_across_sources_is_rejected() {
        let (mut store, ids) = bilingual_store();
        let err = link_parallel(&mut store, ids[0], ids[2]).unwrap_err();
        assert!(matches!(err, CorpusError::InvalidLink { .. }));
        assert!(store.segment(ids[0]).unwrap().unwrap().parallel_id.is_none());
    }

    #[test]
    fn discrepancy_writes_paired_contradictions() {
        let (mut store, ids) = bilingual_store();
        let written =
            flag_translation_discrepancy(&mut store, ids[0], ids[1], "translation drops 'Gott'")
                .unwrap();
        assert_eq!(written, 2);

        let left = store.annotations_for(ids[0]).unwrap();
        let right = store.annotations_for(ids[1]).unwrap();
        assert!(left[0].contradiction_flag && right[0].contradiction_flag);
        assert_eq!(left[0].contradiction_ref, Some(ids[1]));
        assert_eq!(right[0].contradiction_ref, Some(ids[0]));
        assert_eq!(left[0].dimension, Dimension::PersonalContext);
    }

    #[test]
    fn discrepancy_on_missing_segment_writes_nothing() {
        let (mut store, ids) = bilingual_store();
        assert!(flag_translation_discrepancy(&mut store, ids[0], 999, "x").is_err());
        assert!(store.annotations_for(ids[0]).unwrap().is_empty());
    }
}
