//! Weighted tier sampling for training-pool construction.
//!
//! Tier policy:
//! - tier 1: `ceil(oversample)` copies
//! - tiers 2-6: `max(1, ceil(weight * oversample))` copies, optionally capped
//! - tier 7: one copy flagged as a negative example
//! - tier 8: excluded

use std::collections::BTreeMap;
use std::sync::Arc;

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use serde::Serialize;
use tracing::{debug, info, instrument};

use crate::core::model::{SegmentType, Tier};
use crate::core::schema::AnnotationRow;
use crate::core::vocabulary::Dimension;
use crate::error::{CorpusError, Result};

/// A segment joined with its source's tier and weight and all its annotations.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeightedSegment {
    pub segment_id: i64,
    pub content: String,
    pub source_title: String,
    pub tier: Tier,
    pub weight: f64,
    pub segment_type: SegmentType,
    pub language: String,
    pub sender: Option<String>,
    pub recipient: Option<String>,
    pub annotations: Vec<AnnotationRow>,
}

impl WeightedSegment {
    pub fn has_dimension(&self, dim: Dimension) -> bool {
        self.annotations.iter().any(|a| a.dimension == dim)
    }
}

/// One replicated occurrence of a segment in the training pool.
#[derive(Debug, Clone, PartialEq)]
pub struct TrainingPoolEntry {
    pub segment: Arc<WeightedSegment>,
    pub negative_example: bool,
}

impl TrainingPoolEntry {
    pub fn tier(&self) -> Tier {
        self.segment.tier
    }
}

/// How a segment enters the pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Replication {
    Excluded,
    Negative,
    Copies(u32),
}

/// Upper bound on the oversample factor, and so on copies per segment.
pub const MAX_OVERSAMPLE: f64 = 100.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeightedSampler {
    oversample: f64,
    max_copies: Option<u32>,
}

impl Default for WeightedSampler {
    fn default() -> Self {
        Self { oversample: 3.0, max_copies: None }
    }
}

/// Train and validation partitions of a pool.
#[derive(Debug, Clone, Default)]
pub struct Split {
    pub train: Vec<TrainingPoolEntry>,
    pub validation: Vec<TrainingPoolEntry>,
}

impl WeightedSampler {
    pub fn new(oversample: f64) -> Result<Self> {
        if !oversample.is_finite() || oversample <= 0.0 || oversample > MAX_OVERSAMPLE {
            return Err(CorpusError::InvalidSampler(format!(
                "oversample must be in (0, {MAX_OVERSAMPLE}], got {oversample}"
            )));
        }
        Ok(Self { oversample, max_copies: None })
    }

    /// Cap replication for tiers 2-6; tier 1 is never capped.
    pub fn with_max_copies(mut self, cap: Option<u32>) -> Self {
        self.max_copies = cap.map(|c| c.max(1));
        self
    }

    pub fn oversample(&self) -> f64 {
        self.oversample
    }

    /// Replication policy for a segment; depends only on tier, weight and settings.
    pub fn replication(&self, tier: Tier, weight: f64) -> Replication {
        match tier {
            8 => Replication::Excluded,
            7 => Replication::Negative,
            1 => Replication::Copies(ceil_copies(self.oversample)),
            _ => {
                let copies = ceil_copies(weight * self.oversample).max(1);
                Replication::Copies(self.max_copies.map_or(copies, |cap| copies.min(cap)))
            }
        }
    }

    /// Replicate segments by tier policy, preserving input order.
    #[instrument(skip_all, fields(segments = segments.len()))]
    pub fn build_training_pool(&self, segments: Vec<WeightedSegment>) -> Vec<TrainingPoolEntry> {
        let mut pool = Vec::new();
        let mut excluded = 0usize;

        for seg in segments {
            let seg = Arc::new(seg);
            match self.replication(seg.tier, seg.weight) {
                Replication::Excluded => excluded += 1,
                Replication::Negative => pool.push(TrainingPoolEntry {
                    segment: seg,
                    negative_example: true,
                }),
                Replication::Copies(n) => {
                    for _ in 0..n {
                        pool.push(TrainingPoolEntry {
                            segment: Arc::clone(&seg),
                            negative_example: false,
                        });
                    }
                }
            }
        }

        info!(pool = pool.len(), excluded, "built training pool");
        pool
    }

    /// Build the pool and split it.
    pub fn split_train_val(
        &self,
        segments: Vec<WeightedSegment>,
        val_ratio: f64,
        seed: u64,
    ) -> Result<Split> {
        split_train_val(self.build_training_pool(segments), val_ratio, seed)
    }
}

fn ceil_copies(x: f64) -> u32 {
    // Saturating float-to-int cast; NaN maps to 0.
    x.ceil() as u32
}

/// Stratified, seeded train/validation split.
///
/// Tiers are visited in ascending order; each tier is shuffled and
/// `max(1, round(n * val_ratio))` entries (round half to even) are
/// reserved for validation. Both
/// partitions are then shuffled with the same generator, so the result is a
/// pure function of `(pool, val_ratio, seed)`.
pub fn split_train_val(pool: Vec<TrainingPoolEntry>, val_ratio: f64, seed: u64) -> Result<Split> {
    if !(0.0..=1.0).contains(&val_ratio) {
        return Err(CorpusError::InvalidSampler(format!(
            "val_ratio must be between 0.0 and 1.0, got {val_ratio}"
        )));
    }

    let mut by_tier: BTreeMap<Tier, Vec<TrainingPoolEntry>> = BTreeMap::new();
    for entry in pool {
        by_tier.entry(entry.tier()).or_default().push(entry);
    }

    let mut rng = StdRng::seed_from_u64(seed);
    let mut split = Split::default();

    for (tier, mut items) in by_tier {
        items.shuffle(&mut rng);
        let wanted = ((items.len() as f64) * val_ratio).round_ties_even() as usize;
        let n_val = wanted.max(1).min(items.len());
        debug!(tier, total = items.len(), n_val, "stratum");
        let train = items.split_off(n_val);
        split.validation.extend(items);
        split.train.extend(train);
    }

    split.train.shuffle(&mut rng);
    split.validation.shuffle(&mut rng);
    Ok(split)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::model::tier_weight;

    fn seg(id: i64, tier: Tier) -> WeightedSegment {
        WeightedSegment {
            segment_id: id,
            content: format!("segment {id}"),
            source_title: format!("source for tier {tier}"),
            tier,
            weight: tier_weight(tier),
            segment_type: SegmentType::Section,
            language: "de".to_string(),
            sender: None,
            recipient: None,
            annotations: Vec::new(),
        }
    }

    #[test]
    fn tier_policy_with_default_oversample() {
        // Given
        let sampler = WeightedSampler::default();
        let segments = vec![seg(1, 8), seg(2, 7), seg(3, 1)];

        // When
        let pool = sampler.build_training_pool(segments);

        // Then
        let count = |id| pool.iter().filter(|e| e.segment.segment_id == id).count();
        assert_eq!(count(1), 0);
        assert_eq!(count(2), 1);
        assert_eq!(count(3), 3);
        assert!(pool.iter().find(|e| e.segment.segment_id == 2).unwrap().negative_example);
        assert!(
            pool.iter()
                .filter(|e| e.segment.segment_id == 3)
                .all(|e| !e.negative_example)
        );
    }

    #[test]
    fn middle_tiers_follow_weight() {
        let sampler = WeightedSampler::default();
        assert_eq!(sampler.replication(2, 0.85), Replication::Copies(3));
        assert_eq!(sampler.replication(5, 0.55), Replication::Copies(2));
        assert_eq!(sampler.replication(6, 0.35), Replication::Copies(2));
        assert_eq!(sampler.replication(6, 0.0), Replication::Copies(1));
    }

    #[test]
    fn fractional_oversample_rounds_up_for_tier_one() {
        let sampler = WeightedSampler::new(2.2).unwrap();
        assert_eq!(sampler.replication(1, 1.0), Replication::Copies(3));
    }

    #[test]
    fn cap_applies_to_middle_tiers_only() {
        let sampler = WeightedSampler::new(10.0).unwrap().with_max_copies(Some(4));
        assert_eq!(sampler.replication(2, 0.85), Replication::Copies(4));
        assert_eq!(sampler.replication(1, 1.0), Replication::Copies(10));
    }

    #[test]
    fn invalid_settings_are_rejected() {
        assert!(WeightedSampler::new(0.0).is_err());
        assert!(WeightedSampler::new(f64::NAN).is_err());
        assert!(WeightedSampler::new(1e12).is_err());
        assert!(WeightedSampler::new(MAX_OVERSAMPLE).is_ok());
        assert!(split_train_val(Vec::new(), 1.5, 1).is_err());
    }

    #[test]
    fn every_tier_reserves_at_least_one_validation_entry() {
        let segments: Vec<_> = (0..20).map(|i| seg(i, if i < 15 { 1 } else { 5 })).collect();
        let split = WeightedSampler::default()
            .split_train_val(segments, 0.1, 42)
            .unwrap();

        // tier 1: 45 entries → 4 validation; tier 5: 10 entries → 1 validation
        assert_eq!(split.validation.len(), 5);
        assert_eq!(split.train.len(), 50);
        assert!(split.validation.iter().any(|e| e.tier() == 5));
    }

    #[test]
    fn half_validation_counts_round_to_even() {
        // 5 tier-1 segments → 15 entries; 15 * 0.5 = 7.5 → 8, 25 entries * 0.1 = 2.5 → 2
        let fifteen: Vec<_> = (0..5).map(|i| seg(i, 1)).collect();
        let split = WeightedSampler::default().split_train_val(fifteen, 0.5, 1).unwrap();
        assert_eq!(split.validation.len(), 8);

        let twenty_five: Vec<_> = (0..25).map(|i| seg(i, 1)).collect();
        let pool = WeightedSampler::new(1.0).unwrap().build_training_pool(twenty_five);
        let split = split_train_val(pool, 0.1, 1).unwrap();
        assert_eq!(split.validation.len(), 2);
    }

    #[test]
    fn split_is_deterministic_for_a_seed() {
        let segments: Vec<_> = (0..30).map(|i| seg(i, (i % 6 + 1) as Tier)).collect();
        let sampler = WeightedSampler::default();
        let ids = |s: &Split| {
            (
                s.train.iter().map(|e| e.segment.segment_id).collect::<Vec<_>>(),
                s.validation.iter().map(|e| e.segment.segment_id).collect::<Vec<_>>(),
            )
        };

        let a = sampler.split_train_val(segments.clone(), 0.1, 7).unwrap();
        let b = sampler.split_train_val(segments, 0.1, 7).unwrap();
        assert_eq!(ids(&a), ids(&b));
    }
}
