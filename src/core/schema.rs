//! Segment annotations and the accumulating validator.

use indexmap::IndexMap;
use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::core::model::Tier;
use crate::core::vocabulary::{Dimension, is_math_topic};

/// Classification of one segment along the five dimensions.
///
/// Persisted as one row per detected dimension. `subtags` is keyed by
/// dimension and keeps detection order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SegmentAnnotation {
    pub segment_id: i64,
    pub dimensions: Vec<Dimension>,
    pub subtags: IndexMap<Dimension, Vec<String>>,
    pub math_topics: Vec<String>,
    pub psych_state: String,
    pub confidence: f64,
    pub contradiction_flag: bool,
    pub contradiction_ref: Option<i64>,
    pub notes: String,
    pub reviewer: String,
}

impl Default for SegmentAnnotation {
    fn default() -> Self {
        Self {
            segment_id: 0,
            dimensions: Vec::new(),
            subtags: IndexMap::new(),
            math_topics: Vec::new(),
            psych_state: String::new(),
            confidence: 0.0,
            contradiction_flag: false,
            contradiction_ref: None,
            notes: String::new(),
            reviewer: "auto".to_string(),
        }
    }
}

impl SegmentAnnotation {
    /// Subtags recorded for `dim`, empty when none.
    pub fn subtags_for(&self, dim: Dimension) -> &[String] {
        self.subtags.get(&dim).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Errors for this annotation; empty when valid.
    pub fn validate(&self) -> Vec<String> {
        validate(self)
    }

    /// Expand into one storage row per detected dimension.
    pub fn rows(&self) -> Vec<AnnotationRow> {
        self.dimensions
            .iter()
            .map(|&dimension| AnnotationRow {
                id: None,
                segment_id: self.segment_id,
                dimension,
                subtags: self.subtags_for(dimension).to_vec(),
                math_topics: self.math_topics.clone(),
                psych_state: self.psych_state.clone(),
                confidence: self.confidence,
                contradiction_flag: self.contradiction_flag,
                contradiction_ref: self.contradiction_ref,
                notes: self.notes.clone(),
                reviewer: self.reviewer.clone(),
            })
            .collect()
    }
}

/// A persisted annotation: one dimension of one segment's classification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnotationRow {
    pub id: Option<i64>,
    pub segment_id: i64,
    pub dimension: Dimension,
    pub subtags: Vec<String>,
    pub math_topics: Vec<String>,
    pub psych_state: String,
    pub confidence: f64,
    pub contradiction_flag: bool,
    pub contradiction_ref: Option<i64>,
    pub notes: String,
    pub reviewer: String,
}

/// Annotation confidence derived from the source tier; unknown tiers get 0.0.
pub fn confidence_from_tier(tier: Tier) -> f64 {
    match tier {
        1 => 0.95,
        2 => 0.85,
        3 => 0.70,
        4 => 0.65,
        5 => 0.55,
        6 => 0.35,
        7 => 0.15,
        _ => 0.0,
    }
}

/// Check every rule and collect all violations in a fixed order.
///
/// Dimension membership is carried by the [`Dimension`] type; raw strings
/// are rejected where they enter the crate (`Dimension::from_str`).
pub fn validate(ann: &SegmentAnnotation) -> Vec<String> {
    let mut errors = Vec::new();

    if ann.dimensions.is_empty() {
        errors.push("at least one dimension is required".to_string());
    }

    for (dim, tags) in &ann.subtags {
        for tag in tags {
            if !dim.allows_subtag(tag) {
                errors.push(format!(
                    "invalid subtag '{tag}' for dimension {dim}; valid: [{}]",
                    dim.subtags().join(", ")
                ));
            }
        }
    }

    for topic in &ann.math_topics {
        if !is_math_topic(topic) {
            errors.push(format!("invalid math_topic: '{topic}'"));
        }
    }

    if !(0.0..=1.0).contains(&ann.confidence) {
        errors.push(format!(
            "confidence must be between 0.0 and 1.0, got {}",
            ann.confidence
        ));
    }

    match (ann.contradiction_flag, ann.contradiction_ref) {
        (true, None) => {
            errors.push("contradiction_flag is set but contradiction_ref is missing".to_string())
        }
        (false, Some(_)) => {
            errors.push("contradiction_ref is set but contradiction_flag is false".to_string())
        }
        _ => {}
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> SegmentAnnotation {
        SegmentAnnotation {
            dimensions: vec![Dimension::MathematicalIntuition],
            subtags: IndexMap::from([(
                Dimension::MathematicalIntuition,
                vec!["diagonal_argument".to_string()],
            )]),
            math_topics: vec!["diagonal_argument".to_string()],
            confidence: 0.95,
            ..Default::default()
        }
    }

    #[test]
    fn well_formed_annotation_has_no_errors() {
        assert!(base().validate().is_empty());
    }

    #[test]
    fn empty_dimensions_are_rejected() {
        let ann = SegmentAnnotation::default();
        let errors = validate(&ann);
        assert_eq!(errors, vec!["at least one dimension is required"]);
    }

    #[test]
    fn subtag_filed_under_wrong_dimension_is_reported_with_valid_set() {
        // Given
        let mut ann = base();
        ann.dimensions.push(Dimension::PersonalContext);
        ann.subtags.insert(
            Dimension::PersonalContext,
            vec!["diagonal_argument".to_string(), "icm".to_string()],
        );

        // When
        let errors = ann.validate();

        // Then
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("'diagonal_argument'"));
        assert!(errors[0].contains("personal_context"));
        assert!(errors[0].contains("halle_career"));
    }

    #[test]
    fn every_invalid_subtag_is_reported_individually() {
        let mut ann = base();
        ann.subtags.insert(
            Dimension::MathematicalIntuition,
            vec!["nonsense".to_string(), "more_nonsense".to_string()],
        );
        assert_eq!(ann.validate().len(), 2);
    }

    #[test]
    fn unknown_math_topic_and_confidence_out_of_range() {
        let mut ann = base();
        ann.math_topics.push("category_theory".to_string());
        ann.confidence = 1.5;
        let errors = ann.validate();
        assert_eq!(errors.len(), 2);
        assert!(errors[0].contains("category_theory"));
        assert!(errors[1].contains("1.5"));
    }

    #[test]
    fn contradiction_flag_and_ref_must_travel_together() {
        let mut flagged = base();
        flagged.contradiction_flag = true;
        assert_eq!(flagged.validate().len(), 1);

        let mut referenced = base();
        referenced.contradiction_ref = Some(42);
        assert_eq!(referenced.validate().len(), 1);

        let mut paired = base();
        paired.contradiction_flag = true;
        paired.contradiction_ref = Some(42);
        assert!(paired.validate().is_empty());
    }

    #[test]
    fn errors_accumulate_in_rule_order() {
        let ann = SegmentAnnotation {
            math_topics: vec!["bogus".to_string()],
            confidence: -0.1,
            contradiction_flag: true,
            ..Default::default()
        };
        let errors = validate(&ann);
        assert_eq!(errors.len(), 4);
        assert!(errors[0].starts_with("at least one dimension"));
        assert!(errors[1].starts_with("invalid math_topic"));
        assert!(errors[2].starts_with("confidence"));
        assert!(errors[3].starts_with("contradiction_flag"));
    }

    #[test]
    fn rows_split_subtags_per_dimension() {
        let mut ann = base();
        ann.segment_id = 9;
        ann.dimensions.push(Dimension::KroneckerConflict);
        let rows = ann.rows();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].subtags, vec!["diagonal_argument"]);
        assert!(rows[1].subtags.is_empty());
        assert!(rows.iter().all(|r| r.segment_id == 9 && r.math_topics.len() == 1));
    }

    #[test]
    fn confidence_table_edges() {
        assert_eq!(confidence_from_tier(1), 0.95);
        assert_eq!(confidence_from_tier(4), 0.65);
        assert_eq!(confidence_from_tier(8), 0.0);
        assert_eq!(confidence_from_tier(99), 0.0);
        assert_eq!(confidence_from_tier(0), 0.0);
    }
}
