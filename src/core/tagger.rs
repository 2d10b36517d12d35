//! Segment classification: keyword rules, an assisted classifier with rule
//! fallback, and the batch driver that persists the results.

use std::fmt::Write as _;
use std::sync::LazyLock;

use indexmap::IndexMap;
use indicatif::ProgressBar;
use serde::Deserialize;
use tracing::{debug, info, instrument, warn};

use crate::core::model::Tier;
use crate::core::schema::{SegmentAnnotation, confidence_from_tier};
use crate::core::vocabulary::{Dimension, MATH_TOPICS, SubtagKeywords, is_math_topic, math_topics};
use crate::error::Result;
use crate::infra::store::CatalogStore;

/// Produces an annotation for one segment's text.
pub trait Tagger {
    fn tag(&self, content: &str, tier: Tier) -> SegmentAnnotation;

    fn name(&self) -> &'static str;
}

/// Lower-cased keyword table: (key, keywords).
type KeywordTable = Vec<(&'static str, Vec<String>)>;

fn lowered(table: &'static [SubtagKeywords]) -> KeywordTable {
    table
        .iter()
        .map(|e| (e.subtag, e.keywords.iter().map(|k| k.to_lowercase()).collect()))
        .collect()
}

static DIMENSION_KEYWORDS: LazyLock<Vec<(Dimension, KeywordTable)>> = LazyLock::new(|| {
    Dimension::ALL
        .iter()
        .map(|&dim| (dim, lowered(dim.subtag_table())))
        .collect()
});

static TOPIC_KEYWORDS: LazyLock<KeywordTable> = LazyLock::new(|| lowered(MATH_TOPICS));

/// Keys whose keyword list has at least one substring hit, in table order.
fn hits(table: &KeywordTable, haystack: &str) -> Vec<String> {
    table
        .iter()
        .filter(|(_, keywords)| keywords.iter().any(|kw| haystack.contains(kw.as_str())))
        .map(|(key, _)| key.to_string())
        .collect()
}

/// Case-insensitive substring matching against the bilingual keyword tables.
#[derive(Debug, Clone, Copy, Default)]
pub struct RuleBasedTagger;

impl RuleBasedTagger {
    pub fn new() -> Self {
        Self
    }
}

impl Tagger for RuleBasedTagger {
    fn tag(&self, content: &str, tier: Tier) -> SegmentAnnotation {
        let text = content.to_lowercase();

        let mut dimensions = Vec::new();
        let mut subtags = IndexMap::new();
        for (dim, table) in DIMENSION_KEYWORDS.iter() {
            let found = hits(table, &text);
            if !found.is_empty() {
                dimensions.push(*dim);
                subtags.insert(*dim, found);
            }
        }

        let psych_state = subtags
            .get(&Dimension::PsychologicalLandscape)
            .map(|tags: &Vec<String>| psych_state(tags))
            .unwrap_or_default()
            .to_string();

        SegmentAnnotation {
            segment_id: 0,
            dimensions,
            subtags,
            math_topics: hits(&TOPIC_KEYWORDS, &text),
            psych_state,
            confidence: confidence_from_tier(tier),
            contradiction_flag: false,
            contradiction_ref: None,
            notes: "rule-based tagging".to_string(),
            reviewer: "auto".to_string(),
        }
    }

    fn name(&self) -> &'static str {
        "rule"
    }
}

fn psych_state(tags: &[String]) -> &'static str {
    let has = |t: &str| tags.iter().any(|s| s == t);
    if has("depressive_episode") {
        "depressive episode indicated"
    } else if has("hospitalization") {
        "hospitalization period"
    } else if has("productive_period") {
        "productive period"
    } else {
        "psychological content present"
    }
}

/// A remote service that returns a JSON classification for a segment.
pub trait ClassificationClient {
    fn classify(&self, system_prompt: &str, content: &str) -> Result<String>;
}

impl<F> ClassificationClient for F
where
    F: Fn(&str, &str) -> Result<String>,
{
    fn classify(&self, system_prompt: &str, content: &str) -> Result<String> {
        self(system_prompt, content)
    }
}

/// System instruction for assisted classification, listing every valid value.
pub fn classification_prompt() -> String {
    let mut prompt = String::from(
        "You are an expert annotator for historical texts about Georg Cantor and his mathematics.\n\
         Classify the following text segment along these five dimensions. For each dimension\n\
         that applies, list the relevant subtags.\n\nDimensions and valid subtags:\n",
    );
    for dim in Dimension::ALL {
        let tags: Vec<&str> = dim.subtags().collect();
        let _ = writeln!(prompt, "  {dim}: {}", tags.join(", "));
    }
    let topics: Vec<&str> = math_topics().collect();
    let _ = write!(
        prompt,
        "\nValid math_topics:\n  {}\n\n\
         Respond with a JSON object:\n\
         {{\n  \"dimensions\": [\"dimension_value\", ...],\n  \
         \"subtags\": {{\"dimension_value\": [\"subtag\", ...], ...}},\n  \
         \"math_topics\": [\"topic\", ...],\n  \
         \"psych_state\": \"free text describing psychological state or empty string\",\n  \
         \"contradiction_flag\": false,\n  \"notes\": \"\"\n}}\n\
         Only use values from the lists above. If a dimension does not apply, omit it.",
        topics.join(", ")
    );
    prompt
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawClassification {
    dimensions: Vec<String>,
    subtags: IndexMap<String, Vec<String>>,
    math_topics: Vec<String>,
    psych_state: String,
    contradiction_flag: bool,
    contradiction_ref: Option<i64>,
    notes: String,
}

/// Decode a classifier reply. Unknown dimensions, subtags and topics are dropped.
pub fn parse_classification(raw: &str, tier: Tier) -> Result<SegmentAnnotation> {
    let data: RawClassification = serde_json::from_str(raw)?;

    let dimensions = data
        .dimensions
        .iter()
        .filter_map(|d| d.parse::<Dimension>().ok())
        .collect();

    let subtags = data
        .subtags
        .into_iter()
        .filter_map(|(key, tags)| {
            let dim = key.parse::<Dimension>().ok()?;
            let valid = tags.into_iter().filter(|t| dim.allows_subtag(t)).collect();
            Some((dim, valid))
        })
        .collect();

    Ok(SegmentAnnotation {
        segment_id: 0,
        dimensions,
        subtags,
        math_topics: data.math_topics.into_iter().filter(|t| is_math_topic(t)).collect(),
        psych_state: data.psych_state,
        confidence: confidence_from_tier(tier),
        contradiction_flag: data.contradiction_flag,
        contradiction_ref: data.contradiction_ref,
        notes: data.notes,
        reviewer: "auto".to_string(),
    })
}

/// Classifier-backed tagger that falls back to the keyword rules on any failure.
pub struct AssistedTagger<C> {
    client: C,
    system_prompt: String,
    fallback: RuleBasedTagger,
}

impl<C: ClassificationClient> AssistedTagger<C> {
    pub fn new(client: C) -> Self {
        Self {
            client,
            system_prompt: classification_prompt(),
            fallback: RuleBasedTagger,
        }
    }

    fn try_tag(&self, content: &str, tier: Tier) -> Result<SegmentAnnotation> {
        let raw = self.client.classify(&self.system_prompt, content)?;
        parse_classification(&raw, tier)
    }
}

impl<C: ClassificationClient> Tagger for AssistedTagger<C> {
    fn tag(&self, content: &str, tier: Tier) -> SegmentAnnotation {
        self.try_tag(content, tier).unwrap_or_else(|e| {
            warn!(error = %e, "assisted tagging failed, falling back to rules");
            self.fallback.tag(content, tier)
        })
    }

    fn name(&self) -> &'static str {
        "assisted"
    }
}

/// Outcome of a batch tagging run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TagSummary {
    pub tagged: usize,
    pub dropped: usize,
    pub rows: usize,
}

pub fn tag_all_segments(store: &mut impl CatalogStore, tagger: &dyn Tagger) -> Result<TagSummary> {
    tag_all_segments_with_progress(store, tagger, &ProgressBar::hidden())
}

/// Tag every segment that has no annotation yet.
///
/// Invalid annotations are logged and skipped. Each valid annotation is
/// written in its own transaction; a storage failure aborts the run.
#[instrument(skip_all, fields(tagger = tagger.name()))]
pub fn tag_all_segments_with_progress(
    store: &mut impl CatalogStore,
    tagger: &dyn Tagger,
    progress: &ProgressBar,
) -> Result<TagSummary> {
    let queue = store.tagging_queue()?;
    progress.set_length(queue.len() as u64);

    let mut summary = TagSummary::default();
    for pending in queue {
        let mut ann = tagger.tag(&pending.content, pending.tier);
        ann.segment_id = pending.id;
        progress.inc(1);

        let errors = ann.validate();
        if !errors.is_empty() {
            warn!(segment = pending.id, errors = ?errors, "dropping invalid annotation");
            summary.dropped += 1;
            continue;
        }

        summary.rows += store.save_annotation(&ann)?;
        summary.tagged += 1;
        debug!(segment = pending.id, dimensions = ann.dimensions.len(), "tagged");
    }

    progress.finish_and_clear();
    info!(tagged = summary.tagged, dropped = summary.dropped, "tagging complete");
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::model::{Segment, SegmentType, Source, SourceFormat};
    use crate::error::CorpusError;
    use crate::infra::store::SqliteStore;

    #[test]
    fn keywords_match_case_insensitively_in_both_languages() {
        let ann = RuleBasedTagger.tag(
            "Das DIAGONALVERFAHREN zeigt, dass die Menge überabzählbar ist. Kronecker spricht von den ganzen Zahlen.",
            1,
        );

        assert_eq!(
            ann.dimensions,
            vec![Dimension::MathematicalIntuition, Dimension::KroneckerConflict]
        );
        assert!(ann.subtags_for(Dimension::MathematicalIntuition).contains(&"diagonal_argument".to_string()));
        assert!(ann.math_topics.contains(&"diagonal_argument".to_string()));
        assert!(ann.math_topics.contains(&"uncountability".to_string()));
        assert_eq!(ann.confidence, 0.95);
        assert_eq!(ann.notes, "rule-based tagging");
        assert!(ann.validate().is_empty());
    }

    #[test]
    fn psych_state_follows_priority() {
        let depressed = RuleBasedTagger.tag("a productive year ended in melancholy at the clinic", 5);
        assert_eq!(depressed.psych_state, "depressive episode indicated");

        let hospital = RuleBasedTagger.tag("after a productive winter he entered the sanatorium", 5);
        assert_eq!(hospital.psych_state, "hospitalization period");

        let productive = RuleBasedTagger.tag("an enormously productive summer", 5);
        assert_eq!(productive.psych_state, "productive period");

        let generic = RuleBasedTagger.tag("he read Shakespeare every evening", 5);
        assert_eq!(generic.psych_state, "psychological content present");

        let none = RuleBasedTagger.tag("a list of integrals", 5);
        assert!(none.psych_state.is_empty());
        assert!(none.dimensions.is_empty());
    }

    #[test]
    fn classifier_reply_drops_unknown_values() {
        let raw = r#"{
            "dimensions": ["theological_framework", "astrology"],
            "subtags": {
                "theological_framework": ["absolutum", "absolute_infinite", "made_up"],
                "astrology": ["stars"]
            },
            "math_topics": ["aleph_numbers", "category_theory"],
            "psych_state": ""
        }"#;
        let ann = parse_classification(raw, 4).unwrap();

        assert_eq!(ann.dimensions, vec![Dimension::TheologicalFramework]);
        assert_eq!(ann.subtags.len(), 1);
        // absolute_infinite is a math topic, not a theological subtag.
        assert_eq!(ann.subtags_for(Dimension::TheologicalFramework), ["absolutum"]);
        assert!(!ann.subtags_for(Dimension::TheologicalFramework).contains(&"absolute_infinite".to_string()));
        assert_eq!(ann.math_topics, vec!["aleph_numbers"]);
        assert_eq!(ann.confidence, 0.65);
    }

    #[test]
    fn assisted_tagger_uses_classifier_reply() {
        let client = |_: &str, _: &str| -> Result<String> {
            Ok(r#"{"dimensions": ["personal_context"], "subtags": {"personal_context": ["icm"]}}"#
                .to_string())
        };
        let ann = AssistedTagger::new(client).tag("irrelevant", 2);
        assert_eq!(ann.dimensions, vec![Dimension::PersonalContext]);
    }

    #[test]
    fn assisted_tagger_falls_back_on_failure() {
        let text = "Kronecker und die ganzen Zahlen";
        let failing =
            |_: &str, _: &str| -> Result<String> { Err(CorpusError::Classification("offline".into())) };
        let garbled = |_: &str, _: &str| -> Result<String> { Ok("not json".to_string()) };

        let expected = RuleBasedTagger.tag(text, 3);
        assert_eq!(AssistedTagger::new(failing).tag(text, 3), expected);
        assert_eq!(AssistedTagger::new(garbled).tag(text, 3), expected);
    }

    #[test]
    fn prompt_lists_every_vocabulary() {
        let prompt = classification_prompt();
        for dim in Dimension::ALL {
            assert!(prompt.contains(dim.as_str()));
        }
        assert!(prompt.contains("continuum_hypothesis"));
        assert!(prompt.contains("JSON object"));
    }

    #[test]
    fn batch_driver_skips_invalid_and_already_tagged() {
        // Given three segments, one already annotated
        let mut store = SqliteStore::open_in_memory().unwrap();
        let src = store
            .add_sources(&[Source::new("Briefe", 2, SourceFormat::Collection)])
            .unwrap()[0];
        let segs: Vec<Segment> = ["Dedekind in Halle", "Kronecker lobt die ganzen Zahlen", "nothing here"]
            .iter()
            .enumerate()
            .map(|(i, text)| {
                let mut s = Segment::new(SegmentType::Letter, format!("#{i}"), *text, i as u32);
                s.source_id = src;
                s
            })
            .collect();
        let ids = store.insert_segments(&segs).unwrap();
        store
            .save_annotation(&SegmentAnnotation {
                segment_id: ids[0],
                dimensions: vec![Dimension::PersonalContext],
                confidence: 0.85,
                ..Default::default()
            })
            .unwrap();

        // When
        let summary = tag_all_segments(&mut store, &RuleBasedTagger).unwrap();

        // Then the keyword-free segment is dropped for having no dimension
        assert_eq!(summary.tagged, 1);
        assert_eq!(summary.dropped, 1);
        assert_eq!(store.annotations_for(ids[0]).unwrap().len(), 1);
        assert_eq!(
            store.annotations_for(ids[1]).unwrap()[0].dimension,
            Dimension::KroneckerConflict
        );
        assert!(store.annotations_for(ids[2]).unwrap().is_empty());
    }
}
