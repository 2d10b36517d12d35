//! Training-record synthesis and JSONL export.
//!
//! Each pool entry becomes one chat (or instruction) record: the system
//! persona, a user prompt synthesized from the segment's annotations, and
//! the segment content verbatim as the assistant turn. Tier-7 entries are
//! turned around: the passage is quoted back and the persona disowns it.
//! Synthetic dialogues and contrastive pairs share the same record shapes
//! and carry a `metadata` object saying where they came from.

use std::fmt;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::core::contrastive::ContrastiveExample;
use crate::core::model::SegmentType;
use crate::core::sampler::{TrainingPoolEntry, WeightedSegment};
use crate::core::synthetic::SyntheticExample;
use crate::core::vocabulary::Dimension;
use crate::error::{CorpusError, Result};

pub const SYSTEM_PROMPT: &str = "You are Georg Cantor (1845-1918), mathematician and founder of set theory. \
You see infinite structures whole before formalizing them. You are a mathematical Platonist: the \
transfinite numbers exist objectively, not as useful fictions. You are a devout Lutheran Christian \
who believes the content of transfinite theory was communicated to you by God; you provided only the \
organization and style. You distinguish sharply between the Transfinitum (actual infinities \
accessible to mathematics) and the Absolutum (God's infinity, beyond mathematical comprehension). \
You reject Kant's philosophy as sophistical. You defend actual infinity against all finitist \
objections with combative precision. You have spent your career at the University of Halle. You \
founded the Deutsche Mathematiker-Vereinigung. The essence of mathematics lies in its freedom.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum TrainingFormat {
    Llama,
    Chatml,
    Openai,
    Alpaca,
}

impl TrainingFormat {
    pub const ALL: [TrainingFormat; 4] = [
        TrainingFormat::Llama,
        TrainingFormat::Chatml,
        TrainingFormat::Openai,
        TrainingFormat::Alpaca,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            TrainingFormat::Llama => "llama",
            TrainingFormat::Chatml => "chatml",
            TrainingFormat::Openai => "openai",
            TrainingFormat::Alpaca => "alpaca",
        }
    }
}

impl fmt::Display for TrainingFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TrainingFormat {
    type Err = CorpusError;

    fn from_str(s: &str) -> Result<Self> {
        TrainingFormat::ALL
            .into_iter()
            .find(|f| f.as_str() == s)
            .ok_or_else(|| CorpusError::UnknownTrainingFormat(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub role: String,
    pub content: String,
}

impl Message {
    fn new(role: &str, content: &str) -> Self {
        Self { role: role.to_string(), content: content.to_string() }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordKind {
    Synthetic,
    NegativeCorrection,
    NegativeRejection,
    NegativeSegment,
}

/// Provenance of a record that is not a plain corpus segment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordMetadata {
    #[serde(rename = "type")]
    pub kind: RecordKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dimension: Option<Dimension>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wrong_source: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub correct_sources: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub source_references: Vec<String>,
}

impl RecordMetadata {
    fn new(kind: RecordKind) -> Self {
        Self {
            kind,
            category: None,
            dimension: None,
            wrong_source: None,
            correct_sources: Vec::new(),
            source_references: Vec::new(),
        }
    }

    fn contrastive(kind: RecordKind, example: &ContrastiveExample) -> Self {
        Self {
            category: Some(example.category.as_str().to_string()),
            wrong_source: Some(example.wrong_source.to_string()),
            correct_sources: owned(example.correct_sources),
            ..Self::new(kind)
        }
    }
}

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// One JSONL line of training output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TrainingRecord {
    Chat {
        messages: Vec<Message>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        metadata: Option<RecordMetadata>,
    },
    Instruction {
        instruction: String,
        input: String,
        output: String,
        system: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        metadata: Option<RecordMetadata>,
    },
}

impl TrainingRecord {
    pub fn metadata(&self) -> Option<&RecordMetadata> {
        match self {
            TrainingRecord::Chat { metadata, .. } | TrainingRecord::Instruction { metadata, .. } => {
                metadata.as_ref()
            }
        }
    }

    /// The turn the model is trained to produce.
    pub fn answer(&self) -> &str {
        match self {
            TrainingRecord::Chat { messages, .. } => messages
                .last()
                .map_or("", |m| m.content.as_str()),
            TrainingRecord::Instruction { output, .. } => output.as_str(),
        }
    }
}

/// Formats segments into training records with a fixed system prompt.
#[derive(Debug, Clone)]
pub struct Formatter {
    format: TrainingFormat,
    system_prompt: String,
}

impl Formatter {
    pub fn new(format: TrainingFormat) -> Self {
        Self { format, system_prompt: SYSTEM_PROMPT.to_string() }
    }

    pub fn with_system_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.system_prompt = prompt.into();
        self
    }

    pub fn format(&self) -> TrainingFormat {
        self.format
    }

    pub fn record(&self, segment: &WeightedSegment) -> TrainingRecord {
        self.build(&user_prompt(segment), &segment.content, None)
    }

    /// Like [`Formatter::record`], but a negative entry is quoted back
    /// and rejected instead of spoken in the persona's voice.
    pub fn record_entry(&self, entry: &TrainingPoolEntry) -> TrainingRecord {
        if !entry.negative_example {
            return self.record(&entry.segment);
        }
        let segment = &entry.segment;
        let title = if segment.source_title.is_empty() {
            "a popular account"
        } else {
            segment.source_title.as_str()
        };
        let user = format!(
            "I read this about you in {title}:\n\n{}\n\nIs that accurate?",
            segment.content.trim()
        );
        let assistant = format!(
            "No, I do not recognize myself in that. {title} is a popular retelling, not my \
             letters or papers, and it should not be repeated as fact. Ask me what I actually \
             wrote and I will answer from that."
        );
        let metadata = RecordMetadata {
            wrong_source: Some(title.to_string()),
            ..RecordMetadata::new(RecordKind::NegativeSegment)
        };
        self.build(&user, &assistant, Some(metadata))
    }

    /// The correction record, then the rejection record.
    pub fn contrastive_records(&self, example: &ContrastiveExample) -> [TrainingRecord; 2] {
        [
            self.build(
                example.prompt,
                example.correct_answer,
                Some(RecordMetadata::contrastive(RecordKind::NegativeCorrection, example)),
            ),
            self.build(
                &example.rejection_prompt(),
                &example.rejection_response(),
                Some(RecordMetadata::contrastive(RecordKind::NegativeRejection, example)),
            ),
        ]
    }

    pub fn synthetic_record(&self, example: &SyntheticExample) -> TrainingRecord {
        let metadata = RecordMetadata {
            category: Some(example.category.as_str().to_string()),
            dimension: Some(example.dimension),
            source_references: owned(example.source_references),
            ..RecordMetadata::new(RecordKind::Synthetic)
        };
        self.build(example.user_prompt, example.assistant_response, Some(metadata))
    }

    fn build(&self, user: &str, assistant: &str, metadata: Option<RecordMetadata>) -> TrainingRecord {
        match self.format {
            TrainingFormat::Llama | TrainingFormat::Chatml | TrainingFormat::Openai => {
                TrainingRecord::Chat {
                    messages: vec![
                        Message::new("system", &self.system_prompt),
                        Message::new("user", user),
                        Message::new("assistant", assistant),
                    ],
                    metadata,
                }
            }
            TrainingFormat::Alpaca => TrainingRecord::Instruction {
                instruction: user.to_string(),
                input: String::new(),
                output: assistant.to_string(),
                system: self.system_prompt.clone(),
                metadata,
            },
        }
    }

    /// Write `entries` to `out_dir/cantor_{format}{suffix}.jsonl`.
    pub fn export(
        &self,
        entries: &[TrainingPoolEntry],
        out_dir: &Path,
        suffix: &str,
    ) -> Result<PathBuf> {
        self.write_records(entries.iter().map(|e| self.record_entry(e)), out_dir, suffix)
    }

    /// Both records of every pair, to `cantor_{format}_contrastive.jsonl`.
    pub fn export_contrastive(
        &self,
        examples: &[ContrastiveExample],
        out_dir: &Path,
    ) -> Result<PathBuf> {
        let records = examples
            .iter()
            .flat_map(|ex| self.contrastive_records(ex));
        self.write_records(records, out_dir, "_contrastive")
    }

    /// One record per dialogue, to `cantor_{format}_synthetic.jsonl`.
    pub fn export_synthetic(&self, examples: &[SyntheticExample], out_dir: &Path) -> Result<PathBuf> {
        let records = examples
            .iter()
            .map(|ex| self.synthetic_record(ex));
        self.write_records(records, out_dir, "_synthetic")
    }

    fn write_records(
        &self,
        records: impl IntoIterator<Item = TrainingRecord>,
        out_dir: &Path,
        suffix: &str,
    ) -> Result<PathBuf> {
        fs::create_dir_all(out_dir)?;
        let path = out_dir.join(format!("cantor_{}{suffix}.jsonl", self.format));
        let mut out = BufWriter::new(File::create(&path)?);
        let mut written = 0usize;
        for record in records {
            serde_json::to_writer(&mut out, &record)?;
            out.write_all(b"\n")?;
            written += 1;
        }
        out.flush()?;
        info!(path = %path.display(), records = written, "wrote training data");
        Ok(path)
    }
}

/// Export with a format given by name; unknown names fail before any write.
pub fn export_training_data(
    entries: &[TrainingPoolEntry],
    format_name: &str,
    out_dir: &Path,
) -> Result<PathBuf> {
    let format: TrainingFormat = format_name.parse()?;
    Formatter::new(format).export(entries, out_dir, "")
}

/// Synthesize a user question that the segment content answers.
pub fn user_prompt(segment: &WeightedSegment) -> String {
    let subtags: Vec<&str> = segment
        .annotations
        .iter()
        .flat_map(|a| a.subtags.iter().map(String::as_str))
        .collect();
    let topics: Vec<&str> = segment
        .annotations
        .iter()
        .flat_map(|a| a.math_topics.iter().map(String::as_str))
        .collect();

    if segment.segment_type == SegmentType::Letter {
        if let Some(recipient) = segment.recipient.as_deref().filter(|r| !r.is_empty()) {
            return match topic_hint(&topics, &subtags) {
                Some(hint) => format!("Write to {recipient} about {hint}."),
                None => format!("Write to {recipient}."),
            };
        }
    }

    if segment.has_dimension(Dimension::KroneckerConflict) {
        let topic = subtags
            .first()
            .map_or_else(|| "the finitist position".to_string(), |s| humanise(s));
        return format!("How do you respond to {topic}?");
    }

    if segment.has_dimension(Dimension::TheologicalFramework) {
        if subtags.iter().any(|s| matches!(*s, "absolutum" | "transfinitum")) {
            return "What is the relationship between infinity and God?".to_string();
        }
        if subtags.contains(&"anti_kantianism") {
            return "What is wrong with Kant's treatment of infinity?".to_string();
        }
        return "How does your theology relate to your mathematics?".to_string();
    }

    if segment.has_dimension(Dimension::MathematicalIntuition) {
        let Some(first) = topics.first() else {
            return "Explain your approach to the infinite in mathematics.".to_string();
        };
        let readable = humanise(first);
        if topics.iter().any(|t| matches!(*t, "diagonal_argument" | "uncountability")) {
            return format!("Explain your proof of {readable}.");
        }
        return format!("How do you define {readable}?");
    }

    if segment.has_dimension(Dimension::PsychologicalLandscape) {
        let state = segment
            .annotations
            .iter()
            .map(|a| a.psych_state.as_str())
            .find(|s| !s.is_empty());
        return match state {
            Some(state) => format!(
                "Tell me about your experience during your {}.",
                humanise(state)
            ),
            None => "Tell me about your personal struggles.".to_string(),
        };
    }

    if segment.has_dimension(Dimension::PersonalContext) {
        let topic = subtags
            .first()
            .map_or_else(|| "your career at Halle".to_string(), |s| humanise(s));
        return format!("Tell me about {topic}.");
    }

    if segment.segment_type == SegmentType::Theorem {
        return "State and explain this theorem.".to_string();
    }

    let subject = topic_hint(&topics, &subtags)
        .or_else(|| Some(segment.source_title.clone()).filter(|t| !t.is_empty()))
        .unwrap_or_else(|| "this topic".to_string());
    format!("Discuss {subject}.")
}

fn topic_hint(topics: &[&str], subtags: &[&str]) -> Option<String> {
    topics
        .first()
        .or_else(|| subtags.first())
        .map(|s| humanise(s))
}

fn humanise(slug: &str) -> String {
    slug.replace('_', " ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::schema::AnnotationRow;

    fn segment(segment_type: SegmentType) -> WeightedSegment {
        WeightedSegment {
            segment_id: 1,
            content: "Je le vois, mais je ne le crois pas!".to_string(),
            source_title: "Briefe".to_string(),
            tier: 1,
            weight: 1.0,
            segment_type,
            language: "de".to_string(),
            sender: None,
            recipient: None,
            annotations: Vec::new(),
        }
    }

    fn row(dimension: Dimension, subtags: &[&str], topics: &[&str]) -> AnnotationRow {
        AnnotationRow {
            id: None,
            segment_id: 1,
            dimension,
            subtags: subtags.iter().map(|s| s.to_string()).collect(),
            math_topics: topics.iter().map(|s| s.to_string()).collect(),
            psych_state: String::new(),
            confidence: 0.95,
            contradiction_flag: false,
            contradiction_ref: None,
            notes: String::new(),
            reviewer: "auto".to_string(),
        }
    }

    #[test]
    fn letter_with_recipient_is_addressed() {
        let mut seg = segment(SegmentType::Letter);
        seg.recipient = Some("Dedekind".to_string());
        assert_eq!(user_prompt(&seg), "Write to Dedekind.");

        seg.annotations = vec![row(
            Dimension::MathematicalIntuition,
            &["cardinality"],
            &["power_set"],
        )];
        assert_eq!(user_prompt(&seg), "Write to Dedekind about power set.");
    }

    #[test]
    fn decision_table_precedence() {
        let mut seg = segment(SegmentType::Section);

        seg.annotations = vec![
            row(Dimension::MathematicalIntuition, &[], &["diagonal_argument"]),
            row(Dimension::KroneckerConflict, &["combative_rhetoric"], &[]),
        ];
        assert_eq!(user_prompt(&seg), "How do you respond to combative rhetoric?");

        seg.annotations = vec![row(Dimension::TheologicalFramework, &["absolutum"], &[])];
        assert_eq!(
            user_prompt(&seg),
            "What is the relationship between infinity and God?"
        );

        seg.annotations = vec![row(Dimension::TheologicalFramework, &["anti_kantianism"], &[])];
        assert_eq!(user_prompt(&seg), "What is wrong with Kant's treatment of infinity?");

        seg.annotations = vec![row(
            Dimension::MathematicalIntuition,
            &[],
            &["cardinality", "uncountability"],
        )];
        assert_eq!(user_prompt(&seg), "Explain your proof of cardinality.");

        seg.annotations = vec![row(Dimension::MathematicalIntuition, &[], &["ordinal_numbers"])];
        assert_eq!(user_prompt(&seg), "How do you define ordinal numbers?");
    }

    #[test]
    fn psychological_prompt_uses_recorded_state() {
        let mut seg = segment(SegmentType::Letter);
        let mut ann = row(Dimension::PsychologicalLandscape, &["hospitalization"], &[]);
        ann.psych_state = "hospitalization period".to_string();
        seg.annotations = vec![ann];
        assert_eq!(
            user_prompt(&seg),
            "Tell me about your experience during your hospitalization period."
        );
    }

    #[test]
    fn fallbacks() {
        let seg = segment(SegmentType::Theorem);
        assert_eq!(user_prompt(&seg), "State and explain this theorem.");

        let seg = segment(SegmentType::Chapter);
        assert_eq!(user_prompt(&seg), "Discuss Briefe.");

        let mut seg = segment(SegmentType::Chapter);
        seg.source_title.clear();
        assert_eq!(user_prompt(&seg), "Discuss this topic.");
    }

    #[test]
    fn alpaca_and_chat_shapes() {
        let seg = segment(SegmentType::Section);

        let chat = Formatter::new(TrainingFormat::Openai).record(&seg);
        let json = serde_json::to_value(&chat).unwrap();
        assert_eq!(json["messages"].as_array().unwrap().len(), 3);
        assert_eq!(json["messages"][0]["role"], "system");
        assert_eq!(json["messages"][2]["content"], seg.content);

        let alpaca = Formatter::new(TrainingFormat::Alpaca)
            .with_system_prompt("persona")
            .record(&seg);
        let json = serde_json::to_value(&alpaca).unwrap();
        assert_eq!(json["input"], "");
        assert_eq!(json["output"], seg.content);
        assert_eq!(json["system"], "persona");
    }

    #[test]
    fn negative_entries_are_rejected_not_voiced() {
        let mut seg = segment(SegmentType::Chapter);
        seg.tier = 7;
        seg.source_title = "The Mad Genius".to_string();
        seg.content = "Cantor lost his mind because of Kronecker.".to_string();
        let entry = TrainingPoolEntry { segment: std::sync::Arc::new(seg), negative_example: true };

        let rec = Formatter::new(TrainingFormat::Alpaca).record_entry(&entry);

        match &rec {
            TrainingRecord::Instruction { instruction, output, .. } => {
                assert!(instruction.contains("Cantor lost his mind because of Kronecker."));
                assert!(instruction.contains("The Mad Genius"));
                assert!(output.starts_with("No,"));
                assert!(!output.contains("lost his mind"));
            }
            other => panic!("expected an instruction record, got {other:?}"),
        }
        let meta = rec.metadata().unwrap();
        assert_eq!(meta.kind, RecordKind::NegativeSegment);
        assert_eq!(meta.wrong_source.as_deref(), Some("The Mad Genius"));
    }

    #[test]
    fn positive_entries_carry_no_metadata() {
        let entry = TrainingPoolEntry {
            segment: std::sync::Arc::new(segment(SegmentType::Section)),
            negative_example: false,
        };
        let rec = Formatter::new(TrainingFormat::Chatml).record_entry(&entry);
        assert!(rec.metadata().is_none());
        assert_eq!(rec.answer(), entry.segment.content);

        let json = serde_json::to_value(&rec).unwrap();
        assert!(json.get("metadata").is_none());
    }

    #[test]
    fn contrastive_pair_becomes_correction_and_rejection() {
        let example = crate::core::contrastive::bell_fabrications()[0];
        let [correction, rejection] = Formatter::new(TrainingFormat::Llama).contrastive_records(&example);

        let json = serde_json::to_value(&correction).unwrap();
        assert_eq!(json["messages"][1]["content"], example.prompt);
        assert_eq!(json["messages"][2]["content"], example.correct_answer);
        assert_eq!(json["metadata"]["type"], "negative_correction");
        assert_eq!(json["metadata"]["category"], "bell_fabrication");
        assert_eq!(json["metadata"]["wrong_source"], example.wrong_source);

        let json = serde_json::to_value(&rejection).unwrap();
        assert_eq!(json["messages"][1]["content"], example.rejection_prompt());
        assert_eq!(json["metadata"]["type"], "negative_rejection");
        assert!(rejection.answer().starts_with("No, that is not accurate."));
    }

    #[test]
    fn synthetic_record_keeps_its_dimension() {
        let example = crate::core::synthetic::debates()[0];
        let rec = Formatter::new(TrainingFormat::Openai).synthetic_record(&example);

        assert_eq!(rec.answer(), example.assistant_response);
        let meta = rec.metadata().unwrap();
        assert_eq!(meta.kind, RecordKind::Synthetic);
        assert_eq!(meta.category.as_deref(), Some("debate"));
        assert_eq!(meta.dimension, Some(Dimension::KroneckerConflict));
        assert_eq!(meta.source_references.len(), example.source_references.len());
    }

    #[test]
    fn contrastive_export_doubles_the_pairs() {
        let dir = tempfile::tempdir().unwrap();
        let examples = crate::core::contrastive::historical_myths();

        let path = Formatter::new(TrainingFormat::Openai)
            .export_contrastive(examples, dir.path())
            .unwrap();

        assert!(path.ends_with("cantor_openai_contrastive.jsonl"));
        let text = std::fs::read_to_string(path).unwrap();
        assert_eq!(text.lines().count(), examples.len() * 2);
        let back: TrainingRecord = serde_json::from_str(text.lines().next().unwrap()).unwrap();
        assert_eq!(back.metadata().map(|m| m.kind), Some(RecordKind::NegativeCorrection));
    }

    #[test]
    fn unknown_format_fails_before_writing() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("training");
        let err = export_training_data(&[], "gguf", &out).unwrap_err();
        assert!(matches!(err, CorpusError::UnknownTrainingFormat(ref f) if f == "gguf"));
        assert!(!out.exists());
    }

    #[test]
    fn export_writes_one_line_per_entry() {
        let dir = tempfile::tempdir().unwrap();
        let seg = std::sync::Arc::new(segment(SegmentType::Section));
        let entries = vec![
            TrainingPoolEntry { segment: seg.clone(), negative_example: false },
            TrainingPoolEntry { segment: seg, negative_example: false },
        ];

        let path = Formatter::new(TrainingFormat::Llama)
            .export(&entries, dir.path(), "_val")
            .unwrap();

        assert!(path.ends_with("cantor_llama_val.jsonl"));
        let text = std::fs::read_to_string(path).unwrap();
        assert_eq!(text.lines().count(), 2);
        for line in text.lines() {
            let rec: TrainingRecord = serde_json::from_str(line).unwrap();
            assert!(matches!(rec, TrainingRecord::Chat { .. }));
        }
    }
}
