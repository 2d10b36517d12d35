//! Segmentation engine: splits raw source text into letters, sections,
//! theorems and chapters.
//!
//! Segmentation never fails. Missing structural markers degrade to a single
//! whole-document segment; whitespace-only chunks are dropped. Orderings
//! start at 0 and increase with document position.

use std::sync::LazyLock;

use regex::Regex;
use tracing::{debug, info};

use crate::core::model::{Segment, SegmentType, SourceFormat};

const DE_MONTHS: &str =
    "Januar|Februar|März|April|Mai|Juni|Juli|August|September|Oktober|November|Dezember";

static DATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"(?i)(?:den\s+)?\d{{1,2}}\.\s*(?:{DE_MONTHS})\s+\d{{4}}"
    ))
    .expect("date pattern compiles")
});

static SALUTATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?im)^\s*(?:Lieber|Liebster|Hochgeehrter\s+Herr|Sehr\s+geehrter|Verehrter|Dear\s+(?:Sir|Mr|Professor|Dr|Friend))",
    )
    .expect("salutation pattern compiles")
});

static CLOSING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)(?:Ihr\s+ergebener|Ihr\s+ergebenster|Hochachtungsvoll|Mit\s+(?:herzlichem|freundlichem)\s+Gru[ßs]s?|Yours\s+(?:truly|sincerely|faithfully))",
    )
    .expect("closing pattern compiles")
});

static SECTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^\s*(?:§\s*\d+|Abschnitt\s+\w+|Section\s+\d+|\d+\.\s+[A-Z])")
        .expect("section pattern compiles")
});

static THEOREM: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?im)^\s*(?:Satz|Theorem|Lemma|Korollar|Corollary|Definition|Beweis|Proof|Proposition)\b[.\s:]",
    )
    .expect("theorem pattern compiles")
});

static CHAPTER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?im)^\s*(?:Chapter|Kapitel)\s+(?:\d+|[IVXLCDM]+)")
        .expect("chapter pattern compiles")
});

// Name following a salutation, kept on the salutation's line.
static RECIPIENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*([A-ZÄÖÜa-zäöüß\-]+(?:[ \t]+[A-ZÄÖÜa-zäöüß\-]+)?)")
        .expect("recipient pattern compiles")
});

/// Characters before a salutation searched for a date or closing phrase.
const BOUNDARY_LOOKBACK: usize = 200;
const DATE_SCAN: usize = 500;
const SALUTATION_SCAN: usize = 300;
const RECIPIENT_SCAN: usize = 80;

/// Splitting strategy selected from a format hint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Splitter {
    Letter,
    Paper,
    Chapter,
}

impl Splitter {
    pub fn for_format(format: SourceFormat) -> Self {
        match format {
            SourceFormat::Letter | SourceFormat::Collection => Splitter::Letter,
            SourceFormat::Book | SourceFormat::Biography => Splitter::Chapter,
            SourceFormat::Paper
            | SourceFormat::Article
            | SourceFormat::Web
            | SourceFormat::Other => Splitter::Paper,
        }
    }

    /// Unknown hints fall back to the paper splitter.
    pub fn for_hint(hint: &str) -> Self {
        hint.trim()
            .to_ascii_lowercase()
            .parse::<SourceFormat>()
            .map(Self::for_format)
            .unwrap_or(Splitter::Paper)
    }
}

/// One turn of an explicit correspondence.
#[derive(Debug, Clone)]
pub struct DialogueTurn {
    pub sender: String,
    pub recipient: String,
    pub content: String,
}

/// Segments text on behalf of one source.
#[derive(Debug, Clone)]
pub struct Segmenter {
    source_id: i64,
    language: String,
}

impl Default for Segmenter {
    fn default() -> Self {
        Self::new(0)
    }
}

/// Segment `text` with the splitter selected by `format_hint`.
pub fn segment(text: &str, format_hint: &str) -> Vec<Segment> {
    Segmenter::default().segment(text, format_hint)
}

impl Segmenter {
    pub fn new(source_id: i64) -> Self {
        Self { source_id, language: "de".to_string() }
    }

    pub fn language(mut self, language: &str) -> Self {
        self.language = language.to_string();
        self
    }

    pub fn segment(&self, text: &str, format_hint: &str) -> Vec<Segment> {
        self.split(text, Splitter::for_hint(format_hint))
    }

    pub fn split(&self, text: &str, splitter: Splitter) -> Vec<Segment> {
        let segments = match splitter {
            Splitter::Letter => self.split_letters(text),
            Splitter::Paper => self.split_paper(text),
            Splitter::Chapter => self.split_chapters(text),
        };
        info!(
            source_id = self.source_id,
            ?splitter,
            count = segments.len(),
            "segmented source"
        );
        segments
    }

    /// Split a correspondence at salutations that open a new letter.
    pub fn split_letters(&self, text: &str) -> Vec<Segment> {
        let mut boundaries: Vec<usize> = SALUTATION
            .find_iter(text)
            .map(|m| m.start())
            .filter(|&start| {
                let preceding = window_before(text, start, BOUNDARY_LOOKBACK);
                start == 0 || DATE.is_match(preceding) || CLOSING.is_match(preceding)
            })
            .collect();

        if boundaries.is_empty() {
            let content = text.trim();
            if content.is_empty() {
                return Vec::new();
            }
            let mut seg = self.make(SegmentType::Letter, "Complete letter", content, 0);
            let meta = LetterMeta::scan(text);
            seg.segment_date = meta.date;
            seg.recipient = meta.recipient;
            return vec![seg];
        }

        if boundaries[0] > 0 {
            boundaries.insert(0, 0);
        }

        let mut segments = Vec::with_capacity(boundaries.len());
        for (idx, &start) in boundaries.iter().enumerate() {
            let end = boundaries.get(idx + 1).copied().unwrap_or(text.len());
            let chunk = text[start..end].trim();
            if chunk.is_empty() {
                continue;
            }

            let ordering = next_ordering(&segments);
            let meta = LetterMeta::scan(chunk);
            let title = meta
                .date
                .clone()
                .unwrap_or_else(|| format!("Letter {}", ordering + 1));
            let mut seg = self.make(SegmentType::Letter, title, chunk, ordering);
            seg.segment_date = meta.date;
            seg.recipient = meta.recipient;
            debug!(ordering, recipient = ?seg.recipient, "letter boundary");
            segments.push(seg);
        }
        segments
    }

    /// Split a paper into sections, and multi-theorem sections into theorems.
    pub fn split_paper(&self, text: &str) -> Vec<Segment> {
        let hits: Vec<usize> = SECTION.find_iter(text).map(|m| m.start()).collect();
        let Some(&first) = hits.first() else {
            return self.whole(SegmentType::Section, "Full paper", text);
        };

        let mut segments = Vec::new();
        let preamble = text[..first].trim();
        if !preamble.is_empty() {
            segments.push(self.make(SegmentType::Section, "Preamble", preamble, 0));
        }

        for (idx, &start) in hits.iter().enumerate() {
            let end = hits.get(idx + 1).copied().unwrap_or(text.len());
            let content = text[start..end].trim();
            if content.is_empty() {
                continue;
            }
            let section_title = first_line(content);

            let theorems: Vec<usize> = THEOREM.find_iter(content).map(|m| m.start()).collect();
            if theorems.len() > 1 {
                for (tidx, &tstart) in theorems.iter().enumerate() {
                    let tend = theorems.get(tidx + 1).copied().unwrap_or(content.len());
                    let body = content[tstart..tend].trim();
                    if body.is_empty() {
                        continue;
                    }
                    let title = format!("{section_title} > {}", first_line(body));
                    let ordering = next_ordering(&segments);
                    segments.push(self.make(SegmentType::Theorem, title, body, ordering));
                }
            } else {
                let ordering = next_ordering(&segments);
                segments.push(self.make(SegmentType::Section, section_title, content, ordering));
            }
        }
        segments
    }

    /// Split a book at chapter headings.
    pub fn split_chapters(&self, text: &str) -> Vec<Segment> {
        let hits: Vec<usize> = CHAPTER.find_iter(text).map(|m| m.start()).collect();
        let Some(&first) = hits.first() else {
            return self.whole(SegmentType::Chapter, "Full text", text);
        };

        let mut segments = Vec::new();
        let front = text[..first].trim();
        if !front.is_empty() {
            segments.push(self.make(SegmentType::Chapter, "Front matter", front, 0));
        }

        for (idx, &start) in hits.iter().enumerate() {
            let end = hits.get(idx + 1).copied().unwrap_or(text.len());
            let content = text[start..end].trim();
            if content.is_empty() {
                continue;
            }
            let ordering = next_ordering(&segments);
            segments.push(self.make(SegmentType::Chapter, first_line(content), content, ordering));
        }
        segments
    }

    /// One dialogue segment per turn, in the given order.
    pub fn dialogue(&self, turns: &[DialogueTurn]) -> Vec<Segment> {
        let mut segments = Vec::with_capacity(turns.len());
        for turn in turns {
            let content = turn.content.trim();
            if content.is_empty() {
                continue;
            }
            let ordering = next_ordering(&segments);
            let title = format!("{} -> {}", turn.sender, turn.recipient);
            let mut seg = self.make(SegmentType::Dialogue, title, content, ordering);
            seg.sender = Some(turn.sender.clone());
            seg.recipient = Some(turn.recipient.clone());
            segments.push(seg);
        }
        segments
    }

    fn whole(&self, segment_type: SegmentType, title: &str, text: &str) -> Vec<Segment> {
        let content = text.trim();
        if content.is_empty() {
            return Vec::new();
        }
        vec![self.make(segment_type, title, content, 0)]
    }

    fn make(
        &self,
        segment_type: SegmentType,
        title: impl Into<String>,
        content: &str,
        ordering: u32,
    ) -> Segment {
        let mut seg = Segment::new(segment_type, title, content, ordering);
        seg.source_id = self.source_id;
        seg.language = self.language.clone();
        seg
    }
}

#[derive(Debug, Default)]
struct LetterMeta {
    date: Option<String>,
    recipient: Option<String>,
}

impl LetterMeta {
    fn scan(letter: &str) -> Self {
        let date = DATE
            .find(head(letter, DATE_SCAN))
            .map(|m| m.as_str().trim().to_string());

        let recipient = SALUTATION
            .find(head(letter, SALUTATION_SCAN))
            .and_then(|m| {
                let after = head(&letter[m.end()..], RECIPIENT_SCAN);
                RECIPIENT.captures(after)
            })
            .and_then(|caps| caps.get(1))
            .map(|name| {
                name.as_str()
                    .trim_matches(|c| matches!(c, ' ' | ',' | '!' | '\n'))
                    .to_string()
            })
            .filter(|name| !name.is_empty());

        Self { date, recipient }
    }
}

fn next_ordering(segments: &[Segment]) -> u32 {
    u32::try_from(segments.len()).unwrap_or(u32::MAX)
}

fn first_line(content: &str) -> &str {
    content.lines().next().unwrap_or_default().trim()
}

/// The first `n` characters of `text`.
fn head(text: &str, n: usize) -> &str {
    let end = text.char_indices().nth(n).map_or(text.len(), |(i, _)| i);
    &text[..end]
}

/// Up to `n` characters ending at byte offset `end`.
fn window_before(text: &str, end: usize, n: usize) -> &str {
    let before = &text[..end];
    let start = before
        .char_indices()
        .rev()
        .nth(n.saturating_sub(1))
        .map_or(0, |(i, _)| i);
    &before[start..]
}
