//! Catalog records: sources, segments and their closed enumerations.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CorpusError;

/// Source trust tier: 1 (the subject's own words) to 8 (excluded fabrication).
pub type Tier = u8;

/// Fixed tier → sampling weight table, indexed by `tier - 1`.
const TIER_WEIGHTS: [f64; 8] = [1.00, 0.85, 0.70, 0.65, 0.55, 0.35, 0.15, 0.00];

const TIER_LABELS: [&str; 8] = [
    "Cantor's own words",
    "Direct correspondents",
    "Mathematical opponents",
    "Catholic theologians",
    "Serious scholarship",
    "Secondary exposition",
    "Popular accounts",
    "Bell (EXCLUDED)",
];

/// Validate a raw tier number.
pub fn check_tier(tier: i64) -> Result<Tier, CorpusError> {
    match u8::try_from(tier) {
        Ok(t @ 1..=8) => Ok(t),
        _ => Err(CorpusError::UnknownTier(tier)),
    }
}

/// Sampling weight assigned to a tier at seed time.
pub fn tier_weight(tier: Tier) -> f64 {
    tier.checked_sub(1)
        .and_then(|i| TIER_WEIGHTS.get(usize::from(i)))
        .copied()
        .unwrap_or(0.0)
}

pub fn tier_label(tier: Tier) -> &'static str {
    tier.checked_sub(1)
        .and_then(|i| TIER_LABELS.get(usize::from(i)))
        .copied()
        .unwrap_or("Unknown tier")
}

/// Implements `as_str`, `Display` and `FromStr` for a closed string enumeration.
macro_rules! closed_enum {
    ($ty:ident, $err:ident, { $($variant:ident => $name:literal),+ $(,)? }) => {
        impl $ty {
            pub const ALL: &'static [$ty] = &[$($ty::$variant),+];

            pub fn as_str(self) -> &'static str {
                match self {
                    $($ty::$variant => $name),+
                }
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $ty {
            type Err = CorpusError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($name => Ok($ty::$variant),)+
                    other => Err(CorpusError::$err(other.to_string())),
                }
            }
        }
    };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceFormat {
    Letter,
    Paper,
    Book,
    Article,
    Collection,
    Biography,
    Web,
    Other,
}

closed_enum!(SourceFormat, UnknownSourceFormat, {
    Letter => "letter",
    Paper => "paper",
    Book => "book",
    Article => "article",
    Collection => "collection",
    Biography => "biography",
    Web => "web",
    Other => "other",
});

/// Acquisition lifecycle: pending → available → acquired → processed, or excluded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AcquisitionStatus {
    Pending,
    Available,
    Acquired,
    Processed,
    Excluded,
}

closed_enum!(AcquisitionStatus, UnknownStatus, {
    Pending => "pending",
    Available => "available",
    Acquired => "acquired",
    Processed => "processed",
    Excluded => "excluded",
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SegmentType {
    Letter,
    Section,
    Theorem,
    Chapter,
    Dialogue,
    Fragment,
    Full,
}

closed_enum!(SegmentType, UnknownSegmentType, {
    Letter => "letter",
    Section => "section",
    Theorem => "theorem",
    Chapter => "chapter",
    Dialogue => "dialogue",
    Fragment => "fragment",
    Full => "full",
});

/// A cataloged document about the subject.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Source {
    pub id: Option<i64>,
    pub title: String,
    pub author: Option<String>,
    pub date: Option<String>,
    pub tier: Tier,
    pub weight: f64,
    pub language: String,
    pub format: SourceFormat,
    pub content_tags: Vec<String>,
    pub status: AcquisitionStatus,
    pub file_path: Option<String>,
    pub url: Option<String>,
    pub notes: Option<String>,
}

impl Source {
    /// New pending source; weight follows the tier table.
    pub fn new(title: impl Into<String>, tier: Tier, format: SourceFormat) -> Self {
        Self {
            id: None,
            title: title.into(),
            author: None,
            date: None,
            tier,
            weight: tier_weight(tier),
            language: "de".to_string(),
            format,
            content_tags: Vec::new(),
            status: AcquisitionStatus::Pending,
            file_path: None,
            url: None,
            notes: None,
        }
    }

    pub fn author(mut self, author: &str) -> Self {
        self.author = Some(author.to_string());
        self
    }

    pub fn date(mut self, date: &str) -> Self {
        self.date = Some(date.to_string());
        self
    }

    pub fn language(mut self, language: &str) -> Self {
        self.language = language.to_string();
        self
    }

    pub fn tags(mut self, tags: &[&str]) -> Self {
        self.content_tags = tags.iter().map(|t| t.to_string()).collect();
        self
    }

    pub fn status(mut self, status: AcquisitionStatus) -> Self {
        self.status = status;
        self
    }

    pub fn url(mut self, url: &str) -> Self {
        self.url = Some(url.to_string());
        self
    }

    pub fn notes(mut self, notes: &str) -> Self {
        self.notes = Some(notes.to_string());
        self
    }
}

/// A contiguous unit of a source: one letter, section, theorem or chapter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    pub id: Option<i64>,
    pub source_id: i64,
    pub segment_type: SegmentType,
    pub title: String,
    pub content: String,
    pub language: String,
    pub sender: Option<String>,
    pub recipient: Option<String>,
    pub segment_date: Option<String>,
    /// Position within the source; unique and increasing with document order.
    pub ordering: u32,
    pub parallel_id: Option<i64>,
}

impl Segment {
    pub fn new(
        segment_type: SegmentType,
        title: impl Into<String>,
        content: impl Into<String>,
        ordering: u32,
    ) -> Self {
        Self {
            id: None,
            source_id: 0,
            segment_type,
            title: title.into(),
            content: content.into(),
            language: "de".to_string(),
            sender: None,
            recipient: None,
            segment_date: None,
            ordering,
            parallel_id: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tier_weight_table_is_monotonic() {
        let weights: Vec<f64> = (1..=8).map(tier_weight).collect();
        assert!(weights.windows(2).all(|w| w[0] > w[1]));
        assert_eq!(tier_weight(1), 1.0);
        assert_eq!(tier_weight(8), 0.0);
        assert_eq!(tier_weight(0), 0.0);
        assert_eq!(tier_weight(42), 0.0);
    }

    #[test]
    fn tier_bounds_are_checked() {
        assert_eq!(check_tier(1).unwrap(), 1);
        assert_eq!(check_tier(8).unwrap(), 8);
        assert!(check_tier(0).is_err());
        assert!(check_tier(9).is_err());
        assert!(check_tier(-3).is_err());
    }

    #[test]
    fn closed_enums_parse_their_own_names() {
        for f in SourceFormat::ALL {
            assert_eq!(f.as_str().parse::<SourceFormat>().unwrap(), *f);
        }
        for s in AcquisitionStatus::ALL {
            assert_eq!(s.to_string().parse::<AcquisitionStatus>().unwrap(), *s);
        }
        assert!(matches!(
            "scroll".parse::<SegmentType>(),
            Err(CorpusError::UnknownSegmentType(_))
        ));
    }

    #[test]
    fn new_source_takes_weight_from_tier() {
        let s = Source::new("Beiträge", 5, SourceFormat::Paper).author("Dauben");
        assert_eq!(s.weight, 0.55);
        assert_eq!(s.status, AcquisitionStatus::Pending);
        assert_eq!(s.author.as_deref(), Some("Dauben"));
    }
}
