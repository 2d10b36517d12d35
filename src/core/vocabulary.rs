//! Closed vocabularies shared by the schema validator, both taggers and the
//! assisted-classification prompt.
//!
//! Each dimension owns an ordered table of subtags, and each subtag carries
//! the bilingual (German/English) keywords the rule-based tagger looks for.
//! The subtag vocabulary of a dimension is exactly the key column of its
//! table, so the validator and the tagger can never drift apart.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CorpusError;

/// One of the five fixed classification axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    MathematicalIntuition,
    TheologicalFramework,
    KroneckerConflict,
    PsychologicalLandscape,
    PersonalContext,
}

/// A subtag and the keywords that trigger it.
#[derive(Debug, Clone, Copy)]
pub struct SubtagKeywords {
    pub subtag: &'static str,
    pub keywords: &'static [&'static str],
}

const fn entry(subtag: &'static str, keywords: &'static [&'static str]) -> SubtagKeywords {
    SubtagKeywords { subtag, keywords }
}

impl Dimension {
    /// Declaration order; also the order dimensions are detected and reported.
    pub const ALL: [Dimension; 5] = [
        Dimension::MathematicalIntuition,
        Dimension::TheologicalFramework,
        Dimension::KroneckerConflict,
        Dimension::PsychologicalLandscape,
        Dimension::PersonalContext,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Dimension::MathematicalIntuition => "mathematical_intuition",
            Dimension::TheologicalFramework => "theological_framework",
            Dimension::KroneckerConflict => "kronecker_conflict",
            Dimension::PsychologicalLandscape => "psychological_landscape",
            Dimension::PersonalContext => "personal_context",
        }
    }

    /// Subtag → keyword table for this dimension.
    pub fn subtag_table(self) -> &'static [SubtagKeywords] {
        match self {
            Dimension::MathematicalIntuition => MATHEMATICAL_INTUITION,
            Dimension::TheologicalFramework => THEOLOGICAL_FRAMEWORK,
            Dimension::KroneckerConflict => KRONECKER_CONFLICT,
            Dimension::PsychologicalLandscape => PSYCHOLOGICAL_LANDSCAPE,
            Dimension::PersonalContext => PERSONAL_CONTEXT,
        }
    }

    /// The closed subtag vocabulary, in table order.
    pub fn subtags(self) -> impl Iterator<Item = &'static str> {
        self.subtag_table().iter().map(|e| e.subtag)
    }

    pub fn allows_subtag(self, subtag: &str) -> bool {
        self.subtags().any(|s| s == subtag)
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Dimension {
    type Err = CorpusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Dimension::ALL
            .into_iter()
            .find(|d| d.as_str() == s)
            .ok_or_else(|| CorpusError::UnknownDimension(s.to_string()))
    }
}

const MATHEMATICAL_INTUITION: &[SubtagKeywords] = &[
    entry("diagonal_argument", &["diagonal", "Diagonalverfahren", "diagonalization"]),
    entry(
        "cardinality",
        &["cardinal", "Mächtigkeit", "cardinality", "equipollent", "gleichmächtig"],
    ),
    entry(
        "ordinals",
        &["ordinal", "Ordnungszahl", "ordinal number", "well-ordered", "wohlgeordnet"],
    ),
    entry(
        "continuum_hypothesis",
        &["continuum hypothesis", "Kontinuumhypothese", "Kontinuum", "continuum problem"],
    ),
    entry(
        "well_ordering",
        &["well-ordering", "Wohlordnung", "well ordering", "well ordered", "wohlgeordnet"],
    ),
    entry(
        "transfinite_arithmetic",
        &["transfinite", "transfinit", "aleph", "ℵ", "omega", "ω"],
    ),
    entry(
        "trigonometric_series",
        &["trigonometric", "trigonometrisch", "Fourier", "representation theorem"],
    ),
    entry(
        "set_theory",
        &["Mengenlehre", "set theory", "Mannigfaltigkeit", "manifold", "Inbegriff"],
    ),
    entry(
        "uncountability",
        &["uncountable", "überabzählbar", "uncountability", "non-denumerable"],
    ),
    entry("power_set", &["power set", "Potenzmenge", "subset", "Teilmenge"]),
];

const THEOLOGICAL_FRAMEWORK: &[SubtagKeywords] = &[
    entry("absolutum", &["Absolutum", "absolute infinite", "das Absolute"]),
    entry("transfinitum", &["Transfinitum", "transfinite", "transfinit"]),
    entry(
        "neo_thomism",
        &["Aquinas", "Thomas", "Thomism", "Thomistic", "Franzelin", "neo-scholastic"],
    ),
    entry(
        "anti_kantianism",
        &["Kant", "Kantian", "anti-Kantian", "Critique", "pure reason"],
    ),
    entry("platonic_realism", &["Plato", "Platonic", "realism", "Ideenlehre"]),
    entry(
        "divine_revelation",
        &[
            "God",
            "Gott",
            "divine",
            "göttlich",
            "revelation",
            "Offenbarung",
            "Creator",
            "Schöpfer",
        ],
    ),
    entry("spinoza", &["Spinoza", "pantheism", "Pantheismus"]),
    entry("leibniz", &["Leibniz", "monad", "Monade"]),
    entry(
        "mathematical_freedom",
        &[
            "free mathematics",
            "Freiheit",
            "freedom of mathematics",
            "essence of mathematics is freedom",
        ],
    ),
];

const KRONECKER_CONFLICT: &[SubtagKeywords] = &[
    entry("finitism", &["finitist", "finitism", "finite", "Endlichkeit"]),
    entry(
        "institutional_power",
        &["journal", "Zeitschrift", "publish", "appointment", "Berufung", "referee"],
    ),
    entry(
        "combative_rhetoric",
        &[
            "charlatan",
            "Scharlatan",
            "corrupter of youth",
            "Jugendverderber",
            "cholera bacillus",
        ],
    ),
    entry(
        "mathematical_substance",
        &["integers", "ganzen Zahlen", "constructive", "constructivism", "arithmetic"],
    ),
    entry("berlin_appointment", &["Berlin", "Berliner", "chair", "Lehrstuhl"]),
    entry("constructivism", &["constructive", "constructivism", "konstruktiv"]),
];

const PSYCHOLOGICAL_LANDSCAPE: &[SubtagKeywords] = &[
    entry(
        "depressive_episode",
        &[
            "depression",
            "depressive",
            "melancholy",
            "Melancholie",
            "breakdown",
            "Zusammenbruch",
            "nervous",
            "nervös",
        ],
    ),
    entry("productive_period", &["productive", "fruitful", "burst of work"]),
    entry(
        "hospitalization",
        &[
            "hospitalization",
            "Nervenklinik",
            "sanatorium",
            "clinic",
            "Klinik",
            "committed",
            "Halle Nervenklinik",
        ],
    ),
    entry(
        "non_math_interests",
        &["Shakespeare", "Bacon", "Baconian", "Francis Bacon", "literary", "literature"],
    ),
    entry("baconian_theory", &["Bacon", "Baconian", "Shakespeare authorship"]),
    entry(
        "family",
        &["Rudolph", "children", "Kinder", "son", "daughter", "Sohn", "Tochter"],
    ),
];

const PERSONAL_CONTEXT: &[SubtagKeywords] = &[
    entry(
        "halle_career",
        &["Halle", "Universität Halle", "ordinarius", "extraordinary professor"],
    ),
    entry(
        "family_life",
        &["Vally", "Guttmann", "wife", "Frau", "marriage", "wedding", "Hochzeit"],
    ),
    entry("dmv_founding", &["DMV", "Mathematiker-Vereinigung", "Deutsche Mathematiker"]),
    entry(
        "supporters",
        &["Dedekind", "Mittag-Leffler", "Hilbert", "Weierstrass", "supporter", "defended"],
    ),
    entry(
        "st_petersburg",
        &["St. Petersburg", "Sankt Petersburg", "Petersburg", "Russia", "Russland"],
    ),
    entry(
        "lutheran_faith",
        &["Lutheran", "lutherisch", "Protestant", "evangelisch", "faith", "Glaube"],
    ),
    entry("icm", &["ICM", "congress", "Kongress", "International Congress"]),
];

/// Math topic → keywords. The key column is the closed math-topic vocabulary.
pub const MATH_TOPICS: &[SubtagKeywords] = &[
    entry("set_theory", &["Mengenlehre", "set theory", "Mannigfaltigkeit"]),
    entry("cardinality", &["cardinality", "Mächtigkeit", "equipollent"]),
    entry("ordinal_numbers", &["ordinal number", "Ordnungszahl"]),
    entry("cardinal_numbers", &["cardinal number", "Kardinalzahl"]),
    entry("transfinite_induction", &["transfinite induction", "transfinite Induktion"]),
    entry("well_ordering_theorem", &["well-ordering theorem", "Wohlordnungssatz"]),
    entry(
        "continuum_hypothesis",
        &["continuum hypothesis", "Kontinuumhypothese", "continuum problem"],
    ),
    entry("diagonal_argument", &["diagonal", "Diagonalverfahren", "diagonalization"]),
    entry("uncountability", &["uncountable", "überabzählbar", "non-denumerable"]),
    entry("countability", &["countable", "abzählbar", "denumerable"]),
    entry("trigonometric_series", &["trigonometric series", "trigonometrische Reihe"]),
    entry("point_sets", &["point set", "Punktmenge"]),
    entry("real_analysis", &["real analysis", "reelle Analysis", "real number"]),
    entry("topology", &["topology", "Topologie", "connected", "zusammenhängend"]),
    entry("power_set", &["power set", "Potenzmenge"]),
    entry("aleph_numbers", &["aleph", "ℵ"]),
    entry("beth_numbers", &["beth", "ℶ"]),
    entry("ordinal_arithmetic", &["ordinal arithmetic", "ordinal addition"]),
    entry("cardinal_arithmetic", &["cardinal arithmetic", "cardinal addition"]),
    entry("axiom_of_choice", &["axiom of choice", "Auswahlaxiom"]),
    entry("zermelo_axioms", &["Zermelo", "axiom system", "Axiomensystem"]),
    entry("burali_forti_paradox", &["Burali-Forti", "greatest ordinal"]),
    entry("russell_paradox", &["Russell", "Russell's paradox", "set of all sets"]),
    entry(
        "absolute_infinite",
        &["absolute infinite", "Absolutum", "Absolute Unendlichkeit"],
    ),
];

/// The closed math-topic vocabulary, in table order.
pub fn math_topics() -> impl Iterator<Item = &'static str> {
    MATH_TOPICS.iter().map(|e| e.subtag)
}

pub fn is_math_topic(topic: &str) -> bool {
    math_topics().any(|t| t == topic)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dimension_names_round_trip_through_from_str() {
        for d in Dimension::ALL {
            assert_eq!(d.as_str().parse::<Dimension>().unwrap(), d);
        }
        assert!("spiritual_journey".parse::<Dimension>().is_err());
    }

    #[test]
    fn vocabulary_sizes_are_fixed() {
        let sizes: Vec<usize> = Dimension::ALL
            .iter()
            .map(|d| d.subtags().count())
            .collect();
        assert_eq!(sizes, vec![10, 9, 6, 6, 7]);
        assert_eq!(math_topics().count(), 24);
    }

    #[test]
    fn subtags_are_scoped_to_their_dimension() {
        assert!(Dimension::MathematicalIntuition.allows_subtag("diagonal_argument"));
        assert!(!Dimension::PersonalContext.allows_subtag("diagonal_argument"));
        assert!(is_math_topic("aleph_numbers"));
        assert!(!is_math_topic("ordinals"));
    }
}
