//! Initial source catalog, one entry per known document about Cantor.
//!
//! Weights are not listed: they follow from the tier table in
//! [`crate::core::model::tier_weight`].

use std::collections::HashSet;

use tracing::info;

use crate::core::model::{AcquisitionStatus, Source, SourceFormat, Tier};
use crate::error::Result;
use crate::infra::store::{CatalogStore, SourceFilter};

struct SeedSource {
    title: &'static str,
    author: &'static str,
    date: &'static str,
    tier: Tier,
    language: &'static str,
    format: SourceFormat,
    tags: &'static [&'static str],
    url: Option<&'static str>,
    notes: Option<&'static str>,
    status: AcquisitionStatus,
}

impl SeedSource {
    fn to_source(&self) -> Source {
        let mut src = Source::new(self.title, self.tier, self.format)
            .author(self.author)
            .date(self.date)
            .language(self.language)
            .tags(self.tags)
            .status(self.status);
        if let Some(url) = self.url {
            src = src.url(url);
        }
        if let Some(notes) = self.notes {
            src = src.notes(notes);
        }
        src
    }
}

/// The seed catalog in tier order.
pub fn seed_sources() -> Vec<Source> {
    SEED.iter().map(SeedSource::to_source).collect()
}

/// Populate the catalog.
///
/// An empty catalog receives every seed source. A non-empty one is left
/// alone unless `force` is set, in which case only titles not yet present
/// are added. Returns the number of sources inserted.
pub fn seed_catalog(store: &mut impl CatalogStore, force: bool) -> Result<usize> {
    let existing = store.sources(SourceFilter::default())?;
    if !existing.is_empty() && !force {
        info!(existing = existing.len(), "catalog already seeded");
        return Ok(0);
    }

    let known: HashSet<&str> = existing.iter().map(|s| s.title.as_str()).collect();
    let missing: Vec<Source> = seed_sources()
        .into_iter()
        .filter(|s| !known.contains(s.title.as_str()))
        .collect();

    let ids = store.add_sources(&missing)?;
    info!(inserted = ids.len(), "seeded catalog");
    Ok(ids.len())
}

static SEED: &[SeedSource] = &[
    SeedSource {
        title: "Über eine Eigenschaft des Inbegriffes aller reellen algebraischen Zahlen",
        author: "Georg Cantor",
        date: "1874",
        tier: 1,
        language: "de",
        format: SourceFormat::Paper,
        tags: &["first_infinity_proof", "algebraic_numbers", "uncountability"],
        url: Some("https://www.jamesrmeyer.com/infinite/cantors-first-paper.html"),
        notes: Some("1874 Crelle paper; first infinity proof. Need original German + English translation."),
        status: AcquisitionStatus::Pending,
    },
    SeedSource {
        title: "Über unendliche, lineare Punktmannichfaltigkeiten, Part 1",
        author: "Georg Cantor",
        date: "1879",
        tier: 1,
        language: "de",
        format: SourceFormat::Paper,
        tags: &["point_sets", "linear_manifolds"],
        url: Some("https://www.jamesrmeyer.com/infinite/cantor-punkt1.html"),
        notes: None,
        status: AcquisitionStatus::Pending,
    },
    SeedSource {
        title: "Über unendliche, lineare Punktmannichfaltigkeiten, Part 2",
        author: "Georg Cantor",
        date: "1880",
        tier: 1,
        language: "de",
        format: SourceFormat::Paper,
        tags: &["point_sets", "linear_manifolds"],
        url: Some("https://www.jamesrmeyer.com/infinite/cantor-punkt2.html"),
        notes: None,
        status: AcquisitionStatus::Pending,
    },
    SeedSource {
        title: "Über unendliche, lineare Punktmannichfaltigkeiten, Part 3",
        author: "Georg Cantor",
        date: "1882",
        tier: 1,
        language: "de",
        format: SourceFormat::Paper,
        tags: &["point_sets", "linear_manifolds"],
        url: Some("https://www.jamesrmeyer.com/infinite/cantor-punkt3.html"),
        notes: None,
        status: AcquisitionStatus::Pending,
    },
    SeedSource {
        title: "Über unendliche, lineare Punktmannichfaltigkeiten, Part 4",
        author: "Georg Cantor",
        date: "1883",
        tier: 1,
        language: "de",
        format: SourceFormat::Paper,
        tags: &["point_sets", "linear_manifolds"],
        url: Some("https://www.jamesrmeyer.com/infinite/cantor-punkt4.html"),
        notes: None,
        status: AcquisitionStatus::Pending,
    },
    SeedSource {
        title: "Über unendliche, lineare Punktmannichfaltigkeiten, Part 5 (Grundlagen)",
        author: "Georg Cantor",
        date: "1883",
        tier: 1,
        language: "de",
        format: SourceFormat::Paper,
        tags: &["grundlagen", "philosophy", "actual_infinity", "platonic_realism", "spinoza", "leibniz", "mathematical_freedom"],
        url: Some("https://www.jamesrmeyer.com/infinite/cantor-grundlagen.html"),
        notes: Some("The Grundlagen; philosophical manifesto. Mathematical intuition, philosophy, theology fuse here."),
        status: AcquisitionStatus::Pending,
    },
    SeedSource {
        title: "Über unendliche, lineare Punktmannichfaltigkeiten, Part 6",
        author: "Georg Cantor",
        date: "1884",
        tier: 1,
        language: "de",
        format: SourceFormat::Paper,
        tags: &["point_sets", "linear_manifolds"],
        url: Some("https://www.jamesrmeyer.com/infinite/cantor-punkt6.html"),
        notes: None,
        status: AcquisitionStatus::Pending,
    },
    SeedSource {
        title: "Grundlagen einer allgemeinen Mannigfaltigkeitslehre (separate publication)",
        author: "Georg Cantor",
        date: "1883",
        tier: 1,
        language: "de",
        format: SourceFormat::Book,
        tags: &["grundlagen", "manifold_theory", "philosophy", "theology"],
        url: None,
        notes: Some("Also published as Part 5 above. Separate monograph with additional material."),
        status: AcquisitionStatus::Pending,
    },
    SeedSource {
        title: "Über verschiedene Theoreme aus der Theorie der Punktmengen",
        author: "Georg Cantor",
        date: "1885",
        tier: 1,
        language: "de",
        format: SourceFormat::Paper,
        tags: &["point_sets", "actual_infinity", "defense"],
        url: None,
        notes: None,
        status: AcquisitionStatus::Pending,
    },
    SeedSource {
        title: "Über die verschiedenen Standpunkte in bezug auf das aktuelle Unendliche",
        author: "Georg Cantor",
        date: "1885",
        tier: 1,
        language: "de",
        format: SourceFormat::Paper,
        tags: &["actual_infinity", "philosophy", "defense"],
        url: None,
        notes: Some("Explicit philosophical defense of actual infinity."),
        status: AcquisitionStatus::Pending,
    },
    SeedSource {
        title: "Mitteilungen zur Lehre vom Transfiniten",
        author: "Georg Cantor",
        date: "1887-1888",
        tier: 1,
        language: "de",
        format: SourceFormat::Paper,
        tags: &["transfinite", "theology", "philosophy"],
        url: None,
        notes: Some("Published in Zeitschrift für Philosophie und philosophische Kritik."),
        status: AcquisitionStatus::Pending,
    },
    SeedSource {
        title: "Über eine elementare Frage der Mannigfaltigkeitslehre",
        author: "Georg Cantor",
        date: "1891",
        tier: 1,
        language: "de",
        format: SourceFormat::Paper,
        tags: &["diagonal_argument", "uncountability", "power_set"],
        url: Some("https://www.jamesrmeyer.com/infinite/cantors-1891-proof.html"),
        notes: Some("Contains the diagonal argument."),
        status: AcquisitionStatus::Pending,
    },
    SeedSource {
        title: "Beiträge zur Begründung der transfiniten Mengenlehre, Part I",
        author: "Georg Cantor",
        date: "1895",
        tier: 1,
        language: "de",
        format: SourceFormat::Paper,
        tags: &["transfinite", "set_theory", "cardinality", "ordinals"],
        url: Some("https://www.jamesrmeyer.com/infinite/cantors-beitrage.html"),
        notes: Some("Mature, fully developed theory. The Beiträge."),
        status: AcquisitionStatus::Pending,
    },
    SeedSource {
        title: "Beiträge zur Begründung der transfiniten Mengenlehre, Part II",
        author: "Georg Cantor",
        date: "1897",
        tier: 1,
        language: "de",
        format: SourceFormat::Paper,
        tags: &["transfinite", "set_theory", "well_ordering", "ordinals"],
        url: Some("https://www.jamesrmeyer.com/infinite/cantors-beitrage2.html"),
        notes: None,
        status: AcquisitionStatus::Pending,
    },
    SeedSource {
        title: "Gesammelte Abhandlungen mathematischen und philosophischen Inhalts",
        author: "Georg Cantor (ed. Zermelo)",
        date: "1932",
        tier: 1,
        language: "de",
        format: SourceFormat::Collection,
        tags: &["collected_works", "complete"],
        url: None,
        notes: Some("The standard collected edition. Reprinted Springer 2013. Foundation source."),
        status: AcquisitionStatus::Pending,
    },
    SeedSource {
        title: "Georg Cantor: Briefe",
        author: "Georg Cantor (ed. Meschkowski & Nilson)",
        date: "1991",
        tier: 1,
        language: "de",
        format: SourceFormat::Collection,
        tags: &["letters", "correspondence", "dedekind", "mittag-leffler", "theologians", "colleagues"],
        url: None,
        notes: Some("THE MOST VALUABLE SOURCE. Standard edition of letters. Springer."),
        status: AcquisitionStatus::Pending,
    },
    SeedSource {
        title: "Cantor-Dedekind correspondence (Noether & Cavaillès edition)",
        author: "Georg Cantor; Richard Dedekind",
        date: "1937",
        tier: 1,
        language: "de",
        format: SourceFormat::Collection,
        tags: &["letters", "dedekind", "correspondence", "ideas_in_real_time"],
        url: None,
        notes: Some("Original publication of the Cantor-Dedekind letters."),
        status: AcquisitionStatus::Pending,
    },
    SeedSource {
        title: "Newly discovered letters (Goos, 2025-2026)",
        author: "Georg Cantor; Richard Dedekind",
        date: "2025-2026",
        tier: 1,
        language: "de",
        format: SourceFormat::Letter,
        tags: &["letters", "dedekind", "newly_discovered", "attribution", "countability_proof"],
        url: None,
        notes: Some("Breaking: Goos found previously lost letters via great-granddaughter Angelika Vahlen. Includes missing Nov 30, 1873 letter from Dedekind. Track Quanta Magazine coverage."),
        status: AcquisitionStatus::Pending,
    },
    SeedSource {
        title: "Cantor-Mittag-Leffler correspondence (winter 1883-84)",
        author: "Georg Cantor; Gösta Mittag-Leffler",
        date: "1883-1884",
        tier: 1,
        language: "de",
        format: SourceFormat::Letter,
        tags: &["letters", "mittag-leffler", "divine_revelation", "theology", "god"],
        url: None,
        notes: Some("Contains explicit claim that transfinite content was given by God. Partly in Meschkowski & Nilson, partly at Institut Mittag-Leffler archives in Sweden."),
        status: AcquisitionStatus::Pending,
    },
    SeedSource {
        title: "Letters to Catholic theologians (Esser, Jeiler, Gutberlet, Franzelin)",
        author: "Georg Cantor",
        date: "1885-1896",
        tier: 1,
        language: "de",
        format: SourceFormat::Letter,
        tags: &["letters", "theology", "actual_infinity", "neo-thomism", "dominicans", "franciscans"],
        url: None,
        notes: Some("Some in Tapp (2005), some in Bendiek (1965), some in Meschkowski & Nilson."),
        status: AcquisitionStatus::Pending,
    },
    SeedSource {
        title: "Cantor-Jourdain correspondence",
        author: "Georg Cantor; Philip Jourdain",
        date: "1905+",
        tier: 1,
        language: "en",
        format: SourceFormat::Letter,
        tags: &["letters", "late_life", "history_of_set_theory", "religion"],
        url: None,
        notes: Some("Late-life reflections. Jourdain was his British admirer and translator."),
        status: AcquisitionStatus::Pending,
    },
    SeedSource {
        title: "Dedekind letters at TU Braunschweig",
        author: "Georg Cantor; Richard Dedekind",
        date: "various",
        tier: 1,
        language: "de",
        format: SourceFormat::Letter,
        tags: &["letters", "dedekind", "physical_archive"],
        url: Some("https://faculty.evansville.edu/ck6/bstud/dedek.html"),
        notes: Some("Physical letters returned to Dedekind's university in 1995."),
        status: AcquisitionStatus::Pending,
    },
    SeedSource {
        title: "Dedekind's replies to Cantor (from 1877 onward)",
        author: "Richard Dedekind",
        date: "1877+",
        tier: 2,
        language: "de",
        format: SourceFormat::Letter,
        tags: &["dedekind", "correspondence", "replies"],
        url: None,
        notes: Some("Available in Noether-Cavaillès edition and Meschkowski-Nilson. Dedekind kept copies after the 1874 incident."),
        status: AcquisitionStatus::Pending,
    },
    SeedSource {
        title: "Dedekind's private notes on Cantor's 1874 paper",
        author: "Richard Dedekind",
        date: "1874",
        tier: 2,
        language: "de",
        format: SourceFormat::Other,
        tags: &["dedekind", "private_notes", "1874_paper", "plagiarism_question"],
        url: None,
        notes: Some("Where Dedekind recorded that his work appeared 'almost word for word' under Cantor's name."),
        status: AcquisitionStatus::Pending,
    },
    SeedSource {
        title: "Hilbert's defense of Cantor and set theory",
        author: "David Hilbert",
        date: "various",
        tier: 2,
        language: "de",
        format: SourceFormat::Paper,
        tags: &["hilbert", "defense", "paradise", "set_theory"],
        url: None,
        notes: Some("'No one shall expel us from the paradise that Cantor has created.'"),
        status: AcquisitionStatus::Pending,
    },
    SeedSource {
        title: "Hilbert's 1900 ICM address (Problem 1: Continuum Hypothesis)",
        author: "David Hilbert",
        date: "1900",
        tier: 2,
        language: "de",
        format: SourceFormat::Paper,
        tags: &["hilbert", "continuum_hypothesis", "23_problems", "ICM"],
        url: None,
        notes: Some("CH as the first of 23 problems."),
        status: AcquisitionStatus::Pending,
    },
    SeedSource {
        title: "Weierstrass's support for Cantor's publications",
        author: "Karl Weierstrass",
        date: "various",
        tier: 2,
        language: "de",
        format: SourceFormat::Letter,
        tags: &["weierstrass", "support", "crelle_journal"],
        url: None,
        notes: Some("Weierstrass intervened on Cantor's behalf at Crelle's Journal."),
        status: AcquisitionStatus::Pending,
    },
    SeedSource {
        title: "Kronecker's finitist writings and objections",
        author: "Leopold Kronecker",
        date: "various",
        tier: 3,
        language: "de",
        format: SourceFormat::Paper,
        tags: &["kronecker", "finitism", "constructivism", "opposition"],
        url: None,
        notes: Some("The opposition that shaped Cantor. 'God made the integers, all the rest is the work of man.'"),
        status: AcquisitionStatus::Pending,
    },
    SeedSource {
        title: "Poincaré's criticisms of set theory",
        author: "Henri Poincaré",
        date: "various",
        tier: 3,
        language: "fr",
        format: SourceFormat::Paper,
        tags: &["poincare", "criticism", "disease_metaphor"],
        url: None,
        notes: Some("Called set theory 'a disease from which mathematics will eventually recover.'"),
        status: AcquisitionStatus::Pending,
    },
    SeedSource {
        title: "Brouwer's intuitionist critique",
        author: "L.E.J. Brouwer",
        date: "various",
        tier: 3,
        language: "de",
        format: SourceFormat::Paper,
        tags: &["brouwer", "intuitionism", "foundations"],
        url: None,
        notes: Some("Later opposition, relevant to ongoing foundations debate."),
        status: AcquisitionStatus::Pending,
    },
    SeedSource {
        title: "Wittgenstein's philosophical objections",
        author: "Ludwig Wittgenstein",
        date: "various",
        tier: 3,
        language: "de",
        format: SourceFormat::Paper,
        tags: &["wittgenstein", "philosophy", "critique"],
        url: None,
        notes: Some("Philosophical rather than mathematical critique."),
        status: AcquisitionStatus::Pending,
    },
    SeedSource {
        title: "Gutberlet's 1886 paper on actual infinity and God",
        author: "Constantin Gutberlet",
        date: "1886",
        tier: 4,
        language: "de",
        format: SourceFormat::Paper,
        tags: &["gutberlet", "actual_infinity", "god", "neo-thomism"],
        url: None,
        notes: Some("First theological paper to appeal to Cantor's transfinites."),
        status: AcquisitionStatus::Pending,
    },
    SeedSource {
        title: "Cardinal Franzelin's 1886 letter to Cantor",
        author: "Johann Baptist Franzelin",
        date: "1886",
        tier: 4,
        language: "de",
        format: SourceFormat::Letter,
        tags: &["franzelin", "cardinal", "pantheism", "transfinites", "god"],
        url: None,
        notes: Some("Accepted transfinite theory as valid but warned against pantheism."),
        status: AcquisitionStatus::Pending,
    },
    SeedSource {
        title: "Thomas Esser's correspondence with Cantor",
        author: "Thomas Esser, O.P.",
        date: "various",
        tier: 4,
        language: "de",
        format: SourceFormat::Letter,
        tags: &["esser", "dominicans", "theology", "infinite"],
        url: None,
        notes: Some("Led a group of Dominicans studying theological implications."),
        status: AcquisitionStatus::Pending,
    },
    SeedSource {
        title: "Ignatius Jeiler correspondence",
        author: "Ignatius Jeiler, O.F.M.",
        date: "various",
        tier: 4,
        language: "de",
        format: SourceFormat::Letter,
        tags: &["jeiler", "franciscans", "theology"],
        url: None,
        notes: Some("Published in Bendiek (1965)."),
        status: AcquisitionStatus::Pending,
    },
    SeedSource {
        title: "Aeterni Patris",
        author: "Pope Leo XIII",
        date: "1879",
        tier: 4,
        language: "la",
        format: SourceFormat::Paper,
        tags: &["pope", "neo-thomism", "encyclical", "context"],
        url: None,
        notes: Some("Context: the neo-Thomist revival creating the intellectual environment for Cantor's theological engagement."),
        status: AcquisitionStatus::Pending,
    },
    SeedSource {
        title: "Georg Cantor: His Mathematics and Philosophy of the Infinite",
        author: "Joseph Dauben",
        date: "1979",
        tier: 5,
        language: "en",
        format: SourceFormat::Book,
        tags: &["biography", "mathematics", "philosophy", "theology", "standard"],
        url: None,
        notes: Some("THE standard biography. Princeton University Press. 1979/1990."),
        status: AcquisitionStatus::Pending,
    },
    SeedSource {
        title: "Georg Cantor and Pope Leo XIII: Mathematics, Theology, and the Infinite",
        author: "Joseph Dauben",
        date: "1977",
        tier: 5,
        language: "en",
        format: SourceFormat::Article,
        tags: &["theology", "pope", "infinite", "dauben"],
        url: None,
        notes: Some("Journal of the History of Ideas 38(1), 1977, 85-108."),
        status: AcquisitionStatus::Pending,
    },
    SeedSource {
        title: "Labyrinth of Thought: A History of Set Theory and Its Role in Modern Mathematics",
        author: "José Ferreirós",
        date: "1999",
        tier: 5,
        language: "en",
        format: SourceFormat::Book,
        tags: &["set_theory", "history", "context"],
        url: None,
        notes: Some("Birkhäuser 1999/2007. Broader context but excellent on Cantor."),
        status: AcquisitionStatus::Pending,
    },
    SeedSource {
        title: "On the relations between Georg Cantor and Richard Dedekind",
        author: "José Ferreirós",
        date: "1993",
        tier: 5,
        language: "en",
        format: SourceFormat::Article,
        tags: &["dedekind", "plagiarism_question", "relations"],
        url: None,
        notes: Some("The paper accusing Cantor of plagiarism. ScienceDirect."),
        status: AcquisitionStatus::Pending,
    },
    SeedSource {
        title: "Cantorian Set Theory and the Limitation of Size",
        author: "Michael Hallett",
        date: "1984",
        tier: 5,
        language: "en",
        format: SourceFormat::Book,
        tags: &["set_theory", "foundations", "limitation_of_size"],
        url: None,
        notes: Some("Oxford: Clarendon. Deep analysis of mathematical and philosophical foundations."),
        status: AcquisitionStatus::Pending,
    },
    SeedSource {
        title: "Probleme des Unendlichen: Werk und Leben Georg Cantors",
        author: "Herbert Meschkowski",
        date: "1967",
        tier: 5,
        language: "de",
        format: SourceFormat::Book,
        tags: &["biography", "infinity", "life_and_work"],
        url: None,
        notes: Some("First serious modern study of Cantor's life and work."),
        status: AcquisitionStatus::Pending,
    },
    SeedSource {
        title: "Towards a Biography of Georg Cantor",
        author: "Ivor Grattan-Guinness",
        date: "1971",
        tier: 5,
        language: "en",
        format: SourceFormat::Article,
        tags: &["biography", "bell_debunking", "manuscript_discovery"],
        url: None,
        notes: Some("Debunked Bell's myths. Discovered previously unknown Cantor manuscript. Annals of Science."),
        status: AcquisitionStatus::Pending,
    },
    SeedSource {
        title: "The Rediscovery of the Cantor-Dedekind Correspondence",
        author: "Ivor Grattan-Guinness",
        date: "1974",
        tier: 5,
        language: "en",
        format: SourceFormat::Article,
        tags: &["dedekind", "correspondence", "rediscovery"],
        url: None,
        notes: Some("Jahresbericht der DMV 76, 1974/75, 104-139."),
        status: AcquisitionStatus::Pending,
    },
    SeedSource {
        title: "Kardinalität und Kardinäle",
        author: "Christian Tapp",
        date: "2005",
        tier: 5,
        language: "de",
        format: SourceFormat::Book,
        tags: &["theology", "correspondence", "cardinals", "theologians"],
        url: None,
        notes: Some("Detailed study of the Cantor-theologian correspondence. Franz Steiner Verlag."),
        status: AcquisitionStatus::Pending,
    },
    SeedSource {
        title: "The negative theology of absolute infinity: Cantor, mathematics, and humility",
        author: "Gutschmidt & Ged",
        date: "2024",
        tier: 5,
        language: "en",
        format: SourceFormat::Article,
        tags: &["absolutum", "negative_theology", "recent"],
        url: None,
        notes: Some("International Journal for Philosophy of Religion, 2024."),
        status: AcquisitionStatus::Pending,
    },
    SeedSource {
        title: "Theological Reasoning of Cantor's Set Theory",
        author: "(arxiv authors)",
        date: "2024",
        tier: 5,
        language: "en",
        format: SourceFormat::Article,
        tags: &["theology", "set_theory", "interdisciplinary"],
        url: Some("https://arxiv.org/abs/2407.18972"),
        notes: Some("arxiv:2407.18972. Recent interdisciplinary analysis."),
        status: AcquisitionStatus::Pending,
    },
    SeedSource {
        title: "Was Cantor Surprised?",
        author: "Fernando Gouvêa",
        date: "2011",
        tier: 5,
        language: "en",
        format: SourceFormat::Article,
        tags: &["je_le_vois", "historical_analysis", "surprise"],
        url: None,
        notes: Some("American Mathematical Monthly, March 2011. Analysis of 'Je le vois, mais je ne le crois pas'."),
        status: AcquisitionStatus::Pending,
    },
    SeedSource {
        title: "The Man Who Stole Infinity (Quanta Magazine)",
        author: "Demian Goos et al.",
        date: "2026-02",
        tier: 5,
        language: "en",
        format: SourceFormat::Article,
        tags: &["goos", "newly_discovered", "letters", "breaking_news"],
        url: Some("https://www.quantamagazine.org/"),
        notes: Some("Breaking coverage of the Goos discovery. Feb 25, 2026."),
        status: AcquisitionStatus::Pending,
    },
    SeedSource {
        title: "Cantor, God, and Inconsistent Multiplicities",
        author: "Aaron Thomas-Bolduc",
        date: "2014",
        tier: 5,
        language: "en",
        format: SourceFormat::Article,
        tags: &["god", "inconsistent_multiplicities", "proper_classes", "absolutum"],
        url: None,
        notes: Some("Analysis of Cantor's treatment of proper classes and the Absolute."),
        status: AcquisitionStatus::Pending,
    },
    SeedSource {
        title: "Contributions to the Founding of the Theory of Transfinite Numbers (Jourdain translation)",
        author: "Georg Cantor (trans. P. Jourdain)",
        date: "1915",
        tier: 6,
        language: "en",
        format: SourceFormat::Book,
        tags: &["translation", "beitrage", "historical_introduction"],
        url: None,
        notes: Some("English translation with 82-page historical introduction. Dover reprint. Use newer 2024 jamesrmeyer.com translation for accuracy."),
        status: AcquisitionStatus::Pending,
    },
    SeedSource {
        title: "Textbook treatments of Cantor's diagonal argument",
        author: "various",
        date: "various",
        tier: 6,
        language: "en",
        format: SourceFormat::Other,
        tags: &["diagonal_argument", "textbook", "exposition"],
        url: None,
        notes: Some("Standard math content. Captures results but not thinking process."),
        status: AcquisitionStatus::Pending,
    },
    SeedSource {
        title: "Naïve Set Theory",
        author: "Paul Halmos",
        date: "1960",
        tier: 6,
        language: "en",
        format: SourceFormat::Book,
        tags: &["set_theory", "textbook", "exposition"],
        url: None,
        notes: Some("Clean modern exposition of set theory basics."),
        status: AcquisitionStatus::Pending,
    },
    SeedSource {
        title: "MacTutor biography of Georg Cantor",
        author: "MacTutor History of Mathematics",
        date: "various",
        tier: 6,
        language: "en",
        format: SourceFormat::Web,
        tags: &["biography", "chronology", "summary"],
        url: Some("https://mathshistory.st-andrews.ac.uk/Biographies/Cantor/"),
        notes: Some("Solid summary, useful for chronology."),
        status: AcquisitionStatus::Pending,
    },
    SeedSource {
        title: "'Cantor went mad because of infinity' pop narratives",
        author: "various",
        date: "various",
        tier: 7,
        language: "en",
        format: SourceFormat::Other,
        tags: &["pop_narrative", "madness_myth", "negative_example"],
        url: None,
        notes: Some("Low weight. Include only to teach the model to reject these framings."),
        status: AcquisitionStatus::Pending,
    },
    SeedSource {
        title: "Wikipedia article on Georg Cantor",
        author: "Wikipedia",
        date: "various",
        tier: 7,
        language: "en",
        format: SourceFormat::Web,
        tags: &["wikipedia", "mixed_quality"],
        url: Some("https://en.wikipedia.org/wiki/Georg_Cantor"),
        notes: Some("Assigned 0.35 in seed doc but tier 7. Mix of sourced and unsourced claims."),
        status: AcquisitionStatus::Available,
    },
    SeedSource {
        title: "Men of Mathematics",
        author: "E.T. Bell",
        date: "1937",
        tier: 8,
        language: "en",
        format: SourceFormat::Book,
        tags: &["bell", "fabricated", "oedipal", "false_jewish_heritage", "romantic_madness", "EXCLUDE"],
        url: None,
        notes: Some("Actively harmful. Fabricated Oedipal narrative, false Jewish heritage claims, Romantic madness myth. Grattan-Guinness (1971) showed none of Bell's claims were true. EXCLUDE ENTIRELY or use only as explicit counter-examples."),
        status: AcquisitionStatus::Excluded,
    },
];
