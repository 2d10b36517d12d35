//! SQLite-backed catalog of sources, segments and annotations.
//!
//! The [`CatalogStore`] trait is the persistence seam the pipeline talks to;
//! [`SqliteStore`] is the shipped implementation. Every multi-row write runs
//! in one transaction: a failure drops the transaction uncommitted, which
//! rolls it back.

use std::collections::{BTreeMap, HashMap};
use std::path::Path;

use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSql, ToSqlOutput, ValueRef};
use rusqlite::{Connection, OptionalExtension, Row, params};
use serde::Serialize;
use tracing::{debug, info};

use crate::core::model::{AcquisitionStatus, Segment, SegmentType, Source, SourceFormat, Tier};
use crate::core::parallel::ParallelCandidate;
use crate::core::sampler::WeightedSegment;
use crate::core::schema::{AnnotationRow, SegmentAnnotation};
use crate::core::vocabulary::Dimension;
use crate::error::{CorpusError, Result};

const SCHEMA_SQL: &str = r#"
CREATE TABLE IF NOT EXISTS sources (
    id                 INTEGER PRIMARY KEY AUTOINCREMENT,
    title              TEXT NOT NULL,
    author             TEXT,
    date               TEXT,
    tier               INTEGER NOT NULL CHECK (tier BETWEEN 1 AND 8),
    weight             REAL NOT NULL CHECK (weight BETWEEN 0.0 AND 1.0),
    language           TEXT NOT NULL DEFAULT 'de',
    format             TEXT NOT NULL CHECK (format IN
        ('letter','paper','book','article','collection','biography','web','other')),
    content_tags       TEXT NOT NULL DEFAULT '[]',
    acquisition_status TEXT NOT NULL DEFAULT 'pending' CHECK (acquisition_status IN
        ('pending','available','acquired','processed','excluded')),
    file_path          TEXT,
    url                TEXT,
    notes              TEXT,
    created_at         TEXT DEFAULT (datetime('now')),
    updated_at         TEXT DEFAULT (datetime('now'))
);

CREATE TABLE IF NOT EXISTS segments (
    id           INTEGER PRIMARY KEY AUTOINCREMENT,
    source_id    INTEGER NOT NULL REFERENCES sources(id) ON DELETE CASCADE,
    segment_type TEXT NOT NULL CHECK (segment_type IN
        ('letter','section','theorem','chapter','dialogue','fragment','full')),
    title        TEXT NOT NULL DEFAULT '',
    content      TEXT NOT NULL CHECK (length(trim(content)) > 0),
    language     TEXT NOT NULL DEFAULT 'de',
    sender       TEXT,
    recipient    TEXT,
    segment_date TEXT,
    ordering     INTEGER NOT NULL DEFAULT 0,
    parallel_id  INTEGER REFERENCES segments(id),
    created_at   TEXT DEFAULT (datetime('now')),
    UNIQUE (source_id, ordering)
);

CREATE TABLE IF NOT EXISTS annotations (
    id                 INTEGER PRIMARY KEY AUTOINCREMENT,
    segment_id         INTEGER NOT NULL REFERENCES segments(id) ON DELETE CASCADE,
    dimension          TEXT NOT NULL CHECK (dimension IN (
        'mathematical_intuition','theological_framework',
        'kronecker_conflict','psychological_landscape','personal_context')),
    subtags            TEXT NOT NULL DEFAULT '[]',
    math_topics        TEXT NOT NULL DEFAULT '[]',
    psych_state        TEXT NOT NULL DEFAULT '',
    confidence         REAL NOT NULL CHECK (confidence BETWEEN 0.0 AND 1.0),
    contradiction_flag INTEGER NOT NULL DEFAULT 0,
    contradiction_ref  INTEGER REFERENCES segments(id),
    notes              TEXT NOT NULL DEFAULT '',
    reviewer           TEXT NOT NULL DEFAULT 'auto',
    created_at         TEXT DEFAULT (datetime('now')),
    CHECK ((contradiction_flag = 1) = (contradiction_ref IS NOT NULL))
);

CREATE TABLE IF NOT EXISTS acquisition_log (
    id        INTEGER PRIMARY KEY AUTOINCREMENT,
    source_id INTEGER NOT NULL REFERENCES sources(id) ON DELETE CASCADE,
    action    TEXT NOT NULL,
    details   TEXT,
    timestamp TEXT DEFAULT (datetime('now'))
);

CREATE INDEX IF NOT EXISTS idx_sources_tier ON sources(tier);
CREATE INDEX IF NOT EXISTS idx_sources_status ON sources(acquisition_status);
CREATE INDEX IF NOT EXISTS idx_segments_source ON segments(source_id);
CREATE INDEX IF NOT EXISTS idx_annotations_segment ON annotations(segment_id);
CREATE INDEX IF NOT EXISTS idx_annotations_dimension ON annotations(dimension);
"#;

/// Restricts a source listing.
#[derive(Debug, Clone, Copy, Default)]
pub struct SourceFilter
{
    pub tier: Option<Tier>,
    pub status: Option<AcquisitionStatus>,
}

/// Source counts by tier and by acquisition status.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CatalogStats
{
    pub total: usize,
    pub by_tier: BTreeMap<Tier, usize>,
    pub by_status: BTreeMap<String, usize>,
    pub segments: usize,
    pub annotated_segments: usize,
}

/// A segment awaiting classification.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingSegment
{
    pub id: i64,
    pub content: String,
    pub tier: Tier,
}

/// An automatically produced annotation row surfaced for human review.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReviewItem
{
    pub annotation_id: i64,
    pub segment_id: i64,
    pub segment_title: String,
    pub dimension: Dimension,
    pub subtags: Vec<String>,
    pub confidence: f64,
    pub notes: String,
}

/// Persistence operations the pipeline depends on.
pub trait CatalogStore
{
    fn add_sources(
        &mut self,
        sources: &[Source],
    ) -> Result<Vec<i64>>;

    fn source(
        &self,
        id: i64,
    ) -> Result<Option<Source>>;

    fn sources(
        &self,
        filter: SourceFilter,
    ) -> Result<Vec<Source>>;

    fn update_status(
        &mut self,
        id: i64,
        status: AcquisitionStatus,
    ) -> Result<()>;

    /// Record the local file for a source and mark it acquired.
    fn assign_file(
        &mut self,
        id: i64,
        file_path: &str,
    ) -> Result<()>;

    fn catalog_stats(&self) -> Result<CatalogStats>;

    /// Insert segments in one transaction; returns their new ids in order.
    fn insert_segments(
        &mut self,
        segments: &[Segment],
    ) -> Result<Vec<i64>>;

    fn segment(
        &self,
        id: i64,
    ) -> Result<Option<Segment>>;

    fn segments_for_source(
        &self,
        source_id: i64,
    ) -> Result<Vec<Segment>>;

    /// Segments with no annotation row yet, in id order.
    fn tagging_queue(&self) -> Result<Vec<PendingSegment>>;

    /// Persist annotations, one row per dimension, all in one transaction.
    /// Returns the number of rows written.
    fn save_annotations(
        &mut self,
        annotations: &[SegmentAnnotation],
    ) -> Result<usize>;

    fn save_annotation(
        &mut self,
        annotation: &SegmentAnnotation,
    ) -> Result<usize>
    {
        self.save_annotations(std::slice::from_ref(annotation))
    }

    fn annotations_for(
        &self,
        segment_id: i64,
    ) -> Result<Vec<AnnotationRow>>;

    /// Lowest-confidence automatic annotations first.
    fn review_queue(
        &self,
        limit: usize,
    ) -> Result<Vec<ReviewItem>>;

    /// Every segment joined with its source tier/weight and annotations,
    /// ordered by tier then segment id.
    fn weighted_segments(&self) -> Result<Vec<WeightedSegment>>;

    fn parallel_candidates(&self) -> Result<Vec<ParallelCandidate>>;

    /// Point two segments at each other, in one transaction.
    fn set_parallel(
        &mut self,
        a: i64,
        b: i64,
    ) -> Result<()>;
}

pub struct SqliteStore
{
    conn: Connection,
}

impl SqliteStore
{
    /// Open (or create) a database file and apply the schema.
    pub fn open(path: &Path) -> Result<Self>
    {
        if let Some(parent) = path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
        {
            std::fs::create_dir_all(parent)?;
        }
        info!(path = %path.display(), "opening catalog");

        let conn = Connection::open(path)?;
        conn.execute_batch("PRAGMA journal_mode=WAL; PRAGMA foreign_keys=ON;")?;
        Self::with_schema(conn)
    }

    pub fn open_in_memory() -> Result<Self>
    {
        debug!("opening in-memory catalog");
        let conn = Connection::open_in_memory()?;
        conn.execute_batch("PRAGMA foreign_keys=ON;")?;
        Self::with_schema(conn)
    }

    fn with_schema(conn: Connection) -> Result<Self>
    {
        conn.execute_batch(SCHEMA_SQL)?;
        Ok(Self { conn })
    }

    fn log_action(
        tx: &rusqlite::Transaction<'_>,
        source_id: i64,
        action: &str,
        details: &str,
    ) -> Result<()>
    {
        tx.execute(
            "INSERT INTO acquisition_log (source_id, action, details) VALUES (?1, ?2, ?3)",
            params![source_id, action, details],
        )?;
        Ok(())
    }
}

impl CatalogStore for SqliteStore
{
    fn add_sources(
        &mut self,
        sources: &[Source],
    ) -> Result<Vec<i64>>
    {
        let tx = self
            .conn
            .transaction()?;
        let mut ids = Vec::with_capacity(sources.len());
        {
            let mut stmt = tx.prepare(
                "INSERT INTO sources
                 (title, author, date, tier, weight, language, format,
                  content_tags, acquisition_status, file_path, url, notes)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12)",
            )?;
            for s in sources
            {
                stmt.execute(params![
                    s.title,
                    s.author,
                    s.date,
                    s.tier,
                    s.weight,
                    s.language,
                    s.format,
                    serde_json::to_string(&s.content_tags)?,
                    s.status,
                    s.file_path,
                    s.url,
                    s.notes,
                ])?;
                ids.push(tx.last_insert_rowid());
            }
        }
        tx.commit()?;
        info!(count = ids.len(), "added sources");
        Ok(ids)
    }

    fn source(
        &self,
        id: i64,
    ) -> Result<Option<Source>>
    {
        let source = self
            .conn
            .query_row("SELECT * FROM sources WHERE id = ?1", [id], source_from_row)
            .optional()?;
        Ok(source)
    }

    fn sources(
        &self,
        filter: SourceFilter,
    ) -> Result<Vec<Source>>
    {
        let mut stmt = self.conn.prepare(
            "SELECT * FROM sources
             WHERE (?1 IS NULL OR tier = ?1)
               AND (?2 IS NULL OR acquisition_status = ?2)
             ORDER BY tier, title",
        )?;
        let rows = stmt.query_map(params![filter.tier, filter.status], source_from_row)?;
        Ok(rows.collect::<rusqlite::Result<Vec<_>>>()?)
    }

    fn update_status(
        &mut self,
        id: i64,
        status: AcquisitionStatus,
    ) -> Result<()>
    {
        let tx = self
            .conn
            .transaction()?;
        let changed = tx.execute(
            "UPDATE sources SET acquisition_status = ?1, updated_at = datetime('now') WHERE id = ?2",
            params![status, id],
        )?;
        if changed == 0
        {
            return Err(CorpusError::SourceNotFound(id));
        }
        Self::log_action(&tx, id, "status", status.as_str())?;
        tx.commit()?;
        Ok(())
    }

    fn assign_file(
        &mut self,
        id: i64,
        file_path: &str,
    ) -> Result<()>
    {
        let tx = self
            .conn
            .transaction()?;
        let changed = tx.execute(
            "UPDATE sources
             SET file_path = ?1, acquisition_status = 'acquired', updated_at = datetime('now')
             WHERE id = ?2",
            params![file_path, id],
        )?;
        if changed == 0
        {
            return Err(CorpusError::SourceNotFound(id));
        }
        Self::log_action(&tx, id, "file", file_path)?;
        tx.commit()?;
        Ok(())
    }

    fn catalog_stats(&self) -> Result<CatalogStats>
    {
        let mut stats = CatalogStats {
            total: count(&self.conn, "SELECT COUNT(*) FROM sources")?,
            segments: count(&self.conn, "SELECT COUNT(*) FROM segments")?,
            annotated_segments: count(
                &self.conn,
                "SELECT COUNT(DISTINCT segment_id) FROM annotations",
            )?,
            ..Default::default()
        };

        let mut stmt = self
            .conn
            .prepare("SELECT tier, COUNT(*) FROM sources GROUP BY tier ORDER BY tier")?;
        for row in stmt.query_map([], |r| Ok((r.get::<_, Tier>(0)?, r.get::<_, i64>(1)?)))?
        {
            let (tier, n) = row?;
            stats
                .by_tier
                .insert(tier, usize::try_from(n).unwrap_or_default());
        }

        let mut stmt = self.conn.prepare(
            "SELECT acquisition_status, COUNT(*) FROM sources GROUP BY acquisition_status",
        )?;
        for row in stmt.query_map([], |r| Ok((r.get::<_, String>(0)?, r.get::<_, i64>(1)?)))?
        {
            let (status, n) = row?;
            stats
                .by_status
                .insert(status, usize::try_from(n).unwrap_or_default());
        }

        Ok(stats)
    }

    fn insert_segments(
        &mut self,
        segments: &[Segment],
    ) -> Result<Vec<i64>>
    {
        let tx = self
            .conn
            .transaction()?;
        let mut ids = Vec::with_capacity(segments.len());
        {
            let mut stmt = tx.prepare(
                "INSERT INTO segments
                 (source_id, segment_type, title, content, language,
                  sender, recipient, segment_date, ordering, parallel_id)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
            )?;
            for s in segments
            {
                stmt.execute(params![
                    s.source_id,
                    s.segment_type,
                    s.title,
                    s.content,
                    s.language,
                    s.sender,
                    s.recipient,
                    s.segment_date,
                    s.ordering,
                    s.parallel_id,
                ])?;
                ids.push(tx.last_insert_rowid());
            }
        }
        tx.commit()?;
        debug!(count = ids.len(), "inserted segments");
        Ok(ids)
    }

    fn segment(
        &self,
        id: i64,
    ) -> Result<Option<Segment>>
    {
        let seg = self
            .conn
            .query_row("SELECT * FROM segments WHERE id = ?1", [id], segment_from_row)
            .optional()?;
        Ok(seg)
    }

    fn segments_for_source(
        &self,
        source_id: i64,
    ) -> Result<Vec<Segment>>
    {
        let mut stmt = self
            .conn
            .prepare("SELECT * FROM segments WHERE source_id = ?1 ORDER BY ordering, id")?;
        let rows = stmt.query_map([source_id], segment_from_row)?;
        Ok(rows.collect::<rusqlite::Result<Vec<_>>>()?)
    }

    fn tagging_queue(&self) -> Result<Vec<PendingSegment>>
    {
        let mut stmt = self.conn.prepare(
            "SELECT s.id, s.content, src.tier
             FROM segments s
             JOIN sources src ON s.source_id = src.id
             WHERE s.id NOT IN (SELECT DISTINCT segment_id FROM annotations)
             ORDER BY s.id",
        )?;
        let rows = stmt.query_map([], |r| {
            Ok(PendingSegment {
                id: r.get(0)?,
                content: r.get(1)?,
                tier: r.get(2)?,
            })
        })?;
        Ok(rows.collect::<rusqlite::Result<Vec<_>>>()?)
    }

    fn save_annotations(
        &mut self,
        annotations: &[SegmentAnnotation],
    ) -> Result<usize>
    {
        let tx = self
            .conn
            .transaction()?;
        let mut written = 0;
        {
            let mut stmt = tx.prepare(
                "INSERT INTO annotations
                 (segment_id, dimension, subtags, math_topics, psych_state,
                  confidence, contradiction_flag, contradiction_ref, notes, reviewer)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
            )?;
            for row in annotations
                .iter()
                .flat_map(SegmentAnnotation::rows)
            {
                stmt.execute(params![
                    row.segment_id,
                    row.dimension,
                    serde_json::to_string(&row.subtags)?,
                    serde_json::to_string(&row.math_topics)?,
                    row.psych_state,
                    row.confidence,
                    row.contradiction_flag,
                    row.contradiction_ref,
                    row.notes,
                    row.reviewer,
                ])?;
                written += 1;
            }
        }
        tx.commit()?;
        Ok(written)
    }

    fn annotations_for(
        &self,
        segment_id: i64,
    ) -> Result<Vec<AnnotationRow>>
    {
        let mut stmt = self
            .conn
            .prepare("SELECT * FROM annotations WHERE segment_id = ?1 ORDER BY id")?;
        let rows = stmt.query_map([segment_id], annotation_from_row)?;
        Ok(rows.collect::<rusqlite::Result<Vec<_>>>()?)
    }

    fn review_queue(
        &self,
        limit: usize,
    ) -> Result<Vec<ReviewItem>>
    {
        let mut stmt = self.conn.prepare(
            "SELECT a.id, a.segment_id, s.title, a.dimension, a.subtags, a.confidence, a.notes
             FROM annotations a
             JOIN segments s ON s.id = a.segment_id
             WHERE a.reviewer = 'auto'
             ORDER BY a.confidence ASC, a.id ASC
             LIMIT ?1",
        )?;
        let limit = i64::try_from(limit).unwrap_or(i64::MAX);
        let rows = stmt.query_map([limit], |r| {
            Ok(ReviewItem {
                annotation_id: r.get(0)?,
                segment_id: r.get(1)?,
                segment_title: r.get(2)?,
                dimension: r.get(3)?,
                subtags: json_list(r.get(4)?),
                confidence: r.get(5)?,
                notes: r.get(6)?,
            })
        })?;
        Ok(rows.collect::<rusqlite::Result<Vec<_>>>()?)
    }

    fn weighted_segments(&self) -> Result<Vec<WeightedSegment>>
    {
        let mut by_segment: HashMap<i64, Vec<AnnotationRow>> = HashMap::new();
        {
            let mut stmt = self
                .conn
                .prepare("SELECT * FROM annotations ORDER BY segment_id, id")?;
            for row in stmt.query_map([], annotation_from_row)?
            {
                let row = row?;
                by_segment
                    .entry(row.segment_id)
                    .or_default()
                    .push(row);
            }
        }

        let mut stmt = self.conn.prepare(
            "SELECT seg.id, seg.content, src.title, src.tier, src.weight,
                    seg.segment_type, seg.language, seg.sender, seg.recipient
             FROM segments seg
             JOIN sources src ON seg.source_id = src.id
             ORDER BY src.tier, seg.id",
        )?;
        let rows = stmt.query_map([], |r| {
            let segment_id: i64 = r.get(0)?;
            Ok(WeightedSegment {
                segment_id,
                content: r.get(1)?,
                source_title: r.get(2)?,
                tier: r.get(3)?,
                weight: r.get(4)?,
                segment_type: r.get(5)?,
                language: r.get(6)?,
                sender: r.get(7)?,
                recipient: r.get(8)?,
                annotations: Vec::new(),
            })
        })?;

        let mut segments = Vec::new();
        for row in rows
        {
            let mut seg = row?;
            seg.annotations = by_segment
                .remove(&seg.segment_id)
                .unwrap_or_default();
            segments.push(seg);
        }
        Ok(segments)
    }

    fn parallel_candidates(&self) -> Result<Vec<ParallelCandidate>>
    {
        let mut stmt = self.conn.prepare(
            "SELECT a.id, b.id, a.language, b.language
             FROM segments a
             JOIN segments b
               ON a.source_id = b.source_id
              AND a.id < b.id
              AND a.language != b.language
             WHERE a.parallel_id IS NULL
               AND b.parallel_id IS NULL
             ORDER BY a.source_id, a.ordering, b.ordering",
        )?;
        let rows = stmt.query_map([], |r| {
            Ok(ParallelCandidate {
                original: r.get(0)?,
                translation: r.get(1)?,
                original_language: r.get(2)?,
                translation_language: r.get(3)?,
            })
        })?;
        Ok(rows.collect::<rusqlite::Result<Vec<_>>>()?)
    }

    fn set_parallel(
        &mut self,
        a: i64,
        b: i64,
    ) -> Result<()>
    {
        let tx = self
            .conn
            .transaction()?;
        // Former partners of either segment lose their back-pointer.
        let cleared = tx.execute(
            "UPDATE segments SET parallel_id = NULL
             WHERE parallel_id IN (?1, ?2) AND id NOT IN (?1, ?2)",
            params![a, b],
        )?;
        if cleared > 0
        {
            debug!(a, b, cleared, "cleared previous parallel links");
        }
        {
            let mut stmt = tx.prepare("UPDATE segments SET parallel_id = ?1 WHERE id = ?2")?;
            for (target, id) in [(b, a), (a, b)]
            {
                if stmt.execute(params![target, id])? == 0
                {
                    return Err(CorpusError::SegmentNotFound(id));
                }
            }
        }
        tx.commit()?;
        Ok(())
    }
}

fn count(
    conn: &Connection,
    sql: &str,
) -> Result<usize>
{
    let n: i64 = conn.query_row(sql, [], |r| r.get(0))?;
    Ok(usize::try_from(n).unwrap_or_default())
}

/// Decode a JSON string array column; malformed or missing values read as empty.
fn json_list(raw: Option<String>) -> Vec<String>
{
    raw.and_then(|s| serde_json::from_str(&s).ok())
        .unwrap_or_default()
}

fn source_from_row(r: &Row<'_>) -> rusqlite::Result<Source>
{
    Ok(Source {
        id: r.get("id")?,
        title: r.get("title")?,
        author: r.get("author")?,
        date: r.get("date")?,
        tier: r.get("tier")?,
        weight: r.get("weight")?,
        language: r.get("language")?,
        format: r.get("format")?,
        content_tags: json_list(r.get("content_tags")?),
        status: r.get("acquisition_status")?,
        file_path: r.get("file_path")?,
        url: r.get("url")?,
        notes: r.get("notes")?,
    })
}

fn segment_from_row(r: &Row<'_>) -> rusqlite::Result<Segment>
{
    Ok(Segment {
        id: r.get("id")?,
        source_id: r.get("source_id")?,
        segment_type: r.get("segment_type")?,
        title: r.get("title")?,
        content: r.get("content")?,
        language: r.get("language")?,
        sender: r.get("sender")?,
        recipient: r.get("recipient")?,
        segment_date: r.get("segment_date")?,
        ordering: r.get("ordering")?,
        parallel_id: r.get("parallel_id")?,
    })
}

fn annotation_from_row(r: &Row<'_>) -> rusqlite::Result<AnnotationRow>
{
    Ok(AnnotationRow {
        id: r.get("id")?,
        segment_id: r.get("segment_id")?,
        dimension: r.get("dimension")?,
        subtags: json_list(r.get("subtags")?),
        math_topics: json_list(r.get("math_topics")?),
        psych_state: r.get("psych_state")?,
        confidence: r.get("confidence")?,
        contradiction_flag: r.get("contradiction_flag")?,
        contradiction_ref: r.get("contradiction_ref")?,
        notes: r.get("notes")?,
        reviewer: r.get("reviewer")?,
    })
}

/// Text-column mapping for the closed enumerations.
macro_rules! sql_text_enum {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl ToSql for $ty
            {
                fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>>
                {
                    Ok(ToSqlOutput::from(self.as_str()))
                }
            }

            impl FromSql for $ty
            {
                fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self>
                {
                    value
                        .as_str()?
                        .parse()
                        .map_err(|e: CorpusError| FromSqlError::Other(Box::new(e)))
                }
            }
        )+
    };
}

sql_text_enum!(SourceFormat, AcquisitionStatus, SegmentType, Dimension);

#[cfg(test)]
mod tests
{
    use indexmap::IndexMap;

    use super::*;

    fn store_with_source(tier: Tier) -> (SqliteStore, i64)
    {
        let mut store = SqliteStore::open_in_memory().unwrap();
        let ids = store
            .add_sources(&[Source::new("Briefe", tier, SourceFormat::Collection)])
            .unwrap();
        (store, ids[0])
    }

    fn annotation(
        segment_id: i64,
        dims: &[Dimension],
    ) -> SegmentAnnotation
    {
        SegmentAnnotation {
            segment_id,
            dimensions: dims.to_vec(),
            subtags: IndexMap::new(),
            confidence: 0.5,
            ..Default::default()
        }
    }

    #[test]
    fn sources_round_trip_and_filter()
    {
        let mut store = SqliteStore::open_in_memory().unwrap();
        store
            .add_sources(&[
                Source::new("A", 1, SourceFormat::Paper).tags(&["uncountability"]),
                Source::new("B", 8, SourceFormat::Book).status(AcquisitionStatus::Excluded),
            ])
            .unwrap();

        let tier1 = store
            .sources(SourceFilter { tier: Some(1), status: None })
            .unwrap();
        assert_eq!(tier1.len(), 1);
        assert_eq!(tier1[0].content_tags, vec!["uncountability"]);

        let excluded = store
            .sources(SourceFilter { tier: None, status: Some(AcquisitionStatus::Excluded) })
            .unwrap();
        assert_eq!(excluded[0].title, "B");
        assert_eq!(excluded[0].weight, 0.0);
    }

    #[test]
    fn status_and_file_updates()
    {
        let (mut store, id) = store_with_source(2);
        store
            .update_status(id, AcquisitionStatus::Available)
            .unwrap();
        store
            .assign_file(id, "data/raw/briefe.txt")
            .unwrap();

        let src = store
            .source(id)
            .unwrap()
            .unwrap();
        assert_eq!(src.status, AcquisitionStatus::Acquired);
        assert_eq!(src.file_path.as_deref(), Some("data/raw/briefe.txt"));

        assert!(matches!(
            store.update_status(999, AcquisitionStatus::Processed),
            Err(CorpusError::SourceNotFound(999))
        ));

        let stats = store
            .catalog_stats()
            .unwrap();
        assert_eq!(stats.total, 1);
        assert_eq!(stats.by_tier[&2], 1);
        assert_eq!(stats.by_status["acquired"], 1);
    }

    #[test]
    fn tagging_queue_excludes_annotated_segments()
    {
        let (mut store, src) = store_with_source(1);
        let mut a = Segment::new(SegmentType::Letter, "a", "erster Brief", 0);
        a.source_id = src;
        let mut b = Segment::new(SegmentType::Letter, "b", "zweiter Brief", 1);
        b.source_id = src;
        let ids = store
            .insert_segments(&[a, b])
            .unwrap();

        store
            .save_annotation(&annotation(ids[0], &[Dimension::PersonalContext]))
            .unwrap();

        let queue = store
            .tagging_queue()
            .unwrap();
        assert_eq!(queue.len(), 1);
        assert_eq!(queue[0].id, ids[1]);
        assert_eq!(queue[0].tier, 1);
    }

    #[test]
    fn failed_row_rolls_back_the_whole_annotation()
    {
        // Given a trigger that rejects the second dimension of an annotation
        let (mut store, src) = store_with_source(1);
        let mut seg = Segment::new(SegmentType::Section, "s", "Inhalt", 0);
        seg.source_id = src;
        let id = store
            .insert_segments(&[seg])
            .unwrap()[0];
        store
            .conn
            .execute_batch(
                "CREATE TRIGGER reject_theology BEFORE INSERT ON annotations
                 WHEN NEW.dimension = 'theological_framework'
                 BEGIN SELECT RAISE(ABORT, 'rejected'); END;",
            )
            .unwrap();

        // When
        let result = store.save_annotation(&annotation(
            id,
            &[Dimension::MathematicalIntuition, Dimension::TheologicalFramework],
        ));

        // Then
        assert!(matches!(result, Err(CorpusError::Store(_))));
        assert!(
            store
                .annotations_for(id)
                .unwrap()
                .is_empty()
        );
        assert_eq!(
            store
                .tagging_queue()
                .unwrap()
                .len(),
            1
        );
    }

    #[test]
    fn weighted_segments_join_tier_and_annotations()
    {
        let (mut store, src) = store_with_source(3);
        let mut seg = Segment::new(SegmentType::Section, "s", "Kronecker", 0);
        seg.source_id = src;
        let id = store
            .insert_segments(&[seg])
            .unwrap()[0];
        let mut ann = annotation(id, &[Dimension::KroneckerConflict]);
        ann.subtags
            .insert(Dimension::KroneckerConflict, vec!["finitism".to_string()]);
        store
            .save_annotation(&ann)
            .unwrap();

        let segs = store
            .weighted_segments()
            .unwrap();
        assert_eq!(segs.len(), 1);
        assert_eq!(segs[0].tier, 3);
        assert_eq!(segs[0].weight, 0.70);
        assert_eq!(segs[0].annotations[0].subtags, vec!["finitism"]);
    }

    #[test]
    fn schema_rejects_contradiction_without_reference()
    {
        let (mut store, src) = store_with_source(1);
        let mut seg = Segment::new(SegmentType::Section, "s", "x", 0);
        seg.source_id = src;
        let id = store
            .insert_segments(&[seg])
            .unwrap()[0];

        let mut ann = annotation(id, &[Dimension::PersonalContext]);
        ann.contradiction_flag = true;
        assert!(store.save_annotation(&ann).is_err());
    }

    #[test]
    fn duplicate_ordering_within_a_source_is_rejected()
    {
        // Given: a source with one stored segment
        let (mut store, src) = store_with_source(1);
        let mut first = Segment::new(SegmentType::Letter, "a", "erster Brief", 0);
        first.source_id = src;
        store
            .insert_segments(&[first.clone()])
            .unwrap();

        // When: a batch repeats that ordering
        let mut next = Segment::new(SegmentType::Letter, "b", "zweiter Brief", 1);
        next.source_id = src;
        let err = store.insert_segments(&[next, first]);

        // Then: the whole batch rolls back
        assert!(matches!(err, Err(CorpusError::Store(_))));
        assert_eq!(
            store
                .segments_for_source(src)
                .unwrap()
                .len(),
            1
        );
    }

    #[test]
    fn review_queue_orders_by_confidence()
    {
        let (mut store, src) = store_with_source(1);
        let mut seg = Segment::new(SegmentType::Section, "Titel", "x", 0);
        seg.source_id = src;
        let id = store
            .insert_segments(&[seg])
            .unwrap()[0];

        let mut low = annotation(id, &[Dimension::PersonalContext]);
        low.confidence = 0.15;
        let mut human = annotation(id, &[Dimension::KroneckerConflict]);
        human.reviewer = "reviewer-1".to_string();
        store
            .save_annotations(&[annotation(id, &[Dimension::MathematicalIntuition]), low, human])
            .unwrap();

        let queue = store
            .review_queue(10)
            .unwrap();
        assert_eq!(queue.len(), 2);
        assert_eq!(queue[0].confidence, 0.15);
        assert_eq!(queue[0].segment_title, "Titel");
    }
}
