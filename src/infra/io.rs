//! Source-file reading and text extraction.
//!
//! Extraction is dispatched on the file extension: plain text and Markdown
//! pass through, HTML is reduced to its readable blocks, and anything else
//! is rejected with [`CorpusError::UnsupportedFormat`].

use std::fs::File;
use std::io;
use std::path::Path;
use std::sync::LazyLock;

use memmap2::Mmap;
use regex::Regex;
use tracing::debug;

use crate::error::{CorpusError, Result};

const MMAP_THRESHOLD: u64 = 1024 * 1024; // 1 MiB

pub enum FileContent {
    Mapped(Mmap),
    Buffered(String),
}

impl AsRef<str> for FileContent {
    fn as_ref(&self) -> &str {
        match self {
            // Validated as UTF-8 in read_file_smart
            FileContent::Mapped(mmap) => std::str::from_utf8(mmap).unwrap_or_default(),
            FileContent::Buffered(s) => s.as_str(),
        }
    }
}

/// Read a UTF-8 file, memory-mapping anything above 1 MiB.
pub fn read_file_smart<P: AsRef<Path>>(path: P) -> Result<FileContent> {
    let path = path.as_ref();
    let metadata = std::fs::metadata(path)?;

    if metadata.len() > MMAP_THRESHOLD {
        let file = File::open(path)?;

        // Safety: the mapping is read-only and dropped before the file is written again
        let mmap = unsafe { Mmap::map(&file) }?;
        if let Err(e) = std::str::from_utf8(&mmap) {
            return Err(io::Error::new(io::ErrorKind::InvalidData, e).into());
        }
        debug!(path = %path.display(), bytes = metadata.len(), "mapped source file");
        Ok(FileContent::Mapped(mmap))
    } else {
        Ok(FileContent::Buffered(std::fs::read_to_string(path)?))
    }
}

/// Converts a raw document into plain text for segmentation.
pub trait TextExtractor {
    fn extract(&self, raw: &str) -> String;
}

/// `.txt` and `.md`: the text is used as is.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainText;

impl TextExtractor for PlainText {
    fn extract(&self, raw: &str) -> String {
        raw.to_string()
    }
}

/// `.html` and `.htm`: headings, paragraphs, quotations and list items.
#[derive(Debug, Clone, Copy, Default)]
pub struct Html;

static DROPPED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?is)<script\b.*?</script\s*>|<style\b.*?</style\s*>|<nav\b.*?</nav\s*>|<footer\b.*?</footer\s*>|<!--.*?-->",
    )
    .expect("dropped-element pattern compiles")
});

static BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<(h[1-6]|p|blockquote|li)\b[^>]*>(.*?)</(?:h[1-6]|p|blockquote|li)\s*>")
        .expect("block pattern compiles")
});

static TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]*>").expect("tag pattern compiles"));

static SPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("whitespace pattern compiles"));

fn inner_text(fragment: &str) -> String {
    let text = TAG.replace_all(fragment, " ");
    let text = text
        .replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&");
    SPACE.replace_all(&text, " ").trim().to_string()
}

impl TextExtractor for Html {
    fn extract(&self, raw: &str) -> String {
        let cleaned = DROPPED.replace_all(raw, "");
        let mut parts = Vec::new();

        for caps in BLOCK.captures_iter(&cleaned) {
            let text = inner_text(&caps[2]);
            if text.is_empty() {
                continue;
            }
            let prefix = match caps[1].to_ascii_lowercase().as_str() {
                "h1" => "# ",
                "h2" => "## ",
                "h3" | "h4" | "h5" | "h6" => "### ",
                "blockquote" => "> ",
                "li" => "- ",
                _ => "",
            };
            parts.push(format!("{prefix}{text}"));
        }

        parts.join("\n\n")
    }
}

/// Pick the extractor for a path by its extension.
pub fn extractor_for(path: &Path) -> Result<&'static dyn TextExtractor> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();

    match ext.as_str() {
        "txt" | "md" => Ok(&PlainText),
        "html" | "htm" => Ok(&Html),
        _ => Err(CorpusError::UnsupportedFormat {
            path: path.to_path_buf(),
            extension: ext,
        }),
    }
}

/// Read and extract a source file. Unsupported extensions fail before any read.
pub fn extract_text(path: &Path) -> Result<String> {
    let extractor = extractor_for(path)?;
    let content = read_file_smart(path)?;
    Ok(extractor.extract(content.as_ref()))
}
