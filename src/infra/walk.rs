//! Discovery of source documents under a directory.
//!
//! Respects .gitignore and friends, skips dotfiles, keeps only the
//! extensions the extractors understand and returns paths sorted so that
//! segment ordering is reproducible across runs.

use std::path::{Path, PathBuf};

use globset::{Glob, GlobSet, GlobSetBuilder};
use ignore::{DirEntry, WalkBuilder};
use tracing::warn;

use crate::error::{CorpusError, Result};

/// File patterns the text extractors accept.
pub const SOURCE_PATTERNS: [&str; 4] = ["*.txt", "*.md", "*.html", "*.htm"];

pub struct SourceWalker
{
    /// Files must match one of these
    include: GlobSet,

    /// Directories and files matching these are skipped
    exclude: GlobSet,

    max_depth: Option<usize>,
}

fn glob_set(patterns: &[&str]) -> Result<GlobSet>
{
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns
    {
        let glob = Glob::new(&format!("**/{pattern}"))
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))?;
        builder.add(glob);
    }
    builder
        .build()
        .map_err(|e| CorpusError::Io(std::io::Error::new(std::io::ErrorKind::InvalidInput, e)))
}

impl SourceWalker
{
    /// Walker for supported source files, skipping anything matching `excludes`
    /// (e.g. "drafts/**", "*.orig.md").
    pub fn new(excludes: &[&str]) -> Result<Self>
    {
        Ok(Self {
            include: glob_set(&SOURCE_PATTERNS)?,
            exclude: glob_set(excludes)?,
            max_depth: None,
        })
    }

    pub fn with_max_depth(
        mut self,
        depth: Option<usize>,
    ) -> Self
    {
        self.max_depth = depth;
        self
    }

    /// Supported files under `root`, sorted. A file path is returned as is.
    pub fn walk(
        &self,
        root: &Path,
    ) -> Vec<PathBuf>
    {
        if root.is_file()
        {
            return vec![root.to_path_buf()];
        }

        let mut b = WalkBuilder::new(root);
        b.hidden(true);
        b.git_ignore(true);
        b.git_exclude(true);
        b.max_depth(self.max_depth);

        let exclude = self
            .exclude
            .clone();
        b.filter_entry(move |ent: &DirEntry| !exclude.is_match(ent.path()));

        let mut out: Vec<PathBuf> = b
            .build()
            .filter_map(|res| match res
            {
                Ok(entry) => Some(entry),
                Err(e) =>
                {
                    warn!(error = %e, "skipping unreadable entry");
                    None
                }
            })
            .filter(|entry| {
                entry
                    .file_type()
                    .is_some_and(|ft| ft.is_file())
            })
            .map(|entry| entry.into_path())
            .filter(|path| {
                self.include
                    .is_match(path)
            })
            .collect();

        out.sort();
        out
    }
}

#[cfg(test)]
mod tests
{
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_file(
        root: &Path,
        rel: &str,
        contents: &str,
    )
    {
        let p = root.join(rel);
        if let Some(parent) = p.parent()
        {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(p, contents).unwrap();
    }

    #[test]
    fn finds_supported_files_in_sorted_order()
    {
        // Given
        let dir = TempDir::new().unwrap();
        let root = dir.path();
        write_file(root, "b/brief_02.txt", "zwei");
        write_file(root, "a/brief_01.md", "eins");
        write_file(root, "a/scan.pdf", "%PDF");
        write_file(root, "c/artikel.html", "<p>drei</p>");
        write_file(root, ".cache/old.txt", "hidden");

        // When
        let files = SourceWalker::new(&[])
            .unwrap()
            .walk(root);

        // Then
        let rel: Vec<_> = files
            .iter()
            .map(|p| p.strip_prefix(root).unwrap().to_string_lossy().replace('\\', "/"))
            .collect();
        assert_eq!(rel, vec!["a/brief_01.md", "b/brief_02.txt", "c/artikel.html"]);
    }

    #[test]
    fn excludes_prune_directories()
    {
        let dir = TempDir::new().unwrap();
        let root = dir.path();
        write_file(root, "drafts/entwurf.txt", "x");
        write_file(root, "final.txt", "y");

        let files = SourceWalker::new(&["drafts"])
            .unwrap()
            .walk(root);
        assert_eq!(files, vec![root.join("final.txt")]);
    }

    #[test]
    fn single_file_is_returned_unfiltered()
    {
        let dir = TempDir::new().unwrap();
        write_file(dir.path(), "scan.pdf", "%PDF");
        let path = dir
            .path()
            .join("scan.pdf");

        assert_eq!(
            SourceWalker::new(&[])
                .unwrap()
                .walk(&path),
            vec![path]
        );
    }
}
