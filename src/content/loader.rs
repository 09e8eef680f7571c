//! Content loader - walks the content directory and validates every file

use anyhow::Result;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use super::{validate, FieldViolation, FrontMatter, PostRecord};
use crate::Blog;

/// Validation outcome for one content file
#[derive(Debug, Clone)]
pub enum FileOutcome {
    Valid(PostRecord),
    Invalid(Vec<FieldViolation>),
    /// Could not be read or its front-matter block could not be parsed
    Unreadable(String),
}

/// Report for one discovered content file
#[derive(Debug, Clone)]
pub struct FileReport {
    /// Full path on disk
    pub path: PathBuf,
    /// Path relative to the content directory
    pub source: String,
    pub outcome: FileOutcome,
}

impl FileReport {
    pub fn is_valid(&self) -> bool {
        matches!(self.outcome, FileOutcome::Valid(_))
    }
}

/// Walks the content directory and validates what it finds
pub struct ContentLoader<'a> {
    blog: &'a Blog,
}

impl<'a> ContentLoader<'a> {
    pub fn new(blog: &'a Blog) -> Self {
        Self { blog }
    }

    /// Validate every content file, one report per file
    pub fn check_all(&self) -> Result<Vec<FileReport>> {
        let content_dir = &self.blog.content_dir;
        if !content_dir.exists() {
            return Ok(Vec::new());
        }

        let mut reports = Vec::new();

        for entry in WalkDir::new(content_dir)
            .follow_links(true)
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();
            if path.is_file() && is_content_file(path) {
                reports.push(self.check_file(path));
            }
        }

        // Stable order for build output
        reports.sort_by(|a, b| a.source.cmp(&b.source));

        Ok(reports)
    }

    /// Load the valid, non-draft posts, newest first
    pub fn load_posts(&self) -> Result<Vec<PostRecord>> {
        let mut posts: Vec<PostRecord> = self
            .check_all()?
            .into_iter()
            .filter_map(|report| match report.outcome {
                FileOutcome::Valid(post) => Some(post),
                _ => {
                    tracing::warn!("Skipping invalid content file {:?}", report.path);
                    None
                }
            })
            .filter(|post| !post.is_draft)
            .collect();

        posts.sort_by(|a, b| b.pub_date.cmp(&a.pub_date));

        Ok(posts)
    }

    fn check_file(&self, path: &Path) -> FileReport {
        let source = path
            .strip_prefix(&self.blog.content_dir)
            .unwrap_or(path)
            .to_string_lossy()
            .to_string();

        let outcome = match fs::read_to_string(path) {
            Ok(content) => match FrontMatter::parse(&content) {
                Ok((fm, _body)) => match validate(&fm.fields) {
                    Ok(post) => FileOutcome::Valid(post),
                    Err(violations) => FileOutcome::Invalid(violations),
                },
                Err(e) => FileOutcome::Unreadable(e.to_string()),
            },
            Err(e) => FileOutcome::Unreadable(e.to_string()),
        };

        FileReport {
            path: path.to_path_buf(),
            source,
            outcome,
        }
    }
}

/// A `relatedPosts` entry that names no known post
#[derive(Debug, Clone, PartialEq)]
pub struct DanglingReference {
    /// File containing the reference
    pub source: String,
    /// The slug that resolved to nothing
    pub slug: String,
}

/// Cross-record pass over the reports: every `relatedPosts` slug must
/// name some valid record. Runs after per-file validation because the
/// full slug set only exists once the walk is done.
pub fn dangling_references(reports: &[FileReport]) -> Vec<DanglingReference> {
    let known: HashSet<&str> = reports
        .iter()
        .filter_map(|report| match &report.outcome {
            FileOutcome::Valid(post) => Some(post.slug.as_str()),
            _ => None,
        })
        .collect();

    let mut dangling = Vec::new();
    for report in reports {
        if let FileOutcome::Valid(post) = &report.outcome {
            for slug in &post.related_posts {
                if !known.contains(slug.as_str()) {
                    dangling.push(DanglingReference {
                        source: report.source.clone(),
                        slug: slug.clone(),
                    });
                }
            }
        }
    }
    dangling
}

/// Check if a file is a content file
fn is_content_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e == "md" || e == "mdx")
        .unwrap_or(false)
}
