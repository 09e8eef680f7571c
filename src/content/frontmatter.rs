//! Front-matter parsing
//!
//! Splits a content file into its `---`-delimited YAML block and the
//! body. The block is kept as an untyped mapping; typing it is the
//! validator's job.

use anyhow::{anyhow, Context, Result};
use serde_yaml::Mapping;

/// Raw front-matter fields from a post file
#[derive(Debug, Clone, Default)]
pub struct FrontMatter {
    pub fields: Mapping,
}

impl FrontMatter {
    /// Parse front-matter from content string
    /// Returns (front_matter, remaining_content)
    pub fn parse(content: &str) -> Result<(Self, &str)> {
        let trimmed = content.trim_start();

        let Some(rest) = trimmed.strip_prefix("---") else {
            // No front-matter block at all
            return Ok((FrontMatter::default(), content));
        };
        let end_pos = rest
            .find("\n---")
            .ok_or_else(|| anyhow!("unclosed front-matter block"))?;
        let yaml_content = &rest[..end_pos];
        let remaining = rest[end_pos + 4..].trim_start_matches(['\n', '\r']);

        if yaml_content.trim().is_empty() {
            return Ok((FrontMatter::default(), remaining));
        }

        let fields: Mapping =
            serde_yaml::from_str(yaml_content).context("invalid YAML in front-matter block")?;
        Ok((FrontMatter { fields }, remaining))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_front_matter_block() {
        let content = r#"---
title: "Hello World"
description: "My first post"
pubDate: "Mar 15 2024"
tags:
  - rust
  - blog
---

This is the content.
"#;

        let (fm, remaining) = FrontMatter::parse(content).unwrap();
        assert_eq!(
            fm.fields.get("title").and_then(|v| v.as_str()),
            Some("Hello World")
        );
        assert_eq!(
            fm.fields.get("tags").and_then(|v| v.as_sequence()).map(|s| s.len()),
            Some(2)
        );
        assert!(remaining.contains("This is the content."));
    }

    #[test]
    fn test_no_front_matter() {
        let content = "Just a body, nothing else.\n";
        let (fm, remaining) = FrontMatter::parse(content).unwrap();
        assert!(fm.fields.is_empty());
        assert_eq!(remaining, content);
    }

    #[test]
    fn test_empty_block() {
        let content = "---\n---\n\nBody.\n";
        let (fm, remaining) = FrontMatter::parse(content).unwrap();
        assert!(fm.fields.is_empty());
        assert!(remaining.contains("Body."));
    }

    #[test]
    fn test_unclosed_block_is_an_error() {
        let content = "---\ntitle: Oops\n\nBody without a closing fence.\n";
        assert!(FrontMatter::parse(content).is_err());
    }

    #[test]
    fn test_invalid_yaml_is_an_error() {
        let content = "---\ntitle: [unbalanced\n---\nBody.\n";
        assert!(FrontMatter::parse(content).is_err());
    }
}
