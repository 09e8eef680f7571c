//! bloguu-rs: content tooling for an Astro-style blog
//!
//! This crate provides the build-time front-matter validator and the
//! interactive post scaffolder for a blog whose content lives as
//! `.md`/`.mdx` files under `src/content/<collection>/`.

pub mod commands;
pub mod config;
pub mod content;
pub mod helpers;

use anyhow::Result;
use std::path::Path;

/// The main blog application
#[derive(Clone)]
pub struct Blog {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: std::path::PathBuf,
    /// Content directory (where collections live)
    pub content_dir: std::path::PathBuf,
}

impl Blog {
    /// Create a new Blog instance from a directory
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join("_config.yml");

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            config::SiteConfig::default()
        };

        let content_dir = base_dir.join(&config.content_dir);

        Ok(Self {
            config,
            base_dir,
            content_dir,
        })
    }

    /// Validate every content file and collect the per-file reports
    pub fn check(&self) -> Result<Vec<content::loader::FileReport>> {
        content::loader::ContentLoader::new(self).check_all()
    }
}
