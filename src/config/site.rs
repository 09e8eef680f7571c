//! Site configuration (_config.yml)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,
    pub author: String,
    pub url: String,

    // Directory
    pub content_dir: String,

    // Writing
    pub default_collection: String,
    pub new_post_ext: String,

    // Store any additional fields
    #[serde(flatten)]
    pub extra: HashMap<String, serde_yaml::Value>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "bloguu".to_string(),
            author: String::new(),
            url: "http://example.com".to_string(),

            content_dir: "src/content".to_string(),

            default_collection: "blog".to_string(),
            new_post_ext: "mdx".to_string(),

            extra: HashMap::new(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: SiteConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SiteConfig::default();
        assert_eq!(config.content_dir, "src/content");
        assert_eq!(config.default_collection, "blog");
        assert_eq!(config.new_post_ext, "mdx");
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: SiteConfig = serde_yaml::from_str("title: My Blog\nauthor: haneul\n").unwrap();
        assert_eq!(config.title, "My Blog");
        assert_eq!(config.author, "haneul");
        assert_eq!(config.content_dir, "src/content");
    }
}
