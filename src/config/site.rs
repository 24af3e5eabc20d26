//! Blog configuration (blog.yml)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Top-level configuration, loaded from `blog.yml` in the base directory.
/// Every field has a default so a missing file or a partial one works.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BlogConfig {
    // Site
    pub title: String,
    pub description: String,
    pub author: String,
    pub language: String,
    pub url: String,

    // Content
    pub posts: PostsConfig,

    // HTML export
    pub output_dir: String,

    // Admin surface
    pub admin: AdminConfig,
}

impl Default for BlogConfig {
    fn default() -> Self {
        Self {
            title: "My Blog".to_string(),
            description: "A blog about technology and development".to_string(),
            author: "Admin".to_string(),
            language: "en".to_string(),
            url: "http://example.com".to_string(),
            posts: PostsConfig::default(),
            output_dir: "public".to_string(),
            admin: AdminConfig::default(),
        }
    }
}

impl BlogConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: BlogConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }
}

/// Where posts live and how their files are named
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PostsConfig {
    /// Directory holding one Markdown file per post, relative to the base
    pub dir: String,
    /// Post file extension, without the dot
    pub extension: String,
}

impl Default for PostsConfig {
    fn default() -> Self {
        Self {
            dir: "content/posts".to_string(),
            extension: "md".to_string(),
        }
    }
}

/// Admin settings. The credential pair is static configuration; the
/// excerpt limit is a form-level bound enforced by the CLI, never by the
/// store itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AdminConfig {
    pub email: String,
    pub password: String,
    pub excerpt_limit: usize,
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            email: "admin@example.com".to_string(),
            password: "admin123".to_string(),
            excerpt_limit: 300,
        }
    }
}
