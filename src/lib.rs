//! inkpost: a Markdown-file blog engine with an admin CLI
//!
//! Posts live as individual Markdown files with YAML front-matter inside
//! a single directory; that directory is the only source of truth. The
//! crate provides the content store, a static HTML exporter, and the
//! admin commands wired up by the CLI binary.

pub mod auth;
pub mod commands;
pub mod config;
pub mod content;
pub mod generator;

use anyhow::Result;
use std::path::{Path, PathBuf};

use content::ContentStore;

/// The main blog application
#[derive(Clone)]
pub struct Blog {
    /// Blog configuration
    pub config: config::BlogConfig,
    /// Base directory
    pub base_dir: PathBuf,
    /// Directory holding the post files
    pub posts_dir: PathBuf,
    /// Output directory for HTML export
    pub output_dir: PathBuf,
}

impl Blog {
    /// Create a blog instance rooted at a directory, loading `blog.yml`
    /// when present and falling back to defaults otherwise
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join("blog.yml");

        let config = if config_path.exists() {
            config::BlogConfig::load(&config_path)?
        } else {
            config::BlogConfig::default()
        };

        let posts_dir = base_dir.join(&config.posts.dir);
        let output_dir = base_dir.join(&config.output_dir);

        Ok(Self {
            config,
            base_dir,
            posts_dir,
            output_dir,
        })
    }

    /// The content store over this blog's post directory
    pub fn store(&self) -> ContentStore {
        ContentStore::new(&self.posts_dir, &self.config.posts.extension)
    }
}
