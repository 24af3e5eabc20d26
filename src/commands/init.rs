//! Initialize a new blog directory

use anyhow::Result;
use std::fs;
use std::path::Path;

use crate::config::BlogConfig;

/// Scaffold `blog.yml` and the post directory. Refuses to touch a
/// directory that already has a config.
pub fn run(base_dir: &Path) -> Result<()> {
    let config_path = base_dir.join("blog.yml");
    if config_path.exists() {
        anyhow::bail!("already initialized: {} exists", config_path.display());
    }

    fs::create_dir_all(base_dir)?;

    let config = BlogConfig::default();
    fs::write(&config_path, serde_yaml::to_string(&config)?)?;
    fs::create_dir_all(base_dir.join(&config.posts.dir))?;

    tracing::info!(path = %base_dir.display(), "initialized blog");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_init_scaffolds_config_and_posts_dir() {
        let temp = TempDir::new().unwrap();
        run(temp.path()).unwrap();

        assert!(temp.path().join("blog.yml").is_file());
        assert!(temp.path().join("content/posts").is_dir());
    }

    #[test]
    fn test_init_refuses_to_overwrite() {
        let temp = TempDir::new().unwrap();
        run(temp.path()).unwrap();
        assert!(run(temp.path()).is_err());
    }
}
