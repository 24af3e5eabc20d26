//! Create a new post

use anyhow::{bail, Context, Result};
use chrono::Local;
use std::fs;
use std::path::Path;

use crate::auth::AuthContext;
use crate::content::PostDraft;
use crate::Blog;

/// Create a post from the admin form fields and return its slug. The date
/// defaults to today; the body may come inline or from a file.
pub fn run(
    blog: &Blog,
    auth: &AuthContext,
    title: &str,
    excerpt: &str,
    date: Option<&str>,
    content: Option<&str>,
    file: Option<&Path>,
) -> Result<String> {
    if title.trim().is_empty() {
        bail!("title must not be empty");
    }
    let limit = blog.config.admin.excerpt_limit;
    if excerpt.chars().count() > limit {
        bail!("excerpt is longer than {} characters", limit);
    }

    let body = match (content, file) {
        (Some(text), _) => text.to_string(),
        (None, Some(path)) => fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        (None, None) => String::new(),
    };

    let draft = PostDraft {
        title: title.to_string(),
        date: date
            .map(str::to_string)
            .unwrap_or_else(|| Local::now().format("%Y-%m-%d").to_string()),
        excerpt: excerpt.to_string(),
        content: body,
    };

    let slug = blog.store().create(&draft)?;
    tracing::debug!(by = %auth.email(), slug = %slug, "post created");
    println!("Created: {}", slug);
    Ok(slug)
}
