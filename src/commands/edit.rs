//! Edit an existing post

use anyhow::{bail, Result};

use crate::auth::AuthContext;
use crate::content::PostDraft;
use crate::Blog;

/// Field overrides; anything left `None` keeps its stored value
#[derive(Debug, Default)]
pub struct EditFields {
    pub title: Option<String>,
    pub date: Option<String>,
    pub excerpt: Option<String>,
    pub content: Option<String>,
}

/// Apply field changes to a post. The slug never changes on edit, even
/// when the title does.
pub fn run(blog: &Blog, auth: &AuthContext, slug: &str, fields: EditFields) -> Result<()> {
    let store = blog.store();
    let mut draft = PostDraft::from(store.get(slug)?);

    if let Some(title) = fields.title {
        draft.title = title;
    }
    if let Some(date) = fields.date {
        draft.date = date;
    }
    if let Some(excerpt) = fields.excerpt {
        draft.excerpt = excerpt;
    }
    if let Some(content) = fields.content {
        draft.content = content;
    }

    if draft.title.trim().is_empty() {
        bail!("title must not be empty");
    }
    let limit = blog.config.admin.excerpt_limit;
    if draft.excerpt.chars().count() > limit {
        bail!("excerpt is longer than {} characters", limit);
    }

    store.update(slug, &draft)?;
    tracing::debug!(by = %auth.email(), slug = %slug, "post updated");
    println!("Updated: {}", slug);

    Ok(())
}
