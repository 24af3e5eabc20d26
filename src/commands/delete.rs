//! Delete a post

use anyhow::Result;

use crate::auth::AuthContext;
use crate::Blog;

/// Remove a post's file. No trash, no undo.
pub fn run(blog: &Blog, auth: &AuthContext, slug: &str) -> Result<()> {
    blog.store().delete(slug)?;
    tracing::debug!(by = %auth.email(), slug = %slug, "post deleted");
    println!("Deleted: {}", slug);
    Ok(())
}
