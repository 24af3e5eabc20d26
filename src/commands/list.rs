//! List posts

use anyhow::Result;

use crate::Blog;

/// Print every post, newest first
pub fn run(blog: &Blog, json: bool) -> Result<()> {
    let posts = blog.store().list()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&posts)?);
        return Ok(());
    }

    println!("Posts ({}):", posts.len());
    for post in &posts {
        let date = post
            .date_value()
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_else(|| post.date.clone());
        println!("  {} - {} [{}]", date, post.title, post.slug);
    }

    Ok(())
}
