//! Show a single post

use anyhow::Result;

use crate::content::MarkdownRenderer;
use crate::Blog;

/// Print one post's fields and body; `--html` renders the body instead
pub fn run(blog: &Blog, slug: &str, as_html: bool) -> Result<()> {
    let post = blog.store().get(slug)?;

    if as_html {
        let renderer = MarkdownRenderer::new();
        println!("{}", renderer.render(&post.content)?);
        return Ok(());
    }

    println!("Title:   {}", post.title);
    println!("Date:    {}", post.date);
    println!("Excerpt: {}", post.excerpt);
    println!("Slug:    {}", post.slug);
    println!();
    println!("{}", post.content);

    Ok(())
}
