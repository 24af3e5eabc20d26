//! Static HTML export
//!
//! Renders every post to `{output_dir}/posts/{slug}.html` and writes an
//! index page listing title, date and excerpt in store order (newest
//! first). The page shells are deliberately plain; styling belongs to
//! whoever serves the files.

use anyhow::Result;
use std::fs;

use crate::content::{html_escape, MarkdownRenderer, Post};
use crate::Blog;

pub struct Generator<'a> {
    blog: &'a Blog,
    renderer: MarkdownRenderer,
}

impl<'a> Generator<'a> {
    pub fn new(blog: &'a Blog) -> Self {
        Self {
            blog,
            renderer: MarkdownRenderer::new(),
        }
    }

    /// Export all posts and the index page, returning the post count
    pub fn generate(&self) -> Result<usize> {
        let posts = self.blog.store().list()?;

        let posts_out = self.blog.output_dir.join("posts");
        fs::create_dir_all(&posts_out)?;

        for post in &posts {
            let body = self.renderer.render(&post.content)?;
            let page = self.post_page(post, &body);
            let path = posts_out.join(format!("{}.html", post.slug));
            fs::write(&path, page)?;
            tracing::debug!(path = %path.display(), "wrote post page");
        }

        let index_path = self.blog.output_dir.join("index.html");
        fs::write(&index_path, self.index_page(&posts))?;
        tracing::info!(count = posts.len(), out = %self.blog.output_dir.display(), "exported site");

        Ok(posts.len())
    }

    fn post_page(&self, post: &Post, body_html: &str) -> String {
        let site = &self.blog.config;
        let body = format!(
            "<article>\n<h1>{}</h1>\n<p class=\"date\">{}</p>\n{}</article>\n<p><a href=\"../index.html\">&larr; {}</a></p>",
            html_escape(&post.title),
            html_escape(&display_date(post)),
            body_html,
            html_escape(&site.title),
        );
        page_shell(
            &format!("{} - {}", post.title, site.title),
            &site.language,
            &body,
        )
    }

    fn index_page(&self, posts: &[Post]) -> String {
        let site = &self.blog.config;

        let mut items = String::new();
        for post in posts {
            items.push_str(&format!(
                "<li>\n<a href=\"posts/{slug}.html\">{title}</a>\n<span class=\"date\">{date}</span>\n<p>{excerpt}</p>\n</li>\n",
                slug = post.slug,
                title = html_escape(&post.title),
                date = html_escape(&display_date(post)),
                excerpt = html_escape(&post.excerpt),
            ));
        }

        let body = format!(
            "<h1>{}</h1>\n<p>{}</p>\n<ul class=\"posts\">\n{}</ul>",
            html_escape(&site.title),
            html_escape(&site.description),
            items,
        );
        page_shell(&site.title, &site.language, &body)
    }
}

fn display_date(post: &Post) -> String {
    post.date_value()
        .map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| post.date.clone())
}

fn page_shell(title: &str, lang: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"{}\">\n<head>\n<meta charset=\"utf-8\">\n<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n<title>{}</title>\n</head>\n<body>\n{}\n</body>\n</html>\n",
        lang,
        html_escape(title),
        body,
    )
}
