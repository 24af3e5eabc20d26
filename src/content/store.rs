//! The content store: one Markdown file per post
//!
//! The post directory is the single source of truth. There is no cache or
//! index; every operation re-reads the filesystem, so reads are always
//! fresh. Writes assume a single writer at a time; concurrent mutations of
//! the same slug are a last-write-wins race at the filesystem level.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::Local;
use tempfile::NamedTempFile;
use walkdir::WalkDir;

use super::error::{Result, StoreError};
use super::frontmatter::{serialize_draft, FrontMatter};
use super::post::{Post, PostDraft};
use super::slug::unique_slug;

/// Attempts at generating an unused slug before giving up
const SLUG_ATTEMPTS: usize = 8;

/// Filesystem-backed post storage
pub struct ContentStore {
    posts_dir: PathBuf,
    extension: String,
}

impl ContentStore {
    pub fn new<P: Into<PathBuf>>(posts_dir: P, extension: &str) -> Self {
        Self {
            posts_dir: posts_dir.into(),
            extension: extension.trim_start_matches('.').to_string(),
        }
    }

    pub fn posts_dir(&self) -> &Path {
        &self.posts_dir
    }

    /// All posts, newest first. Equal dates are ordered by slug so the
    /// listing is deterministic. Files that fail to read or parse are
    /// logged and skipped; one corrupt file never aborts the listing.
    ///
    /// A missing post directory is created empty and yields no posts.
    pub fn list(&self) -> Result<Vec<Post>> {
        if !self.posts_dir.exists() {
            fs::create_dir_all(&self.posts_dir)?;
            return Ok(Vec::new());
        }

        let mut posts = Vec::new();
        for entry in WalkDir::new(&self.posts_dir)
            .min_depth(1)
            .max_depth(1)
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();
            if !path.is_file() || !self.has_post_extension(path) {
                continue;
            }
            let Some(slug) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            match self.read_post(path, slug) {
                Ok(post) => posts.push(post),
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "skipping unreadable post");
                }
            }
        }

        use std::cmp::Reverse;
        posts.sort_by_cached_key(|p| (Reverse(p.date_value()), p.slug.clone()));

        Ok(posts)
    }

    /// Fetch one post by slug
    pub fn get(&self, slug: &str) -> Result<Post> {
        let path = self.post_path(slug)?;
        if !path.is_file() {
            return Err(StoreError::NotFound(slug.to_string()));
        }
        self.read_post(&path, slug)
    }

    /// Write a new post file and return its generated slug.
    ///
    /// The slug is derived from the title plus a random suffix; the suffix
    /// is regenerated if the candidate path is already taken.
    pub fn create(&self, draft: &PostDraft) -> Result<String> {
        fs::create_dir_all(&self.posts_dir)?;

        let slug = self.fresh_slug(&draft.title)?;
        let path = self.file_path(&slug);
        self.write_atomic(&path, &serialize_draft(draft))?;

        tracing::info!(slug = %slug, title = %draft.title, "created post");
        Ok(slug)
    }

    /// Overwrite an existing post in place. The slug and filename never
    /// change, even when the title does; update never creates a file.
    pub fn update(&self, slug: &str, draft: &PostDraft) -> Result<()> {
        let path = self.post_path(slug)?;
        if !path.is_file() {
            return Err(StoreError::NotFound(slug.to_string()));
        }
        self.write_atomic(&path, &serialize_draft(draft))?;

        tracing::info!(slug = %slug, "updated post");
        Ok(())
    }

    /// Remove a post's file. No soft delete, no undo.
    pub fn delete(&self, slug: &str) -> Result<()> {
        let path = self.post_path(slug)?;
        if !path.is_file() {
            return Err(StoreError::NotFound(slug.to_string()));
        }
        fs::remove_file(&path)?;

        tracing::info!(slug = %slug, "deleted post");
        Ok(())
    }

    fn read_post(&self, path: &Path, slug: &str) -> Result<Post> {
        let raw = fs::read_to_string(path)?;
        let (fm, body) = FrontMatter::parse(&raw)?;

        // missing or unrecognizable dates fall back to "now" so the post
        // still lists; text fields fall back to empty
        let date = fm
            .date
            .filter(|d| super::post::parse_date_string(d).is_some())
            .unwrap_or_else(|| Local::now().to_rfc3339());

        Ok(Post {
            slug: slug.to_string(),
            title: fm.title.unwrap_or_default(),
            date,
            excerpt: fm.excerpt.unwrap_or_default(),
            content: body.to_string(),
        })
    }

    fn fresh_slug(&self, title: &str) -> Result<String> {
        for _ in 0..SLUG_ATTEMPTS {
            let candidate = unique_slug(title);
            if !self.file_path(&candidate).exists() {
                return Ok(candidate);
            }
            tracing::debug!(candidate = %candidate, "slug collision, regenerating");
        }
        Err(StoreError::Io(std::io::Error::new(
            std::io::ErrorKind::AlreadyExists,
            "could not generate an unused slug",
        )))
    }

    /// Path for a caller-supplied slug. Slugs shaped like paths never
    /// resolve to anything outside the post directory.
    fn post_path(&self, slug: &str) -> Result<PathBuf> {
        if slug.is_empty() || slug.contains('/') || slug.contains('\\') || slug.contains("..") {
            return Err(StoreError::NotFound(slug.to_string()));
        }
        Ok(self.file_path(slug))
    }

    fn file_path(&self, slug: &str) -> PathBuf {
        self.posts_dir.join(format!("{}.{}", slug, self.extension))
    }

    fn has_post_extension(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .map(|e| e == self.extension)
            .unwrap_or(false)
    }

    /// Write through a temp file in the same directory and rename into
    /// place, so a failed write never leaves a half-written post visible.
    fn write_atomic(&self, path: &Path, contents: &str) -> Result<()> {
        let dir = path.parent().unwrap_or(&self.posts_dir);
        let mut tmp = NamedTempFile::new_in(dir)?;
        tmp.write_all(contents.as_bytes())?;
        tmp.as_file().sync_all()?;
        tmp.persist(path).map_err(|e| StoreError::Io(e.error))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn setup_store() -> (ContentStore, TempDir) {
        let temp = TempDir::new().unwrap();
        let store = ContentStore::new(temp.path().join("posts"), "md");
        (store, temp)
    }

    fn draft(title: &str, date: &str) -> PostDraft {
        PostDraft {
            title: title.to_string(),
            date: date.to_string(),
            excerpt: format!("About {}", title),
            content: format!("# {}\n\nBody of {}.\n", title, title),
        }
    }

    #[test]
    fn test_create_then_get() {
        let (store, _temp) = setup_store();
        let d = draft("My First Post", "2024-01-15");

        let slug = store.create(&d).unwrap();
        assert!(slug.starts_with("my-first-post-"));

        let post = store.get(&slug).unwrap();
        assert_eq!(post.slug, slug);
        assert_eq!(post.title, d.title);
        assert_eq!(post.date, d.date);
        assert_eq!(post.excerpt, d.excerpt);
        assert_eq!(post.content, d.content);
    }

    #[test]
    fn test_get_missing_is_not_found() {
        let (store, _temp) = setup_store();
        store.create(&draft("Exists", "2024-01-01")).unwrap();

        match store.get("no-such-post") {
            Err(StoreError::NotFound(slug)) => assert_eq!(slug, "no-such-post"),
            other => panic!("expected NotFound, got {:?}", other.map(|p| p.slug)),
        }
    }

    #[test]
    fn test_update_preserves_slug_across_title_change() {
        let (store, _temp) = setup_store();
        let slug = store.create(&draft("Original Title", "2024-01-01")).unwrap();

        let mut changed = draft("Completely Different Title", "2024-01-02");
        changed.content = "rewritten".to_string();
        store.update(&slug, &changed).unwrap();

        let post = store.get(&slug).unwrap();
        assert_eq!(post.slug, slug);
        assert_eq!(post.title, "Completely Different Title");
        assert_eq!(post.content, "rewritten");

        // exactly one file, still under the original name
        let entries: Vec<_> = fs::read_dir(store.posts_dir()).unwrap().collect();
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn test_update_missing_never_creates() {
        let (store, _temp) = setup_store();
        store.create(&draft("Seed", "2024-01-01")).unwrap();

        let result = store.update("missing-post", &draft("X", "2024-01-01"));
        assert!(matches!(result, Err(StoreError::NotFound(_))));
        assert_eq!(store.list().unwrap().len(), 1);
    }

    #[test]
    fn test_delete_removes_visibility() {
        let (store, _temp) = setup_store();
        let keep = store.create(&draft("Keeper", "2024-01-01")).unwrap();
        let gone = store.create(&draft("Goner", "2024-01-02")).unwrap();

        store.delete(&gone).unwrap();

        assert!(matches!(store.get(&gone), Err(StoreError::NotFound(_))));
        let slugs: Vec<_> = store.list().unwrap().into_iter().map(|p| p.slug).collect();
        assert_eq!(slugs, vec![keep]);
    }

    #[test]
    fn test_delete_missing_is_not_found() {
        let (store, _temp) = setup_store();
        assert!(matches!(
            store.delete("nothing-here"),
            Err(StoreError::NotFound(_))
        ));
    }

    #[test]
    fn test_list_orders_by_date_descending() {
        let (store, _temp) = setup_store();
        store.create(&draft("January", "2024-01-01")).unwrap();
        store.create(&draft("March", "2024-03-01")).unwrap();
        store.create(&draft("February", "2024-02-01")).unwrap();

        let titles: Vec<_> = store.list().unwrap().into_iter().map(|p| p.title).collect();
        assert_eq!(titles, vec!["March", "February", "January"]);
    }

    #[test]
    fn test_list_tie_breaks_by_slug() {
        let (store, _temp) = setup_store();
        store.create(&draft("Bravo", "2024-01-01")).unwrap();
        store.create(&draft("Alpha", "2024-01-01")).unwrap();

        let slugs: Vec<_> = store.list().unwrap().into_iter().map(|p| p.slug).collect();
        let mut sorted = slugs.clone();
        sorted.sort();
        assert_eq!(slugs, sorted);
    }

    #[test]
    fn test_corrupt_file_is_skipped() {
        let (store, _temp) = setup_store();
        store.create(&draft("Good One", "2024-01-01")).unwrap();
        store.create(&draft("Good Two", "2024-01-02")).unwrap();

        fs::write(
            store.posts_dir().join("broken.md"),
            "---\ntitle: \"never closed\n\nno closing fence",
        )
        .unwrap();

        let posts = store.list().unwrap();
        assert_eq!(posts.len(), 2);
        assert!(posts.iter().all(|p| p.slug != "broken"));
    }

    #[test]
    fn test_corrupt_file_get_reports_parse_failure() {
        let (store, _temp) = setup_store();
        store.create(&draft("Seed", "2024-01-01")).unwrap();
        fs::write(store.posts_dir().join("broken.md"), "---\ntitle: [oops\n---\n\nx").unwrap();

        assert!(matches!(store.get("broken"), Err(StoreError::Parse(_))));
    }

    #[test]
    fn test_list_bootstraps_missing_directory() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("content").join("posts");
        let store = ContentStore::new(&dir, "md");

        let posts = store.list().unwrap();
        assert!(posts.is_empty());
        assert!(dir.is_dir());
    }

    #[test]
    fn test_file_without_frontmatter_gets_defaults() {
        let (store, _temp) = setup_store();
        store.create(&draft("Seed", "2024-01-01")).unwrap();
        fs::write(store.posts_dir().join("plain.md"), "Just a body.\n").unwrap();

        let post = store.get("plain").unwrap();
        assert_eq!(post.title, "");
        assert_eq!(post.excerpt, "");
        assert_eq!(post.content, "Just a body.\n");
        // the defaulted date is a real timestamp
        assert!(post.date_value().is_some());
    }

    #[test]
    fn test_unrecognizable_date_defaults_to_now() {
        let (store, _temp) = setup_store();
        fs::create_dir_all(store.posts_dir()).unwrap();
        fs::write(
            store.posts_dir().join("odd.md"),
            "---\ntitle: \"Odd\"\ndate: someday\nexcerpt: \"\"\n---\n\nBody.",
        )
        .unwrap();

        let post = store.get("odd").unwrap();
        assert_ne!(post.date, "someday");
        assert!(post.date_value().is_some());
    }

    #[test]
    fn test_path_shaped_slugs_are_not_found() {
        let (store, _temp) = setup_store();
        for slug in ["../escape", "a/b", "a\\b", ""] {
            assert!(matches!(store.get(slug), Err(StoreError::NotFound(_))));
        }
    }

    #[test]
    fn test_other_extensions_are_ignored() {
        let (store, _temp) = setup_store();
        store.create(&draft("Real", "2024-01-01")).unwrap();
        fs::write(store.posts_dir().join("notes.txt"), "not a post").unwrap();

        assert_eq!(store.list().unwrap().len(), 1);
    }

    #[test]
    fn test_create_with_symbol_only_title() {
        let (store, _temp) = setup_store();
        let slug = store.create(&draft("!!!", "2024-01-01")).unwrap();
        assert_eq!(slug.len(), 8);
        assert_eq!(store.get(&slug).unwrap().title, "!!!");
    }
}
