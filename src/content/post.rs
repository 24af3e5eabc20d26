//! Post model

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone};
use serde::{Deserialize, Serialize};

/// A blog post backed by a single Markdown file.
///
/// The filename stem is the slug; `title`, `date` and `excerpt` come from
/// the front-matter block and `content` is the raw body below it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    /// URL- and filename-safe identifier, assigned once at creation
    pub slug: String,

    /// Display title
    pub title: String,

    /// Publication date, kept as the stored string so files round-trip
    /// unchanged
    pub date: String,

    /// Short summary shown in listings
    pub excerpt: String,

    /// Raw Markdown body
    pub content: String,
}

impl Post {
    /// The date parsed for ordering and display. `None` only for date
    /// strings in no recognized format.
    pub fn date_value(&self) -> Option<DateTime<Local>> {
        parse_date_string(&self.date)
    }
}

/// The caller-supplied fields for create and update: everything a post
/// carries except the slug, which the store owns.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PostDraft {
    pub title: String,
    pub date: String,
    pub excerpt: String,
    pub content: String,
}

impl From<Post> for PostDraft {
    fn from(post: Post) -> Self {
        Self {
            title: post.title,
            date: post.date,
            excerpt: post.excerpt,
            content: post.content,
        }
    }
}

/// Parse a date string in the formats post files actually carry:
/// RFC 3339 timestamps, `YYYY-MM-DD` dates, and the common
/// date-plus-time variants in between.
pub fn parse_date_string(s: &str) -> Option<DateTime<Local>> {
    let s = s.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Local));
    }

    const DATETIME_FORMATS: [&str; 4] = [
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%d %H:%M",
        "%Y/%m/%d %H:%M:%S",
        "%Y-%m-%dT%H:%M:%S",
    ];
    for fmt in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Local.from_local_datetime(&dt).earliest();
        }
    }

    const DATE_FORMATS: [&str; 2] = ["%Y-%m-%d", "%Y/%m/%d"];
    for fmt in DATE_FORMATS {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            let dt = d.and_hms_opt(0, 0, 0)?;
            return Local.from_local_datetime(&dt).earliest();
        }
    }

    None
}
