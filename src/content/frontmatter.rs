//! Front-matter parsing and serialization
//!
//! The on-disk format is a YAML block between `---` delimiter lines,
//! a blank line, then the raw Markdown body:
//!
//! ```text
//! ---
//! title: "Hello"
//! date: 2024-01-15
//! excerpt: "A greeting"
//! ---
//!
//! Body text.
//! ```
//!
//! Serializing a draft and parsing the result reproduces every field
//! byte-for-byte; embedded double quotes in `title`/`excerpt` are escaped
//! as `\"` and unescaped symmetrically by the YAML parser.

use serde::{Deserialize, Deserializer};

use super::error::{Result, StoreError};
use super::post::PostDraft;

const DELIMITER: &str = "---";

/// Accept any YAML scalar where a string is expected. A `date: 2024`
/// or `title: true` still loads; lists and mappings count as absent.
fn scalar_or_none<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde_yaml::Value;

    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    })
}

/// The recognized front-matter fields. Everything is optional; missing
/// fields take their defaults when a [`Post`](super::Post) is assembled.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct FrontMatter {
    #[serde(deserialize_with = "scalar_or_none", default)]
    pub title: Option<String>,
    #[serde(deserialize_with = "scalar_or_none", default)]
    pub date: Option<String>,
    #[serde(deserialize_with = "scalar_or_none", default)]
    pub excerpt: Option<String>,
}

impl FrontMatter {
    /// Split `content` into front-matter and body.
    ///
    /// A file that does not open with `---` has no front-matter: the whole
    /// file is the body. An opening delimiter without a closing one, or
    /// invalid YAML between the delimiters, is a parse failure.
    pub fn parse(content: &str) -> Result<(Self, &str)> {
        let trimmed = content.trim_start();
        if !trimmed.starts_with(DELIMITER) {
            return Ok((FrontMatter::default(), content));
        }

        let rest = &trimmed[DELIMITER.len()..];
        let end = rest
            .find("\n---")
            .ok_or_else(|| StoreError::Parse("missing closing front-matter delimiter".into()))?;

        let yaml = &rest[..end];
        let mut body = &rest[end + 1 + DELIMITER.len()..];
        // the closing delimiter's own line ending, then the separator blank
        // line; any further leading newlines belong to the body
        for _ in 0..2 {
            body = body.strip_prefix('\r').unwrap_or(body);
            body = match body.strip_prefix('\n') {
                Some(stripped) => stripped,
                None => break,
            };
        }

        let fm = if yaml.trim().is_empty() {
            FrontMatter::default()
        } else {
            serde_yaml::from_str(yaml).map_err(|e| StoreError::Parse(e.to_string()))?
        };

        Ok((fm, body))
    }
}

/// Serialize a draft in the store's on-disk format. `title` and `excerpt`
/// are double-quoted with embedded quotes escaped; `date` is written
/// unquoted; the body follows verbatim.
pub fn serialize_draft(draft: &PostDraft) -> String {
    format!(
        "---\ntitle: \"{}\"\ndate: {}\nexcerpt: \"{}\"\n---\n\n{}",
        draft.title.replace('"', "\\\""),
        draft.date,
        draft.excerpt.replace('"', "\\\""),
        draft.content,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_frontmatter() {
        let content = "---\ntitle: \"Hello World\"\ndate: 2024-01-15\nexcerpt: \"Greetings\"\n---\n\nThis is the content.\n";
        let (fm, body) = FrontMatter::parse(content).unwrap();
        assert_eq!(fm.title.as_deref(), Some("Hello World"));
        assert_eq!(fm.date.as_deref(), Some("2024-01-15"));
        assert_eq!(fm.excerpt.as_deref(), Some("Greetings"));
        assert_eq!(body, "This is the content.\n");
    }

    #[test]
    fn test_parse_without_frontmatter() {
        let content = "Just some Markdown.\n\n## No header block\n";
        let (fm, body) = FrontMatter::parse(content).unwrap();
        assert!(fm.title.is_none());
        assert!(fm.date.is_none());
        assert_eq!(body, content);
    }

    #[test]
    fn test_parse_missing_fields_stay_none() {
        let content = "---\ntitle: \"Only a title\"\n---\n\nBody.";
        let (fm, body) = FrontMatter::parse(content).unwrap();
        assert_eq!(fm.title.as_deref(), Some("Only a title"));
        assert!(fm.date.is_none());
        assert!(fm.excerpt.is_none());
        assert_eq!(body, "Body.");
    }

    #[test]
    fn test_parse_unclosed_delimiter_fails() {
        let content = "---\ntitle: \"never closed\"\n\nBody without a closing fence.";
        assert!(FrontMatter::parse(content).is_err());
    }

    #[test]
    fn test_parse_invalid_yaml_fails() {
        let content = "---\ntitle: [unclosed\n---\n\nBody.";
        assert!(FrontMatter::parse(content).is_err());
    }

    #[test]
    fn test_non_string_scalars_are_tolerated() {
        let content = "---\ntitle: 2024\ndate: [not, a, date]\n---\n\nBody.";
        let (fm, _) = FrontMatter::parse(content).unwrap();
        assert_eq!(fm.title.as_deref(), Some("2024"));
        assert!(fm.date.is_none());
    }

    #[test]
    fn test_roundtrip_preserves_fields() {
        let draft = PostDraft {
            title: "She said \"hi\" twice".to_string(),
            date: "2024-06-30T08:00:00Z".to_string(),
            excerpt: "Quotes: \"inner\"".to_string(),
            content: "# Heading\n\nSome *Markdown* with --- dashes inline.\n".to_string(),
        };

        let serialized = serialize_draft(&draft);
        let (fm, body) = FrontMatter::parse(&serialized).unwrap();

        assert_eq!(fm.title.as_deref(), Some(draft.title.as_str()));
        assert_eq!(fm.date.as_deref(), Some(draft.date.as_str()));
        assert_eq!(fm.excerpt.as_deref(), Some(draft.excerpt.as_str()));
        assert_eq!(body, draft.content);
    }

    #[test]
    fn test_roundtrip_body_with_leading_newline() {
        let draft = PostDraft {
            title: "t".to_string(),
            date: "2024-01-01".to_string(),
            excerpt: String::new(),
            content: "\nstarts blank".to_string(),
        };
        let serialized = serialize_draft(&draft);
        let (_, body) = FrontMatter::parse(&serialized).unwrap();
        assert_eq!(body, draft.content);
    }

    #[test]
    fn test_roundtrip_empty_body() {
        let draft = PostDraft {
            title: "t".to_string(),
            date: "2024-01-01".to_string(),
            excerpt: String::new(),
            content: String::new(),
        };
        let serialized = serialize_draft(&draft);
        let (_, body) = FrontMatter::parse(&serialized).unwrap();
        assert_eq!(body, "");
    }
}
