use serde::{Deserialize, Serialize};
use std::fmt;

/// A scripture location at book, chapter, or verse granularity.
///
/// `book` is the canonical display name from [`crate::books`], so it can be fed
/// straight back into the book table when building a [`QueryKey`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reference {
    pub book: String,
    pub chapter: Option<u32>,
    pub verse: Option<u32>,
}

impl Reference {
    pub fn book(book: impl Into<String>) -> Self {
        Self {
            book: book.into(),
            chapter: None,
            verse: None,
        }
    }

    pub fn chapter(book: impl Into<String>, chapter: u32) -> Self {
        Self {
            book: book.into(),
            chapter: Some(chapter),
            verse: None,
        }
    }

    pub fn verse(book: impl Into<String>, chapter: u32, verse: u32) -> Self {
        Self {
            book: book.into(),
            chapter: Some(chapter),
            verse: Some(verse),
        }
    }
}

/// Canonical `"<CODE> <chapter>:<verse>"` string sent to the verse API.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct QueryKey(String);

impl QueryKey {
    pub(crate) fn new(code: &str, chapter: u32, verse: u32) -> Self {
        Self(format!("{} {}:{}", code, chapter, verse))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for QueryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One translation's rendering of a verse, as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verse {
    pub translation: String,
    pub text: String,
}

impl Verse {
    pub fn new(translation: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            translation: translation.into(),
            text: text.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_key_format() {
        let key = QueryKey::new("JHN", 3, 16);
        assert_eq!(key.as_str(), "JHN 3:16");
        assert_eq!(key.to_string(), "JHN 3:16");
    }

    #[test]
    fn test_verse_ignores_unknown_fields() {
        let json = r#"{"translation":"KJV","text":"In the beginning","id":42}"#;
        let verse: Verse = serde_json::from_str(json).unwrap();
        assert_eq!(verse, Verse::new("KJV", "In the beginning"));
    }
}
