//! # Reference Normalization
//!
//! Turns whatever the user typed into a [`Reference`], and derives the two
//! canonical views of it:
//!
//! - [`to_query_key`]: the machine form sent to the verse API (`"JHN 3:16"`).
//! - [`to_display_label`]: the human form shown back to the user (`"John 3:16"`).
//!
//! Parsing itself sits behind the [`ReferenceParser`] trait. The [`Normalizer`]
//! owns one parser instance for the lifetime of the application; nothing here is
//! global. [`BookNameParser`] is the built-in implementation.
//!
//! ## Accepted input (BookNameParser)
//!
//! ```text
//! jn 3 16        → John 3:16
//! 1 cor 13.4     → 1 Corinthians 13:4
//! II Kings 2     → 2 Kings 2
//! song of songs  → Song of Songs
//! jude 5         → Jude 1:5      (single-chapter book)
//! ```

use crate::books::{self, Book, Resolution};
use crate::error::{Result, VerseError};
use crate::model::{QueryKey, Reference};

/// Parses free-form reference text.
pub trait ReferenceParser {
    fn parse(&self, text: &str) -> Result<Reference>;
}

/// Owns the reference parser and applies it to user input.
#[derive(Debug, Clone, Default)]
pub struct Normalizer<P: ReferenceParser = BookNameParser> {
    parser: P,
}

impl<P: ReferenceParser> Normalizer<P> {
    pub fn new(parser: P) -> Self {
        Self { parser }
    }

    pub fn normalize(&self, text: &str) -> Result<Reference> {
        self.parser.parse(text)
    }
}

/// Builds the API query key. Fails rather than emitting placeholder tokens when
/// the book is not in the table or the reference is not verse-level.
pub fn to_query_key(reference: &Reference) -> Result<QueryKey> {
    let code = books::code_for(&reference.book)
        .ok_or_else(|| VerseError::UnknownBook(reference.book.clone()))?;

    match (reference.chapter, reference.verse) {
        (Some(chapter), Some(verse)) => Ok(QueryKey::new(code, chapter, verse)),
        _ => Err(VerseError::ReferenceIncomplete(to_display_label(reference))),
    }
}

pub fn to_display_label(reference: &Reference) -> String {
    match (reference.chapter, reference.verse) {
        (Some(chapter), Some(verse)) => format!("{} {}:{}", reference.book, chapter, verse),
        (Some(chapter), None) => format!("{} {}", reference.book, chapter),
        _ => reference.book.clone(),
    }
}

/// The built-in parser, backed by the static book table.
#[derive(Debug, Clone, Copy, Default)]
pub struct BookNameParser;

impl ReferenceParser for BookNameParser {
    fn parse(&self, text: &str) -> Result<Reference> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(VerseError::Parse("reference is empty".to_string()));
        }

        let book_end = trimmed
            .char_indices()
            .filter(|(_, c)| c.is_alphabetic())
            .last()
            .map(|(i, c)| i + c.len_utf8())
            .ok_or_else(|| VerseError::Parse(format!("no book name in '{}'", trimmed)))?;

        let (book_part, rest) = trimmed.split_at(book_end);
        let book = resolve_book(book_part)?;
        let numbers = parse_numbers(rest)?;

        match numbers.as_slice() {
            [] => Ok(Reference::book(book.name)),
            [verse] if book.is_single_chapter() => Ok(Reference::verse(book.name, 1, *verse)),
            [chapter] => {
                check_chapter(book, *chapter)?;
                Ok(Reference::chapter(book.name, *chapter))
            }
            [chapter, verse] => {
                check_chapter(book, *chapter)?;
                Ok(Reference::verse(book.name, *chapter, *verse))
            }
            _ => Err(VerseError::Parse(format!(
                "expected at most a chapter and a verse in '{}'",
                trimmed
            ))),
        }
    }
}

const ORDINALS: &[(&str, &str)] = &[
    ("first ", "1 "),
    ("second ", "2 "),
    ("third ", "3 "),
    ("1st ", "1 "),
    ("2nd ", "2 "),
    ("3rd ", "3 "),
    ("iii ", "3 "),
    ("ii ", "2 "),
    ("i ", "1 "),
];

fn resolve_book(book_part: &str) -> Result<&'static Book> {
    let lowered = book_part.trim().to_lowercase();
    let normalized = ORDINALS
        .iter()
        .find_map(|(word, digit)| {
            lowered
                .strip_prefix(word)
                .map(|rest| format!("{}{}", digit, rest))
        })
        .unwrap_or(lowered);

    match books::resolve(&normalized) {
        Resolution::Found(book) => Ok(book),
        Resolution::Ambiguous(names) => Err(VerseError::Parse(format!(
            "'{}' could be {}",
            book_part.trim(),
            names.join(", ")
        ))),
        Resolution::NotFound => Err(VerseError::UnknownBook(book_part.trim().to_string())),
    }
}

fn parse_numbers(rest: &str) -> Result<Vec<u32>> {
    rest.split(|c: char| c == ':' || c == '.' || c == ',' || c.is_whitespace())
        .filter(|part| !part.is_empty())
        .map(|part| match part.parse::<u32>() {
            Ok(0) => Err(VerseError::Parse("chapters and verses start at 1".to_string())),
            Ok(n) => Ok(n),
            Err(_) => Err(VerseError::Parse(format!("'{}' is not a number", part))),
        })
        .collect()
}

fn check_chapter(book: &Book, chapter: u32) -> Result<()> {
    if chapter > book.chapters {
        return Err(VerseError::Parse(format!(
            "{} has {} chapters",
            book.name, book.chapters
        )));
    }
    Ok(())
}
