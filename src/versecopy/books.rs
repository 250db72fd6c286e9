//! # Book Table
//!
//! The static table of the 66 protestant canon books: canonical display name,
//! USFM book code, chapter count, and the abbreviations users actually type.
//!
//! Two lookups are served from it:
//! - [`by_name`]: display name → [`Book`], used to turn a parsed
//!   [`Reference`](crate::model::Reference) into a query key.
//! - [`resolve`]: free-form book token → [`Book`], used by the built-in parser.
//!   Exact matches on names, aliases and codes win; otherwise a token that is a
//!   prefix of exactly one book's names is accepted.

use once_cell::sync::Lazy;
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Book {
    pub name: &'static str,
    pub code: &'static str,
    pub chapters: u32,
    pub aliases: &'static [&'static str],
}

impl Book {
    pub fn is_single_chapter(&self) -> bool {
        self.chapters == 1
    }
}

const fn book(
    name: &'static str,
    code: &'static str,
    chapters: u32,
    aliases: &'static [&'static str],
) -> Book {
    Book {
        name,
        code,
        chapters,
        aliases,
    }
}

pub static BOOKS: [Book; 66] = [
    book("Genesis", "GEN", 50, &["gen", "ge", "gn"]),
    book("Exodus", "EXO", 40, &["exod", "exo", "ex"]),
    book("Leviticus", "LEV", 27, &["lev", "le", "lv"]),
    book("Numbers", "NUM", 36, &["num", "nu", "nm", "nb"]),
    book("Deuteronomy", "DEU", 34, &["deut", "deu", "dt"]),
    book("Joshua", "JOS", 24, &["josh", "jos", "jsh"]),
    book("Judges", "JDG", 21, &["judg", "jdg", "jg", "jdgs"]),
    book("Ruth", "RUT", 4, &["rth", "ru", "rut"]),
    book("1 Samuel", "1SA", 31, &["1sam", "1sa", "1sm"]),
    book("2 Samuel", "2SA", 24, &["2sam", "2sa", "2sm"]),
    book("1 Kings", "1KI", 22, &["1kgs", "1ki", "1kin"]),
    book("2 Kings", "2KI", 25, &["2kgs", "2ki", "2kin"]),
    book("1 Chronicles", "1CH", 29, &["1chr", "1ch", "1chron"]),
    book("2 Chronicles", "2CH", 36, &["2chr", "2ch", "2chron"]),
    book("Ezra", "EZR", 10, &["ezr"]),
    book("Nehemiah", "NEH", 13, &["neh", "ne"]),
    book("Esther", "EST", 10, &["esth", "est", "es"]),
    book("Job", "JOB", 42, &["jb"]),
    book("Psalms", "PSA", 150, &["ps", "psa", "psalm", "pss", "psm"]),
    book("Proverbs", "PRO", 31, &["prov", "pro", "prv", "pr"]),
    book("Ecclesiastes", "ECC", 12, &["eccl", "ecc", "eccles", "qoh"]),
    book(
        "Song of Songs",
        "SNG",
        8,
        &["song", "sng", "sos", "songofsolomon", "canticles"],
    ),
    book("Isaiah", "ISA", 66, &["isa", "is"]),
    book("Jeremiah", "JER", 52, &["jer", "je", "jr"]),
    book("Lamentations", "LAM", 5, &["lam", "la"]),
    book("Ezekiel", "EZK", 48, &["ezek", "eze", "ezk"]),
    book("Daniel", "DAN", 12, &["dan", "da", "dn"]),
    book("Hosea", "HOS", 14, &["hos", "ho"]),
    book("Joel", "JOL", 3, &["jl", "joe", "jol"]),
    book("Amos", "AMO", 9, &["am", "amo"]),
    book("Obadiah", "OBA", 1, &["obad", "oba", "ob"]),
    book("Jonah", "JON", 4, &["jnh", "jon"]),
    book("Micah", "MIC", 7, &["mic", "mi"]),
    book("Nahum", "NAM", 3, &["nah", "nam", "na"]),
    book("Habakkuk", "HAB", 3, &["hab", "hb"]),
    book("Zephaniah", "ZEP", 3, &["zeph", "zep", "zp"]),
    book("Haggai", "HAG", 2, &["hag", "hg"]),
    book("Zechariah", "ZEC", 14, &["zech", "zec", "zc"]),
    book("Malachi", "MAL", 4, &["mal", "ml"]),
    book("Matthew", "MAT", 28, &["matt", "mat", "mt"]),
    book("Mark", "MRK", 16, &["mrk", "mar", "mk"]),
    book("Luke", "LUK", 24, &["luk", "lk"]),
    book("John", "JHN", 21, &["jhn", "joh", "jn"]),
    book("Acts", "ACT", 28, &["act", "ac"]),
    book("Romans", "ROM", 16, &["rom", "ro", "rm"]),
    book("1 Corinthians", "1CO", 16, &["1cor", "1co"]),
    book("2 Corinthians", "2CO", 13, &["2cor", "2co"]),
    book("Galatians", "GAL", 6, &["gal", "ga"]),
    book("Ephesians", "EPH", 6, &["eph", "ephes"]),
    book("Philippians", "PHP", 4, &["phil", "php"]),
    book("Colossians", "COL", 4, &["col"]),
    book("1 Thessalonians", "1TH", 5, &["1thess", "1thes", "1th"]),
    book("2 Thessalonians", "2TH", 3, &["2thess", "2thes", "2th"]),
    book("1 Timothy", "1TI", 6, &["1tim", "1ti", "1tm"]),
    book("2 Timothy", "2TI", 4, &["2tim", "2ti", "2tm"]),
    book("Titus", "TIT", 3, &["tit", "ti"]),
    book("Philemon", "PHM", 1, &["philem", "phm", "phlm"]),
    book("Hebrews", "HEB", 13, &["heb"]),
    book("James", "JAS", 5, &["jas", "jam", "jm"]),
    book("1 Peter", "1PE", 5, &["1pet", "1pe", "1pt"]),
    book("2 Peter", "2PE", 3, &["2pet", "2pe", "2pt"]),
    book("1 John", "1JN", 5, &["1jn", "1jhn", "1jo", "1joh"]),
    book("2 John", "2JN", 1, &["2jn", "2jhn", "2jo", "2joh"]),
    book("3 John", "3JN", 1, &["3jn", "3jhn", "3jo", "3joh"]),
    book("Jude", "JUD", 1, &["jud", "jd"]),
    book(
        "Revelation",
        "REV",
        22,
        &["rev", "re", "rv", "revelations", "apocalypse"],
    ),
];

/// Lowercases and strips whitespace and dots, so `"1 Cor."` and `"1cor"` meet.
pub fn fold(s: &str) -> String {
    s.chars()
        .filter(|c| !c.is_whitespace() && *c != '.')
        .flat_map(char::to_lowercase)
        .collect()
}

static EXACT: Lazy<HashMap<String, usize>> = Lazy::new(|| {
    let mut map = HashMap::new();
    for (i, b) in BOOKS.iter().enumerate() {
        map.insert(fold(b.name), i);
        map.insert(fold(b.code), i);
        for alias in b.aliases {
            map.insert(fold(alias), i);
        }
    }
    map
});

/// Looks up a book by its canonical display name (case-insensitive).
pub fn by_name(name: &str) -> Option<&'static Book> {
    BOOKS.iter().find(|b| b.name.eq_ignore_ascii_case(name.trim()))
}

/// Returns the USFM code for a canonical display name.
pub fn code_for(name: &str) -> Option<&'static str> {
    by_name(name).map(|b| b.code)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Found(&'static Book),
    Ambiguous(Vec<&'static str>),
    NotFound,
}

/// Resolves a user-typed book token (already ordinal-normalized) to a book.
pub fn resolve(token: &str) -> Resolution {
    let folded = fold(token);
    if folded.is_empty() {
        return Resolution::NotFound;
    }

    if let Some(&i) = EXACT.get(&folded) {
        return Resolution::Found(&BOOKS[i]);
    }

    let mut candidates: Vec<usize> = EXACT
        .iter()
        .filter(|(key, _)| key.starts_with(&folded))
        .map(|(_, &i)| i)
        .collect();
    candidates.sort_unstable();
    candidates.dedup();

    match candidates.as_slice() {
        [] => Resolution::NotFound,
        [only] => Resolution::Found(&BOOKS[*only]),
        many => Resolution::Ambiguous(many.iter().map(|&i| BOOKS[i].name).collect()),
    }
}
