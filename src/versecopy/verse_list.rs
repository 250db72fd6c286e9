use crate::error::{Result, VerseError};
use crate::model::Verse;
use serde::Serialize;

/// The verses currently on display, in display order.
///
/// Replaced wholesale by a successful search, permuted in place by
/// [`VerseList::move_item`]. Never partially updated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct VerseList {
    verses: Vec<Verse>,
}

impl VerseList {
    pub fn new(verses: Vec<Verse>) -> Self {
        Self { verses }
    }

    pub fn as_slice(&self) -> &[Verse] {
        &self.verses
    }

    pub fn len(&self) -> usize {
        self.verses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.verses.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Verse> {
        self.verses.iter()
    }

    pub(crate) fn replace(&mut self, verses: Vec<Verse>) {
        self.verses = verses;
    }

    /// Removes the verse at `from` and reinserts it at `to`, shifting the ones
    /// in between. Both indexes are zero-based positions in the current list.
    pub fn move_item(&mut self, from: usize, to: usize) -> Result<()> {
        let len = self.verses.len();
        if from >= len || to >= len {
            return Err(VerseError::InvalidMove { from, to, len });
        }
        let verse = self.verses.remove(from);
        self.verses.insert(to, verse);
        Ok(())
    }
}

impl<'a> IntoIterator for &'a VerseList {
    type Item = &'a Verse;
    type IntoIter = std::slice::Iter<'a, Verse>;

    fn into_iter(self) -> Self::IntoIter {
        self.verses.iter()
    }
}
