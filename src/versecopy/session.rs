//! # Session
//!
//! The application controller. A [`Session`] owns the search input, the loaded
//! reference and the [`VerseList`], and moves between two states:
//!
//! ```text
//! Idle ──search ok──▶ Loaded ──search ok──▶ Loaded
//!   │                   │
//!   └──search failed────┴──▶ (unchanged, status message set)
//! ```
//!
//! A search runs normalize → query key → fetch → order → replace. Any failure on
//! that path is logged and turned into a status message; the list, the loaded
//! reference and the input stay as they were.
//!
//! ## Request ordering
//!
//! Searches are split into [`Session::begin_search`] and
//! [`Session::complete_search`] so a caller may have several in flight. Each
//! gets a sequence number; a response is used only if it is newer than the
//! last one to come back, successful or not, so a slow early request can never
//! overwrite a later one.
//! [`Session::submit`] runs both halves back to back.

use crate::commands::CmdMessage;
use crate::error::{Result, VerseError};
use crate::export::{self, VerseTable};
use crate::model::{QueryKey, Verse};
use crate::order::TranslationOrder;
use crate::reference::{to_display_label, to_query_key, BookNameParser, Normalizer, ReferenceParser};
use crate::source::VerseSource;
use crate::verse_list::VerseList;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    Loaded,
}

/// A search that has been normalized and numbered but not yet applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingSearch {
    pub seq: u64,
    pub key: QueryKey,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    Loaded { label: String, count: usize },
    Failed(String),
    /// A newer response had already come back.
    Stale,
}

pub struct Session<S: VerseSource, P: ReferenceParser = BookNameParser> {
    normalizer: Normalizer<P>,
    source: S,
    order: TranslationOrder,
    verses: VerseList,
    current_key: Option<QueryKey>,
    current_label: Option<String>,
    input: String,
    status: Option<CmdMessage>,
    issued_seq: u64,
    resolved_seq: u64,
}

impl<S: VerseSource> Session<S, BookNameParser> {
    pub fn with_source(source: S) -> Self {
        Self::new(Normalizer::default(), source, TranslationOrder::default())
    }
}

impl<S: VerseSource, P: ReferenceParser> Session<S, P> {
    pub fn new(normalizer: Normalizer<P>, source: S, order: TranslationOrder) -> Self {
        Self {
            normalizer,
            source,
            order,
            verses: VerseList::default(),
            current_key: None,
            current_label: None,
            input: String::new(),
            status: None,
            issued_seq: 0,
            resolved_seq: 0,
        }
    }

    pub fn state(&self) -> SessionState {
        if self.current_key.is_some() {
            SessionState::Loaded
        } else {
            SessionState::Idle
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn order(&self) -> &TranslationOrder {
        &self.order
    }

    pub fn verses(&self) -> &VerseList {
        &self.verses
    }

    pub fn current_key(&self) -> Option<&QueryKey> {
        self.current_key.as_ref()
    }

    pub fn current_label(&self) -> Option<&str> {
        self.current_label.as_deref()
    }

    /// The search field: what the user typed, or the canonical label of the
    /// last successful search until the user edits it.
    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn edit_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    pub fn status(&self) -> Option<&CmdMessage> {
        self.status.as_ref()
    }

    pub fn take_status(&mut self) -> Option<CmdMessage> {
        self.status.take()
    }

    /// Friendly form of the typed input, when it parses and names something
    /// other than the loaded reference.
    pub fn preview(&self) -> Option<String> {
        let reference = self.normalizer.normalize(&self.input).ok()?;
        let key = to_query_key(&reference).ok();
        if key.is_some() && key.as_ref() == self.current_key.as_ref() {
            return None;
        }
        Some(to_display_label(&reference))
    }

    /// Label of the reference a submit would fetch. `None` when the input
    /// does not parse or is not verse-level.
    pub fn lookup_label(&self) -> Option<String> {
        let reference = self.normalizer.normalize(&self.input).ok()?;
        to_query_key(&reference).ok()?;
        Some(to_display_label(&reference))
    }

    pub fn begin_search(&mut self) -> Result<PendingSearch> {
        let prepared = self
            .normalizer
            .normalize(&self.input)
            .and_then(|reference| Ok((to_query_key(&reference)?, to_display_label(&reference))));

        match prepared {
            Ok((key, label)) => {
                self.issued_seq += 1;
                tracing::debug!(seq = self.issued_seq, reference = %key, "search started");
                Ok(PendingSearch {
                    seq: self.issued_seq,
                    key,
                    label,
                })
            }
            Err(e) => {
                self.record_failure(&e);
                Err(e)
            }
        }
    }

    pub fn complete_search(
        &mut self,
        pending: PendingSearch,
        result: Result<Vec<Verse>>,
    ) -> SearchOutcome {
        if pending.seq <= self.resolved_seq {
            tracing::warn!(
                seq = pending.seq,
                resolved = self.resolved_seq,
                reference = %pending.key,
                "discarding stale response"
            );
            return SearchOutcome::Stale;
        }

        self.resolved_seq = pending.seq;
        match result {
            Ok(verses) => {
                let ordered = self.order.order(verses);
                let count = ordered.len();
                self.verses.replace(ordered);
                self.current_key = Some(pending.key);
                self.current_label = Some(pending.label.clone());
                self.input = pending.label.clone();

                tracing::info!(reference = %pending.label, count, "verses loaded");
                self.status = Some(if count == 0 {
                    CmdMessage::warning(format!("No translations found for {}", pending.label))
                } else {
                    CmdMessage::success(format!(
                        "Loaded {} translation{} of {}",
                        count,
                        if count == 1 { "" } else { "s" },
                        pending.label
                    ))
                });
                SearchOutcome::Loaded {
                    label: pending.label,
                    count,
                }
            }
            Err(e) => {
                self.record_failure(&e);
                SearchOutcome::Failed(e.to_string())
            }
        }
    }

    /// Runs a full search for the current input.
    pub fn submit(&mut self) -> SearchOutcome {
        match self.begin_search() {
            Ok(pending) => {
                let result = self.source.fetch_verses(&pending.key);
                self.complete_search(pending, result)
            }
            Err(e) => SearchOutcome::Failed(e.to_string()),
        }
    }

    /// Types `text` into the search field and submits it.
    pub fn search(&mut self, text: impl Into<String>) -> SearchOutcome {
        self.edit_input(text);
        self.submit()
    }

    pub fn move_verse(&mut self, from: usize, to: usize) -> Result<()> {
        self.verses.move_item(from, to)
    }

    pub fn export_table(&self) -> VerseTable {
        export::export_as_table(self.verses.as_slice())
    }

    pub fn export_tagged_text(&self) -> String {
        export::export_as_tagged_text(self.verses.as_slice())
    }

    fn record_failure(&mut self, error: &VerseError) {
        tracing::error!(input = %self.input, "search failed: {}", error);
        self.status = Some(CmdMessage::error(error.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::source::memory::InMemorySource;

    fn john_3_16() -> Vec<Verse> {
        vec![
            Verse::new(
                "KJV",
                "For God so loved the world, that he gave his only begotten Son",
            ),
            Verse::new(
                "NIV84",
                "For God so loved the world that he gave his one and only Son",
            ),
            Verse::new("UNKNOWN", "?"),
            Verse::new("RSV", "For God so loved the world that he gave his only Son"),
        ]
    }

    fn source() -> InMemorySource {
        InMemorySource::new()
            .with_verses("JHN 3:16", john_3_16())
            .with_verses("JHN 11:35", vec![Verse::new("KJV", "Jesus wept.")])
            .with_network_failure("GEN 1:1", "connection refused")
            .with_decode_failure("GEN 1:2", "expected value")
    }

    fn translations<S: VerseSource>(session: &Session<S>) -> Vec<String> {
        session
            .verses()
            .iter()
            .map(|v| v.translation.clone())
            .collect()
    }

    #[test]
    fn test_starts_idle() {
        let session = Session::with_source(source());
        assert_eq!(session.state(), SessionState::Idle);
        assert!(session.verses().is_empty());
        assert!(session.current_key().is_none());
        assert_eq!(session.input(), "");
    }

    #[test]
    fn test_search_end_to_end() {
        let mut session = Session::with_source(source());
        let outcome = session.search("jn 3 16");

        assert_eq!(
            outcome,
            SearchOutcome::Loaded {
                label: "John 3:16".to_string(),
                count: 4
            }
        );
        assert_eq!(session.source().calls(), vec!["JHN 3:16"]);
        assert_eq!(session.state(), SessionState::Loaded);
        assert_eq!(session.current_key().unwrap().as_str(), "JHN 3:16");
        assert_eq!(session.input(), "John 3:16");
        assert_eq!(translations(&session), vec!["NIV84", "RSV", "KJV", "UNKNOWN"]);
        assert_eq!(session.status().unwrap().level, MessageLevel::Success);
    }

    #[test]
    fn test_input_shows_typed_text_after_edit() {
        let mut session = Session::with_source(source());
        session.search("jn 3 16");
        session.edit_input("jn 11");
        assert_eq!(session.input(), "jn 11");
        assert_eq!(session.current_label(), Some("John 3:16"));
    }

    #[test]
    fn test_network_failure_keeps_previous_state() {
        let mut session = Session::with_source(source());
        session.search("jn 3 16");
        let before = session.verses().clone();

        let outcome = session.search("gen 1 1");
        assert!(matches!(
            outcome,
            SearchOutcome::Failed(ref msg) if msg.contains("connection refused")
        ));
        assert_eq!(session.verses(), &before);
        assert_eq!(session.current_key().unwrap().as_str(), "JHN 3:16");
        assert_eq!(session.current_label(), Some("John 3:16"));
        assert_eq!(session.state(), SessionState::Loaded);
        assert_eq!(session.status().unwrap().level, MessageLevel::Error);
    }

    #[test]
    fn test_failure_from_idle_stays_idle() {
        let mut session = Session::with_source(source());
        let outcome = session.search("gen 1 2");
        assert!(matches!(outcome, SearchOutcome::Failed(_)));
        assert_eq!(session.state(), SessionState::Idle);
        assert!(session.verses().is_empty());
    }

    #[test]
    fn test_incomplete_reference_is_not_fetched() {
        let mut session = Session::with_source(source());
        let outcome = session.search("john 3");
        assert!(matches!(outcome, SearchOutcome::Failed(ref msg) if msg.contains("John 3")));
        assert!(session.source().calls().is_empty());
        assert_eq!(session.input(), "john 3");
    }

    #[test]
    fn test_unparseable_reference_is_not_fetched() {
        let mut session = Session::with_source(source());
        assert!(matches!(session.search("???"), SearchOutcome::Failed(_)));
        assert!(session.source().calls().is_empty());
        assert!(session.take_status().is_some());
        assert!(session.status().is_none());
    }

    #[test]
    fn test_stale_response_is_discarded() {
        let mut session = Session::with_source(source());

        session.edit_input("jn 3 16");
        let first = session.begin_search().unwrap();
        session.edit_input("jn 11 35");
        let second = session.begin_search().unwrap();
        assert!(second.seq > first.seq);

        let r2 = session.source().fetch_verses(&second.key);
        assert!(matches!(
            session.complete_search(second, r2),
            SearchOutcome::Loaded { .. }
        ));

        let r1 = session.source().fetch_verses(&first.key);
        assert_eq!(session.complete_search(first, r1), SearchOutcome::Stale);

        assert_eq!(session.current_key().unwrap().as_str(), "JHN 11:35");
        assert_eq!(translations(&session), vec!["KJV"]);
    }

    #[test]
    fn test_older_success_after_newer_failure_is_stale() {
        let mut session = Session::with_source(source());

        session.edit_input("jn 3 16");
        let first = session.begin_search().unwrap();
        session.edit_input("gen 1 1");
        let second = session.begin_search().unwrap();

        let r2 = session.source().fetch_verses(&second.key);
        assert!(matches!(
            session.complete_search(second, r2),
            SearchOutcome::Failed(_)
        ));

        let r1 = session.source().fetch_verses(&first.key);
        assert_eq!(session.complete_search(first, r1), SearchOutcome::Stale);

        assert_eq!(session.state(), SessionState::Idle);
        assert!(session.current_key().is_none());
        assert!(session.verses().is_empty());
        assert_eq!(session.input(), "gen 1 1");
        assert_eq!(session.status().unwrap().level, MessageLevel::Error);
    }

    #[test]
    fn test_in_order_responses_both_apply() {
        let mut session = Session::with_source(source());

        session.edit_input("jn 3 16");
        let first = session.begin_search().unwrap();
        session.edit_input("jn 11 35");
        let second = session.begin_search().unwrap();

        let r1 = session.source().fetch_verses(&first.key);
        assert!(matches!(session.complete_search(first, r1), SearchOutcome::Loaded { .. }));
        let r2 = session.source().fetch_verses(&second.key);
        assert!(matches!(session.complete_search(second, r2), SearchOutcome::Loaded { .. }));

        assert_eq!(session.current_key().unwrap().as_str(), "JHN 11:35");
    }

    #[test]
    fn test_preview() {
        let mut session = Session::with_source(source());
        session.edit_input("jn 3 16");
        assert_eq!(session.preview(), Some("John 3:16".to_string()));

        session.submit();
        assert_eq!(session.preview(), None);

        session.edit_input("ps 23");
        assert_eq!(session.preview(), Some("Psalms 23".to_string()));

        session.edit_input("nonsense words");
        assert_eq!(session.preview(), None);
    }

    #[test]
    fn test_lookup_label_only_for_fetchable_references() {
        let mut session = Session::with_source(source());
        session.edit_input("jn 3 16");
        assert_eq!(session.lookup_label(), Some("John 3:16".to_string()));

        session.edit_input("john 3");
        assert_eq!(session.preview(), Some("John 3".to_string()));
        assert_eq!(session.lookup_label(), None);

        session.edit_input("nonsense words");
        assert_eq!(session.lookup_label(), None);
    }

    #[test]
    fn test_move_and_export_follow_display_order() {
        let mut session = Session::with_source(source());
        session.search("jn 3 16");
        session.move_verse(2, 0).unwrap();

        assert_eq!(translations(&session), vec!["KJV", "NIV84", "RSV", "UNKNOWN"]);
        let tagged = session.export_tagged_text();
        assert!(tagged.starts_with("\\tr \\tc1 KJV \\tc2 For God so loved"));
        assert_eq!(tagged.lines().count(), 4);
        assert_eq!(session.export_table().rows()[0].0, "KJV");
    }

    #[test]
    fn test_new_search_replaces_manual_order() {
        let mut session = Session::with_source(source());
        session.search("jn 3 16");
        session.move_verse(0, 3).unwrap();
        session.search("jn 3 16");
        assert_eq!(translations(&session), vec!["NIV84", "RSV", "KJV", "UNKNOWN"]);
    }

    #[test]
    fn test_custom_translation_order() {
        let mut session = Session::new(
            Normalizer::default(),
            source(),
            TranslationOrder::new(["KJV"]),
        );
        session.search("John 3:16");
        assert_eq!(translations(&session), vec!["KJV", "NIV84", "UNKNOWN", "RSV"]);
    }

    #[test]
    fn test_empty_response_loads_empty_list_with_warning() {
        let mut session = Session::with_source(source());
        let outcome = session.search("rev 22 21");
        assert_eq!(
            outcome,
            SearchOutcome::Loaded {
                label: "Revelation 22:21".to_string(),
                count: 0
            }
        );
        assert_eq!(session.status().unwrap().level, MessageLevel::Warning);
    }
}
