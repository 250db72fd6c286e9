//! # API Facade
//!
//! [`VerseApi`] is the single entry point a UI talks to. It owns the
//! [`Session`] and the [`ClipboardSink`] and dispatches to the command layer.
//!
//! It is generic over both collaborators:
//! - Production: `VerseApi<HttpVerseSource, SystemClipboard>`
//! - Testing: `VerseApi<InMemorySource, MemoryClipboard>`
//!
//! Like the commands, the facade never prints; it returns [`CmdResult`]s.

use crate::clipboard::ClipboardSink;
use crate::commands::{self, copy::CopyFormat, CmdResult};
use crate::config::VerseConfig;
use crate::error::{Result, VerseError};
use crate::model::Verse;
use crate::reference::Normalizer;
use crate::session::Session;
use crate::source::http::HttpVerseSource;
use crate::source::VerseSource;

pub struct VerseApi<S: VerseSource, C: ClipboardSink> {
    session: Session<S>,
    clipboard: C,
}

impl<C: ClipboardSink> VerseApi<HttpVerseSource, C> {
    /// Wires an HTTP-backed session from resolved configuration.
    pub fn from_config(config: &VerseConfig, clipboard: C) -> Self {
        let source = HttpVerseSource::new(config.api_url.clone(), config.timeout());
        let session = Session::new(Normalizer::default(), source, config.translation_order());
        Self::new(session, clipboard)
    }
}

impl<S: VerseSource, C: ClipboardSink> VerseApi<S, C> {
    pub fn new(session: Session<S>, clipboard: C) -> Self {
        Self { session, clipboard }
    }

    pub fn session(&self) -> &Session<S> {
        &self.session
    }

    pub fn clipboard(&self) -> &C {
        &self.clipboard
    }

    pub fn verses(&self) -> &[Verse] {
        self.session.verses().as_slice()
    }

    pub fn input(&self) -> &str {
        self.session.input()
    }

    pub fn edit_input(&mut self, text: &str) {
        self.session.edit_input(text);
    }

    pub fn preview(&self) -> Option<String> {
        self.session.preview()
    }

    pub fn lookup_label(&self) -> Option<String> {
        self.session.lookup_label()
    }

    pub fn search(&mut self, text: &str) -> CmdResult {
        commands::search::run(&mut self.session, text)
    }

    /// Moves a verse using 1-based display positions.
    pub fn move_verse(&mut self, from: usize, to: usize) -> Result<CmdResult> {
        match (from.checked_sub(1), to.checked_sub(1)) {
            (Some(from), Some(to)) => commands::reorder::run(&mut self.session, from, to),
            _ => Err(VerseError::InvalidMove {
                from,
                to,
                len: self.verses().len(),
            }),
        }
    }

    pub fn copy(&mut self, format: CopyFormat) -> Result<CmdResult> {
        commands::copy::run(&self.session, &mut self.clipboard, format)
    }

    pub fn render(&self, format: CopyFormat) -> String {
        commands::copy::render(self.verses(), format)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clipboard::{ClipboardWrite, MemoryClipboard};
    use crate::source::memory::InMemorySource;

    fn api() -> VerseApi<InMemorySource, MemoryClipboard> {
        let source = InMemorySource::new().with_verses(
            "ROM 8:28",
            vec![
                Verse::new("KJV", "And we know that all things work together for good"),
                Verse::new("NIV84", "And we know that in all things God works for the good"),
                Verse::new("GW", "We know that all things work together for the good"),
            ],
        );
        VerseApi::new(Session::with_source(source), MemoryClipboard::new())
    }

    #[test]
    fn test_search_dispatches_to_source() {
        let mut api = api();
        let result = api.search("rom 8:28");
        assert_eq!(api.session().source().calls(), vec!["ROM 8:28"]);
        assert_eq!(result.label.as_deref(), Some("Romans 8:28"));
        assert_eq!(api.input(), "Romans 8:28");
        assert_eq!(api.verses().len(), 3);
    }

    #[test]
    fn test_move_uses_one_based_positions() {
        let mut api = api();
        api.search("rom 8:28");
        api.move_verse(3, 1).unwrap();
        let codes: Vec<_> = api.verses().iter().map(|v| v.translation.as_str()).collect();
        assert_eq!(codes, vec!["KJV", "NIV84", "GW"]);
    }

    #[test]
    fn test_move_out_of_range() {
        let mut api = api();
        api.search("rom 8:28");
        assert!(matches!(api.move_verse(1, 4), Err(VerseError::InvalidMove { .. })));
        assert!(matches!(api.move_verse(0, 1), Err(VerseError::InvalidMove { .. })));
        assert_eq!(api.verses()[0].translation, "NIV84");
    }

    #[test]
    fn test_copy_goes_to_clipboard() {
        let mut api = api();
        api.search("rom 8:28");
        api.copy(CopyFormat::Tagged).unwrap();
        match api.clipboard().last() {
            Some(ClipboardWrite::Plain(text)) => {
                assert!(text.starts_with("\\tr \\tc1 NIV84"));
                assert_eq!(text.lines().count(), 3);
            }
            other => panic!("expected plain write, got {other:?}"),
        }
    }

    #[test]
    fn test_render_does_not_touch_clipboard() {
        let mut api = api();
        api.search("rom 8:28");
        let html = api.render(CopyFormat::Table);
        assert!(html.contains("<td>GW</td>"));
        assert!(api.clipboard().writes().is_empty());
    }
}
