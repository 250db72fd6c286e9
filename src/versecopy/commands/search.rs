use super::CmdResult;
use crate::reference::ReferenceParser;
use crate::session::Session;
use crate::source::VerseSource;

/// Searches for `text`. Failures do not surface as `Err`: the session keeps
/// its previous list and the result carries the error message.
pub fn run<S: VerseSource, P: ReferenceParser>(
    session: &mut Session<S, P>,
    text: &str,
) -> CmdResult {
    session.search(text);

    let mut result = CmdResult::default()
        .with_label(session.current_label().map(str::to_string))
        .with_listed_verses(session.verses().as_slice().to_vec());
    if let Some(status) = session.take_status() {
        result.add_message(status);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::model::Verse;
    use crate::source::memory::InMemorySource;

    fn session() -> Session<InMemorySource> {
        Session::with_source(
            InMemorySource::new()
                .with_verses(
                    "PSA 23:1",
                    vec![
                        Verse::new("KJV", "The LORD is my shepherd; I shall not want."),
                        Verse::new("NIV11", "The LORD is my shepherd, I lack nothing."),
                    ],
                )
                .with_network_failure("PSA 23:2", "timed out"),
        )
    }

    #[test]
    fn test_search_lists_ordered_verses() {
        let mut s = session();
        let result = run(&mut s, "ps 23 1");

        assert_eq!(result.label.as_deref(), Some("Psalms 23:1"));
        let codes: Vec<_> = result
            .listed_verses
            .iter()
            .map(|v| v.translation.as_str())
            .collect();
        assert_eq!(codes, vec!["NIV11", "KJV"]);
        assert_eq!(result.messages.len(), 1);
        assert_eq!(result.messages[0].level, MessageLevel::Success);
        assert!(!result.has_errors());
    }

    #[test]
    fn test_failed_search_reports_and_keeps_list() {
        let mut s = session();
        run(&mut s, "ps 23 1");
        let result = run(&mut s, "ps 23 2");

        assert!(result.has_errors());
        assert_eq!(result.label.as_deref(), Some("Psalms 23:1"));
        assert_eq!(result.listed_verses.len(), 2);
    }
}
