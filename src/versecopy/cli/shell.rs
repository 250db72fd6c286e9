//! Interactive shell.
//!
//! The terminal stand-in for the search box, the reorderable list and the two
//! copy buttons. Each input line is either a `:command` or a reference to
//! search for. The prompt shows the search field: the canonical label after a
//! successful search, otherwise whatever was last typed.

use super::print::{render_messages, render_verses};
use super::setup::CopyArg;
use std::io::{BufRead, Write};
use versecopy::api::VerseApi;
use versecopy::clipboard::ClipboardSink;
use versecopy::commands::copy::CopyFormat;
use versecopy::error::Result;
use versecopy::source::VerseSource;

const HELP: &str = "\
Type a reference (e.g. jn 3 16, 1 Cor 13:4) to look it up.

Commands:
  :list                   show the current list
  :mv FROM TO             move the verse at position FROM to position TO
  :copy table|tagged      copy as a table (word) or USFM rows (paratext)
  :show table|tagged      print what :copy would copy
  :help                   this help
  :quit                   leave
";

enum Action {
    Continue,
    Quit,
}

pub(super) fn run_shell<S, C, R, W>(
    api: &mut VerseApi<S, C>,
    input: R,
    out: &mut W,
    interactive: bool,
) -> Result<()>
where
    S: VerseSource,
    C: ClipboardSink,
    R: BufRead,
    W: Write,
{
    if interactive {
        writeln!(out, "Type a reference to look it up, :help for commands.")?;
    }

    let mut lines = input.lines();
    loop {
        if interactive {
            if api.input().is_empty() {
                write!(out, "> ")?;
            } else {
                write!(out, "[{}] > ", api.input())?;
            }
            out.flush()?;
        }

        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match handle_line(api, line, out)? {
            Action::Continue => {}
            Action::Quit => break,
        }
    }
    Ok(())
}

fn handle_line<S, C, W>(api: &mut VerseApi<S, C>, line: &str, out: &mut W) -> Result<Action>
where
    S: VerseSource,
    C: ClipboardSink,
    W: Write,
{
    let Some(command) = line.strip_prefix(':') else {
        search(api, line, out)?;
        return Ok(Action::Continue);
    };

    let mut words = command.split_whitespace();
    match words.next().unwrap_or("") {
        "q" | "quit" | "exit" => return Ok(Action::Quit),
        "h" | "help" | "?" => write!(out, "{}", HELP)?,
        "l" | "ls" | "list" => write!(
            out,
            "{}",
            render_verses(api.session().current_label(), api.verses())
        )?,
        "mv" | "move" => {
            let positions: Vec<Option<usize>> = words.map(|w| w.parse().ok()).collect();
            match positions.as_slice() {
                [Some(from), Some(to)] => match api.move_verse(*from, *to) {
                    Ok(result) => {
                        let listing =
                            render_verses(result.label.as_deref(), &result.listed_verses);
                        write!(out, "{}", listing)?;
                        write!(out, "{}", render_messages(&result.messages))?;
                    }
                    Err(e) => writeln!(out, "Error: {}", e)?,
                },
                _ => writeln!(out, "Usage: :mv FROM TO (positions start at 1)")?,
            }
        }
        "c" | "copy" => match parse_format(words.next()) {
            Some(format) => match api.copy(format) {
                Ok(result) => write!(out, "{}", render_messages(&result.messages))?,
                Err(e) => writeln!(out, "Error: {}", e)?,
            },
            None => writeln!(out, "Usage: :copy table|tagged")?,
        },
        "show" => match parse_format(words.next()) {
            Some(format) => writeln!(out, "{}", api.render(format))?,
            None => writeln!(out, "Usage: :show table|tagged")?,
        },
        other => writeln!(out, "Unknown command ':{}'. Type :help for commands.", other)?,
    }
    Ok(Action::Continue)
}

fn search<S, C, W>(api: &mut VerseApi<S, C>, text: &str, out: &mut W) -> Result<()>
where
    S: VerseSource,
    C: ClipboardSink,
    W: Write,
{
    api.edit_input(text);
    if let Some(label) = api.lookup_label() {
        writeln!(out, "Looking up {}...", label)?;
    }

    let result = api.search(text);
    if !result.has_errors() {
        write!(out, "{}", render_verses(result.label.as_deref(), &result.listed_verses))?;
    }
    write!(out, "{}", render_messages(&result.messages))?;
    Ok(())
}

fn parse_format(word: Option<&str>) -> Option<CopyFormat> {
    word.and_then(CopyArg::parse_word).map(CopyFormat::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use versecopy::clipboard::{ClipboardWrite, MemoryClipboard};
    use versecopy::model::Verse;
    use versecopy::session::Session;
    use versecopy::source::memory::InMemorySource;

    fn api() -> VerseApi<InMemorySource, MemoryClipboard> {
        let source = InMemorySource::new()
            .with_verses(
                "JHN 3:16",
                vec![
                    Verse::new("KJV", "For God so loved the world"),
                    Verse::new("NIV84", "For God so loved the world"),
                    Verse::new("RSV", "For God so loved the world"),
                ],
            )
            .with_network_failure("JHN 3:17", "connection refused");
        VerseApi::new(Session::with_source(source), MemoryClipboard::new())
    }

    fn run(api: &mut VerseApi<InMemorySource, MemoryClipboard>, script: &str) -> String {
        colored::control::set_override(false);
        let mut out = Vec::new();
        run_shell(api, script.as_bytes(), &mut out, false).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_search_then_move_then_copy() {
        let mut api = api();
        let out = run(&mut api, "jn 3 16\n:mv 3 1\n:copy paratext\n:quit\n");

        assert!(out.contains("Looking up John 3:16..."));
        assert!(out.contains("Moved KJV to position 1"));
        assert!(out.contains("Copied 3 verses as USFM"));
        match api.clipboard().last() {
            Some(ClipboardWrite::Plain(text)) => {
                let codes: Vec<_> = text.lines().map(|l| l.split(' ').nth(2).unwrap()).collect();
                assert_eq!(codes, vec!["KJV", "NIV84", "RSV"]);
            }
            other => panic!("expected plain write, got {other:?}"),
        }
        assert_eq!(api.input(), "John 3:16");
    }

    #[test]
    fn test_failed_search_keeps_list() {
        let mut api = api();
        let out = run(&mut api, "jn 3 16\njn 3 17\n:list\n");

        assert!(out.contains("Network error: connection refused"));
        assert_eq!(api.verses().len(), 3);
        assert_eq!(api.session().current_label(), Some("John 3:16"));
        assert_eq!(api.input(), "jn 3 17");
    }

    #[test]
    fn test_bad_commands_do_not_stop_the_shell() {
        let mut api = api();
        let out = run(&mut api, ":mv 1\n:mv 1 9\n:copy pdf\n:frobnicate\n:help\n");

        assert!(out.contains("Usage: :mv FROM TO"));
        assert!(out.contains("Error: Move out of range"));
        assert!(out.contains("Usage: :copy table|tagged"));
        assert!(out.contains("Unknown command ':frobnicate'"));
        assert!(out.contains("Commands:"));
    }

    #[test]
    fn test_incomplete_reference_is_not_announced() {
        let mut api = api();
        let out = run(&mut api, "john 3\n");

        assert!(!out.contains("Looking up"));
        assert!(out.contains("needs both a chapter and a verse"));
        assert!(api.session().source().calls().is_empty());
    }

    #[test]
    fn test_show_prints_export() {
        let mut api = api();
        let out = run(&mut api, "jn 3 16\n:show tagged\n");
        assert!(out.contains("\\tr \\tc1 NIV84 \\tc2 For God so loved the world"));
        assert!(api.clipboard().writes().is_empty());
    }

    #[test]
    fn test_quit_stops_reading() {
        let mut api = api();
        run(&mut api, ":quit\njn 3 16\n");
        assert!(api.session().source().calls().is_empty());
    }
}
