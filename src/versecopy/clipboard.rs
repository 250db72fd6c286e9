//! # Clipboard
//!
//! Clipboard writes go through the [`ClipboardSink`] trait so exporters and the
//! session never depend on a platform.
//!
//! - [`SystemClipboard`] shells out to the platform tools:
//!   - macOS: `pbcopy` for text, `osascript` for HTML
//!   - Linux: `wl-copy` on Wayland, otherwise `xclip` or `xsel`
//!   - Windows: `clip.exe` for text, PowerShell `Set-Clipboard -AsHtml` for HTML
//! - [`MemoryClipboard`] records writes, for tests and for printing instead of
//!   copying.
//!
//! Writes are best effort. A platform that cannot hold HTML gets the plain
//! fallback instead.

use crate::error::{Result, VerseError};
use std::io::Write;
use std::process::{Command, Stdio};

pub trait ClipboardSink {
    /// Places rich (HTML) content, with `plain` for targets that only take text.
    fn write_rich(&mut self, html: &str, plain: &str) -> Result<()>;

    fn write_plain(&mut self, text: &str) -> Result<()>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClipboardWrite {
    Rich { html: String, plain: String },
    Plain(String),
}

#[derive(Debug, Default)]
pub struct MemoryClipboard {
    writes: Vec<ClipboardWrite>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn writes(&self) -> &[ClipboardWrite] {
        &self.writes
    }

    pub fn last(&self) -> Option<&ClipboardWrite> {
        self.writes.last()
    }
}

impl ClipboardSink for MemoryClipboard {
    fn write_rich(&mut self, html: &str, plain: &str) -> Result<()> {
        self.writes.push(ClipboardWrite::Rich {
            html: html.to_string(),
            plain: plain.to_string(),
        });
        Ok(())
    }

    fn write_plain(&mut self, text: &str) -> Result<()> {
        self.writes.push(ClipboardWrite::Plain(text.to_string()));
        Ok(())
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClipboard;

impl ClipboardSink for SystemClipboard {
    fn write_rich(&mut self, html: &str, plain: &str) -> Result<()> {
        match copy_html(html, plain) {
            Ok(()) => Ok(()),
            Err(e) => {
                tracing::warn!("rich clipboard write failed ({}), copying plain text", e);
                copy_text(plain)
            }
        }
    }

    fn write_plain(&mut self, text: &str) -> Result<()> {
        copy_text(text)
    }
}

/// Spawns `program`, feeds `input` on stdin and waits for a clean exit.
fn pipe_to(program: &str, args: &[&str], input: &str) -> Result<()> {
    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .spawn()
        .map_err(|e| VerseError::Clipboard(format!("Failed to spawn {}: {}", program, e)))?;

    if let Some(mut stdin) = child.stdin.take() {
        stdin
            .write_all(input.as_bytes())
            .map_err(|e| VerseError::Clipboard(format!("Failed to write to {}: {}", program, e)))?;
    }

    let status = child
        .wait()
        .map_err(|e| VerseError::Clipboard(format!("Failed to wait for {}: {}", program, e)))?;

    if status.success() {
        Ok(())
    } else {
        Err(VerseError::Clipboard(format!("{} exited with error", program)))
    }
}

#[cfg(target_os = "macos")]
fn copy_text(text: &str) -> Result<()> {
    pipe_to("pbcopy", &[], text)
}

#[cfg(target_os = "macos")]
fn copy_html(html: &str, plain: &str) -> Result<()> {
    // AppleScript takes raw clipboard flavors as hex data literals.
    let script = format!(
        "set the clipboard to {{«class HTML»:«data HTML{}», «class utf8»:«data utf8{}»}}",
        to_hex(html),
        to_hex(plain)
    );
    let status = Command::new("osascript")
        .args(["-e", &script])
        .stdout(Stdio::null())
        .status()
        .map_err(|e| VerseError::Clipboard(format!("Failed to spawn osascript: {}", e)))?;
    if status.success() {
        Ok(())
    } else {
        Err(VerseError::Clipboard("osascript exited with error".to_string()))
    }
}

#[cfg(target_os = "macos")]
fn to_hex(s: &str) -> String {
    s.bytes().map(|b| format!("{:02X}", b)).collect()
}

#[cfg(target_os = "linux")]
fn on_wayland() -> bool {
    std::env::var_os("WAYLAND_DISPLAY").is_some()
}

#[cfg(target_os = "linux")]
fn copy_text(text: &str) -> Result<()> {
    if on_wayland() && pipe_to("wl-copy", &[], text).is_ok() {
        return Ok(());
    }
    pipe_to("xclip", &["-selection", "clipboard"], text).or_else(|_| {
        pipe_to("xsel", &["--clipboard", "--input"], text).map_err(|e| {
            VerseError::Clipboard(format!("{}. Install wl-clipboard, xclip or xsel.", e))
        })
    })
}

#[cfg(target_os = "linux")]
fn copy_html(html: &str, _plain: &str) -> Result<()> {
    if on_wayland() && pipe_to("wl-copy", &["--type", "text/html"], html).is_ok() {
        return Ok(());
    }
    pipe_to("xclip", &["-selection", "clipboard", "-t", "text/html"], html)
}

#[cfg(target_os = "windows")]
fn copy_text(text: &str) -> Result<()> {
    pipe_to("clip", &[], text)
}

#[cfg(target_os = "windows")]
fn copy_html(html: &str, _plain: &str) -> Result<()> {
    pipe_to(
        "powershell",
        &[
            "-NoProfile",
            "-Command",
            "Set-Clipboard -AsHtml -Value ([Console]::In.ReadToEnd())",
        ],
        html,
    )
}

#[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
fn copy_text(_text: &str) -> Result<()> {
    Err(VerseError::Clipboard(
        "Clipboard not supported on this platform".to_string(),
    ))
}

#[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
fn copy_html(_html: &str, _plain: &str) -> Result<()> {
    Err(VerseError::Clipboard(
        "Clipboard not supported on this platform".to_string(),
    ))
}
