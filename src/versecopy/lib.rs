//! # Versecopy Architecture
//!
//! Versecopy looks up one verse across every translation a verse API offers,
//! lists the translations in a preferred order, lets the user rearrange them,
//! and copies the result as a table (for word processors) or as USFM table rows
//! (for Paratext).
//!
//! The library is UI-agnostic. The bundled terminal client is one consumer of
//! it; nothing from `api.rs` inward prints, exits or assumes a terminal.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI (cli/, wired by main.rs)                               │
//! │  - clap parsing, interactive shell, colored output          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns the Session and the ClipboardSink                   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Commands (commands/) + Session (session.rs)                │
//! │  - search / reorder / copy, request ordering, status        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Domain: reference, books, order, verse_list, export        │
//! │  Edges:  source (VerseSource), clipboard (ClipboardSink)    │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Pipeline
//!
//! `"jn 3 16"` → [`reference::Normalizer`] → `Reference { John, 3, 16 }` →
//! [`reference::to_query_key`] → `"JHN 3:16"` → [`source::VerseSource`] →
//! [`order::TranslationOrder`] → [`verse_list::VerseList`] → [`export`] →
//! [`clipboard::ClipboardSink`].
//!
//! ## Testing Strategy
//!
//! Each domain module carries its own unit tests. The session, commands and
//! API are tested against [`source::memory::InMemorySource`] and
//! [`clipboard::MemoryClipboard`], so no test needs a network or a display.
//! The HTTP source and the binary are exercised in `tests/` against a local
//! listener.

pub mod api;
pub mod books;
pub mod clipboard;
pub mod commands;
pub mod config;
pub mod error;
pub mod export;
pub mod model;
pub mod order;
pub mod reference;
pub mod session;
pub mod source;
pub mod verse_list;
