//! # Verse Sources
//!
//! Fetching is abstracted behind the [`VerseSource`] trait so the session can be
//! driven without a network.
//!
//! ## Implementations
//!
//! - [`http::HttpVerseSource`]: production source. One blocking
//!   `GET <base-url>?reference=<key>` per call, body decoded as a JSON array of
//!   `{translation, text}` objects.
//! - [`memory::InMemorySource`]: canned responses keyed by query key, with
//!   failure injection and a call log. Used by tests.
//!
//! ## Error Contract
//!
//! - `VerseError::Network`: transport failures and non-2xx responses.
//! - `VerseError::Decode`: the body arrived but is not a verse array.

use crate::error::Result;
use crate::model::{QueryKey, Verse};

pub mod http;
pub mod memory;

pub trait VerseSource {
    /// Fetches every translation available for `key`, in response order.
    fn fetch_verses(&self, key: &QueryKey) -> Result<Vec<Verse>>;
}

impl<T: VerseSource + ?Sized> VerseSource for &T {
    fn fetch_verses(&self, key: &QueryKey) -> Result<Vec<Verse>> {
        (**self).fetch_verses(key)
    }
}
