//! Literal substring containment
//!
//! Backed by `memchr::memmem`, which uses SIMD where the target supports it.
//! Searching UTF-8 bytes is exact for `str` because a valid needle can only
//! match on character boundaries.

use memchr::memmem;

/// Whether `text` contains `needle` as a contiguous substring
#[inline]
#[must_use]
pub fn contains(text: &str, needle: &str) -> bool {
    memmem::find(text.as_bytes(), needle.as_bytes()).is_some()
}

/// Reusable searcher for one needle across many texts
#[derive(Debug, Clone)]
pub struct SubstringFinder {
    finder: memmem::Finder<'static>,
}

impl SubstringFinder {
    pub fn new(needle: &str) -> Self {
        Self {
            finder: memmem::Finder::new(needle.as_bytes()).into_owned(),
        }
    }

    #[inline]
    pub fn is_in(&self, text: &str) -> bool {
        self.finder.find(text.as_bytes()).is_some()
    }
}
