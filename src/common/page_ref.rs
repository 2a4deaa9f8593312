//! Page reference type and reference-string parsing.

use std::fmt;

use serde::Serialize;

use crate::common::{Error, Result};

/// A reference to a virtual page.
///
/// Pages are single normalized characters (`'A'`, `'B'`, `'7'`, ...). The
/// simulator only ever compares them for equality, so any symbol works.
///
/// # Example
/// ```
/// use pagesim::PageRef;
///
/// let page = PageRef::parse("  b ").unwrap();
/// assert_eq!(page, PageRef::new('B'));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct PageRef(pub char);

impl PageRef {
    /// Create a page reference from a raw character (no normalization).
    #[inline]
    pub fn new(symbol: char) -> Self {
        PageRef(symbol)
    }

    /// Normalize a user-supplied token into a page reference.
    ///
    /// The token is trimmed and its first character upper-cased; anything
    /// after the first character is ignored.
    ///
    /// # Errors
    /// `Error::InvalidReference` if the token is blank.
    pub fn parse(token: &str) -> Result<Self> {
        let first = token
            .trim()
            .chars()
            .next()
            .ok_or_else(|| Error::InvalidReference(token.to_string()))?;

        let symbol = first.to_uppercase().next().unwrap_or(first);
        Ok(PageRef(symbol))
    }

    /// The underlying symbol.
    #[inline]
    pub fn symbol(&self) -> char {
        self.0
    }
}

impl From<char> for PageRef {
    fn from(symbol: char) -> Self {
        PageRef(symbol)
    }
}

impl fmt::Display for PageRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Parse a reference string such as `"A, B, C, A"` or `"a b c a"`.
///
/// Tokens are separated by commas and/or whitespace and normalized with
/// [`PageRef::parse`]. An empty comma-separated slot (`"A,,B"`) is rejected.
///
/// # Errors
/// `Error::InvalidReference` for blank tokens between commas.
pub fn parse_references(input: &str) -> Result<Vec<PageRef>> {
    let chunks: Vec<&str> = input.split(',').collect();
    let last = chunks.len() - 1;
    let mut pages = Vec::new();

    for (i, chunk) in chunks.iter().enumerate() {
        if chunk.trim().is_empty() {
            // Trailing comma, or no input at all
            if i == last {
                continue;
            }
            return Err(Error::InvalidReference((*chunk).to_string()));
        }
        for token in chunk.split_whitespace() {
            pages.push(PageRef::parse(token)?);
        }
    }

    Ok(pages)
}
