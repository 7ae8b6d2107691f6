//! Page index ranges
//!
//! Ranges are 0-based and half-open: `start` is the first page taken, `end` the first
//! page not taken. A missing `end` means "through the last page".

use std::fmt;
use std::ops::Range;
use std::str::FromStr;
use crate::error::{Error, Result};

/// A half-open range of 0-based page indices
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PageRange {
    /// First page index included
    pub start: usize,
    /// First page index excluded, `None` for the end of the document
    pub end: Option<usize>,
}

impl PageRange {
    pub fn new(start: usize, end: Option<usize>) -> Self {
        Self { start, end }
    }

    /// Every page of the document
    pub fn all() -> Self {
        Self::default()
    }

    /// Resolve against a document with `page_count` pages, clamping like a slice
    ///
    /// `end` is clamped to `page_count` and `start` to `end`, so an inverted or
    /// out-of-bounds range resolves to an empty range rather than an error.
    pub fn resolve(&self, page_count: usize) -> Range<usize> {
        let end = self.end.map_or(page_count, |end| end.min(page_count));
        let start = self.start.min(end);
        start..end
    }

    /// Resolve against a document with `page_count` pages, rejecting anything that
    /// would need clamping
    pub fn resolve_strict(&self, page_count: usize) -> Result<Range<usize>> {
        let end = self.end.unwrap_or(page_count);
        if self.start > end || end > page_count {
            return Err(Error::InvalidRange {
                start: self.start,
                end: self.end,
                page_count,
            });
        }
        Ok(self.start..end)
    }
}

impl fmt::Display for PageRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.end {
            Some(end) => write!(f, "{}..{}", self.start, end),
            None => write!(f, "{}..", self.start),
        }
    }
}

/// Parses `a..b`, `a..`, `..b`, `..` and a single index `a` (meaning `a..a+1`)
impl FromStr for PageRange {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let text = s.trim();
        let invalid = || Error::InvalidRangeSyntax(s.to_string());
        let index = |part: &str| part.trim().parse::<usize>().map_err(|_| invalid());

        let Some((start, end)) = text.split_once("..") else {
            let page = index(text)?;
            let end = page.checked_add(1).ok_or_else(invalid)?;
            return Ok(Self::new(page, Some(end)));
        };

        let start = if start.trim().is_empty() { 0 } else { index(start)? };
        let end = if end.trim().is_empty() { None } else { Some(index(end)?) };

        Ok(Self::new(start, end))
    }
}
