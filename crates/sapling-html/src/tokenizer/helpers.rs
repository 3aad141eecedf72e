//! Helper functions for the scanner.
//!
//! This module contains utility functions used throughout the readers:
//! - Lookahead ("the next few characters are")
//! - Consumption of single characters and known keywords
//! - Tag-start detection for text runs
//! - Issue reporting through the shared warning system

use sapling_common::warning::warn_once;

use super::scanner::Scanner;
use crate::error::ParseIssue;

// =============================================================================
// Input/Character Helpers
// =============================================================================

impl Scanner<'_> {
    /// The character under the cursor, or None at end of input.
    #[must_use]
    pub fn current(&self) -> Option<char> {
        self.input.get(self.pos).copied()
    }

    /// Peek at a codepoint at the given offset from the cursor without
    /// consuming it.
    #[must_use]
    pub fn peek_codepoint(&self, offset: usize) -> Option<char> {
        self.input.get(self.pos + offset).copied()
    }

    /// Returns the character under the cursor and advances past it.
    /// Returns None if we've reached the end of input.
    pub fn consume(&mut self) -> Option<char> {
        let c = self.current()?;
        self.pos += 1;
        Some(c)
    }

    /// Check if the next few characters match the target string exactly.
    #[must_use]
    pub fn next_few_characters_are(&self, target: &str) -> bool {
        target
            .chars()
            .enumerate()
            .all(|(i, expected)| self.peek_codepoint(i) == Some(expected))
    }

    /// Check if the next few characters match the target string using
    /// ASCII case-insensitive comparison.
    #[must_use]
    pub fn next_few_characters_are_case_insensitive(&self, target: &str) -> bool {
        target.chars().enumerate().all(|(i, expected)| {
            self.peek_codepoint(i)
                .is_some_and(|c| c.eq_ignore_ascii_case(&expected))
        })
    }

    /// Consume the given string from the input.
    /// Caller must have already verified the characters are present.
    pub fn consume_string(&mut self, target: &str) {
        self.pos += target.chars().count();
    }

    /// Whitespace between tokens: space, tab, line feed, carriage return and
    /// form feed.
    #[must_use]
    pub const fn is_whitespace_char(c: char) -> bool {
        matches!(c, ' ' | '\t' | '\n' | '\r' | '\x0C')
    }

    /// Returns true if the cursor sits on a `<` that begins a tag.
    ///
    /// A tag begins with `<` followed by an ASCII letter, `/`, `!` or `?`, or
    /// by whitespace and then `/` (a spaced close tag like `< /div>`).
    #[must_use]
    pub fn begins_tag(&self) -> bool {
        if self.current() != Some('<') {
            return false;
        }
        match self.peek_codepoint(1) {
            Some(c) if c.is_ascii_alphabetic() => true,
            Some('/' | '!' | '?') => true,
            Some(c) if Self::is_whitespace_char(c) => {
                let mut offset = 2;
                while self.peek_codepoint(offset).is_some_and(Self::is_whitespace_char) {
                    offset += 1;
                }
                self.peek_codepoint(offset) == Some('/')
            }
            _ => false,
        }
    }

    /// Consume characters until one of `stops` or whitespace, returning the
    /// consumed run.
    pub(super) fn read_word(&mut self, stops: &[char]) -> String {
        let start = self.pos;
        while self
            .current()
            .is_some_and(|c| !Self::is_whitespace_char(c) && !stops.contains(&c))
        {
            self.pos += 1;
        }
        self.input[start..self.pos].iter().collect()
    }

    /// Collect the characters in `start..end` into a `String`.
    pub(super) fn text_between(&self, start: usize, end: usize) -> String {
        self.input[start..end].iter().collect()
    }
}

// =============================================================================
// Issue Helpers
// =============================================================================

impl Scanner<'_> {
    /// Record a recoverable oddity at `offset`.
    ///
    /// `kind` is a fixed summary echoed once via sapling-common's warning
    /// system (unless quiet); `message` carries the document-specific detail
    /// and is only stored in the issue list.
    pub(super) fn report(&mut self, offset: usize, kind: &'static str, message: String) {
        if !self.quiet {
            let _ = warn_once("HTML Parser", kind);
        }
        self.issues.push(ParseIssue { message, offset });
    }
}
