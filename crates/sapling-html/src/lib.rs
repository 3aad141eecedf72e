//! Permissive HTML tokenizer and tree builder for Sapling.
//!
//! # Scope
//!
//! This crate implements:
//! - **Scanners** - whitespace and text runs over a code-point cursor
//! - **Tag reader** - open, close, self-closing, comment and DOCTYPE tags,
//!   with bareword, single-quoted and double-quoted attribute values
//! - **Raw-text reader** - verbatim `<script>` and `<style>` bodies, with a
//!   small string/comment-aware lexer for JavaScript
//! - **Tree builder** - a single pass with a stack of open elements that
//!   rejects any mis-nested or unclosed tag
//!
//! Tag names are kept exactly as written and a close tag must match its open
//! tag exactly, so `<DIV>...</div>` is rejected with
//! [`ParseError::MismatchedCloseTag`]. Keyword lookups (void elements,
//! `script`/`style`, DOCTYPE) ignore ASCII case.
//!
//! # Not Implemented
//!
//! - HTML5 error recovery (implied end tags, adoption agency algorithm)
//! - Character reference decoding; text and attribute values are verbatim
//! - CSS-aware scanning of `<style>` bodies
//! - Regular expression literals in scripts; `//` inside one such as
//!   `/a\//` starts a line comment

/// Parse errors and non-fatal parse issues.
pub mod error;
/// HTML tree construction.
pub mod parser;
/// Cursor scanners, tag reader and raw-text reader.
pub mod tokenizer;

pub use error::{ParseError, ParseIssue, Result};
pub use parser::{ElementStack, HTMLParser};
pub use sapling_dom::{Document, Element};
pub use tokenizer::{RawTextElement, Scanner, VOID_ELEMENTS, is_void_element};

/// Parse `input` into a [`Document`].
///
/// Equivalent to `HTMLParser::new(input).run()`.
///
/// # Errors
///
/// Returns the first [`ParseError`] encountered: an unterminated tag,
/// attribute value, comment or raw-text body, a close tag that does not match
/// the innermost open element, or elements still open at end of input. No
/// partial tree is ever returned.
pub fn parse(input: &str) -> Result<Document> {
    HTMLParser::new(input).run()
}
