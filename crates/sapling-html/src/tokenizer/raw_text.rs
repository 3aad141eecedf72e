//! Raw-text reader for elements whose content is not markup.
//!
//! Script bodies with a JavaScript content type are scanned with a minimal
//! lexer that knows about strings and comments, so that a `</script>` inside
//! a string literal or comment does not end the element. Every other body
//! (style, or a script with a non-JavaScript type such as a template) is
//! scanned literally for its closing tag.
//!
//! Known limitations:
//! - `<style>` bodies are not CSS-aware, so a `</style>` inside a CSS string
//!   or comment ends the element.
//! - The script lexer has no regular expression state. A `//` inside a regex
//!   literal (`/a\//`) starts a line comment, and a quote inside one
//!   (`/'/`) starts a string.

use strum_macros::{AsRefStr, Display, EnumString};

use super::scanner::Scanner;
use crate::error::{ParseError, Result};

/// Elements whose body is captured verbatim instead of being tokenized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum RawTextElement {
    /// `<script>`
    Script,
    /// `<style>`
    Style,
}

impl RawTextElement {
    /// The raw-text container named `name`, if it is one.
    #[must_use]
    pub fn from_tag_name(name: &str) -> Option<Self> {
        name.parse().ok()
    }
}

/// Content types whose bodies get the string/comment-aware lexer.
const SCRIPT_CONTENT_TYPES: [&str; 7] = [
    "text/javascript",
    "application/javascript",
    "application/ecmascript",
    "text/ecmascript",
    "application/x-javascript",
    "text/jsx",
    "module",
];

/// Returns true for JavaScript content types, and for an empty type (a
/// `<script>` without a `type` attribute). Parameters after `;` are ignored.
#[must_use]
pub fn is_script_content_type(content_type: &str) -> bool {
    let essence = content_type.split(';').next().unwrap_or_default().trim();
    essence.is_empty()
        || SCRIPT_CONTENT_TYPES
            .iter()
            .any(|known| known.eq_ignore_ascii_case(essence))
}

/// Lexical state of the script body lexer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScriptState {
    /// Ordinary code, where a closing tag ends the body.
    Code,
    /// Inside a string delimited by `quote` (`'`, `"` or a backtick).
    String {
        /// The delimiter that ends the string.
        quote: char,
    },
    /// After `//`, until the next newline.
    LineComment,
    /// After `/*`, until the next `*/`.
    BlockComment,
}

impl<'a> Scanner<'a> {
    /// Consume the body of a raw-text element and its closing tag.
    ///
    /// The cursor must be on the first character after the open tag. On
    /// success it is left just past the closing tag's `>`, and the body
    /// without the closing tag is returned. `content_type` is the element's
    /// `type` attribute, or empty if it has none; it only matters for
    /// [`RawTextElement::Script`].
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::UnterminatedRawText`] if end of input comes
    /// before the closing tag.
    pub fn read_raw_text(
        &mut self,
        element: RawTextElement,
        content_type: &str,
    ) -> Result<&'a [char]> {
        if element == RawTextElement::Script {
            if is_script_content_type(content_type) {
                return self.read_until_script_close(element);
            }
            self.report(
                self.pos,
                "non-JavaScript script body scanned literally",
                format!("<script type=\"{content_type}\"> body scanned literally"),
            );
        }
        self.read_until_literal_close(element)
    }

    /// Lexer over code, strings, line comments and block comments.
    fn read_until_script_close(&mut self, element: RawTextElement) -> Result<&'a [char]> {
        let start = self.pos;
        let mut state = ScriptState::Code;
        while let Some(c) = self.current() {
            match state {
                ScriptState::Code => {
                    if c == '<'
                        && let Some(len) = self.closing_tag_len(element)
                    {
                        return Ok(self.finish_raw_text(start, len));
                    }
                    match (c, self.peek_codepoint(1)) {
                        ('"' | '\'' | '`', _) => state = ScriptState::String { quote: c },
                        ('/', Some('/')) => {
                            state = ScriptState::LineComment;
                            self.pos += 1;
                        }
                        ('/', Some('*')) => {
                            state = ScriptState::BlockComment;
                            self.pos += 1;
                        }
                        _ => {}
                    }
                }
                ScriptState::String { quote } => {
                    if c == '\\' {
                        // Skip the escaped character.
                        self.pos += 1;
                    } else if c == quote || (c == '\n' && quote != '`') {
                        state = ScriptState::Code;
                    }
                }
                ScriptState::LineComment => {
                    if c == '\n' {
                        state = ScriptState::Code;
                    }
                }
                ScriptState::BlockComment => {
                    if c == '*' && self.peek_codepoint(1) == Some('/') {
                        state = ScriptState::Code;
                        self.pos += 1;
                    }
                }
            }
            self.pos += 1;
        }
        Err(Self::unterminated(element, start))
    }

    /// Literal scan for the closing tag, with no lexical awareness.
    fn read_until_literal_close(&mut self, element: RawTextElement) -> Result<&'a [char]> {
        let start = self.pos;
        while !self.is_at_end() {
            if let Some(len) = self.closing_tag_len(element) {
                return Ok(self.finish_raw_text(start, len));
            }
            self.pos += 1;
        }
        Err(Self::unterminated(element, start))
    }

    /// Length of the closing tag for `element` at the cursor: `</`, the name
    /// in any case, optional whitespace, then `>`.
    fn closing_tag_len(&self, element: RawTextElement) -> Option<usize> {
        if self.current() != Some('<') || self.peek_codepoint(1) != Some('/') {
            return None;
        }
        let mut len = 2;
        for expected in element.as_ref().chars() {
            let c = self.peek_codepoint(len)?;
            if !c.eq_ignore_ascii_case(&expected) {
                return None;
            }
            len += 1;
        }
        while self.peek_codepoint(len).is_some_and(Self::is_whitespace_char) {
            len += 1;
        }
        (self.peek_codepoint(len) == Some('>')).then_some(len + 1)
    }

    /// Step over the closing tag and return the body that preceded it.
    fn finish_raw_text(&mut self, start: usize, closing_tag_len: usize) -> &'a [char] {
        let end = self.pos;
        self.pos += closing_tag_len;
        &self.input[start..end]
    }

    fn unterminated(element: RawTextElement, start: usize) -> ParseError {
        ParseError::UnterminatedRawText {
            name: element.to_string(),
            offset: start,
        }
    }
}
