use thiserror::Error;

/// Result type returned by every scanner, reader and the tree builder.
pub type Result<T> = core::result::Result<T, ParseError>;

/// A fatal parse failure.
///
/// Every variant carries the code-point offset at which the problem was
/// detected. Parsing stops at the first error and no partial tree is kept.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// `<` with no matching `>` before end of input.
    #[error("unterminated tag starting at offset {offset}")]
    UnterminatedTag {
        /// Offset of the `<` that opened the tag.
        offset: usize,
    },

    /// An opening quote with no matching closing quote.
    #[error("unterminated attribute value starting at offset {offset}")]
    UnterminatedAttributeValue {
        /// Offset of the opening quote.
        offset: usize,
    },

    /// `<!--` with no matching `-->`.
    #[error("unterminated comment starting at offset {offset}")]
    UnterminatedComment {
        /// Offset of the `<` of `<!--`.
        offset: usize,
    },

    /// A script or style body with no closing tag.
    #[error("missing </{name}> for raw text starting at offset {offset}")]
    UnterminatedRawText {
        /// Name of the raw-text container.
        name: String,
        /// Offset of the first character of the body.
        offset: usize,
    },

    /// A close tag that does not match the innermost open element, or a close
    /// tag with no element open at all.
    #[error(
        "close tag </{found}> at offset {offset} does not match {}",
        describe_open(.expected.as_deref())
    )]
    MismatchedCloseTag {
        /// Name of the innermost open element, if any.
        expected: Option<String>,
        /// Name in the close tag.
        found: String,
        /// Offset of the close tag's `<`.
        offset: usize,
    },

    /// End of input reached with elements still open.
    #[error("unclosed elements at end of input: {open}")]
    UnclosedElements {
        /// The open elements, outermost first, joined with `" > "`.
        open: String,
        /// Offset of the end of input.
        offset: usize,
    },
}

fn describe_open(expected: Option<&str>) -> String {
    expected.map_or_else(|| "any open element".to_string(), |name| format!("open <{name}>"))
}

impl ParseError {
    /// Code-point offset at which the error was detected.
    #[must_use]
    pub const fn offset(&self) -> usize {
        match self {
            Self::UnterminatedTag { offset }
            | Self::UnterminatedAttributeValue { offset }
            | Self::UnterminatedComment { offset }
            | Self::UnterminatedRawText { offset, .. }
            | Self::MismatchedCloseTag { offset, .. }
            | Self::UnclosedElements { offset, .. } => *offset,
        }
    }

    /// Returns true for nesting failures, as opposed to lexical scan failures.
    #[must_use]
    pub const fn is_structural(&self) -> bool {
        matches!(
            self,
            Self::MismatchedCloseTag { .. } | Self::UnclosedElements { .. }
        )
    }

    /// 1-based line and column of the error within `input`, which must be the
    /// text that was parsed.
    #[must_use]
    pub fn line_and_column(&self, input: &str) -> (usize, usize) {
        let mut line = 1;
        let mut column = 1;
        for c in input.chars().take(self.offset()) {
            if c == '\n' {
                line += 1;
                column = 1;
            } else {
                column += 1;
            }
        }
        (line, column)
    }
}

/// A recoverable oddity noticed while parsing.
///
/// Issues never stop the parse; they are reported through the shared warning
/// system and returned by [`crate::HTMLParser::run_with_issues`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseIssue {
    /// Description of what was tolerated.
    pub message: String,
    /// Code-point offset where it was noticed.
    pub offset: usize,
}
