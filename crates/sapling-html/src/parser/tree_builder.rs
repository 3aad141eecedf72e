use sapling_dom::{Document, Element};

use super::stack::ElementStack;
use crate::error::{ParseError, ParseIssue, Result};
use crate::tokenizer::{RawTextElement, Scanner};

/// State of the tree builder's single pass over the input.
///
/// The builder starts in `Text` and finishes when the input is exhausted in
/// `Text` with an empty stack. Any violated invariant ends the parse at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BuilderState {
    /// Reading a text run up to the next tag.
    Text,
    /// Reading one tag.
    Tag,
    /// Reading the verbatim body of the open raw-text element on top of the
    /// stack.
    RawText(RawTextElement),
}

/// Builds a [`Document`] from markup, rejecting any mis-nested or unclosed
/// element.
///
/// # Example
/// ```ignore
/// let document = HTMLParser::new("<p>Hello</p>").with_quiet_mode().run()?;
/// assert_eq!(document.children()[0].name, "p");
/// ```
pub struct HTMLParser {
    /// Input as code points; every offset reported is an index into this.
    input: Vec<char>,

    /// If true, parse issues are recorded but not printed.
    quiet: bool,
}

impl HTMLParser {
    /// Create a new parser for `input`.
    #[must_use]
    pub fn new(input: &str) -> Self {
        Self {
            input: input.chars().collect(),
            quiet: false,
        }
    }

    /// Enable quiet mode - parse issues are not echoed to stderr.
    #[must_use]
    pub const fn with_quiet_mode(mut self) -> Self {
        self.quiet = true;
        self
    }

    /// Run the parser and return the document.
    ///
    /// # Errors
    ///
    /// Returns the first [`ParseError`] encountered; no partial tree is kept.
    pub fn run(self) -> Result<Document> {
        self.run_with_issues().map(|(document, _)| document)
    }

    /// Run the parser and return both the document and any parse issues.
    ///
    /// # Errors
    ///
    /// Returns the first [`ParseError`] encountered; no partial tree is kept.
    pub fn run_with_issues(self) -> Result<(Document, Vec<ParseIssue>)> {
        let mut scanner = Scanner::new(&self.input);
        if self.quiet {
            scanner = scanner.with_quiet_mode();
        }
        TreeBuilder::new(scanner).build()
    }
}

/// The state of one parse: cursor, open elements and finished top-level
/// elements.
struct TreeBuilder<'a> {
    scanner: Scanner<'a>,
    state: BuilderState,
    stack_of_open_elements: ElementStack,
    // Top-level elements; the document has no wrapping root node.
    root: Vec<Element>,
}

impl<'a> TreeBuilder<'a> {
    const fn new(scanner: Scanner<'a>) -> Self {
        Self {
            scanner,
            state: BuilderState::Text,
            stack_of_open_elements: ElementStack::new(),
            root: Vec::new(),
        }
    }

    fn build(mut self) -> Result<(Document, Vec<ParseIssue>)> {
        loop {
            match self.state {
                BuilderState::Text => {
                    self.handle_text_state();
                    if self.scanner.is_at_end() {
                        break;
                    }
                }
                BuilderState::Tag => self.handle_tag_state()?,
                BuilderState::RawText(element) => self.handle_raw_text_state(element)?,
            }
        }

        if !self.stack_of_open_elements.is_empty() {
            return Err(ParseError::UnclosedElements {
                open: self.stack_of_open_elements.to_debug_string(),
                offset: self.scanner.position(),
            });
        }
        let issues = self.scanner.take_issues();
        Ok((Document::new(self.root), issues))
    }

    /// Append any text run as a text node, then read a tag.
    fn handle_text_state(&mut self) {
        let run = self.scanner.read_until_tag();
        if !run.is_empty() {
            self.insert(Element::text(run.iter().collect::<String>()));
        }
        self.state = BuilderState::Tag;
    }

    fn handle_tag_state(&mut self) -> Result<()> {
        let offset = self.scanner.position();
        let tag = self.scanner.read_tag()?;
        self.state = BuilderState::Text;

        if tag.is_close {
            return self.close_element(tag, offset);
        }
        if tag.is_void {
            // Comments, DOCTYPEs, void and self-closing tags never hold children.
            self.insert(tag);
            return Ok(());
        }
        if let Some(raw_text) = RawTextElement::from_tag_name(&tag.name) {
            self.state = BuilderState::RawText(raw_text);
        }
        self.stack_of_open_elements.push(tag);
        Ok(())
    }

    /// Fill in the body of the raw-text element on top of the stack and close
    /// it; it never receives tokenized children.
    fn handle_raw_text_state(&mut self, element: RawTextElement) -> Result<()> {
        let content_type = self
            .stack_of_open_elements
            .peek()
            .and_then(|open| open.get_attribute("type"))
            .unwrap_or_default()
            .to_string();
        let body = self.scanner.read_raw_text(element, &content_type)?;

        if let Some(mut open) = self.stack_of_open_elements.pop() {
            open.inner_text = body.iter().collect();
            self.insert(open);
        }
        self.state = BuilderState::Text;
        Ok(())
    }

    /// Pop the innermost open element for a close tag, failing if there is
    /// none or its name differs.
    fn close_element(&mut self, tag: Element, offset: usize) -> Result<()> {
        let Some(open) = self.stack_of_open_elements.pop() else {
            return Err(ParseError::MismatchedCloseTag {
                expected: None,
                found: tag.name,
                offset,
            });
        };
        if open.name != tag.name {
            return Err(ParseError::MismatchedCloseTag {
                expected: Some(open.name),
                found: tag.name,
                offset,
            });
        }
        self.insert(open);
        Ok(())
    }

    /// Attach a finished element to the current container: the innermost open
    /// element, or the document root if none is open.
    fn insert(&mut self, element: Element) {
        match self.stack_of_open_elements.peek_mut() {
            Some(parent) => parent.children.push(element),
            None => self.root.push(element),
        }
    }
}
