//! Tag reader.
//!
//! Given a cursor on `<`, consumes exactly one tag and produces an
//! [`Element`] token that is not yet attached to any tree. Rules are tried in
//! order: comment, DOCTYPE, other declarations, close tag, open tag.

use sapling_dom::{AttributesMap, Element};

use super::scanner::Scanner;
use crate::error::{ParseError, Result};

/// Elements that never have children and need no closing tag.
pub const VOID_ELEMENTS: [&str; 16] = [
    "area", "base", "br", "col", "command", "embed", "hr", "img", "input", "keygen", "link",
    "meta", "param", "source", "track", "wbr",
];

/// Returns true if `name` is a void element, ignoring ASCII case.
#[must_use]
pub fn is_void_element(name: &str) -> bool {
    VOID_ELEMENTS
        .iter()
        .any(|void| void.eq_ignore_ascii_case(name))
}

impl Scanner<'_> {
    /// Consume one full tag starting at the `<` under the cursor.
    ///
    /// The number of characters consumed is the change in
    /// [`Scanner::position`].
    ///
    /// # Errors
    ///
    /// - [`ParseError::UnterminatedTag`] if the cursor is not on `<` or end of
    ///   input comes before the closing `>`.
    /// - [`ParseError::UnterminatedComment`] for `<!--` with no `-->`.
    /// - [`ParseError::UnterminatedAttributeValue`] for a quoted value with no
    ///   closing quote.
    pub fn read_tag(&mut self) -> Result<Element> {
        let start = self.pos;
        if self.consume() != Some('<') {
            return Err(ParseError::UnterminatedTag { offset: start });
        }

        if self.next_few_characters_are("!--") {
            self.consume_string("!--");
            return self.read_comment(start);
        }
        if self.next_few_characters_are_case_insensitive("!DOCTYPE") {
            self.consume_string("!DOCTYPE");
            return self.read_doctype(start);
        }
        if matches!(self.current(), Some('!' | '?')) {
            return self.read_declaration(start);
        }

        let _ = self.read_whitespace();
        if self.current() == Some('/') {
            self.pos += 1;
            let _ = self.read_whitespace();
            return self.read_close_tag(start);
        }
        self.read_open_tag(start)
    }

    /// Comment body: scanned, not tokenized, up to the literal `-->`.
    fn read_comment(&mut self, start: usize) -> Result<Element> {
        let body_start = self.pos;
        while !self.next_few_characters_are("-->") {
            if self.consume().is_none() {
                return Err(ParseError::UnterminatedComment { offset: start });
            }
        }
        let body = self.text_between(body_start, self.pos);
        self.consume_string("-->");
        Ok(Element::comment(body))
    }

    /// `<!DOCTYPE ...>`: each bareword or quoted identifier becomes an
    /// empty-valued attribute.
    fn read_doctype(&mut self, start: usize) -> Result<Element> {
        let mut doctype = Element::doctype();
        loop {
            let _ = self.read_whitespace();
            let token = match self.current() {
                None => return Err(ParseError::UnterminatedTag { offset: start }),
                Some('>') => {
                    self.pos += 1;
                    return Ok(doctype);
                }
                Some(quote @ ('"' | '\'')) => self.read_quoted(quote)?,
                Some(_) => self.read_word(&['>']),
            };
            if !token.is_empty() {
                let _ = doctype.attributes.entry(token).or_default();
            }
        }
    }

    /// Any other `<!...>` or `<?...>` declaration, kept as a comment.
    fn read_declaration(&mut self, start: usize) -> Result<Element> {
        let marker = self.consume();
        let body_start = self.pos;
        while self.current() != Some('>') {
            if self.consume().is_none() {
                return Err(ParseError::UnterminatedTag { offset: start });
            }
        }
        let mut body = self.text_between(body_start, self.pos);
        self.pos += 1;
        if marker == Some('?') && body.ends_with('?') {
            let _ = body.pop();
        }
        self.report(
            start,
            "declaration kept as a comment",
            format!("declaration <{}{body}> kept as a comment", marker.unwrap_or('!')),
        );
        Ok(Element::comment(body))
    }

    /// `</name>`, with the cursor just past the slash and any whitespace.
    fn read_close_tag(&mut self, start: usize) -> Result<Element> {
        let name = self.read_word(&['/', '>']);
        let junk_start = self.pos;
        while self.current() != Some('>') {
            if self.consume().is_none() {
                return Err(ParseError::UnterminatedTag { offset: start });
            }
        }
        let junk = self.text_between(junk_start, self.pos);
        self.pos += 1;
        if !junk.trim().is_empty() {
            self.report(
                start,
                "text after a close tag name ignored",
                format!("ignored '{}' in close tag </{name}>", junk.trim()),
            );
        }
        Ok(Element::close(name))
    }

    /// Open or self-closing tag, with the cursor on the first character of
    /// the name.
    fn read_open_tag(&mut self, start: usize) -> Result<Element> {
        let name = self.read_word(&['/', '>']);
        let mut element = Element::new(name);
        loop {
            let _ = self.read_whitespace();
            match self.current() {
                None => return Err(ParseError::UnterminatedTag { offset: start }),
                Some('>') => {
                    self.pos += 1;
                    break;
                }
                Some('/') => {
                    self.pos += 1;
                    if self.current() == Some('>') {
                        self.pos += 1;
                        element.is_void = true;
                        break;
                    }
                    self.report(
                        self.pos - 1,
                        "stray '/' in a tag ignored",
                        format!("stray '/' in <{}> ignored", element.name),
                    );
                }
                Some(_) => self.read_attribute(&element.name, &mut element.attributes)?,
            }
        }
        if is_void_element(&element.name) {
            element.is_void = true;
        }
        Ok(element)
    }

    /// One `name[=value]` pair. The first occurrence of a name wins.
    fn read_attribute(&mut self, tag_name: &str, attributes: &mut AttributesMap) -> Result<()> {
        let name_start = self.pos;
        let name = self.read_word(&['=', '>', '/']);
        let _ = self.read_whitespace();

        let value = if self.current() == Some('=') {
            self.pos += 1;
            let _ = self.read_whitespace();
            match self.current() {
                Some(quote @ ('"' | '\'')) => self.read_quoted(quote)?,
                _ => self.read_word(&['>']),
            }
        } else {
            String::new()
        };

        if name.is_empty() {
            self.report(
                name_start,
                "attribute value without a name ignored",
                format!("attribute value '{value}' without a name on <{tag_name}> ignored"),
            );
        } else if attributes.contains_key(&name) {
            self.report(
                name_start,
                "duplicate attribute ignored",
                format!("duplicate attribute '{name}' on <{tag_name}> ignored"),
            );
        } else {
            let _ = attributes.insert(name, value);
        }
        Ok(())
    }

    /// A quoted string with the cursor on its opening quote. Everything up to
    /// the same quote character is taken verbatim, including the other quote.
    fn read_quoted(&mut self, quote: char) -> Result<String> {
        let quote_start = self.pos;
        self.pos += 1;
        let value_start = self.pos;
        loop {
            match self.consume() {
                None => {
                    return Err(ParseError::UnterminatedAttributeValue {
                        offset: quote_start,
                    });
                }
                Some(c) if c == quote => {
                    return Ok(self.text_between(value_start, self.pos - 1));
                }
                Some(_) => {}
            }
        }
    }
}
