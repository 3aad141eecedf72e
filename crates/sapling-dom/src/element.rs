use core::fmt;
use std::collections::{HashMap, HashSet};

use serde::Serialize;

use crate::{AttributesMap, COMMENT_NAME, DOCTYPE_NAME, TEXT_NODE_NAME};

/// A node in the parsed tree.
///
/// Elements are produced by the tag reader and attached to their parent by
/// the tree builder. Once an element has been closed (or is void) it is
/// never modified again.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Element {
    /// Tag name as written, or one of the synthetic names
    /// [`TEXT_NODE_NAME`], [`DOCTYPE_NAME`] and [`COMMENT_NAME`].
    pub name: String,

    /// Attribute name to value. Names and values are kept exactly as written.
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub attributes: AttributesMap,

    /// The element cannot contain children: written as `<x/>`, on the void
    /// element list, or a DOCTYPE/comment token.
    pub is_void: bool,

    /// A standalone closing tag (`</name>`). Close tokens are consumed by the
    /// tree builder and never appear in a finished tree.
    #[serde(skip_serializing_if = "core::ops::Not::not")]
    pub is_close: bool,

    /// A `<!-- ... -->` comment.
    #[serde(skip_serializing_if = "core::ops::Not::not")]
    pub is_comment: bool,

    /// Comment body, raw script/style body, or the literal text run of a text
    /// node. Empty for every other element.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub inner_text: String,

    /// Child elements in document order.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Element>,
}

impl Element {
    /// Create an empty, non-void element with the given tag name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Create a synthetic text node holding a run of text between tags.
    #[must_use]
    pub fn text(run: impl Into<String>) -> Self {
        Self {
            name: TEXT_NODE_NAME.to_string(),
            inner_text: run.into(),
            ..Self::default()
        }
    }

    /// Create a comment node with the text found between `<!--` and `-->`.
    #[must_use]
    pub fn comment(body: impl Into<String>) -> Self {
        Self {
            name: COMMENT_NAME.to_string(),
            is_void: true,
            is_comment: true,
            inner_text: body.into(),
            ..Self::default()
        }
    }

    /// Create an empty DOCTYPE node.
    #[must_use]
    pub fn doctype() -> Self {
        Self {
            name: DOCTYPE_NAME.to_string(),
            is_void: true,
            ..Self::default()
        }
    }

    /// Create a closing-tag token for `</name>`.
    #[must_use]
    pub fn close(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_close: true,
            ..Self::default()
        }
    }

    /// Return this element with an extra attribute set.
    #[must_use]
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let _ = self.attributes.insert(name.into(), value.into());
        self
    }

    /// Return this element marked as void.
    #[must_use]
    pub const fn into_void(mut self) -> Self {
        self.is_void = true;
        self
    }

    /// Returns true for the synthetic text nodes.
    #[must_use]
    pub fn is_text(&self) -> bool {
        self.name == TEXT_NODE_NAME
    }

    /// Returns true for `<!DOCTYPE ...>` nodes.
    #[must_use]
    pub fn is_doctype(&self) -> bool {
        self.name == DOCTYPE_NAME
    }

    /// Look up an attribute value by its exact (case-sensitive) name.
    #[must_use]
    pub fn get_attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// Returns the element's id attribute value if present.
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.get_attribute("id")
    }

    /// Returns the set of class names from the whitespace-separated class
    /// attribute.
    #[must_use]
    pub fn classes(&self) -> HashSet<&str> {
        self.get_attribute("class")
            .map(|list| list.split_whitespace().collect())
            .unwrap_or_default()
    }

    /// Direct children that are not synthetic text nodes.
    #[must_use]
    pub fn non_text_children(&self) -> Vec<&Self> {
        self.children.iter().filter(|child| !child.is_text()).collect()
    }

    /// All descendants named `name`, depth-first in document order.
    ///
    /// The element itself is not included. `"text"` finds every text run.
    #[must_use]
    pub fn get_elements_by_tag_name(&self, name: &str) -> Vec<&Self> {
        let mut found = Vec::new();
        collect_by_tag_name(&self.children, name, &mut found);
        found
    }

    /// Concatenation of every text run in this subtree, in document order.
    ///
    /// Raw script/style bodies and comments are not text runs and are skipped.
    #[must_use]
    pub fn text_content(&self) -> String {
        let mut content = String::new();
        self.push_text_content(&mut content);
        content
    }

    fn push_text_content(&self, out: &mut String) {
        if self.is_text() {
            out.push_str(&self.inner_text);
            return;
        }
        for child in &self.children {
            child.push_text_content(out);
        }
    }

    /// Human-readable reconstruction of this subtree for diagnostics.
    ///
    /// Attributes are written in name order, so the result is stable but not
    /// necessarily byte-identical to the source. Values are double-quoted,
    /// single-quoted if they contain `"`, and left bare if they contain both
    /// quote characters. Values the parser produced always read back the
    /// same; a hand-built value holding both quotes plus whitespace or `>`
    /// does not.
    #[must_use]
    pub fn to_debug_string(&self) -> String {
        self.to_string()
    }

    /// Attributes sorted by name, for stable output.
    pub(crate) fn sorted_attributes(&self) -> Vec<(&String, &String)> {
        let mut attributes: Vec<_> = self.attributes.iter().collect();
        attributes.sort_unstable();
        attributes
    }
}

/// Pre-order search over `elements` and their descendants.
pub(crate) fn collect_by_tag_name<'a>(
    elements: &'a [Element],
    name: &str,
    found: &mut Vec<&'a Element>,
) {
    for element in elements {
        if element.name == name {
            found.push(element);
        }
        collect_by_tag_name(&element.children, name, found);
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_comment {
            return write!(f, "<!--{}-->", self.inner_text);
        }
        if self.is_text() {
            return f.write_str(&self.inner_text);
        }
        if self.is_close {
            return write!(f, "</{}>", self.name);
        }
        if self.is_doctype() {
            write!(f, "<!DOCTYPE")?;
            for (name, _) in self.sorted_attributes() {
                write!(f, " {name}")?;
            }
            return write!(f, ">");
        }

        write!(f, "<{}", self.name)?;
        for (name, value) in self.sorted_attributes() {
            let has_double = value.contains('"');
            if value.is_empty() {
                write!(f, " {name}")?;
            } else if has_double && value.contains('\'') {
                // Only a bareword can hold both quotes.
                write!(f, " {name}={value}")?;
            } else if has_double {
                write!(f, " {name}='{value}'")?;
            } else {
                write!(f, " {name}=\"{value}\"")?;
            }
        }
        if self.is_void {
            return write!(f, " />");
        }
        write!(f, ">")?;
        for child in &self.children {
            write!(f, "{child}")?;
        }
        f.write_str(&self.inner_text)?;
        write!(f, "</{}>", self.name)
    }
}
