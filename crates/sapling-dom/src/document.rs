use core::fmt;

use serde::Serialize;

use crate::element::{Element, collect_by_tag_name};

/// The result of a successful parse: the top-level elements of the input in
/// document order.
///
/// There is no wrapping root node, so a fragment such as
/// `<div>a</div><div>b</div>` yields two top-level elements.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Document {
    children: Vec<Element>,
}

impl Document {
    /// Wrap an ordered list of top-level elements.
    #[must_use]
    pub const fn new(children: Vec<Element>) -> Self {
        Self { children }
    }

    /// Top-level nodes, including text runs.
    #[must_use]
    pub fn children(&self) -> &[Element] {
        &self.children
    }

    /// Top-level nodes excluding synthetic `"text"` nodes.
    #[must_use]
    pub fn non_text_children(&self) -> Vec<&Element> {
        self.children.iter().filter(|child| !child.is_text()).collect()
    }

    /// Every node in the document whose name equals `name`, searched
    /// depth-first in pre-order, so results come back in document order.
    ///
    /// Synthetic names are queryable too: `"text"` returns every text run and
    /// `"XML COMMENT"` every comment.
    #[must_use]
    pub fn get_elements_by_tag_name(&self, name: &str) -> Vec<&Element> {
        let mut found = Vec::new();
        collect_by_tag_name(&self.children, name, &mut found);
        found
    }

    /// Concatenation of every text run in the document.
    #[must_use]
    pub fn text_content(&self) -> String {
        self.children.iter().map(Element::text_content).collect()
    }

    /// Returns true if the input produced no nodes at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for child in &self.children {
            write!(f, "{child}")?;
        }
        Ok(())
    }
}
