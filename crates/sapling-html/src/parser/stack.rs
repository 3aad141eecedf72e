use core::fmt;

use sapling_dom::Element;

/// The stack of open elements, innermost last.
///
/// Every element whose open tag has been read but whose close tag has not
/// appears here exactly once, in the order it was opened. The stack owns an
/// element only while it is open; once popped, the tree builder attaches it
/// to its parent, so no node is ever reachable from both the stack and the
/// tree.
#[derive(Debug, Clone, Default)]
pub struct ElementStack {
    elements: Vec<Element>,
}

impl ElementStack {
    /// Create an empty stack.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            elements: Vec::new(),
        }
    }

    /// Push a newly opened element; it becomes the current container.
    pub fn push(&mut self, element: Element) {
        self.elements.push(element);
    }

    /// Remove and return the innermost element, or None if the stack is empty.
    pub fn pop(&mut self) -> Option<Element> {
        self.elements.pop()
    }

    /// The innermost element, or None if the stack is empty.
    #[must_use]
    pub fn peek(&self) -> Option<&Element> {
        self.elements.last()
    }

    /// Mutable access to the innermost element, for appending children.
    pub fn peek_mut(&mut self) -> Option<&mut Element> {
        self.elements.last_mut()
    }

    /// Current depth.
    #[must_use]
    pub const fn count(&self) -> usize {
        self.elements.len()
    }

    /// Returns true if no element is open.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Element names from bottom to top joined with `" > "`, e.g.
    /// `"html > body > div"`.
    #[must_use]
    pub fn to_debug_string(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ElementStack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, element) in self.elements.iter().enumerate() {
            if i > 0 {
                f.write_str(" > ")?;
            }
            f.write_str(&element.name)?;
        }
        Ok(())
    }
}
