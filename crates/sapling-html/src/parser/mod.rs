//! HTML parser module for tree construction.

/// Stack of open elements used to validate nesting.
pub mod stack;
/// HTML parser implementation.
pub mod tree_builder;

pub use stack::ElementStack;
pub use tree_builder::HTMLParser;
