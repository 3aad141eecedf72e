//! Element tree for the Sapling HTML parser.
//!
//! # Design
//!
//! The tree has a single node shape, [`Element`]. Markup tags, text runs,
//! comments and the DOCTYPE are all `Element`s and are told apart by their
//! name and flags:
//!
//! | Node      | `name`          | Flags                        | Payload      |
//! |-----------|-----------------|------------------------------|--------------|
//! | Tag       | name as written | `is_void` for void elements  | `children`   |
//! | Text run  | `"text"`        | -                            | `inner_text` |
//! | Comment   | `"XML COMMENT"` | `is_comment`, `is_void`      | `inner_text` |
//! | DOCTYPE   | `"DOCTYPE"`     | `is_void`                    | `attributes` |
//!
//! Every element owns its children outright; there are no parent pointers and
//! no shared nodes. A parsed [`Document`] is an ordered list of top-level
//! elements with no wrapping root node.

use std::collections::HashMap;

mod document;
mod dump;
mod element;

pub use document::Document;
pub use dump::{dump_tree, print_tree};
pub use element::Element;

/// Map of attribute names to values for an element.
///
/// An attribute written without `=value` maps to the empty string.
pub type AttributesMap = HashMap<String, String>;

/// Name given to the synthetic nodes that hold text runs between tags.
pub const TEXT_NODE_NAME: &str = "text";

/// Name given to `<!DOCTYPE ...>` nodes.
pub const DOCTYPE_NAME: &str = "DOCTYPE";

/// Name given to `<!-- ... -->` comment nodes.
pub const COMMENT_NAME: &str = "XML COMMENT";
