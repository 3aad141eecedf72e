//! Cursor-based tokenizer.
//!
//! All readers are methods on [`Scanner`], which pairs the input (as code
//! points) with a single cursor, so readers compose in sequence without
//! re-scanning.

/// Lookahead, consumption and issue-reporting helpers.
pub mod helpers;
/// Script and style body reader.
pub mod raw_text;
/// The scanner and its primitive whitespace/text readers.
pub mod scanner;
/// Tag, comment and DOCTYPE reader.
pub mod tag;

pub use raw_text::{RawTextElement, is_script_content_type};
pub use scanner::Scanner;
pub use tag::{VOID_ELEMENTS, is_void_element};
