use core::fmt::Write;

use crate::Element;

/// Render a subtree one node per line, indented two spaces per level.
///
/// Text runs are quoted with newlines escaped and spaces shown as `·` so
/// that whitespace-only runs stay visible.
#[must_use]
pub fn dump_tree(element: &Element, indent: usize) -> String {
    let mut out = String::new();
    write_tree(&mut out, element, indent);
    out
}

/// Print a subtree for debugging.
pub fn print_tree(element: &Element, indent: usize) {
    print!("{}", dump_tree(element, indent));
}

fn write_tree(out: &mut String, element: &Element, indent: usize) {
    let prefix = "  ".repeat(indent);
    if element.is_comment {
        let _ = writeln!(out, "{prefix}<!-- {} -->", element.inner_text.trim());
        return;
    }
    if element.is_text() {
        let _ = writeln!(out, "{prefix}\"{}\"", visible_whitespace(&element.inner_text));
        return;
    }

    let attrs: Vec<String> = element
        .sorted_attributes()
        .into_iter()
        .map(|(k, v)| {
            if v.is_empty() {
                k.clone()
            } else {
                format!("{k}=\"{v}\"")
            }
        })
        .collect();
    if attrs.is_empty() {
        let _ = writeln!(out, "{prefix}<{}>", element.name);
    } else {
        let _ = writeln!(out, "{prefix}<{} {}>", element.name, attrs.join(" "));
    }

    for child in &element.children {
        write_tree(out, child, indent + 1);
    }
    // Raw script/style body.
    if !element.inner_text.is_empty() {
        let _ = writeln!(
            out,
            "{prefix}  \"{}\"",
            visible_whitespace(&element.inner_text)
        );
    }
}

fn visible_whitespace(text: &str) -> String {
    text.replace('\n', "\\n").replace(' ', "\u{00B7}")
}
