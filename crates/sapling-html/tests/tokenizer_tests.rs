//! Integration tests for the cursor scanners, tag reader and raw-text reader.

use sapling_html::tokenizer::is_script_content_type;
use sapling_html::{Element, ParseError, RawTextElement, Scanner};

/// Helper to view a string as the code points the scanner works on
fn chars(input: &str) -> Vec<char> {
    input.chars().collect()
}

/// Helper to turn a scanned run back into a string
fn as_string(run: &[char]) -> String {
    run.iter().collect()
}

/// Helper to read one tag from the start of `input`
fn read_tag(input: &str) -> Result<Element, ParseError> {
    let input = chars(input);
    let mut scanner = Scanner::new(&input).with_quiet_mode();
    scanner.read_tag()
}

/// Helper to read a script body with the given content type
fn read_script(input: &str, content_type: &str) -> Result<String, ParseError> {
    let input = chars(input);
    let mut scanner = Scanner::new(&input).with_quiet_mode();
    scanner
        .read_raw_text(RawTextElement::Script, content_type)
        .map(as_string)
}

// =============================================================================
// Scanners
// =============================================================================

#[test]
fn test_read_whitespace() {
    let input = chars("     \n\t     this is a test string ...");
    let mut scanner = Scanner::new(&input);

    let run = scanner.read_whitespace();
    assert_eq!(as_string(run), "     \n\t     ");
    assert_eq!(scanner.position(), 12);
}

#[test]
fn test_read_whitespace_without_whitespace() {
    let input = chars("abc");
    let mut scanner = Scanner::new(&input);

    assert!(scanner.read_whitespace().is_empty());
    assert_eq!(scanner.position(), 0);
}

#[test]
fn test_read_until_tag() {
    let text = "      this is a test of reading until the tag ";
    let input = chars(&format!("{text}<area/>"));
    let mut scanner = Scanner::new(&input);

    let run = scanner.read_until_tag();
    assert_eq!(as_string(run), text);
    assert_eq!(scanner.position(), text.chars().count());
    assert_eq!(scanner.current(), Some('<'));
}

#[test]
fn test_read_until_tag_without_tag() {
    let input = chars("there is no tag.");
    let mut scanner = Scanner::new(&input);

    let run = scanner.read_until_tag();
    assert_eq!(as_string(run), "there is no tag.");
    assert_eq!(scanner.position(), 16);
    assert!(scanner.is_at_end());
}

#[test]
fn test_read_until_tag_at_tag() {
    for input in ["<a href='things.html'>things</a>", "<br/> more text ..."] {
        let input = chars(input);
        let mut scanner = Scanner::new(&input);

        assert!(scanner.read_until_tag().is_empty());
        assert_eq!(scanner.position(), 0);
    }
}

#[test]
fn test_read_until_tag_ignores_bare_less_than() {
    let input = chars("1 < 2 <b>bold</b>");
    let mut scanner = Scanner::new(&input);

    assert_eq!(as_string(scanner.read_until_tag()), "1 < 2 ");
}

#[test]
fn test_read_until_tag_stops_at_spaced_close_tag() {
    let input = chars("text< /div>");
    let mut scanner = Scanner::new(&input);

    assert_eq!(as_string(scanner.read_until_tag()), "text");
}

// =============================================================================
// Tag reader
// =============================================================================

#[test]
fn test_read_tag() {
    let cases = [
        ("<!DOCTYPE>", Element::doctype()),
        ("<!DOCTYPE html>", Element::doctype().with_attribute("html", "")),
        (
            "<!-- this is a comment -->",
            Element::comment(" this is a comment "),
        ),
        ("<br>", Element::new("br").into_void()),
        ("<br/>", Element::new("br").into_void()),
        ("</div>", Element::close("div")),
        ("</ div>", Element::close("div")),
        ("<BR>", Element::new("BR").into_void()),
        ("< /div>", Element::close("div")),
        (
            "<div class=\"content\">",
            Element::new("div").with_attribute("class", "content"),
        ),
        (
            "<div class=\"with='quotes'\">",
            Element::new("div").with_attribute("class", "with='quotes'"),
        ),
        (
            "<div class='with=\"escaped_quotes\"'>",
            Element::new("div").with_attribute("class", "with=\"escaped_quotes\""),
        ),
        (
            "<a class=\"my-link\" href=\"/test/route\" />",
            Element::new("a")
                .with_attribute("class", "my-link")
                .with_attribute("href", "/test/route")
                .into_void(),
        ),
    ];

    for (tag, expected) in cases {
        let actual = read_tag(tag).unwrap();
        assert_eq!(actual, expected, "reading {tag}");
    }
}

#[test]
fn test_read_tag_advances_past_tag() {
    let input = chars("<br/>after");
    let mut scanner = Scanner::new(&input);

    let _ = scanner.read_tag().unwrap();
    assert_eq!(scanner.position(), 5);
    assert_eq!(scanner.current(), Some('a'));
}

#[test]
fn test_tag_name_and_attributes_verbatim() {
    let tag = read_tag("<DIV Class=\"Big\">").unwrap();
    assert_eq!(tag.name, "DIV");
    assert!(!tag.is_void);
    assert_eq!(tag.get_attribute("Class"), Some("Big"));
    assert_eq!(tag.get_attribute("class"), None);
}

#[test]
fn test_bareword_and_valueless_attributes() {
    let tag = read_tag("<input type=checkbox checked>").unwrap();
    assert_eq!(tag.name, "input");
    assert!(tag.is_void);
    assert_eq!(tag.get_attribute("type"), Some("checkbox"));
    assert_eq!(tag.get_attribute("checked"), Some(""));
}

#[test]
fn test_attribute_whitespace_around_equals() {
    let tag = read_tag("<a href = \"/x\" >").unwrap();
    assert_eq!(tag.get_attribute("href"), Some("/x"));
    assert!(!tag.is_void);
}

#[test]
fn test_doctype_case_insensitive_with_identifiers() {
    let tag = read_tag("<!doctype html PUBLIC \"-//W3C//DTD XHTML 1.0 Strict//EN\">").unwrap();
    assert!(tag.is_doctype());
    assert!(tag.is_void);
    assert_eq!(tag.attributes.len(), 3);
    assert_eq!(tag.get_attribute("html"), Some(""));
    assert_eq!(tag.get_attribute("PUBLIC"), Some(""));
    assert_eq!(tag.get_attribute("-//W3C//DTD XHTML 1.0 Strict//EN"), Some(""));
}

#[test]
fn test_duplicate_attribute_keeps_first() {
    let input = chars("<p id=\"a\" id=\"b\">");
    let mut scanner = Scanner::new(&input).with_quiet_mode();

    let tag = scanner.read_tag().unwrap();
    assert_eq!(tag.id(), Some("a"));
    assert_eq!(scanner.issues().len(), 1);
    assert_eq!(scanner.issues()[0].offset, 10);
}

#[test]
fn test_processing_instruction_kept_as_comment() {
    let input = chars("<?xml version=\"1.0\"?>");
    let mut scanner = Scanner::new(&input).with_quiet_mode();

    let tag = scanner.read_tag().unwrap();
    assert!(tag.is_comment);
    assert!(tag.is_void);
    assert_eq!(tag.inner_text, "xml version=\"1.0\"");
    assert!(scanner.is_at_end());
    assert_eq!(scanner.issues().len(), 1);
}

#[test]
fn test_empty_comment() {
    assert_eq!(read_tag("<!---->").unwrap(), Element::comment(""));
}

#[test]
fn test_unterminated_tag() {
    assert_eq!(
        read_tag("<div"),
        Err(ParseError::UnterminatedTag { offset: 0 })
    );
    assert_eq!(
        read_tag("</div"),
        Err(ParseError::UnterminatedTag { offset: 0 })
    );
    assert_eq!(
        read_tag("<!DOCTYPE html"),
        Err(ParseError::UnterminatedTag { offset: 0 })
    );
}

#[test]
fn test_unterminated_attribute_value() {
    assert_eq!(
        read_tag("<div class=\"open>"),
        Err(ParseError::UnterminatedAttributeValue { offset: 11 })
    );
}

#[test]
fn test_unterminated_comment() {
    assert_eq!(
        read_tag("<!-- never closed"),
        Err(ParseError::UnterminatedComment { offset: 0 })
    );
}

// =============================================================================
// Raw-text reader
// =============================================================================

#[test]
fn test_read_until_script_tag_close() {
    let cases = [
        ("var a = \"abc\";</script>", "var a = \"abc\";"),
        ("alert('</script>');</script>", "alert('</script>');"),
        (
            "//</script>\n\t\tvar foo = \"bar\";\n\t\t</script>",
            "//</script>\n\t\tvar foo = \"bar\";\n\t\t",
        ),
        (
            "var foo = 'bar';\n\t\t/* this is a block \n\t\tcomment and is annoying */\n\t\tfoo = 'baz';\n\t\t</script>",
            "var foo = 'bar';\n\t\t/* this is a block \n\t\tcomment and is annoying */\n\t\tfoo = 'baz';\n\t\t",
        ),
    ];

    for (input, expected) in cases {
        let body = read_script(input, "text/javascript").unwrap();
        assert_eq!(body, expected);
    }
}

#[test]
fn test_script_close_inside_block_comment() {
    let body = read_script("/* </script> */ x();</script>", "").unwrap();
    assert_eq!(body, "/* </script> */ x();");
}

#[test]
fn test_script_escaped_quote() {
    let body = read_script(r#"var s = "say \"</script>\"";</script>"#, "").unwrap();
    assert_eq!(body, r#"var s = "say \"</script>\"";"#);
}

#[test]
fn test_script_template_literal() {
    let body = read_script("let t = `it's </script>`;</script>", "module").unwrap();
    assert_eq!(body, "let t = `it's </script>`;");
}

#[test]
fn test_script_apostrophe_in_line_comment() {
    let body = read_script("// don't stop\nrun();</script>", "").unwrap();
    assert_eq!(body, "// don't stop\nrun();");
}

#[test]
fn test_regex_literal_is_read_as_code() {
    let body = read_script("var r = /a\\/b/;</script>", "").unwrap();
    assert_eq!(body, "var r = /a\\/b/;");

    // No regex state: the `//` in `/a\//` opens a line comment.
    assert_eq!(
        read_script("var r=/a\\//;</script>", ""),
        Err(ParseError::UnterminatedRawText {
            name: "script".to_string(),
            offset: 0,
        })
    );
}

#[test]
fn test_raw_text_consumes_closing_tag() {
    let input = chars("a();</SCRIPT ><p>");
    let mut scanner = Scanner::new(&input);

    let body = scanner
        .read_raw_text(RawTextElement::Script, "text/javascript")
        .unwrap();
    assert_eq!(as_string(body), "a();");
    assert_eq!(scanner.position(), 14);
    assert_eq!(scanner.current(), Some('<'));
}

#[test]
fn test_style_scanned_literally() {
    let input = chars("a { content: '</style>' }</style>");
    let mut scanner = Scanner::new(&input);

    let body = scanner.read_raw_text(RawTextElement::Style, "").unwrap();
    assert_eq!(as_string(body), "a { content: '");
}

#[test]
fn test_non_javascript_script_scanned_literally() {
    let input = chars("<b>'</script>");
    let mut scanner = Scanner::new(&input).with_quiet_mode();

    let body = scanner
        .read_raw_text(RawTextElement::Script, "text/template")
        .unwrap();
    assert_eq!(as_string(body), "<b>'");
    assert_eq!(scanner.issues().len(), 1);
}

#[test]
fn test_unterminated_raw_text() {
    assert_eq!(
        read_script("var a = 1;", "text/javascript"),
        Err(ParseError::UnterminatedRawText {
            name: "script".to_string(),
            offset: 0,
        })
    );
    assert!(matches!(
        read_script("'</script>", "text/javascript"),
        Err(ParseError::UnterminatedRawText { .. })
    ));
}

#[test]
fn test_script_content_types() {
    for content_type in ["", "text/javascript", "TEXT/JavaScript; charset=utf-8", "module"] {
        assert!(is_script_content_type(content_type), "{content_type}");
    }
    for content_type in ["text/template", "application/ld+json", "text/css"] {
        assert!(!is_script_content_type(content_type), "{content_type}");
    }
}

#[test]
fn test_raw_text_element_names() {
    assert_eq!(
        RawTextElement::from_tag_name("script"),
        Some(RawTextElement::Script)
    );
    assert_eq!(
        RawTextElement::from_tag_name("STYLE"),
        Some(RawTextElement::Style)
    );
    assert_eq!(RawTextElement::from_tag_name("div"), None);
    assert_eq!(RawTextElement::Script.to_string(), "script");
}
