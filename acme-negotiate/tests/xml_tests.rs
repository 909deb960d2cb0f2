use acme_negotiate::{NegotiationError, XmlElement, XmlNode};

fn is_malformed(result: Result<XmlElement, NegotiationError>) -> bool {
    matches!(result, Err(NegotiationError::MalformedPayload(_)))
}

// ── Parsing ──────────────────────────────────────────────────────

#[test]
fn parses_root_and_children() {
    let root = XmlElement::parse("<person><name>Jane</name><age>30</age></person>").unwrap();
    assert_eq!(root.name, "person");
    let names: Vec<&str> = root.elements().map(|e| e.name.as_str()).collect();
    assert_eq!(names, vec!["name", "age"]);
}

#[test]
fn accepts_declaration_comments_and_whitespace() {
    let doc = r#"<?xml version="1.0" encoding="UTF-8"?>
<!-- a person -->
<person>
  <name>Jane</name>
</person>
"#;
    let root = XmlElement::parse(doc).unwrap();
    assert_eq!(root.find_text("name"), "Jane");
}

#[test]
fn unescapes_entities_and_reads_cdata() {
    let root =
        XmlElement::parse("<p><a>Tom &amp; Jerry</a><b><![CDATA[<raw>]]></b></p>").unwrap();
    assert_eq!(root.find_text("a"), "Tom & Jerry");
    assert_eq!(root.find_text("b"), "<raw>");
}

#[test]
fn empty_element_root() {
    let root = XmlElement::parse("<persons/>").unwrap();
    assert_eq!(root.name, "persons");
    assert!(root.children.is_empty());
}

#[test]
fn mismatched_tags_are_malformed() {
    assert!(is_malformed(XmlElement::parse("<person><name>x</person>")));
}

#[test]
fn unclosed_root_is_malformed() {
    assert!(is_malformed(XmlElement::parse("<person><name>x</name>")));
}

#[test]
fn empty_document_is_malformed() {
    assert!(is_malformed(XmlElement::parse("")));
    assert!(is_malformed(XmlElement::parse("   ")));
}

#[test]
fn second_root_is_malformed() {
    assert!(is_malformed(XmlElement::parse("<a/><b/>")));
    assert!(is_malformed(XmlElement::parse("<a></a><b></b>")));
}

#[test]
fn text_outside_root_is_malformed() {
    assert!(is_malformed(XmlElement::parse("hello")));
    assert!(is_malformed(XmlElement::parse("<a></a>trailing")));
}

// ── Lookup ───────────────────────────────────────────────────────

#[test]
fn find_is_depth_first_first_match() {
    let root = XmlElement::parse(
        "<root><outer><name>first</name></outer><name>second</name></root>",
    )
    .unwrap();
    assert_eq!(root.find_text("name"), "first");
}

#[test]
fn find_text_of_missing_tag_is_empty() {
    let root = XmlElement::parse("<person><name>Jane</name></person>").unwrap();
    assert!(root.find("age").is_none());
    assert_eq!(root.find_text("age"), "");
}

#[test]
fn text_concatenates_descendants() {
    let root = XmlElement::parse("<a>x<b>y</b>z</a>").unwrap();
    assert_eq!(root.text(), "xyz");
    assert!(matches!(&root.children[0], XmlNode::Text(t) if t == "x"));
}
