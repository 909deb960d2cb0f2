//! Minimal XML element tree for the person payloads.
//!
//! Parsing is done with `quick-xml` events into an owned tree. Lookup is
//! by tag name only; there is no schema validation. Attributes,
//! comments, processing instructions and the XML declaration are
//! accepted and discarded.

use crate::error::{NegotiationError, NegotiationResult};
use quick_xml::Reader;
use quick_xml::escape::escape;
use quick_xml::events::Event;

/// A node in the element tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum XmlNode {
    Element(XmlElement),
    Text(String),
}

/// An element with its children in document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XmlElement {
    pub name: String,
    pub children: Vec<XmlNode>,
}

impl XmlElement {
    fn new(name: String) -> Self {
        Self {
            name,
            children: Vec::new(),
        }
    }

    /// Parse a document and return its root element.
    ///
    /// The document must be well-formed: exactly one root, balanced tags,
    /// and no non-whitespace text outside the root.
    pub fn parse(text: &str) -> NegotiationResult<XmlElement> {
        let mut reader = Reader::from_str(text);
        let mut stack: Vec<XmlElement> = Vec::new();
        let mut root: Option<XmlElement> = None;

        loop {
            let event = reader.read_event().map_err(|e| {
                NegotiationError::malformed(format!(
                    "invalid XML at byte {}: {e}",
                    reader.buffer_position()
                ))
            })?;

            match event {
                Event::Start(start) => {
                    if root.is_some() && stack.is_empty() {
                        return Err(NegotiationError::malformed("XML has more than one root element"));
                    }
                    stack.push(XmlElement::new(tag_name(start.name().as_ref())?));
                }
                Event::Empty(start) => {
                    let element = XmlElement::new(tag_name(start.name().as_ref())?);
                    attach(&mut stack, &mut root, element)?;
                }
                Event::End(_) => {
                    let element = stack
                        .pop()
                        .ok_or_else(|| NegotiationError::malformed("unexpected closing tag"))?;
                    attach(&mut stack, &mut root, element)?;
                }
                Event::Text(text) => {
                    let text = text
                        .unescape()
                        .map_err(|e| NegotiationError::malformed(format!("invalid XML text: {e}")))?;
                    push_text(&mut stack, &text)?;
                }
                Event::CData(data) => {
                    let text = std::str::from_utf8(&data)
                        .map_err(|e| NegotiationError::malformed(format!("invalid CDATA: {e}")))?;
                    push_text(&mut stack, text)?;
                }
                Event::Eof => break,
                _ => {}
            }
        }

        if let Some(open) = stack.last() {
            return Err(NegotiationError::malformed(format!(
                "unclosed XML element <{}>",
                open.name
            )));
        }
        root.ok_or_else(|| NegotiationError::malformed("XML document has no root element"))
    }

    /// Concatenated text of this element and all its descendants.
    pub fn text(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        for child in &self.children {
            match child {
                XmlNode::Text(text) => out.push_str(text),
                XmlNode::Element(element) => element.collect_text(out),
            }
        }
    }

    /// First descendant named `tag`, depth-first in document order.
    pub fn find(&self, tag: &str) -> Option<&XmlElement> {
        self.elements().find_map(|child| {
            if child.name == tag {
                Some(child)
            } else {
                child.find(tag)
            }
        })
    }

    /// Text of the first descendant named `tag`, or `""` when absent.
    pub fn find_text(&self, tag: &str) -> String {
        self.find(tag).map(XmlElement::text).unwrap_or_default()
    }

    /// Direct child elements.
    pub fn elements(&self) -> impl Iterator<Item = &XmlElement> {
        self.children.iter().filter_map(|child| match child {
            XmlNode::Element(element) => Some(element),
            XmlNode::Text(_) => None,
        })
    }
}

fn tag_name(raw: &[u8]) -> NegotiationResult<String> {
    std::str::from_utf8(raw)
        .map(str::to_string)
        .map_err(|e| NegotiationError::malformed(format!("invalid XML tag name: {e}")))
}

fn attach(
    stack: &mut [XmlElement],
    root: &mut Option<XmlElement>,
    element: XmlElement,
) -> NegotiationResult<()> {
    match stack.last_mut() {
        Some(parent) => parent.children.push(XmlNode::Element(element)),
        None if root.is_none() => *root = Some(element),
        None => return Err(NegotiationError::malformed("XML has more than one root element")),
    }
    Ok(())
}

fn push_text(stack: &mut [XmlElement], text: &str) -> NegotiationResult<()> {
    match stack.last_mut() {
        Some(parent) => {
            parent.children.push(XmlNode::Text(text.to_string()));
            Ok(())
        }
        None if text.trim().is_empty() => Ok(()),
        None => Err(NegotiationError::malformed("text outside the XML root element")),
    }
}

/// Append `<tag>text</tag>` with `text` escaped.
pub(crate) fn write_text_element(out: &mut String, tag: &str, text: &str) {
    out.push('<');
    out.push_str(tag);
    out.push('>');
    out.push_str(&escape(text));
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}
