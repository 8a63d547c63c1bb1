//! Indented markup rendering for the export tree.

use std::fmt::Write;

use tracing::warn;

/// A markup element: fixed-name tag with ordered attributes and either text or child elements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub name: &'static str,
    pub attributes: Vec<(&'static str, String)>,
    pub content: Content,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Content {
    Text(String),
    Children(Vec<Element>),
}

impl Element {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            attributes: Vec::new(),
            content: Content::Children(Vec::new()),
        }
    }

    /// Leaf element holding `text`.
    pub fn text(name: &'static str, text: impl Into<String>) -> Self {
        Self {
            name,
            attributes: Vec::new(),
            content: Content::Text(text.into()),
        }
    }

    pub fn attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.attributes.push((name, value.into()));
        self
    }

    /// Appends a child. Replaces text content if there was any.
    pub fn child(mut self, child: Element) -> Self {
        match &mut self.content {
            Content::Children(children) => children.push(child),
            Content::Text(_) => self.content = Content::Children(vec![child]),
        }
        self
    }

    pub fn children(self, children: impl IntoIterator<Item = Element>) -> Self {
        children.into_iter().fold(self, Element::child)
    }

    pub fn is_empty(&self) -> bool {
        match &self.content {
            Content::Text(text) => text.is_empty(),
            Content::Children(children) => children.is_empty(),
        }
    }
}

const DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;
const INDENT: &str = "  ";

/// Renders `root` as a complete document: declaration line, two-space nesting,
/// leaf text kept on the element's line, empty elements self-closed.
pub fn render_document(root: &Element) -> String {
    let mut out = String::with_capacity(4096);
    out.push_str(DECLARATION);
    out.push('\n');
    write_element(&mut out, root, 0);
    out
}

fn write_element(out: &mut String, element: &Element, depth: usize) {
    for _ in 0..depth {
        out.push_str(INDENT);
    }

    out.push('<');
    out.push_str(element.name);
    for (name, value) in &element.attributes {
        // Writing into a String cannot fail.
        let _ = write!(out, " {}=\"{}\"", name, escape_attribute(value));
    }

    if element.is_empty() {
        out.push_str("/>\n");
        return;
    }
    out.push('>');

    match &element.content {
        Content::Text(text) => out.push_str(&escape(text)),
        Content::Children(children) => {
            out.push('\n');
            for child in children {
                write_element(out, child, depth + 1);
            }
            for _ in 0..depth {
                out.push_str(INDENT);
            }
        }
    }

    out.push_str("</");
    out.push_str(element.name);
    out.push_str(">\n");
}

/// Escapes text content: the five markup special characters, plus `\r` as a
/// character reference so parsers do not fold it into a line feed.
pub fn escape(value: &str) -> String {
    escape_with(value, false)
}

/// Escapes an attribute value. Tab and line feed are also written as character
/// references, since attribute normalization turns them into spaces.
pub fn escape_attribute(value: &str) -> String {
    escape_with(value, true)
}

fn escape_with(value: &str, in_attribute: bool) -> String {
    let mut escaped = String::with_capacity(value.len());
    let mut dropped = 0usize;

    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            '\r' => escaped.push_str("&#13;"),
            '\t' if in_attribute => escaped.push_str("&#9;"),
            '\n' if in_attribute => escaped.push_str("&#10;"),
            '\t' | '\n' => escaped.push(c),
            // Not representable in XML 1.0.
            c if (c as u32) < 0x20 => dropped += 1,
            c => escaped.push(c),
        }
    }

    if dropped > 0 {
        warn!(dropped, "control characters removed from exported text");
    }
    escaped
}
