//! XML parser that reads documents and fragments into element trees.
//!
//! Mostly used to read printer output back in tests; it also pulls
//! hand-written snippets (simulator plugins, vendor blocks) into generated
//! documents. No element factory depends on it.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use quick_xml::escape::{resolve_predefined_entity, unescape};
use quick_xml::events::{BytesRef, BytesStart, Event};
use quick_xml::Reader;

use crate::error::{Error, Result};
use crate::node::{Element, Node};

/// XML parser that builds element trees.
#[derive(Debug, Clone, Default)]
pub struct XmlParser {
    keep_comments: bool,
}

impl XmlParser {
    /// Creates a parser that keeps comments.
    pub fn new() -> Self {
        XmlParser {
            keep_comments: true,
        }
    }

    /// Sets whether comments become [`Node::Comment`] children.
    pub fn keep_comments(mut self, keep: bool) -> Self {
        self.keep_comments = keep;
        self
    }

    /// Parses XML from a string and returns its root element.
    pub fn parse_str(&self, xml: &str) -> Result<Element> {
        let mut reader = Reader::from_str(xml);
        // Whitespace handling is done per text node below
        reader.config_mut().trim_text_start = false;
        reader.config_mut().trim_text_end = false;
        self.parse_reader(&mut reader)
    }

    /// Parses XML from a file and returns its root element.
    pub fn parse_file<P: AsRef<Path>>(&self, path: P) -> Result<Element> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let mut reader = Reader::from_reader(BufReader::new(file));
        reader.config_mut().trim_text_start = false;
        reader.config_mut().trim_text_end = false;
        let root = self.parse_reader(&mut reader)?;
        tracing::debug!(path = %path.display(), root = root.name(), "parsed document");
        Ok(root)
    }

    fn parse_reader<R: BufRead>(&self, reader: &mut Reader<R>) -> Result<Element> {
        // Open elements; the bottom entry becomes the root once closed.
        let mut stack: Vec<Element> = Vec::new();
        let mut root: Option<Element> = None;
        let mut text = String::new();
        let mut buf = Vec::new();

        loop {
            match reader.read_event_into(&mut buf) {
                Ok(Event::Start(ref e)) => {
                    flush_text(&mut text, &mut stack);
                    let element = self.parse_element(e, reader)?;
                    if root.is_some() && stack.is_empty() {
                        return Err(Error::Parse("multiple root elements".to_string()));
                    }
                    stack.push(element);
                }
                Ok(Event::Empty(ref e)) => {
                    flush_text(&mut text, &mut stack);
                    let element = self.parse_element(e, reader)?;
                    close_element(element, &mut stack, &mut root)?;
                }
                Ok(Event::End(_)) => {
                    flush_text(&mut text, &mut stack);
                    let element = stack
                        .pop()
                        .ok_or_else(|| Error::Parse("unexpected closing tag".to_string()))?;
                    close_element(element, &mut stack, &mut root)?;
                }
                Ok(Event::Text(ref e)) => {
                    let raw = std::str::from_utf8(e.as_ref())
                        .map_err(|e| Error::Parse(e.to_string()))?;
                    let unescaped = unescape(raw).map_err(|e| Error::Parse(e.to_string()))?;
                    text.push_str(&unescaped);
                }
                Ok(Event::CData(ref e)) => {
                    text.push_str(&String::from_utf8_lossy(e.as_ref()));
                }
                Ok(Event::GeneralRef(ref e)) => {
                    text.push_str(&resolve_reference(e)?);
                }
                Ok(Event::Comment(ref e)) => {
                    if self.keep_comments {
                        flush_text(&mut text, &mut stack);
                        let comment = String::from_utf8_lossy(e.as_ref()).trim().to_string();
                        if let Some(parent) = stack.last_mut() {
                            parent.append(Node::Comment(comment));
                        }
                    }
                }
                Ok(Event::Decl(_)) | Ok(Event::PI(_)) | Ok(Event::DocType(_)) => {}
                Ok(Event::Eof) => break,
                Err(e) => return Err(Error::Xml(e)),
            }
            buf.clear();
        }

        if let Some(open) = stack.last() {
            return Err(Error::Parse(format!("unclosed element <{}>", open.name())));
        }
        root.ok_or_else(|| Error::Parse("document has no root element".to_string()))
    }

    /// Parses an element's name and attributes, keeping attribute order.
    fn parse_element<R: BufRead>(&self, e: &BytesStart, reader: &Reader<R>) -> Result<Element> {
        let name = reader
            .decoder()
            .decode(e.name().as_ref())
            .map_err(|e| Error::Parse(e.to_string()))?
            .to_string();

        let mut element = Element::new(name);
        for attr_result in e.attributes() {
            let attr = attr_result.map_err(|e| Error::Parse(format!("Attribute error: {}", e)))?;
            let key = reader
                .decoder()
                .decode(attr.key.as_ref())
                .map_err(|e| Error::Parse(e.to_string()))?
                .to_string();
            let value = attr
                .unescape_value()
                .map_err(|e| Error::Parse(e.to_string()))?
                .to_string();
            element = element.with_attribute(key, value);
        }

        Ok(element)
    }
}

/// Moves accumulated text into the innermost open element.
///
/// Text is trimmed; whitespace-only runs (indentation) are dropped.
fn flush_text(text: &mut String, stack: &mut [Element]) {
    let trimmed = text.trim();
    if !trimmed.is_empty() {
        if let Some(parent) = stack.last_mut() {
            parent.append(Node::Text(trimmed.to_string()));
        }
    }
    text.clear();
}

fn close_element(
    element: Element,
    stack: &mut [Element],
    root: &mut Option<Element>,
) -> Result<()> {
    match stack.last_mut() {
        Some(parent) => parent.append(element),
        None if root.is_none() => *root = Some(element),
        None => return Err(Error::Parse("multiple root elements".to_string())),
    }
    Ok(())
}

/// Resolves `&name;` and `&#N;` references that quick-xml reports separately.
fn resolve_reference(e: &BytesRef) -> Result<String> {
    if let Some(ch) = e.resolve_char_ref().map_err(|e| Error::Parse(e.to_string()))? {
        return Ok(ch.to_string());
    }
    let name = e.decode().map_err(|e| Error::Parse(e.to_string()))?;
    resolve_predefined_entity(&name)
        .map(str::to_string)
        .ok_or_else(|| Error::Parse(format!("unknown entity &{};", name)))
}

/// Parses XML from a file using a comment-keeping parser.
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<Element> {
    XmlParser::new().parse_file(path)
}

/// Parses XML from a string using a comment-keeping parser.
pub fn parse_str(xml: &str) -> Result<Element> {
    XmlParser::new().parse_str(xml)
}
