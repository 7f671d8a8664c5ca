//! XML printer that writes element trees as URDF/SRDF documents.

use std::borrow::Cow;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use quick_xml::escape::escape;

use crate::error::Result;
use crate::node::{Element, Node};

/// Options for XML printing.
#[derive(Debug, Clone)]
pub struct XmlPrinterOptions {
    /// Whether to put each element on its own indented line.
    pub pretty_print: bool,
    /// Indentation unit used when pretty printing.
    pub indent: String,
    /// Whether to write the `<?xml ...?>` declaration before the root.
    pub declaration: bool,
}

impl Default for XmlPrinterOptions {
    fn default() -> Self {
        XmlPrinterOptions {
            pretty_print: false,
            indent: "  ".to_string(),
            declaration: true,
        }
    }
}

impl XmlPrinterOptions {
    /// Pretty-printing options with a declaration and two-space indentation.
    pub fn pretty() -> Self {
        XmlPrinterOptions {
            pretty_print: true,
            ..Default::default()
        }
    }
}

/// XML printer that outputs element trees.
pub struct XmlPrinter<W: Write> {
    writer: W,
    options: XmlPrinterOptions,
}

impl<W: Write> XmlPrinter<W> {
    /// Creates a new XML printer with compact output.
    pub fn new(writer: W) -> Self {
        Self::with_options(writer, XmlPrinterOptions::default())
    }

    /// Creates a new XML printer with the given options.
    pub fn with_options(writer: W, options: XmlPrinterOptions) -> Self {
        XmlPrinter { writer, options }
    }

    /// Prints `root` as a complete document.
    pub fn print(&mut self, root: &Element) -> Result<()> {
        if self.options.declaration {
            write!(self.writer, "<?xml version=\"1.0\" encoding=\"UTF-8\"?>")?;
            self.newline()?;
        }
        self.print_element(root, 0)?;
        if !self.options.pretty_print {
            writeln!(self.writer)?;
        }
        self.writer.flush()?;
        Ok(())
    }

    /// Prints `root` with no declaration and no trailing newline.
    pub fn print_fragment(&mut self, root: &Element) -> Result<()> {
        self.print_element(root, 0)?;
        self.writer.flush()?;
        Ok(())
    }

    /// Consumes the printer and returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
    }

    fn print_element(&mut self, element: &Element, depth: usize) -> Result<()> {
        self.write_indent(depth)?;
        write!(self.writer, "<{}", element.name())?;
        for (key, value) in element.attributes() {
            write!(self.writer, " {}=\"{}\"", key, escape_attribute(value))?;
        }

        if element.is_empty() {
            write!(self.writer, " />")?;
            return self.newline();
        }
        write!(self.writer, ">")?;

        // Text-only elements stay on one line: <type>...</type>
        let inline = element.children().iter().all(Node::is_text);
        if inline {
            for child in element.children() {
                self.print_node(child, 0)?;
            }
        } else {
            self.newline()?;
            for child in element.children() {
                self.print_child(child, depth + 1)?;
            }
            self.write_indent(depth)?;
        }

        write!(self.writer, "</{}>", element.name())?;
        self.newline()
    }

    fn print_child(&mut self, node: &Node, depth: usize) -> Result<()> {
        match node {
            Node::Element(e) => self.print_element(e, depth),
            _ => {
                self.write_indent(depth)?;
                self.print_node(node, depth)?;
                self.newline()
            }
        }
    }

    fn print_node(&mut self, node: &Node, depth: usize) -> Result<()> {
        match node {
            Node::Element(e) => self.print_element(e, depth),
            Node::Text(text) => {
                write!(self.writer, "{}", escape(text.as_str()))?;
                Ok(())
            }
            Node::Comment(comment) => {
                write!(self.writer, "<!-- {} -->", escape_comment(comment))?;
                Ok(())
            }
        }
    }

    fn write_indent(&mut self, depth: usize) -> Result<()> {
        if self.options.pretty_print {
            for _ in 0..depth {
                self.writer.write_all(self.options.indent.as_bytes())?;
            }
        }
        Ok(())
    }

    fn newline(&mut self) -> Result<()> {
        if self.options.pretty_print {
            writeln!(self.writer)?;
        }
        Ok(())
    }
}

/// Escapes an attribute value.
///
/// Tabs and line breaks become character references; readers would
/// otherwise normalize them to spaces.
fn escape_attribute(value: &str) -> Cow<'_, str> {
    let escaped = escape(value);
    if !escaped.contains(['\n', '\r', '\t']) {
        return escaped;
    }
    let mut result = String::with_capacity(escaped.len() + 8);
    for c in escaped.chars() {
        match c {
            '\n' => result.push_str("&#10;"),
            '\r' => result.push_str("&#13;"),
            '\t' => result.push_str("&#9;"),
            _ => result.push(c),
        }
    }
    Cow::Owned(result)
}

/// Breaks up `--` runs, which may not appear inside a comment.
fn escape_comment(text: &str) -> Cow<'_, str> {
    if !text.contains("--") {
        return Cow::Borrowed(text);
    }
    let mut result = text.to_string();
    while result.contains("--") {
        result = result.replace("--", "- -");
    }
    Cow::Owned(result)
}

/// Prints an element tree to a compact string.
pub fn print_to_string(root: &Element) -> Result<String> {
    print_with_options(root, XmlPrinterOptions::default())
}

/// Prints an element tree to a string with pretty printing.
pub fn print_to_string_pretty(root: &Element) -> Result<String> {
    print_with_options(root, XmlPrinterOptions::pretty())
}

fn print_with_options(root: &Element, options: XmlPrinterOptions) -> Result<String> {
    let mut output = Vec::new();
    XmlPrinter::with_options(&mut output, options).print(root)?;
    Ok(String::from_utf8_lossy(&output).into_owned())
}

/// Writes an element tree as a pretty-printed document at `path`.
pub fn write_file<P: AsRef<Path>>(root: &Element, path: P) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path)?;
    let mut printer = XmlPrinter::with_options(BufWriter::new(file), XmlPrinterOptions::pretty());
    printer.print(root)?;
    tracing::debug!(path = %path.display(), root = root.name(), "wrote document");
    Ok(())
}
