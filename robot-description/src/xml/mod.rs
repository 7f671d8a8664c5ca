//! XML output and input for element trees.
//!
//! Element construction never touches this module; it is only needed to
//! turn a finished tree into a document, or to load a hand-written fragment
//! for composition.

mod parser;
mod printer;

pub use parser::{parse_file, parse_str, XmlParser};
pub use printer::{print_to_string, print_to_string_pretty, write_file, XmlPrinter, XmlPrinterOptions};
