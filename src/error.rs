use std::fmt::{Display, Formatter};
use std::io;

use xmlparser::TextPos;

/// Failures reported while parsing a document or navigating the tree.
#[derive(Debug)]
pub enum XmlError {
    /// The input is not well-formed XML. `pos` is set when the tokenizer
    /// reported one; the tree builder's own structural checks only know
    /// the tag names involved.
    MalformedXml { message: String, pos: Option<TextPos> },
    /// The input produced no elements at all.
    NoRootElement,
    /// Reading from the supplied stream failed.
    Io(io::Error),
    /// A child index past the end of a node's children sequence.
    IndexOutOfRange { index: usize, len: usize },
}

impl XmlError {
    pub(crate) fn malformed(message: impl Into<String>) -> XmlError {
        XmlError::MalformedXml { message: message.into(), pos: None }
    }
}

impl Display for XmlError {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        match self {
            XmlError::MalformedXml { message, .. } => write!(f, "malformed XML: {}", message),
            XmlError::NoRootElement => write!(f, "document has no root element"),
            XmlError::Io(err) => write!(f, "read failed: {}", err),
            XmlError::IndexOutOfRange { index, len } => {
                write!(f, "child index {} out of range for {} children", index, len)
            }
        }
    }
}

impl std::error::Error for XmlError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            XmlError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<xmlparser::Error> for XmlError {
    fn from(err: xmlparser::Error) -> XmlError {
        XmlError::MalformedXml { message: err.to_string(), pos: Some(err.pos()) }
    }
}

impl From<io::Error> for XmlError {
    fn from(err: io::Error) -> XmlError {
        XmlError::Io(err)
    }
}
