//! Parse a complete XML document into an owned element tree.
//!
//! Tokenization is delegated to the `xmlparser` crate; [`tokenize::Events`]
//! folds its tokens into start/end/character-data events, and
//! [`parse::TreeBuilder`] assembles those into a [`node::Node`] tree.

pub mod tokenize;
pub mod parse;
pub mod node;
pub mod event;
pub mod error;

pub use crate::error::XmlError;
pub use crate::event::XmlEvent;
pub use crate::node::{Child, Node};
pub use crate::parse::{parse_stream, parse_text, TreeBuilder};
pub use crate::tokenize::Events;

pub use xmlparser::TextPos;
