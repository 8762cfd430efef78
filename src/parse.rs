use std::collections::HashMap;
use std::io::Read;

use crate::error::XmlError;
use crate::event::XmlEvent;
use crate::node::{Child, Node};
use crate::tokenize::Events;

/// Parse a complete in-memory XML document and return its root node.
pub fn parse_text(text: &str) -> Result<Node, XmlError> {
    let mut builder = TreeBuilder::default();
    for event in Events::from(text) {
        builder.handle(event?)?;
    }
    builder.finish()
}

/// Like [`parse_text`], reading the document from `input` first. The
/// stream is read to completion in one go; the caller owns and closes the
/// handle.
pub fn parse_stream<R: Read>(mut input: R) -> Result<Node, XmlError> {
    let mut text = String::new();
    input.read_to_string(&mut text)?;
    parse_text(&text)
}

/// The stack machine that turns an event stream into a tree.
///
/// Feed events with [`handle`](TreeBuilder::handle) in document order and
/// collect the result with [`finish`](TreeBuilder::finish). The bottom
/// frame is the document root: it stays on the stack when its end tag
/// arrives so it can be returned, while every other element is popped and
/// attached to its parent on close.
pub struct TreeBuilder {
    stack: Vec<Node>,
    root_closed: bool,
}

impl Default for TreeBuilder {
    fn default() -> Self {
        TreeBuilder { stack: vec![], root_closed: false }
    }
}

impl TreeBuilder {
    pub fn handle(&mut self, event: XmlEvent) -> Result<(), XmlError> {
        match event {
            XmlEvent::StartElement { name, attributes } => {
                self.start_element(name, attributes);
                Ok(())
            }
            XmlEvent::EndElement { name } => self.end_element(&name),
            XmlEvent::CharacterData { text } => {
                self.character_data(text);
                Ok(())
            }
        }
    }

    /// Nodes are created here and nowhere else.
    fn start_element(&mut self, name: String, attributes: HashMap<String, String>) {
        self.stack.push(Node::new(name, attributes, vec![]));
    }

    fn end_element(&mut self, name: &str) -> Result<(), XmlError> {
        let open = match self.stack.last() {
            Some(node) => node.name(),
            None => {
                return Err(XmlError::malformed(format!("unexpected close tag </{}>", name)))
            }
        };
        if open != name {
            return Err(XmlError::malformed(format!("expected </{}>, found </{}>", open, name)));
        }
        if self.stack.len() > 1 {
            if let Some(closed) = self.stack.pop() {
                if let Some(parent) = self.stack.last_mut() {
                    parent.append(Child::Element(closed));
                }
            }
        } else {
            self.root_closed = true;
        }
        Ok(())
    }

    /// Whitespace-only data between tags is formatting, not content; a
    /// fragment that survives the trim check is appended untrimmed.
    fn character_data(&mut self, text: String) {
        if text.trim().is_empty() {
            return;
        }
        if let Some(top) = self.stack.last_mut() {
            top.append(Child::Text(text));
        }
    }

    /// Hand the bottom frame to the caller once the event stream is
    /// exhausted.
    pub fn finish(mut self) -> Result<Node, XmlError> {
        let unclosed = self.stack.len() > 1 || !self.root_closed;
        if unclosed {
            // innermost element still open when the stream ended
            if let Some(node) = self.stack.pop() {
                return Err(XmlError::malformed(format!("unclosed element <{}>", node.name())));
            }
        }
        self.stack.pop().ok_or(XmlError::NoRootElement)
    }
}
