use std::collections::HashMap;

use xmlparser::{ElementEnd, Token, Tokenizer};

use crate::error::XmlError;
use crate::event::XmlEvent;

/// Streams [`XmlEvent`]s out of an XML document.
///
/// Lexing is done by `xmlparser`; this adapter folds its tokens into the
/// three event kinds the tree builder consumes. Attribute tokens are
/// gathered into their start tag, and comments, processing instructions,
/// the XML declaration and DTD internals emit nothing.
///
/// The tokenizer rejects invalid markup, truncated input and content after
/// the root element, but it neither pairs up tag names nor insists that a
/// document contain an element; both checks belong to the consumer.
pub struct Events<'a> {
    tokenizer: Tokenizer<'a>,
    /// Start tag whose `>` or `/>` has not been reached yet.
    pending: Option<(String, HashMap<String, String>)>,
    /// End event synthesized for an empty-element tag.
    queued: Option<XmlEvent>,
    done: bool,
}

impl Default for Events<'_> {
    fn default() -> Self {
        Events::from("")
    }
}

impl<'a> From<&'a str> for Events<'a> {
    fn from(text: &'a str) -> Self {
        Events {
            tokenizer: Tokenizer::from(text),
            pending: None,
            queued: None,
            done: false,
        }
    }
}

/// QName ::= (Prefix ':')? LocalPart, kept verbatim since namespaces are
/// not resolved.
fn qualified(prefix: &str, local: &str) -> String {
    if prefix.is_empty() {
        local.to_string()
    } else {
        format!("{}:{}", prefix, local)
    }
}

impl<'a> Iterator for Events<'a> {
    type Item = Result<XmlEvent, XmlError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        if let Some(event) = self.queued.take() {
            return Some(Ok(event));
        }
        while let Some(token) = self.tokenizer.next() {
            let token = match token {
                Ok(token) => token,
                Err(err) => {
                    self.done = true;
                    return Some(Err(err.into()));
                }
            };
            match token {
                Token::ElementStart { prefix, local, .. } => {
                    self.pending =
                        Some((qualified(prefix.as_str(), local.as_str()), HashMap::new()));
                }
                Token::Attribute { prefix, local, value, .. } => {
                    if let Some((_, attributes)) = self.pending.as_mut() {
                        attributes.insert(
                            qualified(prefix.as_str(), local.as_str()),
                            value.as_str().to_string(),
                        );
                    }
                }
                Token::ElementEnd { end, .. } => match end {
                    ElementEnd::Open => {
                        if let Some((name, attributes)) = self.pending.take() {
                            return Some(Ok(XmlEvent::StartElement { name, attributes }));
                        }
                    }
                    ElementEnd::Empty => {
                        if let Some((name, attributes)) = self.pending.take() {
                            self.queued = Some(XmlEvent::EndElement { name: name.clone() });
                            return Some(Ok(XmlEvent::StartElement { name, attributes }));
                        }
                    }
                    ElementEnd::Close(prefix, local) => {
                        return Some(Ok(XmlEvent::EndElement {
                            name: qualified(prefix.as_str(), local.as_str()),
                        }));
                    }
                },
                Token::Text { text } => {
                    return Some(Ok(XmlEvent::CharacterData { text: text.as_str().to_string() }));
                }
                Token::Cdata { text, .. } => {
                    return Some(Ok(XmlEvent::CharacterData { text: text.as_str().to_string() }));
                }
                _ => {}
            }
        }
        None
    }
}
