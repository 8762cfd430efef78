extern crate core;

use std::collections::HashMap;

use pretty_assertions::assert_eq;

use saxtree::node::{Child, Node};
use saxtree::parse::parse_text;

fn elem(name: &str, children: Vec<Child>) -> Child {
    Child::Element(Node::new(name, HashMap::new(), children))
}

fn text(fragment: &str) -> Child {
    Child::Text(fragment.to_string())
}

#[test]
pub fn test_single() {
    let content = "this is some text";
    let xml = format!("<root>{}</root>", content);
    let expected = Node::new("root", HashMap::new(), vec![text(content)]);
    assert_eq!(expected, parse_text(&xml).unwrap());
}

#[test]
pub fn test_mixed_content() {
    let xml = "<doc>a<baz>f<b>o</b>ob<b>a</b>r</baz>a</doc>";
    let expected = Node::new(
        "doc",
        HashMap::new(),
        vec![
            text("a"),
            elem(
                "baz",
                vec![
                    text("f"),
                    elem("b", vec![text("o")]),
                    text("ob"),
                    elem("b", vec![text("a")]),
                    text("r"),
                ],
            ),
            text("a"),
        ],
    );
    assert_eq!(expected, parse_text(xml).unwrap());
}

#[test]
pub fn test_whitespace_between_elements_dropped() {
    let root = parse_text("<a>  <b/>  </a>").unwrap();
    let expected = Node::new("a", HashMap::new(), vec![elem("b", vec![])]);
    assert_eq!(expected, root);
}

#[test]
pub fn test_interior_whitespace_preserved() {
    // formatting whitespace around <a> goes away, the indented fragment
    // inside it stays byte for byte
    let xml = "<root>\r\n  <a>\n    indented text\n  </a></root>";
    let expected = Node::new(
        "root",
        HashMap::new(),
        vec![elem("a", vec![text("\n    indented text\n  ")])],
    );
    assert_eq!(expected, parse_text(xml).unwrap());
}

#[test]
pub fn test_nested() {
    let xml = "<root>root level<a>first level<b>second level</b>more first level</a>another root level</root>";
    let expected = Node::new(
        "root",
        HashMap::new(),
        vec![
            text("root level"),
            elem(
                "a",
                vec![
                    text("first level"),
                    elem("b", vec![text("second level")]),
                    text("more first level"),
                ],
            ),
            text("another root level"),
        ],
    );
    assert_eq!(expected, parse_text(xml).unwrap());
}

#[test]
pub fn test_unicode_text() {
    let content = "äh 漢字 😀";
    let xml = format!("<root>{}</root>", content);
    let expected = Node::new("root", HashMap::new(), vec![text(content)]);
    assert_eq!(expected, parse_text(&xml).unwrap());
}

#[test]
pub fn test_references_passed_through() {
    // the tokenizer leaves references unexpanded
    let expected = Node::new("root", HashMap::new(), vec![text("a&amp;b")]);
    assert_eq!(expected, parse_text("<root>a&amp;b</root>").unwrap());
}

#[test]
pub fn test_cdata_is_character_data() {
    let xml = "<a>one<![CDATA[  two  ]]>three</a>";
    let expected = Node::new(
        "a",
        HashMap::new(),
        vec![text("one"), text("  two  "), text("three")],
    );
    assert_eq!(expected, parse_text(xml).unwrap());
}
