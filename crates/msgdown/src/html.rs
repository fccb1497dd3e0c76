//! HTML parsing support.
//!
//! Lowers `scraper` (html5ever) fragment parses into the [`Node`] tree the
//! sanitizer and serializer work on.

use scraper::{ElementRef, Html, Node as ScraperNode};

use msgdown_core::Node;

/// Parse an HTML message fragment into a [`Node::Fragment`].
///
/// The parser's implicit `<html>` wrapper is dropped; its children become
/// the fragment's children. Comments are kept as [`Node::Comment`] so the
/// tree mirrors the source, the serializer renders them as nothing.
///
/// # Example
///
/// ```rust
/// use msgdown::{parse_html, MessageConverter};
///
/// let node = parse_html("<p>Hello <em>World</em></p>");
/// assert_eq!(node.children().len(), 1);
///
/// let markdown = MessageConverter::new().convert_node(&node);
/// assert_eq!(markdown, "Hello *World*\n\n");
/// ```
pub fn parse_html(html: &str) -> Node {
    let document = Html::parse_fragment(html);
    Node::Fragment(convert_children(document.root_element()))
}

fn convert_children(element: ElementRef) -> Vec<Node> {
    let mut children = Vec::new();

    for child in element.children() {
        match child.value() {
            ScraperNode::Text(text) => children.push(Node::text(&text.text)),
            ScraperNode::Comment(comment) => children.push(Node::comment(&comment.comment)),
            ScraperNode::Element(_) => {
                if let Some(child_element) = ElementRef::wrap(child) {
                    children.push(scraper_to_node(child_element));
                }
            }
            _ => {}
        }
    }

    children
}

/// Convert a scraper ElementRef to our Node structure
fn scraper_to_node(element: ElementRef) -> Node {
    let tag = element.value().name();
    let attrs: Vec<(&str, &str)> = element.value().attrs().collect();

    let mut node = if attrs.is_empty() {
        Node::element(tag)
    } else {
        Node::element_with_attrs(tag, attrs)
    };

    for child in convert_children(element) {
        node.add_child(child);
    }

    node
}
