//! Parsed element tree consumed by the sanitizer and the serializer.
//!
//! Any HTML parser can lower its output into this structure; the `msgdown`
//! crate does so for `scraper`. The tree never goes back to HTML.

use indexmap::IndexMap;

/// Element kinds the converter knows about.
///
/// Tag names map case-insensitively; anything unrecognised is kept as
/// [`ElementKind::Other`] and rendered by the passthrough fallback.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ElementKind {
    /// `<p>`
    Paragraph,
    /// `<strong>` or `<b>`
    Strong,
    /// `<em>` or `<i>`
    Emphasis,
    /// `<h1>` through `<h6>`
    Heading(u8),
    /// `<a>`
    Anchor,
    /// `<img>`
    Image,
    /// `<br>`
    LineBreak,
    /// `<hr>`
    ThematicBreak,
    /// `<code>`
    Code,
    /// `<pre>`
    Preformatted,
    /// `<ul>`
    UnorderedList,
    /// `<ol>`
    OrderedList,
    /// `<li>`
    ListItem,
    /// `<blockquote>`
    Blockquote,
    /// `<table>`
    Table,
    /// `<thead>`
    TableHead,
    /// `<tbody>`
    TableBody,
    /// `<tfoot>`
    TableFoot,
    /// `<tr>`
    TableRow,
    /// `<th>`
    HeaderCell,
    /// `<td>`
    DataCell,
    /// `<div>`
    Division,
    /// `<span>`
    Span,
    /// `<script>`
    Script,
    /// `<style>`
    Style,
    /// `<meta>`
    Meta,
    /// `<link>` (the document resource element, not an anchor)
    Link,
    /// `<head>`
    Head,
    /// Any other tag, lowercased
    Other(String),
}

impl ElementKind {
    /// Map a tag name to its kind.
    pub fn from_tag(tag_name: &str) -> Self {
        let tag = tag_name.to_ascii_lowercase();
        match tag.as_str() {
            "p" => ElementKind::Paragraph,
            "strong" | "b" => ElementKind::Strong,
            "em" | "i" => ElementKind::Emphasis,
            "h1" => ElementKind::Heading(1),
            "h2" => ElementKind::Heading(2),
            "h3" => ElementKind::Heading(3),
            "h4" => ElementKind::Heading(4),
            "h5" => ElementKind::Heading(5),
            "h6" => ElementKind::Heading(6),
            "a" => ElementKind::Anchor,
            "img" => ElementKind::Image,
            "br" => ElementKind::LineBreak,
            "hr" => ElementKind::ThematicBreak,
            "code" => ElementKind::Code,
            "pre" => ElementKind::Preformatted,
            "ul" => ElementKind::UnorderedList,
            "ol" => ElementKind::OrderedList,
            "li" => ElementKind::ListItem,
            "blockquote" => ElementKind::Blockquote,
            "table" => ElementKind::Table,
            "thead" => ElementKind::TableHead,
            "tbody" => ElementKind::TableBody,
            "tfoot" => ElementKind::TableFoot,
            "tr" => ElementKind::TableRow,
            "th" => ElementKind::HeaderCell,
            "td" => ElementKind::DataCell,
            "div" => ElementKind::Division,
            "span" => ElementKind::Span,
            "script" => ElementKind::Script,
            "style" => ElementKind::Style,
            "meta" => ElementKind::Meta,
            "link" => ElementKind::Link,
            "head" => ElementKind::Head,
            _ => ElementKind::Other(tag),
        }
    }

    /// Canonical lowercase tag name.
    pub fn tag_name(&self) -> &str {
        match self {
            ElementKind::Paragraph => "p",
            ElementKind::Strong => "strong",
            ElementKind::Emphasis => "em",
            ElementKind::Heading(1) => "h1",
            ElementKind::Heading(2) => "h2",
            ElementKind::Heading(3) => "h3",
            ElementKind::Heading(4) => "h4",
            ElementKind::Heading(5) => "h5",
            ElementKind::Heading(_) => "h6",
            ElementKind::Anchor => "a",
            ElementKind::Image => "img",
            ElementKind::LineBreak => "br",
            ElementKind::ThematicBreak => "hr",
            ElementKind::Code => "code",
            ElementKind::Preformatted => "pre",
            ElementKind::UnorderedList => "ul",
            ElementKind::OrderedList => "ol",
            ElementKind::ListItem => "li",
            ElementKind::Blockquote => "blockquote",
            ElementKind::Table => "table",
            ElementKind::TableHead => "thead",
            ElementKind::TableBody => "tbody",
            ElementKind::TableFoot => "tfoot",
            ElementKind::TableRow => "tr",
            ElementKind::HeaderCell => "th",
            ElementKind::DataCell => "td",
            ElementKind::Division => "div",
            ElementKind::Span => "span",
            ElementKind::Script => "script",
            ElementKind::Style => "style",
            ElementKind::Meta => "meta",
            ElementKind::Link => "link",
            ElementKind::Head => "head",
            ElementKind::Other(tag) => tag,
        }
    }

    /// Kinds whose Markdown fragment ends with a blank-line separator.
    pub fn is_block(&self) -> bool {
        matches!(
            self,
            ElementKind::Paragraph
                | ElementKind::Heading(_)
                | ElementKind::ThematicBreak
                | ElementKind::Preformatted
                | ElementKind::UnorderedList
                | ElementKind::OrderedList
                | ElementKind::Blockquote
                | ElementKind::Table
        )
    }

    /// Blocks that prefix their own lines with the current indent.
    ///
    /// Containers keep these lines as they are instead of re-indenting them.
    pub fn indents_itself(&self) -> bool {
        matches!(
            self,
            ElementKind::Preformatted
                | ElementKind::UnorderedList
                | ElementKind::OrderedList
                | ElementKind::Blockquote
        )
    }

    /// `<th>` or `<td>`
    pub fn is_table_cell(&self) -> bool {
        matches!(self, ElementKind::HeaderCell | ElementKind::DataCell)
    }

    /// Kinds rendered as their bare content, without Markdown of their own.
    pub fn is_passthrough(&self) -> bool {
        matches!(
            self,
            ElementKind::TableHead
                | ElementKind::TableBody
                | ElementKind::TableFoot
                | ElementKind::TableRow
                | ElementKind::Division
                | ElementKind::Span
                | ElementKind::Other(_)
        )
    }
}

/// An element with its attributes and children in document order.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub kind: ElementKind,
    pub attributes: IndexMap<String, String>,
    pub children: Vec<Node>,
}

impl Element {
    /// Get an attribute value by name
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .get(&name.to_ascii_lowercase())
            .map(String::as_str)
    }

    /// Get only element children
    pub fn element_children(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(Node::as_element)
    }

    /// First descendant (depth-first, document order) of the given kind.
    pub fn find_descendant(&self, kind: &ElementKind) -> Option<&Element> {
        for child in self.element_children() {
            if &child.kind == kind {
                return Some(child);
            }
            if let Some(found) = child.find_descendant(kind) {
                return Some(found);
            }
        }
        None
    }

    /// True when the element has no element children and no text beyond
    /// whitespace.
    pub fn is_blank(&self) -> bool {
        blank_children(&self.children)
    }
}

fn blank_children(children: &[Node]) -> bool {
    children.iter().all(|child| match child {
        Node::Text(text) => text.trim().is_empty(),
        Node::Comment(_) => true,
        Node::Element(_) | Node::Fragment(_) => false,
    })
}

/// A node of a parsed message fragment.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// Root of a parsed fragment
    Fragment(Vec<Node>),
    Element(Element),
    Text(String),
    Comment(String),
}

impl Node {
    /// Create a new element node
    pub fn element(tag_name: &str) -> Self {
        Node::Element(Element {
            kind: ElementKind::from_tag(tag_name),
            attributes: IndexMap::new(),
            children: Vec::new(),
        })
    }

    /// Create a new element node with attributes
    pub fn element_with_attrs(tag_name: &str, attrs: Vec<(&str, &str)>) -> Self {
        let attributes = attrs
            .into_iter()
            .map(|(name, value)| (name.to_ascii_lowercase(), value.to_string()))
            .collect();

        Node::Element(Element {
            kind: ElementKind::from_tag(tag_name),
            attributes,
            children: Vec::new(),
        })
    }

    /// Create a new text node
    pub fn text(content: &str) -> Self {
        Node::Text(content.to_string())
    }

    /// Create a new comment node
    pub fn comment(content: &str) -> Self {
        Node::Comment(content.to_string())
    }

    /// Create an empty fragment root
    pub fn fragment() -> Self {
        Node::Fragment(Vec::new())
    }

    /// Check if this is an element node
    pub fn is_element(&self) -> bool {
        matches!(self, Node::Element(_))
    }

    /// Check if this is a text node
    pub fn is_text(&self) -> bool {
        matches!(self, Node::Text(_))
    }

    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(element) => Some(element),
            _ => None,
        }
    }

    /// Element kind, `None` for text, comments and fragments.
    pub fn kind(&self) -> Option<&ElementKind> {
        self.as_element().map(|element| &element.kind)
    }

    /// Get the tag name (lowercase), empty for non-elements
    pub fn tag_name(&self) -> &str {
        self.kind().map(ElementKind::tag_name).unwrap_or("")
    }

    /// Get an attribute value by name
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.as_element()?.attr(name)
    }

    /// Get all child nodes
    pub fn children(&self) -> &[Node] {
        match self {
            Node::Fragment(children) => children,
            Node::Element(element) => &element.children,
            Node::Text(_) | Node::Comment(_) => &[],
        }
    }

    /// Get only element children
    pub fn element_children(&self) -> impl Iterator<Item = &Element> {
        self.children().iter().filter_map(Node::as_element)
    }

    /// Add a child node. Text and comment nodes cannot hold children and
    /// ignore the call.
    pub fn add_child(&mut self, child: Node) {
        match self {
            Node::Fragment(children) => children.push(child),
            Node::Element(element) => element.children.push(child),
            Node::Text(_) | Node::Comment(_) => {}
        }
    }

    /// Builder form of [`Node::add_child`].
    pub fn with_child(mut self, child: Node) -> Self {
        self.add_child(child);
        self
    }

    /// Get all text content from this node and descendants
    pub fn text_content(&self) -> String {
        match self {
            Node::Text(text) => text.clone(),
            Node::Comment(_) => String::new(),
            _ => self.children().iter().map(Node::text_content).collect(),
        }
    }

    /// True when the node carries no visible content: no element children
    /// and no text beyond whitespace.
    pub fn is_blank(&self) -> bool {
        blank_children(self.children())
    }
}
