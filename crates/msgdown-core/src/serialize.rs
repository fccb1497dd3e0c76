//! Recursive HTML-tree to Markdown serialization
//!
//! Every node is turned into a Markdown fragment built bottom-up from its
//! already serialized children. The nesting context travels by value.

use crate::node::{Element, ElementKind, Node};
use crate::options::Options;
use crate::rules;
use crate::text::{collapse_whitespace, strip_columns, trim_trailing_blanks};

/// Separator closing every block-level fragment
pub(crate) const BLOCK_SEPARATOR: &str = "\n\n";

/// Category of the immediate parent element
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Container {
    Root,
    ListItem,
    Blockquote,
    TableCell,
    Other,
}

/// Nesting context handed to every rule
#[derive(Debug, Clone, Copy)]
pub(crate) struct Context {
    pub level: usize,
    pub container: Container,
    pub in_code_block: bool,
}

impl Context {
    pub fn at_level(level: usize) -> Self {
        Self {
            level,
            container: Container::Root,
            in_code_block: false,
        }
    }

    /// Context for the content of a list item, blockquote or table cell.
    pub fn nested(self, container: Container) -> Self {
        Self {
            level: self.level + 1,
            container,
            ..self
        }
    }

    /// Context for children of any other element.
    pub fn within(self, container: Container) -> Self {
        Self { container, ..self }
    }

    pub fn code_block(self) -> Self {
        Self {
            in_code_block: true,
            ..self
        }
    }
}

/// Serialize a tree at nesting level 0.
pub fn serialize(node: &Node, options: &Options) -> String {
    serialize_at(node, 0, options)
}

/// Serialize a tree as if it sat at the given nesting level.
pub fn serialize_at(node: &Node, level: usize, options: &Options) -> String {
    serialize_node(node, Context::at_level(level), options)
}

pub(crate) fn serialize_node(node: &Node, ctx: Context, options: &Options) -> String {
    if ctx.in_code_block {
        return raw_text(node);
    }

    match node {
        Node::Text(text) => collapse_whitespace(text).into_owned(),
        Node::Comment(_) => String::new(),
        Node::Fragment(children) => serialize_children(children, ctx.within(Container::Root), options),
        Node::Element(element) => serialize_element(element, ctx, options),
    }
}

fn serialize_element(element: &Element, ctx: Context, options: &Options) -> String {
    match &element.kind {
        ElementKind::Paragraph => rules::paragraph(element, ctx, options),
        ElementKind::Heading(level) => rules::heading(*level, element, ctx, options),
        ElementKind::ThematicBreak => rules::thematic_break(options),
        ElementKind::Strong => rules::strong(element, ctx, options),
        ElementKind::Emphasis => rules::emphasis(element, ctx, options),
        ElementKind::Anchor => rules::link(element, ctx, options),
        ElementKind::Image => rules::image(element),
        ElementKind::LineBreak => rules::line_break(),
        ElementKind::Code => rules::inline_code(element, ctx, options),
        ElementKind::Preformatted => rules::code_block(element, ctx, options),
        ElementKind::UnorderedList => rules::list(element, false, ctx, options),
        ElementKind::OrderedList => rules::list(element, true, ctx, options),
        ElementKind::Blockquote => rules::blockquote(element, ctx, options),
        ElementKind::Table => rules::table(element, ctx, options),

        // Stray items and cells still nest their content
        ElementKind::ListItem => {
            serialize_children(&element.children, ctx.nested(Container::ListItem), options)
        }
        ElementKind::HeaderCell | ElementKind::DataCell => {
            serialize_children(&element.children, ctx.nested(Container::TableCell), options)
        }

        // Non-content elements that survived a custom sanitizer config
        ElementKind::Script
        | ElementKind::Style
        | ElementKind::Meta
        | ElementKind::Link
        | ElementKind::Head => String::new(),

        // Passthrough: keep the content, drop the markup
        ElementKind::TableHead
        | ElementKind::TableBody
        | ElementKind::TableFoot
        | ElementKind::TableRow
        | ElementKind::Division
        | ElementKind::Span
        | ElementKind::Other(_) => {
            serialize_children(&element.children, ctx.within(Container::Other), options)
        }
    }
}

/// Text of a node inside a code block, whitespace untouched.
fn raw_text(node: &Node) -> String {
    match node {
        Node::Text(text) => text.clone(),
        Node::Comment(_) => String::new(),
        Node::Element(element) if element.kind == ElementKind::LineBreak => "\n".to_string(),
        _ => node.children().iter().map(raw_text).collect(),
    }
}

/// Serialize sibling nodes and concatenate the fragments.
pub(crate) fn serialize_children(children: &[Node], ctx: Context, options: &Options) -> String {
    let mut out = String::new();
    append_children(&mut out, children, ctx, options);
    out
}

fn append_children(out: &mut String, children: &[Node], ctx: Context, options: &Options) {
    for child in children {
        if let Some(wrapper) = block_wrapper(child) {
            append_children(out, &wrapper.children, ctx, options);
            continue;
        }
        let fragment = serialize_node(child, ctx, options);
        push_fragment(out, &fragment, is_block(child));
    }
}

/// Append a fragment, starting blocks on a fresh line.
///
/// Leading whitespace of inline fragments at the start of a line carries no
/// meaning and is dropped.
pub(crate) fn push_fragment(out: &mut String, fragment: &str, block: bool) {
    if fragment.is_empty() {
        return;
    }
    let line_start = out.is_empty() || out.ends_with('\n');
    if !block && line_start {
        out.push_str(fragment.trim_start());
        return;
    }
    if block && !fragment.trim().is_empty() {
        trim_trailing_blanks(out);
        if !out.is_empty() && !out.ends_with('\n') {
            out.push_str(BLOCK_SEPARATOR);
        }
    }
    out.push_str(fragment);
}

fn is_block(node: &Node) -> bool {
    node.kind().is_some_and(ElementKind::is_block)
}

/// A passthrough element holding block content somewhere below it.
///
/// Such wrappers are transparent: their children are laid out as if they
/// were siblings of the wrapper, so the blocks keep their separators and
/// indentation.
pub(crate) fn block_wrapper(node: &Node) -> Option<&Element> {
    node.as_element()
        .filter(|element| element.kind.is_passthrough() && contains_block(element))
}

fn contains_block(element: &Element) -> bool {
    element.element_children().any(|child| {
        child.kind.is_block() || (child.kind.is_passthrough() && contains_block(child))
    })
}

/// Part of a container's serialized content.
#[derive(Debug)]
pub(crate) enum Segment {
    /// Inline text, paragraphs, headings and tables: no own indentation
    Flow(String),
    /// A list, code block or blockquote already indented for its level
    Indented(String),
}

/// Serialize the children of a list item, blockquote or table cell,
/// keeping self-indenting blocks apart from the surrounding flow content.
pub(crate) fn segments(children: &[Node], ctx: Context, options: &Options) -> Vec<Segment> {
    let mut result = Vec::new();
    let mut flow = String::new();
    collect_segments(children, ctx, options, &mut flow, &mut result);

    if !flow.is_empty() {
        result.push(Segment::Flow(flow));
    }
    result
}

fn collect_segments(
    children: &[Node],
    ctx: Context,
    options: &Options,
    flow: &mut String,
    result: &mut Vec<Segment>,
) {
    for child in children {
        if let Some(wrapper) = block_wrapper(child) {
            collect_segments(&wrapper.children, ctx, options, flow, result);
            continue;
        }

        let fragment = serialize_node(child, ctx, options);
        if child.kind().is_some_and(ElementKind::indents_itself) {
            if !flow.is_empty() {
                result.push(Segment::Flow(std::mem::take(flow)));
            }
            result.push(Segment::Indented(fragment));
        } else {
            push_fragment(flow, &fragment, is_block(child));
        }
    }
}

/// A single output line of container content
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Line {
    pub text: String,
    /// Produced by a self-indenting block
    pub indented: bool,
}

impl Line {
    fn blank() -> Self {
        Self {
            text: String::new(),
            indented: false,
        }
    }

    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// Break segments into lines.
///
/// Blank-only segments vanish, a segment that ended with a block separator
/// leaves one blank line before the next segment, and flow lines are
/// trimmed. Lines of indented segments lose up to `dedent` leading columns.
pub(crate) fn layout(segments: &[Segment], dedent: usize) -> Vec<Line> {
    let mut lines: Vec<Line> = Vec::new();
    let mut blank_pending = false;

    for segment in segments {
        let (text, indented) = match segment {
            Segment::Flow(text) => (text.as_str(), false),
            Segment::Indented(text) => (text.as_str(), true),
        };
        if text.trim().is_empty() {
            continue;
        }
        if blank_pending && !lines.is_empty() {
            lines.push(Line::blank());
        }

        if indented {
            let body = text.trim_end().trim_start_matches(['\r', '\n']);
            for line in body.lines() {
                lines.push(Line {
                    text: strip_columns(line, dedent).to_string(),
                    indented: true,
                });
            }
        } else {
            for line in text.trim().lines() {
                let line = line.trim();
                if line.is_empty() && lines.last().is_some_and(Line::is_blank) {
                    continue;
                }
                lines.push(Line {
                    text: line.to_string(),
                    indented: false,
                });
            }
        }

        blank_pending = text.trim_end_matches([' ', '\t']).ends_with(BLOCK_SEPARATOR);
    }

    lines
}
