//! Paragraphs, headings, thematic breaks and blockquotes.

use crate::node::Element;
use crate::options::Options;
use crate::serialize::{
    layout, segments, serialize_children, Container, Context, BLOCK_SEPARATOR,
};

fn trimmed_lines(content: &str) -> Vec<&str> {
    content.trim().lines().map(str::trim).collect()
}

pub(crate) fn paragraph(element: &Element, ctx: Context, options: &Options) -> String {
    let content = serialize_children(&element.children, ctx.within(Container::Other), options);
    let lines = trimmed_lines(&content);
    if lines.is_empty() {
        return BLOCK_SEPARATOR.to_string();
    }

    let indent_self = ctx.level > 0
        && !matches!(
            ctx.container,
            Container::ListItem | Container::Blockquote | Container::TableCell
        );

    let body = if indent_self {
        let indent = options.indent(ctx.level);
        lines
            .iter()
            .map(|line| format!("{indent}{line}"))
            .collect::<Vec<_>>()
            .join("\n")
    } else {
        lines.join("\n")
    };

    format!("{body}{BLOCK_SEPARATOR}")
}

pub(crate) fn heading(level: u8, element: &Element, ctx: Context, options: &Options) -> String {
    let content = serialize_children(&element.children, ctx.within(Container::Other), options);
    let content = content.trim();
    if content.is_empty() {
        return BLOCK_SEPARATOR.to_string();
    }
    format!("{} {}{}", "#".repeat(level.into()), content, BLOCK_SEPARATOR)
}

pub(crate) fn thematic_break(options: &Options) -> String {
    format!("{}{}", options.hr, BLOCK_SEPARATOR)
}

/// Quote every line of the content, nested blocks included.
///
/// Self-indenting children render at `level + 1` and are shifted back so
/// their lines start right after the quote marker.
pub(crate) fn blockquote(element: &Element, ctx: Context, options: &Options) -> String {
    let inner = ctx.nested(Container::Blockquote);
    let parts = segments(&element.children, inner, options);
    let lines = layout(&parts, options.indent(inner.level).len());
    if lines.is_empty() {
        return BLOCK_SEPARATOR.to_string();
    }

    let prefix = format!("{}> ", options.indent(ctx.level));
    let mut out = String::new();
    for line in &lines {
        out.push_str(&prefix);
        out.push_str(&line.text);
        out.push('\n');
    }
    out.push('\n');
    out
}
