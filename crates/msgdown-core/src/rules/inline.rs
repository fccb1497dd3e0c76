//! Inline rules: emphasis, links, images, line breaks and inline code.

use crate::node::Element;
use crate::options::Options;
use crate::serialize::{serialize_children, Container, Context};
use crate::text::longest_backtick_run;

fn inline_content(element: &Element, ctx: Context, options: &Options) -> String {
    serialize_children(&element.children, ctx.within(Container::Other), options)
}

fn wrap(delimiter: &str, content: &str) -> String {
    let content = content.trim();
    // An empty `****` would read as a thematic break
    if content.is_empty() {
        return String::new();
    }
    format!("{delimiter}{content}{delimiter}")
}

pub(crate) fn strong(element: &Element, ctx: Context, options: &Options) -> String {
    wrap("**", &inline_content(element, ctx, options))
}

pub(crate) fn emphasis(element: &Element, ctx: Context, options: &Options) -> String {
    wrap("*", &inline_content(element, ctx, options))
}

pub(crate) fn link(element: &Element, ctx: Context, options: &Options) -> String {
    let content = inline_content(element, ctx, options);
    let href = element.attr("href").unwrap_or("");
    format!("[{}]({})", content.trim(), href)
}

pub(crate) fn image(element: &Element) -> String {
    let alt = element.attr("alt").unwrap_or("");
    let src = element.attr("src").unwrap_or("");
    format!("![{alt}]({src})")
}

pub(crate) fn line_break() -> String {
    "\n".to_string()
}

/// Inline code with a fence that cannot collide with backticks inside it.
///
/// Content with backticks gets a fence one longer than its longest run and
/// a padding space on both sides.
pub(crate) fn inline_code(element: &Element, ctx: Context, options: &Options) -> String {
    let content = inline_content(element, ctx, options);
    let text = content.trim();

    if !text.contains('`') {
        return format!("`{text}`");
    }

    let fence = "`".repeat(longest_backtick_run(text) + 1);
    format!("{fence} {text} {fence}")
}
