//! Fenced code blocks.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::node::{Element, ElementKind};
use crate::options::Options;
use crate::serialize::{serialize_node, Context, BLOCK_SEPARATOR};
use crate::text::{leading_whitespace, strip_columns};

static LANGUAGE_CLASS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:^|\s)language-(\S+)").expect("language pattern is valid"));

fn language(code: &Element) -> &str {
    code.attr("class")
        .and_then(|class| LANGUAGE_CLASS.captures(class))
        .and_then(|captures| captures.get(1))
        .map_or("", |m| m.as_str())
}

/// Code lines with the common indentation removed and surrounding blank
/// lines dropped.
fn code_lines(raw: &str) -> Vec<&str> {
    let lines: Vec<&str> = raw.lines().map(str::trim_end).collect();

    let Some(start) = lines.iter().position(|line| !line.is_empty()) else {
        return Vec::new();
    };
    let end = lines
        .iter()
        .rposition(|line| !line.is_empty())
        .map_or(start, |end| end + 1);
    let lines = &lines[start..end];

    let common = lines
        .iter()
        .filter(|line| !line.is_empty())
        .map(|line| leading_whitespace(line))
        .min()
        .unwrap_or(0);

    lines.iter().map(|line| strip_columns(line, common)).collect()
}

/// Fence long enough that no content line can close the block early.
fn fence_for(lines: &[&str], options: &Options) -> String {
    let Some(fence_char) = options.fence.chars().next() else {
        return options.fence.clone();
    };

    let longest = lines
        .iter()
        .map(|line| line.trim_start().chars().take_while(|c| *c == fence_char).count())
        .max()
        .unwrap_or(0);

    let base = options.fence.chars().count();
    if longest >= base {
        fence_char.to_string().repeat(longest + 1)
    } else {
        options.fence.clone()
    }
}

pub(crate) fn code_block(element: &Element, ctx: Context, options: &Options) -> String {
    let code = element.find_descendant(&ElementKind::Code).unwrap_or(element);
    let language = language(code);

    let raw: String = code
        .children
        .iter()
        .map(|child| serialize_node(child, ctx.code_block(), options))
        .collect();
    let lines = code_lines(&raw);
    let fence = fence_for(&lines, options);
    let indent = options.indent(ctx.level);

    let mut out = format!("{indent}{fence}{language}\n");
    for line in &lines {
        out.push_str(&indent);
        out.push_str(line);
        out.push('\n');
    }
    out.push_str(&indent);
    out.push_str(&fence);
    out.push_str(BLOCK_SEPARATOR);
    out
}
