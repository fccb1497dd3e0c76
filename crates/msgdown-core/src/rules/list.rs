//! Ordered and unordered lists.

use crate::node::{Element, ElementKind};
use crate::options::Options;
use crate::serialize::{layout, segments, Container, Context, BLOCK_SEPARATOR};

pub(crate) fn list(element: &Element, ordered: bool, ctx: Context, options: &Options) -> String {
    let items: Vec<String> = element
        .element_children()
        .filter(|child| child.kind == ElementKind::ListItem)
        .enumerate()
        .map(|(index, item)| {
            let marker = if ordered {
                format!("{}. ", index + 1)
            } else {
                format!("{} ", options.bullet_list_marker)
            };
            list_item(item, &marker, ordered, ctx, options)
        })
        .collect();

    let mut out = items.join("\n");
    out.push_str(BLOCK_SEPARATOR);
    out
}

/// Render one item, marker included, without a trailing newline.
///
/// The marker shares its line with the first flow line. An item opening
/// with a nested list, code block or quote puts the marker on a line of
/// its own and lets the block follow at its own indentation.
fn list_item(item: &Element, marker: &str, ordered: bool, ctx: Context, options: &Options) -> String {
    let indent = options.indent(ctx.level);
    if item.is_blank() {
        return format!("{indent}{marker}");
    }

    let inner = ctx.nested(Container::ListItem);
    let lines = layout(&segments(&item.children, inner, options), 0);
    let Some(first) = lines.first() else {
        return format!("{indent}{marker}");
    };

    let continuation = if ordered {
        format!("{indent}{}", " ".repeat(marker.len()))
    } else {
        format!("{indent}{}", options.indent_unit)
    };

    let mut out: Vec<String> = Vec::with_capacity(lines.len() + 1);
    let rest = if first.indented {
        out.push(format!("{indent}{}", marker.trim_end()));
        &lines[..]
    } else {
        out.push(format!("{indent}{marker}{}", first.text));
        &lines[1..]
    };

    for line in rest {
        if line.indented || line.is_blank() {
            out.push(line.text.clone());
        } else {
            out.push(format!("{continuation}{}", line.text));
        }
    }

    out.join("\n")
}
