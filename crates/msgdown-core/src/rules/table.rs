//! Pipe tables.

use crate::node::{Element, ElementKind};
use crate::options::Options;
use crate::serialize::{layout, segments, Container, Context, BLOCK_SEPARATOR};
use crate::text::escape_pipes;

/// Rows of a table split into header and body, in document order.
#[derive(Default)]
struct Rows<'a> {
    header: Vec<&'a Element>,
    body: Vec<&'a Element>,
}

impl<'a> Rows<'a> {
    fn collect(table: &'a Element) -> Self {
        let mut rows = Rows::default();
        for child in table.element_children() {
            match child.kind {
                ElementKind::TableHead => rows.header.extend(table_rows(child)),
                ElementKind::TableBody | ElementKind::TableFoot => rows.body.extend(table_rows(child)),
                ElementKind::TableRow => rows.body.push(child),
                _ => {}
            }
        }

        if rows.header.is_empty() && rows.body.first().is_some_and(|row| is_header_row(row)) {
            let promoted = rows.body.remove(0);
            rows.header.push(promoted);
        }
        rows
    }
}

fn table_rows(section: &Element) -> impl Iterator<Item = &Element> {
    section
        .element_children()
        .filter(|child| child.kind == ElementKind::TableRow)
}

fn cells(row: &Element) -> impl Iterator<Item = &Element> {
    row.element_children().filter(|child| child.kind.is_table_cell())
}

fn is_header_row(row: &Element) -> bool {
    let mut row_cells = cells(row).peekable();
    row_cells.peek().is_some() && row_cells.all(|cell| cell.kind == ElementKind::HeaderCell)
}

pub(crate) fn table(element: &Element, ctx: Context, options: &Options) -> String {
    let rows = Rows::collect(element);
    if rows.header.is_empty() && rows.body.is_empty() {
        return BLOCK_SEPARATOR.to_string();
    }

    let columns = rows
        .header
        .first()
        .or(rows.body.first())
        .map(|row| cells(row).count())
        .unwrap_or(0)
        .max(1);

    let mut lines = Vec::with_capacity(rows.header.len() + rows.body.len() + 2);
    let mut header = rows.header.iter();
    match header.next() {
        Some(row) => lines.push(render_row(row, columns, ctx, options)),
        None => lines.push(format_row(&vec![" ".to_string(); columns])),
    }
    lines.push(format_row(&vec!["---".to_string(); columns]));

    // Markdown has room for one header row only
    for row in header.chain(rows.body.iter()) {
        lines.push(render_row(row, columns, ctx, options));
    }

    let mut out = lines.join("\n");
    out.push_str(BLOCK_SEPARATOR);
    out
}

fn render_row(row: &Element, columns: usize, ctx: Context, options: &Options) -> String {
    let mut rendered: Vec<String> = cells(row).map(|cell| render_cell(cell, ctx, options)).collect();

    if rendered.len() > columns {
        log::debug!(
            "table row has {} cells, truncating to {} columns",
            rendered.len(),
            columns
        );
        rendered.truncate(columns);
    }
    rendered.resize(columns, " ".to_string());

    format_row(&rendered)
}

/// Cell content on a single line.
fn render_cell(cell: &Element, ctx: Context, options: &Options) -> String {
    let inner = ctx.nested(Container::TableCell);
    let parts = segments(&cell.children, inner, options);
    let lines = layout(&parts, options.indent(inner.level).len());

    let content = lines
        .iter()
        .map(|line| escape_pipes(&line.text).into_owned())
        .collect::<Vec<_>>()
        .join(&options.table_line_break);

    if content.trim().is_empty() {
        " ".to_string()
    } else {
        content
    }
}

fn format_row(cells: &[String]) -> String {
    format!("| {} |", cells.join(" | "))
}
