//! Markdown rules, one per semantic element kind.
//!
//! Each rule receives the element, its nesting context and the options and
//! returns the element's Markdown fragment.

mod block;
mod code;
mod inline;
mod list;
mod table;

pub(crate) use block::{blockquote, heading, paragraph, thematic_break};
pub(crate) use code::code_block;
pub(crate) use inline::{emphasis, image, inline_code, line_break, link, strong};
pub(crate) use list::list;
pub(crate) use table::table;
