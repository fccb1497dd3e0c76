//! msgdown-core - sanitizer and Markdown serializer for message fragments
//!
//! This crate turns an already parsed HTML fragment (a chat or email message
//! body) into Markdown. It carries no HTML parser; the `msgdown` crate lowers
//! `scraper` output into [`Node`] trees, and any other parser can do the same.
//!
//! # Architecture
//!
//! ```text
//!             ┌──────────┐   ┌───────────┐
//! Node tree ─▶│ sanitize │──▶│ serialize │──▶ Markdown String
//!             └──────────┘   └───────────┘
//! ```
//!
//! Sanitizing returns a new tree, so one parsed fragment can be converted
//! any number of times with different [`Options`].
//!
//! # Example
//!
//! ```rust
//! use msgdown_core::{convert, Node, Options};
//!
//! let paragraph = Node::element("p")
//!     .with_child(Node::text("Hello "))
//!     .with_child(Node::element("b").with_child(Node::text("world")));
//!
//! let markdown = convert(&paragraph, &Options::default());
//! assert_eq!(markdown, "Hello **world**\n\n");
//! ```

mod node;
mod options;
mod rules;
mod sanitize;
mod serialize;
mod text;

pub use node::{Element, ElementKind, Node};
pub use options::{Options, SanitizeOptions};
pub use sanitize::sanitize;
pub use serialize::{serialize, serialize_at};

/// Sanitize a tree and serialize the result at nesting level 0.
pub fn convert(node: &Node, options: &Options) -> String {
    let clean = sanitize(node, &options.sanitize);
    serialize(&clean, options)
}
