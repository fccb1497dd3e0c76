//! # msgdown
//!
//! Convert HTML message fragments (chat messages, email bodies) to Markdown.
//!
//! The input is expected to be an isolated fragment, not a full page. It is
//! parsed with `scraper`, stripped of scripts, styles, wrapper elements and
//! stray attributes, then serialized with nesting-aware indentation for
//! lists, quotes, tables and code blocks.
//!
//! ## Example (HTML string)
//!
//! ```rust
//! use msgdown::MessageConverter;
//!
//! let converter = MessageConverter::new();
//! let markdown = converter
//!     .convert("<ul><li>A</li><li>B<ul><li>B1</li></ul></li></ul>")
//!     .unwrap();
//! assert_eq!(markdown, "* A\n* B\n    * B1\n\n");
//! ```
//!
//! ## Example (Node-based)
//!
//! ```rust
//! use msgdown::{MessageConverter, Node};
//!
//! let mut quote = Node::element("blockquote");
//! quote.add_child(Node::text("Quoted"));
//!
//! let markdown = MessageConverter::new().convert_node(&quote);
//! assert_eq!(markdown, "> Quoted\n\n");
//! ```

#[cfg(feature = "html")]
pub mod html;
mod service;

#[cfg(feature = "html")]
pub use html::parse_html;
pub use msgdown_core::{
    convert, sanitize, serialize, serialize_at, Element, ElementKind, Node, Options,
    SanitizeOptions,
};
pub use service::MessageConverter;

/// Error type for msgdown operations
#[derive(Debug, thiserror::Error)]
pub enum MsgdownError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid encoding: {0}")]
    Encoding(#[from] std::str::Utf8Error),
}

pub type Result<T> = std::result::Result<T, MsgdownError>;
