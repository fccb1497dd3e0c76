//! MessageConverter - the entry point for message fragment conversion.

use msgdown_core::{convert, Node, Options};

#[cfg(feature = "html")]
use crate::{MsgdownError, Result};

/// Converts HTML message fragments to Markdown.
///
/// The converter holds only its options and can be shared freely between
/// threads.
#[derive(Debug, Clone, Default)]
pub struct MessageConverter {
    options: Options,
}

impl MessageConverter {
    /// Create a new MessageConverter with default options
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a MessageConverter with custom options
    pub fn with_options(options: Options) -> Self {
        Self { options }
    }

    /// Get the current options
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Convert an HTML fragment to Markdown.
    ///
    /// Full page documents are rejected; pass the message body instead.
    #[cfg(feature = "html")]
    pub fn convert(&self, html: &str) -> Result<String> {
        reject_document(html)?;
        log::debug!("converting message fragment ({} bytes)", html.len());

        let node = crate::html::parse_html(html);
        Ok(self.convert_node(&node))
    }

    /// Convert a UTF-8 encoded HTML fragment to Markdown.
    #[cfg(feature = "html")]
    pub fn convert_bytes(&self, html: &[u8]) -> Result<String> {
        let html = std::str::from_utf8(html)?;
        self.convert(html)
    }

    /// Convert an already parsed tree.
    ///
    /// The tree is not modified; sanitizing works on a copy.
    pub fn convert_node(&self, node: &Node) -> String {
        convert(node, &self.options)
    }
}

#[cfg(feature = "html")]
fn reject_document(html: &str) -> Result<()> {
    let head: String = html.trim_start().chars().take(16).collect();
    let head = head.to_ascii_lowercase();

    if head.starts_with("<!doctype") || head.starts_with("<html") {
        return Err(MsgdownError::InvalidInput(
            "expected a message fragment, got a full HTML document".to_string(),
        ));
    }
    Ok(())
}
