//! Configuration for sanitizing and serializing message fragments

use indexmap::IndexMap;

use crate::node::ElementKind;

/// Sanitizer configuration
#[derive(Debug, Clone)]
pub struct SanitizeOptions {
    /// Elements deleted together with their subtree
    pub remove: Vec<ElementKind>,

    /// Wrapper elements replaced by their children
    pub unwrap: Vec<ElementKind>,

    /// Attributes kept per element kind; everything else is stripped
    pub allowed_attributes: IndexMap<ElementKind, Vec<String>>,

    /// Upper bound on unwrap passes
    pub max_unwrap_passes: usize,
}

impl SanitizeOptions {
    pub fn removes(&self, kind: &ElementKind) -> bool {
        self.remove.contains(kind)
    }

    pub fn unwraps(&self, kind: &ElementKind) -> bool {
        self.unwrap.contains(kind)
    }

    pub fn allows_attribute(&self, kind: &ElementKind, name: &str) -> bool {
        self.allowed_attributes
            .get(kind)
            .is_some_and(|allowed| allowed.iter().any(|a| a.eq_ignore_ascii_case(name)))
    }
}

impl Default for SanitizeOptions {
    fn default() -> Self {
        let mut allowed_attributes = IndexMap::new();
        allowed_attributes.insert(ElementKind::Anchor, vec!["href".to_string()]);
        allowed_attributes.insert(
            ElementKind::Image,
            vec!["src".to_string(), "alt".to_string()],
        );
        allowed_attributes.insert(ElementKind::Code, vec!["class".to_string()]);

        Self {
            remove: vec![
                ElementKind::Script,
                ElementKind::Style,
                ElementKind::Meta,
                ElementKind::Link,
                ElementKind::Head,
            ],
            unwrap: vec![ElementKind::Span, ElementKind::Division],
            allowed_attributes,
            max_unwrap_passes: 5,
        }
    }
}

/// Options for Markdown serialization
#[derive(Debug, Clone)]
pub struct Options {
    /// Indent added per nesting level
    pub indent_unit: String,

    /// Bullet list marker
    pub bullet_list_marker: char,

    /// Fence string for fenced code blocks
    pub fence: String,

    /// Horizontal rule string
    pub hr: String,

    /// Replaces line breaks inside table cells
    pub table_line_break: String,

    /// Sanitizer configuration
    pub sanitize: SanitizeOptions,
}

impl Options {
    /// Indent prefix for the given nesting level
    pub fn indent(&self, level: usize) -> String {
        self.indent_unit.repeat(level)
    }
}

impl Default for Options {
    fn default() -> Self {
        Self {
            indent_unit: "    ".to_string(),
            bullet_list_marker: '*',
            fence: "```".to_string(),
            hr: "* * *".to_string(),
            table_line_break: "<br>".to_string(),
            sanitize: SanitizeOptions::default(),
        }
    }
}
