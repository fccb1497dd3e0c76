//! Sanitizer pre-pass.
//!
//! Produces a new tree: removable elements are dropped with their subtrees,
//! wrapper elements are replaced by their children and attributes outside
//! the per-kind whitelist are stripped. The input tree is left untouched so
//! one parsed document can feed several independent conversions.

use crate::node::{Element, Node};
use crate::options::SanitizeOptions;

/// Sanitize a tree.
pub fn sanitize(node: &Node, options: &SanitizeOptions) -> Node {
    let Some(pruned) = remove_elements(node, options) else {
        log::trace!("sanitize: root element removed");
        return Node::fragment();
    };

    let mut nodes = vec![pruned];
    for pass in 1..=options.max_unwrap_passes {
        let mut unwrapped = 0;
        nodes = unwrap_wrappers(nodes, options, &mut unwrapped);
        log::trace!("sanitize: unwrap pass {pass} removed {unwrapped} wrappers");
        if unwrapped == 0 {
            break;
        }
    }

    let root = match nodes.len() {
        1 => nodes.remove(0),
        _ => Node::Fragment(nodes),
    };
    clean_attributes(root, options)
}

/// Copy the tree without removable elements.
fn remove_elements(node: &Node, options: &SanitizeOptions) -> Option<Node> {
    match node {
        Node::Element(element) if options.removes(&element.kind) => None,
        Node::Element(element) => Some(Node::Element(Element {
            kind: element.kind.clone(),
            attributes: element.attributes.clone(),
            children: remove_from_children(&element.children, options),
        })),
        Node::Fragment(children) => Some(Node::Fragment(remove_from_children(children, options))),
        Node::Text(_) | Node::Comment(_) => Some(node.clone()),
    }
}

fn remove_from_children(children: &[Node], options: &SanitizeOptions) -> Vec<Node> {
    children
        .iter()
        .filter_map(|child| remove_elements(child, options))
        .collect()
}

/// One unwrap pass over a sibling list.
///
/// A wrapper root turns into its children, which is why this works on a
/// list of siblings rather than a single node.
fn unwrap_wrappers(nodes: Vec<Node>, options: &SanitizeOptions, unwrapped: &mut usize) -> Vec<Node> {
    let mut result = Vec::with_capacity(nodes.len());

    for node in nodes {
        match node {
            Node::Element(element) if options.unwraps(&element.kind) => {
                *unwrapped += 1;
                result.extend(unwrap_wrappers(element.children, options, unwrapped));
            }
            Node::Element(mut element) => {
                element.children = unwrap_wrappers(element.children, options, unwrapped);
                result.push(Node::Element(element));
            }
            Node::Fragment(children) => {
                result.push(Node::Fragment(unwrap_wrappers(children, options, unwrapped)));
            }
            other => result.push(other),
        }
    }

    result
}

fn clean_attributes(node: Node, options: &SanitizeOptions) -> Node {
    match node {
        Node::Element(mut element) => {
            let kind = element.kind.clone();
            element
                .attributes
                .retain(|name, _| options.allows_attribute(&kind, name));
            element.children = element
                .children
                .into_iter()
                .map(|child| clean_attributes(child, options))
                .collect();
            Node::Element(element)
        }
        Node::Fragment(children) => Node::Fragment(
            children
                .into_iter()
                .map(|child| clean_attributes(child, options))
                .collect(),
        ),
        other => other,
    }
}
