/*!
A thin adapter between the evaluator and the `xml_dom` crate's arena-backed
DOM tree.

None of the functions here carry any XPath semantics; they only translate
between `RefNode` and the vocabulary the evaluator needs: children, parent,
tag name, attribute lookup, text content, and the two flavours of equality
the filter language distinguishes.
*/

use crate::error::Error;
use std::fs;
use std::path::Path;
use std::str::FromStr;
use xml_dom::level2::{Name, Node, NodeType, RefNode};
use xml_dom::parser::read_xml;

/// Sentinel returned by [`tag`] for nodes that have no element tag name.
/// Not a legal XML `Name`, so it can never be confused with a real tag.
pub const NON_ELEMENT_TAG: &str = "#non-element";

// ------------------------------------------------------------------------------------------------
// Public Functions
// ------------------------------------------------------------------------------------------------

/// Reads `file_ref` from disk and parses it as XML, returning the DOM
/// `Document` node (the handle above the root element, not the root element
/// itself — see the crate's design notes on why `Children`/`Descendants`
/// start one level above `<root>`).
pub fn load(file_ref: &str) -> Result<RefNode, Error> {
    let path = Path::new(file_ref);
    let contents = fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let document = read_xml(&contents).map_err(|err| Error::Parse {
        path: path.to_path_buf(),
        message: err.to_string(),
    })?;
    log::trace!("loaded document '{}'", file_ref);
    Ok(document)
}

/// The direct children of `node`, in document order.
pub fn children(node: &RefNode) -> Vec<RefNode> {
    node.child_nodes().iter().cloned().collect()
}

/// The parent of `node`, if any. The document node itself has no parent.
pub fn parent(node: &RefNode) -> Option<RefNode> {
    node.parent_node()
}

/// The element tag name of `node`, or [`NON_ELEMENT_TAG`] if `node` is not
/// an element (text, attribute, document, ...).
pub fn tag(node: &RefNode) -> String {
    if node.node_type() == NodeType::Element {
        node.node_name().to_string()
    } else {
        NON_ELEMENT_TAG.to_string()
    }
}

/// The attribute named `name` on `node`, if `node` is an element and carries
/// one.
pub fn attribute(node: &RefNode, name: &str) -> Option<RefNode> {
    if node.node_type() != NodeType::Element {
        return None;
    }
    let wanted = Name::from_str(name).ok()?;
    node.attributes()
        .iter()
        .find(|(attr_name, _)| **attr_name == wanted)
        .map(|(_, attr_node)| attr_node.clone())
}

/// The direct text-node children of `node`, in document order. This is the
/// `Text` relative-path operation: it yields nodes, not a concatenated
/// string — a node-set of zero, one, or more text nodes.
pub fn text_nodes(node: &RefNode) -> Vec<RefNode> {
    children(node)
        .into_iter()
        .filter(|child| child.node_type() == NodeType::Text)
        .collect()
}

/// The raw character value of a text or attribute node. Used internally by
/// [`structural_equal`]; not a general-purpose "stringify any node" helper.
fn node_value(node: &RefNode) -> Option<String> {
    node.node_value()
}

/// `ValueEq`: deep structural equality — same tag, same attributes, same
/// text, same children recursively. Two distinct nodes can be structurally
/// equal; this is the XPath `=` comparison, not `is`.
pub fn structural_equal(a: &RefNode, b: &RefNode) -> bool {
    if a.node_type() != b.node_type() {
        return false;
    }
    match a.node_type() {
        NodeType::Text | NodeType::Attribute => node_value(a) == node_value(b),
        NodeType::Element => {
            if tag(a) != tag(b) {
                return false;
            }
            let a_attrs = sorted_attribute_values(a);
            let b_attrs = sorted_attribute_values(b);
            if a_attrs != b_attrs {
                return false;
            }
            let a_children = children(a);
            let b_children = children(b);
            a_children.len() == b_children.len()
                && a_children
                    .iter()
                    .zip(b_children.iter())
                    .all(|(x, y)| structural_equal(x, y))
        }
        _ => same_identity(a, b),
    }
}

/// `IdentityEq`: whether `a` and `b` are handles to the very same node.
pub fn same_identity(a: &RefNode, b: &RefNode) -> bool {
    a == b
}

// ------------------------------------------------------------------------------------------------
// Private Functions
// ------------------------------------------------------------------------------------------------

fn sorted_attribute_values(node: &RefNode) -> Vec<(String, String)> {
    let mut values: Vec<(String, String)> = node
        .attributes()
        .iter()
        .map(|(name, value_node)| (name.to_string(), value_node.node_value().unwrap_or_default()))
        .collect();
    values.sort();
    values
}

// ------------------------------------------------------------------------------------------------
// Unit Tests
// ------------------------------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    const XML: &str = r#"<library>
        <book id="1"><title>Dune</title></book>
        <book id="2"><title>Dune</title></book>
    </library>"#;

    #[test]
    fn tag_and_children_walk_the_library() {
        let document = read_xml(XML).unwrap();
        let library = children(&document)
            .into_iter()
            .find(|n| n.node_type() == NodeType::Element)
            .unwrap();
        assert_eq!(tag(&library), "library");
        let books: Vec<_> = children(&library)
            .into_iter()
            .filter(|n| tag(n) == "book")
            .collect();
        assert_eq!(books.len(), 2);
    }

    #[test]
    fn attribute_and_text_read_through_to_values() {
        let document = read_xml(XML).unwrap();
        let library = children(&document)
            .into_iter()
            .find(|n| n.node_type() == NodeType::Element)
            .unwrap();
        let book = children(&library)
            .into_iter()
            .find(|n| tag(n) == "book")
            .unwrap();
        let id = attribute(&book, "id").unwrap();
        assert_eq!(node_value(&id), Some("1".to_string()));
        let title = children(&book).into_iter().find(|n| tag(n) == "title").unwrap();
        let title_text = text_nodes(&title);
        assert_eq!(title_text.len(), 1);
        assert_eq!(node_value(&title_text[0]), Some("Dune".to_string()));
    }

    #[test]
    fn structurally_equal_but_not_identical_books() {
        let document = read_xml(XML).unwrap();
        let library = children(&document)
            .into_iter()
            .find(|n| n.node_type() == NodeType::Element)
            .unwrap();
        let titles: Vec<_> = children(&library)
            .into_iter()
            .filter(|n| tag(n) == "book")
            .map(|book| children(&book).into_iter().find(|n| tag(n) == "title").unwrap())
            .collect();
        assert!(structural_equal(&titles[0], &titles[1]));
        assert!(!same_identity(&titles[0], &titles[1]));
    }

    #[test]
    fn non_element_tag_is_sentinel() {
        let document = read_xml(XML).unwrap();
        assert_eq!(tag(&document), NON_ELEMENT_TAG);
    }
}
