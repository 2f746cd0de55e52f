//! HTML parsing and manipulation using html5ever
//!
//! Provides utilities for:
//! - Parsing reader content (full documents or fragments)
//! - Locating elements and extracting plain text
//! - Copying subtrees so cleanup never mutates the source tree
//! - Serializing nodes back to markup

use std::cell::RefCell;
use std::default::Default;
use std::rc::Rc;

use html5ever::parse_document;
use html5ever::serialize::{serialize, SerializeOpts, TraversalScope};
use html5ever::tendril::TendrilSink;
use html5ever::tree_builder::TreeBuilderOpts;
use html5ever::ParseOpts;
use markup5ever_rcdom::{Handle, Node, NodeData, RcDom, SerializableHandle};

/// Parse HTML content into a DOM tree
pub fn parse_html(html: &str) -> RcDom {
    let opts = ParseOpts {
        tree_builder: TreeBuilderOpts {
            drop_doctype: false,
            ..Default::default()
        },
        ..Default::default()
    };

    parse_document(RcDom::default(), opts)
        .from_utf8()
        .one(html.as_bytes())
}

/// Parse a fragment of HTML (not a full document)
pub fn parse_fragment(html: &str) -> RcDom {
    // Wrap in a minimal document structure for parsing
    let wrapped = format!(
        "<!DOCTYPE html><html><head></head><body>{}</body></html>",
        html
    );
    parse_html(&wrapped)
}

/// Serialize a node and its children to HTML string
pub fn serialize_node(handle: &Handle) -> String {
    let mut bytes = Vec::new();
    let serializable: SerializableHandle = handle.clone().into();

    let opts = SerializeOpts {
        traversal_scope: TraversalScope::IncludeNode,
        ..Default::default()
    };

    serialize(&mut bytes, &serializable, opts).expect("serialization failed");

    String::from_utf8(bytes).unwrap_or_default()
}

/// Get the local tag name of an element node
pub fn element_name(handle: &Handle) -> Option<&str> {
    match &handle.data {
        NodeData::Element { name, .. } => Some(name.local.as_ref()),
        _ => None,
    }
}

/// Get the first element with the given local name
pub fn find_first_element(handle: &Handle, name: &str) -> Option<Handle> {
    if element_name(handle) == Some(name) {
        return Some(handle.clone());
    }

    for child in handle.children.borrow().iter() {
        if let Some(found) = find_first_element(child, name) {
            return Some(found);
        }
    }

    None
}

/// Get text content from a node (ignoring tags)
pub fn text_content(handle: &Handle) -> String {
    let mut text = String::new();
    text_recursive(handle, &mut text);
    text
}

fn text_recursive(handle: &Handle, text: &mut String) {
    match handle.data {
        NodeData::Text { ref contents } => {
            text.push_str(&contents.borrow());
        }
        NodeData::Element { .. } => {
            for child in handle.children.borrow().iter() {
                text_recursive(child, text);
            }
        }
        _ => {}
    }
}

/// Deep-copy a subtree into fresh nodes.
///
/// Template contents are not carried over; the copy exists only to be
/// cleaned and serialized.
pub fn deep_copy(handle: &Handle) -> Handle {
    let data = match &handle.data {
        NodeData::Document => NodeData::Document,
        NodeData::Doctype {
            name,
            public_id,
            system_id,
        } => NodeData::Doctype {
            name: name.clone(),
            public_id: public_id.clone(),
            system_id: system_id.clone(),
        },
        NodeData::Text { contents } => NodeData::Text {
            contents: RefCell::new(contents.borrow().clone()),
        },
        NodeData::Comment { contents } => NodeData::Comment {
            contents: contents.clone(),
        },
        NodeData::Element { name, attrs, .. } => NodeData::Element {
            name: name.clone(),
            attrs: RefCell::new(attrs.borrow().clone()),
            template_contents: RefCell::new(None),
            mathml_annotation_xml_integration_point: false,
        },
        NodeData::ProcessingInstruction { target, contents } => {
            NodeData::ProcessingInstruction {
                target: target.clone(),
                contents: contents.clone(),
            }
        }
    };

    let copy = Node::new(data);
    for child in handle.children.borrow().iter() {
        let child_copy = deep_copy(child);
        child_copy.parent.set(Some(Rc::downgrade(&copy)));
        copy.children.borrow_mut().push(child_copy);
    }
    copy
}
