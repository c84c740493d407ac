//! XML parsing
//!
//! Reads descriptor text with `roxmltree` and converts it to owned [`Element`] trees.
//! DTDs are rejected by the parser.

use roxmltree::{Document, Node};

use crate::domain::entities::Element;
use crate::domain::value_objects::SchemaViolation;
use crate::error::{LayersError, LayersResult};

/// Deeper documents are rejected before conversion.
pub const MAX_DEPTH: usize = 32;

pub fn parse_document(text: &str) -> LayersResult<Element> {
    let document = Document::parse(text)?;
    let root = document.root_element();
    convert(root, &format!("/{}", root.tag_name().name()), 1)
}

fn convert(node: Node<'_, '_>, path: &str, depth: usize) -> LayersResult<Element> {
    if depth > MAX_DEPTH {
        return Err(LayersError::InvalidConfiguration {
            source: SchemaViolation::TooDeep {
                path: path.to_string(),
                limit: MAX_DEPTH,
            },
        });
    }

    let tag = node.tag_name();
    let mut element = Element::new(tag.name());
    if let Some(namespace) = tag.namespace() {
        element = element.with_namespace(namespace);
    }

    for attribute in node.attributes() {
        element = match attribute.namespace() {
            Some(namespace) => {
                element.with_namespaced_attribute(namespace, attribute.name(), attribute.value())
            }
            None => element.with_attribute(attribute.name(), attribute.value()),
        };
    }

    for child in node.children() {
        if child.is_element() {
            let child_path = format!("{path}/{}", child.tag_name().name());
            element = element.with_child(convert(child, &child_path, depth + 1)?);
        } else if child.is_text() {
            if let Some(text) = child.text() {
                element = element.with_text(text);
            }
        }
    }

    Ok(element)
}
