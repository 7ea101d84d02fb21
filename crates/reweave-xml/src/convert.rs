//! XML to structural object conversion.
//!
//! [`build`] renders an element subtree as a [`serde_json::Value`] object so
//! downstream code can work with plain data instead of a DOM. The rendition
//! uses three reserved labels:
//!
//! - `"_"`: the element name,
//! - `"_text"`: the element's composed text, present only when the element
//!   had text or CDATA content,
//! - `"_children"`: the element children, either a JSON array in document
//!   order or a JSON object keyed by an identifying attribute when the
//!   element's type is configured for indexed descendants in the supplied
//!   [`ParseInfo`].
//!
//! Attribute values become JSON strings verbatim; nothing is coerced to
//! numbers or booleans, since callers in this workspace consume textual
//! fields only and coercion would corrupt names such as `007-expression`.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::dom::{Document, NodeId};
use crate::error::XmlError;

/// Reserved labels used in the structural rendition.
pub mod labels {
    /// Key holding the element name.
    pub const ELEMENT: &str = "_";
    /// Key holding the element's composed text.
    pub const TEXT: &str = "_text";
    /// Key holding the element's children.
    pub const DESCENDANTS: &str = "_children";
}

/// Per-element-type conversion configuration, keyed by element name.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ParseInfo {
    /// Configuration per element name.
    pub elements: BTreeMap<String, ElementInfo>,
}

impl ParseInfo {
    /// The configuration for elements named `tag`, if any.
    pub fn element(&self, tag: &str) -> Option<&ElementInfo> {
        self.elements.get(tag)
    }
}

/// Conversion configuration for one element type.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ElementInfo {
    /// Name of the attribute that identifies elements of this type.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// When set, children of this element type are indexed into an object
    /// instead of collected into an array.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub descendants: Option<DescendantsInfo>,
}

/// Indexing configuration for an element type's children.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct DescendantsInfo {
    /// Name of the attribute children are keyed by.
    pub id: String,

    /// Fail when two children share a key; otherwise the first wins.
    #[serde(default)]
    pub throw_if_collision: bool,

    /// Fail when a child lacks the key attribute; otherwise it is skipped.
    #[serde(default)]
    pub throw_if_missing: bool,
}

/// Renders the subtree rooted at `node` as a structural object.
///
/// # Errors
///
/// Fails when an indexed child lacks its key attribute (with
/// `throw_if_missing`) or collides with an earlier key (with
/// `throw_if_collision`).
pub fn build(document: &Document, node: NodeId, info: &ParseInfo) -> Result<Value, XmlError> {
    let tag = document.tag(node);
    let mut object = Map::new();
    object.insert(
        labels::ELEMENT.to_string(),
        Value::String(tag.to_string()),
    );
    for (key, value) in document.attributes(node) {
        object.insert(key.clone(), Value::String(value.clone()));
    }
    if let Some(text) = document.text(node) {
        object.insert(labels::TEXT.to_string(), Value::String(text.to_string()));
    }

    let children = document.children(node);
    if !children.is_empty() {
        let indexing = info.element(tag).and_then(|element| element.descendants.as_ref());
        let built = match indexing {
            Some(descendants) => build_indexed(document, children, descendants, info)?,
            None => Value::Array(
                children
                    .iter()
                    .map(|&child| build(document, child, info))
                    .collect::<Result<Vec<_>, _>>()?,
            ),
        };
        object.insert(labels::DESCENDANTS.to_string(), built);
    }

    Ok(Value::Object(object))
}

fn build_indexed(
    document: &Document,
    children: &[NodeId],
    descendants: &DescendantsInfo,
    info: &ParseInfo,
) -> Result<Value, XmlError> {
    let mut indexed = Map::new();
    for &child in children {
        let key = match document.attribute(child, &descendants.id) {
            Some(key) => key.to_string(),
            None if descendants.throw_if_missing => {
                return Err(XmlError::UnidentifiedDescendant {
                    element: document.tag(child).to_string(),
                    id: descendants.id.clone(),
                })
            }
            None => continue,
        };
        if indexed.contains_key(&key) {
            if descendants.throw_if_collision {
                return Err(XmlError::DuplicateDescendant {
                    element: document.tag(child).to_string(),
                    id: descendants.id.clone(),
                    value: key,
                });
            }
            // First occurrence wins.
            continue;
        }
        indexed.insert(key, build(document, child, info)?);
    }
    Ok(Value::Object(indexed))
}
