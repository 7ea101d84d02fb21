//! Error types for XML parsing and structural conversion.

use thiserror::Error;

/// Top-level error type for document parsing and conversion.
#[derive(Debug, Error)]
pub enum XmlError {
    /// The underlying XML reader rejected the input.
    #[error("malformed XML: {0}")]
    Parse(#[from] quick_xml::Error),

    /// An element carried a malformed attribute.
    #[error("malformed XML attribute: {0}")]
    Attribute(#[from] quick_xml::events::attributes::AttrError),

    /// A closing tag appeared that does not match the open element.
    #[error("unmatched closing tag </{0}>")]
    UnmatchedClose(String),

    /// The document contained no root element.
    #[error("document has no root element")]
    NoRoot,

    /// An indexed descendant is missing the attribute it must be keyed by.
    #[error("<{element}> is missing the \"{id}\" attribute required for indexing")]
    UnidentifiedDescendant {
        /// Element name of the offending child.
        element: String,
        /// The attribute the parent's descendants are keyed by.
        id: String,
    },

    /// Two indexed descendants share the same key.
    #[error("duplicate <{element}> with {id}=\"{value}\"")]
    DuplicateDescendant {
        /// Element name of the offending child.
        element: String,
        /// The attribute the parent's descendants are keyed by.
        id: String,
        /// The colliding key value.
        value: String,
    },
}
