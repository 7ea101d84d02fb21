//! Identifier validation over the source document.

use reweave_xml::{elements_by_tag, Document, NodeId, ParseInfo};

use crate::error::ExpressionError;

/// Confirms every element of the given types carries its identity attribute.
///
/// Element types are checked in the order given. For each type: the parse
/// configuration must name an identity attribute; then every element of the
/// type in scope is scanned for a *missing* attribute, and only once that
/// scan is clean, for an *empty* one. The first offender is cited as its
/// start tag. Runs before group construction so malformed identifiers are
/// reported ahead of duplicate detection.
///
/// # Errors
///
/// [`ExpressionError::UnconfiguredIdentity`] when the configuration names no
/// identity attribute for a type, [`ExpressionError::MissingIdentity`] and
/// [`ExpressionError::EmptyIdentity`] for offending elements.
pub fn validate_identifiers(
    document: &Document,
    scope: NodeId,
    elements: &[&str],
    parse_info: &ParseInfo,
) -> Result<(), ExpressionError> {
    for element in elements {
        let id = parse_info
            .element(element)
            .and_then(|info| info.id.as_deref())
            .filter(|id| !id.is_empty())
            .ok_or_else(|| ExpressionError::UnconfiguredIdentity {
                element: (*element).to_string(),
            })?;

        let nodes = elements_by_tag(document, scope, element);
        if let Some(&node) = nodes
            .iter()
            .find(|&&node| document.attribute(node, id).is_none())
        {
            return Err(ExpressionError::MissingIdentity {
                element: (*element).to_string(),
                id: id.to_string(),
                first: document.describe(node),
            });
        }
        if let Some(&node) = nodes
            .iter()
            .find(|&&node| document.attribute(node, id) == Some(""))
        {
            return Err(ExpressionError::EmptyIdentity {
                element: (*element).to_string(),
                id: id.to_string(),
                first: document.describe(node),
            });
        }
    }
    Ok(())
}
