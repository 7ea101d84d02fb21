//! Dictionary construction: group loading and namespace normalization.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use serde_json::Value;

use reweave_xml::{
    build, element_by_id, elements_by_tag, labels, DescendantsInfo, Document, ElementInfo, NodeId,
    ParseInfo,
};

use crate::error::ExpressionError;
use crate::expression::{
    Expression, ExpressionDictionary, EXPRESSION_ELEMENT, GROUP_ELEMENT, ID_ATTRIBUTE,
};
use crate::validate::validate_identifiers;

static PARSE_INFO: OnceLock<ParseInfo> = OnceLock::new();

/// The conversion configuration this crate supplies to the converter.
///
/// `<Expressions>` groups are identified by `name` and index their children
/// by `name`, strictly: a child without the attribute, or a name repeated
/// within the group, fails the conversion. `<Expression>` definitions are
/// identified by `name`.
pub fn parse_info() -> &'static ParseInfo {
    PARSE_INFO.get_or_init(|| ParseInfo {
        elements: BTreeMap::from([
            (
                GROUP_ELEMENT.to_string(),
                ElementInfo {
                    id: Some(ID_ATTRIBUTE.to_string()),
                    descendants: Some(DescendantsInfo {
                        id: ID_ATTRIBUTE.to_string(),
                        throw_if_collision: true,
                        throw_if_missing: true,
                    }),
                },
            ),
            (
                EXPRESSION_ELEMENT.to_string(),
                ElementInfo {
                    id: Some(ID_ATTRIBUTE.to_string()),
                    descendants: None,
                },
            ),
        ]),
    })
}

/// Loads every expression group under `scope` into one flat dictionary.
///
/// Identifier validation runs first, then each named group is converted to
/// its structural representation in document order, and finally the groups
/// are flattened into a single namespace.
///
/// # Errors
///
/// Identifier failures from [`validate_identifiers`];
/// [`ExpressionError::NoGroups`] when the scope has no named groups;
/// [`ExpressionError::DuplicateGroup`] when two groups share a name;
/// [`ExpressionError::DuplicateExpressions`] when an expression name appears
/// in more than one group; converter failures propagate unchanged.
pub fn build_expressions(
    document: &Document,
    scope: NodeId,
) -> Result<ExpressionDictionary, ExpressionError> {
    validate_identifiers(
        document,
        scope,
        &[EXPRESSION_ELEMENT, GROUP_ELEMENT],
        parse_info(),
    )?;

    let group_nodes: Vec<NodeId> = elements_by_tag(document, scope, GROUP_ELEMENT)
        .into_iter()
        .filter(|&node| document.attribute(node, ID_ATTRIBUTE).is_some())
        .collect();
    if group_nodes.is_empty() {
        return Err(ExpressionError::NoGroups);
    }

    // Encounter order, so collision reporting follows the document.
    let mut groups: Vec<(String, Value)> = Vec::new();
    for node in group_nodes {
        let Some(group_name) = document.attribute(node, ID_ATTRIBUTE) else {
            continue;
        };
        if groups.iter().any(|(name, _)| name == group_name) {
            return Err(ExpressionError::DuplicateGroup {
                group: group_name.to_string(),
            });
        }
        let representation = build_expression_group(document, scope, group_name)?;
        groups.push((group_name.to_string(), representation));
    }

    normalize(&groups)
}

/// Builds the structural representation of the named group under `scope`.
///
/// # Errors
///
/// [`ExpressionError::GroupNotFound`] when no group carries the name;
/// converter failures propagate unchanged.
pub fn build_expression_group(
    document: &Document,
    scope: NodeId,
    group_name: &str,
) -> Result<Value, ExpressionError> {
    let node = element_by_id(document, scope, GROUP_ELEMENT, ID_ATTRIBUTE, group_name)
        .ok_or_else(|| ExpressionError::GroupNotFound {
            group: group_name.to_string(),
        })?;
    Ok(build(document, node, parse_info())?)
}

/// Flattens per-group representations into one global namespace.
fn normalize(groups: &[(String, Value)]) -> Result<ExpressionDictionary, ExpressionError> {
    let mut dictionary = ExpressionDictionary::new();
    for (_, representation) in groups {
        let Some(entries) = representation
            .get(labels::DESCENDANTS)
            .and_then(Value::as_object)
        else {
            // An empty group contributes nothing.
            continue;
        };
        let collisions: Vec<&str> = entries
            .keys()
            .filter(|name| dictionary.contains_key(name.as_str()))
            .map(String::as_str)
            .collect();
        if !collisions.is_empty() {
            return Err(ExpressionError::DuplicateExpressions {
                names: collisions.join(", "),
            });
        }
        for (name, value) in entries {
            dictionary.insert(name.clone(), Expression::from_structural(name, value));
        }
    }
    Ok(dictionary)
}
