//! Recursive pattern composition and evaluation.

use std::sync::OnceLock;

use regex::Regex;

use crate::error::ExpressionError;
use crate::expression::{Evaluation, Expression, ExpressionDictionary, Pattern};

/// Matches a named capture group opener in composed text, e.g. `?<year>`.
/// Group identifiers are letters only.
const CAPTURE_GROUP_PATTERN: &str = r"\?<(?<group>[A-Za-z]+)>";

static CAPTURE_GROUP_REGEX: OnceLock<Regex> = OnceLock::new();

fn capture_group_regex() -> &'static Regex {
    CAPTURE_GROUP_REGEX
        .get_or_init(|| Regex::new(CAPTURE_GROUP_PATTERN).expect("capture group pattern is valid"))
}

/// Evaluates the named expression against the dictionary.
///
/// Patterns resolve left to right: literal text is emitted verbatim, and a
/// link substitutes the linked expression's composed source text, recursing
/// with a seen-set that detects reference cycles. The concatenated text is
/// compiled and returned together with the named capture groups it contains
/// and the composed example text.
///
/// The dictionary entry is never mutated; the returned [`Evaluation`] holds
/// a copy of the definition, so repeated calls are independent and
/// deterministic.
///
/// # Errors
///
/// [`ExpressionError::UnspecifiedName`] for an empty name;
/// [`ExpressionError::NotFound`] for an unknown one;
/// [`ExpressionError::NoPatterns`], [`ExpressionError::AmbiguousPattern`],
/// and [`ExpressionError::EmptyPattern`] for malformed definitions;
/// [`ExpressionError::CircularReference`] when links revisit an expression
/// on the current path; [`ExpressionError::InvalidPattern`] when the
/// composed text fails to compile.
pub fn evaluate(
    name: &str,
    dictionary: &ExpressionDictionary,
) -> Result<Evaluation, ExpressionError> {
    evaluate_with_seen(name, dictionary, &[])
}

fn evaluate_with_seen(
    name: &str,
    dictionary: &ExpressionDictionary,
    previously_seen: &[String],
) -> Result<Evaluation, ExpressionError> {
    if name.is_empty() {
        return Err(ExpressionError::UnspecifiedName);
    }
    let expression = dictionary
        .get(name)
        .ok_or_else(|| ExpressionError::NotFound {
            name: name.to_string(),
        })?;
    let patterns: Vec<&Pattern> = expression.patterns().collect();
    if patterns.is_empty() {
        return Err(ExpressionError::NoPatterns {
            name: name.to_string(),
        });
    }

    let mut source = String::new();
    for pattern in &patterns {
        match (pattern.text.as_deref(), pattern.link.as_deref()) {
            (Some(_), Some(_)) => {
                return Err(ExpressionError::AmbiguousPattern {
                    name: name.to_string(),
                })
            }
            (Some(text), None) => source.push_str(text),
            (None, Some(link)) => {
                if previously_seen.iter().any(|seen| seen == link) {
                    return Err(ExpressionError::CircularReference {
                        link: link.to_string(),
                    });
                }
                // The current expression joins the path; sibling links each
                // extend their own copy.
                let mut seen = previously_seen.to_vec();
                seen.push(name.to_string());
                let linked = evaluate_with_seen(link, dictionary, &seen)?;
                source.push_str(linked.source());
            }
            (None, None) => {
                return Err(ExpressionError::EmptyPattern {
                    name: name.to_string(),
                })
            }
        }
    }

    let regex = Regex::new(&source).map_err(|error| ExpressionError::InvalidPattern {
        name: name.to_string(),
        pattern: source.clone(),
        source: error,
    })?;

    Ok(Evaluation {
        definition: expression.clone(),
        named_groups: named_groups_in(&source),
        eg: compose_example(expression, &patterns),
        regex,
    })
}

/// Scans composed text for named capture groups, in first-occurrence order.
///
/// Duplicates are kept; zero matches yields `None` rather than an empty
/// vector.
fn named_groups_in(source: &str) -> Option<Vec<String>> {
    let groups: Vec<String> = capture_group_regex()
        .captures_iter(source)
        .filter_map(|captures| captures.name("group"))
        .map(|group| group.as_str().to_string())
        .collect();
    if groups.is_empty() {
        None
    } else {
        Some(groups)
    }
}

/// The definition's own example wins; otherwise pattern examples concatenate
/// in order.
fn compose_example(expression: &Expression, patterns: &[&Pattern]) -> String {
    match &expression.eg {
        Some(eg) => eg.clone(),
        None => patterns
            .iter()
            .filter_map(|pattern| pattern.eg.as_deref())
            .collect(),
    }
}
