//! Core data model: expression definitions, patterns, and evaluation results.

use std::collections::BTreeMap;

use regex::Regex;
use serde::Serialize;
use serde_json::Value;

use reweave_xml::labels;

/// Element name of an expression group container.
pub const GROUP_ELEMENT: &str = "Expressions";
/// Element name of an expression definition.
pub const EXPRESSION_ELEMENT: &str = "Expression";
/// Element name of a pattern fragment.
pub const PATTERN_ELEMENT: &str = "Pattern";
/// Attribute that identifies groups and expressions.
pub const ID_ATTRIBUTE: &str = "name";
/// Attribute on a pattern naming the expression it links to.
pub const LINK_ATTRIBUTE: &str = "link";
/// Attribute carrying example text.
pub const EG_ATTRIBUTE: &str = "eg";

/// All expressions from every group, keyed by name.
pub type ExpressionDictionary = BTreeMap<String, Expression>;

/// A named regular-expression fragment definition.
///
/// Definitions are immutable once loaded; evaluation works on copies and
/// never mutates a dictionary entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Expression {
    /// The unique name, global across all groups.
    pub name: String,

    /// Literal example text. When present it overrides the example composed
    /// from pattern fragments.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eg: Option<String>,

    /// Ordered children as authored. Non-pattern children ride along
    /// opaquely and are never interpreted.
    pub children: Vec<ExpressionChild>,
}

/// One child element of an expression definition.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ExpressionChild {
    /// A `<Pattern>` fragment.
    Pattern(Pattern),
    /// Any other child element, preserved structurally.
    Other(Value),
}

/// One fragment of an expression's composed text.
///
/// Exactly one of `text` and `link` must be set; evaluation rejects patterns
/// carrying both or neither.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Pattern {
    /// Literal regular-expression text, emitted verbatim.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    /// Name of another expression whose composed source is substituted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,

    /// Example text contributed to the composed example.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eg: Option<String>,
}

impl Expression {
    /// Creates a definition with the given name and pattern children.
    pub fn new(name: impl Into<String>, patterns: Vec<Pattern>) -> Self {
        Self {
            name: name.into(),
            eg: None,
            children: patterns.into_iter().map(ExpressionChild::Pattern).collect(),
        }
    }

    /// Overrides the composed example with literal text.
    pub fn with_eg(mut self, eg: impl Into<String>) -> Self {
        self.eg = Some(eg.into());
        self
    }

    /// Builds a typed definition from a structural object.
    ///
    /// `<Pattern>` children become [`ExpressionChild::Pattern`]; everything
    /// else becomes [`ExpressionChild::Other`]. Shapes this function does
    /// not recognise degrade to a definition with no patterns, which
    /// evaluation reports against the owning name.
    pub fn from_structural(name: &str, value: &Value) -> Self {
        let children = value
            .get(labels::DESCENDANTS)
            .and_then(Value::as_array)
            .map(|items| items.iter().map(ExpressionChild::from_structural).collect())
            .unwrap_or_default();
        Self {
            name: name.to_string(),
            eg: attribute(value, EG_ATTRIBUTE),
            children,
        }
    }

    /// The `<Pattern>` children in authored order.
    pub fn patterns(&self) -> impl Iterator<Item = &Pattern> {
        self.children.iter().filter_map(|child| match child {
            ExpressionChild::Pattern(pattern) => Some(pattern),
            ExpressionChild::Other(_) => None,
        })
    }
}

impl ExpressionChild {
    fn from_structural(value: &Value) -> Self {
        let element = value.get(labels::ELEMENT).and_then(Value::as_str);
        if element == Some(PATTERN_ELEMENT) {
            ExpressionChild::Pattern(Pattern {
                text: value
                    .get(labels::TEXT)
                    .and_then(Value::as_str)
                    .map(str::to_string),
                link: attribute(value, LINK_ATTRIBUTE),
                eg: attribute(value, EG_ATTRIBUTE),
            })
        } else {
            ExpressionChild::Other(value.clone())
        }
    }
}

impl Pattern {
    /// A literal text fragment.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            link: None,
            eg: None,
        }
    }

    /// A link to another expression.
    pub fn link(link: impl Into<String>) -> Self {
        Self {
            text: None,
            link: Some(link.into()),
            eg: None,
        }
    }

    /// Attaches example text to this fragment.
    pub fn with_eg(mut self, eg: impl Into<String>) -> Self {
        self.eg = Some(eg.into());
        self
    }
}

/// The outcome of evaluating an expression.
///
/// Holds a copy of the definition plus the derived fields; the dictionary
/// entry itself is left untouched.
#[derive(Debug)]
pub struct Evaluation {
    /// A copy of the evaluated definition.
    pub definition: Expression,

    /// The compiled composed text. `regex.as_str()` is the composed source.
    pub regex: Regex,

    /// Named capture groups found in the composed text, in first-occurrence
    /// order, duplicates included. `None` when the text has none.
    pub named_groups: Option<Vec<String>>,

    /// Example text: the definition's own `eg`, or pattern examples
    /// concatenated in order. Empty when nothing contributes.
    pub eg: String,
}

impl Evaluation {
    /// The composed regular-expression source text.
    pub fn source(&self) -> &str {
        self.regex.as_str()
    }
}

fn attribute(value: &Value, name: &str) -> Option<String> {
    value.get(name).and_then(Value::as_str).map(str::to_string)
}
