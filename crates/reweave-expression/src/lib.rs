//! Reweave Expression Dictionary
//!
//! This crate loads a declarative, XML-authored dictionary of named regular
//! expressions and evaluates entries on demand. Expressions are composed of
//! ordered `<Pattern>` fragments holding either literal regex text or a link
//! to another expression, so common fragments are written once and reused;
//! evaluation recursively resolves links with cycle detection, compiles the
//! composed text, and derives the named capture groups and example text.
//!
//! # Overview
//!
//! Loading runs in three stages over a parsed [`reweave_xml::Document`]:
//!
//! - **Identifier validation**: every `<Expression>` and `<Expressions>`
//!   element must carry a non-empty `name` attribute.
//! - **Group loading**: each `<Expressions>` group is converted to its
//!   structural representation; group names must be unique.
//! - **Normalization**: groups flatten into one global name → definition
//!   dictionary; an expression name may appear in only one group.
//!
//! [`evaluate`] then works purely on the dictionary: definitions stay
//! immutable, results carry copies, and repeated calls are deterministic.
//!
//! # Example
//!
//! ```
//! use reweave_expression::{build_expressions, evaluate};
//! use reweave_xml::Document;
//!
//! let document = Document::parse(
//!     r#"<Application>
//!          <Expressions name="date-expressions">
//!            <Expression name="year-expression" eg="2026">
//!              <Pattern><![CDATA[(?<year>[0-9]{4})]]></Pattern>
//!            </Expression>
//!            <Expression name="month-day-expression">
//!              <Pattern link="year-expression"/>
//!              <Pattern eg="-08-25"><![CDATA[-(?<mm>[0-9]{2})-(?<dd>[0-9]{2})]]></Pattern>
//!            </Expression>
//!          </Expressions>
//!        </Application>"#,
//! )
//! .unwrap();
//!
//! let dictionary = build_expressions(&document, document.root()).unwrap();
//! let evaluation = evaluate("month-day-expression", &dictionary).unwrap();
//!
//! assert_eq!(
//!     evaluation.source(),
//!     "(?<year>[0-9]{4})-(?<mm>[0-9]{2})-(?<dd>[0-9]{2})"
//! );
//! assert_eq!(
//!     evaluation.named_groups,
//!     Some(vec!["year".to_string(), "mm".to_string(), "dd".to_string()])
//! );
//! assert_eq!(evaluation.eg, "-08-25");
//! assert!(evaluation.regex.is_match("2026-08-25"));
//! ```
//!
//! # Modules
//!
//! - [`expression`]: Definitions, patterns, dictionaries, evaluation results
//! - [`builder`]: Group loading and namespace normalization
//! - [`validate`]: Identifier validation
//! - [`evaluate`](mod@evaluate): Recursive composition and compilation
//! - [`error`]: Error types and taxonomy kinds

pub mod builder;
pub mod error;
pub mod evaluate;
pub mod expression;
pub mod validate;

// Re-export commonly used types at the crate root
pub use builder::{build_expression_group, build_expressions, parse_info};
pub use error::{ErrorKind, ExpressionError};
pub use evaluate::evaluate;
pub use expression::{
    Evaluation, Expression, ExpressionChild, ExpressionDictionary, Pattern, EG_ATTRIBUTE,
    EXPRESSION_ELEMENT, GROUP_ELEMENT, ID_ATTRIBUTE, LINK_ATTRIBUTE, PATTERN_ELEMENT,
};
pub use validate::validate_identifiers;
