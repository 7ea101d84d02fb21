//! Error types for expression loading, validation, and evaluation.

use thiserror::Error;

use reweave_xml::XmlError;

/// Broad classification of an [`ExpressionError`].
///
/// Callers that report failures mechanically (exit codes, JSON envelopes)
/// key off the kind rather than matching every variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The source document cannot express a dictionary at all.
    Configuration,
    /// An element failed identifier validation.
    Validation,
    /// A group or expression name is defined more than once.
    DuplicateDefinition,
    /// A requested expression does not exist.
    NotFound,
    /// A caller-supplied argument is unusable.
    InvalidArgument,
    /// An expression definition has no patterns to compose.
    MalformedExpression,
    /// A pattern carries both a link and literal text.
    AmbiguousPattern,
    /// A pattern carries neither a link nor literal text.
    MalformedPattern,
    /// Following links revisited an expression on the current path.
    CircularReference,
    /// The composed text is not a valid regular expression.
    InvalidPattern,
    /// The structural converter rejected the source document.
    Conversion,
}

impl ErrorKind {
    /// Returns the stable machine-readable code for this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::Configuration => "configuration",
            ErrorKind::Validation => "validation",
            ErrorKind::DuplicateDefinition => "duplicate-definition",
            ErrorKind::NotFound => "not-found",
            ErrorKind::InvalidArgument => "invalid-argument",
            ErrorKind::MalformedExpression => "malformed-expression",
            ErrorKind::AmbiguousPattern => "ambiguous-pattern",
            ErrorKind::MalformedPattern => "malformed-pattern",
            ErrorKind::CircularReference => "circular-reference",
            ErrorKind::InvalidPattern => "invalid-pattern",
            ErrorKind::Conversion => "conversion",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Top-level error type for dictionary construction and evaluation.
///
/// Every failure is raised synchronously to the immediate caller and carries
/// the name of the offending expression, element, or link. Nothing is
/// retried or recovered internally.
#[derive(Debug, Error)]
pub enum ExpressionError {
    /// The scope contains no named expression groups.
    #[error("bad configuration: no <{group}> groups found", group = crate::GROUP_ELEMENT)]
    NoGroups,

    /// A group requested by name does not exist in the scope.
    #[error("bad configuration: no <{element} name=\"{group}\"> found", element = crate::GROUP_ELEMENT)]
    GroupNotFound {
        /// The requested group name.
        group: String,
    },

    /// The parse configuration names no identity attribute for an element type.
    #[error("no identity attribute configured for <{element}> elements")]
    UnconfiguredIdentity {
        /// The element type being validated.
        element: String,
    },

    /// An element in scope lacks its identity attribute entirely.
    #[error("found at least one <{element}> without a \"{id}\" attribute, first: {first}")]
    MissingIdentity {
        /// The element type being validated.
        element: String,
        /// The identity attribute name.
        id: String,
        /// Start-tag rendering of the first offender.
        first: String,
    },

    /// An element in scope carries an empty identity attribute.
    #[error("found at least one <{element}> with an empty \"{id}\" attribute, first: {first}")]
    EmptyIdentity {
        /// The element type being validated.
        element: String,
        /// The identity attribute name.
        id: String,
        /// Start-tag rendering of the first offender.
        first: String,
    },

    /// Two groups in the same scope share a name.
    #[error("<{element}> group \"{group}\" already defined", element = crate::GROUP_ELEMENT)]
    DuplicateGroup {
        /// The repeated group name.
        group: String,
    },

    /// An expression name appears in more than one group.
    #[error("these expressions have already been defined: \"{names}\"")]
    DuplicateExpressions {
        /// Comma-separated colliding names.
        names: String,
    },

    /// The caller asked to evaluate an empty expression name.
    #[error("expression name not specified")]
    UnspecifiedName,

    /// The dictionary holds no expression with the requested name.
    #[error("expression (name=\"{name}\") not found")]
    NotFound {
        /// The requested expression name.
        name: String,
    },

    /// The expression has no pattern children to compose.
    #[error("expression (name=\"{name}\") does not contain any patterns")]
    NoPatterns {
        /// The owning expression name.
        name: String,
    },

    /// A pattern carries both a link and literal text.
    #[error("expression (name=\"{name}\") contains a pattern with both a link and text")]
    AmbiguousPattern {
        /// The owning expression name.
        name: String,
    },

    /// A pattern carries neither a link nor literal text.
    #[error("expression (name=\"{name}\") contains a pattern without a link or regex text")]
    EmptyPattern {
        /// The owning expression name.
        name: String,
    },

    /// Following links revisited an expression on the current path.
    #[error("circular reference detected: \"{link}\" has already been encountered")]
    CircularReference {
        /// The link that closed the cycle.
        link: String,
    },

    /// The composed text failed to compile.
    #[error("expression (name=\"{name}\") composed an invalid regular expression \"{pattern}\": {source}")]
    InvalidPattern {
        /// The owning expression name.
        name: String,
        /// The composed text that failed to compile.
        pattern: String,
        /// The compiler's rejection.
        source: regex::Error,
    },

    /// The source document could not be parsed or converted.
    #[error(transparent)]
    Xml(#[from] XmlError),
}

impl ExpressionError {
    /// Returns the broad classification of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            ExpressionError::NoGroups
            | ExpressionError::GroupNotFound { .. }
            | ExpressionError::UnconfiguredIdentity { .. } => ErrorKind::Configuration,
            ExpressionError::MissingIdentity { .. } | ExpressionError::EmptyIdentity { .. } => {
                ErrorKind::Validation
            }
            ExpressionError::DuplicateGroup { .. }
            | ExpressionError::DuplicateExpressions { .. } => ErrorKind::DuplicateDefinition,
            ExpressionError::UnspecifiedName => ErrorKind::InvalidArgument,
            ExpressionError::NotFound { .. } => ErrorKind::NotFound,
            ExpressionError::NoPatterns { .. } => ErrorKind::MalformedExpression,
            ExpressionError::AmbiguousPattern { .. } => ErrorKind::AmbiguousPattern,
            ExpressionError::EmptyPattern { .. } => ErrorKind::MalformedPattern,
            ExpressionError::CircularReference { .. } => ErrorKind::CircularReference,
            ExpressionError::InvalidPattern { .. } => ErrorKind::InvalidPattern,
            ExpressionError::Xml(_) => ErrorKind::Conversion,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_codes() {
        assert_eq!(ErrorKind::Configuration.as_str(), "configuration");
        assert_eq!(ErrorKind::CircularReference.as_str(), "circular-reference");
        assert_eq!(ErrorKind::DuplicateDefinition.as_str(), "duplicate-definition");
    }

    #[test]
    fn test_error_display() {
        let err = ExpressionError::NotFound {
            name: "forename-expression".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "expression (name=\"forename-expression\") not found"
        );
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }

    #[test]
    fn test_no_groups_display_names_group_element() {
        assert_eq!(
            ExpressionError::NoGroups.to_string(),
            "bad configuration: no <Expressions> groups found"
        );
    }

    #[test]
    fn test_circular_reference_display() {
        let err = ExpressionError::CircularReference {
            link: "surname-expression".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "circular reference detected: \"surname-expression\" has already been encountered"
        );
        assert_eq!(err.kind(), ErrorKind::CircularReference);
    }
}
