use std::fmt;
use thiserror::Error as ThisError;

///
/// InternalError
///
/// Structured oracle error with a stable classification.
/// Every failure raised by set dispatch, graph construction, property bags
/// and comparisons is carried by this type.
///

#[derive(Debug, ThisError)]
#[error("{message}")]
pub struct InternalError {
    pub class: ErrorClass,
    pub origin: ErrorOrigin,
    pub message: String,

    /// Optional structured error detail.
    /// The variant (if present) must correspond to `origin`.
    pub detail: Option<ErrorDetail>,
}

impl InternalError {
    /// Construct an InternalError without detail.
    pub fn new(class: ErrorClass, origin: ErrorOrigin, message: impl Into<String>) -> Self {
        Self {
            class,
            origin,
            message: message.into(),
            detail: None,
        }
    }

    /// Construct a graph-origin invariant violation.
    pub fn graph_invariant(message: impl Into<String>) -> Self {
        Self::new(
            ErrorClass::InvariantViolation,
            ErrorOrigin::Graph,
            message.into(),
        )
    }

    /// Construct a set-origin invariant violation.
    pub(crate) fn set_invariant(message: impl Into<String>) -> Self {
        Self::new(
            ErrorClass::InvariantViolation,
            ErrorOrigin::Set,
            message.into(),
        )
    }

    /// Construct a serialize-origin internal error.
    pub fn serialize_internal(message: impl Into<String>) -> Self {
        Self::new(
            ErrorClass::InvariantViolation,
            ErrorOrigin::Serialize,
            message.into(),
        )
    }

    /// Construct a standardized unsupported-entity-type error.
    pub fn unsupported_entity_type(data_source: &'static str, entity: &'static str) -> Self {
        SetError::UnsupportedEntityType {
            data_source,
            entity,
        }
        .into()
    }

    #[must_use]
    pub const fn is_unsupported(&self) -> bool {
        matches!(self.class, ErrorClass::Unsupported)
    }

    #[must_use]
    pub const fn set_detail(&self) -> Option<&SetError> {
        match &self.detail {
            Some(ErrorDetail::Set(err)) => Some(err),
            _ => None,
        }
    }

    #[must_use]
    pub const fn graph_detail(&self) -> Option<&GraphError> {
        match &self.detail {
            Some(ErrorDetail::Graph(err)) => Some(err),
            _ => None,
        }
    }

    #[must_use]
    pub const fn property_detail(&self) -> Option<&PropertyError> {
        match &self.detail {
            Some(ErrorDetail::Property(err)) => Some(err),
            _ => None,
        }
    }

    #[must_use]
    pub const fn compare_detail(&self) -> Option<&CompareError> {
        match &self.detail {
            Some(ErrorDetail::Compare(err)) => Some(err),
            _ => None,
        }
    }

    #[must_use]
    pub fn display_with_class(&self) -> String {
        format!("{}:{}: {}", self.origin, self.class, self.message)
    }

    fn from_detail(class: ErrorClass, origin: ErrorOrigin, detail: ErrorDetail) -> Self {
        Self {
            class,
            origin,
            message: detail.to_string(),
            detail: Some(detail),
        }
    }
}

///
/// ErrorDetail
///
/// Structured, origin-specific error detail carried by [`InternalError`].
///

#[derive(Debug, ThisError)]
pub enum ErrorDetail {
    #[error("{0}")]
    Set(SetError),
    #[error("{0}")]
    Graph(GraphError),
    #[error("{0}")]
    Property(PropertyError),
    #[error("{0}")]
    Compare(CompareError),
}

///
/// SetError
///
/// Failures raised by the typed set accessor and its registry.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum SetError {
    #[error("unsupported entity type '{entity}' requested from '{data_source}'")]
    UnsupportedEntityType {
        data_source: &'static str,
        entity: &'static str,
    },

    #[error("set for '{entity}' already registered on '{data_source}'")]
    AlreadyRegistered {
        data_source: &'static str,
        entity: &'static str,
    },
}

impl SetError {
    const fn class(&self) -> ErrorClass {
        match self {
            Self::UnsupportedEntityType { .. } => ErrorClass::Unsupported,
            Self::AlreadyRegistered { .. } => ErrorClass::InvariantViolation,
        }
    }
}

impl From<SetError> for InternalError {
    fn from(err: SetError) -> Self {
        Self::from_detail(err.class(), ErrorOrigin::Set, ErrorDetail::Set(err))
    }
}

///
/// GraphError
///
/// Inconsistencies detected while building or wiring an oracle graph.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum GraphError {
    #[error("dangling link into '{entity}': index {index} is outside an arena of {len}")]
    DanglingLink {
        entity: &'static str,
        index: usize,
        len: usize,
    },

    #[error("duplicate key {key} in '{entity}'")]
    DuplicateKey { entity: &'static str, key: String },

    #[error("model of '{entity}' is invalid: {reason}")]
    InvalidModel { entity: &'static str, reason: String },

    #[error("relation '{relation}' on '{entity}' was never wired")]
    UnwiredLink {
        entity: &'static str,
        relation: &'static str,
    },
}

impl From<GraphError> for InternalError {
    fn from(err: GraphError) -> Self {
        Self::from_detail(
            ErrorClass::InvariantViolation,
            ErrorOrigin::Graph,
            ErrorDetail::Graph(err),
        )
    }
}

///
/// PropertyError
///
/// Rejections raised by indexer property bags.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum PropertyError {
    #[error("unknown indexer property '{property}' on '{entity}'")]
    UnknownProperty {
        entity: &'static str,
        property: String,
    },

    #[error("indexer property '{property}' on '{entity}' expects {expected}, got {found}")]
    KindMismatch {
        entity: &'static str,
        property: &'static str,
        expected: &'static str,
        found: &'static str,
    },
}

impl PropertyError {
    const fn class(&self) -> ErrorClass {
        match self {
            Self::UnknownProperty { .. } => ErrorClass::NotFound,
            Self::KindMismatch { .. } => ErrorClass::Mismatch,
        }
    }
}

impl From<PropertyError> for InternalError {
    fn from(err: PropertyError) -> Self {
        Self::from_detail(err.class(), ErrorOrigin::Property, ErrorDetail::Property(err))
    }
}

///
/// CompareError
///
/// Divergences between an expected oracle sequence and an actual sequence.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum CompareError {
    #[error("nullability doesn't match for '{entity}': expected {expected}, actual {actual}")]
    NullabilityMismatch {
        entity: &'static str,
        expected: &'static str,
        actual: &'static str,
    },

    #[error("count mismatch for '{entity}': expected {expected}, actual {actual}")]
    CountMismatch {
        entity: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("element {index} of '{entity}' differs: expected {expected}, actual {actual}")]
    ElementMismatch {
        entity: &'static str,
        index: usize,
        expected: String,
        actual: String,
    },

    #[error("an element sorter cannot be combined with an ordered comparison of '{entity}'")]
    SorterWithOrder { entity: &'static str },
}

impl CompareError {
    const fn class(&self) -> ErrorClass {
        match self {
            Self::SorterWithOrder { .. } => ErrorClass::InvariantViolation,
            _ => ErrorClass::Mismatch,
        }
    }
}

impl From<CompareError> for InternalError {
    fn from(err: CompareError) -> Self {
        Self::from_detail(err.class(), ErrorOrigin::Compare, ErrorDetail::Compare(err))
    }
}

///
/// ErrorClass
/// Error taxonomy for oracle failures.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorClass {
    Unsupported,
    InvariantViolation,
    NotFound,
    Mismatch,
}

impl fmt::Display for ErrorClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Unsupported => "unsupported",
            Self::InvariantViolation => "invariant_violation",
            Self::NotFound => "not_found",
            Self::Mismatch => "mismatch",
        };
        write!(f, "{label}")
    }
}

///
/// ErrorOrigin
/// Origin taxonomy for oracle failures.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorOrigin {
    Set,
    Graph,
    Property,
    Compare,
    Serialize,
}

impl fmt::Display for ErrorOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Set => "set",
            Self::Graph => "graph",
            Self::Property => "property",
            Self::Compare => "compare",
            Self::Serialize => "serialize",
        };
        write!(f, "{label}")
    }
}
