use std::fmt::{self, Display};

///
/// EntityFieldModel
/// Runtime field metadata used by property validation and diagnostics.
///

#[derive(Debug, Eq, PartialEq)]
pub struct EntityFieldModel {
    /// Field name as authored.
    pub name: &'static str,
    /// Runtime type shape.
    pub kind: EntityFieldKind,
    /// Whether the field models a relational NULL.
    pub nullable: bool,
}

impl EntityFieldModel {
    #[must_use]
    pub const fn new(name: &'static str, kind: EntityFieldKind) -> Self {
        Self {
            name,
            kind,
            nullable: false,
        }
    }

    #[must_use]
    pub const fn nullable(name: &'static str, kind: EntityFieldKind) -> Self {
        Self {
            name,
            kind,
            nullable: true,
        }
    }
}

///
/// EntityFieldKind
///
/// Minimal type surface of oracle fields.
/// Scalar kinds line up with `Value` variants; the relationship kinds name
/// the path of the target type.
///

#[derive(Debug, Eq, PartialEq)]
pub enum EntityFieldKind {
    // Scalars
    Bool,
    Date,
    Decimal,
    Enum,
    Int,
    Text,
    Timestamp,

    // Collections
    List(&'static Self),

    // Relationships
    Owned(&'static str),
    OwnedMany(&'static str),
    Reference(&'static str),
    ReferenceMany(&'static str),
}

impl EntityFieldKind {
    /// Stable lowercase label used in error messages.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Bool => "bool",
            Self::Date => "date",
            Self::Decimal => "decimal",
            Self::Enum => "enum",
            Self::Int => "int",
            Self::Text => "text",
            Self::Timestamp => "timestamp",
            Self::List(_) => "list",
            Self::Owned(_) => "owned",
            Self::OwnedMany(_) => "owned_many",
            Self::Reference(_) => "reference",
            Self::ReferenceMany(_) => "reference_many",
        }
    }

    /// Whether a `Value` of this kind can be held directly.
    #[must_use]
    pub const fn is_scalar(&self) -> bool {
        matches!(
            self,
            Self::Bool
                | Self::Date
                | Self::Decimal
                | Self::Enum
                | Self::Int
                | Self::Text
                | Self::Timestamp
        )
    }
}

impl Display for EntityFieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::List(inner) => write!(f, "list<{inner}>"),
            Self::Owned(path)
            | Self::OwnedMany(path)
            | Self::Reference(path)
            | Self::ReferenceMany(path) => write!(f, "{}({path})", self.label()),
            _ => f.write_str(self.label()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_nested_and_target_kinds() {
        static TEXT: EntityFieldKind = EntityFieldKind::Text;

        assert_eq!(EntityFieldKind::List(&TEXT).to_string(), "list<text>");
        assert_eq!(
            EntityFieldKind::ReferenceMany("owned::Moon").to_string(),
            "reference_many(owned::Moon)"
        );
        assert!(TEXT.is_scalar());
        assert!(!EntityFieldKind::List(&TEXT).is_scalar());
    }
}
