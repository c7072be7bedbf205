
use crate::model::EntityFieldKind;
use derive_more::Display;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use time::{Date, PrimitiveDateTime};

///
/// Value
///
/// Dynamically typed scalar carried by indexer property bags.
/// Variants line up with the scalar `EntityFieldKind`s.
///

#[derive(Clone, Debug, Deserialize, Display, Eq, PartialEq, Serialize)]
pub enum Value {
    #[display("null")]
    Null,
    #[display("{_0}")]
    Bool(bool),
    #[display("{_0}")]
    Date(Date),
    #[display("{_0}")]
    Decimal(Decimal),
    #[display("{_0}")]
    Enum(String),
    #[display("{_0}")]
    Int(i64),
    #[display("{_0:?}")]
    Text(String),
    #[display("{_0}")]
    Timestamp(PrimitiveDateTime),
}

impl Value {
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(v) => Some(*v),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(v) => Some(*v),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(v) | Self::Enum(v) => Some(v),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_timestamp(&self) -> Option<PrimitiveDateTime> {
        match self {
            Self::Timestamp(v) => Some(*v),
            _ => None,
        }
    }

    /// Stable lowercase label, shared with `EntityFieldKind::label`.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "bool",
            Self::Date(_) => "date",
            Self::Decimal(_) => "decimal",
            Self::Enum(_) => "enum",
            Self::Int(_) => "int",
            Self::Text(_) => "text",
            Self::Timestamp(_) => "timestamp",
        }
    }

    /// Whether this value can be stored in a field of `kind`.
    /// `Null` never matches; nullability is decided by the field model.
    #[must_use]
    pub const fn kind_matches(&self, kind: &EntityFieldKind) -> bool {
        matches!(
            (self, kind),
            (Self::Bool(_), EntityFieldKind::Bool)
                | (Self::Date(_), EntityFieldKind::Date)
                | (Self::Decimal(_), EntityFieldKind::Decimal)
                | (Self::Enum(_), EntityFieldKind::Enum)
                | (Self::Int(_), EntityFieldKind::Int)
                | (Self::Text(_), EntityFieldKind::Text)
                | (Self::Timestamp(_), EntityFieldKind::Timestamp)
        )
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Self::Int(v.into())
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

impl From<Decimal> for Value {
    fn from(v: Decimal) -> Self {
        Self::Decimal(v)
    }
}

impl From<Date> for Value {
    fn from(v: Date) -> Self {
        Self::Date(v)
    }
}

impl From<PrimitiveDateTime> for Value {
    fn from(v: PrimitiveDateTime) -> Self {
        Self::Timestamp(v)
    }
}

impl<T: Into<Self>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Self::Null, Into::into)
    }
}
