//! Indexer property bags.
//!
//! Some oracle types expose properties that are not plain struct fields and
//! are read through a string-keyed indexer (`person["Name"]`). A bag only
//! accepts the indexer properties its `EntityModel` declares.

use crate::{
    error::{InternalError, PropertyError},
    model::{EntityFieldModel, EntityModel},
    obs::sink::{self, MetricsEvent},
    traits::Modeled,
    value::Value,
};
use std::{collections::BTreeMap, fmt};

static NULL: Value = Value::Null;

///
/// PropertyBag
///

#[derive(Clone, Eq, PartialEq)]
pub struct PropertyBag {
    model: &'static EntityModel,
    values: BTreeMap<&'static str, Value>,
}

impl PropertyBag {
    #[must_use]
    pub const fn for_model(model: &'static EntityModel) -> Self {
        Self {
            model,
            values: BTreeMap::new(),
        }
    }

    /// Empty bag for the indexer properties of `T`.
    #[must_use]
    pub const fn of<T: Modeled>() -> Self {
        Self::for_model(T::MODEL)
    }

    /// Builder form of [`Self::set`].
    pub fn with(mut self, name: &str, value: impl Into<Value>) -> Result<Self, InternalError> {
        self.set(name, value)?;

        Ok(self)
    }

    /// Store a property value, validating the name and its kind.
    pub fn set(&mut self, name: &str, value: impl Into<Value>) -> Result<(), InternalError> {
        let value = value.into();
        let field = self.property(name)?;

        let accepted = if value.is_null() {
            field.nullable
        } else {
            value.kind_matches(&field.kind)
        };
        if !accepted {
            return Err(self.reject(PropertyError::KindMismatch {
                entity: self.model.path,
                property: field.name,
                expected: field.kind.label(),
                found: value.label(),
            }));
        }

        self.values.insert(field.name, value);

        Ok(())
    }

    /// Read a property; recognised but unset properties read as `Value::Null`.
    pub fn get(&self, name: &str) -> Result<&Value, InternalError> {
        let field = self.property(name)?;

        Ok(self.values.get(field.name).unwrap_or(&NULL))
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    #[must_use]
    pub const fn model(&self) -> &'static EntityModel {
        self.model
    }

    /// Iterate stored values in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &Value)> {
        self.values.iter().map(|(name, value)| (*name, value))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    fn property(&self, name: &str) -> Result<&'static EntityFieldModel, InternalError> {
        self.model.indexer_property(name).ok_or_else(|| {
            self.reject(PropertyError::UnknownProperty {
                entity: self.model.path,
                property: name.to_string(),
            })
        })
    }

    fn reject(&self, err: PropertyError) -> InternalError {
        sink::record(MetricsEvent::PropertyRejected {
            entity_path: self.model.path,
        });

        err.into()
    }
}

impl fmt::Debug for PropertyBag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.values.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        error::ErrorClass,
        test_support::{Gadget, Widget},
    };
    use proptest::prelude::*;

    #[test]
    fn set_then_get_round_trips_declared_property() {
        let bag = PropertyBag::of::<Widget>()
            .with("Label", "front")
            .expect("Label is declared");

        assert_eq!(bag.get("Label").expect("known").as_text(), Some("front"));
        assert_eq!(bag.len(), 1);
    }

    #[test]
    fn unset_property_reads_as_null() {
        let bag = PropertyBag::of::<Widget>();

        assert!(bag.get("Weight").expect("known").is_null());
        assert!(!bag.contains("Weight"));
    }

    #[test]
    fn unknown_property_fails_on_get_and_set() {
        let mut bag = PropertyBag::of::<Widget>();

        let err = bag.get("Nickname").expect_err("unknown property");
        assert_eq!(err.class, ErrorClass::NotFound);
        assert!(err.message.contains("Nickname"));

        let err = bag.set("Nickname", "x").expect_err("unknown property");
        assert_eq!(
            err.property_detail(),
            Some(&PropertyError::UnknownProperty {
                entity: Widget::MODEL.path,
                property: "Nickname".to_string(),
            })
        );
    }

    #[test]
    fn kind_mismatch_is_rejected() {
        let err = PropertyBag::of::<Widget>()
            .with("Label", 5)
            .expect_err("text property");

        assert_eq!(err.class, ErrorClass::Mismatch);
        assert_eq!(
            err.property_detail(),
            Some(&PropertyError::KindMismatch {
                entity: Widget::MODEL.path,
                property: "Label",
                expected: "text",
                found: "int",
            })
        );
    }

    #[test]
    fn null_is_accepted_only_for_nullable_properties() {
        let mut bag = PropertyBag::of::<Widget>();

        bag.set("Weight", Value::Null).expect("Weight is nullable");
        assert!(bag.contains("Weight"));
        bag.set("Label", Value::Null).expect_err("Label is required");
    }

    #[test]
    fn bags_without_indexer_reject_everything() {
        let bag = PropertyBag::of::<Gadget>();

        assert!(bag.get("Label").is_err());
    }

    proptest! {
        #[test]
        fn undeclared_names_never_resolve(name in "[A-Za-z]{1,12}") {
            prop_assume!(name != "Label" && name != "Weight");

            let mut bag = PropertyBag::of::<Widget>();
            prop_assert!(bag.get(&name).is_err());
            prop_assert!(bag.set(&name, 1).is_err());
            prop_assert!(bag.is_empty());
        }
    }
}
