use crate::{
    error::{GraphError, InternalError},
    model::field::EntityFieldModel,
};

///
/// EntityModel
/// Macro-generated runtime model for one oracle type.
///

#[derive(Debug, Eq, PartialEq)]
pub struct EntityModel {
    /// Fully-qualified schema path (for dispatch and diagnostics).
    pub path: &'static str,
    /// Short name used in messages and asserter output.
    pub entity_name: &'static str,
    /// Path of the base type when this type is a hierarchy member.
    pub base: Option<&'static str>,
    /// Ordered declared field list.
    pub fields: &'static [EntityFieldModel],
    /// Dynamically keyed indexer properties.
    pub indexer: &'static [EntityFieldModel],
}

impl EntityModel {
    /// Look up a declared field by name.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&'static EntityFieldModel> {
        let fields: &'static [EntityFieldModel] = self.fields;
        fields.iter().find(|field| field.name == name)
    }

    /// Look up an indexer property by name.
    #[must_use]
    pub fn indexer_property(&self, name: &str) -> Option<&'static EntityFieldModel> {
        let indexer: &'static [EntityFieldModel] = self.indexer;
        indexer.iter().find(|field| field.name == name)
    }

    /// Check the model is self-consistent.
    ///
    /// Field and indexer names are unique, an indexer name never shadows a
    /// declared field, indexer properties hold scalar kinds only, and a
    /// hierarchy member does not name itself as its base.
    pub fn validate(&self) -> Result<(), InternalError> {
        if self.base == Some(self.path) {
            return Err(self.invalid("type names itself as its base".to_string()));
        }

        for (i, field) in self.fields.iter().enumerate() {
            if self.fields[..i].iter().any(|f| f.name == field.name) {
                return Err(self.invalid(format!("field '{}' is declared twice", field.name)));
            }
        }

        for (i, prop) in self.indexer.iter().enumerate() {
            if self.indexer[..i].iter().any(|p| p.name == prop.name) {
                return Err(self.invalid(format!(
                    "indexer property '{}' is declared twice",
                    prop.name
                )));
            }
            if self.field(prop.name).is_some() {
                return Err(self.invalid(format!(
                    "indexer property '{}' shadows a declared field",
                    prop.name
                )));
            }
            if !prop.kind.is_scalar() {
                return Err(self.invalid(format!(
                    "indexer property '{}' has non-scalar kind {}",
                    prop.name, prop.kind
                )));
            }
        }

        Ok(())
    }

    fn invalid(&self, reason: String) -> InternalError {
        GraphError::InvalidModel {
            entity: self.path,
            reason,
        }
        .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::field::EntityFieldKind;

    const fn model(
        base: Option<&'static str>,
        fields: &'static [EntityFieldModel],
        indexer: &'static [EntityFieldModel],
    ) -> EntityModel {
        EntityModel {
            path: "model::tests::Crate",
            entity_name: "Crate",
            base,
            fields,
            indexer,
        }
    }

    fn reason(model: &EntityModel) -> String {
        match model.validate().expect_err("model is invalid").graph_detail() {
            Some(GraphError::InvalidModel { reason, .. }) => reason.clone(),
            other => panic!("expected InvalidModel, got {other:?}"),
        }
    }

    #[test]
    fn declared_models_validate() {
        static FIELDS: [EntityFieldModel; 2] = [
            EntityFieldModel::new("Id", EntityFieldKind::Int),
            EntityFieldModel::new("Pallet", EntityFieldKind::Reference("model::tests::Pallet")),
        ];
        static INDEXER: [EntityFieldModel; 1] =
            [EntityFieldModel::nullable("Label", EntityFieldKind::Text)];

        let crate_model = model(Some("model::tests::Box"), &FIELDS, &INDEXER);
        crate_model.validate().expect("consistent model");
        assert_eq!(crate_model.field("Pallet").map(|f| f.nullable), Some(false));
        assert!(crate_model.field("Label").is_none());
    }

    #[test]
    fn self_base_is_rejected() {
        assert_eq!(
            reason(&model(Some("model::tests::Crate"), &[], &[])),
            "type names itself as its base"
        );
    }

    #[test]
    fn duplicate_field_is_rejected() {
        static FIELDS: [EntityFieldModel; 2] = [
            EntityFieldModel::new("Id", EntityFieldKind::Int),
            EntityFieldModel::new("Id", EntityFieldKind::Text),
        ];

        assert_eq!(reason(&model(None, &FIELDS, &[])), "field 'Id' is declared twice");
    }

    #[test]
    fn indexer_may_not_shadow_a_field() {
        static FIELDS: [EntityFieldModel; 1] = [EntityFieldModel::new("Label", EntityFieldKind::Text)];
        static INDEXER: [EntityFieldModel; 1] =
            [EntityFieldModel::nullable("Label", EntityFieldKind::Text)];

        assert_eq!(
            reason(&model(None, &FIELDS, &INDEXER)),
            "indexer property 'Label' shadows a declared field"
        );
    }

    #[test]
    fn indexer_must_be_scalar() {
        static INDEXER: [EntityFieldModel; 1] = [EntityFieldModel::new(
            "Pallet",
            EntityFieldKind::Owned("model::tests::Pallet"),
        )];

        assert_eq!(
            reason(&model(None, &[], &INDEXER)),
            "indexer property 'Pallet' has non-scalar kind owned(model::tests::Pallet)"
        );
    }
}
