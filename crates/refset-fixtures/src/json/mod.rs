//! JSON column data for the null-handling scenario.
//!
//! Each root row carries an optional JSON reference and an optional JSON
//! collection. `None` models a SQL NULL column; `Some(vec![])` an empty
//! JSON array. The two must never be conflated.

#[cfg(test)]
mod tests;

use refset_core::{
    arena::Arena,
    entity_model,
    error::InternalError,
    fixture::{BuildStats, ExpectedData},
    model::{EntityFieldKind, EntityFieldModel},
    set::{self, SetIter, SetRegistry, SetSource},
    traits::{EntityKind, Path},
    types::Key,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use time::{OffsetDateTime, macros::datetime};

static EXPECTED: ExpectedData<JsonNullData> = ExpectedData::new();

/// Shared, lazily built instance.
pub fn expected() -> Result<&'static JsonNullData, InternalError> {
    EXPECTED.get_or_build(JsonNullData::new)
}

///
/// JsonEntityNested
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct JsonEntityNested {
    #[serde(rename = "DoB", with = "time::serde::rfc3339")]
    pub dob: OffsetDateTime,
    pub text: String,
}

///
/// JsonEntity
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct JsonEntity {
    pub name: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub number: Decimal,
    pub nested_reference: Option<JsonEntityNested>,
    pub nested_collection: Option<Vec<JsonEntityNested>>,
}

///
/// Entity34960
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Entity34960 {
    pub id: i32,
    pub reference: Option<JsonEntity>,
    pub collection: Option<Vec<JsonEntity>>,
}

entity_model!(
    Entity34960,
    path = "json::Entity34960",
    name = "Entity34960",
    fields = [
        EntityFieldModel::new("Id", EntityFieldKind::Int),
        EntityFieldModel::nullable("Reference", EntityFieldKind::Owned("json::JsonEntity")),
        EntityFieldModel::nullable("Collection", EntityFieldKind::OwnedMany("json::JsonEntity")),
    ],
    indexer = [],
);

impl EntityKind for Entity34960 {
    fn key(&self) -> Key {
        Key::from(self.id)
    }
}

impl Entity34960 {
    /// Render the row's JSON columns as stored text; `None` renders as `null`.
    pub fn json_columns(&self) -> Result<JsonColumns, InternalError> {
        Ok(JsonColumns {
            id: self.id,
            reference: to_json(&self.reference)?,
            collection: to_json(&self.collection)?,
        })
    }
}

///
/// JsonColumns
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct JsonColumns {
    pub id: i32,
    pub reference: String,
    pub collection: String,
}

fn to_json<T: Serialize>(value: &T) -> Result<String, InternalError> {
    serde_json::to_string(value)
        .map_err(|err| InternalError::serialize_internal(format!("json column: {err}")))
}

///
/// JsonNullData
///

pub struct JsonNullData {
    entities: Arena<Entity34960>,
    registry: SetRegistry<Self>,
}

impl Path for JsonNullData {
    const PATH: &'static str = "json::JsonNullData";
}

impl JsonNullData {
    pub fn new() -> Result<Self, InternalError> {
        let mut stats = BuildStats::new();
        let this = Self {
            entities: entities(),
            registry: SetRegistry::new().with::<Entity34960>(json_entities)?,
        };

        this.entities.ensure_unique_keys()?;
        stats.built(&this.entities);
        stats.publish::<Self>();

        Ok(this)
    }

    #[must_use]
    pub const fn entities(&self) -> &Arena<Entity34960> {
        &self.entities
    }

    /// JSON column text for every row, in key order.
    pub fn json_columns(&self) -> Result<Vec<JsonColumns>, InternalError> {
        self.entities.iter().map(Entity34960::json_columns).collect()
    }
}

impl SetSource for JsonNullData {
    fn registry(&self) -> &SetRegistry<Self> {
        &self.registry
    }
}

fn json_entities(data: &JsonNullData) -> SetIter<'_, Entity34960> {
    set::all(&data.entities)
}

// ---------------------------------------------------------------------------
// Rows
// ---------------------------------------------------------------------------

fn nested(dob: OffsetDateTime, text: &str) -> JsonEntityNested {
    JsonEntityNested {
        dob,
        text: text.to_string(),
    }
}

fn entities() -> Arena<Entity34960> {
    Arena::from(vec![
        Entity34960 {
            id: 1,
            reference: Some(JsonEntity {
                name: "ref1".to_string(),
                number: Decimal::new(15, 1),
                nested_reference: Some(nested(datetime!(2000-01-01 0:00 UTC), "nested ref 1")),
                nested_collection: Some(vec![
                    nested(datetime!(2001-01-01 0:00 UTC), "nested col 1 1"),
                    nested(datetime!(2001-02-01 0:00 UTC), "nested col 1 2"),
                ]),
            }),
            collection: Some(vec![
                JsonEntity {
                    name: "col 1 1".to_string(),
                    number: Decimal::new(25, 1),
                    nested_reference: Some(nested(datetime!(2002-01-01 0:00 UTC), "nested col ref 1 1")),
                    nested_collection: Some(vec![nested(
                        datetime!(2002-02-01 0:00 UTC),
                        "nested col col 1 1 1",
                    )]),
                },
                JsonEntity {
                    name: "col 1 2".to_string(),
                    number: Decimal::new(35, 1),
                    nested_reference: None,
                    nested_collection: Some(Vec::new()),
                },
            ]),
        },
        Entity34960 {
            id: 2,
            reference: None,
            collection: None,
        },
        Entity34960 {
            id: 3,
            reference: Some(JsonEntity {
                name: "ref3".to_string(),
                number: Decimal::new(45, 1),
                nested_reference: None,
                nested_collection: None,
            }),
            collection: Some(Vec::new()),
        },
        Entity34960 {
            id: 4,
            reference: None,
            collection: Some(vec![JsonEntity {
                name: "col 4 1".to_string(),
                number: Decimal::new(55, 1),
                nested_reference: None,
                nested_collection: None,
            }]),
        },
    ])
}
