//! Primitive-collections data: one table of scalar, nullable and array
//! columns.

#[cfg(test)]
mod tests;

use derive_more::Display;
use refset_core::{
    arena::Arena,
    entity_model,
    error::InternalError,
    fixture::{BuildStats, ExpectedData},
    model::{EntityFieldKind, EntityFieldModel},
    set::{self, SetIter, SetRegistry, SetSource},
    traits::{EntityKind, Path},
    types::Key,
    value::Value,
};
use serde::{Deserialize, Serialize};
use time::{OffsetDateTime, macros::datetime};

static EXPECTED: ExpectedData<PrimitiveArrayData> = ExpectedData::new();

/// Shared, lazily built instance.
pub fn expected() -> Result<&'static PrimitiveArrayData, InternalError> {
    EXPECTED.get_or_build(PrimitiveArrayData::new)
}

///
/// MyEnum
///

#[derive(
    Clone, Copy, Debug, Deserialize, Display, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize,
)]
pub enum MyEnum {
    Value1,
    Value2,
    Value3,
    Value4,
}

impl From<MyEnum> for Value {
    fn from(v: MyEnum) -> Self {
        Self::Enum(v.to_string())
    }
}

///
/// PrimitiveCollectionsEntity
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct PrimitiveCollectionsEntity {
    pub id: i32,

    pub string: String,
    pub int: i32,
    pub date_time: OffsetDateTime,
    pub bool: bool,
    pub enum_value: MyEnum,
    pub nullable_int: Option<i32>,
    pub nullable_string: Option<String>,

    pub strings: Vec<String>,
    pub ints: Vec<i32>,
    pub date_times: Vec<OffsetDateTime>,
    pub bools: Vec<bool>,
    pub enums: Vec<MyEnum>,
    pub nullable_ints: Vec<Option<i32>>,
    pub nullable_strings: Vec<Option<String>>,
}

entity_model!(
    PrimitiveCollectionsEntity,
    path = "primitive::PrimitiveCollectionsEntity",
    name = "PrimitiveCollectionsEntity",
    fields = [
        EntityFieldModel::new("Id", EntityFieldKind::Int),
        EntityFieldModel::new("String", EntityFieldKind::Text),
        EntityFieldModel::new("Int", EntityFieldKind::Int),
        EntityFieldModel::new("DateTime", EntityFieldKind::Timestamp),
        EntityFieldModel::new("Bool", EntityFieldKind::Bool),
        EntityFieldModel::new("Enum", EntityFieldKind::Enum),
        EntityFieldModel::nullable("NullableInt", EntityFieldKind::Int),
        EntityFieldModel::nullable("NullableString", EntityFieldKind::Text),
        EntityFieldModel::new("Strings", EntityFieldKind::List(&EntityFieldKind::Text)),
        EntityFieldModel::new("Ints", EntityFieldKind::List(&EntityFieldKind::Int)),
        EntityFieldModel::new("DateTimes", EntityFieldKind::List(&EntityFieldKind::Timestamp)),
        EntityFieldModel::new("Bools", EntityFieldKind::List(&EntityFieldKind::Bool)),
        EntityFieldModel::new("Enums", EntityFieldKind::List(&EntityFieldKind::Enum)),
        EntityFieldModel::new("NullableInts", EntityFieldKind::List(&EntityFieldKind::Int)),
        EntityFieldModel::new("NullableStrings", EntityFieldKind::List(&EntityFieldKind::Text)),
    ],
    indexer = [],
);

impl EntityKind for PrimitiveCollectionsEntity {
    fn key(&self) -> Key {
        Key::from(self.id)
    }
}

///
/// PrimitiveArrayData
///

pub struct PrimitiveArrayData {
    entities: Arena<PrimitiveCollectionsEntity>,
    registry: SetRegistry<Self>,
}

impl Path for PrimitiveArrayData {
    const PATH: &'static str = "primitive::PrimitiveArrayData";
}

impl PrimitiveArrayData {
    pub fn new() -> Result<Self, InternalError> {
        let mut stats = BuildStats::new();
        let this = Self {
            entities: entities(),
            registry: SetRegistry::new().with::<PrimitiveCollectionsEntity>(primitive_entities)?,
        };

        this.entities.ensure_unique_keys()?;
        stats.built(&this.entities);
        stats.publish::<Self>();

        Ok(this)
    }

    #[must_use]
    pub const fn entities(&self) -> &Arena<PrimitiveCollectionsEntity> {
        &self.entities
    }
}

impl SetSource for PrimitiveArrayData {
    fn registry(&self) -> &SetRegistry<Self> {
        &self.registry
    }
}

fn primitive_entities(data: &PrimitiveArrayData) -> SetIter<'_, PrimitiveCollectionsEntity> {
    set::all(&data.entities)
}

// ---------------------------------------------------------------------------
// Rows
// ---------------------------------------------------------------------------

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(ToString::to_string).collect()
}

fn nullable_strings(values: &[Option<&str>]) -> Vec<Option<String>> {
    values.iter().map(|v| v.map(str::to_string)).collect()
}

const JAN_1: OffsetDateTime = datetime!(2020-01-01 12:30 UTC);
const JAN_10: OffsetDateTime = datetime!(2020-01-10 12:30 UTC);
const JAN_11: OffsetDateTime = datetime!(2020-01-11 12:30 UTC);
const JAN_31: OffsetDateTime = datetime!(2020-01-31 12:30 UTC);

#[allow(clippy::too_many_lines)]
fn entities() -> Arena<PrimitiveCollectionsEntity> {
    use MyEnum::{Value1, Value2, Value3};

    Arena::from(vec![
        PrimitiveCollectionsEntity {
            id: 1,
            string: "10".to_string(),
            int: 10,
            date_time: JAN_10,
            bool: true,
            enum_value: Value1,
            nullable_int: Some(10),
            nullable_string: Some("10".to_string()),
            strings: strings(&["1", "10"]),
            ints: vec![1, 10],
            date_times: vec![JAN_1, JAN_10],
            bools: vec![true, false],
            enums: vec![Value1, Value2],
            nullable_ints: vec![Some(1), Some(10)],
            nullable_strings: nullable_strings(&[Some("1"), Some("10")]),
        },
        PrimitiveCollectionsEntity {
            id: 2,
            string: "11".to_string(),
            int: 11,
            date_time: JAN_11,
            bool: false,
            enum_value: Value2,
            nullable_int: None,
            nullable_string: None,
            strings: strings(&["1", "11", "111"]),
            ints: vec![1, 11, 111],
            date_times: vec![JAN_1, JAN_11, JAN_31],
            bools: vec![false],
            enums: vec![Value2, Value3],
            nullable_ints: vec![Some(1), Some(11), None],
            nullable_strings: nullable_strings(&[Some("1"), Some("11"), None]),
        },
        PrimitiveCollectionsEntity {
            id: 3,
            string: "20".to_string(),
            int: 20,
            date_time: datetime!(2022-01-10 12:30 UTC),
            bool: true,
            enum_value: Value1,
            nullable_int: Some(20),
            nullable_string: Some("20".to_string()),
            strings: strings(&["1", "10", "10", "1", "1"]),
            ints: vec![1, 1, 10, 10, 10, 1, 10],
            date_times: vec![JAN_1, JAN_10, JAN_1, JAN_1, JAN_10],
            bools: vec![true, false],
            enums: vec![Value1, Value2],
            nullable_ints: vec![Some(1), Some(1), Some(10), Some(10), None, Some(1)],
            nullable_strings: nullable_strings(&[
                Some("1"),
                Some("1"),
                Some("10"),
                Some("10"),
                None,
                Some("1"),
            ]),
        },
        PrimitiveCollectionsEntity {
            id: 4,
            string: "41".to_string(),
            int: 41,
            date_time: datetime!(2024-01-11 12:30 UTC),
            bool: false,
            enum_value: Value2,
            nullable_int: None,
            nullable_string: None,
            strings: strings(&["1", "11", "111", "11"]),
            ints: vec![1, 1, 111, 11, 1, 111],
            date_times: vec![JAN_1, JAN_11, JAN_1, JAN_11, JAN_31, JAN_1, JAN_31, JAN_31],
            bools: vec![false],
            enums: vec![Value2, Value3],
            nullable_ints: vec![None, None],
            nullable_strings: vec![None, None],
        },
        PrimitiveCollectionsEntity {
            id: 5,
            string: String::new(),
            int: 0,
            date_time: datetime!(2000-01-01 0:00 UTC),
            bool: false,
            enum_value: Value1,
            nullable_int: None,
            nullable_string: None,
            strings: Vec::new(),
            ints: Vec::new(),
            date_times: Vec::new(),
            bools: Vec::new(),
            enums: Vec::new(),
            nullable_ints: Vec::new(),
            nullable_strings: Vec::new(),
        },
    ])
}
