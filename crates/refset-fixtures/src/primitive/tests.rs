use super::*;

fn data() -> PrimitiveArrayData {
    PrimitiveArrayData::new().expect("primitive graph should build")
}

#[test]
fn five_rows_in_key_order() {
    let data = data();
    let keys = data.set::<PrimitiveCollectionsEntity>().expect("served").keys();

    assert_eq!(keys, (1..=5).map(Key::Int).collect::<Vec<_>>());
}

#[test]
fn nullable_scalars_stay_none() {
    let data = data();
    let rows: Vec<_> = data.entities().iter().collect();

    assert_eq!(rows[0].nullable_int, Some(10));
    assert_eq!(rows[1].nullable_int, None);
    assert_eq!(rows[1].nullable_string, None);
    assert_eq!(rows[1].nullable_ints, vec![Some(1), Some(11), None]);
}

#[test]
fn last_row_has_empty_arrays() {
    let data = data();
    let last = data.entities().iter().last().expect("row 5");

    assert_eq!(last.id, 5);
    assert!(last.ints.is_empty());
    assert!(last.strings.is_empty());
    assert!(last.nullable_strings.is_empty());
    assert_eq!(last.string, "");
}

#[test]
fn enums_render_as_enum_values() {
    assert_eq!(Value::from(MyEnum::Value3), Value::Enum("Value3".to_string()));
}
