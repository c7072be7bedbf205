use super::*;

fn data() -> JsonNullData {
    JsonNullData::new().expect("json graph should build")
}

fn row(data: &JsonNullData, id: i32) -> &Entity34960 {
    data.entities()
        .iter()
        .find(|e| e.id == id)
        .expect("row exists")
}

#[test]
fn null_reference_and_collection_render_as_null() {
    let data = data();
    let columns = row(&data, 2).json_columns().expect("serializes");

    assert_eq!(columns.reference, "null");
    assert_eq!(columns.collection, "null");
}

#[test]
fn empty_collection_renders_as_empty_array() {
    let data = data();
    let columns = row(&data, 3).json_columns().expect("serializes");

    assert_eq!(columns.collection, "[]");
    assert!(columns.reference.starts_with("{\"Name\":\"ref3\""));
    assert!(columns.reference.contains("\"NestedReference\":null"));
}

#[test]
fn numbers_and_dates_use_json_native_forms() {
    let data = data();
    let columns = row(&data, 1).json_columns().expect("serializes");

    assert!(columns.reference.contains("\"Number\":1.5"));
    assert!(columns.reference.contains("\"DoB\":\"2000-01-01T00:00:00Z\""));
}

#[test]
fn json_text_parses_back_to_the_same_values() {
    let data = data();
    let original = row(&data, 1);
    let columns = original.json_columns().expect("serializes");

    let collection: Option<Vec<JsonEntity>> =
        serde_json::from_str(&columns.collection).expect("parses");
    assert_eq!(collection, original.collection);
}

#[test]
fn columns_cover_every_row() {
    let ids: Vec<_> = data()
        .json_columns()
        .expect("serializes")
        .into_iter()
        .map(|c| c.id)
        .collect();

    assert_eq!(ids, [1, 2, 3, 4]);
}
