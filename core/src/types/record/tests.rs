use super::*;

#[test]
fn record_new_has_no_template_name() {
    let record = Record::new(1, "monkey");

    assert_eq!(record.id, RecordId::new(1));
    assert_eq!(record.title, "monkey");
    assert_eq!(record.template_name, None);
}

#[test]
fn record_field_reads_text() {
    let record = Record::new(42, "cat").with_template_name("Article");

    assert_eq!(record.field(Field::Id).as_deref(), Some("42"));
    assert_eq!(record.field(Field::Title).as_deref(), Some("cat"));
    assert_eq!(record.field(Field::TemplateName).as_deref(), Some("Article"));
}

#[test]
fn record_field_unset_template_name_is_none() {
    let record = Record::new(1, "cat");

    assert!(record.field(Field::TemplateName).is_none());
}

#[test]
fn field_index_names_are_stable() {
    assert_eq!(Field::Id.index_name(), "_group");
    assert_eq!(Field::Title.index_name(), "title");
    assert_eq!(Field::TemplateName.index_name(), "_templatename");
    assert_eq!(Field::TemplateName.to_string(), "_templatename");
}

#[test]
fn record_deserializes_without_template_name() {
    let record: Record = serde_json::from_str(r#"{"id": 3, "title": "cat"}"#).unwrap();

    assert_eq!(record, Record::new(3, "cat"));
}

#[test]
fn record_serialization_skips_missing_template_name() {
    let json = serde_json::to_string(&Record::new(2, "cat")).unwrap();

    assert_eq!(json, r#"{"id":2,"title":"cat"}"#);
}

#[test]
fn record_id_ordering() {
    let mut ids = vec![RecordId::new(3), RecordId::new(1), RecordId::new(2)];
    ids.sort();

    let raw: Vec<i64> = ids.into_iter().map(RecordId::into_inner).collect();
    assert_eq!(raw, vec![1, 2, 3]);
}
