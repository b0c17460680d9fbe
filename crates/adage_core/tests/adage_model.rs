use adage_core::Adage;
use uuid::Uuid;

#[test]
fn builder_sets_fields_without_validation() {
    let adage = Adage::new("")
        .with_tags(Vec::<String>::new())
        .with_author("")
        .with_source("");

    assert_eq!(adage, Adage::default());
    assert!(!adage.is_persisted());
}

#[test]
fn adage_serialization_uses_expected_field_names() {
    let id = Uuid::parse_str("01890a5d-ac96-774b-bcce-b302099a8057").unwrap();
    let adage = Adage {
        id: Some(id),
        ..Adage::new("haste makes waste")
            .with_tags(["wisdom", "caution"])
            .with_author("unknown")
            .with_timestamps(Some(1_700_000_000_000), None)
    };

    let json = serde_json::to_value(&adage).unwrap();
    assert_eq!(json["id"], id.to_string());
    assert_eq!(json["body"], "haste makes waste");
    assert_eq!(json["tags"], serde_json::json!(["wisdom", "caution"]));
    assert_eq!(json["author"], "unknown");
    assert_eq!(json["source"], "");
    assert_eq!(json["created_at"], 1_700_000_000_000_i64);
    assert!(json["updated_at"].is_null());

    let decoded: Adage = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, adage);
}
