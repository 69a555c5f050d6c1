use projboard_core::{BoardConfig, Item, ItemStatus};

#[test]
fn item_serialization_uses_expected_wire_fields() {
    let item = Item::new("Build API", "Implement REST endpoints", 3);

    let json = serde_json::to_value(&item).unwrap();
    assert_eq!(json["id"], item.id.to_string());
    assert_eq!(json["title"], "Build API");
    assert_eq!(json["people_count"], 3);
    assert_eq!(json["status"], "active");

    let decoded: Item = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, item);
}

#[test]
fn status_rejects_unknown_bucket_on_the_wire() {
    let result = serde_json::from_value::<ItemStatus>(serde_json::json!("archived"));
    assert!(result.is_err());
}

#[test]
fn empty_config_document_yields_defaults() {
    let config: BoardConfig = serde_json::from_str("{}").unwrap();
    assert_eq!(config, BoardConfig::default());
}

#[test]
fn partial_config_overrides_only_named_fields() {
    let config: BoardConfig = serde_json::from_value(serde_json::json!({
        "form": { "people": { "required": true, "min": 2.0, "max": 8.0 } },
        "logging": { "level": "warn" }
    }))
    .unwrap();

    assert_eq!(config.form.people.min, Some(2.0));
    assert_eq!(config.form.people.max, Some(8.0));
    assert_eq!(config.form.description.min_length, Some(5));
    assert_eq!(config.logging.level, "warn");
    assert_eq!(config.logging.log_dir, None);
    assert!(config.validate().is_ok());
}
