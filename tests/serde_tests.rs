use assoc_map::AssocMap;

#[test]
fn test_serialize_as_json_object() {
    let mut m: AssocMap<String, i32> = AssocMap::new();
    m.insert("Apple".to_string(), 10);

    let json = serde_json::to_string(&m).unwrap();
    assert_eq!(json, r#"{"Apple":10}"#);
}

#[test]
fn test_deserialize_from_json_object() {
    let m: AssocMap<String, i32> =
        serde_json::from_str(r#"{"Apple":3,"Banana":5}"#).unwrap();
    assert_eq!(m.len(), 2);
    assert_eq!(m.get("Apple"), Some(&3));
    assert_eq!(m.get("Banana"), Some(&5));
}

#[test]
fn test_deserialize_duplicate_key_last_wins() {
    let m: AssocMap<String, i32> =
        serde_json::from_str(r#"{"Apple":3,"Apple":10}"#).unwrap();
    assert_eq!(m.len(), 1);
    assert_eq!(m.get("Apple"), Some(&10));
}

#[test]
fn test_deserialize_rejects_non_map() {
    let res: Result<AssocMap<String, i32>, _> = serde_json::from_str("[1, 2, 3]");
    assert!(res.is_err());
}

#[test]
fn test_json_value_survives_reload() {
    let src: AssocMap<String, Vec<u32>> = [
        ("odd".to_string(), vec![1, 3, 5]),
        ("even".to_string(), vec![2, 4]),
    ]
    .into_iter()
    .collect();

    let json = serde_json::to_value(&src).unwrap();
    assert_eq!(json["odd"], serde_json::json!([1, 3, 5]));

    let back: AssocMap<String, Vec<u32>> = serde_json::from_value(json).unwrap();
    assert_eq!(back, src);
}
