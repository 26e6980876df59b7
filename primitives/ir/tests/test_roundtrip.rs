use serde_json::{json, Value};
use smd_ir::{ParamOptions, ServiceDescriptor, ServiceMap};

/// Helper building a map with a mix of parameter shapes and options
fn sample_map() -> ServiceMap {
    let mut map = ServiceMap::new();
    map.set_default_envelope("JSON-RPC-2.0").expect("valid envelope").set_default_target("/rpc");

    let mut bar = map.new_service("foo.bar").expect("valid name");
    bar.add_param("boolean", ParamOptions::new().name("one").optional(false), None)
        .and_then(|s| {
            s.add_param("string", ParamOptions::new().name("two").optional(true).default_value("two"), None)
        })
        .and_then(|s| {
            s.add_param(
                ["any", "null"],
                ParamOptions::new().name("three").optional(true).default_value(Value::Null),
                None,
            )
        })
        .and_then(|s| s.set_return("array"))
        .expect("valid service");

    let mut baz = map.new_service("foo.baz").expect("valid name");
    baz.set_return("null").expect("valid return");

    let mut ordered = ServiceDescriptor::new("ordered").expect("valid name");
    ordered
        .add_param("float", ParamOptions::new().default_value(1.5).description("ratio"), Some(10))
        .and_then(|s| s.add_param("integer", ParamOptions::new(), Some(-1)))
        .expect("valid params");

    map.add_service(bar).add_service(baz).add_service(ordered);
    map
}

#[test]
fn test_json_text_reserializes_identically() {
    let map = sample_map();
    let text = map.to_json_text();

    let parsed: Value = serde_json::from_str(&text).expect("SMD JSON should parse");
    assert_eq!(serde_json::to_string(&parsed).expect("re-serialize"), text);
    assert_eq!(parsed, map.to_mapping());
}

#[test]
fn test_from_json_text_roundtrip() {
    let map = sample_map();
    let text = map.to_json_text();

    let reloaded = ServiceMap::from_json_text(&text).expect("SMD JSON should load");
    assert_eq!(reloaded.to_json_text(), text);
    assert_eq!(reloaded.service_names(), vec!["foo.bar", "foo.baz", "ordered"]);

    let three = &reloaded.service("foo.bar").expect("foo.bar present").params()[2];
    assert_eq!(three.default, Some(Value::Null));
}

#[test]
fn test_serialization_is_deterministic() {
    assert_eq!(sample_map().to_json_text(), sample_map().to_json_text());
}

#[test]
fn test_explicit_orders_in_mapping() {
    let map = sample_map();
    let ordered = map.to_mapping()["ordered"]["parameters"].clone();
    assert_eq!(
        ordered,
        json!([{"type": "integer"}, {"type": "float", "default": 1.5, "description": "ratio"}])
    );
}

#[test]
fn test_roundtrip_through_file() {
    let map = sample_map();
    let dir = tempfile::tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("service.smd.json");

    std::fs::write(&path, map.to_json_text()).expect("Failed to write SMD");
    let text = std::fs::read_to_string(&path).expect("Failed to read SMD");
    let loaded = ServiceMap::from_json_text(&text).expect("Failed to parse SMD");

    assert_eq!(loaded.len(), map.len());
    assert_eq!(loaded.to_mapping(), map.to_mapping());
}
