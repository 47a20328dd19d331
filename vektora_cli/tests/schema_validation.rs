use serde_json::Value;
use std::path::{Path, PathBuf};

fn workspace_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .expect("CLI crate should be inside workspace")
        .to_path_buf()
}

fn load_fixture(name: &str) -> Value {
    let path = workspace_root()
        .join("vektora_api/tests/fixtures")
        .join(name);
    let text = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("read fixture {}: {}", path.display(), e));
    serde_json::from_str(&text).expect("fixture is valid JSON")
}

fn load_schema(name: &str) -> Value {
    let path = workspace_root().join("schema").join(name);
    let text = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("read schema {}: {}", path.display(), e));
    serde_json::from_str(&text).expect("schema is valid JSON")
}

/// The record array lives under `data.items` on modern endpoints and
/// `data.data` on the quotation endpoint.
fn extract_records(fixture: &Value) -> Value {
    let page = &fixture["data"];
    if page["items"].is_array() {
        page["items"].clone()
    } else {
        page["data"].clone()
    }
}

// ---------------------------------------------------------------------------
// Positive validation: fixtures conform to their schemas
// ---------------------------------------------------------------------------

#[test]
fn test_users_fixture_conforms_to_schema() {
    let fixture = load_fixture("users.json");
    let schema = load_schema("user.schema.json");
    let data = extract_records(&fixture);

    let validator = jsonschema::draft202012::new(&schema).expect("user schema compiles");
    let result = validator.validate(&data);
    if let Err(e) = &result {
        panic!("users fixture failed validation: {e}");
    }
}

#[test]
fn test_quotations_fixture_conforms_to_schema() {
    let fixture = load_fixture("quotations.json");
    let schema = load_schema("quotation.schema.json");
    let data = extract_records(&fixture);

    let validator = jsonschema::draft202012::new(&schema).expect("quotation schema compiles");
    let result = validator.validate(&data);
    if let Err(e) = &result {
        panic!("quotations fixture failed validation: {e}");
    }
}

#[test]
fn test_approval_roles_fixture_conforms_to_schema() {
    let fixture = load_fixture("approval_roles.json");
    let schema = load_schema("approval_role.schema.json");
    let data = extract_records(&fixture);

    let validator = jsonschema::draft202012::new(&schema).expect("approval role schema compiles");
    let result = validator.validate(&data);
    if let Err(e) = &result {
        panic!("approval roles fixture failed validation: {e}");
    }
}

// ---------------------------------------------------------------------------
// Negative validation: schemas reject invalid data
// ---------------------------------------------------------------------------

#[test]
fn test_user_schema_rejects_missing_required_field() {
    let fixture = load_fixture("users.json");
    let schema = load_schema("user.schema.json");
    let mut data = extract_records(&fixture);

    data[0]
        .as_object_mut()
        .expect("user is an object")
        .remove("username");

    let validator = jsonschema::draft202012::new(&schema).expect("schema compiles");
    assert!(
        validator.validate(&data).is_err(),
        "schema should reject user missing username"
    );
}

#[test]
fn test_quotation_schema_rejects_invalid_status() {
    let fixture = load_fixture("quotations.json");
    let schema = load_schema("quotation.schema.json");
    let mut data = extract_records(&fixture);

    data[0]
        .as_object_mut()
        .expect("quotation is an object")
        .insert("status".to_string(), Value::String("bogus".to_string()));

    let validator = jsonschema::draft202012::new(&schema).expect("schema compiles");
    assert!(
        validator.validate(&data).is_err(),
        "schema should reject invalid status enum value"
    );
}

#[test]
fn test_quotation_schema_rejects_malformed_currency() {
    let fixture = load_fixture("quotations.json");
    let schema = load_schema("quotation.schema.json");
    let mut data = extract_records(&fixture);

    data[0]
        .as_object_mut()
        .expect("quotation is an object")
        .insert("currency".to_string(), Value::String("lira".to_string()));

    let validator = jsonschema::draft202012::new(&schema).expect("schema compiles");
    assert!(
        validator.validate(&data).is_err(),
        "schema should reject a non-ISO currency code"
    );
}

#[test]
fn test_approval_role_schema_rejects_missing_level() {
    let fixture = load_fixture("approval_roles.json");
    let schema = load_schema("approval_role.schema.json");
    let mut data = extract_records(&fixture);

    data[0]
        .as_object_mut()
        .expect("approval role is an object")
        .remove("approvalLevel");

    let validator = jsonschema::draft202012::new(&schema).expect("schema compiles");
    assert!(
        validator.validate(&data).is_err(),
        "schema should reject approval role missing approvalLevel"
    );
}

// ---------------------------------------------------------------------------
// Edge cases
// ---------------------------------------------------------------------------

#[test]
fn test_user_schema_rejects_additional_properties() {
    let fixture = load_fixture("users.json");
    let schema = load_schema("user.schema.json");
    let mut data = extract_records(&fixture);

    data[0]
        .as_object_mut()
        .expect("user is an object")
        .insert("bogusField".to_string(), Value::Number(123.into()));

    let validator = jsonschema::draft202012::new(&schema).expect("schema compiles");
    assert!(
        validator.validate(&data).is_err(),
        "schema should reject additional properties"
    );
}

#[test]
fn test_empty_array_conforms_to_all_schemas() {
    let empty = serde_json::json!([]);

    for schema_name in [
        "user.schema.json",
        "quotation.schema.json",
        "approval_role.schema.json",
    ] {
        let schema = load_schema(schema_name);
        let validator =
            jsonschema::draft202012::new(&schema).unwrap_or_else(|e| panic!("{schema_name}: {e}"));
        let result = validator.validate(&empty);
        if let Err(e) = &result {
            panic!("empty array should conform to {schema_name}: {e}");
        }
    }
}
