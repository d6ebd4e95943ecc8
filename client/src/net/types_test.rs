use super::*;

// =============================================================
// Item
// =============================================================

#[test]
fn item_without_description_deserializes() {
    let item: Item = serde_json::from_str(r#"{"id":3,"name":"Lamp"}"#).unwrap();
    assert_eq!(item, Item { id: 3, name: "Lamp".to_owned(), description: None });
}

#[test]
fn item_null_description_deserializes_as_none() {
    let item: Item = serde_json::from_str(r#"{"id":3,"name":"Lamp","description":null}"#).unwrap();
    assert!(item.description.is_none());
}

#[test]
fn item_update_omits_absent_fields() {
    let update = ItemUpdate { name: Some("New".to_owned()), description: None };
    let json = serde_json::to_value(&update).unwrap();
    assert_eq!(json, serde_json::json!({ "name": "New" }));
}

#[test]
fn empty_item_update_serializes_to_empty_object() {
    let json = serde_json::to_string(&ItemUpdate::default()).unwrap();
    assert_eq!(json, "{}");
}

#[test]
fn item_create_includes_description_when_set() {
    let create = ItemCreate { name: "Desk".to_owned(), description: Some("oak".to_owned()) };
    let json = serde_json::to_value(&create).unwrap();
    assert_eq!(json, serde_json::json!({ "name": "Desk", "description": "oak" }));
}

// =============================================================
// Product
// =============================================================

#[test]
fn product_accepts_integer_price() {
    let product: Product =
        serde_json::from_str(r#"{"id":1,"name":"Pen","price":2,"category":"office"}"#).unwrap();
    assert!((product.price - 2.0).abs() < f64::EPSILON);
}

#[test]
fn new_product_has_no_id_field() {
    let json = serde_json::to_value(NewProduct { name: "Pen".to_owned(), price: 1.5, category: "office".to_owned() })
        .unwrap();
    assert!(json.get("id").is_none());
}

#[test]
fn new_product_with_id_keeps_fields() {
    let product = NewProduct { name: "Pen".to_owned(), price: 1.5, category: "office".to_owned() }.with_id(9);
    assert_eq!(product.id, 9);
    assert_eq!(product.name, "Pen");
    assert_eq!(product.category, "office");
}

// =============================================================
// Login
// =============================================================

#[test]
fn login_response_missing_token_has_no_credential() {
    let resp: LoginResponse = serde_json::from_str("{}").unwrap();
    assert_eq!(resp.credential(), None);
}

#[test]
fn login_response_empty_token_has_no_credential() {
    let resp: LoginResponse = serde_json::from_str(r#"{"token":""}"#).unwrap();
    assert_eq!(resp.credential(), None);
}

#[test]
fn login_response_token_is_credential() {
    let resp: LoginResponse = serde_json::from_str(r#"{"token":"xyz"}"#).unwrap();
    assert_eq!(resp.credential(), Some("xyz"));
}

#[test]
fn login_request_debug_redacts_password() {
    let req = LoginRequest { username: "a".to_owned(), password: "hunter2".to_owned() };
    let rendered = format!("{req:?}");
    assert!(!rendered.contains("hunter2"));
    assert!(rendered.contains("redacted"));
}
