use vektora_api::types::{
    ApiEnvelope, ApprovalRole, LoginResponse, PagedResult, Quotation, QuotationStatus, User,
};

fn load_fixture(name: &str) -> String {
    std::fs::read_to_string(format!("tests/fixtures/{}", name)).unwrap()
}

#[test]
fn users_fixture_normalizes_items_to_data() {
    let envelope: ApiEnvelope<PagedResult<User>> =
        serde_json::from_str(&load_fixture("users.json")).unwrap();
    assert!(envelope.success);

    let page = envelope.into_data("fallback").unwrap();
    assert_eq!(page.data.len(), 2);
    assert_eq!(page.data[0].id, 1);
    assert_eq!(page.data[0].full_name(), "Ayşe Yılmaz");
    assert!(page.data[0].updated_by.is_none());
    assert_eq!(page.data[1].updated_by.as_deref(), Some("ayse.yilmaz"));

    // Paging metadata passes through the items alias unchanged.
    assert_eq!(page.total_count, 42);
    assert_eq!(page.page_number, 1);
    assert_eq!(page.page_size, 20);
}

#[test]
fn quotations_fixture_uses_canonical_data_field() {
    let envelope: ApiEnvelope<PagedResult<Quotation>> =
        serde_json::from_str(&load_fixture("quotations.json")).unwrap();
    let page = envelope.into_data("fallback").unwrap();

    assert_eq!(page.data.len(), 2);
    assert_eq!(page.data[0].status, QuotationStatus::Submitted);
    assert_eq!(page.data[0].total_amount, 185000.5);
    assert_eq!(
        page.data[0].valid_until.map(|d| d.to_string()).as_deref(),
        Some("2024-06-30")
    );
    assert_eq!(page.data[1].status, QuotationStatus::Draft);
    assert!(page.data[1].valid_until.is_none());
}

#[test]
fn legacy_success_casing_and_missing_paging_fields() {
    let envelope: ApiEnvelope<PagedResult<ApprovalRole>> =
        serde_json::from_str(&load_fixture("approval_roles.json")).unwrap();
    assert!(envelope.success);

    let page = envelope.into_data("fallback").unwrap();
    assert_eq!(page.data[0].name, "Satış Müdürü");
    assert_eq!(page.data[0].max_amount, Some(250000.0));
    assert!(page.data[1].max_amount.is_none());
    // pageNumber/pageSize are absent on this endpoint and default to 0.
    assert_eq!(page.page_number, 0);
    assert_eq!(page.page_size, 0);
    assert_eq!(page.total_pages(), 0);
}

#[test]
fn login_fixture_parses() {
    let envelope: ApiEnvelope<LoginResponse> =
        serde_json::from_str(&load_fixture("login.json")).unwrap();
    let login = envelope.into_data("fallback").unwrap();
    assert_eq!(login.user.id, 1);
    assert_eq!(login.branches[1].code, "ANK");
    assert!(login.expires_at.is_some());
}

#[test]
fn into_data_returns_payload_unchanged() {
    let envelope: ApiEnvelope<serde_json::Value> = serde_json::from_str(
        r#"{"success": true, "message": "", "data": {"answer": 42}, "errors": []}"#,
    )
    .unwrap();
    assert_eq!(
        envelope.into_data("fallback").unwrap(),
        serde_json::json!({"answer": 42})
    );
}

#[test]
fn failure_message_preference_order() {
    let full: ApiEnvelope<serde_json::Value> = serde_json::from_str(
        r#"{"success": false, "message": "öncelikli", "exceptionMessage": "ex",
            "data": null, "errors": ["e1"]}"#,
    )
    .unwrap();
    assert_eq!(full.failure_message("fallback"), "öncelikli");

    let errors_only: ApiEnvelope<serde_json::Value> = serde_json::from_str(
        r#"{"success": false, "message": "", "exceptionMessage": "ex",
            "data": null, "errors": ["e1", "e2"]}"#,
    )
    .unwrap();
    assert_eq!(errors_only.failure_message("fallback"), "e1, e2");

    let exception_only: ApiEnvelope<serde_json::Value> = serde_json::from_str(
        r#"{"success": false, "message": "", "exceptionMessage": "ex",
            "data": null, "errors": []}"#,
    )
    .unwrap();
    assert_eq!(exception_only.failure_message("fallback"), "ex");

    let bare: ApiEnvelope<serde_json::Value> =
        serde_json::from_str(r#"{"success": false, "data": null}"#).unwrap();
    assert_eq!(bare.failure_message("fallback"), "fallback");
}

#[test]
fn total_pages_rounds_up() {
    let page = PagedResult::<User> {
        data: vec![],
        total_count: 41,
        page_number: 1,
        page_size: 20,
    };
    assert_eq!(page.total_pages(), 3);
}
