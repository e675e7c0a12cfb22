use mindelo::domain::{CapitalCallRecord, Category, DocumentRecord};

fn empty_capital_call() -> CapitalCallRecord {
    CapitalCallRecord {
        name: None,
        date: None,
        deadline: None,
        commitment: None,
        equity_share: None,
        previous_contribution_to_target: None,
        contribution_to_target: None,
        organizational_expenses: None,
        liquidity_buffer: None,
        platform_fee: None,
        adjustments_from_previous_capital_calls: None,
        total_capital_called: None,
        outstanding_commitment_to_target: None,
        currency: None,
    }
}

#[test]
fn given_record_when_serializing_then_type_tag_carries_category_name() {
    let record = DocumentRecord::CapitalCall(empty_capital_call());

    let json = serde_json::to_value(&record).unwrap();
    assert_eq!(json["type"], "CapitalCall");
}

#[test]
fn given_serialized_record_when_deserializing_then_round_trips() {
    let record = DocumentRecord::CapitalCall(CapitalCallRecord {
        name: Some("Valentina Pape".to_string()),
        equity_share: Some(0.025),
        ..empty_capital_call()
    });

    let json = serde_json::to_string(&record).unwrap();
    let parsed: DocumentRecord = serde_json::from_str(&json).unwrap();

    assert_eq!(parsed, record);
    assert_eq!(parsed.category(), Category::CapitalCall);
}

#[test]
fn given_conformed_object_when_building_record_then_tag_is_injected() {
    let value = serde_json::json!({
        "date": "2024-06-01",
        "loanAmount": 500000.0,
        "currency": "EUR",
        "interestRate": 0.06,
        "valuationCap": 8000000.0,
        "valuationDiscount": 0.2
    });

    let record =
        DocumentRecord::from_conformed(Category::ConvertibleLoanAgreement, value).unwrap();
    assert_eq!(record.category(), Category::ConvertibleLoanAgreement);
}

#[test]
fn given_mismatched_shape_when_building_record_then_fails() {
    // A convertible loan without its required amounts must not deserialize.
    let value = serde_json::json!({ "date": "2024-06-01" });

    assert!(DocumentRecord::from_conformed(Category::ConvertibleLoanAgreement, value).is_err());
}
