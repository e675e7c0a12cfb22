use mindelo::domain::{Category, MappingCategory};
use mindelo::schema::{CATEGORY_NAMES, mapping_schema, record_schema};

#[test]
fn given_registered_category_when_looking_up_then_schema_carries_same_category() {
    for category in [
        Category::CapitalCall,
        Category::ConvertibleLoanAgreement,
        Category::EquityRound,
        Category::GeneralInformation,
    ] {
        let schema = record_schema(category).expect("category should have a schema");
        assert_eq!(schema.category, category);
        assert!(!schema.fields.is_empty());
    }
}

#[test]
fn given_unregistered_category_when_looking_up_then_returns_none() {
    for category in [
        Category::LimitedPartnershipAgreement,
        Category::ShareholderAgreement,
        Category::Other,
    ] {
        assert!(record_schema(category).is_none(), "{category} has no schema");
    }
}

#[test]
fn given_category_name_table_when_comparing_then_matches_enum_serialization() {
    assert_eq!(CATEGORY_NAMES.len(), Category::ALL.len());
    for (name, category) in CATEGORY_NAMES.iter().zip(Category::ALL) {
        assert_eq!(*name, category.as_str());
    }
}

#[test]
fn given_investment_mapping_when_looking_up_then_exposes_canonical_field_set() {
    let schema = mapping_schema(MappingCategory::Investment);

    let mut names: Vec<&str> = schema.fields.iter().map(|f| f.name).collect();
    names.sort_unstable();
    assert_eq!(
        names,
        vec![
            "businessModel",
            "companyName",
            "currency",
            "sector",
            "type",
            "website"
        ]
    );
}

#[test]
fn given_convertible_loan_schema_when_inspecting_then_every_field_is_required() {
    let schema = record_schema(Category::ConvertibleLoanAgreement).unwrap();
    assert!(schema.fields.iter().all(|f| f.required));
}

#[test]
fn given_capital_call_schema_when_inspecting_then_every_field_is_optional() {
    let schema = record_schema(Category::CapitalCall).unwrap();
    assert!(schema.fields.iter().all(|f| !f.required));
}
