use std::sync::Arc;

use mindelo::application::services::{ExtractorError, RecordExtractor};
use mindelo::domain::{Category, DocumentRecord};
use mindelo::schema::{SchemaViolation, record_schema};

use crate::helpers::{FixedCompletionEngine, capital_call_record_json};

fn extractor(payload: &str) -> RecordExtractor<FixedCompletionEngine> {
    RecordExtractor::new(Arc::new(FixedCompletionEngine::new(payload)))
}

#[tokio::test]
async fn given_complete_completion_when_extracting_capital_call_then_populates_record() {
    let extractor = extractor(capital_call_record_json());
    let schema = record_schema(Category::CapitalCall).unwrap();

    let record = extractor.extract("capital call text", schema).await.unwrap();

    let DocumentRecord::CapitalCall(call) = record else {
        panic!("expected a capital call record");
    };
    assert_eq!(call.name.as_deref(), Some("Valentina Pape"));
    assert_eq!(call.equity_share, Some(0.025));
    assert_eq!(call.currency.as_deref(), Some("EUR"));
    // The explicit "NULL" marker means absent, not a placeholder value.
    assert_eq!(call.adjustments_from_previous_capital_calls, None);
}

#[tokio::test]
async fn given_fenced_completion_when_extracting_then_fences_are_tolerated() {
    let fenced = format!("```json\n{}\n```", capital_call_record_json());
    let extractor = extractor(&fenced);
    let schema = record_schema(Category::CapitalCall).unwrap();

    let record = extractor.extract("capital call text", schema).await.unwrap();
    assert_eq!(record.category(), Category::CapitalCall);
}

#[tokio::test]
async fn given_lowercase_currency_when_extracting_then_normalized_to_uppercase() {
    let payload = r#"{"name":"Valentina Pape","currency":"eur"}"#;
    let extractor = extractor(payload);
    let schema = record_schema(Category::CapitalCall).unwrap();

    let record = extractor.extract("capital call text", schema).await.unwrap();
    let DocumentRecord::CapitalCall(call) = record else {
        panic!("expected a capital call record");
    };
    assert_eq!(call.currency.as_deref(), Some("EUR"));
}

#[tokio::test]
async fn given_out_of_range_equity_share_when_extracting_then_fails_validation() {
    let payload = r#"{"equityShare":1.5}"#;
    let extractor = extractor(payload);
    let schema = record_schema(Category::CapitalCall).unwrap();

    let error = extractor
        .extract("capital call text", schema)
        .await
        .unwrap_err();
    assert!(matches!(
        error,
        ExtractorError::Schema(SchemaViolation::OutOfRange { .. })
    ));
}

#[tokio::test]
async fn given_four_letter_currency_when_extracting_then_fails_validation() {
    let payload = r#"{"currency":"EURO"}"#;
    let extractor = extractor(payload);
    let schema = record_schema(Category::CapitalCall).unwrap();

    let error = extractor
        .extract("capital call text", schema)
        .await
        .unwrap_err();
    assert!(matches!(
        error,
        ExtractorError::Schema(SchemaViolation::InvalidCurrency { .. })
    ));
}

#[tokio::test]
async fn given_unparseable_date_when_extracting_then_fails_validation() {
    let payload = r#"{"date":"sometime in March"}"#;
    let extractor = extractor(payload);
    let schema = record_schema(Category::CapitalCall).unwrap();

    let error = extractor
        .extract("capital call text", schema)
        .await
        .unwrap_err();
    assert!(matches!(
        error,
        ExtractorError::Schema(SchemaViolation::InvalidDate { .. })
    ));
}

#[tokio::test]
async fn given_dotted_european_date_when_extracting_then_normalized_to_iso() {
    let payload = r#"{"date":"15.03.2024"}"#;
    let extractor = extractor(payload);
    let schema = record_schema(Category::CapitalCall).unwrap();

    let record = extractor.extract("capital call text", schema).await.unwrap();
    let DocumentRecord::CapitalCall(call) = record else {
        panic!("expected a capital call record");
    };
    assert_eq!(
        call.date,
        Some(chrono::NaiveDate::from_ymd_opt(2024, 3, 15).unwrap())
    );
}

#[tokio::test]
async fn given_missing_required_field_when_extracting_convertible_loan_then_fails() {
    let payload = r#"{"date":"2024-06-01","loanAmount":500000.0,"currency":"EUR","interestRate":0.06,"valuationCap":null,"valuationDiscount":0.2}"#;
    let extractor = extractor(payload);
    let schema = record_schema(Category::ConvertibleLoanAgreement).unwrap();

    let error = extractor.extract("loan text", schema).await.unwrap_err();
    assert!(matches!(
        error,
        ExtractorError::Schema(SchemaViolation::MissingRequired { .. })
    ));
}

#[tokio::test]
async fn given_complete_completion_when_extracting_convertible_loan_then_succeeds() {
    let payload = r#"{"date":"2024-06-01","loanAmount":500000.0,"currency":"EUR","interestRate":0.06,"valuationCap":8000000.0,"valuationDiscount":0.2}"#;
    let extractor = extractor(payload);
    let schema = record_schema(Category::ConvertibleLoanAgreement).unwrap();

    let record = extractor.extract("loan text", schema).await.unwrap();
    let DocumentRecord::ConvertibleLoanAgreement(loan) = record else {
        panic!("expected a convertible loan record");
    };
    assert_eq!(loan.loan_amount, 500_000.0);
    assert_eq!(loan.valuation_discount, 0.2);
}

#[tokio::test]
async fn given_every_registered_category_when_extracting_then_record_type_matches() {
    for category in Category::ALL {
        let Some(schema) = record_schema(category) else {
            continue;
        };
        let payload = minimal_record_json(category);
        let extractor = extractor(payload);

        let record = extractor.extract("document text", schema).await.unwrap();
        assert_eq!(record.category(), category);
    }
}

#[tokio::test]
async fn given_non_object_completion_when_extracting_then_fails() {
    let extractor = extractor("[]");
    let schema = record_schema(Category::CapitalCall).unwrap();

    let error = extractor.extract("text", schema).await.unwrap_err();
    assert!(matches!(
        error,
        ExtractorError::Schema(SchemaViolation::NotAnObject)
    ));
}

#[tokio::test]
async fn given_malformed_completion_when_extracting_then_fails() {
    let extractor = extractor("the document is a capital call");
    let schema = record_schema(Category::CapitalCall).unwrap();

    let error = extractor.extract("text", schema).await.unwrap_err();
    assert!(matches!(
        error,
        ExtractorError::Schema(SchemaViolation::MalformedJson(_))
    ));
}

fn minimal_record_json(category: Category) -> &'static str {
    match category {
        Category::CapitalCall => r#"{"name":"Valentina Pape"}"#,
        Category::ConvertibleLoanAgreement => {
            r#"{"date":"2024-06-01","loanAmount":500000.0,"currency":"EUR","interestRate":0.06,"valuationCap":8000000.0,"valuationDiscount":0.2}"#
        }
        Category::EquityRound => r#"{"roundName":"Series A"}"#,
        Category::GeneralInformation => r#"{"companyName":"Aldergrove Robotics"}"#,
        _ => unreachable!("only registered categories are exercised"),
    }
}
