use std::sync::Arc;

use mindelo::application::services::{ExtractResponse, ExtractionError, ExtractionService};
use mindelo::domain::{Category, DocumentSegment, MappingCategory};

use crate::helpers::{
    FailingParser, InMemoryStagingStore, MockCompletionEngine, RecordingCompletionEngine,
    SegmentedParser, StaticParser, capital_call_metadata_json, capital_call_record_json,
    investment_mapping_json,
};

fn capital_call_engine() -> MockCompletionEngine {
    MockCompletionEngine::new(
        capital_call_metadata_json(),
        capital_call_record_json(),
        investment_mapping_json(),
    )
}

#[tokio::test]
async fn given_successful_pipeline_when_extracting_then_staged_file_is_deleted() {
    let staging = Arc::new(InMemoryStagingStore::default());
    let service = ExtractionService::new(
        Arc::new(StaticParser::new("Capital call notice.")),
        Arc::new(capital_call_engine()),
        Arc::clone(&staging),
    );

    let response = service
        .extract(b"%PDF-1.4 stub", "capital_call.pdf", "application/pdf", None)
        .await
        .unwrap();

    assert_eq!(response.data.category(), Category::CapitalCall);
    assert_eq!(staging.stored_count(), 0);
    assert_eq!(staging.deleted_count(), 1);
}

#[tokio::test]
async fn given_failing_parser_when_extracting_then_staged_file_is_still_deleted() {
    let staging = Arc::new(InMemoryStagingStore::default());
    let service = ExtractionService::new(
        Arc::new(FailingParser),
        Arc::new(capital_call_engine()),
        Arc::clone(&staging),
    );

    let error = service
        .extract(b"%PDF-1.4 stub", "capital_call.pdf", "application/pdf", None)
        .await
        .unwrap_err();

    assert!(matches!(error, ExtractionError::Parsing(_)));
    assert_eq!(staging.stored_count(), 0);
    assert_eq!(staging.deleted_count(), 1);
}

#[tokio::test]
async fn given_unregistered_inferred_category_when_extracting_then_unsupported_category() {
    let metadata = r#"{"category":"ShareholderAgreement","entities":["Aldergrove"],"summary":"SHA.","containsFinancials":false}"#;
    let staging = Arc::new(InMemoryStagingStore::default());
    let service = ExtractionService::new(
        Arc::new(StaticParser::new("Shareholder agreement.")),
        Arc::new(MockCompletionEngine::new(
            metadata,
            capital_call_record_json(),
            investment_mapping_json(),
        )),
        Arc::clone(&staging),
    );

    let error = service
        .extract(b"%PDF-1.4 stub", "sha.pdf", "application/pdf", None)
        .await
        .unwrap_err();

    assert!(matches!(
        error,
        ExtractionError::UnsupportedCategory(Category::ShareholderAgreement)
    ));
    assert_eq!(staging.deleted_count(), 1);
}

#[tokio::test]
async fn given_unregistered_explicit_category_when_extracting_then_unsupported_category() {
    let service = ExtractionService::new(
        Arc::new(StaticParser::new("Capital call notice.")),
        Arc::new(capital_call_engine()),
        Arc::new(InMemoryStagingStore::default()),
    );

    let error = service
        .extract(
            b"%PDF-1.4 stub",
            "capital_call.pdf",
            "application/pdf",
            Some(Category::Other),
        )
        .await
        .unwrap_err();

    assert!(matches!(
        error,
        ExtractionError::UnsupportedCategory(Category::Other)
    ));
}

#[tokio::test]
async fn given_unsupported_extension_when_extracting_then_nothing_is_staged() {
    let staging = Arc::new(InMemoryStagingStore::default());
    let service = ExtractionService::new(
        Arc::new(StaticParser::new("unused")),
        Arc::new(capital_call_engine()),
        Arc::clone(&staging),
    );

    let error = service
        .extract(b"bytes", "report.xlsx", "application/octet-stream", None)
        .await
        .unwrap_err();

    assert!(matches!(error, ExtractionError::UnsupportedExtension(_)));
    assert_eq!(staging.stored_count(), 0);
    assert_eq!(staging.deleted_count(), 0);
}

#[tokio::test]
async fn given_multi_segment_document_when_extracting_then_all_segments_reach_inference() {
    let engine = Arc::new(RecordingCompletionEngine {
        payload: capital_call_metadata_json().to_string(),
        seen_texts: Default::default(),
    });
    let service = ExtractionService::new(
        Arc::new(SegmentedParser {
            segments: vec![
                DocumentSegment::new("First page of the notice.".to_string(), Some(1)),
                DocumentSegment::new("Second page with amounts.".to_string(), Some(2)),
            ],
        }),
        Arc::clone(&engine),
        Arc::new(InMemoryStagingStore::default()),
    );

    service
        .extract(b"%PDF-1.4 stub", "capital_call.pdf", "application/pdf", None)
        .await
        .unwrap();

    let seen = engine.seen_texts.lock().unwrap();
    assert!(seen[0].contains("First page of the notice."));
    assert!(seen[0].contains("Second page with amounts."));
}

#[tokio::test]
async fn given_blank_segments_when_extracting_then_fails_with_no_text() {
    let service = ExtractionService::new(
        Arc::new(SegmentedParser {
            segments: vec![DocumentSegment::new("   \n".to_string(), Some(1))],
        }),
        Arc::new(capital_call_engine()),
        Arc::new(InMemoryStagingStore::default()),
    );

    let error = service
        .extract(b"%PDF-1.4 stub", "empty.pdf", "application/pdf", None)
        .await
        .unwrap_err();

    assert!(matches!(error, ExtractionError::Parsing(_)));
}

#[tokio::test]
async fn given_extract_response_when_round_tripping_then_record_type_matches_category() {
    let service = ExtractionService::new(
        Arc::new(StaticParser::new("Capital call notice.")),
        Arc::new(capital_call_engine()),
        Arc::new(InMemoryStagingStore::default()),
    );

    let response = service
        .extract(b"%PDF-1.4 stub", "capital_call.pdf", "application/pdf", None)
        .await
        .unwrap();

    let serialized = serde_json::to_string(&response).unwrap();
    let parsed: ExtractResponse = serde_json::from_str(&serialized).unwrap();

    assert_eq!(parsed.data.category(), parsed.document_metadata.category);
    assert_eq!(parsed, response);
}

#[tokio::test]
async fn given_csv_with_headers_when_mapping_columns_then_returns_mapping() {
    let service = ExtractionService::new(
        Arc::new(StaticParser::new("unused")),
        Arc::new(capital_call_engine()),
        Arc::new(InMemoryStagingStore::default()),
    );

    let response = service
        .map_columns(
            b"Company,Ccy,Type\nAldergrove,EUR,Equity\n",
            "portfolio.csv",
            "text/csv",
            MappingCategory::Investment,
        )
        .await
        .unwrap();

    assert_eq!(
        response.data.get("companyName"),
        Some(&Some("Company".to_string()))
    );
    assert_eq!(response.file_metadata.extension, ".csv");
}

#[tokio::test]
async fn given_empty_csv_when_mapping_columns_then_fails_before_completion() {
    let service = ExtractionService::new(
        Arc::new(StaticParser::new("unused")),
        Arc::new(capital_call_engine()),
        Arc::new(InMemoryStagingStore::default()),
    );

    let error = service
        .map_columns(b"", "portfolio.csv", "text/csv", MappingCategory::Investment)
        .await
        .unwrap_err();

    assert!(matches!(error, ExtractionError::CsvHeaders(_)));
}

#[tokio::test]
async fn given_mapping_request_when_finished_then_staged_file_is_deleted() {
    let staging = Arc::new(InMemoryStagingStore::default());
    let service = ExtractionService::new(
        Arc::new(StaticParser::new("unused")),
        Arc::new(capital_call_engine()),
        Arc::clone(&staging),
    );

    service
        .map_columns(
            b"Company,Ccy,Type\n",
            "portfolio.csv",
            "text/csv",
            MappingCategory::Investment,
        )
        .await
        .unwrap();

    assert_eq!(staging.stored_count(), 0);
    assert_eq!(staging.deleted_count(), 1);
}
