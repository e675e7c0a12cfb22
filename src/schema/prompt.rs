//! Instruction construction for the structured completion engine. The
//! instruction travels as system content; the document text (or header list)
//! travels separately as user content.

use super::descriptor::{FieldKind, FieldSpec, MappingSchema, RecordSchema};
use super::registry::metadata_fields;

pub fn metadata_instruction() -> String {
    let mut out = String::from(
        "You classify financial fund-administration documents.\n\
         Extract all relevant information from the document provided by the user.\n\
         Respond with a single JSON object containing exactly these properties:\n",
    );
    push_field_lines(metadata_fields(), 0, &mut out);
    out.push_str(
        "\nReturn null for a property that cannot be determined. Respond with JSON only.",
    );
    out
}

pub fn record_instruction(schema: &RecordSchema) -> String {
    let mut out = format!(
        "You extract structured data from financial documents.\n\
         The document describes {}.\n\
         Extract all relevant information from the document provided by the user.\n\
         Respond with a single JSON object containing exactly these properties:\n",
        schema.description
    );
    push_field_lines(schema.fields, 0, &mut out);
    out.push_str(
        "\nReturn null for a property that cannot be found in the document. \
         Never guess or invent a value. Respond with JSON only.",
    );
    out
}

pub fn mapping_instruction(schema: &MappingSchema, headers: &[String]) -> String {
    let mut out = format!(
        "You map source CSV column headers onto a canonical schema for {} data.\n\
         The canonical fields are:\n",
        schema.description
    );
    for spec in schema.fields {
        out.push_str(&format!("- \"{}\": {}\n", spec.name, spec.description));
    }
    out.push_str("\nThe column headers of the source file are:\n");
    out.push_str(&serde_json::Value::from(headers.to_vec()).to_string());
    out.push_str(
        "\n\nRespond with a single JSON object whose keys are exactly the canonical field names. \
         For each canonical field, the value is the column header that best corresponds to it, \
         copied verbatim from the list above, or null if no header matches. Several fields may \
         map to the same header. Respond with JSON only.",
    );
    out
}

fn push_field_lines(fields: &[FieldSpec], depth: usize, out: &mut String) {
    for spec in fields {
        let indent = "  ".repeat(depth);
        let requirement = if spec.required { "required" } else { "optional" };
        out.push_str(&format!(
            "{indent}- \"{}\" ({}, {}): {}\n",
            spec.name,
            type_hint(&spec.kind),
            requirement,
            spec.description
        ));
        if let FieldKind::Object(nested) = spec.kind {
            push_field_lines(nested, depth + 1, out);
        }
    }
}

fn type_hint(kind: &FieldKind) -> String {
    match kind {
        FieldKind::Text => "string".to_string(),
        FieldKind::Number => "number".to_string(),
        FieldKind::Integer => "integer".to_string(),
        FieldKind::Date => "date in YYYY-MM-DD form".to_string(),
        FieldKind::Boolean => "boolean".to_string(),
        FieldKind::Fraction => "number between 0 and 1".to_string(),
        FieldKind::CurrencyCode => "3-letter currency code".to_string(),
        FieldKind::TextList => "list of strings".to_string(),
        FieldKind::Enum(variants) => format!(
            "one of {}",
            variants
                .iter()
                .map(|v| format!("\"{v}\""))
                .collect::<Vec<_>>()
                .join(", ")
        ),
        FieldKind::Object(_) => "object with these properties".to_string(),
    }
}
