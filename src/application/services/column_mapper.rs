use std::collections::BTreeMap;
use std::sync::Arc;

use serde_json::Value;

use crate::application::ports::CompletionEngine;
use crate::domain::ColumnMapping;
use crate::schema::{MappingSchema, SchemaViolation, mapping_instruction, parse_completion};

use super::record_extractor::ExtractorError;

/// Maps source-file column headers onto a canonical mapping schema with one
/// structured completion. The result carries exactly the schema's canonical
/// field set; duplicate header assignments and omissions are both legal.
pub struct ColumnMapper<C>
where
    C: CompletionEngine,
{
    engine: Arc<C>,
}

impl<C> ColumnMapper<C>
where
    C: CompletionEngine,
{
    pub fn new(engine: Arc<C>) -> Self {
        Self { engine }
    }

    #[tracing::instrument(skip_all, fields(category = %schema.category, headers = headers.len()))]
    pub async fn map(
        &self,
        headers: &[String],
        schema: &'static MappingSchema,
    ) -> Result<ColumnMapping, ExtractorError> {
        let instruction = mapping_instruction(schema, headers);
        let header_list = Value::from(headers.to_vec()).to_string();
        let completion = self.engine.complete(&instruction, &header_list).await?;

        let value = parse_completion(&completion)?;
        let object = value.as_object().ok_or(SchemaViolation::NotAnObject)?;

        let mut mapping = BTreeMap::new();
        for spec in schema.fields {
            let assigned = match object.get(spec.name) {
                None | Some(Value::Null) => None,
                Some(Value::String(s)) if s.is_empty() || s.eq_ignore_ascii_case("null") => None,
                Some(Value::String(s)) => {
                    if !headers.iter().any(|header| header == s) {
                        return Err(SchemaViolation::UnknownHeader {
                            field: spec.name.to_string(),
                            header: s.clone(),
                        }
                        .into());
                    }
                    Some(s.clone())
                }
                Some(_) => {
                    return Err(SchemaViolation::WrongType {
                        field: spec.name.to_string(),
                        expected: "string",
                    }
                    .into());
                }
            };
            mapping.insert(spec.name.to_string(), assigned);
        }

        tracing::debug!(
            mapped = mapping.values().filter(|v| v.is_some()).count(),
            "Columns mapped"
        );
        Ok(ColumnMapping(mapping))
    }
}
