mod conform;
mod descriptor;
mod prompt;
mod registry;

pub use conform::{SchemaViolation, conform, parse_completion};
pub use descriptor::{FieldKind, FieldSpec, MappingSchema, RecordSchema};
pub use prompt::{mapping_instruction, metadata_instruction, record_instruction};
pub use registry::{
    CAPITAL_CALL, CATEGORY_NAMES, CONVERTIBLE_LOAN_AGREEMENT, EQUITY_ROUND, GENERAL_INFORMATION,
    INVESTMENT_MAPPING, SECTOR_NAMES, mapping_schema, metadata_fields, record_schema,
};
