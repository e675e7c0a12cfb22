use crate::domain::{Category, MappingCategory};

/// Value shape of a single schema field. Kinds drive both the extraction
/// instruction shown to the completion engine and the conformance pass
/// applied to its output.
#[derive(Debug, Clone, Copy)]
pub enum FieldKind {
    Text,
    Number,
    Integer,
    Date,
    Boolean,
    /// A number constrained to [0, 1].
    Fraction,
    /// Exactly three characters, normalized to uppercase.
    CurrencyCode,
    TextList,
    /// A closed set of accepted string values.
    Enum(&'static [&'static str]),
    /// A nested object with its own field specs.
    Object(&'static [FieldSpec]),
}

#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub name: &'static str,
    pub description: &'static str,
    pub required: bool,
    pub kind: FieldKind,
}

/// The concrete record shape to populate for one document category.
#[derive(Debug, Clone, Copy)]
pub struct RecordSchema {
    pub category: Category,
    pub description: &'static str,
    pub fields: &'static [FieldSpec],
}

/// Canonical field set for one column-mapping category. Descriptions carry
/// the semantic meaning each source header is matched against.
#[derive(Debug, Clone, Copy)]
pub struct MappingSchema {
    pub category: MappingCategory,
    pub description: &'static str,
    pub fields: &'static [FieldSpec],
}
