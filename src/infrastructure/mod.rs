pub mod llm;
pub mod observability;
pub mod parsing;
pub mod storage;
