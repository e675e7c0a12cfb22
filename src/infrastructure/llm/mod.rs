mod openai_client;

pub use openai_client::{OpenAiCompletionEngine, create_completion_engine};
