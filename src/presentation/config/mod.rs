mod environment;
mod settings;

pub use environment::Environment;
pub use settings::{
    LlmSettings, LoggingSettings, ParserSettings, ServerSettings, Settings, StagingSettings,
};
