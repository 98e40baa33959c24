mod settings;

pub use settings::{environment_source, LogFormat, LoggingSettings, Settings, TemplateSettings};
