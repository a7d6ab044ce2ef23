mod app_config;

pub use app_config::{
    AppConfig, LogFormat, LoggingSettings, QueueSettings, ServerSettings, StorageSettings,
};
