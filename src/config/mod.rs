mod settings;

pub use settings::{Command, Config, Settings, CONFIG_ENV_VAR};
