use thiserror::Error;

pub type Result<T> = std::result::Result<T, DemoError>;

#[derive(Error, Debug)]
pub enum DemoError {
    #[error("Teacher type '{0}' doesn't exist yet")]
    UnsupportedVariant(String),

    #[error("teacher object is empty or has no recognizable teacher fields")]
    EmptyOrUnrecognizedInput,

    #[error("teacher object carries fields of more than one teacher type")]
    AmbiguousVariant,

    #[error("Missing required property '{field}' for {variant} teacher")]
    MissingProperty { variant: &'static str, field: &'static str },

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl DemoError {
    pub fn missing_property(variant: &'static str, field: &'static str) -> Self {
        Self::MissingProperty { variant, field }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}
