use thiserror::Error;

#[derive(Error, Debug)]
pub enum XdmError {
    #[error("Missing required field: {node}.{field}")]
    MissingRequiredField {
        node: &'static str,
        field: &'static str,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid configuration value for {field}: {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, XdmError>;

impl XdmError {
    /// 給 CLI 使用者看的簡短訊息
    pub fn user_friendly_message(&self) -> String {
        match self {
            XdmError::MissingRequiredField { node, field } => {
                format!("{} is missing required field '{}'", node, field)
            }
            XdmError::IoError(e) => format!("Could not read input: {}", e),
            XdmError::SerializationError(e) => format!("Could not render XDM payload: {}", e),
            XdmError::ConfigError { message } => format!("Configuration problem: {}", message),
            XdmError::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid value for '{}': {}", field, reason)
            }
        }
    }
}
