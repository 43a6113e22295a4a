use thiserror::Error;

#[derive(Error, Debug)]
pub enum GreeterError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("TOML parsing error: {message}")]
    TomlParse { message: String },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid value for '{field}' ({value:?}): {reason}")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("EOF when reading a line")]
    InputClosed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ErrorSeverity {
    /// 對應的程序退出碼
    pub fn exit_code(self) -> i32 {
        match self {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

impl GreeterError {
    pub fn config(message: impl Into<String>) -> Self {
        GreeterError::Config {
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            GreeterError::InputClosed | GreeterError::Serialization(_) => ErrorCategory::Input,
            GreeterError::TomlParse { .. }
            | GreeterError::Config { .. }
            | GreeterError::InvalidConfigValue { .. } => ErrorCategory::Configuration,
            GreeterError::Io(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // 輸入流結束：印出診斷訊息後正常結束
            GreeterError::InputClosed => ErrorSeverity::Low,
            GreeterError::Serialization(_) => ErrorSeverity::Medium,
            GreeterError::TomlParse { .. }
            | GreeterError::Config { .. }
            | GreeterError::InvalidConfigValue { .. } => ErrorSeverity::High,
            GreeterError::Io(_) => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        format!("An error occurred: {}", self)
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            GreeterError::InputClosed => "Provide a name on standard input or pass --name",
            GreeterError::Serialization(_) => "Check that the output can be encoded as JSON",
            GreeterError::TomlParse { .. } => "Make sure the config file is valid TOML",
            GreeterError::Config { .. } => "Check the --config path and file permissions",
            GreeterError::InvalidConfigValue { .. } => {
                "Use a single word such as \"Hello\" or \"Hi\" for the salutation"
            }
            GreeterError::Io(_) => "Check that standard input and output are available",
        }
    }
}

pub type Result<T> = std::result::Result<T, GreeterError>;
