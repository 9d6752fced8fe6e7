use thiserror::Error;

#[derive(Error, Debug)]
pub enum FoyerError {
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    #[error("Foyer not found: {id}")]
    NotFound { id: i64 },

    #[error("Persistence failure: {message}")]
    PersistenceError { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Configuration validation failed for {field}: {message}")]
    ConfigValidationError { field: String, message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Persistence,
    Configuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl FoyerError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            FoyerError::InvalidArgument { .. } => ErrorCategory::Validation,
            FoyerError::NotFound { .. } => ErrorCategory::NotFound,
            FoyerError::PersistenceError { .. }
            | FoyerError::IoError(_)
            | FoyerError::SerializationError(_)
            | FoyerError::CsvError(_) => ErrorCategory::Persistence,
            FoyerError::ConfigError { .. }
            | FoyerError::InvalidConfigValueError { .. }
            | FoyerError::ConfigValidationError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::NotFound => ErrorSeverity::Medium,
            ErrorCategory::Validation | ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Persistence => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            FoyerError::InvalidArgument { .. } => {
                "提供 --nom/--capacite 或有效的 --json 內容".to_string()
            }
            FoyerError::NotFound { id } => {
                format!("使用 `tpfoyer list` 確認 foyer {} 是否存在", id)
            }
            FoyerError::PersistenceError { .. } => "檢查資料存放區的狀態後重試".to_string(),
            FoyerError::IoError(_) => "確認資料目錄存在且具有讀寫權限".to_string(),
            FoyerError::SerializationError(_) => "資料檔格式損毀，請檢查 JSON 內容".to_string(),
            FoyerError::CsvError(_) => "改用 --format table 或 --format json".to_string(),
            FoyerError::ConfigError { .. }
            | FoyerError::ConfigValidationError { .. } => "檢查 TOML 配置檔".to_string(),
            FoyerError::InvalidConfigValueError { field, .. } => {
                format!("修正配置欄位 `{}`", field)
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            FoyerError::InvalidArgument { message } => format!("輸入無效: {}", message),
            FoyerError::NotFound { id } => format!("找不到 foyer {}", id),
            FoyerError::InvalidConfigValueError {
                field,
                value,
                reason,
            } => format!("配置 {} 的值 '{}' 無效: {}", field, value, reason),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, FoyerError>;
