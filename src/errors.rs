use std::fmt;

#[derive(Debug, Clone)]
pub enum RewardsError {
    DatabaseConfig(String),
    DatabaseConnection(String),
    DatabaseOperation(String),
    Validation(String),
    NotFound(String),
}

impl RewardsError {
    pub fn code(&self) -> &'static str {
        match self {
            RewardsError::DatabaseConfig(_) => "E001",
            RewardsError::DatabaseConnection(_) => "E002",
            RewardsError::DatabaseOperation(_) => "E003",
            RewardsError::Validation(_) => "E004",
            RewardsError::NotFound(_) => "E005",
        }
    }

    pub fn error_type(&self) -> &'static str {
        match self {
            RewardsError::DatabaseConfig(_) => "Database Configuration Error",
            RewardsError::DatabaseConnection(_) => "Database Connection Error",
            RewardsError::DatabaseOperation(_) => "Database Operation Error",
            RewardsError::Validation(_) => "Validation Error",
            RewardsError::NotFound(_) => "Resource Not Found",
        }
    }

    pub fn message(&self) -> &str {
        match self {
            RewardsError::DatabaseConfig(msg) => msg,
            RewardsError::DatabaseConnection(msg) => msg,
            RewardsError::DatabaseOperation(msg) => msg,
            RewardsError::Validation(msg) => msg,
            RewardsError::NotFound(msg) => msg,
        }
    }

    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for RewardsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for RewardsError {}

impl RewardsError {
    pub fn database_config<T: Into<String>>(msg: T) -> Self {
        RewardsError::DatabaseConfig(msg.into())
    }

    pub fn database_connection<T: Into<String>>(msg: T) -> Self {
        RewardsError::DatabaseConnection(msg.into())
    }

    pub fn database_operation<T: Into<String>>(msg: T) -> Self {
        RewardsError::DatabaseOperation(msg.into())
    }

    pub fn validation<T: Into<String>>(msg: T) -> Self {
        RewardsError::Validation(msg.into())
    }

    pub fn not_found<T: Into<String>>(msg: T) -> Self {
        RewardsError::NotFound(msg.into())
    }
}

impl From<sea_orm::DbErr> for RewardsError {
    fn from(err: sea_orm::DbErr) -> Self {
        RewardsError::DatabaseOperation(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, RewardsError>;
