//! Error types for the hub onboarding service.

/// Top-level error type.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Database error: {0}")]
    Database(#[from] DatabaseError),

    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-related errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required configuration: {key}. {hint}")]
    MissingRequired { key: String, hint: String },

    #[error("Invalid configuration value for {key}: {message}")]
    InvalidValue { key: String, message: String },
}

/// Database-related errors.
#[derive(Debug, thiserror::Error)]
pub enum DatabaseError {
    #[error("Connection pool error: {0}")]
    Pool(String),

    #[error("Query failed: {0}")]
    Query(String),

    #[error("Migration failed: {0}")]
    Migration(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Page descriptor field named in validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DescriptorField {
    Image,
    Title,
    Subtitle,
}

impl std::fmt::Display for DescriptorField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Image => "image",
            Self::Title => "title",
            Self::Subtitle => "subtitle",
        };
        write!(f, "{s}")
    }
}

/// Onboarding catalog errors. Both variants are programmer errors.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Invalid argument for {field}: {reason}")]
    InvalidArgument {
        field: DescriptorField,
        reason: &'static str,
    },

    #[error("Page position {position} out of range (count is {count})")]
    OutOfRange { position: i64, count: usize },
}

/// Failures reading or writing the onboarding completion flag.
///
/// Never leaves the gate: callers only see the fail-safe boolean.
#[derive(Debug, thiserror::Error)]
pub enum GateError {
    #[error("Preference store failed: {0}")]
    Store(#[from] DatabaseError),

    #[error("Stored completion flag is not a boolean: {value}")]
    NotBoolean { value: serde_json::Value },
}

/// Result type alias for the service.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    fn bind_port() -> Result<()> {
        Err::<(), _>(std::io::Error::new(
            std::io::ErrorKind::AddrInUse,
            "address already in use",
        ))?;
        Ok(())
    }

    fn load_catalog() -> Result<()> {
        Err::<(), _>(CatalogError::InvalidArgument {
            field: DescriptorField::Title,
            reason: "must not be empty or blank",
        })?;
        Ok(())
    }

    #[test]
    fn startup_failures_convert_into_top_level_error() {
        assert!(matches!(bind_port(), Err(Error::Io(_))));
        assert!(matches!(load_catalog(), Err(Error::Catalog(_))));

        let config: Error = ConfigError::InvalidValue {
            key: "HUB_HTTP_PORT".to_string(),
            message: "not a port".to_string(),
        }
        .into();
        assert!(config.to_string().starts_with("Configuration error:"));

        let db: Error = DatabaseError::Pool("locked".to_string()).into();
        assert!(matches!(db, Error::Database(DatabaseError::Pool(_))));
    }

    #[test]
    fn catalog_error_names_field() {
        let err = CatalogError::InvalidArgument {
            field: DescriptorField::Subtitle,
            reason: "must not be empty or blank",
        };
        assert_eq!(
            err.to_string(),
            "Invalid argument for subtitle: must not be empty or blank"
        );
    }
}
