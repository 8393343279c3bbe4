#[derive(Debug)]
pub enum ConfigError {
    IoError(std::io::Error),
    SerializeError(serde_yaml_ng::Error),
    ValidationError(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::IoError(e) => write!(f, "Config file error: {}", e),
            ConfigError::SerializeError(e) => write!(f, "Config format error: {}", e),
            ConfigError::ValidationError(e) => write!(f, "Config validation error: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::IoError(e) => Some(e),
            ConfigError::SerializeError(e) => Some(e),
            ConfigError::ValidationError(_) => None,
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::IoError(e)
    }
}

impl From<serde_yaml_ng::Error> for ConfigError {
    fn from(e: serde_yaml_ng::Error) -> Self {
        ConfigError::SerializeError(e)
    }
}
