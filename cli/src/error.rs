use std::fmt;

/// Main error type for the capstone CLI
#[derive(Debug)]
pub enum CliError {
    /// Configuration-related errors
    Config(String),
    /// File and terminal I/O errors
    Io(std::io::Error),
    /// Form input rejected before any request was made
    Validation(String),
    /// Command execution errors
    Command(String),
    /// Communication with the generator server
    Communication(String),
    /// Generic errors from anyhow
    Other(anyhow::Error),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Config(msg) => write!(f, "Configuration error: {msg}"),
            CliError::Io(err) => write!(f, "I/O error: {err}"),
            CliError::Validation(msg) => write!(f, "{msg}"),
            CliError::Command(msg) => write!(f, "Command error: {msg}"),
            CliError::Communication(msg) => write!(f, "Communication error: {msg}"),
            CliError::Other(err) => write!(f, "Error: {err}"),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Io(err) => Some(err),
            CliError::Other(err) => Some(err.as_ref()),
            _ => None,
        }
    }
}

impl CliError {
    /// Get the exit code for this error type
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Config(_) => 2,
            CliError::Io(_) => 3,
            CliError::Validation(_) => 4,
            CliError::Command(_) => 5,
            CliError::Communication(_) => 7,
            CliError::Other(_) => 1,
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::Io(err)
    }
}

impl From<anyhow::Error> for CliError {
    fn from(err: anyhow::Error) -> Self {
        CliError::Other(err)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        CliError::Other(err.into())
    }
}

impl From<reqwest::Error> for CliError {
    fn from(err: reqwest::Error) -> Self {
        CliError::Communication(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes_are_distinct() {
        let errors = [
            CliError::Config(String::new()),
            CliError::Io(std::io::Error::new(std::io::ErrorKind::Other, "io")),
            CliError::Validation(String::new()),
            CliError::Command(String::new()),
            CliError::Communication(String::new()),
            CliError::Other(anyhow::anyhow!("other")),
        ];
        let mut codes: Vec<i32> = errors.iter().map(CliError::exit_code).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), errors.len());
    }

    #[test]
    fn test_validation_message_is_shown_verbatim() {
        let err = CliError::Validation("Please enter a keyword or field of study".to_string());
        assert_eq!(err.to_string(), "Please enter a keyword or field of study");
    }
}
