//! Error handling for the CLI application

use katas_core::KataError;
use thiserror::Error;

/// Exit status for invalid user input
pub const EXIT_INVALID_ARGUMENT: u8 = 2;

/// Exit status for every other failure
pub const EXIT_FAILURE: u8 = 1;

/// Custom error type for CLI-specific errors
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration file could not be read or parsed
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Variants that must agree produced different results
    #[error("{module} variants disagree: {details}")]
    Disagreement {
        /// Algorithm group that failed the cross-check
        module: String,
        /// Per-method results
        details: String,
    },
}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;

/// Find the validation error in an error chain, if there is one
pub fn invalid_argument(err: &anyhow::Error) -> Option<&KataError> {
    err.chain().find_map(|cause| cause.downcast_ref::<KataError>())
}

/// Map an error to the process exit status
pub fn exit_code(err: &anyhow::Error) -> u8 {
    if invalid_argument(err).is_some() {
        EXIT_INVALID_ARGUMENT
    } else {
        EXIT_FAILURE
    }
}

/// Render an error for stderr, keeping validation failures distinct from faults
pub fn describe(err: &anyhow::Error) -> String {
    match invalid_argument(err) {
        Some(KataError::InvalidArgument(msg)) => format!("Invalid argument: {msg}"),
        None => format!("Error: {err:#}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;

    #[test]
    fn test_config_error_display() {
        let error = CliError::ConfigError("invalid format".to_string());
        assert_eq!(error.to_string(), "Configuration error: invalid format");
    }

    #[test]
    fn test_disagreement_display() {
        let error = CliError::Disagreement {
            module: "factorial".to_string(),
            details: "Iterative=120, Recursive=24".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "factorial variants disagree: Iterative=120, Recursive=24"
        );
    }

    #[test]
    fn test_invalid_argument_exit_code() {
        let err = anyhow::Error::new(KataError::invalid_argument("Number must be non-negative"));
        assert_eq!(exit_code(&err), EXIT_INVALID_ARGUMENT);
        assert_eq!(describe(&err), "Invalid argument: Number must be non-negative");
    }

    #[test]
    fn test_invalid_argument_found_under_context() {
        let result: Result<(), KataError> = Err(KataError::invalid_argument("blank"));
        let err = result.context("counting words").unwrap_err();
        assert_eq!(exit_code(&err), EXIT_INVALID_ARGUMENT);
    }

    #[test]
    fn test_other_errors_are_failures() {
        let err = anyhow::Error::new(CliError::ConfigError("bad toml".to_string()));
        assert_eq!(exit_code(&err), EXIT_FAILURE);
        assert_eq!(describe(&err), "Error: Configuration error: bad toml");
    }

    #[test]
    fn test_cli_result_type_alias() {
        let success: CliResult<String> = Ok("test".to_string());
        assert!(success.is_ok());

        let failure: CliResult<String> = Err(anyhow::anyhow!("test error"));
        assert!(failure.unwrap_err().to_string().contains("test error"));
    }
}
