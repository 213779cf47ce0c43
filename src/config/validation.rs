use crate::error::AppError;
use std::path::Path;

/// Validates the configuration settings
///
/// # Arguments
/// * `api_domain` - The API domain to validate
/// * `log_file_path` - Optional log file path to validate
/// * `http_timeout_seconds` - Per-request timeout to validate
///
/// # Validation Rules
/// - API domain cannot be empty
/// - API domain must be a valid URL or domain name
/// - HTTP timeout must be non-zero
/// - If log file path is provided, it cannot be empty
/// - Log file path parent directory must exist or be creatable
pub fn validate_config(
    api_domain: &str,
    log_file_path: &Option<String>,
    http_timeout_seconds: u64,
) -> Result<(), AppError> {
    if api_domain.is_empty() {
        return Err(AppError::config_error("API domain cannot be empty"));
    }

    // Check if API domain looks like a valid URL or domain
    if !api_domain.starts_with("http://") && !api_domain.starts_with("https://") {
        // If it doesn't start with protocol, it should at least look like a domain
        if !api_domain.contains('.') && !api_domain.starts_with("localhost") {
            return Err(AppError::config_error(
                "API domain must be a valid URL or domain name",
            ));
        }
    }

    if http_timeout_seconds == 0 {
        return Err(AppError::config_error(
            "HTTP timeout must be at least 1 second",
        ));
    }

    // Validate log file path if provided
    if let Some(log_path) = log_file_path {
        if log_path.is_empty() {
            return Err(AppError::config_error("Log file path cannot be empty"));
        }

        // Check if parent directory exists or can be created
        if let Some(parent) = Path::new(log_path).parent()
            && !parent.exists()
        {
            // Try to create the directory to validate the path
            std::fs::create_dir_all(parent).map_err(|e| {
                AppError::config_error(format!(
                    "Cannot create log directory '{}': {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_config() {
        assert!(validate_config("https://fantasy.premierleague.com/api", &None, 10).is_ok());
        assert!(validate_config("http://localhost:8080", &None, 1).is_ok());
    }

    #[test]
    fn test_empty_api_domain_rejected() {
        let result = validate_config("", &None, 10);
        assert!(matches!(result, Err(AppError::Config(_))));
    }

    #[test]
    fn test_bare_word_api_domain_rejected() {
        let result = validate_config("notadomain", &None, 10);
        assert!(matches!(result, Err(AppError::Config(_))));
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let result = validate_config("https://api.example.com", &None, 0);
        assert!(matches!(result, Err(AppError::Config(_))));
    }

    #[test]
    fn test_empty_log_path_rejected() {
        let result = validate_config("https://api.example.com", &Some(String::new()), 10);
        assert!(matches!(result, Err(AppError::Config(_))));
    }
}
