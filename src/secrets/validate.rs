//! Secret name validation.

use lazy_regex::regex_is_match;

use super::error::{Result, SecretsError};

/// Validate a secret name against GitHub's rules: alphanumerics and
/// underscores only, no leading digit, and the `GITHUB_` prefix is
/// reserved by the platform.
pub fn validate_secret_name(name: &str) -> Result<()> {
    if !regex_is_match!(r"^[a-zA-Z_][a-zA-Z0-9_]*$", name) {
        return Err(SecretsError::InvalidSecretName {
            name: name.to_string(),
            reason: "may only contain alphanumeric characters or underscores and must not start with a number",
        });
    }

    if name.to_ascii_uppercase().starts_with("GITHUB_") {
        return Err(SecretsError::InvalidSecretName {
            name: name.to_string(),
            reason: "must not start with the GITHUB_ prefix",
        });
    }

    Ok(())
}
