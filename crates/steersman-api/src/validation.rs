//! Input validation utilities for the Steersman API
//!
//! Validation functions for names and values accepted by the administrative
//! endpoints.

use validator::ValidationError;

/// Maximum length for CDN, profile, and parameter names
pub const MAX_NAME_LENGTH: usize = 256;

/// Maximum length for a parameter value
pub const MAX_VALUE_LENGTH: usize = 1024;

/// Validate an entity name (CDN, profile, or parameter)
///
/// Names must:
/// - Not be empty
/// - Not exceed MAX_NAME_LENGTH characters
/// - Contain only alphanumeric characters, dots, hyphens, and underscores
pub fn validate_name(name: &str) -> Result<(), ValidationError> {
    if name.is_empty() {
        return Err(ValidationError::new("name_empty"));
    }
    if name.len() > MAX_NAME_LENGTH {
        return Err(ValidationError::new("name_too_long"));
    }
    if !name
        .chars()
        .all(|c| c.is_alphanumeric() || c == '.' || c == '-' || c == '_')
    {
        return Err(ValidationError::new("name_invalid_chars"));
    }
    Ok(())
}

/// Validate a parameter value (may be empty, length-bounded)
pub fn validate_parameter_value(value: &str) -> Result<(), ValidationError> {
    if value.len() > MAX_VALUE_LENGTH {
        return Err(ValidationError::new("value_too_long"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_valid_names() {
        assert!(validate_name("cdn1").is_ok());
        assert!(validate_name("EDGE_profile-2.5").is_ok());
    }

    #[test]
    fn test_invalid_names() {
        assert!(validate_name("").is_err());
        assert!(validate_name("has space").is_err());
        assert!(validate_name("slash/name").is_err());
        assert!(validate_name(&"x".repeat(MAX_NAME_LENGTH + 1)).is_err());
    }

    #[test]
    fn test_parameter_value_bounds() {
        assert!(validate_parameter_value("").is_ok());
        assert!(validate_parameter_value(&"v".repeat(MAX_VALUE_LENGTH)).is_ok());
        assert!(validate_parameter_value(&"v".repeat(MAX_VALUE_LENGTH + 1)).is_err());
    }

    proptest! {
        #[test]
        fn prop_alphanumeric_names_always_valid(name in "[a-zA-Z0-9._-]{1,64}") {
            prop_assert!(validate_name(&name).is_ok());
        }
    }
}
