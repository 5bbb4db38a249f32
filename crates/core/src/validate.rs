//! Client-side form validation: synchronous, local, and advisory.

/// Declarative constraints for one field.
#[derive(Clone, Copy, Debug, Default)]
pub struct FieldRules {
    pub required: bool,
    pub min_length: Option<usize>,
}

impl FieldRules {
    pub fn required() -> Self {
        Self {
            required: true,
            min_length: None,
        }
    }

    pub fn required_with_min(min_length: usize) -> Self {
        Self {
            required: true,
            min_length: Some(min_length),
        }
    }
}

/// Outcome of validating one field: valid, or invalid with exactly one
/// inline message. When several rules fail at once the first wins, required
/// before minimum length.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FieldStatus {
    Valid,
    Invalid(String),
}

impl FieldStatus {
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    /// The inline message to show, if any.
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Valid => None,
            Self::Invalid(message) => Some(message),
        }
    }
}

/// Validate a field's raw value against its rules. The value is trimmed
/// first, so whitespace alone never satisfies anything.
pub fn validate_field(value: &str, rules: &FieldRules) -> FieldStatus {
    let trimmed = value.trim();
    if rules.required && trimmed.is_empty() {
        return FieldStatus::Invalid("This field is required.".to_string());
    }
    if let Some(min) = rules.min_length {
        if trimmed.chars().count() < min {
            return FieldStatus::Invalid(format!("Please enter at least {min} characters."));
        }
    }
    FieldStatus::Valid
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_required_field_is_invalid() {
        let status = validate_field("", &FieldRules::required());
        assert_eq!(status.message(), Some("This field is required."));
    }

    #[test]
    fn whitespace_only_counts_as_empty() {
        let status = validate_field("   ", &FieldRules::required());
        assert_eq!(status.message(), Some("This field is required."));
    }

    #[test]
    fn required_beats_min_length_when_both_fail() {
        let status = validate_field("", &FieldRules::required_with_min(3));
        assert_eq!(status.message(), Some("This field is required."));
    }

    #[test]
    fn too_short_value_gets_the_length_message() {
        let status = validate_field("ab", &FieldRules::required_with_min(3));
        assert_eq!(status.message(), Some("Please enter at least 3 characters."));
    }

    #[test]
    fn exactly_min_length_is_valid() {
        let status = validate_field("abc", &FieldRules::required_with_min(3));
        assert!(status.is_valid());
    }

    #[test]
    fn length_is_measured_after_trimming() {
        let status = validate_field("  ab  ", &FieldRules::required_with_min(3));
        assert_eq!(status.message(), Some("Please enter at least 3 characters."));
    }

    #[test]
    fn optional_empty_field_still_fails_min_length() {
        let rules = FieldRules {
            required: false,
            min_length: Some(2),
        };
        let status = validate_field("", &rules);
        assert_eq!(status.message(), Some("Please enter at least 2 characters."));
    }

    #[test]
    fn unconstrained_field_is_always_valid() {
        assert!(validate_field("", &FieldRules::default()).is_valid());
    }

    #[test]
    fn fixing_the_value_clears_the_failure() {
        let rules = FieldRules::required_with_min(3);
        assert!(!validate_field("ab", &rules).is_valid());
        assert!(validate_field("abc", &rules).is_valid());
    }
}
