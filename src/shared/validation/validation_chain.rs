use std::sync::Arc;

/// Result of a validation rule check
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: Vec<String>,
}

impl ValidationResult {
    pub fn valid() -> Self {
        Self {
            is_valid: true,
            errors: Vec::new(),
        }
    }

    pub fn invalid(error: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            errors: vec![error.into()],
        }
    }

    /// Merge two validation results
    pub fn merge(mut self, other: ValidationResult) -> Self {
        self.errors.extend(other.errors);
        self.is_valid = self.is_valid && other.is_valid;
        self
    }

    /// First recorded error, if any
    pub fn first_error(&self) -> Option<&str> {
        self.errors.first().map(String::as_str)
    }
}

/// A single rule in the chain of responsibility.
///
/// `T` is the record under validation.
pub trait ValidationRule<T>: Send + Sync {
    fn validate(&self, record: &T) -> ValidationResult;

    /// Name of this rule for logging
    fn rule_name(&self) -> &'static str;

    /// Check if this rule should be skipped for the record
    fn should_skip(&self, _record: &T) -> bool {
        false
    }
}

/// Ordered chain of validation rules
pub struct ValidationChain<T> {
    rules: Vec<Arc<dyn ValidationRule<T>>>,
    stop_on_first_error: bool,
}

impl<T> Clone for ValidationChain<T> {
    fn clone(&self) -> Self {
        Self {
            rules: self.rules.clone(),
            stop_on_first_error: self.stop_on_first_error,
        }
    }
}

impl<T> ValidationChain<T> {
    pub fn new() -> Self {
        Self {
            rules: Vec::new(),
            stop_on_first_error: false,
        }
    }

    /// Add a validation rule to the chain
    pub fn add_rule(mut self, rule: Arc<dyn ValidationRule<T>>) -> Self {
        self.rules.push(rule);
        self
    }

    /// Set whether to stop validation on first error
    pub fn stop_on_first_error(mut self, stop: bool) -> Self {
        self.stop_on_first_error = stop;
        self
    }

    /// Run the rules in insertion order
    pub fn validate(&self, record: &T) -> ValidationResult {
        let mut combined_result = ValidationResult::valid();

        for rule in &self.rules {
            if rule.should_skip(record) {
                continue;
            }

            let rule_result = rule.validate(record);

            if !rule_result.is_valid {
                log::debug!("Validation rule '{}' failed", rule.rule_name());
            }

            combined_result = combined_result.merge(rule_result);

            if self.stop_on_first_error && !combined_result.is_valid {
                break;
            }
        }

        combined_result
    }

    /// Get the number of rules in the chain
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }
}

impl<T> Default for ValidationChain<T> {
    fn default() -> Self {
        Self::new()
    }
}
