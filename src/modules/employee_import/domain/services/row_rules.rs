/// Row-level rules for employee import records.
///
/// The rules run in a fixed priority order and the first failure wins, so a
/// row never carries more than one message.
use std::sync::Arc;

use crate::modules::employee_import::domain::entities::ParsedRow;
use crate::shared::validation::{ValidationChain, ValidationResult, ValidationRule};

pub const NAME_REQUIRED: &str = "Name is required (min 2 chars)";
pub const INVALID_EMAIL: &str = "Invalid email";
pub const CITY_REQUIRED: &str = "City is required";
pub const MEAL_TYPES_REQUIRED: &str = "Meal types required";

const MIN_NAME_CHARS: usize = 2;

pub struct NameRule;

impl ValidationRule<ParsedRow> for NameRule {
    fn validate(&self, row: &ParsedRow) -> ValidationResult {
        if row.name.chars().count() < MIN_NAME_CHARS {
            return ValidationResult::invalid(NAME_REQUIRED);
        }
        ValidationResult::valid()
    }

    fn rule_name(&self) -> &'static str {
        "NameRequired"
    }
}

/// Only checks for an `@`; deliverability is the roster service's concern
pub struct EmailRule;

impl ValidationRule<ParsedRow> for EmailRule {
    fn validate(&self, row: &ParsedRow) -> ValidationResult {
        if row.email.is_empty() || !row.email.contains('@') {
            return ValidationResult::invalid(INVALID_EMAIL);
        }
        ValidationResult::valid()
    }

    fn rule_name(&self) -> &'static str {
        "EmailFormat"
    }
}

pub struct CityRule;

impl ValidationRule<ParsedRow> for CityRule {
    fn validate(&self, row: &ParsedRow) -> ValidationResult {
        if row.city.is_empty() {
            return ValidationResult::invalid(CITY_REQUIRED);
        }
        ValidationResult::valid()
    }

    fn rule_name(&self) -> &'static str {
        "CityRequired"
    }
}

pub struct MealTypesRule;

impl ValidationRule<ParsedRow> for MealTypesRule {
    fn validate(&self, row: &ParsedRow) -> ValidationResult {
        if row.meal_types.is_empty() {
            return ValidationResult::invalid(MEAL_TYPES_REQUIRED);
        }
        ValidationResult::valid()
    }

    fn rule_name(&self) -> &'static str {
        "MealTypesRequired"
    }
}

/// Name, email, city, meal types; stops at the first failure
pub fn employee_row_chain() -> ValidationChain<ParsedRow> {
    ValidationChain::new()
        .add_rule(Arc::new(NameRule))
        .add_rule(Arc::new(EmailRule))
        .add_rule(Arc::new(CityRule))
        .add_rule(Arc::new(MealTypesRule))
        .stop_on_first_error(true)
}
