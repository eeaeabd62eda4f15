use crate::tax_id::domain::model::{
    enums::{invalid_reason::InvalidReason, validation_result::ValidationResult},
    value_objects::{cnpj_digits::CnpjDigits, weighted_modulus_11::WeightedModulus11},
};

pub trait ChecksumValidator: Send + Sync {
    fn validate(&self, raw: &str) -> ValidationResult;
}

/// Brazilian CNPJ: two weighted modulus-11 check digits over a 12-digit base.
#[derive(Clone, Copy, Debug, Default)]
pub struct CnpjChecksumValidator;

impl ChecksumValidator for CnpjChecksumValidator {
    fn validate(&self, raw: &str) -> ValidationResult {
        validate(raw)
    }
}

pub fn validate(raw: &str) -> ValidationResult {
    let digits = match CnpjDigits::parse(raw) {
        Ok(digits) => digits,
        Err(reason) => return ValidationResult::Invalid(reason),
    };

    let first = WeightedModulus11::CNPJ_FIRST_DIGIT.check_digit(digits.base());
    if first != digits.first_check_digit() {
        return ValidationResult::Invalid(InvalidReason::CheckDigitMismatch);
    }

    let second =
        WeightedModulus11::CNPJ_SECOND_DIGIT.check_digit(digits.base_with_first_check_digit());
    if second != digits.second_check_digit() {
        return ValidationResult::Invalid(InvalidReason::CheckDigitMismatch);
    }

    ValidationResult::Valid
}
