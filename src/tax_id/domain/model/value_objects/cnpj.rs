use crate::tax_id::domain::{
    model::{
        enums::{invalid_reason::InvalidReason, validation_result::ValidationResult},
        value_objects::cnpj_digits,
    },
    services::checksum_validator::validate,
};

/// A CNPJ whose check digits have been verified.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Cnpj(String);

impl Cnpj {
    pub fn parse(raw: &str) -> Result<Self, InvalidReason> {
        match validate(raw) {
            ValidationResult::Valid => Ok(Self(cnpj_digits::normalize(raw))),
            ValidationResult::Invalid(reason) => Err(reason),
        }
    }

    pub fn value(&self) -> &str {
        &self.0
    }

    pub fn formatted(&self) -> String {
        cnpj_digits::format(&self.0)
    }
}
