use crate::tax_id::domain::model::enums::tax_id_domain_error::TaxIdDomainError;

#[derive(Clone, Debug)]
pub struct ValidateTaxIdQuery {
    raw: String,
}

impl ValidateTaxIdQuery {
    pub fn new(raw: String, max_input_length: usize) -> Result<Self, TaxIdDomainError> {
        if raw.chars().count() > max_input_length {
            return Err(TaxIdDomainError::InputTooLong {
                max: max_input_length,
            });
        }
        Ok(Self { raw })
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }
}
