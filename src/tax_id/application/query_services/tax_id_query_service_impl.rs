use std::sync::Arc;

use async_trait::async_trait;

use crate::tax_id::domain::{
    model::{
        enums::tax_id_domain_error::TaxIdDomainError,
        queries::validate_tax_id_query::ValidateTaxIdQuery,
        value_objects::cnpj_digits::{self, CNPJ_LENGTH},
    },
    services::{
        checksum_validator::ChecksumValidator,
        tax_id_query_service::{TaxIdQueryService, TaxIdValidationOutcome},
    },
};

pub struct TaxIdQueryServiceImpl {
    validator: Arc<dyn ChecksumValidator>,
}

impl TaxIdQueryServiceImpl {
    pub fn new(validator: Arc<dyn ChecksumValidator>) -> Self {
        Self { validator }
    }
}

#[async_trait]
impl TaxIdQueryService for TaxIdQueryServiceImpl {
    async fn handle_validate_tax_id(
        &self,
        query: ValidateTaxIdQuery,
    ) -> Result<TaxIdValidationOutcome, TaxIdDomainError> {
        let normalized = cnpj_digits::normalize(query.raw());
        let result = self.validator.validate(&normalized);

        let formatted = (normalized.len() == CNPJ_LENGTH).then(|| cnpj_digits::format(&normalized));

        tracing::debug!(
            cnpj = %normalized,
            valid = result.is_valid(),
            reason = result.reason().map(|reason| reason.as_str()),
            "tax id validated"
        );

        Ok(TaxIdValidationOutcome {
            result,
            normalized,
            formatted,
        })
    }
}
